use student_records::config::Config;
use student_records::db::{init_db, Database, Repository};
use student_records::domain::{NewStudent, StudentId, StudentStatus};
use tempfile::TempDir;

async fn setup_test_db() -> (Database, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config {
        database_path: temp_dir
            .path()
            .join("test.db")
            .to_string_lossy()
            .to_string(),
        busy_timeout_ms: 5000,
        auto_migrate: true,
    };
    let db = init_db(&config).await.expect("init_db failed");

    let mut conn = db.connect().await.expect("connect failed");
    sqlx::query(
        "INSERT INTO departments (dept_id, dept_name) VALUES (1, 'Computer Science'), (2, 'Physics')",
    )
    .execute(&mut conn)
    .await
    .unwrap();

    (db, temp_dir)
}

fn ada() -> NewStudent {
    NewStudent {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.org".to_string(),
        phone: "555-0100".to_string(),
        dob: "1815-12-10".to_string(),
        gender: "Female".to_string(),
        dept_id: 1,
        enrollment_no: "CS2021-001".to_string(),
        join_year: 2021,
        address: "12 St James's Square, London".to_string(),
    }
}

fn marie() -> NewStudent {
    NewStudent {
        first_name: "Marie".to_string(),
        last_name: "Curie".to_string(),
        email: "marie@example.org".to_string(),
        phone: "555-0142".to_string(),
        dob: "1867-11-07".to_string(),
        gender: "Female".to_string(),
        dept_id: 2,
        enrollment_no: "PH2020-007".to_string(),
        join_year: 2020,
        address: "36 Quai de Béthune, Paris".to_string(),
    }
}

#[tokio::test]
async fn test_added_student_is_preserved_verbatim() {
    let (db, _temp) = setup_test_db().await;
    let mut repo = Repository::open(&db).await.unwrap();

    let new = ada();
    let id = repo.insert_student(&new).await.expect("insert failed");
    let stored = repo.get_student(id).await.unwrap().expect("student missing");
    repo.close().await;

    assert_eq!(stored.id, id);
    assert_eq!(stored.first_name, new.first_name);
    assert_eq!(stored.last_name, new.last_name);
    assert_eq!(stored.email, new.email);
    assert_eq!(stored.phone, new.phone);
    assert_eq!(stored.dob, new.dob);
    assert_eq!(stored.gender, new.gender);
    assert_eq!(stored.dept_id, new.dept_id);
    assert_eq!(stored.enrollment_no, new.enrollment_no);
    assert_eq!(stored.join_year, new.join_year);
    assert_eq!(stored.address, new.address);
    assert_eq!(stored.status, StudentStatus::Active);
}

#[tokio::test]
async fn test_generated_ids_increase() {
    let (db, _temp) = setup_test_db().await;
    let mut repo = Repository::open(&db).await.unwrap();

    let first = repo.insert_student(&ada()).await.unwrap();
    let second = repo.insert_student(&marie()).await.unwrap();
    assert!(second > first);

    let listed = repo.list_students().await.unwrap();
    let ids: Vec<StudentId> = listed.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first, second]);
    assert_eq!(listed[0].name, "Ada Lovelace");
    assert_eq!(listed[1].dept_name, "Physics");
}

#[tokio::test]
async fn test_search_matches_names_and_exact_enrollment_no() {
    let (db, _temp) = setup_test_db().await;
    let mut repo = Repository::open(&db).await.unwrap();
    let ada_id = repo.insert_student(&ada()).await.unwrap();
    let marie_id = repo.insert_student(&marie()).await.unwrap();

    let by_last = repo.search_students("love").await.unwrap();
    assert_eq!(by_last.len(), 1);
    assert_eq!(by_last[0].id, ada_id);

    let by_first = repo.search_students("ari").await.unwrap();
    assert_eq!(by_first.len(), 1);
    assert_eq!(by_first[0].id, marie_id);
    assert_eq!(by_first[0].dept_name, "Physics");

    let by_enrollment = repo.search_students("PH2020-007").await.unwrap();
    assert_eq!(by_enrollment.len(), 1);
    assert_eq!(by_enrollment[0].id, marie_id);

    // Enrollment numbers only match exactly.
    assert!(repo.search_students("PH2020").await.unwrap().is_empty());
    assert!(repo.search_students("Hopper").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_changes_only_contact_fields() {
    let (db, _temp) = setup_test_db().await;
    let mut repo = Repository::open(&db).await.unwrap();
    let id = repo.insert_student(&ada()).await.unwrap();
    let before = repo.get_student(id).await.unwrap().unwrap();

    let rows = repo
        .update_contact(id, "555-0999", "Ockham Park, Surrey")
        .await
        .unwrap();
    assert_eq!(rows, 1);

    let after = repo.get_student(id).await.unwrap().unwrap();
    assert_eq!(after.phone, "555-0999");
    assert_eq!(after.address, "Ockham Park, Surrey");
    assert_eq!(after.first_name, before.first_name);
    assert_eq!(after.email, before.email);
    assert_eq!(after.dob, before.dob);
    assert_eq!(after.enrollment_no, before.enrollment_no);
    assert_eq!(after.join_year, before.join_year);
    assert_eq!(after.status, before.status);
    assert_eq!(after.created_at, before.created_at);
}

#[tokio::test]
async fn test_update_unknown_id_affects_nothing() {
    let (db, _temp) = setup_test_db().await;
    let mut repo = Repository::open(&db).await.unwrap();

    let rows = repo
        .update_contact(StudentId::new(999), "555-0000", "Nowhere")
        .await
        .unwrap();
    assert_eq!(rows, 0);
}

#[tokio::test]
async fn test_soft_delete_only_changes_status() {
    let (db, _temp) = setup_test_db().await;
    let mut repo = Repository::open(&db).await.unwrap();
    let id = repo.insert_student(&ada()).await.unwrap();
    let before = repo.get_student(id).await.unwrap().unwrap();

    repo.set_status(id, StudentStatus::Dropped).await.unwrap();

    let after = repo.get_student(id).await.unwrap().expect("row must survive");
    assert_eq!(after.status, StudentStatus::Dropped);
    assert_eq!(after.phone, before.phone);
    assert_eq!(after.address, before.address);
    assert_eq!(after.updated_at, before.updated_at);
    assert_eq!(repo.list_students().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_hard_delete_removes_row_and_enrollments() {
    let (db, _temp) = setup_test_db().await;
    let mut repo = Repository::open(&db).await.unwrap();
    let id = repo.insert_student(&ada()).await.unwrap();
    repo.close().await;

    let mut conn = db.connect().await.unwrap();
    sqlx::query(
        "INSERT INTO courses (course_id, course_name, course_code, credits, semester)
         VALUES (1, 'Analytical Engines', 'CS100', 3, 1)",
    )
    .execute(&mut conn)
    .await
    .unwrap();
    sqlx::query("INSERT INTO enrollments (enrollment_id, student_id, course_id) VALUES (1, ?, 1)")
        .bind(id.as_i64())
        .execute(&mut conn)
        .await
        .unwrap();
    sqlx::query(
        "INSERT INTO grades (enrollment_id, marks_obtained, grade_letter, grade_point) VALUES (1, 95, 'A+', 10)",
    )
    .execute(&mut conn)
    .await
    .unwrap();

    let mut repo = Repository::open(&db).await.unwrap();
    assert_eq!(repo.delete_student(id).await.unwrap(), 1);
    assert!(repo.get_student(id).await.unwrap().is_none());
    assert!(repo.report_card(id).await.unwrap().courses.is_empty());

    let remaining: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM grades")
        .fetch_one(&mut conn)
        .await
        .unwrap();
    assert_eq!(remaining.0, 0);
}
