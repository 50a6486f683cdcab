//! Fixed-width text rendering for listings, search results and report cards.
//!
//! Every function returns a complete block (each line indented and
//! newline-terminated) so handlers can print it in one write.

use crate::console::INDENT;
use crate::domain::{CourseResult, Decimal, ReportCard, StudentMatch, StudentSummary};
use std::fmt::Write;

/// Shown wherever a grade column or the CGPA has no value.
pub const PLACEHOLDER: &str = "—";

const STUDENT_RULE_WIDTH: usize = 85;
const REPORT_RULE_WIDTH: usize = 75;

fn rule(width: usize) -> String {
    "─".repeat(width)
}

fn or_placeholder(value: Option<String>) -> String {
    value.unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// All-students table with a trailing record count.
pub fn student_table(students: &[StudentSummary]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\n{INDENT}{:<5} {:<22} {:<14} {:<25} {:<6} {}",
        "ID", "Name", "Enroll No", "Dept", "Year", "Status"
    );
    let _ = writeln!(out, "{INDENT}{}", rule(STUDENT_RULE_WIDTH));
    for s in students {
        let _ = writeln!(
            out,
            "{INDENT}{:<5} {:<22} {:<14} {:<25} {:<6} {}",
            s.id, s.name, s.enrollment_no, s.dept_name, s.join_year, s.status
        );
    }
    let _ = writeln!(out, "{INDENT}Total: {} record(s)", students.len());
    out
}

/// One labelled detail block per search match.
pub fn search_results(matches: &[StudentMatch]) -> String {
    let mut out = String::new();
    for m in matches {
        let _ = writeln!(out, "\n{INDENT}ID         : {}", m.id);
        let _ = writeln!(out, "{INDENT}Name       : {}", m.name);
        let _ = writeln!(out, "{INDENT}Enroll No  : {}", m.enrollment_no);
        let _ = writeln!(out, "{INDENT}Email      : {}", m.email);
        let _ = writeln!(out, "{INDENT}Phone      : {}", m.phone);
        let _ = writeln!(out, "{INDENT}Department : {}", m.dept_name);
        let _ = writeln!(out, "{INDENT}Status     : {}", m.status);
    }
    out
}

fn course_line(out: &mut String, course: &CourseResult) {
    let marks = or_placeholder(course.marks_obtained.map(|d| d.to_string()));
    let grade = or_placeholder(course.grade_letter.clone());
    let gp = or_placeholder(course.grade_point.map(|d| d.to_string()));
    let _ = writeln!(
        out,
        "{INDENT}{:<35} {:<10} {:<4} {:<5} {:<8} {:<5} {}",
        course.course_name, course.course_code, course.credits, course.semester, marks, grade, gp
    );
}

/// CGPA shown with two decimals, or the placeholder when nothing is graded.
pub fn cgpa_text(cgpa: Option<Decimal>) -> String {
    or_placeholder(cgpa.map(|d| d.to_fixed(2)))
}

/// Per-course table followed by the CGPA line.
pub fn report_card(card: &ReportCard) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\n{INDENT}{:<35} {:<10} {:<4} {:<5} {:<8} {:<5} {}",
        "Course", "Code", "Cr", "Sem", "Marks", "Grd", "GP"
    );
    let _ = writeln!(out, "{INDENT}{}", rule(REPORT_RULE_WIDTH));
    for course in &card.courses {
        course_line(&mut out, course);
    }
    let _ = writeln!(out, "\n{INDENT}CGPA: {}", cgpa_text(card.cgpa));
    out
}
