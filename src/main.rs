use std::io;
use student_records::{config::Config, db::init_db, Console, Session};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Tracing goes to stderr; stdout belongs to the menu
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_writer(io::stderr)
        .init();

    dotenvy::dotenv().ok();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = match init_db(&config).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Failed to initialize database: {}", e);
            std::process::exit(1);
        }
    };

    let console = Console::new(io::stdin().lock(), io::stdout());
    let mut session = Session::new(db, console);

    if let Err(e) = session.run().await {
        eprintln!("Session error: {}", e);
        std::process::exit(1);
    }
}
