use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("{field} must be a whole number (got '{value}')")]
    InvalidInput { field: String, value: String },
    #[error("end of input")]
    EndOfInput,
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn invalid_input(field: &str, value: &str) -> Self {
        AppError::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}
