use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Missing dependency: {0}")]
    MissingDependency(&'static str),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Sink unavailable: {0}")]
    SinkUnavailable(String),
}
