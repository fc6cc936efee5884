use thiserror::Error;

/// Error type for fluent-postgres operations
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for fluent-postgres operations
pub type Result<T> = std::result::Result<T, DriverError>;
