//! Error types for the greeter driver

#[derive(Debug, thiserror::Error)]
pub enum GreeterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown session: {0}")]
    UnknownSession(String),

    #[error("Usage: {0}")]
    Usage(String),
}
