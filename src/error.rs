use thiserror::Error;

/// Custom error types for reelfind
#[derive(Debug, Error)]
pub enum ReelfindError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid search endpoint: {0}")]
    Endpoint(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
