use thiserror::Error;

/// Top-level error type for the mockstream server.
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("configuration error: {0}")]
    Config(String),
}
