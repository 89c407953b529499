use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid condition code: {0:?}")]
    InvalidCode(String),

    #[error("malformed extraction: {0}")]
    MalformedExtraction(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
