use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid RIASEC letter: {0:?}")]
    InvalidRiasecLetter(char),

    #[error("RIASEC code may hold at most 3 letters, got {0:?}")]
    RiasecCodeTooLong(String),
}
