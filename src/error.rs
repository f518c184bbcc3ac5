use thiserror::Error;

/// The question source could not be read or understood.
///
/// Callers are expected to degrade: a session started against an unavailable
/// source simply has no questions.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("question data unavailable: {0}")]
    Unavailable(#[from] std::io::Error),
    #[error("malformed question data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Failure while writing the persisted score blob.
///
/// Reads never produce this; missing or corrupt stored data loads as an
/// empty list instead.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("failed to encode score data: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to write score data: {0}")]
    Write(#[source] std::io::Error),
}
