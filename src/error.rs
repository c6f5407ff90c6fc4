use thiserror::Error;

/// Errors visible to callers of the spell-check pipeline.
///
/// Misspelled words are not errors; they only drive book rejection.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid mode {0:?}: must be one of \"simple\", \"complex\"")]
    InvalidMode(String),

    #[error("dictionary unavailable: {0}")]
    ResourceUnavailable(String),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
