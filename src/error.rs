use thiserror::Error;

/// Failures of the bounded front door and the tooling around the core.
///
/// The inference functions themselves never fail.
#[derive(Debug, Error)]
pub enum CardTextError {
    #[error("oracle text is {len} bytes, limit is {max}")]
    InputTooLong { len: usize, max: usize },

    #[error("failed to read card text: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serialization")]
    #[error("failed to encode result: {0}")]
    Json(#[from] serde_json::Error),
}
