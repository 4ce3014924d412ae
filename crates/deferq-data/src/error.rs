use thiserror::Error;

pub type Result<T> = std::result::Result<T, DataError>;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("dataset parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A racer record that breaks the dataset rules.
    #[error("invalid record for {racer}: {reason}")]
    Invariant { racer: String, reason: String },
}
