use thiserror::Error;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed operator parameters, reported by the call that builds the operator.
    #[error("invalid argument to {operator}: {reason}")]
    InvalidArgument {
        operator: &'static str,
        reason: String,
    },

    /// An element of an untyped collection could not be viewed as the target type.
    #[error("type mismatch at position {position}: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
        position: usize,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn invalid_argument(operator: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            operator,
            reason: reason.into(),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Config(e.to_string())
    }
}
