use deferq_data::DataError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SampleError>;

#[derive(Debug, Error)]
pub enum SampleError {
    #[error(transparent)]
    Query(#[from] deferq_core::Error),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error("unknown sample '{0}' (try `deferq list`)")]
    UnknownSample(String),
}
