#![forbid(unsafe_code)]
//! deferq-samples: named queries over the Formula-1 dataset.
//!
//! Each sample is a plain function from the dataset and a [`QueryConfig`] to
//! display lines. The [`Registry`] maps command names to those functions.
//!
//! [`QueryConfig`]: deferq_core::config::QueryConfig

pub mod conversion;
pub mod error;
pub mod filtering;
pub mod generation;
pub mod grouping;
pub mod paging;
pub mod registry;
pub mod sets;

pub use error::{Result, SampleError};
pub use registry::{Registry, Sample, SampleFn};

/// `usize` → operator count, saturating.
pub(crate) fn count_arg(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
