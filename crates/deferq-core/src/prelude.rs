//! Convenient re-exports for downstream crates.

pub use crate::capture::Capture;
pub use crate::config::{ConfigOverrides, QueryConfig};
pub use crate::error::{Error, Result};
pub use crate::policy::{
    CaseInsensitive, Dir, EqualityPolicy, Natural, OrderingPolicy, PartialNatural,
};
pub use crate::types::{Downcast, Scalar, TypeName};
