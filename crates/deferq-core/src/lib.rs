#![forbid(unsafe_code)]
//! deferq-core: shared vocabulary for the deferq query engine.
//!
//! Holds the error taxonomy, the equality/ordering policies used by grouping,
//! set and sort operators, the closed `Scalar` value type for untyped
//! collections, the `Capture` cell for late-bound query parameters and the
//! `QueryConfig` knobs read by the sample layer.
//!
//! No operators live here; see `deferq-operators`.

pub mod capture;
pub mod config;
pub mod error;
pub mod policy;
pub mod prelude;
pub mod types;

pub use capture::Capture;
pub use config::{ConfigOverrides, QueryConfig};
pub use error::{Error, Result};
pub use policy::{CaseInsensitive, Dir, EqualityPolicy, Natural, OrderingPolicy, PartialNatural};
pub use types::{Downcast, Scalar, TypeName};
