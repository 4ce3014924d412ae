#![forbid(unsafe_code)]
//! deferq-operators: composable, deferred-execution sequence operators.
//!
//! Design intent:
//! - A [`Sequence`] is a restartable producer: every `iterate()` call is an
//!   independent traversal that re-runs the pipeline from its source.
//! - Building a pipeline performs no element work. Only `order_by`,
//!   `group_by`, and the second operand of `intersect`/`except` buffer, and
//!   they do so inside `iterate()`, never at construction.
//! - Eager terminals (`to_vec`, `to_lookup`, `count`, ...) take `&self` and
//!   traverse once.
//! - Evaluation is single-threaded and pull-based; dropping an iterator early
//!   is always safe.

mod keyset;

pub mod convert;
pub mod generate;
pub mod group;
pub mod lookup;
pub mod partition;
pub mod set;
pub mod sort;
pub mod source;
pub mod traits;
pub mod transform;
pub mod zip;

pub use deferq_core::error::{Error, Result};
pub use generate::{empty, range, repeat};
pub use group::Group;
pub use lookup::Lookup;
pub use sort::{Comparer, Ordered};
pub use source::{from_fn, from_slice, from_vec, once};
pub use traits::Sequence;
