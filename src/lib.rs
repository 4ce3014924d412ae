//! deferq: composable, deferred-execution sequence queries.
//!
//! Facade over the workspace crates. Most users only need the prelude:
//!
//! ```
//! use deferq::prelude::*;
//!
//! let evens = from_vec((1..=10).collect::<Vec<i32>>()).filter(|n| n % 2 == 0);
//! assert_eq!(evens.to_vec(), vec![2, 4, 6, 8, 10]);
//! assert_eq!(evens.count(), 5);
//! ```

pub use deferq_core as core;
pub use deferq_data as data;
pub use deferq_operators as operators;
pub use deferq_samples as samples;

pub mod prelude {
    pub use deferq_core::prelude::*;
    pub use deferq_operators::{
        empty, from_fn, from_slice, from_vec, once, range, repeat, Group, Lookup, Sequence,
    };
}
