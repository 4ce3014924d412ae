#![forbid(unsafe_code)]
//! deferq-data: the Formula-1 champion dataset.
//!
//! Records are parsed from embedded JSON once per process and handed out as
//! borrowed, restartable sequences. Records are immutable after loading.

pub mod entry;
pub mod error;
pub mod model;
pub mod provider;

pub use entry::Entry;
pub use error::{DataError, Result};
pub use model::{ChampionshipResult, Racer, RacerRef};
pub use provider::Formula1;
