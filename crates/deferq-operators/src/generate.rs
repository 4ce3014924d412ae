//! Pure producers. Every generator here is restartable and validates its
//! arguments when it is built, before any traversal.

use std::marker::PhantomData;

use deferq_core::error::{Error, Result};

use crate::traits::Sequence;

/// `count` consecutive integers starting at `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    bounds: std::ops::Range<i64>,
}

pub fn range(start: i64, count: i64) -> Result<Range> {
    if count < 0 {
        return Err(Error::invalid_argument(
            "range",
            format!("count must not be negative, got {count}"),
        ));
    }
    let end = start.checked_add(count).ok_or_else(|| {
        Error::invalid_argument("range", format!("{start} + {count} overflows i64"))
    })?;
    Ok(Range { bounds: start..end })
}

impl Range {
    pub fn len(&self) -> usize {
        usize::try_from(self.bounds.end.abs_diff(self.bounds.start)).unwrap_or(usize::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }
}

impl Sequence for Range {
    type Item = i64;

    type Iter<'a> = std::ops::Range<i64>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Iter<'_> {
        self.bounds.clone()
    }
}

/// Sequence that never yields.
pub struct Empty<T> {
    marker: PhantomData<fn() -> T>,
}

pub fn empty<T>() -> Empty<T> {
    Empty {
        marker: PhantomData,
    }
}

impl<T> Sequence for Empty<T> {
    type Item = T;

    type Iter<'a> = std::iter::Empty<T>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Iter<'_> {
        std::iter::empty()
    }
}

/// `value` exactly `count` times.
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
    count: usize,
}

pub fn repeat<T: Clone>(value: T, count: i64) -> Result<Repeat<T>> {
    let count = usize::try_from(count).map_err(|_| {
        Error::invalid_argument("repeat", format!("count must not be negative, got {count}"))
    })?;
    Ok(Repeat { value, count })
}

impl<T: Clone> Sequence for Repeat<T> {
    type Item = T;

    type Iter<'a> = std::iter::Take<std::iter::Repeat<T>>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Iter<'_> {
        std::iter::repeat(self.value.clone()).take(self.count)
    }
}
