//! Sequence sources: owned and borrowed collections, iterator factories, and
//! one-shot iterators.

use std::cell::RefCell;
use std::iter::Cloned;
use std::slice;

use crate::traits::Sequence;

/// Owned collection; every traversal clones the elements out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FromVec<T> {
    items: Vec<T>,
}

pub fn from_vec<T: Clone>(items: Vec<T>) -> FromVec<T> {
    FromVec { items }
}

impl<T> FromVec<T> {
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> Sequence for FromVec<T> {
    type Item = T;

    type Iter<'a> = Cloned<slice::Iter<'a, T>>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Iter<'_> {
        self.items.iter().cloned()
    }
}

impl<T> FromIterator<T> for FromVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        FromVec {
            items: iter.into_iter().collect(),
        }
    }
}

/// Borrowed collection; the owner must outlive the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct FromSlice<'s, T> {
    items: &'s [T],
}

pub fn from_slice<T: Clone>(items: &[T]) -> FromSlice<'_, T> {
    FromSlice { items }
}

impl<'s, T: Clone> Sequence for FromSlice<'s, T> {
    type Item = T;

    type Iter<'a> = Cloned<slice::Iter<'s, T>>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Iter<'_> {
        self.items.iter().cloned()
    }
}

/// Restartable source backed by an iterator factory; each traversal calls
/// the factory again.
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F> {
    factory: F,
}

pub fn from_fn<I, F>(factory: F) -> FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    FromFn { factory }
}

impl<F, I> Sequence for FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    type Item = I::Item;

    type Iter<'a> = I::IntoIter
    where
        Self: 'a;

    fn iterate(&self) -> Self::Iter<'_> {
        (self.factory)().into_iter()
    }
}

/// Wraps a single-consumption iterator.
///
/// Only the first traversal sees elements; every later `iterate()` yields an
/// empty traversal. Pipelines over a `Once` are therefore not restartable.
#[derive(Debug)]
pub struct Once<I> {
    inner: RefCell<Option<I>>,
}

pub fn once<I: IntoIterator>(iter: I) -> Once<I::IntoIter> {
    Once {
        inner: RefCell::new(Some(iter.into_iter())),
    }
}

impl<I> Once<I> {
    /// Whether the wrapped iterator has already been handed out.
    pub fn is_consumed(&self) -> bool {
        self.inner.borrow().is_none()
    }
}

impl<I: Iterator> Sequence for Once<I> {
    type Item = I::Item;

    type Iter<'a> = std::iter::Flatten<std::option::IntoIter<I>>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Iter<'_> {
        let taken = self.inner.borrow_mut().take();
        #[cfg(feature = "tracing")]
        if taken.is_none() {
            tracing::trace!("one-shot source iterated again; yielding nothing");
        }
        taken.into_iter().flatten()
    }
}
