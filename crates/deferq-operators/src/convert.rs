//! Run-time type views over untyped collections.

use std::marker::PhantomData;

use deferq_core::error::{Error, Result};
use deferq_core::types::{Downcast, TypeName};

use crate::traits::Sequence;

/// Views every element as `T`.
///
/// Yields `Ok(T)` per element; the first element that is not a `T` is
/// reported as `Err(TypeMismatch)` and ends the traversal. Nothing is checked
/// until iteration reaches the element.
pub struct Cast<S, T> {
    source: S,
    target: PhantomData<fn() -> T>,
}

impl<S, T> Cast<S, T> {
    pub(crate) fn new(source: S) -> Self {
        Self {
            source,
            target: PhantomData,
        }
    }
}

impl<S, T> Sequence for Cast<S, T>
where
    S: Sequence,
    S::Item: Downcast<T> + TypeName,
{
    type Item = Result<T>;

    type Iter<'a> = CastIter<S::Iter<'a>, T>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Iter<'_> {
        CastIter {
            inner: self.source.iterate(),
            position: 0,
            failed: false,
            target: PhantomData,
        }
    }
}

pub struct CastIter<I, T> {
    inner: I,
    position: usize,
    failed: bool,
    target: PhantomData<fn() -> T>,
}

impl<I, T> Iterator for CastIter<I, T>
where
    I: Iterator,
    I::Item: Downcast<T> + TypeName,
{
    type Item = Result<T>;

    fn next(&mut self) -> Option<Result<T>> {
        if self.failed {
            return None;
        }
        let item = self.inner.next()?;
        let position = self.position;
        self.position += 1;
        match Downcast::<T>::downcast(item) {
            Ok(value) => Some(Ok(value)),
            Err(other) => {
                self.failed = true;
                #[cfg(feature = "tracing")]
                tracing::debug!(position, actual = other.type_name(), "cast failed");
                Some(Err(Error::TypeMismatch {
                    expected: <I::Item as Downcast<T>>::TARGET,
                    actual: other.type_name(),
                    position,
                }))
            }
        }
    }
}

/// Keeps only the elements that are a `T`; never fails.
pub struct OfType<S, T> {
    source: S,
    target: PhantomData<fn() -> T>,
}

impl<S, T> OfType<S, T> {
    pub(crate) fn new(source: S) -> Self {
        Self {
            source,
            target: PhantomData,
        }
    }
}

impl<S, T> Sequence for OfType<S, T>
where
    S: Sequence,
    S::Item: Downcast<T>,
{
    type Item = T;

    type Iter<'a> = std::iter::FilterMap<S::Iter<'a>, fn(S::Item) -> Option<T>>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Iter<'_> {
        let keep: fn(S::Item) -> Option<T> = |item| Downcast::<T>::downcast(item).ok();
        self.source.iterate().filter_map(keep)
    }
}
