//! Set algebra: distinct, union, intersect, except, and plain concatenation.
//!
//! All set operators keep the order of their first operand and use the
//! equality policy configured on the operator for both operands.

use std::iter::Chain;

use deferq_core::policy::EqualityPolicy;

use crate::keyset::KeySet;
use crate::traits::Sequence;

pub struct Distinct<S, E> {
    source: S,
    policy: E,
}

impl<S, E> Distinct<S, E> {
    pub(crate) fn new(source: S, policy: E) -> Self {
        Self { source, policy }
    }

    pub fn using<P>(self, policy: P) -> Distinct<S, P> {
        Distinct::new(self.source, policy)
    }
}

impl<S, E> Sequence for Distinct<S, E>
where
    S: Sequence,
    S::Item: Clone,
    E: EqualityPolicy<S::Item>,
{
    type Item = S::Item;

    type Iter<'a> = DistinctIter<'a, S::Iter<'a>, E>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Iter<'_> {
        DistinctIter::new(self.source.iterate(), &self.policy)
    }
}

/// Streams first occurrences; remembers every element it has yielded.
pub struct DistinctIter<'a, I: Iterator, E> {
    inner: I,
    seen: KeySet<I::Item, &'a E>,
}

impl<'a, I, E> DistinctIter<'a, I, E>
where
    I: Iterator,
    E: EqualityPolicy<I::Item>,
{
    fn new(inner: I, policy: &'a E) -> Self {
        Self {
            inner,
            seen: KeySet::new(policy),
        }
    }
}

impl<'a, I, E> Iterator for DistinctIter<'a, I, E>
where
    I: Iterator,
    I::Item: Clone,
    E: EqualityPolicy<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let seen = &mut self.seen;
        self.inner.find(|item| seen.insert(item.clone()))
    }
}

pub struct Union<A, B, E> {
    first: A,
    second: B,
    policy: E,
}

impl<A, B, E> Union<A, B, E> {
    pub(crate) fn new(first: A, second: B, policy: E) -> Self {
        Self {
            first,
            second,
            policy,
        }
    }

    pub fn using<P>(self, policy: P) -> Union<A, B, P> {
        Union::new(self.first, self.second, policy)
    }
}

impl<A, B, E> Sequence for Union<A, B, E>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    A::Item: Clone,
    E: EqualityPolicy<A::Item>,
{
    type Item = A::Item;

    type Iter<'a> = DistinctIter<'a, Chain<A::Iter<'a>, B::Iter<'a>>, E>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Iter<'_> {
        DistinctIter::new(
            self.first.iterate().chain(self.second.iterate()),
            &self.policy,
        )
    }
}

pub struct Intersect<A, B, E> {
    first: A,
    second: B,
    policy: E,
}

impl<A, B, E> Intersect<A, B, E> {
    pub(crate) fn new(first: A, second: B, policy: E) -> Self {
        Self {
            first,
            second,
            policy,
        }
    }

    pub fn using<P>(self, policy: P) -> Intersect<A, B, P> {
        Intersect::new(self.first, self.second, policy)
    }
}

impl<A, B, E> Sequence for Intersect<A, B, E>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    E: EqualityPolicy<A::Item>,
{
    type Item = A::Item;

    type Iter<'a> = IntersectIter<'a, A::Iter<'a>, E>
    where
        Self: 'a;

    /// Materializes `second` into a set, then streams `first`.
    fn iterate(&self) -> Self::Iter<'_> {
        let mut remaining = KeySet::new(&self.policy);
        for item in self.second.iterate() {
            remaining.insert(item);
        }
        #[cfg(feature = "tracing")]
        tracing::trace!("intersect operand materialized");
        IntersectIter {
            inner: self.first.iterate(),
            remaining,
        }
    }
}

pub struct IntersectIter<'a, I: Iterator, E> {
    inner: I,
    /// Elements of the second operand not yet matched. Removing on match
    /// also deduplicates the output.
    remaining: KeySet<I::Item, &'a E>,
}

impl<'a, I, E> Iterator for IntersectIter<'a, I, E>
where
    I: Iterator,
    E: EqualityPolicy<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let remaining = &mut self.remaining;
        self.inner.find(|item| remaining.remove(item))
    }
}

pub struct Except<A, B, E> {
    first: A,
    second: B,
    policy: E,
}

impl<A, B, E> Except<A, B, E> {
    pub(crate) fn new(first: A, second: B, policy: E) -> Self {
        Self {
            first,
            second,
            policy,
        }
    }

    pub fn using<P>(self, policy: P) -> Except<A, B, P> {
        Except::new(self.first, self.second, policy)
    }
}

impl<A, B, E> Sequence for Except<A, B, E>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    A::Item: Clone,
    E: EqualityPolicy<A::Item>,
{
    type Item = A::Item;

    type Iter<'a> = DistinctIter<'a, A::Iter<'a>, E>
    where
        Self: 'a;

    /// Seeds the seen-set with `second`, then streams `first`.
    fn iterate(&self) -> Self::Iter<'_> {
        let mut iter = DistinctIter::new(self.first.iterate(), &self.policy);
        for item in self.second.iterate() {
            iter.seen.insert(item);
        }
        #[cfg(feature = "tracing")]
        tracing::trace!("except operand materialized");
        iter
    }
}

pub struct Concat<A, B> {
    first: A,
    second: B,
}

impl<A, B> Concat<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Sequence for Concat<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;

    type Iter<'a> = Chain<A::Iter<'a>, B::Iter<'a>>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Iter<'_> {
        self.first.iterate().chain(self.second.iterate())
    }
}
