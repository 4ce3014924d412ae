//! The `Sequence` trait and its combinators.
//!
//! Every combinator consumes `self` and returns a lazy wrapper; nothing runs
//! until `iterate()` is called on the outermost wrapper. Terminals take
//! `&self`, so a pipeline can be evaluated any number of times.

use std::hash::Hash;

use deferq_core::capture::Capture;
use deferq_core::policy::{Dir, EqualityPolicy, Natural, OrderingPolicy};
use deferq_core::types::{Downcast, TypeName};

use crate::convert::{Cast, OfType};
use crate::group::GroupBy;
use crate::lookup::Lookup;
use crate::partition::{Skip, SkipWhile, SkipWhileIndexed, Take, TakeWhile, TakeWhileIndexed};
use crate::set::{Concat, Distinct, Except, Intersect, Union};
use crate::sort::{KeyComparer, Ordered};
use crate::transform::{
    Filter, FilterIndexed, FilterWith, Flatten, Project, ProjectIndexed, ProjectWith,
};
use crate::zip::Zip;

/// Element selector that keeps the element as-is.
pub type Identity<T> = fn(T) -> T;

/// An ordered, lazy, restartable producer of elements.
///
/// Invariants:
/// - Constructing a wrapper never touches the source. Work starts when
///   `iterate` is called; ordering and grouping wrappers buffer their whole
///   input at that point, every other operator streams.
/// - Two iterators returned by `iterate` never interfere with each other.
pub trait Sequence {
    type Item;

    type Iter<'a>: Iterator<Item = Self::Item>
    where
        Self: 'a;

    /// Start a fresh, independent traversal.
    fn iterate(&self) -> Self::Iter<'_>;

    // ---- transform -------------------------------------------------------

    /// Keep the elements for which `predicate` holds, in source order.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Like [`filter`](Sequence::filter), also passing the 0-based position of
    /// the element in the source.
    fn filter_indexed<P>(self, predicate: P) -> FilterIndexed<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item, usize) -> bool,
    {
        FilterIndexed::new(self, predicate)
    }

    /// Filter against a [`Capture`] read at traversal time.
    fn filter_with<C, P>(self, capture: &Capture<C>, predicate: P) -> FilterWith<Self, C, P>
    where
        Self: Sized,
        P: Fn(&C, &Self::Item) -> bool,
    {
        FilterWith::new(self, capture.clone(), predicate)
    }

    /// Map every element, 1:1 and in order.
    fn project<R, F>(self, selector: F) -> Project<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> R,
    {
        Project::new(self, selector)
    }

    fn project_indexed<R, F>(self, selector: F) -> ProjectIndexed<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item, usize) -> R,
    {
        ProjectIndexed::new(self, selector)
    }

    /// Map against a [`Capture`] read at traversal time.
    fn project_with<C, R, F>(self, capture: &Capture<C>, selector: F) -> ProjectWith<Self, C, F>
    where
        Self: Sized,
        F: Fn(&C, Self::Item) -> R,
    {
        ProjectWith::new(self, capture.clone(), selector)
    }

    /// Expand each element into an inner collection and combine every
    /// (outer, inner) pair, outer-major.
    fn flatten<I, R, C, F>(self, collection: C, result: F) -> Flatten<Self, C, F>
    where
        Self: Sized,
        C: Fn(&Self::Item) -> I,
        I: IntoIterator,
        F: Fn(&Self::Item, I::Item) -> R,
    {
        Flatten::new(self, collection, result)
    }

    // ---- ordering --------------------------------------------------------

    /// Stable ascending sort on `key`. Follow with `then_by*` for tie-breaks.
    fn order_by<K, F>(self, key: F) -> Ordered<Self, KeyComparer<F, Natural>>
    where
        Self: Sized,
        F: Fn(&Self::Item) -> K,
        K: Ord,
    {
        Ordered::new(self, KeyComparer::new(key, Natural, Dir::Asc))
    }

    fn order_by_descending<K, F>(self, key: F) -> Ordered<Self, KeyComparer<F, Natural>>
    where
        Self: Sized,
        F: Fn(&Self::Item) -> K,
        K: Ord,
    {
        Ordered::new(self, KeyComparer::new(key, Natural, Dir::Desc))
    }

    fn order_by_using<K, F, P>(
        self,
        key: F,
        policy: P,
        dir: Dir,
    ) -> Ordered<Self, KeyComparer<F, P>>
    where
        Self: Sized,
        F: Fn(&Self::Item) -> K,
        P: OrderingPolicy<K>,
    {
        Ordered::new(self, KeyComparer::new(key, policy, dir))
    }

    // ---- grouping & sets -------------------------------------------------

    /// Group elements by `key`, groups in first-appearance order.
    fn group_by<K, F>(self, key: F) -> GroupBy<Self, F, Identity<Self::Item>, Natural>
    where
        Self: Sized,
        F: Fn(&Self::Item) -> K,
    {
        GroupBy::new(self, key, std::convert::identity as Identity<Self::Item>, Natural)
    }

    /// Group by `key`, storing `element(item)` instead of the item.
    fn group_by_with<K, V, F, E>(self, key: F, element: E) -> GroupBy<Self, F, E, Natural>
    where
        Self: Sized,
        F: Fn(&Self::Item) -> K,
        E: Fn(Self::Item) -> V,
    {
        GroupBy::new(self, key, element, Natural)
    }

    /// Each distinct element once, first occurrence wins.
    fn distinct(self) -> Distinct<Self, Natural>
    where
        Self: Sized,
    {
        Distinct::new(self, Natural)
    }

    /// `self` then `other`, with duplicates removed.
    fn union<B>(self, other: B) -> Union<Self, B, Natural>
    where
        Self: Sized,
        B: Sequence<Item = Self::Item>,
    {
        Union::new(self, other, Natural)
    }

    /// Distinct elements of `self` that also appear in `other`.
    fn intersect<B>(self, other: B) -> Intersect<Self, B, Natural>
    where
        Self: Sized,
        B: Sequence<Item = Self::Item>,
    {
        Intersect::new(self, other, Natural)
    }

    /// Distinct elements of `self` that do not appear in `other`.
    fn except<B>(self, other: B) -> Except<Self, B, Natural>
    where
        Self: Sized,
        B: Sequence<Item = Self::Item>,
    {
        Except::new(self, other, Natural)
    }

    /// `self` followed by `other`, duplicates kept.
    fn concat<B>(self, other: B) -> Concat<Self, B>
    where
        Self: Sized,
        B: Sequence<Item = Self::Item>,
    {
        Concat::new(self, other)
    }

    // ---- partitioning & pairing -----------------------------------------

    /// Drop the first `n` elements; `n <= 0` drops nothing.
    fn skip(self, n: i64) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, n)
    }

    /// Keep at most `n` elements; `n <= 0` keeps nothing.
    fn take(self, n: i64) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, n)
    }

    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        SkipWhile::new(self, predicate)
    }

    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    fn skip_while_indexed<P>(self, predicate: P) -> SkipWhileIndexed<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item, usize) -> bool,
    {
        SkipWhileIndexed::new(self, predicate)
    }

    fn take_while_indexed<P>(self, predicate: P) -> TakeWhileIndexed<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item, usize) -> bool,
    {
        TakeWhileIndexed::new(self, predicate)
    }

    /// Pair the i-th elements of both sequences; stops at the shorter one.
    fn zip<B, R, F>(self, other: B, combiner: F) -> Zip<Self, B, F>
    where
        Self: Sized,
        B: Sequence,
        F: Fn(Self::Item, B::Item) -> R,
    {
        Zip::new(self, other, combiner)
    }

    // ---- conversions -----------------------------------------------------

    /// View every element as `T`; the first element that is not a `T` ends
    /// the traversal with [`Error::TypeMismatch`](crate::Error::TypeMismatch).
    fn cast<T>(self) -> Cast<Self, T>
    where
        Self: Sized,
        Self::Item: Downcast<T> + TypeName,
    {
        Cast::new(self)
    }

    /// Keep only the elements that are a `T`.
    fn of_type<T>(self) -> OfType<Self, T>
    where
        Self: Sized,
        Self::Item: Downcast<T>,
    {
        OfType::new(self)
    }

    // ---- eager terminals -------------------------------------------------

    /// Run the pipeline once and collect the output.
    fn to_vec(&self) -> Vec<Self::Item> {
        self.iterate().collect()
    }

    /// Run the pipeline once into a one-to-many [`Lookup`].
    fn to_lookup<K, V, F, E>(&self, key: F, element: E) -> Lookup<K, V>
    where
        F: Fn(&Self::Item) -> K,
        E: Fn(Self::Item) -> V,
        K: Eq + Hash,
    {
        Lookup::build(self.iterate(), key, element, Natural)
    }

    fn to_lookup_using<K, V, F, E, P>(&self, key: F, element: E, policy: P) -> Lookup<K, V, P>
    where
        F: Fn(&Self::Item) -> K,
        E: Fn(Self::Item) -> V,
        P: EqualityPolicy<K>,
    {
        Lookup::build(self.iterate(), key, element, policy)
    }

    fn count(&self) -> usize {
        self.iterate().count()
    }

    /// Sum `selector(item)` over the sequence.
    fn sum<N, F>(&self, selector: F) -> N
    where
        F: Fn(&Self::Item) -> N,
        N: std::iter::Sum<N>,
    {
        self.iterate().map(|item| selector(&item)).sum()
    }

    fn first(&self) -> Option<Self::Item> {
        self.iterate().next()
    }

    fn any<P>(&self, predicate: P) -> bool
    where
        P: Fn(&Self::Item) -> bool,
    {
        self.iterate().any(|item| predicate(&item))
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;

    type Iter<'a> = S::Iter<'a>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Iter<'_> {
        (**self).iterate()
    }
}
