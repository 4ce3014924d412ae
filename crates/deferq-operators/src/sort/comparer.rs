//! Element comparers built from key selectors.

use std::cmp::Ordering;

use deferq_core::policy::{Dir, OrderingPolicy};

/// Total order over whole elements, as used by [`Ordered`](super::Ordered).
pub trait Comparer<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Compares elements by a projected key under an ordering policy.
///
/// The key selector runs on both operands for every comparison.
pub struct KeyComparer<F, P> {
    key: F,
    policy: P,
    dir: Dir,
}

impl<F, P> KeyComparer<F, P> {
    pub fn new(key: F, policy: P, dir: Dir) -> Self {
        Self { key, policy, dir }
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }
}

impl<T, K, F, P> Comparer<T> for KeyComparer<F, P>
where
    F: Fn(&T) -> K,
    P: OrderingPolicy<K>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        let (ka, kb) = ((self.key)(a), (self.key)(b));
        self.dir.apply(self.policy.compare(&ka, &kb))
    }
}

/// `primary`, falling back to `secondary` on ties.
pub struct ThenBy<A, B> {
    primary: A,
    secondary: B,
}

impl<A, B> ThenBy<A, B> {
    pub fn new(primary: A, secondary: B) -> Self {
        Self { primary, secondary }
    }
}

impl<T, A, B> Comparer<T> for ThenBy<A, B>
where
    A: Comparer<T>,
    B: Comparer<T>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.primary
            .compare(a, b)
            .then_with(|| self.secondary.compare(a, b))
    }
}
