//! Key equality and key ordering policies.
//!
//! Grouping and set operators decide key equivalence through an
//! [`EqualityPolicy`]; the ordering operator compares keys through an
//! [`OrderingPolicy`]. Both are evaluated over the *projected* key only.
//!
//! Policies are assumed lawful: equality must be an equivalence relation whose
//! `hash_key` agrees with it, and orderings must be total over the keys
//! actually sorted. Nothing here checks that.

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Decides whether two keys are equivalent.
pub trait EqualityPolicy<K: ?Sized> {
    fn equals(&self, a: &K, b: &K) -> bool;

    /// Hash consistent with [`equals`](EqualityPolicy::equals): equal keys
    /// must produce equal hashes.
    fn hash_key(&self, key: &K) -> u64;
}

/// Orders two keys.
pub trait OrderingPolicy<K: ?Sized> {
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Natural equality (`Eq + Hash`) and ordering (`Ord`) of the key type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<K: Eq + Hash + ?Sized> EqualityPolicy<K> for Natural {
    fn equals(&self, a: &K, b: &K) -> bool {
        a == b
    }

    fn hash_key(&self, key: &K) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }
}

impl<K: Ord + ?Sized> OrderingPolicy<K> for Natural {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Ordering for `PartialOrd` keys such as floats.
///
/// Incomparable pairs (NaN) compare as equal; sorting such keys is a caller
/// error and yields an unspecified (but memory-safe) order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartialNatural;

impl<K: PartialOrd + ?Sized> OrderingPolicy<K> for PartialNatural {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.partial_cmp(b).unwrap_or(Ordering::Equal)
    }
}

/// String equality and ordering that ignores letter case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseInsensitive;

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

impl<K: AsRef<str> + ?Sized> EqualityPolicy<K> for CaseInsensitive {
    fn equals(&self, a: &K, b: &K) -> bool {
        folded(a.as_ref()).eq(folded(b.as_ref()))
    }

    fn hash_key(&self, key: &K) -> u64 {
        let mut hasher = DefaultHasher::new();
        for c in folded(key.as_ref()) {
            c.hash(&mut hasher);
        }
        hasher.finish()
    }
}

impl<K: AsRef<str> + ?Sized> OrderingPolicy<K> for CaseInsensitive {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        folded(a.as_ref()).cmp(folded(b.as_ref()))
    }
}

impl<K: ?Sized, E: EqualityPolicy<K> + ?Sized> EqualityPolicy<K> for &E {
    fn equals(&self, a: &K, b: &K) -> bool {
        (**self).equals(a, b)
    }

    fn hash_key(&self, key: &K) -> u64 {
        (**self).hash_key(key)
    }
}

/// Any comparator closure is an ordering policy.
impl<K: ?Sized, F> OrderingPolicy<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
