//! Hash buckets keyed by an [`EqualityPolicy`].
//!
//! The policy's `hash_key` picks a bucket and `equals` resolves collisions,
//! so custom policies work without the key type implementing `Hash`/`Eq`.

use std::borrow::Borrow;
use std::collections::HashMap;

use deferq_core::policy::EqualityPolicy;

/// Unordered set of elements.
pub(crate) struct KeySet<T, E> {
    buckets: HashMap<u64, Vec<T>>,
    policy: E,
}

impl<T, E: EqualityPolicy<T>> KeySet<T, E> {
    pub(crate) fn new(policy: E) -> Self {
        Self {
            buckets: HashMap::new(),
            policy,
        }
    }

    /// Returns `true` when `item` was not present yet.
    pub(crate) fn insert(&mut self, item: T) -> bool {
        let policy = &self.policy;
        let bucket = self.buckets.entry(policy.hash_key(&item)).or_default();
        if bucket.iter().any(|held| policy.equals(held, &item)) {
            return false;
        }
        bucket.push(item);
        true
    }

    /// Returns `true` when an equal element was present and got removed.
    pub(crate) fn remove(&mut self, item: &T) -> bool {
        let hash = self.policy.hash_key(item);
        let Some(bucket) = self.buckets.get_mut(&hash) else {
            return false;
        };
        match bucket.iter().position(|held| self.policy.equals(held, item)) {
            Some(pos) => {
                bucket.swap_remove(pos);
                true
            }
            None => false,
        }
    }
}

/// Insertion-ordered key table mapping each distinct key to a dense slot.
pub(crate) struct KeyIndex<K, E> {
    keys: Vec<K>,
    buckets: HashMap<u64, Vec<usize>>,
    policy: E,
}

impl<K, E: EqualityPolicy<K>> KeyIndex<K, E> {
    pub(crate) fn new(policy: E) -> Self {
        Self {
            keys: Vec::new(),
            buckets: HashMap::new(),
            policy,
        }
    }

    /// Slot of `key`, allocating the next slot for an unseen key. The flag is
    /// `true` for a fresh slot.
    pub(crate) fn slot(&mut self, key: K) -> (usize, bool) {
        let hash = self.policy.hash_key(&key);
        let bucket = self.buckets.entry(hash).or_default();
        if let Some(&slot) = bucket
            .iter()
            .find(|&&slot| self.policy.equals(&self.keys[slot], &key))
        {
            return (slot, false);
        }
        let slot = self.keys.len();
        bucket.push(slot);
        self.keys.push(key);
        (slot, true)
    }

    /// Slot of a key given in borrowed form.
    ///
    /// The policy must hash `Q` the same way it hashes the owned key.
    pub(crate) fn find<Q>(&self, key: &Q) -> Option<usize>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        E: EqualityPolicy<Q>,
    {
        let hash = EqualityPolicy::<Q>::hash_key(&self.policy, key);
        self.buckets.get(&hash)?.iter().copied().find(|&slot| {
            EqualityPolicy::<Q>::equals(&self.policy, self.keys[slot].borrow(), key)
        })
    }

}

impl<K, E> KeyIndex<K, E> {
    pub(crate) fn keys(&self) -> &[K] {
        &self.keys
    }

    pub(crate) fn into_keys(self) -> Vec<K> {
        self.keys
    }
}
