//! Eagerly built one-to-many maps.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Index;

use deferq_core::policy::{EqualityPolicy, Natural};

use crate::group::Group;
use crate::keyset::KeyIndex;

/// Immutable multi-map from key to the values that mapped to it.
///
/// Built once by [`Sequence::to_lookup`](crate::Sequence::to_lookup); reads
/// never touch the source again. Keys iterate in first-appearance order and
/// each value list keeps source order.
pub struct Lookup<K, V, E = Natural> {
    index: KeyIndex<K, E>,
    values: Vec<Vec<V>>,
}

impl<K, V, E: EqualityPolicy<K>> Lookup<K, V, E> {
    pub(crate) fn build<T, I, F, G>(items: I, key: F, element: G, policy: E) -> Self
    where
        I: Iterator<Item = T>,
        F: Fn(&T) -> K,
        G: Fn(T) -> V,
    {
        let mut index = KeyIndex::new(policy);
        let mut values: Vec<Vec<V>> = Vec::new();
        for item in items {
            let (slot, fresh) = index.slot(key(&item));
            if fresh {
                values.push(Vec::new());
            }
            values[slot].push(element(item));
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(keys = values.len(), "lookup built");
        Self { index, values }
    }

    /// Whether any element mapped to `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized,
        K: Borrow<Q>,
        E: EqualityPolicy<Q>,
    {
        self.index.find(key).is_some()
    }

    /// Values for `key` in source order; empty when the key is absent.
    pub fn get<Q>(&self, key: &Q) -> &[V]
    where
        Q: ?Sized,
        K: Borrow<Q>,
        E: EqualityPolicy<Q>,
    {
        match self.index.find(key) {
            Some(slot) => &self.values[slot],
            None => &[],
        }
    }
}

impl<K, V, E> Lookup<K, V, E> {
    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.index.keys().iter()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> + '_ {
        self.index
            .keys()
            .iter()
            .zip(self.values.iter().map(Vec::as_slice))
    }

    /// Consume the lookup into groups, in key order.
    pub fn into_groups(self) -> Vec<Group<K, V>> {
        self.index
            .into_keys()
            .into_iter()
            .zip(self.values)
            .map(|(key, items)| Group::new(key, items))
            .collect()
    }
}

impl<K, V, E, Q> Index<&Q> for Lookup<K, V, E>
where
    Q: ?Sized,
    K: Borrow<Q>,
    E: EqualityPolicy<K> + EqualityPolicy<Q>,
{
    type Output = [V];

    fn index(&self, key: &Q) -> &[V] {
        self.get(key)
    }
}

impl<K: fmt::Debug, V: fmt::Debug, E> fmt::Debug for Lookup<K, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::source::{from_fn, from_vec};
    use crate::traits::Sequence;
    use deferq_core::policy::CaseInsensitive;

    fn pairs() -> Vec<(&'static str, &'static str)> {
        vec![
            ("Williams", "Jones"),
            ("McLaren", "Senna"),
            ("Williams", "Piquet"),
            ("Williams", "Mansell"),
        ]
    }

    #[test]
    fn values_keep_source_order() {
        let lookup = from_vec(pairs()).to_lookup(|(car, _)| car.to_string(), |(_, name)| name);
        assert!(lookup.contains("Williams"));
        assert_eq!(lookup.get("Williams"), ["Jones", "Piquet", "Mansell"]);
        assert_eq!(&lookup["McLaren"], ["Senna"]);
        assert_eq!(lookup.len(), 2);
    }

    #[test]
    fn absent_key_is_empty_not_an_error() {
        let lookup = from_vec(pairs()).to_lookup(|(car, _)| car.to_string(), |(_, name)| name);
        assert!(!lookup.contains("Ferrari"));
        assert!(lookup.get("Ferrari").is_empty());
    }

    #[test]
    fn keys_in_first_appearance_order() {
        let lookup = from_vec(pairs()).to_lookup(|(car, _)| *car, |(_, name)| name);
        let keys: Vec<_> = lookup.keys().copied().collect();
        assert_eq!(keys, vec!["Williams", "McLaren"]);
    }

    #[test]
    fn custom_policy_lookup() {
        let lookup = from_vec(pairs()).to_lookup_using(
            |(car, _)| car.to_string(),
            |(_, name)| name,
            CaseInsensitive,
        );
        assert_eq!(lookup.get("WILLIAMS").len(), 3);
    }

    #[test]
    fn into_groups_matches_iteration() {
        let lookup = from_vec(pairs()).to_lookup(|(car, _)| *car, |(_, name)| name);
        let groups = lookup.into_groups();
        assert_eq!(groups[1].key(), &"McLaren");
        assert_eq!(groups[1].items(), ["Senna"]);
    }

    #[test]
    fn custom_policy_keys_iter_and_groups() {
        let lookup = from_vec(vec![
            ("Williams", "Jones"),
            ("mclaren", "Senna"),
            ("WILLIAMS", "Piquet"),
            ("McLaren", "Prost"),
        ])
        .to_lookup_using(|(car, _)| car.to_string(), |(_, name)| name, CaseInsensitive);

        let keys: Vec<_> = lookup.keys().cloned().collect();
        assert_eq!(keys, vec!["Williams", "mclaren"]);

        let rows: Vec<_> = lookup.iter().map(|(k, v)| (k.as_str(), v.len())).collect();
        assert_eq!(rows, vec![("Williams", 2), ("mclaren", 2)]);
        assert_eq!(
            format!("{lookup:?}"),
            r#"{"Williams": ["Jones", "Piquet"], "mclaren": ["Senna", "Prost"]}"#
        );

        let groups = lookup.into_groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].items(), ["Jones", "Piquet"]);
        assert_eq!(groups[1].items(), ["Senna", "Prost"]);
    }

    #[test]
    fn reads_never_touch_the_source_again() {
        let calls = Cell::new(0);
        let source = from_fn(|| {
            calls.set(calls.get() + 1);
            vec![("a", 1), ("b", 2), ("a", 3)]
        });
        let lookup = source.to_lookup(|(k, _)| *k, |(_, v)| v);
        assert_eq!(calls.get(), 1);

        for _ in 0..3 {
            assert_eq!(lookup.get("a"), [1, 3]);
            assert!(lookup.contains("b"));
            assert!(lookup.get("zz").is_empty());
            assert_eq!(&lookup["b"], [2]);
        }
        assert_eq!(calls.get(), 1);
    }
}
