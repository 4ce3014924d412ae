//! Group-by.

use std::iter::Cloned;
use std::slice;

use deferq_core::policy::EqualityPolicy;

use crate::keyset::KeyIndex;
use crate::traits::Sequence;

/// One key and the members that mapped to it, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<K, T> {
    key: K,
    items: Vec<T>,
}

impl<K, T> Group<K, T> {
    pub fn new(key: K, items: Vec<T>) -> Self {
        Self { key, items }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_parts(self) -> (K, Vec<T>) {
        (self.key, self.items)
    }
}

/// A group is itself a restartable sequence over its members.
impl<K, T: Clone> Sequence for Group<K, T> {
    type Item = T;

    type Iter<'a> = Cloned<slice::Iter<'a, T>>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Iter<'_> {
        self.items.iter().cloned()
    }
}

pub struct GroupBy<S, F, V, E> {
    source: S,
    key: F,
    element: V,
    policy: E,
}

impl<S, F, V, E> GroupBy<S, F, V, E> {
    pub(crate) fn new(source: S, key: F, element: V, policy: E) -> Self {
        Self {
            source,
            key,
            element,
            policy,
        }
    }

    /// Decide key equivalence with `policy` instead.
    pub fn using<P>(self, policy: P) -> GroupBy<S, F, V, P> {
        GroupBy {
            source: self.source,
            key: self.key,
            element: self.element,
            policy,
        }
    }
}

impl<S, F, V, E, K, T> Sequence for GroupBy<S, F, V, E>
where
    S: Sequence,
    F: Fn(&S::Item) -> K,
    V: Fn(S::Item) -> T,
    E: EqualityPolicy<K>,
{
    type Item = Group<K, T>;

    type Iter<'a> = std::vec::IntoIter<Group<K, T>>
    where
        Self: 'a;

    /// Drains the source: a group is complete only once the source is.
    fn iterate(&self) -> Self::Iter<'_> {
        let mut index = KeyIndex::new(&self.policy);
        let mut members: Vec<Vec<T>> = Vec::new();
        for item in self.source.iterate() {
            let (slot, fresh) = index.slot((self.key)(&item));
            if fresh {
                members.push(Vec::new());
            }
            members[slot].push((self.element)(item));
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(groups = members.len(), "group-by built");
        index
            .into_keys()
            .into_iter()
            .zip(members)
            .map(|(key, items)| Group { key, items })
            .collect::<Vec<_>>()
            .into_iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::source::from_vec;
    use crate::traits::Sequence;
    use deferq_core::policy::CaseInsensitive;

    #[test]
    fn groups_in_first_appearance_order() {
        let groups = from_vec(vec![("Senna", "Brazil"), ("Fangio", "Argentina"), ("Piquet", "Brazil")])
            .group_by(|(_, country)| *country)
            .to_vec();
        assert_eq!(groups.len(), 2);
        assert_eq!(*groups[0].key(), "Brazil");
        assert_eq!(groups[0].items(), [("Senna", "Brazil"), ("Piquet", "Brazil")]);
        assert_eq!(*groups[1].key(), "Argentina");
    }

    #[test]
    fn element_selector_projects_members() {
        let groups = from_vec(vec![("Senna", "Brazil"), ("Piquet", "Brazil")])
            .group_by_with(|(_, country)| *country, |(name, _)| name)
            .to_vec();
        assert_eq!(groups[0].items(), ["Senna", "Piquet"]);
    }

    #[test]
    fn none_is_a_distinct_key() {
        let groups = from_vec(vec![Some(1), None, Some(1), None])
            .group_by(|k| *k)
            .project(|g| (*g.key(), g.len()))
            .to_vec();
        assert_eq!(groups, vec![(Some(1), 2), (None, 2)]);
    }

    #[test]
    fn custom_equality_policy() {
        let groups = from_vec(vec!["UK", "uk", "Italy"])
            .group_by(|s| s.to_string())
            .using(CaseInsensitive)
            .project(|g| (g.key().clone(), g.len()))
            .to_vec();
        assert_eq!(groups, vec![("UK".to_string(), 2), ("Italy".to_string(), 1)]);
    }

    #[test]
    fn empty_source_yields_no_groups() {
        let groups = from_vec(Vec::<i32>::new()).group_by(|n| n % 2);
        assert_eq!(groups.count(), 0);
    }

    #[test]
    fn group_is_a_sequence() {
        let group = from_vec(vec![3, 1, 2]).group_by(|_| ()).first().unwrap();
        assert_eq!(group.order_by(|n| *n).to_vec(), vec![1, 2, 3]);
    }
}
