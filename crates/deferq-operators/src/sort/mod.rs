//! Stable multi-key ordering.
//!
//! `Ordered` is the one streaming-hostile operator: each traversal drains the
//! source into a buffer, sorts it, and only then yields. The pipeline stays
//! restartable since the buffer belongs to the traversal, not the operator.

mod comparer;

use deferq_core::policy::{Dir, Natural, OrderingPolicy};

use crate::traits::Sequence;

pub use comparer::{Comparer, KeyComparer, ThenBy};

pub struct Ordered<S, C> {
    source: S,
    comparer: C,
}

impl<S, C> Ordered<S, C> {
    pub(crate) fn new(source: S, comparer: C) -> Self {
        Self { source, comparer }
    }
}

impl<S: Sequence, C> Ordered<S, C> {
    /// Ascending tie-break on `key`.
    pub fn then_by<K, F>(self, key: F) -> Ordered<S, ThenBy<C, KeyComparer<F, Natural>>>
    where
        F: Fn(&S::Item) -> K,
        K: Ord,
    {
        self.then_by_using(key, Natural, Dir::Asc)
    }

    /// Descending tie-break on `key`.
    pub fn then_by_descending<K, F>(
        self,
        key: F,
    ) -> Ordered<S, ThenBy<C, KeyComparer<F, Natural>>>
    where
        F: Fn(&S::Item) -> K,
        K: Ord,
    {
        self.then_by_using(key, Natural, Dir::Desc)
    }

    pub fn then_by_using<K, F, P>(
        self,
        key: F,
        policy: P,
        dir: Dir,
    ) -> Ordered<S, ThenBy<C, KeyComparer<F, P>>>
    where
        F: Fn(&S::Item) -> K,
        P: OrderingPolicy<K>,
    {
        Ordered {
            source: self.source,
            comparer: ThenBy::new(self.comparer, KeyComparer::new(key, policy, dir)),
        }
    }
}

impl<S, C> Sequence for Ordered<S, C>
where
    S: Sequence,
    C: Comparer<S::Item>,
{
    type Item = S::Item;

    type Iter<'a> = std::vec::IntoIter<S::Item>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Iter<'_> {
        let mut buffer: Vec<S::Item> = self.source.iterate().collect();
        #[cfg(feature = "tracing")]
        tracing::trace!(rows = buffer.len(), "ordering buffer filled");
        // `sort_by` is stable: full-key ties keep their source order.
        buffer.sort_by(|a, b| self.comparer.compare(a, b));
        buffer.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::source::from_vec;
    use crate::traits::Sequence;
    use deferq_core::policy::{CaseInsensitive, Dir, PartialNatural};

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        last: &'static str,
        first: &'static str,
        wins: u32,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { last: "Hill", first: "Graham", wins: 14 },
            Row { last: "Clark", first: "Jim", wins: 25 },
            Row { last: "Hill", first: "Damon", wins: 22 },
            Row { last: "Hill", first: "Phil", wins: 3 },
            Row { last: "Brabham", first: "Jack", wins: 14 },
        ]
    }

    #[test]
    fn primary_then_secondary_key() {
        let names = from_vec(rows())
            .order_by(|r| r.last)
            .then_by(|r| r.first)
            .project(|r| format!("{} {}", r.first, r.last))
            .to_vec();
        assert_eq!(
            names,
            vec!["Jack Brabham", "Jim Clark", "Damon Hill", "Graham Hill", "Phil Hill"]
        );
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let firsts = from_vec(rows())
            .order_by(|r| r.last)
            .project(|r| r.first)
            .to_vec();
        // The three Hills keep their source order.
        assert_eq!(firsts, vec!["Jack", "Jim", "Graham", "Damon", "Phil"]);
    }

    #[test]
    fn descending_primary_ascending_secondary() {
        let order = from_vec(rows())
            .order_by_descending(|r| r.wins)
            .then_by(|r| r.last)
            .project(|r| r.last)
            .to_vec();
        assert_eq!(order, vec!["Clark", "Hill", "Brabham", "Hill", "Hill"]);
    }

    #[test]
    fn descending_tie_break() {
        let order = from_vec(rows())
            .order_by(|r| r.last)
            .then_by_descending(|r| r.wins)
            .project(|r| r.first)
            .to_vec();
        assert_eq!(order, vec!["Jack", "Jim", "Damon", "Graham", "Phil"]);
    }

    #[test]
    fn custom_policy_on_projected_key() {
        let s = from_vec(vec!["delta", "Alpha", "charlie", "Bravo"])
            .order_by_using(|s| *s, CaseInsensitive, Dir::Asc);
        assert_eq!(s.to_vec(), vec!["Alpha", "Bravo", "charlie", "delta"]);
    }

    #[test]
    fn partial_keys_sort_with_partial_policy() {
        let s = from_vec(vec![2.5_f64, -1.0, 0.5]).order_by_using(|x| *x, PartialNatural, Dir::Desc);
        assert_eq!(s.to_vec(), vec![2.5, 0.5, -1.0]);
    }

    #[test]
    fn ordering_is_idempotent() {
        let once = from_vec(rows()).order_by(|r| r.last).to_vec();
        let twice = from_vec(rows())
            .order_by(|r| r.last)
            .order_by(|r| r.last)
            .to_vec();
        assert_eq!(once, twice);
    }
}
