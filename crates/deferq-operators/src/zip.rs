//! Pairwise combination of two sequences.

use crate::traits::Sequence;

pub struct Zip<A, B, F> {
    first: A,
    second: B,
    combiner: F,
}

impl<A, B, F> Zip<A, B, F> {
    pub(crate) fn new(first: A, second: B, combiner: F) -> Self {
        Self {
            first,
            second,
            combiner,
        }
    }
}

impl<A, B, F, R> Sequence for Zip<A, B, F>
where
    A: Sequence,
    B: Sequence,
    F: Fn(A::Item, B::Item) -> R,
{
    type Item = R;

    type Iter<'a> = ZipIter<'a, A::Iter<'a>, B::Iter<'a>, F>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Iter<'_> {
        ZipIter {
            first: self.first.iterate(),
            second: self.second.iterate(),
            combiner: &self.combiner,
        }
    }
}

pub struct ZipIter<'a, I, J, F> {
    first: I,
    second: J,
    combiner: &'a F,
}

impl<'a, I, J, F, R> Iterator for ZipIter<'a, I, J, F>
where
    I: Iterator,
    J: Iterator,
    F: Fn(I::Item, J::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        // The second side is not pulled once the first is exhausted.
        let a = self.first.next()?;
        let b = self.second.next()?;
        Some((self.combiner)(a, b))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::source::{from_fn, from_vec};
    use crate::traits::Sequence;

    #[test]
    fn stops_at_shorter_side() {
        let names = from_vec(vec!["Senna", "Prost", "Piquet"]);
        let wins = from_vec(vec![41, 51]);
        let out = names.zip(wins, |n, w| format!("{n}: {w}")).to_vec();
        assert_eq!(out, vec!["Senna: 41", "Prost: 51"]);
    }

    #[test]
    fn does_not_overpull_second_side() {
        let counter = Cell::new(0);
        let pulled = &counter;
        let second = from_fn(move || (0..10).inspect(move |_| pulled.set(pulled.get() + 1)));
        let out = from_vec(vec!['a', 'b']).zip(second, |c, n| (c, n)).to_vec();
        assert_eq!(out, vec![('a', 0), ('b', 1)]);
        assert_eq!(counter.get(), 2);
    }
}
