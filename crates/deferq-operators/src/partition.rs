//! Positional and predicate-driven partitioning.

use crate::traits::Sequence;

/// Counts arrive as `i64` so negative values are accepted; they act as 0.
fn clamp_count(n: i64) -> usize {
    usize::try_from(n.max(0)).unwrap_or(usize::MAX)
}

pub struct Skip<S> {
    source: S,
    count: usize,
}

impl<S> Skip<S> {
    pub(crate) fn new(source: S, n: i64) -> Self {
        Self {
            source,
            count: clamp_count(n),
        }
    }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;

    type Iter<'a> = std::iter::Skip<S::Iter<'a>>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Iter<'_> {
        self.source.iterate().skip(self.count)
    }
}

pub struct Take<S> {
    source: S,
    count: usize,
}

impl<S> Take<S> {
    pub(crate) fn new(source: S, n: i64) -> Self {
        Self {
            source,
            count: clamp_count(n),
        }
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;

    type Iter<'a> = std::iter::Take<S::Iter<'a>>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Iter<'_> {
        self.source.iterate().take(self.count)
    }
}

pub struct SkipWhile<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> SkipWhile<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> Sequence for SkipWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    type Iter<'a> = std::iter::SkipWhile<S::Iter<'a>, &'a P>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Iter<'_> {
        self.source.iterate().skip_while(&self.predicate)
    }
}

pub struct TakeWhile<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> TakeWhile<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    type Iter<'a> = std::iter::TakeWhile<S::Iter<'a>, &'a P>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Iter<'_> {
        self.source.iterate().take_while(&self.predicate)
    }
}

pub struct SkipWhileIndexed<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> SkipWhileIndexed<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> Sequence for SkipWhileIndexed<S, P>
where
    S: Sequence,
    P: Fn(&S::Item, usize) -> bool,
{
    type Item = S::Item;

    type Iter<'a> = SkipWhileIndexedIter<'a, S::Iter<'a>, P>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Iter<'_> {
        SkipWhileIndexedIter {
            inner: self.source.iterate(),
            index: 0,
            skipping: true,
            predicate: &self.predicate,
        }
    }
}

pub struct SkipWhileIndexedIter<'a, I, P> {
    inner: I,
    index: usize,
    /// Cleared by the first element that fails the predicate.
    skipping: bool,
    predicate: &'a P,
}

impl<'a, I, P> Iterator for SkipWhileIndexedIter<'a, I, P>
where
    I: Iterator,
    P: Fn(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if !self.skipping {
            return self.inner.next();
        }
        for item in self.inner.by_ref() {
            let index = self.index;
            self.index += 1;
            if !(self.predicate)(&item, index) {
                self.skipping = false;
                return Some(item);
            }
        }
        None
    }
}

pub struct TakeWhileIndexed<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> TakeWhileIndexed<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> Sequence for TakeWhileIndexed<S, P>
where
    S: Sequence,
    P: Fn(&S::Item, usize) -> bool,
{
    type Item = S::Item;

    type Iter<'a> = TakeWhileIndexedIter<'a, S::Iter<'a>, P>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Iter<'_> {
        TakeWhileIndexedIter {
            inner: self.source.iterate(),
            index: 0,
            done: false,
            predicate: &self.predicate,
        }
    }
}

pub struct TakeWhileIndexedIter<'a, I, P> {
    inner: I,
    index: usize,
    done: bool,
    predicate: &'a P,
}

impl<'a, I, P> Iterator for TakeWhileIndexedIter<'a, I, P>
where
    I: Iterator,
    P: Fn(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.done {
            return None;
        }
        let item = self.inner.next()?;
        let index = self.index;
        self.index += 1;
        if (self.predicate)(&item, index) {
            Some(item)
        } else {
            self.done = true;
            None
        }
    }
}
