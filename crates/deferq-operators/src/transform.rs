//! Filter, project and flatten.

use deferq_core::capture::Capture;

use crate::traits::Sequence;

pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    type Iter<'a> = std::iter::Filter<S::Iter<'a>, &'a P>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Iter<'_> {
        self.source.iterate().filter(&self.predicate)
    }
}

pub struct FilterIndexed<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> FilterIndexed<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> Sequence for FilterIndexed<S, P>
where
    S: Sequence,
    P: Fn(&S::Item, usize) -> bool,
{
    type Item = S::Item;

    type Iter<'a> = FilterIndexedIter<'a, S::Iter<'a>, P>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Iter<'_> {
        FilterIndexedIter {
            inner: self.source.iterate(),
            index: 0,
            predicate: &self.predicate,
        }
    }
}

pub struct FilterIndexedIter<'a, I, P> {
    inner: I,
    /// Position of the next source element.
    index: usize,
    predicate: &'a P,
}

impl<'a, I, P> Iterator for FilterIndexedIter<'a, I, P>
where
    I: Iterator,
    P: Fn(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        for item in self.inner.by_ref() {
            let index = self.index;
            self.index += 1;
            if (self.predicate)(&item, index) {
                return Some(item);
            }
        }
        None
    }
}

/// Filter whose predicate reads a [`Capture`] on every element.
pub struct FilterWith<S, C, P> {
    source: S,
    capture: Capture<C>,
    predicate: P,
}

impl<S, C, P> FilterWith<S, C, P> {
    pub(crate) fn new(source: S, capture: Capture<C>, predicate: P) -> Self {
        Self {
            source,
            capture,
            predicate,
        }
    }
}

impl<S, C, P> Sequence for FilterWith<S, C, P>
where
    S: Sequence,
    P: Fn(&C, &S::Item) -> bool,
{
    type Item = S::Item;

    type Iter<'a> = FilterWithIter<'a, S::Iter<'a>, C, P>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Iter<'_> {
        FilterWithIter {
            inner: self.source.iterate(),
            capture: &self.capture,
            predicate: &self.predicate,
        }
    }
}

pub struct FilterWithIter<'a, I, C, P> {
    inner: I,
    capture: &'a Capture<C>,
    predicate: &'a P,
}

impl<'a, I, C, P> Iterator for FilterWithIter<'a, I, C, P>
where
    I: Iterator,
    P: Fn(&C, &I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let (capture, predicate) = (self.capture, self.predicate);
        self.inner
            .find(|item| capture.with(|ctx| predicate(ctx, item)))
    }
}

pub struct Project<S, F> {
    source: S,
    selector: F,
}

impl<S, F> Project<S, F> {
    pub(crate) fn new(source: S, selector: F) -> Self {
        Self { source, selector }
    }
}

impl<S, F, R> Sequence for Project<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> R,
{
    type Item = R;

    type Iter<'a> = std::iter::Map<S::Iter<'a>, &'a F>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Iter<'_> {
        self.source.iterate().map(&self.selector)
    }
}

pub struct ProjectIndexed<S, F> {
    source: S,
    selector: F,
}

impl<S, F> ProjectIndexed<S, F> {
    pub(crate) fn new(source: S, selector: F) -> Self {
        Self { source, selector }
    }
}

impl<S, F, R> Sequence for ProjectIndexed<S, F>
where
    S: Sequence,
    F: Fn(S::Item, usize) -> R,
{
    type Item = R;

    type Iter<'a> = ProjectIndexedIter<'a, S::Iter<'a>, F>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Iter<'_> {
        ProjectIndexedIter {
            inner: self.source.iterate().enumerate(),
            selector: &self.selector,
        }
    }
}

pub struct ProjectIndexedIter<'a, I, F> {
    inner: std::iter::Enumerate<I>,
    selector: &'a F,
}

impl<'a, I, F, R> Iterator for ProjectIndexedIter<'a, I, F>
where
    I: Iterator,
    F: Fn(I::Item, usize) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        let (index, item) = self.inner.next()?;
        Some((self.selector)(item, index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Projection whose selector reads a [`Capture`] on every element.
pub struct ProjectWith<S, C, F> {
    source: S,
    capture: Capture<C>,
    selector: F,
}

impl<S, C, F> ProjectWith<S, C, F> {
    pub(crate) fn new(source: S, capture: Capture<C>, selector: F) -> Self {
        Self {
            source,
            capture,
            selector,
        }
    }
}

impl<S, C, F, R> Sequence for ProjectWith<S, C, F>
where
    S: Sequence,
    F: Fn(&C, S::Item) -> R,
{
    type Item = R;

    type Iter<'a> = ProjectWithIter<'a, S::Iter<'a>, C, F>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Iter<'_> {
        ProjectWithIter {
            inner: self.source.iterate(),
            capture: &self.capture,
            selector: &self.selector,
        }
    }
}

pub struct ProjectWithIter<'a, I, C, F> {
    inner: I,
    capture: &'a Capture<C>,
    selector: &'a F,
}

impl<'a, I, C, F, R> Iterator for ProjectWithIter<'a, I, C, F>
where
    I: Iterator,
    F: Fn(&C, I::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        let item = self.inner.next()?;
        Some(self.capture.with(|ctx| (self.selector)(ctx, item)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// One-to-many expansion. The inner collection of an outer element is fully
/// drained before the next outer element is pulled; nothing is buffered
/// beyond the current outer element.
pub struct Flatten<S, C, F> {
    source: S,
    collection: C,
    result: F,
}

impl<S, C, F> Flatten<S, C, F> {
    pub(crate) fn new(source: S, collection: C, result: F) -> Self {
        Self {
            source,
            collection,
            result,
        }
    }
}

impl<S, C, F, I, R> Sequence for Flatten<S, C, F>
where
    S: Sequence,
    C: Fn(&S::Item) -> I,
    I: IntoIterator,
    F: Fn(&S::Item, I::Item) -> R,
{
    type Item = R;

    type Iter<'a> = FlattenIter<'a, S::Iter<'a>, I, C, F>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Iter<'_> {
        FlattenIter {
            outer: self.source.iterate(),
            current: None,
            collection: &self.collection,
            result: &self.result,
        }
    }
}

pub struct FlattenIter<'a, O: Iterator, I: IntoIterator, C, F> {
    outer: O,
    current: Option<(O::Item, I::IntoIter)>,
    collection: &'a C,
    result: &'a F,
}

impl<'a, O, I, C, F, R> Iterator for FlattenIter<'a, O, I, C, F>
where
    O: Iterator,
    I: IntoIterator,
    C: Fn(&O::Item) -> I,
    F: Fn(&O::Item, I::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        loop {
            if let Some((outer, inner)) = &mut self.current {
                if let Some(value) = inner.next() {
                    return Some((self.result)(outer, value));
                }
            }
            let outer = self.outer.next()?;
            let inner = (self.collection)(&outer).into_iter();
            self.current = Some((outer, inner));
        }
    }
}
