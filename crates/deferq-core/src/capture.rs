//! Late-bound query parameters.
//!
//! A [`Capture`] is a shared cell that an operator holds explicitly. The
//! operator reads it while the pipeline is traversed, never while it is
//! built, so a value changed between construction and iteration is observed
//! by the next traversal.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Shared, mutable query context read at evaluation time.
///
/// Clones share the same cell. Single-threaded by construction (`!Send`).
pub struct Capture<T> {
    cell: Rc<RefCell<T>>,
}

impl<T> Capture<T> {
    pub fn new(value: T) -> Self {
        Self {
            cell: Rc::new(RefCell::new(value)),
        }
    }

    /// Replace the captured value; later traversals see the new value.
    pub fn set(&self, value: T) {
        *self.cell.borrow_mut() = value;
    }

    /// Update the captured value in place.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.cell.borrow_mut());
    }

    /// Run `f` against the current value.
    ///
    /// The value stays borrowed while `f` runs: calling [`set`](Self::set) or
    /// [`update`](Self::update) on the same capture from inside `f` panics.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.cell.borrow())
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.cell.borrow().clone()
    }
}

impl<T> Clone for Capture<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: Default> Default for Capture<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Capture<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Capture").field(&*self.cell.borrow()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_cell() {
        let threshold = Capture::new(15u32);
        let held = threshold.clone();
        threshold.set(30);
        assert_eq!(held.get(), 30);
        held.update(|v| *v += 1);
        assert_eq!(threshold.with(|v| *v), 31);
    }

    #[test]
    #[should_panic(expected = "already borrowed")]
    fn set_inside_with_panics() {
        let threshold = Capture::new(15u32);
        threshold.with(|_| threshold.set(30));
    }
}
