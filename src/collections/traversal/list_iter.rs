use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::Cursor;
use crate::collections::traits::{Element, List};
use crate::util::error::ListError;
use crate::util::result::ResultExtension;

/// A bi-directional iterator that mutably borrows a list, allowing elements to be replaced,
/// removed or inserted at the iterator's position. See [`List::list_iter`] to create one.
///
/// Each step runs the fail-fast checks of the underlying [`Cursor`]. The borrow is exclusive, but a
/// [`Synchronized`](crate::collections::wrappers::Synchronized) list can still be changed through
/// another handle to the same lock. The `try_*` methods report that as
/// [`ConcurrentModification`](crate::error::ConcurrentModification), while the [`Iterator`]
/// implementation panics.
pub struct ListIter<'a, L: ?Sized, T> {
    pub(crate) list: &'a mut L,
    pub(crate) cursor: Cursor,
    pub(crate) _phantom: PhantomData<fn() -> T>,
}

impl<'a, T: Element, L: List<T> + ?Sized> ListIter<'a, L, T> {
    pub(crate) fn new(list: &'a mut L, index: usize) -> Result<ListIter<'a, L, T>, ListError> {
        let cursor = Cursor::new::<T, L>(list, index)?;
        Ok(ListIter {
            list,
            cursor,
            _phantom: PhantomData,
        })
    }

    /// Returns true if there is an element after the iterator.
    pub fn has_next(&self) -> bool {
        self.cursor.has_next::<T, L>(&*self.list)
    }

    /// Returns true if there is an element before the iterator.
    pub const fn has_previous(&self) -> bool {
        self.cursor.has_previous()
    }

    /// Returns the index of the element that [`next`](Iterator::next) would return.
    pub const fn next_index(&self) -> usize {
        self.cursor.next_index()
    }

    /// Returns the index of the element that [`previous`](ListIter::previous) would return.
    pub const fn previous_index(&self) -> Option<usize> {
        self.cursor.previous_index()
    }

    /// Returns the next element and moves the iterator past it, or [`None`] at the end of the list.
    pub fn try_next(&mut self) -> Result<Option<T>, ListError> {
        match self.cursor.next::<T, L>(&*self.list) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.is_no_such_element() => Ok(None),
            Err(error) => Err(error),
        }
    }

    /// Returns the previous element and moves the iterator before it, or [`None`] at the start of
    /// the list.
    pub fn try_previous(&mut self) -> Result<Option<T>, ListError> {
        match self.cursor.previous::<T, L>(&*self.list) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.is_no_such_element() => Ok(None),
            Err(error) => Err(error),
        }
    }

    /// Returns the previous element and moves the iterator before it.
    ///
    /// # Panics
    /// Panics if the list was structurally modified outside of this iterator.
    pub fn previous(&mut self) -> Option<T> {
        self.try_previous().throw()
    }

    /// Replaces the element most recently returned by `next` or `previous`.
    pub fn set(&mut self, value: T) -> Result<(), ListError> {
        self.cursor.set(&mut *self.list, value)
    }

    /// Removes the element most recently returned by `next` or `previous`.
    pub fn remove(&mut self) -> Result<T, ListError> {
        self.cursor.remove::<T, L>(&mut *self.list)
    }

    /// Inserts `value` before the iterator.
    pub fn add(&mut self, value: T) -> Result<(), ListError> {
        self.cursor.add(&mut *self.list, value)
    }

    /// Moves forward by up to `n` elements, returning the number skipped.
    pub fn skip_forward(&mut self, n: usize) -> Result<usize, ListError> {
        self.cursor.skip_forward::<T, L>(&*self.list, n)
    }

    /// Moves back by up to `n` elements, returning the number skipped.
    pub fn skip_back(&mut self, n: usize) -> Result<usize, ListError> {
        self.cursor.skip_back::<T, L>(&*self.list, n)
    }

    /// Passes every remaining element to `action`. Elements handed over before a modification is
    /// detected stay handed over.
    pub fn for_each_remaining<F: FnMut(T)>(&mut self, action: F) -> Result<(), ListError> {
        self.cursor.for_each_remaining(&*self.list, action)
    }
}

/// # Panics
/// Iteration panics if the list was structurally modified outside of the iterator. Use
/// [`ListIter::try_next`] to handle that as an error instead.
impl<'a, T: Element, L: List<T> + ?Sized> Iterator for ListIter<'a, L, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().throw()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len().saturating_sub(self.cursor.pos);
        (remaining, Some(remaining))
    }
}

impl<'a, T: Element, L: List<T> + ?Sized> ExactSizeIterator for ListIter<'a, L, T> {}

impl<'a, T: Element, L: List<T> + ?Sized> FusedIterator for ListIter<'a, L, T> {}
