use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::collections::traits::{Element, List};
use crate::util::error::{ConcurrentModification, ListError};
use crate::util::result::ResultExtension;

/// A borrowed iterator over copies of the elements of any [`List`], read one index at a time. See
/// [`List::values`] to create one.
///
/// The length of the list is captured on creation and compared at every step. A
/// [`Synchronized`](crate::collections::wrappers::Synchronized) list changed through another handle
/// makes [`try_next`](Values::try_next) fail with [`ConcurrentModification`] and makes the
/// [`Iterator`] implementation panic.
pub struct Values<'a, L: ?Sized, T> {
    pub(crate) list: &'a L,
    pub(crate) front: usize,
    pub(crate) back: usize,
    pub(crate) expected_len: usize,
    pub(crate) _phantom: PhantomData<fn() -> T>,
}

impl<'a, T: Element, L: List<T> + ?Sized> Values<'a, L, T> {
    pub(crate) fn new(list: &'a L) -> Values<'a, L, T> {
        let len = list.len();
        Values {
            list,
            front: 0,
            back: len,
            expected_len: len,
            _phantom: PhantomData,
        }
    }

    /// Returns the next element from the front, or [`None`] once the ends meet.
    pub fn try_next(&mut self) -> Result<Option<T>, ListError> {
        self.check()?;
        if self.front == self.back {
            return Ok(None);
        }
        let value = self.list.get(self.front)?;
        self.front += 1;
        Ok(Some(value))
    }

    /// Returns the next element from the back, or [`None`] once the ends meet.
    pub fn try_next_back(&mut self) -> Result<Option<T>, ListError> {
        self.check()?;
        if self.front == self.back {
            return Ok(None);
        }
        let value = self.list.get(self.back - 1)?;
        self.back -= 1;
        Ok(Some(value))
    }

    fn check(&self) -> Result<(), ListError> {
        let found = self.list.len();
        if found == self.expected_len {
            Ok(())
        } else {
            Err(ConcurrentModification {
                expected: self.expected_len,
                found,
            }
            .into())
        }
    }
}

/// # Panics
/// Iteration panics if the list was structurally modified after the iterator was created.
impl<'a, T: Element, L: List<T> + ?Sized> Iterator for Values<'a, L, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().throw()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, T: Element, L: List<T> + ?Sized> DoubleEndedIterator for Values<'a, L, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.try_next_back().throw()
    }
}

impl<'a, T: Element, L: List<T> + ?Sized> ExactSizeIterator for Values<'a, L, T> {}

impl<'a, T: Element, L: List<T> + ?Sized> FusedIterator for Values<'a, L, T> {}
