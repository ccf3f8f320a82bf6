use std::cmp;

use crate::collections::traits::{Element, List};
use crate::util::bounds::check_position;
use crate::util::error::{ConcurrentModification, IllegalState, ListError, NoSuchElement};

/// A bi-directional list iterator that doesn't borrow the list it traverses.
///
/// A Cursor stores only its position, the index of the element it last returned, and the length
/// it expects the list to have. Each operation takes the list as an argument and first checks
/// that the length still matches; if the list was structurally modified by anything other than
/// this Cursor, the operation fails with [`ConcurrentModification`] instead of returning stale
/// data.
///
/// Structural edits made through the Cursor itself ([`add`](Cursor::add) and
/// [`remove`](Cursor::remove)) keep it in sync. For iteration that borrows the list, see
/// [`ListIter`](super::ListIter).
///
/// # Examples
/// ```
/// # use specialized_collections::collections::contiguous::ArrayList;
/// # use specialized_collections::collections::traits::List;
/// let mut list = ArrayList::from([1, 2, 3]);
/// let mut cursor = list.cursor(0).unwrap();
/// assert_eq!(cursor.next(&list), Ok(1));
///
/// list.push(4);
/// assert!(cursor.next(&list).unwrap_err().is_concurrent_modification());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub(crate) pos: usize,
    pub(crate) last: Option<usize>,
    pub(crate) expected_len: usize,
}

impl Cursor {
    /// Creates a Cursor positioned before the element at `index`. `index` may be equal to the
    /// length of the list.
    pub fn new<T: Element, L: List<T> + ?Sized>(list: &L, index: usize) -> Result<Cursor, ListError> {
        let len = list.len();
        check_position(index, len)?;

        Ok(Cursor {
            pos: index,
            last: None,
            expected_len: len,
        })
    }

    /// Returns the index of the element that [`next`](Cursor::next) would return.
    pub const fn next_index(&self) -> usize {
        self.pos
    }

    /// Returns the index of the element that [`previous`](Cursor::previous) would return, or
    /// [`None`] at the start of the list.
    pub const fn previous_index(&self) -> Option<usize> {
        self.pos.checked_sub(1)
    }

    /// Returns the index of the element most recently returned by a traversal step, if it can
    /// still be edited through this Cursor.
    pub const fn last_returned(&self) -> Option<usize> {
        self.last
    }

    /// Returns true if there is an element after the Cursor.
    pub fn has_next<T: Element, L: List<T> + ?Sized>(&self, list: &L) -> bool {
        self.pos < list.len()
    }

    /// Returns true if there is an element before the Cursor.
    pub const fn has_previous(&self) -> bool {
        self.pos > 0
    }

    /// Returns the next element and moves the Cursor past it.
    pub fn next<T: Element, L: List<T> + ?Sized>(&mut self, list: &L) -> Result<T, ListError> {
        self.check(list)?;
        if self.pos >= self.expected_len {
            return Err(NoSuchElement.into());
        }

        let value = list.get(self.pos)?;
        self.last = Some(self.pos);
        self.pos += 1;
        Ok(value)
    }

    /// Returns the previous element and moves the Cursor before it.
    pub fn previous<T: Element, L: List<T> + ?Sized>(&mut self, list: &L) -> Result<T, ListError> {
        self.check(list)?;
        if self.pos == 0 {
            return Err(NoSuchElement.into());
        }

        let value = list.get(self.pos - 1)?;
        self.pos -= 1;
        self.last = Some(self.pos);
        Ok(value)
    }

    /// Replaces the element most recently returned by [`next`](Cursor::next) or
    /// [`previous`](Cursor::previous).
    pub fn set<T: Element, L: List<T> + ?Sized>(
        &mut self,
        list: &mut L,
        value: T,
    ) -> Result<(), ListError> {
        self.check(list)?;
        let last = self.last.ok_or(IllegalState)?;
        list.set(last, value)?;
        Ok(())
    }

    /// Removes the element most recently returned by [`next`](Cursor::next) or
    /// [`previous`](Cursor::previous). A second call without another traversal step in between
    /// fails with [`IllegalState`].
    pub fn remove<T: Element, L: List<T> + ?Sized>(&mut self, list: &mut L) -> Result<T, ListError> {
        self.check(list)?;
        let last = self.last.ok_or(IllegalState)?;
        let value = list.remove(last)?;

        if last < self.pos {
            self.pos -= 1;
        }
        self.last = None;
        self.expected_len = list.len();
        Ok(value)
    }

    /// Inserts `value` before the Cursor, so that a following [`next`](Cursor::next) is unaffected
    /// and [`previous`](Cursor::previous) would return the new element.
    pub fn add<T: Element, L: List<T> + ?Sized>(
        &mut self,
        list: &mut L,
        value: T,
    ) -> Result<(), ListError> {
        self.check(list)?;
        list.insert(self.pos, value)?;

        self.pos += 1;
        self.last = None;
        self.expected_len = list.len();
        Ok(())
    }

    /// Moves forward by up to `n` elements, stopping at the end of the list. Returns the number of
    /// elements skipped.
    pub fn skip_forward<T: Element, L: List<T> + ?Sized>(
        &mut self,
        list: &L,
        n: usize,
    ) -> Result<usize, ListError> {
        self.check(list)?;
        let moved = cmp::min(n, self.expected_len - self.pos);
        self.pos += moved;
        if moved > 0 {
            self.last = Some(self.pos - 1);
        }
        Ok(moved)
    }

    /// Moves back by up to `n` elements, stopping at the start of the list. Returns the number of
    /// elements skipped.
    pub fn skip_back<T: Element, L: List<T> + ?Sized>(
        &mut self,
        list: &L,
        n: usize,
    ) -> Result<usize, ListError> {
        self.check(list)?;
        let moved = cmp::min(n, self.pos);
        self.pos -= moved;
        if moved > 0 {
            self.last = Some(self.pos);
        }
        Ok(moved)
    }

    /// Passes every remaining element to `action`, leaving the Cursor at the end of the list.
    pub fn for_each_remaining<T, L, F>(&mut self, list: &L, mut action: F) -> Result<(), ListError>
    where
        T: Element,
        L: List<T> + ?Sized,
        F: FnMut(T),
    {
        self.check(list)?;
        if let Some(slice) = list.contiguous() {
            slice[self.pos..].iter().cloned().for_each(&mut action);
            if self.pos < slice.len() {
                self.last = Some(slice.len() - 1);
            }
            self.pos = slice.len();
            return Ok(());
        }

        while self.pos < self.expected_len {
            action(self.next(list)?);
        }
        Ok(())
    }

    fn check<T: Element, L: List<T> + ?Sized>(&self, list: &L) -> Result<(), ListError> {
        let found = list.len();
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
