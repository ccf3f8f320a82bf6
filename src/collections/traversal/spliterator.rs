use std::cmp;

use crate::collections::traits::{Element, List};
use crate::util::error::{ConcurrentModification, ListError};

/// A splittable traversal over a list, for dividing work between several traversers. See
/// [`List::spliterator`] to create one.
///
/// Like [`Cursor`](super::Cursor), a Spliterator doesn't borrow its list; each call takes the list
/// as an argument. Split pieces are independent values, so they can be moved to other threads and
/// driven there over a shared `&list`.
///
/// # Binding
/// Until the first successful [`try_split`](Spliterator::try_split), the upper bound is the live
/// length of the list (late-binding), so elements appended before traversal starts are seen. The
/// split freezes the bound of both pieces to the length observed at that moment (early-binding).
/// Afterwards, a list shorter than the frozen bound is reported as [`ConcurrentModification`].
///
/// # Examples
/// ```
/// # use specialized_collections::collections::contiguous::ArrayList;
/// # use specialized_collections::collections::traits::List;
/// let list: ArrayList<u32> = (0..10).collect();
/// let mut upper = list.spliterator();
/// let mut lower = upper.try_split(&list).unwrap();
///
/// assert_eq!(lower.estimate_size(&list), 5);
/// assert_eq!(upper.estimate_size(&list), 5);
///
/// let mut sum = 0;
/// lower.for_each_remaining(&list, |v| sum += v).unwrap();
/// upper.for_each_remaining(&list, |v| sum += v).unwrap();
/// assert_eq!(sum, 45);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Spliterator {
    pub(crate) pos: usize,
    /// The frozen upper bound, or [`None`] while still tracking the live length.
    pub(crate) bound: Option<usize>,
}

impl Spliterator {
    /// Creates a late-binding Spliterator over a whole list.
    pub const fn new() -> Spliterator {
        Spliterator {
            pos: 0,
            bound: None,
        }
    }

    /// Returns true once the bound has been frozen by a split.
    pub const fn has_split(&self) -> bool {
        self.bound.is_some()
    }

    /// Returns the index of the next element this Spliterator would produce.
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of elements left to traverse.
    pub fn estimate_size<T: Element, L: List<T> + ?Sized>(&self, list: &L) -> usize {
        self.current_bound(list).saturating_sub(self.pos)
    }

    /// Passes the next element to `action` and returns true, or returns false if no elements are
    /// left.
    pub fn try_advance<T, L, F>(&mut self, list: &L, action: F) -> Result<bool, ListError>
    where
        T: Element,
        L: List<T> + ?Sized,
        F: FnOnce(T),
    {
        let bound = self.check(list)?;
        if self.pos >= bound {
            return Ok(false);
        }

        action(list.get(self.pos)?);
        self.pos += 1;
        Ok(true)
    }

    /// Passes every remaining element to `action`.
    pub fn for_each_remaining<T, L, F>(&mut self, list: &L, mut action: F) -> Result<(), ListError>
    where
        T: Element,
        L: List<T> + ?Sized,
        F: FnMut(T),
    {
        let bound = self.check(list)?;
        if self.pos >= bound {
            return Ok(());
        }

        match list.contiguous() {
            Some(slice) => slice[self.pos..bound].iter().cloned().for_each(action),
            None => {
                for index in self.pos..bound {
                    action(list.get(index)?);
                }
            }
        }
        self.pos = bound;
        Ok(())
    }

    /// Splits off the lower half of the remaining elements into a new Spliterator, leaving this
    /// one with the upper half. Returns [`None`] if fewer than two elements remain.
    pub fn try_split<T: Element, L: List<T> + ?Sized>(&mut self, list: &L) -> Option<Spliterator> {
        let bound = self.current_bound(list);
        let remaining = bound.saturating_sub(self.pos);
        if remaining <= 1 {
            return None;
        }

        let mid = self.pos + remaining / 2;
        let lower = Spliterator {
            pos: self.pos,
            bound: Some(mid),
        };

        self.pos = mid;
        self.bound = Some(bound);
        Some(lower)
    }

    /// Moves forward by up to `n` elements without producing them, returning the number skipped.
    pub fn skip_forward<T: Element, L: List<T> + ?Sized>(
        &mut self,
        list: &L,
        n: usize,
    ) -> Result<usize, ListError> {
        let bound = self.check(list)?;
        let moved = cmp::min(n, bound.saturating_sub(self.pos));
        self.pos += moved;
        Ok(moved)
    }

    fn current_bound<T: Element, L: List<T> + ?Sized>(&self, list: &L) -> usize {
        match self.bound {
            Some(bound) => bound,
            None => list.len(),
        }
    }

    fn check<T: Element, L: List<T> + ?Sized>(&self, list: &L) -> Result<usize, ListError> {
        let len = list.len();
        match self.bound {
            Some(bound) if bound > len => Err(ConcurrentModification {
                expected: bound,
                found: len,
            }
            .into()),
            Some(bound) => Ok(bound),
            None => Ok(len),
        }
    }
}
