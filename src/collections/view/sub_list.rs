use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use crate::collections::traits::{self, Element, List};
use crate::util::bounds::{check_block, check_index, check_position, check_range};
use crate::util::error::{ConcurrentModification, ListError};

/// A live view of the elements `from..to` of a parent list. See [`List::sub_list`] to create one.
///
/// A SubList holds no elements of its own. Every operation translates its index by `from` and is
/// forwarded to the parent, so the view always reflects the parent's current contents. Insertions
/// and removals made through the view move its own `to` bound accordingly.
///
/// The view mutably borrows its parent, so no other view of the same parent can be alive while it
/// is, and no other code can change the parent's length behind its back. The bounds are still
/// checked against the parent on every access.
///
/// # Examples
/// ```
/// # use specialized_collections::collections::contiguous::ArrayList;
/// # use specialized_collections::collections::traits::List;
/// let mut list = ArrayList::from([1, 2, 4, 5]);
/// let mut view = list.sub_list(1, 3).unwrap();
/// assert_eq!(view.to_vec(), vec![2, 4]);
///
/// view.insert(1, 3).unwrap();
/// assert_eq!(view.len(), 3);
/// assert_eq!(list.as_slice(), &[1, 2, 3, 4, 5]);
/// ```
pub struct SubList<'a, L: ?Sized, T> {
    pub(crate) parent: &'a mut L,
    pub(crate) from: usize,
    pub(crate) to: usize,
    pub(crate) _phantom: PhantomData<fn() -> T>,
}

impl<'a, T: Element, L: List<T> + ?Sized> SubList<'a, L, T> {
    pub(crate) fn new(parent: &'a mut L, from: usize, to: usize) -> Result<Self, ListError> {
        check_range(from, to, parent.len())?;

        Ok(SubList {
            parent,
            from,
            to,
            _phantom: PhantomData,
        })
    }

    /// Returns the index in the parent list where this view starts.
    pub const fn start(&self) -> usize {
        self.from
    }

    /// Returns the index in the parent list where this view ends, exclusive.
    pub const fn end(&self) -> usize {
        self.to
    }

    /// Returns the length of the view after checking that it still fits within the parent.
    fn checked_len(&self) -> Result<usize, ListError> {
        let found = self.parent.len();
        if self.to > found {
            Err(ConcurrentModification {
                expected: self.to,
                found,
            }
            .into())
        } else {
            Ok(self.to - self.from)
        }
    }
}

impl<'a, T: Element, L: List<T> + ?Sized> List<T> for SubList<'a, L, T> {
    fn len(&self) -> usize {
        self.to - self.from
    }

    fn get(&self, index: usize) -> Result<T, ListError> {
        check_index(index, self.checked_len()?)?;
        self.parent.get(self.from + index)
    }

    fn contiguous(&self) -> Option<&[T]> {
        self.parent
            .contiguous()
            .and_then(|slice| slice.get(self.from..self.to))
    }

    fn get_elements(&self, from: usize, dest: &mut [T]) -> Result<(), ListError> {
        check_block(from, dest.len(), self.checked_len()?)?;
        self.parent.get_elements(self.from + from, dest)
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        check_index(index, self.checked_len()?)?;
        self.parent.set(self.from + index, value)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        check_position(index, self.checked_len()?)?;
        self.parent.insert(self.from + index, value)?;
        self.to += 1;
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T, ListError> {
        check_index(index, self.checked_len()?)?;
        let value = self.parent.remove(self.from + index)?;
        self.to -= 1;
        Ok(value)
    }

    fn add_elements(&mut self, index: usize, source: &[T]) -> Result<(), ListError> {
        check_position(index, self.checked_len()?)?;
        self.parent.add_elements(self.from + index, source)?;
        self.to += source.len();
        Ok(())
    }

    fn set_elements(&mut self, index: usize, source: &[T]) -> Result<(), ListError> {
        check_block(index, source.len(), self.checked_len()?)?;
        self.parent.set_elements(self.from + index, source)
    }

    fn remove_elements(&mut self, from: usize, to: usize) -> Result<(), ListError> {
        check_range(from, to, self.checked_len()?)?;
        self.parent.remove_elements(self.from + from, self.from + to)?;
        self.to -= to - from;
        Ok(())
    }
}

impl<'a, T, L, R> PartialEq<R> for SubList<'a, L, T>
where
    T: Element,
    L: List<T> + ?Sized,
    R: List<T>,
{
    fn eq(&self, other: &R) -> bool {
        traits::equal(self, other)
    }
}

impl<'a, T, L> Debug for SubList<'a, L, T>
where
    T: Element + Debug,
    L: List<T> + ?Sized,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubList")
            .field("contents", &self.to_vec())
            .field("from", &self.from)
            .field("to", &self.to)
            .finish()
    }
}
