use std::cmp::Ordering;
use std::ptr;

use crate::collections::traversal::{Cursor, ListIter, Spliterator, Values};
use crate::collections::view::SubList;
use crate::util::bounds::{check_block, check_position, check_range};
use crate::util::error::ListError;

/// The bound shared by every element type stored in a list.
///
/// [`Default::default`] provides the "zero" value written into slots that no longer hold a live
/// element, which releases whatever the previous value owned. All primitive types satisfy this
/// bound, as do the usual owned types such as [`String`] or `Option<Box<T>>`.
pub trait Element: Clone + Default + PartialEq {}

impl<T: Clone + Default + PartialEq> Element for T {}

/// The capability interface implemented by every list in this crate, including views and
/// wrappers.
///
/// Only [`len`](List::len), [`get`](List::get), [`set`](List::set), [`insert`](List::insert) and
/// [`remove`](List::remove) are required. The remaining operations have element-by-element
/// default implementations which concrete stores override with block copies.
///
/// Queries never fail for reasons other than bounds. Mutations report
/// [`UnsupportedOperation`](crate::error::UnsupportedOperation) on read-only lists, leaving them
/// untouched.
pub trait List<T: Element> {
    /// Returns the number of elements in the list.
    fn len(&self) -> usize;

    /// Returns true if the list contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of the element at `index`.
    fn get(&self, index: usize) -> Result<T, ListError>;

    /// Returns the elements of the list as one contiguous slice, if the list is backed by one that
    /// can be borrowed directly.
    fn contiguous(&self) -> Option<&[T]> {
        None
    }

    /// Returns the index of the first element equal to `value`.
    fn index_of(&self, value: &T) -> Option<usize> {
        match self.contiguous() {
            Some(slice) => slice.iter().position(|item| item == value),
            None => (0..self.len()).find(|&i| self.get(i).is_ok_and(|item| item == *value)),
        }
    }

    /// Returns the index of the last element equal to `value`.
    fn last_index_of(&self, value: &T) -> Option<usize> {
        match self.contiguous() {
            Some(slice) => slice.iter().rposition(|item| item == value),
            None => (0..self.len()).rev().find(|&i| self.get(i).is_ok_and(|item| item == *value)),
        }
    }

    /// Returns true if any element is equal to `value`.
    fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Copies all elements into a new [`Vec`].
    fn to_vec(&self) -> Vec<T> {
        match self.contiguous() {
            Some(slice) => slice.to_vec(),
            None => (0..self.len()).map_while(|i| self.get(i).ok()).collect(),
        }
    }

    /// Copies `dest.len()` elements starting at `from` into `dest`.
    fn get_elements(&self, from: usize, dest: &mut [T]) -> Result<(), ListError> {
        check_block(from, dest.len(), self.len())?;
        for (offset, slot) in dest.iter_mut().enumerate() {
            *slot = self.get(from + offset)?;
        }
        Ok(())
    }

    /// Passes a copy of every element to `action`, in order.
    fn for_each<F: FnMut(T)>(&self, mut action: F) {
        match self.contiguous() {
            Some(slice) => slice.iter().cloned().for_each(action),
            None => {
                for i in 0..self.len() {
                    match self.get(i) {
                        Ok(value) => action(value),
                        Err(_) => break,
                    }
                }
            }
        }
    }

    /// Replaces the element at `index`, returning the previous value.
    fn set(&mut self, index: usize, value: T) -> Result<T, ListError>;

    /// Inserts `value` at `index`, shifting all following elements up by one. `index` may be equal
    /// to the length of the list.
    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError>;

    /// Removes and returns the element at `index`, shifting all following elements down by one.
    fn remove(&mut self, index: usize) -> Result<T, ListError>;

    /// Appends `value` to the end of the list.
    fn push(&mut self, value: T) -> Result<(), ListError> {
        let len = self.len();
        self.insert(len, value)
    }

    /// Removes the first element equal to `value`, returning whether one was found.
    fn remove_item(&mut self, value: &T) -> Result<bool, ListError> {
        match self.index_of(value) {
            Some(index) => self.remove(index).map(|_| true),
            None => Ok(false),
        }
    }

    /// Removes all elements.
    fn clear(&mut self) -> Result<(), ListError> {
        let len = self.len();
        self.remove_elements(0, len)
    }

    /// Inserts all of `source` at `index`, preserving its order.
    fn add_elements(&mut self, index: usize, source: &[T]) -> Result<(), ListError> {
        check_position(index, self.len())?;
        for (offset, value) in source.iter().enumerate() {
            self.insert(index + offset, value.clone())?;
        }
        Ok(())
    }

    /// Overwrites `source.len()` elements starting at `index` with the contents of `source`.
    fn set_elements(&mut self, index: usize, source: &[T]) -> Result<(), ListError> {
        check_block(index, source.len(), self.len())?;
        for (offset, value) in source.iter().enumerate() {
            self.set(index + offset, value.clone())?;
        }
        Ok(())
    }

    /// Removes the elements in `from..to`.
    fn remove_elements(&mut self, from: usize, to: usize) -> Result<(), ListError> {
        check_range(from, to, self.len())?;
        for _ in from..to {
            self.remove(from)?;
        }
        Ok(())
    }

    /// Removes every element matching `predicate`, returning whether anything was removed.
    fn remove_if<P: FnMut(&T) -> bool>(&mut self, mut predicate: P) -> Result<bool, ListError> {
        let mut removed = false;
        let mut index = 0;
        while index < self.len() {
            if predicate(&self.get(index)?) {
                self.remove(index)?;
                removed = true;
            } else {
                index += 1;
            }
        }
        Ok(removed)
    }

    /// Sorts the list with `compare`, keeping equal elements in their original order.
    fn sort_by<F: FnMut(&T, &T) -> Ordering>(&mut self, compare: F) -> Result<(), ListError> {
        let mut values = self.to_vec();
        values.sort_by(compare);
        self.set_elements(0, &values)
    }

    /// Sorts the list with `compare`, without preserving the order of equal elements.
    fn unstable_sort_by<F: FnMut(&T, &T) -> Ordering>(
        &mut self,
        compare: F,
    ) -> Result<(), ListError> {
        let mut values = self.to_vec();
        values.sort_unstable_by(compare);
        self.set_elements(0, &values)
    }

    /// Sorts the list by the natural ordering of its elements.
    fn sort(&mut self) -> Result<(), ListError>
    where
        T: Ord,
    {
        self.sort_by(T::cmp)
    }

    /// Sorts the list by the natural ordering of its elements, without preserving the order of
    /// equal elements.
    fn unstable_sort(&mut self) -> Result<(), ListError>
    where
        T: Ord,
    {
        self.unstable_sort_by(T::cmp)
    }

    /// Returns an iterator over copies of the elements, read by index.
    fn values(&self) -> Values<'_, Self, T>
    where
        Self: Sized,
    {
        Values::new(self)
    }

    /// Creates a detached [`Cursor`] positioned before the element at `index`.
    fn cursor(&self, index: usize) -> Result<Cursor, ListError>
    where
        Self: Sized,
    {
        Cursor::new::<T, Self>(self, index)
    }

    /// Creates a [`ListIter`] positioned before the element at `index`, borrowing the list for
    /// in-place editing.
    fn list_iter(&mut self, index: usize) -> Result<ListIter<'_, Self, T>, ListError>
    where
        Self: Sized,
    {
        ListIter::new(self, index)
    }

    /// Creates a late-binding [`Spliterator`] over the whole list.
    fn spliterator(&self) -> Spliterator
    where
        Self: Sized,
    {
        Spliterator::new()
    }

    /// Creates a live view of the elements in `from..to`.
    fn sub_list(&mut self, from: usize, to: usize) -> Result<SubList<'_, Self, T>, ListError>
    where
        Self: Sized,
    {
        SubList::new(self, from, to)
    }
}

/// Returns true if both lists have the same length and pairwise equal elements.
///
/// Lists that expose the same contiguous buffer compare equal without looking at any element.
pub fn equal<T, A, B>(a: &A, b: &B) -> bool
where
    T: Element,
    A: List<T> + ?Sized,
    B: List<T> + ?Sized,
{
    if a.len() != b.len() {
        return false;
    }

    match (a.contiguous(), b.contiguous()) {
        (Some(lhs), Some(rhs)) => ptr::eq(lhs.as_ptr(), rhs.as_ptr()) || lhs == rhs,
        _ => (0..a.len()).all(|i| matches!((a.get(i), b.get(i)), (Ok(x), Ok(y)) if x == y)),
    }
}
