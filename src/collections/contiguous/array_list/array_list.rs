use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Index, IndexMut};

use crate::collections::traits::{self, Element, List};
use crate::util::bounds::{check_block, check_index, check_position, check_range};
use crate::util::error::{CapacityOverflow, IllegalArgument, ListError};
use crate::util::result::ResultExtension;

/// The capacity allocated the first time an element is added to a list created by
/// [`ArrayList::new`].
pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

const MAX_BYTES: usize = isize::MAX as usize;

/// The largest number of elements an [`ArrayList<T>`] can hold.
pub const fn max_capacity<T>() -> usize {
    match mem::size_of::<T>() {
        0 => MAX_BYTES,
        size => MAX_BYTES / size,
    }
}

/// A growable list backed by a single contiguous buffer.
///
/// The buffer always holds [`capacity`](ArrayList::capacity) initialized values. Slots past
/// [`len`](ArrayList::len) contain `T::default()`, so removed values are released immediately
/// rather than kept alive by spare capacity.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ArrayList.
/// - `i`: The index of the item in question.
/// - `m`: The number of items in a block operation.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `set` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `add_elements` | `O(n-i+m)` |
/// | `remove_elements` | `O(n-i)` |
/// | `ensure_capacity` | `O(n)`**, `O(1)` |
/// | `trim` | `O(n)`**, `O(1)` |
/// | `contains` | `O(n)` |
///
/// \* If the ArrayList doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** Only when the buffer is actually reallocated.
///
/// # Growth
/// When an insertion needs more room, the capacity becomes the larger of `capacity * 1.5` and the
/// required capacity. A list created by [`new`](ArrayList::new) allocates nothing until then, and
/// its first allocation holds at least [`DEFAULT_INITIAL_CAPACITY`] elements. Capacity never
/// shrinks unless [`trim`](ArrayList::trim) is called.
///
/// # Examples
/// ```
/// # use specialized_collections::collections::contiguous::ArrayList;
/// let mut list = ArrayList::new();
/// list.extend([1, 2, 3, 4, 5]);
/// assert_eq!(list.remove(2), Ok(3));
/// assert_eq!(list.as_slice(), &[1, 2, 4, 5]);
/// assert!(list.get(10).unwrap_err().is_index_out_of_bounds());
/// ```
pub struct ArrayList<T> {
    pub(crate) buf: Box<[T]>,
    pub(crate) len: usize,
    /// Whether the buffer was supplied by the caller through [`ArrayList::wrap`].
    pub(crate) wrapped: bool,
    /// Set while the list still uses the unallocated buffer handed out by [`ArrayList::new`].
    pub(crate) sentinel: bool,
}

impl<T> ArrayList<T> {
    /// Creates a new ArrayList with length and capacity 0. Nothing is allocated until the first
    /// element is added.
    pub fn new() -> ArrayList<T> {
        ArrayList {
            buf: Box::default(),
            len: 0,
            wrapped: false,
            sentinel: true,
        }
    }

    /// Returns the number of elements in the list.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the backing buffer can hold without reallocating.
    pub const fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if the backing buffer was originally supplied by the caller.
    pub const fn is_wrapped(&self) -> bool {
        self.wrapped
    }

    /// Returns the whole backing buffer, including the cleared slots past `len`.
    pub fn elements(&self) -> &[T] {
        &self.buf
    }

    /// Returns the elements of the list as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.buf[..self.len]
    }

    /// Returns the elements of the list as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf[..self.len]
    }

    /// Returns a borrowed iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a reference to the last element, if any.
    pub fn top(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the index of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    /// Returns the index of the last element equal to `value`.
    pub fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().rposition(|item| item == value)
    }

    /// Returns true if any element is equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Sorts the elements with `compare`, keeping equal elements in their original order.
    pub fn sort_by<F: FnMut(&T, &T) -> Ordering>(&mut self, compare: F) {
        self.as_mut_slice().sort_by(compare);
    }

    /// Sorts the elements with `compare`. Usually faster than [`sort_by`](ArrayList::sort_by) but
    /// doesn't preserve the order of equal elements.
    pub fn unstable_sort_by<F: FnMut(&T, &T) -> Ordering>(&mut self, compare: F) {
        self.as_mut_slice().sort_unstable_by(compare);
    }

    /// Sorts the elements by their natural ordering.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.as_mut_slice().sort();
    }

    /// Sorts the elements by their natural ordering, without preserving the order of equal
    /// elements.
    pub fn unstable_sort(&mut self)
    where
        T: Ord,
    {
        self.as_mut_slice().sort_unstable();
    }
}

impl<T: Element> ArrayList<T> {
    /// Creates a new ArrayList with capacity exactly equal to `cap`.
    ///
    /// # Panics
    /// Panics if `cap` exceeds the maximum capacity for `T`.
    pub fn with_capacity(cap: usize) -> ArrayList<T> {
        if cap > max_capacity::<T>() {
            Err(CapacityOverflow).throw()
        }

        ArrayList {
            buf: Self::cleared(cap),
            len: 0,
            wrapped: false,
            sentinel: false,
        }
    }

    /// Creates an ArrayList holding a copy of `values`, with capacity equal to its length.
    pub fn from_slice(values: &[T]) -> ArrayList<T> {
        ArrayList {
            len: values.len(),
            buf: values.into(),
            wrapped: false,
            sentinel: false,
        }
    }

    /// Creates an ArrayList holding a copy of every element of `other`.
    pub fn from_list<L: List<T> + ?Sized>(other: &L) -> ArrayList<T> {
        match other.contiguous() {
            Some(slice) => Self::from_slice(slice),
            None => {
                let values = other.to_vec();
                ArrayList {
                    len: values.len(),
                    buf: values.into_boxed_slice(),
                    wrapped: false,
                    sentinel: false,
                }
            }
        }
    }

    /// Takes ownership of `buf`, treating its first `len` values as the elements of the list and
    /// the rest as spare capacity. The spare slots are cleared immediately.
    ///
    /// Fails if `len` is larger than the buffer.
    ///
    /// # Examples
    /// ```
    /// # use specialized_collections::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::wrap(vec![1, 2, 3, 4].into_boxed_slice(), 2).unwrap();
    /// assert_eq!(list.as_slice(), &[1, 2]);
    /// assert_eq!(list.elements(), &[1, 2, 0, 0]);
    /// list.push(5);
    /// assert_eq!(list.capacity(), 4);
    /// ```
    pub fn wrap(mut buf: Box<[T]>, len: usize) -> Result<ArrayList<T>, ListError> {
        if len > buf.len() {
            return Err(IllegalArgument {
                message: "wrapped length exceeds buffer length",
            }
            .into());
        }

        buf[len..].fill_with(T::default);
        tracing::debug!(len, cap = buf.len(), "wrapping external buffer");

        Ok(ArrayList {
            buf,
            len,
            wrapped: true,
            sentinel: false,
        })
    }

    /// Takes ownership of `buf`, treating every value as an element of the list.
    pub fn wrap_all(buf: Box<[T]>) -> ArrayList<T> {
        let len = buf.len();
        ArrayList {
            buf,
            len,
            wrapped: true,
            sentinel: false,
        }
    }

    /// Returns a copy of the element at `index`.
    pub fn get(&self, index: usize) -> Result<T, ListError> {
        check_index(index, self.len)?;
        Ok(self.buf[index].clone())
    }

    /// Replaces the element at `index`, returning the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        check_index(index, self.len)?;
        Ok(mem::replace(&mut self.buf[index], value))
    }

    /// Appends `value`, growing the buffer if required.
    ///
    /// # Panics
    /// Panics if the list would exceed the maximum capacity for `T`.
    pub fn push(&mut self, value: T) {
        self.grow(self.len + 1);
        self.buf[self.len] = value;
        self.len += 1;
    }

    /// Removes and returns the last element, if any.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            Some(mem::take(&mut self.buf[self.len]))
        }
    }

    /// Inserts `value` at `index`, shifting all following elements up by one. `index` may be equal
    /// to `len`.
    ///
    /// # Panics
    /// Panics if the list would exceed the maximum capacity for `T`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        check_position(index, self.len)?;
        self.grow(self.len + 1);

        // The slot at len is cleared, so writing there and rotating it into place moves the tail
        // up by one in a single pass.
        self.buf[self.len] = value;
        self.buf[index..=self.len].rotate_right(1);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting all following elements down by one.
    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        check_index(index, self.len)?;

        self.buf[index..self.len].rotate_left(1);
        self.len -= 1;
        Ok(mem::take(&mut self.buf[self.len]))
    }

    /// Removes the first element equal to `value`, returning whether one was found.
    pub fn remove_item(&mut self, value: &T) -> bool {
        match self.index_of(value) {
            Some(index) => self.remove(index).is_ok(),
            None => false,
        }
    }

    /// Removes every element matching `predicate`, keeping the order of the rest. Returns whether
    /// anything was removed.
    pub fn remove_if<P: FnMut(&T) -> bool>(&mut self, mut predicate: P) -> bool {
        let mut kept = 0;
        for i in 0..self.len {
            if !predicate(&self.buf[i]) {
                self.buf.swap(kept, i);
                kept += 1;
            }
        }

        let removed = self.len - kept;
        self.buf[kept..self.len].fill_with(T::default);
        self.len = kept;
        removed > 0
    }

    /// Removes all elements, keeping the capacity.
    pub fn clear(&mut self) {
        self.buf[..self.len].fill_with(T::default);
        self.len = 0;
    }

    /// Sets the length of the list to `len`, truncating or appending `T::default()` as needed.
    ///
    /// # Panics
    /// Panics if `len` exceeds the maximum capacity for `T`.
    pub fn resize(&mut self, len: usize) {
        if self.sentinel {
            // The sentinel skips small explicit requests, but the new elements need real slots.
            self.grow(len);
        } else {
            self.ensure_capacity(len);
        }

        if len < self.len {
            self.buf[len..self.len].fill_with(T::default);
        }
        self.len = len;
    }

    /// Copies `dest.len()` elements starting at `from` into `dest`.
    pub fn get_elements(&self, from: usize, dest: &mut [T]) -> Result<(), ListError> {
        check_block(from, dest.len(), self.len)?;
        dest.clone_from_slice(&self.buf[from..from + dest.len()]);
        Ok(())
    }

    /// Overwrites `source.len()` elements starting at `index` with the contents of `source`.
    pub fn set_elements(&mut self, index: usize, source: &[T]) -> Result<(), ListError> {
        check_block(index, source.len(), self.len)?;
        self.buf[index..index + source.len()].clone_from_slice(source);
        Ok(())
    }

    /// Inserts all of `source` at `index`, preserving its order.
    ///
    /// # Panics
    /// Panics if the list would exceed the maximum capacity for `T`.
    pub fn add_elements(&mut self, index: usize, source: &[T]) -> Result<(), ListError> {
        check_position(index, self.len)?;
        let count = source.len();
        let new_len = self
            .len
            .checked_add(count)
            .ok_or(CapacityOverflow)
            .throw();
        self.grow(new_len);

        self.buf[self.len..new_len].clone_from_slice(source);
        self.buf[index..new_len].rotate_right(count);
        self.len = new_len;
        Ok(())
    }

    /// Inserts every element of `other` at `index`.
    ///
    /// # Panics
    /// Panics if the list would exceed the maximum capacity for `T`.
    pub fn add_all<L: List<T> + ?Sized>(&mut self, index: usize, other: &L) -> Result<(), ListError> {
        match other.contiguous() {
            Some(slice) => self.add_elements(index, slice),
            None => self.add_elements(index, &other.to_vec()),
        }
    }

    /// Removes the elements in `from..to`, shifting the tail down in a single block.
    pub fn remove_elements(&mut self, from: usize, to: usize) -> Result<(), ListError> {
        check_range(from, to, self.len)?;
        let count = to - from;

        self.buf[from..self.len].rotate_left(count);
        self.buf[self.len - count..self.len].fill_with(T::default);
        self.len -= count;
        Ok(())
    }

    /// Ensures that the list can hold at least `cap` elements without reallocating. Unlike growth
    /// on insertion, the new capacity is exactly `cap`.
    ///
    /// # Panics
    /// Panics if `cap` exceeds the maximum capacity for `T`.
    pub fn ensure_capacity(&mut self, cap: usize) {
        if cap <= self.capacity() || (self.sentinel && cap <= DEFAULT_INITIAL_CAPACITY) {
            return;
        }
        if cap > max_capacity::<T>() {
            Err(CapacityOverflow).throw()
        }

        self.realloc(cap);
    }

    /// Shrinks the backing buffer to `max(n, len)` elements, if it is currently larger.
    pub fn trim(&mut self, n: usize) {
        if n >= self.capacity() || self.len == self.capacity() {
            return;
        }

        self.realloc(cmp::max(n, self.len));
    }

    /// Shrinks the backing buffer so that its capacity equals the length of the list.
    pub fn trim_to_size(&mut self) {
        self.trim(0);
    }

    /// Grows the backing buffer so that it can hold at least `required` elements.
    ///
    /// # Panics
    /// Panics if `required` exceeds the maximum capacity for `T`.
    pub(crate) fn grow(&mut self, required: usize) {
        let cap = self.capacity();
        if required <= cap {
            return;
        }

        let max = max_capacity::<T>();
        if required > max {
            Err(CapacityOverflow).throw()
        }

        let new_cap = if self.sentinel {
            cmp::max(required, DEFAULT_INITIAL_CAPACITY)
        } else {
            cmp::max(cmp::min(cap + cap / 2, max), required)
        };

        self.realloc(new_cap);
    }

    /// Moves the elements into a new buffer of exactly `new_cap` slots. `new_cap` must be at least
    /// `len`.
    fn realloc(&mut self, new_cap: usize) {
        let old = mem::take(&mut self.buf).into_vec();

        let mut values = Vec::with_capacity(new_cap);
        values.extend(old.into_iter().take(self.len));
        values.resize_with(new_cap, T::default);

        self.buf = values.into_boxed_slice();
        self.sentinel = false;
        tracing::trace!(len = self.len, cap = new_cap, wrapped = self.wrapped, "reallocated buffer");
    }

    fn cleared(cap: usize) -> Box<[T]> {
        let mut values = Vec::with_capacity(cap);
        values.resize_with(cap, T::default);
        values.into_boxed_slice()
    }
}

impl<T: Element> List<T> for ArrayList<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Result<T, ListError> {
        ArrayList::get(self, index)
    }

    fn contiguous(&self) -> Option<&[T]> {
        Some(self.as_slice())
    }

    fn get_elements(&self, from: usize, dest: &mut [T]) -> Result<(), ListError> {
        ArrayList::get_elements(self, from, dest)
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        ArrayList::set(self, index, value)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        ArrayList::insert(self, index, value)
    }

    fn remove(&mut self, index: usize) -> Result<T, ListError> {
        ArrayList::remove(self, index)
    }

    fn push(&mut self, value: T) -> Result<(), ListError> {
        ArrayList::push(self, value);
        Ok(())
    }

    fn remove_item(&mut self, value: &T) -> Result<bool, ListError> {
        Ok(ArrayList::remove_item(self, value))
    }

    fn clear(&mut self) -> Result<(), ListError> {
        ArrayList::clear(self);
        Ok(())
    }

    fn add_elements(&mut self, index: usize, source: &[T]) -> Result<(), ListError> {
        ArrayList::add_elements(self, index, source)
    }

    fn set_elements(&mut self, index: usize, source: &[T]) -> Result<(), ListError> {
        ArrayList::set_elements(self, index, source)
    }

    fn remove_elements(&mut self, from: usize, to: usize) -> Result<(), ListError> {
        ArrayList::remove_elements(self, from, to)
    }

    fn remove_if<P: FnMut(&T) -> bool>(&mut self, predicate: P) -> Result<bool, ListError> {
        Ok(ArrayList::remove_if(self, predicate))
    }

    fn sort_by<F: FnMut(&T, &T) -> Ordering>(&mut self, compare: F) -> Result<(), ListError> {
        ArrayList::sort_by(self, compare);
        Ok(())
    }

    fn unstable_sort_by<F: FnMut(&T, &T) -> Ordering>(
        &mut self,
        compare: F,
    ) -> Result<(), ListError> {
        ArrayList::unstable_sort_by(self, compare);
        Ok(())
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        ArrayList {
            buf: self.as_slice().into(),
            len: self.len,
            wrapped: false,
            sentinel: false,
        }
    }
}

impl<T: Element> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.ensure_capacity(self.len.saturating_add(iter.size_hint().0));
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Element> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let values: Vec<T> = iter.into_iter().collect();
        values.into()
    }
}

impl<T> From<Vec<T>> for ArrayList<T> {
    fn from(value: Vec<T>) -> Self {
        ArrayList {
            len: value.len(),
            buf: value.into_boxed_slice(),
            wrapped: false,
            sentinel: false,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for ArrayList<T> {
    fn from(value: [T; N]) -> Self {
        Vec::from(value).into()
    }
}

impl<T> From<ArrayList<T>> for Vec<T> {
    fn from(value: ArrayList<T>) -> Self {
        let mut values = value.buf.into_vec();
        values.truncate(value.len);
        values
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;

    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Vec::from(self).into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Index<usize> for ArrayList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for ArrayList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: Element, L: List<T>> PartialEq<L> for ArrayList<T> {
    fn eq(&self, other: &L) -> bool {
        traits::equal(self, other)
    }
}

impl<T: Element + Eq> Eq for ArrayList<T> {}

impl<T: Hash> Hash for ArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: Debug> Debug for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayList")
            .field("contents", &self.as_slice())
            .field("len", &self.len)
            .field("cap", &self.capacity())
            .finish()
    }
}

impl<T: Display> Display for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}
