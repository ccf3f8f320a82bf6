use std::cmp::Ordering;
use std::slice;

use super::unsupported;
use crate::collections::traits::{Element, List};
use crate::util::error::{IndexOutOfBounds, ListError};

/// An immutable list of exactly one element.
///
/// Every query is answered directly from the single value: the length is always 1, and
/// [`contains`](List::contains) is a single comparison. All mutations fail with
/// [`UnsupportedOperation`](crate::error::UnsupportedOperation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Singleton<T> {
    pub(crate) value: T,
}

impl<T> Singleton<T> {
    /// Creates a list containing only `value`.
    pub const fn new(value: T) -> Singleton<T> {
        Singleton { value }
    }

    /// Returns a reference to the element.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns the element.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Element> List<T> for Singleton<T> {
    fn len(&self) -> usize {
        1
    }

    fn is_empty(&self) -> bool {
        false
    }

    fn get(&self, index: usize) -> Result<T, ListError> {
        match index {
            0 => Ok(self.value.clone()),
            _ => Err(IndexOutOfBounds { index, len: 1 }.into()),
        }
    }

    fn contiguous(&self) -> Option<&[T]> {
        Some(slice::from_ref(&self.value))
    }

    fn index_of(&self, value: &T) -> Option<usize> {
        (self.value == *value).then_some(0)
    }

    fn last_index_of(&self, value: &T) -> Option<usize> {
        self.index_of(value)
    }

    fn contains(&self, value: &T) -> bool {
        self.value == *value
    }

    fn to_vec(&self) -> Vec<T> {
        vec![self.value.clone()]
    }

    fn for_each<F: FnMut(T)>(&self, mut action: F) {
        action(self.value.clone());
    }

    fn set(&mut self, _index: usize, _value: T) -> Result<T, ListError> {
        unsupported()
    }

    fn insert(&mut self, _index: usize, _value: T) -> Result<(), ListError> {
        unsupported()
    }

    fn remove(&mut self, _index: usize) -> Result<T, ListError> {
        unsupported()
    }

    fn push(&mut self, _value: T) -> Result<(), ListError> {
        unsupported()
    }

    fn remove_item(&mut self, _value: &T) -> Result<bool, ListError> {
        unsupported()
    }

    fn clear(&mut self) -> Result<(), ListError> {
        unsupported()
    }

    fn add_elements(&mut self, _index: usize, _source: &[T]) -> Result<(), ListError> {
        unsupported()
    }

    fn set_elements(&mut self, _index: usize, _source: &[T]) -> Result<(), ListError> {
        unsupported()
    }

    fn remove_elements(&mut self, _from: usize, _to: usize) -> Result<(), ListError> {
        unsupported()
    }

    fn remove_if<P: FnMut(&T) -> bool>(&mut self, _predicate: P) -> Result<bool, ListError> {
        unsupported()
    }

    fn sort_by<F: FnMut(&T, &T) -> Ordering>(&mut self, _compare: F) -> Result<(), ListError> {
        unsupported()
    }

    fn unstable_sort_by<F: FnMut(&T, &T) -> Ordering>(
        &mut self,
        _compare: F,
    ) -> Result<(), ListError> {
        unsupported()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Singleton<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(1))?;
        seq.serialize_element(&self.value)?;
        seq.end()
    }
}
