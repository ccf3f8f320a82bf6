use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use super::unsupported;
use crate::collections::traits::{Element, List};
use crate::util::error::{IndexOutOfBounds, ListError};

/// An immutable list with no elements.
///
/// Empty is zero-sized and can be created in a `const` context, so a single shared instance costs
/// nothing:
///
/// ```
/// # use specialized_collections::collections::traits::List;
/// # use specialized_collections::collections::wrappers::Empty;
/// const NOTHING: Empty<u64> = Empty::new();
/// assert!(NOTHING.is_empty());
/// assert!(!NOTHING.contains(&0));
/// ```
pub struct Empty<T> {
    pub(crate) _phantom: PhantomData<fn() -> T>,
}

impl<T> Empty<T> {
    /// Creates an empty list.
    pub const fn new() -> Empty<T> {
        Empty {
            _phantom: PhantomData,
        }
    }
}

impl<T: Element> List<T> for Empty<T> {
    fn len(&self) -> usize {
        0
    }

    fn is_empty(&self) -> bool {
        true
    }

    fn get(&self, index: usize) -> Result<T, ListError> {
        Err(IndexOutOfBounds { index, len: 0 }.into())
    }

    fn contiguous(&self) -> Option<&[T]> {
        Some(&[])
    }

    fn index_of(&self, _value: &T) -> Option<usize> {
        None
    }

    fn last_index_of(&self, _value: &T) -> Option<usize> {
        None
    }

    fn contains(&self, _value: &T) -> bool {
        false
    }

    fn to_vec(&self) -> Vec<T> {
        Vec::new()
    }

    fn for_each<F: FnMut(T)>(&self, _action: F) {}

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

impl<T> Default for Empty<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> PartialEq for Empty<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for Empty<T> {}

impl<T> Debug for Empty<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Empty")
    }
}
