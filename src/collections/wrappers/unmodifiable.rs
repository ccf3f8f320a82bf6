use std::cmp::Ordering;
use std::ops::Deref;

use super::unsupported;
use crate::collections::traits::{Element, List};
use crate::util::error::ListError;

/// A read-only wrapper around a list. Every query is forwarded to the wrapped list, and every
/// mutation fails with [`UnsupportedOperation`](crate::error::UnsupportedOperation) without
/// touching it.
///
/// The wrapper holds a pointer to the list rather than the list itself: anything that
/// dereferences to a [`List`] works, such as `&L`, [`Box<L>`], [`Rc<L>`](std::rc::Rc) or
/// [`Arc<L>`](std::sync::Arc).
///
/// # Examples
/// ```
/// # use specialized_collections::collections::contiguous::ArrayList;
/// # use specialized_collections::collections::traits::List;
/// # use specialized_collections::collections::wrappers::Unmodifiable;
/// let list = ArrayList::from([3, 1, 2]);
/// let mut view = Unmodifiable::new(&list);
/// assert_eq!(view.get(1), Ok(1));
/// assert!(view.push(4).unwrap_err().is_unsupported());
/// assert_eq!(list.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unmodifiable<P> {
    pub(crate) inner: P,
}

impl<P> Unmodifiable<P> {
    /// Wraps `inner`, which should dereference to a [`List`].
    pub const fn new(inner: P) -> Unmodifiable<P> {
        Unmodifiable { inner }
    }

    /// Returns the wrapped pointer.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<T, P> List<T> for Unmodifiable<P>
where
    T: Element,
    P: Deref,
    P::Target: List<T>,
{
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn get(&self, index: usize) -> Result<T, ListError> {
        self.inner.get(index)
    }

    fn contiguous(&self) -> Option<&[T]> {
        self.inner.contiguous()
    }

    fn index_of(&self, value: &T) -> Option<usize> {
        self.inner.index_of(value)
    }

    fn last_index_of(&self, value: &T) -> Option<usize> {
        self.inner.last_index_of(value)
    }

    fn contains(&self, value: &T) -> bool {
        self.inner.contains(value)
    }

    fn to_vec(&self) -> Vec<T> {
        self.inner.to_vec()
    }

    fn get_elements(&self, from: usize, dest: &mut [T]) -> Result<(), ListError> {
        self.inner.get_elements(from, dest)
    }

    fn for_each<F: FnMut(T)>(&self, action: F) {
        List::for_each(&*self.inner, action);
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

    fn remove_if<F: FnMut(&T) -> bool>(&mut self, _predicate: F) -> Result<bool, ListError> {
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
