use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::collections::traits::{Element, List};
use crate::util::error::ListError;

/// A thread-safe wrapper which serializes every [`List`] operation under a single lock.
///
/// Clones share both the list and the lock, so a Synchronized can be cloned into several threads.
/// Each forwarded call, including [`len`](List::len) and the bulk operations, holds the lock for its
/// whole duration.
///
/// # Iteration
/// Traversal is **not** covered by the lock as a whole. A [`ListIter`](crate::collections::traversal::ListIter)
/// or [`Cursor`](crate::collections::traversal::Cursor) driven through this wrapper takes the lock
/// once per step, so other threads may modify the list between steps. To traverse a consistent
/// snapshot, hold the guard returned by [`lock`](Synchronized::lock) for the whole iteration:
///
/// ```
/// # use specialized_collections::collections::contiguous::ArrayList;
/// # use specialized_collections::collections::wrappers::Synchronized;
/// let shared = Synchronized::new(ArrayList::from([1, 2, 3]));
/// let total: i32 = shared.lock().iter().sum();
/// assert_eq!(total, 6);
/// ```
pub struct Synchronized<L> {
    pub(crate) inner: Arc<Mutex<L>>,
}

impl<L> Synchronized<L> {
    /// Wraps `list` with a lock of its own.
    pub fn new(list: L) -> Synchronized<L> {
        Synchronized {
            inner: Arc::new(Mutex::new(list)),
        }
    }

    /// Wraps a list that is already guarded by `lock`, so that this wrapper and any other holder of
    /// the same [`Arc`] serialize against each other.
    pub const fn with_lock(lock: Arc<Mutex<L>>) -> Synchronized<L> {
        Synchronized { inner: lock }
    }

    /// Blocks until the lock is acquired, returning a guard that gives direct access to the list.
    pub fn lock(&self) -> MutexGuard<'_, L> {
        self.inner.lock()
    }

    /// Returns the lock guarding the list.
    pub fn shared(&self) -> Arc<Mutex<L>> {
        Arc::clone(&self.inner)
    }

    /// Returns the list if this is the only remaining handle to it, otherwise returns self.
    pub fn into_inner(self) -> Result<L, Synchronized<L>> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => Ok(mutex.into_inner()),
            Err(inner) => Err(Synchronized { inner }),
        }
    }
}

impl<L> Clone for Synchronized<L> {
    fn clone(&self) -> Self {
        Synchronized {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<L: Debug> Debug for Synchronized<L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Synchronized")
            .field("inner", &*self.inner.lock())
            .finish()
    }
}

impl<T: Element, L: List<T>> List<T> for Synchronized<L> {
    fn len(&self) -> usize {
        self.inner.lock().len()
    }

    fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    fn get(&self, index: usize) -> Result<T, ListError> {
        self.inner.lock().get(index)
    }

    fn index_of(&self, value: &T) -> Option<usize> {
        self.inner.lock().index_of(value)
    }

    fn last_index_of(&self, value: &T) -> Option<usize> {
        self.inner.lock().last_index_of(value)
    }

    fn contains(&self, value: &T) -> bool {
        self.inner.lock().contains(value)
    }

    fn to_vec(&self) -> Vec<T> {
        self.inner.lock().to_vec()
    }

    fn get_elements(&self, from: usize, dest: &mut [T]) -> Result<(), ListError> {
        self.inner.lock().get_elements(from, dest)
    }

    fn for_each<F: FnMut(T)>(&self, action: F) {
        List::for_each(&*self.inner.lock(), action);
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        self.inner.lock().set(index, value)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        self.inner.lock().insert(index, value)
    }

    fn remove(&mut self, index: usize) -> Result<T, ListError> {
        self.inner.lock().remove(index)
    }

    fn push(&mut self, value: T) -> Result<(), ListError> {
        self.inner.lock().push(value)
    }

    fn remove_item(&mut self, value: &T) -> Result<bool, ListError> {
        self.inner.lock().remove_item(value)
    }

    fn clear(&mut self) -> Result<(), ListError> {
        self.inner.lock().clear()
    }

    fn add_elements(&mut self, index: usize, source: &[T]) -> Result<(), ListError> {
        self.inner.lock().add_elements(index, source)
    }

    fn set_elements(&mut self, index: usize, source: &[T]) -> Result<(), ListError> {
        self.inner.lock().set_elements(index, source)
    }

    fn remove_elements(&mut self, from: usize, to: usize) -> Result<(), ListError> {
        self.inner.lock().remove_elements(from, to)
    }

    fn remove_if<P: FnMut(&T) -> bool>(&mut self, predicate: P) -> Result<bool, ListError> {
        self.inner.lock().remove_if(predicate)
    }

    fn sort_by<F: FnMut(&T, &T) -> Ordering>(&mut self, compare: F) -> Result<(), ListError> {
        self.inner.lock().sort_by(compare)
    }

    fn unstable_sort_by<F: FnMut(&T, &T) -> Ordering>(
        &mut self,
        compare: F,
    ) -> Result<(), ListError> {
        self.inner.lock().unstable_sort_by(compare)
    }
}
