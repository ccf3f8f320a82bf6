//! Index-based traversal over any [`List`](crate::collections::traits::List).
//!
//! [`Cursor`] and [`Spliterator`] are detached: they hold positions rather than borrows, and take
//! the list on every call. This lets them outlive a borrow of the list and detect structural
//! modifications made elsewhere, failing fast with
//! [`ConcurrentModification`](crate::error::ConcurrentModification). [`ListIter`] and [`Values`]
//! are the borrowing counterparts for ordinary iteration.

mod cursor;
mod list_iter;
mod spliterator;
mod values;

pub use cursor::*;
pub use list_iter::*;
pub use spliterator::*;
pub use values::*;
