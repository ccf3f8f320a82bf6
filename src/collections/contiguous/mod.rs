//! Collections backed by a single contiguous buffer. Currently this is only [`ArrayList`], the
//! growable store that the views and wrappers of this crate are built around.

pub mod array_list;

#[doc(inline)]
pub use array_list::{ArrayList, DEFAULT_INITIAL_CAPACITY};
