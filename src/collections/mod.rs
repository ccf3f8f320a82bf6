//! Growable-array collections, the views and wrappers composed over them, and the traversal
//! types they share.
//!
//! # Method
//! Every type here implements [`List`](traits::List), so [`SubList`](view::SubList),
//! [`Synchronized`](wrappers::Synchronized) and [`Unmodifiable`](wrappers::Unmodifiable) work over
//! any list (including each other) without knowing how it stores its elements.
//! [`ArrayList`](contiguous::ArrayList) overrides the element-by-element defaults of the trait with
//! block copies over its buffer.

pub mod contiguous;
pub mod traits;
pub mod traversal;
pub mod view;
pub mod wrappers;
