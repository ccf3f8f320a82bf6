//! A module containing [`ArrayList`] and its associated constants.
//!
//! Borrowed iteration uses [`Iter`](std::slice::Iter) from [`std::slice`], owned iteration uses
//! [`IntoIter`](std::vec::IntoIter) from [`std::vec`]. Index-based traversal with fail-fast
//! checks lives in [`traversal`](crate::collections::traversal).
//!
//! [`ArrayList`] is also re-exported under the parent module.

mod array_list;
#[cfg(feature = "serde")]
mod serde;
mod tests;

pub use array_list::*;
