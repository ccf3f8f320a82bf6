//! Lists that add behavior on top of another list, or stand in for one.
//!
//! [`Synchronized`] and [`Unmodifiable`] wrap any [`List`](crate::collections::traits::List) and
//! forward to it, adding a lock or rejecting mutation. [`Singleton`] and [`Empty`] are fixed,
//! immutable lists that answer every query directly.

mod empty;
mod singleton;
mod synchronized;
mod unmodifiable;

pub use empty::*;
pub use singleton::*;
pub use synchronized::*;
pub use unmodifiable::*;

use crate::util::error::{ListError, UnsupportedOperation};

pub(crate) fn unsupported<R>() -> Result<R, ListError> {
    Err(UnsupportedOperation.into())
}
