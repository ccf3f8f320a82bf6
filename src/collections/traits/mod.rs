//! Traits shared by the collection types, primarily [`List`], the capability interface that every
//! list, view and wrapper implements.

mod list;

pub use list::*;
