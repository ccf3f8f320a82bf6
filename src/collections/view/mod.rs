//! Views which project part of another list without copying it. Currently this is only
//! [`SubList`].

mod sub_list;

pub use sub_list::*;
