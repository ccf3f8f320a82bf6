//! Growable, array-backed lists for any element type, plus the machinery that composes over them:
//! fail-fast cursors, splittable traversal, live sub-range views, and synchronized, unmodifiable,
//! singleton and empty wrappers.
//!
//! # Purpose
//! The element type is a generic parameter rather than one hand-written copy per primitive, so a
//! list of `u8` stores bytes directly and never boxes its elements. Object-typed lists work the same
//! way; slots that no longer hold an element are reset to the type's [`Default`] value so they
//! don't keep anything alive.
//!
//! # Error Handling
//! Index, state and capability faults are reported through [`ListError`](error::ListError), an
//! enum of small structs (mostly ZSTs) that implement [`Error`](std::error::Error). Each kind can
//! be told apart by callers, and a rejected call leaves its list unchanged.
//!
//! Running out of capacity is different: the maximum capacity of a list of bytes on a 64-bit system
//! is `isize::MAX` elements, far beyond any real allocation, so growth past it panics instead of
//! forcing every push to return a [`Result`].
//!
//! # Logging
//! Buffer reallocations are reported as `trace` events through [`tracing`], and wrapping a
//! caller's buffer as a `debug` event. A capacity overflow logs an `error` event before panicking.
//! The library never installs a subscriber.
//!
//! # Features
//! - `serde`: `Serialize` and `Deserialize` for
//!   [`ArrayList`](collections::contiguous::ArrayList), writing only the live elements.
//! - `demo`: builds the `demo` binary, which logs through `tracing-subscriber`.
#![deny(unsafe_code)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;

#[doc(inline)]
pub use util::error;
