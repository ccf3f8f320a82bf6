use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("index {index} out of bounds for collection with {len} elements")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("range {from}..{to} is inverted")]
pub struct InvalidRange {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("capacity overflow")]
pub struct CapacityOverflow;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("collection modified during traversal: expected {expected} elements, found {found}")]
pub struct ConcurrentModification {
    pub expected: usize,
    pub found: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("no such element")]
pub struct NoSuchElement;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("no element has been returned since the last structural change")]
pub struct IllegalState;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("operation not supported by this collection")]
pub struct UnsupportedOperation;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("illegal argument: {message}")]
pub struct IllegalArgument {
    pub message: &'static str,
}

/// Every fault a [`List`](crate::collections::traits::List) operation can report. Callers can branch
/// on the kind with the generated `is_*` methods, or match on the contained struct for details.
#[derive(Debug, Display, Error, From, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    IndexOutOfBounds(IndexOutOfBounds),
    InvalidRange(InvalidRange),
    ConcurrentModification(ConcurrentModification),
    NoSuchElement(NoSuchElement),
    IllegalState(IllegalState),
    Unsupported(UnsupportedOperation),
    IllegalArgument(IllegalArgument),
}
