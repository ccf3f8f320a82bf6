use crate::util::error::{IndexOutOfBounds, InvalidRange, ListError};

/// Checks that `index` refers to an existing element.
pub(crate) const fn check_index(index: usize, len: usize) -> Result<(), ListError> {
    if index < len {
        Ok(())
    } else {
        Err(ListError::IndexOutOfBounds(IndexOutOfBounds { index, len }))
    }
}

/// Checks that `index` is a valid insertion point, which includes `len` itself.
pub(crate) const fn check_position(index: usize, len: usize) -> Result<(), ListError> {
    if index <= len {
        Ok(())
    } else {
        Err(ListError::IndexOutOfBounds(IndexOutOfBounds { index, len }))
    }
}

/// Checks that `from..to` is an ordered range contained within `0..len`.
pub(crate) const fn check_range(from: usize, to: usize, len: usize) -> Result<(), ListError> {
    if from > to {
        Err(ListError::InvalidRange(InvalidRange { from, to }))
    } else if to > len {
        Err(ListError::IndexOutOfBounds(IndexOutOfBounds { index: to, len }))
    } else {
        Ok(())
    }
}

/// Checks that a block of `count` elements starting at `from` lies within `0..len`.
pub(crate) const fn check_block(from: usize, count: usize, len: usize) -> Result<(), ListError> {
    match from.checked_add(count) {
        Some(to) => check_range(from, to, len),
        None => Err(ListError::IndexOutOfBounds(IndexOutOfBounds { index: usize::MAX, len })),
    }
}
