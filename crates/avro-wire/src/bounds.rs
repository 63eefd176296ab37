use crate::error::WireError;

/// Returns whether `required` more bytes are available at `pos` in a buffer
/// of `len` bytes.
///
/// A position past the end (possible after an unchecked seek) never fits,
/// whatever `required` is. Overflowing `pos + required` is treated as out
/// of bounds.
#[inline]
#[must_use]
pub fn fits(len: usize, pos: usize, required: usize) -> bool {
    pos.checked_add(required).is_some_and(|end| end <= len)
}

/// [`fits`] as a `Result`, for use with `?`.
///
/// # Errors
///
/// [`WireError::UnexpectedEof`] carrying `pos` and `required` when the bytes
/// are not there.
#[inline]
pub fn ensure(len: usize, pos: usize, required: usize) -> Result<(), WireError> {
    if fits(len, pos, required) {
        Ok(())
    } else {
        Err(WireError::UnexpectedEof {
            offset: pos,
            needed: required,
        })
    }
}
