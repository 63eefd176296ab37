//! Zigzag varint codec for Avro `int` and `long`.
//!
//! Avro writes both integer types as a zigzag-mapped unsigned value in
//! little-endian base-128: each byte carries 7 data bits and uses its high
//! bit as a continuation flag.
//!
//! ```text
//!   signed   zigzag   wire bytes
//!   ──────   ──────   ──────────
//!        0        0   [0x00]
//!       -1        1   [0x01]
//!        1        2   [0x02]
//!       -2        3   [0x03]
//!       64      128   [0x80, 0x01]
//! ```

use crate::error::WireError;

/// Maximum number of bytes an `int` varint may occupy: ceil(32 / 7).
pub const MAX_INT_VARINT_BYTES: usize = 5;

/// Maximum number of bytes a `long` varint may occupy: ceil(64 / 7).
pub const MAX_LONG_VARINT_BYTES: usize = 10;

/// Map a signed 32-bit value onto the unsigned zigzag domain.
#[inline]
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn zigzag_encode_32(n: i32) -> u32 {
    ((n << 1) ^ (n >> 31)) as u32
}

/// Map a signed 64-bit value onto the unsigned zigzag domain.
#[inline]
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn zigzag_encode_64(n: i64) -> u64 {
    ((n << 1) ^ (n >> 63)) as u64
}

/// Inverse of [`zigzag_encode_32`]: `(u >> 1) ^ -(u & 1)`.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn zigzag_decode_32(u: u32) -> i32 {
    ((u >> 1) as i32) ^ -((u & 1) as i32)
}

/// Inverse of [`zigzag_encode_64`]: `(u >> 1) ^ -(u & 1)`.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn zigzag_decode_64(u: u64) -> i64 {
    ((u >> 1) as i64) ^ -((u & 1) as i64)
}

/// Encode a `u64` value as an unsigned base-128 varint into `buf`.
///
/// # Returns
///
/// The number of bytes written (1–10).
///
/// # Panics
///
/// Panics if `buf` is shorter than the required encoding length.
/// A buffer of [`MAX_LONG_VARINT_BYTES`] is always sufficient.
///
/// | Value   | Encoded bytes        |
/// |---------|----------------------|
/// | 0       | `[0x00]`             |
/// | 127     | `[0x7F]`             |
/// | 128     | `[0x80, 0x01]`       |
/// | 300     | `[0xAC, 0x02]`       |
/// | 16384   | `[0x80, 0x80, 0x01]` |
pub fn encode_varint(mut value: u64, buf: &mut [u8]) -> usize {
    let mut i = 0;
    loop {
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;

        if value > 0 {
            byte |= 0x80;
        }

        buf[i] = byte;
        i += 1;

        if value == 0 {
            return i;
        }
    }
}

/// Encode an Avro `int` (zigzag + varint). Writes at most 5 bytes.
///
/// # Panics
///
/// Panics if `buf` is too short for the encoding.
pub fn encode_int(value: i32, buf: &mut [u8]) -> usize {
    encode_varint(u64::from(zigzag_encode_32(value)), buf)
}

/// Encode an Avro `long` (zigzag + varint). Writes at most 10 bytes.
///
/// # Panics
///
/// Panics if `buf` is too short for the encoding.
pub fn encode_long(value: i64, buf: &mut [u8]) -> usize {
    encode_varint(zigzag_encode_64(value), buf)
}

/// Decode an Avro `int` starting at `buf[pos]`.
///
/// # Returns
///
/// `(value, bytes_consumed)` on success. Nothing is consumed on failure.
///
/// Bits beyond the 32nd carried by a fifth byte are dropped, matching the
/// reference readers.
///
/// # Errors
///
/// - [`WireError::IntOverflow`] if five bytes all carry the continuation
///   bit. This is checked before looking for a sixth byte.
/// - [`WireError::UnexpectedEof`] if the buffer ends first, including in
///   the middle of a varint.
#[allow(clippy::cast_possible_truncation)]
pub fn decode_int(buf: &[u8], pos: usize) -> Result<(i32, usize), WireError> {
    let (raw, n) = decode_unsigned(buf, pos, MAX_INT_VARINT_BYTES, WireError::IntOverflow)?;
    Ok((zigzag_decode_32(raw as u32), n))
}

/// Decode an Avro `long` starting at `buf[pos]`.
///
/// # Returns
///
/// `(value, bytes_consumed)` on success. Nothing is consumed on failure.
///
/// # Errors
///
/// - [`WireError::LongOverflow`] if ten bytes all carry the continuation bit.
/// - [`WireError::UnexpectedEof`] if the buffer ends first.
pub fn decode_long(buf: &[u8], pos: usize) -> Result<(i64, usize), WireError> {
    let (raw, n) = decode_unsigned(buf, pos, MAX_LONG_VARINT_BYTES, WireError::LongOverflow)?;
    Ok((zigzag_decode_64(raw), n))
}

/// Shared base-128 accumulation loop.
///
/// The byte budget is checked before each byte is fetched, so an endless
/// run of continuation bits is rejected after `max_bytes` reads no matter
/// how long the buffer is.
fn decode_unsigned(
    buf: &[u8],
    pos: usize,
    max_bytes: usize,
    overflow: WireError,
) -> Result<(u64, usize), WireError> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;
    let mut i = 0;

    loop {
        if i == max_bytes {
            return Err(overflow);
        }

        let Some(&byte) = pos.checked_add(i).and_then(|at| buf.get(at)) else {
            return Err(WireError::UnexpectedEof {
                offset: pos,
                needed: i + 1,
            });
        };

        result |= u64::from(byte & 0x7F) << shift;
        shift += 7;
        i += 1;

        if byte & 0x80 == 0 {
            return Ok((result, i));
        }
    }
}
