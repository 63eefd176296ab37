use std::borrow::Cow;
use std::ops::Range;

use avro_wire::bounds;
use avro_wire::varint::{decode_int, decode_long};
use avro_wire::{DataBlock, WireError};
use tracing::{debug, trace};

use crate::config::DecoderConfig;
use crate::error::DecodeError;

/// Framing of one array or map block.
///
/// ```text
///   count >= 0 :  count (long)                         → byte_size = None
///   count <  0 :  -count (long) │ byte_size (long)     → byte_size = Some
///   count == 0 :  end of the container
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemBlock {
    /// Number of items in this block. Zero ends the container.
    pub count: u64,

    /// Byte length of the block's items, present when the writer emitted a
    /// negative count. Stored as written; it is not validated.
    pub byte_size: Option<i64>,
}

impl ItemBlock {
    /// Whether this block terminates the container.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.count == 0
    }

    /// The byte size as a skip distance, if one was written and is usable.
    #[must_use]
    pub fn skip_len(&self) -> Option<usize> {
        self.byte_size.and_then(|size| usize::try_from(size).ok())
    }
}

/// The read operations of an Avro decoder.
///
/// Callers issue reads in the order dictated by the writer's schema. Each
/// call either advances the cursor past exactly one value and returns it, or
/// fails and leaves the cursor where it was. The one exception is
/// [`DecodeError::InvalidBoolean`], which consumes its byte.
///
/// Containers are read with the block-count protocol:
///
/// ```text
///   let mut n = decoder.read_array_start()?;
///   while n > 0 {
///       for _ in 0..n { /* read one item */ }
///       n = decoder.array_next()?;
///   }
/// ```
///
/// How each read can fail:
///
/// | Read                  | Failures besides end of input                       |
/// |-----------------------|-----------------------------------------------------|
/// | `boolean`             | [`DecodeError::InvalidBoolean`]                     |
/// | `int`, `enum`         | [`WireError::IntOverflow`]                          |
/// | `long`, item blocks   | [`WireError::LongOverflow`] (either varint)         |
/// | `bytes`               | `LongOverflow`, `InvalidLength`, `LengthLimitExceeded` |
/// | `string`              | `IntOverflow`, `InvalidLength`, `LengthLimitExceeded`, `InvalidUtf8` |
/// | `fixed`               | [`DecodeError::FixedOutOfBounds`]                   |
///
/// `null` never fails.
#[allow(clippy::missing_errors_doc)]
pub trait Decoder {
    /// Zero bytes on the wire.
    fn read_null(&mut self) -> Result<(), DecodeError>;

    /// One byte, `0x01` is true.
    fn read_boolean(&mut self) -> Result<bool, DecodeError>;

    /// Zigzag varint, at most 5 bytes.
    fn read_int(&mut self) -> Result<i32, DecodeError>;

    /// Zigzag varint, at most 10 bytes.
    fn read_long(&mut self) -> Result<i64, DecodeError>;

    /// 4 bytes, little-endian IEEE-754.
    fn read_float(&mut self) -> Result<f32, DecodeError>;

    /// 8 bytes, little-endian IEEE-754.
    fn read_double(&mut self) -> Result<f64, DecodeError>;

    /// A `long` length followed by that many raw bytes.
    fn read_bytes(&mut self) -> Result<Vec<u8>, DecodeError>;

    /// An `int` length (not a `long` as for bytes) followed by that many
    /// UTF-8 bytes.
    fn read_string(&mut self) -> Result<String, DecodeError>;

    /// Symbol index. Same wire shape as `int`.
    fn read_enum(&mut self) -> Result<i32, DecodeError> {
        self.read_int()
    }

    /// Count and optional byte size of the next container block.
    fn read_item_block(&mut self) -> Result<ItemBlock, DecodeError>;

    fn read_array_start(&mut self) -> Result<u64, DecodeError> {
        self.read_item_block().map(|block| block.count)
    }

    /// Zero means the array is done.
    fn array_next(&mut self) -> Result<u64, DecodeError> {
        self.read_item_block().map(|block| block.count)
    }

    fn read_map_start(&mut self) -> Result<u64, DecodeError> {
        self.read_item_block().map(|block| block.count)
    }

    /// Zero means the map is done.
    fn map_next(&mut self) -> Result<u64, DecodeError> {
        self.read_item_block().map(|block| block.count)
    }

    /// Fill all of `dest` with the next `dest.len()` raw bytes.
    fn read_fixed(&mut self, dest: &mut [u8]) -> Result<(), DecodeError> {
        let length = dest.len();
        self.read_fixed_with_bounds(dest, 0, length)
    }

    /// Copy the next `length` raw bytes into `dest[start..start + length]`.
    ///
    /// The range must fit `dest`, and the buffer must hold `start + length`
    /// bytes past the cursor. Only `length` bytes are consumed.
    fn read_fixed_with_bounds(
        &mut self,
        dest: &mut [u8],
        start: usize,
        length: usize,
    ) -> Result<(), DecodeError>;

    /// Make `block` the active buffer and rewind to position 0.
    fn set_block(&mut self, block: DataBlock);

    /// Move the cursor. Not validated; a bad position surfaces as end of
    /// input on the next read.
    fn seek(&mut self, pos: usize);

    fn tell(&self) -> usize;
}

/// [`Decoder`] for the Avro binary encoding over an in-memory buffer.
///
/// The buffer is either borrowed for `'a` (see [`new`](Self::new)) or owned
/// after a [`set_block`](Decoder::set_block). Either way it is never
/// written to.
///
/// ```text
/// ┌───────────────────────────────────────────────┐
/// │ buf: [ consumed ... │ remaining ... ]         │
/// │                     ^ pos                     │
/// └───────────────────────────────────────────────┘
/// ```
///
/// Not synchronized. Use one decoder per thread or guard it externally.
#[derive(Clone, Debug, Default)]
pub struct BinaryDecoder<'a> {
    buf: Cow<'a, [u8]>,
    pos: usize,
    config: DecoderConfig,
}

impl<'a> BinaryDecoder<'a> {
    /// Decoder over a borrowed buffer, starting at position 0.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_config(buf, DecoderConfig::default())
    }

    #[must_use]
    pub fn with_config(buf: &'a [u8], config: DecoderConfig) -> Self {
        Self {
            buf: Cow::Borrowed(buf),
            pos: 0,
            config,
        }
    }

    /// Decoder that owns the bytes of `block`.
    #[must_use]
    pub fn from_block(block: DataBlock) -> BinaryDecoder<'static> {
        BinaryDecoder {
            buf: Cow::Owned(block.data),
            pos: 0,
            config: DecoderConfig::default(),
        }
    }

    /// Bytes left between the cursor and the end of the buffer.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Advance the cursor by `n` bytes without reading them.
    ///
    /// Pairs with [`ItemBlock::skip_len`] to jump over a container block.
    ///
    /// # Errors
    ///
    /// End of input if fewer than `n` bytes remain; the cursor is unchanged.
    pub fn skip(&mut self, n: usize) -> Result<(), DecodeError> {
        bounds::ensure(self.buf.len(), self.pos, n)?;
        self.pos += n;
        Ok(())
    }

    /// Borrowing form of [`read_bytes`](Decoder::read_bytes).
    ///
    /// # Errors
    ///
    /// See [`Decoder`].
    pub fn read_bytes_ref(&mut self) -> Result<&[u8], DecodeError> {
        let (length, prefix_len) =
            decode_long(&self.buf, self.pos).map_err(|err| self.wire_error(err))?;
        let range = self.payload_range(length, prefix_len)?;
        self.pos = range.end;
        Ok(&self.buf[range])
    }

    /// Borrowing form of [`read_string`](Decoder::read_string).
    ///
    /// # Errors
    ///
    /// See [`Decoder`].
    pub fn read_str_ref(&mut self) -> Result<&str, DecodeError> {
        let (length, prefix_len) =
            decode_int(&self.buf, self.pos).map_err(|err| self.wire_error(err))?;
        let range = self.payload_range(i64::from(length), prefix_len)?;
        let text = std::str::from_utf8(&self.buf[range.clone()]).map_err(|err| {
            DecodeError::InvalidUtf8 {
                offset: range.start + err.valid_up_to(),
            }
        })?;
        self.pos = range.end;
        Ok(text)
    }

    /// Consume exactly `n` bytes.
    fn take(&mut self, n: usize) -> Result<&[u8], DecodeError> {
        bounds::ensure(self.buf.len(), self.pos, n)?;
        let start = self.pos;
        self.pos += n;
        Ok(&self.buf[start..start + n])
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    /// Locate the payload behind a length prefix of `prefix_len` bytes at
    /// the cursor. Does not move the cursor.
    fn payload_range(&self, length: i64, prefix_len: usize) -> Result<Range<usize>, DecodeError> {
        let offset = self.pos;
        if length < 0 {
            return Err(DecodeError::InvalidLength { length, offset });
        }

        let start = offset + prefix_len;
        let len = usize::try_from(length).map_err(|_| WireError::UnexpectedEof {
            offset: start,
            needed: usize::MAX,
        })?;

        if !self.config.allows(len) {
            return Err(DecodeError::LengthLimitExceeded {
                length: len,
                limit: self.config.max_length.unwrap_or(usize::MAX),
                offset,
            });
        }

        bounds::ensure(self.buf.len(), start, len)?;
        Ok(start..start + len)
    }

    fn wire_error(&self, err: WireError) -> DecodeError {
        if matches!(err, WireError::IntOverflow | WireError::LongOverflow) {
            debug!(offset = self.pos, %err, "rejected overlong varint");
        }
        DecodeError::Wire(err)
    }
}

impl Decoder for BinaryDecoder<'_> {
    fn read_null(&mut self) -> Result<(), DecodeError> {
        Ok(())
    }

    fn read_boolean(&mut self) -> Result<bool, DecodeError> {
        let offset = self.pos;
        let [byte] = self.take_array::<1>()?;
        let value = byte == 1;
        if byte > 1 {
            debug!(offset, byte, "boolean byte is neither 0 nor 1");
            return Err(DecodeError::InvalidBoolean {
                found: byte,
                value,
                offset,
            });
        }
        Ok(value)
    }

    fn read_int(&mut self) -> Result<i32, DecodeError> {
        let (value, n) = decode_int(&self.buf, self.pos).map_err(|err| self.wire_error(err))?;
        self.pos += n;
        Ok(value)
    }

    fn read_long(&mut self) -> Result<i64, DecodeError> {
        let (value, n) = decode_long(&self.buf, self.pos).map_err(|err| self.wire_error(err))?;
        self.pos += n;
        Ok(value)
    }

    fn read_float(&mut self) -> Result<f32, DecodeError> {
        self.take_array().map(f32::from_le_bytes)
    }

    fn read_double(&mut self) -> Result<f64, DecodeError> {
        self.take_array().map(f64::from_le_bytes)
    }

    fn read_bytes(&mut self) -> Result<Vec<u8>, DecodeError> {
        self.read_bytes_ref().map(<[u8]>::to_vec)
    }

    fn read_string(&mut self) -> Result<String, DecodeError> {
        self.read_str_ref().map(str::to_owned)
    }

    fn read_item_block(&mut self) -> Result<ItemBlock, DecodeError> {
        let start = self.pos;
        let (raw, n) = decode_long(&self.buf, start).map_err(|err| self.wire_error(err))?;

        if raw >= 0 {
            self.pos = start + n;
            return Ok(ItemBlock {
                count: raw.unsigned_abs(),
                byte_size: None,
            });
        }

        // Negative count: the block's byte size follows and must be consumed
        // with it, or the next item read would land on the size varint.
        let (size, m) =
            decode_long(&self.buf, start + n).map_err(|err| self.wire_error(err))?;
        self.pos = start + n + m;
        Ok(ItemBlock {
            count: raw.unsigned_abs(),
            byte_size: Some(size),
        })
    }

    fn read_fixed_with_bounds(
        &mut self,
        dest: &mut [u8],
        start: usize,
        length: usize,
    ) -> Result<(), DecodeError> {
        let end = start
            .checked_add(length)
            .filter(|&end| end <= dest.len())
            .ok_or(DecodeError::FixedOutOfBounds {
                start,
                length,
                capacity: dest.len(),
            })?;
        // The destination offset counts against the source as well.
        bounds::ensure(self.buf.len(), self.pos, end)?;
        dest[start..end].copy_from_slice(self.take(length)?);
        Ok(())
    }

    fn set_block(&mut self, block: DataBlock) {
        trace!(
            len = block.data.len(),
            num_entries = block.num_entries,
            "switching to new data block"
        );
        self.buf = Cow::Owned(block.data);
        self.pos = 0;
    }

    fn seek(&mut self, pos: usize) {
        trace!(from = self.pos, to = pos, "seek");
        self.pos = pos;
    }

    fn tell(&self) -> usize {
        self.pos
    }
}
