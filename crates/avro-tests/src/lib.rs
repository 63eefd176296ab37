//! Fixture builder for the integration tests and benches.
//!
//! [`DatumBuilder`] writes values in the Avro binary encoding using the
//! reference encoders from `avro-wire`, so tests can describe inputs as a
//! sequence of typed values instead of raw hex.

use avro_wire::varint::{MAX_LONG_VARINT_BYTES, encode_int, encode_long};

/// Append-only Avro binary writer for test inputs.
///
/// ```rust
/// use avro_tests::DatumBuilder;
///
/// let bytes = DatumBuilder::new().string("foo").int(-2).finish();
/// assert_eq!(bytes, [0x06, b'f', b'o', b'o', 0x03]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DatumBuilder {
    buf: Vec<u8>,
}

impl DatumBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn boolean(mut self, value: bool) -> Self {
        self.buf.push(u8::from(value));
        self
    }

    #[must_use]
    pub fn int(mut self, value: i32) -> Self {
        let mut scratch = [0u8; MAX_LONG_VARINT_BYTES];
        let n = encode_int(value, &mut scratch);
        self.buf.extend_from_slice(&scratch[..n]);
        self
    }

    #[must_use]
    pub fn long(mut self, value: i64) -> Self {
        let mut scratch = [0u8; MAX_LONG_VARINT_BYTES];
        let n = encode_long(value, &mut scratch);
        self.buf.extend_from_slice(&scratch[..n]);
        self
    }

    #[must_use]
    pub fn float(mut self, value: f32) -> Self {
        self.buf.extend_from_slice(&value.to_le_bytes());
        self
    }

    #[must_use]
    pub fn double(mut self, value: f64) -> Self {
        self.buf.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// `bytes`: long length prefix, then the payload.
    ///
    /// # Panics
    ///
    /// Panics if the payload length does not fit an `i64`.
    #[must_use]
    pub fn bytes(self, value: &[u8]) -> Self {
        let len = i64::try_from(value.len()).expect("payload length fits i64");
        self.long(len).raw(value)
    }

    /// `string`: int length prefix, then the UTF-8 payload.
    ///
    /// # Panics
    ///
    /// Panics if the string is longer than `i32::MAX` bytes.
    #[must_use]
    pub fn string(self, value: &str) -> Self {
        let len = i32::try_from(value.len()).expect("string length fits i32");
        self.int(len).raw(value.as_bytes())
    }

    /// Bytes written as-is, for `fixed` values and malformed input.
    #[must_use]
    pub fn raw(mut self, value: &[u8]) -> Self {
        self.buf.extend_from_slice(value);
        self
    }

    /// Container block with a plain positive count.
    ///
    /// # Panics
    ///
    /// Panics if `count` does not fit an `i64`.
    #[must_use]
    pub fn block_count(self, count: usize) -> Self {
        self.long(i64::try_from(count).expect("count fits i64"))
    }

    /// Container block with a negated count followed by its byte size.
    ///
    /// # Panics
    ///
    /// Panics if `count` or `byte_size` does not fit an `i64`.
    #[must_use]
    pub fn sized_block_count(self, count: usize, byte_size: usize) -> Self {
        let count = i64::try_from(count).expect("count fits i64");
        let size = i64::try_from(byte_size).expect("byte size fits i64");
        self.long(-count).long(size)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}
