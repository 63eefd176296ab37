use avro_wire::WireError;

/// Errors returned by [`Decoder`](crate::Decoder) operations.
///
/// Every failure goes back to the immediate caller. The decoder never
/// retries and never skips ahead on its own.
///
/// ```text
///   DecodeError
///   ├── Wire(WireError)       ← end of input, int/long varint overflow
///   ├── InvalidLength         ← negative bytes/string length prefix
///   ├── InvalidBoolean        ← boolean byte other than 0 or 1 (non-fatal)
///   ├── InvalidUtf8           ← string payload is not UTF-8
///   ├── FixedOutOfBounds      ← fixed read does not fit the destination
///   └── LengthLimitExceeded   ← length prefix above DecoderConfig::max_length
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// A wire-level failure from the bounds guard or varint codec.
    #[error(transparent)]
    Wire(#[from] WireError),

    /// A bytes or string length prefix decoded to a negative number.
    ///
    /// `offset` is where the prefix starts. No payload bytes were read.
    #[error("invalid length {length} at offset {offset}")]
    InvalidLength { length: i64, offset: usize },

    /// A boolean byte was neither `0x00` nor `0x01`.
    ///
    /// The byte has been consumed and `value` holds the best-effort result
    /// (`found == 1`, which is always `false` here). Callers that want lenient
    /// decoding can take `value` and continue; see
    /// [`is_fatal`](Self::is_fatal).
    #[error("invalid boolean byte {found:#04X} at offset {offset}")]
    InvalidBoolean { found: u8, value: bool, offset: usize },

    /// A string payload is not valid UTF-8. `offset` points at the first
    /// invalid byte.
    #[error("invalid UTF-8 in string at offset {offset}")]
    InvalidUtf8 { offset: usize },

    /// `start + length` exceeds the caller's destination buffer.
    #[error("fixed read of {length} bytes at {start} does not fit destination of {capacity} bytes")]
    FixedOutOfBounds {
        start: usize,
        length: usize,
        capacity: usize,
    },

    /// A length prefix is larger than the configured maximum.
    #[error("length {length} at offset {offset} exceeds limit {limit}")]
    LengthLimitExceeded {
        length: usize,
        limit: usize,
        offset: usize,
    },
}

impl DecodeError {
    /// Whether the cursor state is unusable for the value just attempted.
    ///
    /// Only [`InvalidBoolean`](Self::InvalidBoolean) is non-fatal: the
    /// byte was fully consumed and a value is available.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::InvalidBoolean { .. })
    }

    /// Byte offset in the active buffer the error refers to, if known.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::Wire(WireError::UnexpectedEof { offset, .. })
            | Self::InvalidLength { offset, .. }
            | Self::InvalidBoolean { offset, .. }
            | Self::InvalidUtf8 { offset }
            | Self::LengthLimitExceeded { offset, .. } => Some(*offset),
            Self::Wire(WireError::IntOverflow | WireError::LongOverflow)
            | Self::FixedOutOfBounds { .. } => None,
        }
    }
}
