/// Errors raised by the wire-level primitives: the bounds guard and the
/// varint/zigzag codec.
///
/// ```text
///   WireError
///   ├── UnexpectedEof   ← fewer bytes remain than the read needs
///   ├── IntOverflow     ← int varint kept its continuation bit past 5 bytes
///   └── LongOverflow    ← long varint kept its continuation bit past 10 bytes
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// Input ended before the requested number of bytes could be read.
    ///
    /// `offset` is the cursor position where the read started and `needed`
    /// the number of bytes it required from there.
    #[error("unexpected end of input at offset {offset} (needed {needed} bytes)")]
    UnexpectedEof { offset: usize, needed: usize },

    /// A 32-bit varint did not terminate within 5 bytes.
    #[error("int varint too long: exceeded 5-byte limit")]
    IntOverflow,

    /// A 64-bit varint did not terminate within 10 bytes.
    #[error("long varint too long: exceeded 10-byte limit")]
    LongOverflow,
}
