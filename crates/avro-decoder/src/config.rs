/// Tunables for a [`BinaryDecoder`](crate::BinaryDecoder).
///
/// ```text
/// ┌────────────┬──────────────────────────────────────────────────────┐
/// │ Field      │ Purpose                                              │
/// ├────────────┼──────────────────────────────────────────────────────┤
/// │ max_length │ Cap on a single bytes/string length prefix           │
/// └────────────┴──────────────────────────────────────────────────────┘
/// ```
///
/// The buffer bound always applies. `max_length` tightens it for callers
/// that want to reject oversized values before they are copied out, for
/// example when the active block is large and the values are expected to
/// be small.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Largest accepted bytes/string payload. `None` means no limit beyond
    /// the bytes actually left in the buffer.
    pub max_length: Option<usize>,
}

impl DecoderConfig {
    /// Configuration with a payload length cap.
    #[must_use]
    pub fn with_max_length(limit: usize) -> Self {
        Self {
            max_length: Some(limit),
        }
    }

    /// Whether a payload of `length` bytes is within the configured cap.
    #[must_use]
    pub fn allows(&self, length: usize) -> bool {
        self.max_length.is_none_or(|limit| length <= limit)
    }
}
