/// One framed chunk of raw datum bytes handed over by a container reader.
///
/// ```text
/// ┌──────────────────────────────────────────────────┐
/// │ DataBlock                                        │
/// │   data:        Vec<u8> ← serialized datums       │
/// │   num_entries: u64     ← datums declared by the  │
/// │                          container block header  │
/// └──────────────────────────────────────────────────┘
/// ```
///
/// The block owns its bytes. A decoder takes the whole block by value when
/// it switches to it, so a block is consumed exactly once and never
/// mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataBlock {
    /// The raw bytes that become the decoder's active buffer.
    pub data: Vec<u8>,

    /// Number of datums the framing layer says this block holds.
    ///
    /// Purely informational for the caller; the decoder never reads it.
    pub num_entries: u64,
}

impl DataBlock {
    #[must_use]
    pub fn new(data: Vec<u8>, num_entries: u64) -> Self {
        Self { data, num_entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Vec<u8>> for DataBlock {
    /// A block with unknown entry count.
    fn from(data: Vec<u8>) -> Self {
        Self {
            data,
            num_entries: 0,
        }
    }
}

impl From<&[u8]> for DataBlock {
    fn from(data: &[u8]) -> Self {
        Self::from(data.to_vec())
    }
}
