#![warn(clippy::pedantic)]

//! Cursor-based reader for the Avro binary encoding.
//!
//! A [`BinaryDecoder`] walks an in-memory buffer one typed value at a time.
//! Which value comes next is decided by the caller (usually a schema-driven
//! layer); the decoder only knows how each primitive and container frame is
//! laid out on the wire.
//!
//! ```rust
//! use avro_decoder::{BinaryDecoder, Decoder};
//!
//! let mut decoder = BinaryDecoder::new(&[0x06, b'f', b'o', b'o', 0x03]);
//! assert_eq!(decoder.read_string().unwrap(), "foo");
//! assert_eq!(decoder.read_int().unwrap(), -2);
//! assert_eq!(decoder.tell(), 5);
//! ```

pub mod config;
pub mod decoder;
pub mod error;

pub use avro_wire::DataBlock;
pub use config::DecoderConfig;
pub use decoder::{BinaryDecoder, Decoder, ItemBlock};
pub use error::DecodeError;
