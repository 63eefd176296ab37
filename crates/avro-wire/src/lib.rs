#![warn(clippy::pedantic)]

pub mod block;
pub mod bounds;
pub mod error;
pub mod varint;

pub use block::DataBlock;
pub use error::WireError;
