#![no_main]

use arbitrary::Arbitrary;
use avro_decoder::{BinaryDecoder, DataBlock, DecodeError, Decoder};
use libfuzzer_sys::fuzz_target;

// Fuzz target: arbitrary sequences of typed reads over arbitrary bytes.
//
// No read may panic, and a failed read leaves the cursor where it was
// unless the error is the non-fatal bad boolean byte.

#[derive(Debug, Arbitrary)]
enum Op {
    Null,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    Bytes,
    String,
    Enum,
    ArrayStart,
    MapNext,
    Fixed { start: u8, length: u8 },
    Seek(u16),
    SetBlock(Vec<u8>),
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    data: Vec<u8>,
    ops: Vec<Op>,
}

fuzz_target!(|input: FuzzInput| {
    let FuzzInput { data, ops } = input;
    let mut d = BinaryDecoder::new(&data);
    let mut dest = [0u8; 64];

    for op in ops {
        let before = d.tell();
        let result: Result<(), DecodeError> = match op {
            Op::Null => d.read_null(),
            Op::Boolean => d.read_boolean().map(drop),
            Op::Int => d.read_int().map(drop),
            Op::Long => d.read_long().map(drop),
            Op::Float => d.read_float().map(drop),
            Op::Double => d.read_double().map(drop),
            Op::Bytes => d.read_bytes().map(drop),
            Op::String => d.read_string().map(drop),
            Op::Enum => d.read_enum().map(drop),
            Op::ArrayStart => d.read_array_start().map(drop),
            Op::MapNext => d.map_next().map(drop),
            Op::Fixed { start, length } => {
                d.read_fixed_with_bounds(&mut dest, usize::from(start), usize::from(length))
            }
            Op::Seek(pos) => {
                d.seek(usize::from(pos));
                Ok(())
            }
            Op::SetBlock(block) => {
                d.set_block(DataBlock::from(block));
                assert_eq!(d.tell(), 0);
                Ok(())
            }
        };

        if let Err(err) = result {
            if err.is_fatal() {
                assert_eq!(d.tell(), before, "{err}");
            }
        }
    }
});
