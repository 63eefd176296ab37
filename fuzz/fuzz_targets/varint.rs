#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: zigzag varint decoding at every offset.
//
// Catches bugs in:
// - Overflow detection (5 bytes for int, 10 for long)
// - Buffers ending mid-varint
// - Offsets at or past the end of input
fuzz_target!(|data: &[u8]| {
    for pos in 0..=data.len() {
        if let Ok((_, n)) = avro_wire::varint::decode_int(data, pos) {
            assert!(n <= avro_wire::varint::MAX_INT_VARINT_BYTES);
            assert!(pos + n <= data.len());
        }
        if let Ok((_, n)) = avro_wire::varint::decode_long(data, pos) {
            assert!(n <= avro_wire::varint::MAX_LONG_VARINT_BYTES);
            assert!(pos + n <= data.len());
        }
    }
});
