#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: int/long encode->decode roundtrip.
//
// Encodes a pair of signed values as zigzag varints, decodes them back and
// asserts values and lengths match.
fuzz_target!(|input: (i32, i64)| {
    let (int_value, long_value) = input;
    let mut buf = [0u8; avro_wire::varint::MAX_LONG_VARINT_BYTES];

    let len = avro_wire::varint::encode_int(int_value, &mut buf);
    assert_eq!(
        avro_wire::varint::decode_int(&buf[..len], 0),
        Ok((int_value, len))
    );

    let len = avro_wire::varint::encode_long(long_value, &mut buf);
    assert_eq!(
        avro_wire::varint::decode_long(&buf[..len], 0),
        Ok((long_value, len))
    );
});
