//! Conformance tests: wire vectors from the Avro binary encoding rules.
//!
//! Each test feeds a hand-written byte sequence to [`BinaryDecoder`] and
//! checks both the decoded value and how far the cursor moved. The vectors
//! are the ones any conformant writer produces, so a failure here means the
//! decoder would misread real data.

use avro_decoder::{BinaryDecoder, DataBlock, Decoder};
use avro_tests::DatumBuilder;

fn bytes(hex_str: &str) -> Vec<u8> {
    hex::decode(hex_str).unwrap_or_else(|e| panic!("bad hex vector {hex_str}: {e}"))
}

// ── Integers ─────────────────────────────────────────────────────────────────

#[test]
fn int_zero() {
    let buf = bytes("00");
    let mut d = BinaryDecoder::new(&buf);
    assert_eq!(d.read_int().unwrap(), 0);
    assert_eq!(d.tell(), 1);
}

#[test]
fn int_minus_two() {
    let buf = bytes("03");
    assert_eq!(BinaryDecoder::new(&buf).read_int().unwrap(), -2);
}

#[test]
fn int_two() {
    let buf = bytes("04");
    assert_eq!(BinaryDecoder::new(&buf).read_int().unwrap(), 2);
}

#[test]
fn long_table_from_the_encoding_rules() {
    // value, zigzag varint
    let table: &[(i64, &str)] = &[
        (0, "00"),
        (-1, "01"),
        (1, "02"),
        (-2, "03"),
        (2, "04"),
        (-64, "7f"),
        (64, "8001"),
        (8192, "808001"),
    ];
    for &(value, hex_str) in table {
        let buf = bytes(hex_str);
        let mut d = BinaryDecoder::new(&buf);
        assert_eq!(d.read_long().unwrap(), value, "vector {hex_str}");
        assert_eq!(d.tell(), buf.len(), "cursor after {hex_str}");
    }
}

#[test]
fn int_and_long_extremes() {
    let buf = DatumBuilder::new()
        .int(i32::MIN)
        .int(i32::MAX)
        .long(i64::MIN)
        .long(i64::MAX)
        .finish();
    let mut d = BinaryDecoder::new(&buf);
    assert_eq!(d.read_int().unwrap(), i32::MIN);
    assert_eq!(d.read_int().unwrap(), i32::MAX);
    assert_eq!(d.read_long().unwrap(), i64::MIN);
    assert_eq!(d.read_long().unwrap(), i64::MAX);
    assert!(d.is_exhausted());
}

// ── Strings and bytes ────────────────────────────────────────────────────────

#[test]
fn string_foo() {
    let buf = bytes("06666f6f");
    let mut d = BinaryDecoder::new(&buf);
    assert_eq!(d.read_string().unwrap(), "foo");
    assert_eq!(d.tell(), 4);
}

#[test]
fn multibyte_utf8_string() {
    let buf = DatumBuilder::new().string("héllo ✓").finish();
    let mut d = BinaryDecoder::new(&buf);
    assert_eq!(d.read_string().unwrap(), "héllo ✓");
    assert!(d.is_exhausted());
}

#[test]
fn bytes_payload() {
    let buf = bytes("0600ff7f");
    let mut d = BinaryDecoder::new(&buf);
    assert_eq!(d.read_bytes().unwrap(), vec![0x00, 0xff, 0x7f]);
    assert_eq!(d.tell(), 4);
}

// ── Floating point ───────────────────────────────────────────────────────────

#[test]
fn float_one() {
    let buf = bytes("0000803f");
    let mut d = BinaryDecoder::new(&buf);
    assert_eq!(d.read_float().unwrap().to_bits(), 1.0f32.to_bits());
    assert_eq!(d.tell(), 4);
}

#[test]
fn double_layout_is_little_endian() {
    let buf = bytes("182d4454fb210940");
    let mut d = BinaryDecoder::new(&buf);
    assert_eq!(
        d.read_double().unwrap().to_bits(),
        std::f64::consts::PI.to_bits()
    );
}

#[test]
fn float_special_values_keep_their_bits() {
    let buf = DatumBuilder::new()
        .float(f32::NEG_INFINITY)
        .float(-0.0)
        .double(f64::NAN)
        .finish();
    let mut d = BinaryDecoder::new(&buf);
    assert_eq!(d.read_float().unwrap(), f32::NEG_INFINITY);
    assert_eq!(d.read_float().unwrap().to_bits(), (-0.0f32).to_bits());
    assert!(d.read_double().unwrap().is_nan());
}

// ── Booleans, null, enum ─────────────────────────────────────────────────────

#[test]
fn boolean_null_enum_sequence() {
    let buf = bytes("010002");
    let mut d = BinaryDecoder::new(&buf);
    assert!(d.read_boolean().unwrap());
    d.read_null().unwrap();
    assert!(!d.read_boolean().unwrap());
    assert_eq!(d.read_enum().unwrap(), 1);
    assert!(d.is_exhausted());
}

// ── Containers ───────────────────────────────────────────────────────────────

#[test]
fn array_of_longs_in_one_block() {
    // The encoding rules' example: array [3, 27] of longs.
    let buf = bytes("04063600");
    let mut d = BinaryDecoder::new(&buf);
    let mut items = Vec::new();
    let mut n = d.read_array_start().unwrap();
    while n > 0 {
        for _ in 0..n {
            items.push(d.read_long().unwrap());
        }
        n = d.array_next().unwrap();
    }
    assert_eq!(items, vec![3, 27]);
    assert!(d.is_exhausted());
}

#[test]
fn negative_block_count_with_byte_size() {
    let buf = DatumBuilder::new().long(-3).long(10).finish();
    let mut d = BinaryDecoder::new(&buf);
    assert_eq!(d.read_array_start().unwrap(), 3);
    assert_eq!(d.tell(), 2);
}

#[test]
fn map_over_several_blocks() {
    let first = DatumBuilder::new().string("a").long(1).string("b").long(2);
    let buf = DatumBuilder::new()
        .sized_block_count(2, first.len())
        .raw(&first.finish())
        .block_count(1)
        .string("c")
        .long(3)
        .block_count(0)
        .finish();

    let mut d = BinaryDecoder::new(&buf);
    let mut entries = Vec::new();
    let mut n = d.read_map_start().unwrap();
    while n > 0 {
        for _ in 0..n {
            let key = d.read_string().unwrap();
            let value = d.read_long().unwrap();
            entries.push((key, value));
        }
        n = d.map_next().unwrap();
    }

    assert_eq!(
        entries,
        vec![
            ("a".to_owned(), 1),
            ("b".to_owned(), 2),
            ("c".to_owned(), 3)
        ]
    );
    assert!(d.is_exhausted());
}

#[test]
fn empty_array() {
    let buf = bytes("00");
    assert_eq!(BinaryDecoder::new(&buf).read_array_start().unwrap(), 0);
}

// ── Fixed ────────────────────────────────────────────────────────────────────

#[test]
fn fixed_md5_sized_value() {
    let digest: Vec<u8> = (0u8..16).collect();
    let buf = DatumBuilder::new().raw(&digest).int(7).finish();
    let mut d = BinaryDecoder::new(&buf);
    let mut dest = [0u8; 16];
    d.read_fixed(&mut dest).unwrap();
    assert_eq!(dest.to_vec(), digest);
    assert_eq!(d.read_int().unwrap(), 7);
}

// ── Block swap ───────────────────────────────────────────────────────────────

#[test]
fn tell_is_zero_after_set_block() {
    let buf = bytes("0204060810");
    let mut d = BinaryDecoder::new(&buf);
    d.read_long().unwrap();
    d.read_long().unwrap();
    assert_eq!(d.tell(), 2);

    d.set_block(DataBlock::new(bytes("14"), 1));
    assert_eq!(d.tell(), 0);
    assert_eq!(d.read_long().unwrap(), 10);
}

#[test]
fn record_spread_over_blocks() {
    // Two container blocks, each holding one {name: string, age: int} datum.
    let blocks = [
        DataBlock::new(DatumBuilder::new().string("ada").int(36).finish(), 1),
        DataBlock::new(DatumBuilder::new().string("alan").int(41).finish(), 1),
    ];

    let mut d = BinaryDecoder::default();
    let mut people = Vec::new();
    for block in blocks {
        let entries = block.num_entries;
        d.set_block(block);
        for _ in 0..entries {
            people.push((d.read_string().unwrap(), d.read_int().unwrap()));
        }
        assert!(d.is_exhausted());
    }

    assert_eq!(
        people,
        vec![("ada".to_owned(), 36), ("alan".to_owned(), 41)]
    );
}
