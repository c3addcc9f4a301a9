//! Table extension against real tuning tables.

use tunex::tuning::{extend_table, infer_scale};
use tunex::{EqualTemperament, ScaleStructure, TABLE_SIZE};

mod common;

#[test]
fn extends_12tet_to_256_notes() {
    let _ = env_logger::try_init();

    let base = common::midi_table();
    let table = extend_table(&base, 256);

    assert_eq!(table.len(), 256);
    assert_eq!(&table[..TABLE_SIZE], &base[..]);

    // the extended region is built by doubling entries 12 notes below,
    // bit-for-bit
    assert_eq!(table[128], 2.0 * table[116]);
    assert_eq!(table[255], 2.0 * table[243]);

    // landmark values for the standard concert-pitch table
    assert!((table[0] - 8.1757989156437070).abs() < 1e-9);
    assert!((table[128] - 13289.75032255824408).abs() < 1e-6);
    assert!((table[255] - 20390018.00521029531956).abs() < 1e-4);
}

#[test]
fn recurrence_holds_across_whole_table() {
    let base = common::midi_table();
    let table = extend_table(&base, 512);

    let (scale_size, period) = match infer_scale(&base) {
        ScaleStructure::Found { scale_size, period } => (scale_size, period),
        ScaleStructure::Unknown => panic!("12TET table must have a structure"),
    };

    for i in TABLE_SIZE..512 {
        assert_eq!(table[i], period as f64 * table[i - scale_size], "note {}", i);
    }
}

#[test]
fn period_ratio_consistent_everywhere() {
    let base = common::midi_table();
    let table = extend_table(&base, 400);

    // frequency[i + 12] == 2 * frequency[i] within the ratio tolerance,
    // both inside the source region and across the seam at note 128
    for i in 0..400 - 12 {
        assert!(
            (table[i + 12] - 2.0 * table[i]).abs() < 1e-6,
            "note {}: {} vs {}",
            i,
            table[i + 12],
            2.0 * table[i]
        );
    }
}

#[test]
fn unknown_structure_clamps_to_last_source_note() {
    let _ = env_logger::try_init();

    let base = common::BAGPIPE_1190;
    assert_eq!(infer_scale(&base), ScaleStructure::Unknown);

    let table = extend_table(&base, 256);
    assert_eq!(table[128], table[127]);
    assert_eq!(table[255], table[127]);
    for i in TABLE_SIZE..256 {
        assert_eq!(table[i], base[TABLE_SIZE - 1]);
    }
}

#[test]
fn bohlen_pierce_extends_by_tripling() {
    let base = common::BOHLEN_PIERCE;
    let table = extend_table(&base, 200);

    for i in TABLE_SIZE..200 {
        assert_eq!(table[i], 3.0 * table[i - 13]);
    }
}

#[test]
fn builder_produces_same_table_as_manual_extension() {
    let mut source = EqualTemperament::default();
    let built = tunex::frequency_table(&mut source, 256);

    let manual = extend_table(&common::midi_table(), 256);
    assert_eq!(built, manual);
}

#[test]
#[should_panic]
fn builder_rejects_short_length() {
    let mut source = EqualTemperament::default();
    tunex::frequency_table(&mut source, 100);
}
