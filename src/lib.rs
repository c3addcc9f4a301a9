//! Scale-structure inference and extension for microtonal tuning tables.
//!
//! Tuning sources hand out exactly 128 note-to-frequency mappings, one per
//! MIDI note. Instruments that need more pitches than that (dense microtonal
//! scales spanning many octaves) have to extrapolate. This crate detects
//! whether a 128-entry frequency table repeats every N steps with each
//! repetition scaled by a whole-number period (12 steps per period 2 for
//! ordinary octave-repeating scales, 13 per 3 for Bohlen-Pierce), and uses
//! that structure to synthesize frequencies for notes past 127.

#![warn(missing_docs)]

pub mod source;
pub mod tone;
pub mod tuning;

/// Number of notes a tuning source reports per query session.
pub const TABLE_SIZE: usize = 128;

pub use source::{EqualTemperament, TuningSource};
pub use tuning::infer::ScaleStructure;

/// Build a frequency table of the given length.
///
/// Pulls the 128 source frequencies, then extends them to the requested
/// length using the inferred scale structure.
///
/// # Panics
/// Panics if `length` is less than [`TABLE_SIZE`]; callers are expected to
/// never request a shorter table.
pub fn frequency_table(source: &mut dyn TuningSource, length: usize) -> Vec<f64> {
    assert!(
        length >= TABLE_SIZE,
        "frequency table length {} is shorter than the {} source notes",
        length,
        TABLE_SIZE
    );
    let base = source::pull_frequencies(source);
    tuning::extend::extend_table(&base, length)
}
