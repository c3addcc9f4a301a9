//! Tuning source collaborators.
//!
//! A tuning source maps the 128 MIDI note numbers to frequencies. Real
//! sources are external (a microtuning host, a plugin session); the
//! built-in [`EqualTemperament`] source covers the standard case and test
//! setups.

use crate::TABLE_SIZE;

/// Frequency of MIDI note 0 in 12TET concert pitch, `440 * 2^(-69/12)`.
pub const MIDI_0_FREQ: f64 = 8.175798915643707;

/// A provider of note-to-frequency mappings.
///
/// Implementations own their session lifecycle: open the underlying handle
/// in the constructor and release it in `Drop`. Consumers only query.
pub trait TuningSource {
    /// Frequency in Hz of the given MIDI note (0-127).
    fn note_to_frequency(&mut self, note: u8) -> f64;
}

/// Pull all 128 frequencies from a tuning source into a table.
pub fn pull_frequencies(source: &mut dyn TuningSource) -> [f64; TABLE_SIZE] {
    let mut frequency = [0.0; TABLE_SIZE];
    for (note, entry) in frequency.iter_mut().enumerate() {
        *entry = source.note_to_frequency(note as u8);
    }
    frequency
}

/// Twelve-tone equal temperament relative to a reference note.
#[derive(Clone, Debug)]
pub struct EqualTemperament {
    /// Frequency of the reference note, usually A4 = 440 Hz.
    pub reference_freq: f64,
    /// MIDI number of the reference note, usually 69 for A4.
    pub reference_note: u8,
}

impl Default for EqualTemperament {
    fn default() -> Self {
        Self {
            reference_freq: 440.0,
            reference_note: 69,
        }
    }
}

impl TuningSource for EqualTemperament {
    fn note_to_frequency(&mut self, note: u8) -> f64 {
        let semitones = note as f64 - self.reference_note as f64;
        self.reference_freq * 2.0f64.powf(semitones / 12.0)
    }
}
