//! Scale-structure inference over a 128-entry frequency table.
//!
//! Tries to recover the scale size (number of notes in the scale) and the
//! period (interval the scale repeats at) from the raw frequencies alone.
//! For 12TET the scale size is 12 and the period is 2 (the octave).

use log::debug;
use serde::{Deserialize, Serialize};

use crate::TABLE_SIZE;

/// Smallest whole-number period considered.
const MIN_PERIOD: u32 = 2;

/// Largest whole-number period considered.
const MAX_PERIOD: u32 = 100;

/// Anchors at or below this frequency are skipped; ratios between very
/// small values drown in floating-point noise.
const ANCHOR_FLOOR_HZ: f64 = 10.0;

/// Absolute tolerance on both ratio checks, in Hz.
const TOLERANCE_HZ: f64 = 1e-6;

/// Periodic structure of a tuning table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleStructure {
    /// The table repeats every `scale_size` entries, each repetition
    /// `period` times the previous one.
    Found {
        /// Steps per repetition. Always positive and at most 128.
        scale_size: usize,
        /// Multiplicative factor per repetition, in `[2, 100]`.
        period: u32,
    },
    /// No whole-number period was found. Scales with stretched octaves
    /// (non-integer periods) always land here.
    Unknown,
}

/// Infer the scale size and period from a table of 128 frequencies.
///
/// Works for any whole-number period up to 100; the common cases are 2
/// (octave-repeating scales) and 3 (e.g. Bohlen-Pierce). A pair of entries
/// only counts as periodic when the next pair of entries is related by the
/// same ratio, so a single coincidental match does not fool the search.
///
/// The search is greedy: candidate periods ascend from 2, anchors and
/// offsets ascend from 0, and the first qualifying match wins. Callers
/// depend on this ordering, so the smallest period is always reported.
pub fn infer_scale(frequency: &[f64; TABLE_SIZE]) -> ScaleStructure {
    for period in MIN_PERIOD..=MAX_PERIOD {
        for i in 0..TABLE_SIZE - 1 {
            if frequency[i] <= ANCHOR_FLOOR_HZ {
                continue;
            }
            let target = period as f64 * frequency[i];
            for j in i..TABLE_SIZE - 1 {
                if (frequency[j] - target).abs() < TOLERANCE_HZ
                    && (frequency[j + 1] - period as f64 * frequency[i + 1]).abs() < TOLERANCE_HZ
                {
                    let scale_size = j - i;
                    debug!(
                        "scale structure: {} steps per period {} (anchor note {})",
                        scale_size, period, i
                    );
                    return ScaleStructure::Found { scale_size, period };
                }
            }
        }
    }
    debug!("no whole-number period up to {} found", MAX_PERIOD);
    ScaleStructure::Unknown
}
