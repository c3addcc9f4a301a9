//! Extension of a 128-entry frequency table to arbitrary length.

use log::debug;

use crate::tuning::infer::{infer_scale, ScaleStructure};
use crate::TABLE_SIZE;

/// Extend a 128-entry frequency table to the given length.
///
/// Returns a fresh table whose first 128 entries are `base` verbatim.
/// Entries past 127 are built from the inferred scale structure: each new
/// frequency is `period` times the frequency `scale_size` notes below it,
/// so the structure compounds across repetitions and
/// `table[i + scale_size] == period * table[i]` holds exactly everywhere.
/// If no structure can be inferred, the remaining entries are all set to
/// the last source frequency.
///
/// # Panics
/// Panics if `length` is less than [`TABLE_SIZE`].
pub fn extend_table(base: &[f64; TABLE_SIZE], length: usize) -> Vec<f64> {
    assert!(
        length >= TABLE_SIZE,
        "extended table length {} is shorter than the {} source notes",
        length,
        TABLE_SIZE
    );

    let mut frequency = Vec::with_capacity(length);
    frequency.extend_from_slice(base);

    match infer_scale(base) {
        ScaleStructure::Found { scale_size, period } => {
            // j - i with i, j in [0, 126] cannot exceed the table size; a
            // violation is a defect in the search, not bad input.
            assert!(scale_size <= TABLE_SIZE, "scale size {} out of range", scale_size);
            for i in TABLE_SIZE..length {
                let f = period as f64 * frequency[i - scale_size];
                frequency.push(f);
            }
        }
        ScaleStructure::Unknown => {
            debug!("no scale structure; clamping notes past 127 to the last source frequency");
            frequency.resize(length, base[TABLE_SIZE - 1]);
        }
    }

    frequency
}

#[cfg(test)]
mod tests {
    use super::*;

    fn octave_table() -> [f64; TABLE_SIZE] {
        let mut table = [0.0; TABLE_SIZE];
        for (n, entry) in table.iter_mut().enumerate() {
            *entry = 16.0 * 2.0f64.powf(n as f64 / 12.0);
        }
        table
    }

    #[test]
    fn keeps_base_entries_verbatim() {
        let base = octave_table();
        let table = extend_table(&base, 256);
        assert_eq!(table.len(), 256);
        assert_eq!(&table[..TABLE_SIZE], &base[..]);
    }

    #[test]
    fn recurrence_holds_exactly() {
        let base = octave_table();
        let table = extend_table(&base, 400);
        for i in TABLE_SIZE..400 {
            assert_eq!(table[i], 2.0 * table[i - 12], "note {}", i);
        }
    }

    #[test]
    fn unknown_structure_clamps_to_last() {
        // geometric-ish but aperiodic: no two consecutive pairs relate by
        // a whole-number ratio
        let mut base = [0.0; TABLE_SIZE];
        let mut f = 20.0;
        for (n, entry) in base.iter_mut().enumerate() {
            *entry = f;
            f *= 1.059 + 0.0001 * (n % 7) as f64;
        }
        assert_eq!(infer_scale(&base), ScaleStructure::Unknown);

        let table = extend_table(&base, 200);
        for i in TABLE_SIZE..200 {
            assert_eq!(table[i], base[TABLE_SIZE - 1]);
        }
    }

    #[test]
    fn length_equal_to_table_size_is_identity() {
        let base = octave_table();
        let table = extend_table(&base, TABLE_SIZE);
        assert_eq!(&table[..], &base[..]);
    }

    #[test]
    #[should_panic]
    fn rejects_length_below_table_size() {
        let base = octave_table();
        extend_table(&base, 64);
    }
}
