//! Numerical helpers for the per-row frequency-domain filter: mirror padding
//! and the mapping between cutoff wavelength and discrete frequency index.

use crate::error::{Result, SurfaceError};
use ndarray::ArrayView1;
use num_complex::Complex32;

/// Extends a row at both ends by a reversed copy of itself, producing a
/// sequence of three times the row length.
///
/// A finite scan row is not periodic; transforming it as if it were leaks
/// spectral energy from the jump at the boundaries. The mirrored extension
/// removes that jump, and the middle third of the reconstruction is extracted
/// again after filtering.
pub fn mirror_pad(row: ArrayView1<'_, f32>) -> Vec<Complex32> {
    let mut padded = Vec::with_capacity(3 * row.len());
    padded.extend(row.iter().rev().map(|&h| Complex32::new(h, 0.0)));
    padded.extend(row.iter().map(|&h| Complex32::new(h, 0.0)));
    padded.extend(row.iter().rev().map(|&h| Complex32::new(h, 0.0)));
    padded
}

/// Candidate spatial wavelengths for frequency indices j = 1..=n of the
/// padded sequence.
///
/// The factor 3 accounts for the tripled length of the mirror-padded row.
/// The table depends only on (n, sample_width), so it is computed once per
/// decomposition and shared read-only across rows.
pub fn wavelength_table(n: usize, sample_width: f32) -> Vec<f32> {
    (1..=n)
        .map(|j| 2.0 * (3.0 * sample_width) / j as f32)
        .collect()
}

/// First frequency index whose candidate wavelength has dropped to the cutoff
/// or below.
///
/// Spectrum bins below this index hold the long-wavelength (waviness)
/// content; bins at and above it are discarded by the low-pass filter.
///
/// # Errors
/// - `DegenerateGrid` if the table covers fewer than 2 frequency indices.
/// - `CutoffUnreachable` if no index in the table satisfies the cutoff.
pub fn stop_index(wavelengths: &[f32], cutoff: f32) -> Result<usize> {
    if wavelengths.len() < 2 {
        return Err(SurfaceError::DegenerateGrid {
            n: wavelengths.len(),
        });
    }
    wavelengths
        .iter()
        .position(|&w| w <= cutoff)
        // the table starts at frequency index 1
        .map(|pos| pos + 1)
        .ok_or(SurfaceError::CutoffUnreachable {
            cutoff,
            shortest: wavelengths[wavelengths.len() - 1],
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::Array1;

    #[test]
    fn test_mirror_pad_layout() {
        let row = Array1::from_vec(vec![1.0, 2.0, 3.0]);
        let padded = mirror_pad(row.view());
        let real: Vec<f32> = padded.iter().map(|c| c.re).collect();
        assert_eq!(real, vec![3.0, 2.0, 1.0, 1.0, 2.0, 3.0, 3.0, 2.0, 1.0]);
        assert!(padded.iter().all(|c| c.im == 0.0));
    }

    #[test]
    fn test_wavelength_table_values() {
        // lambda(j) = 2 * (3 * 100) / j
        let table = wavelength_table(4, 100.0);
        assert_eq!(table.len(), 4);
        assert_abs_diff_eq!(table[0], 600.0);
        assert_abs_diff_eq!(table[1], 300.0);
        assert_abs_diff_eq!(table[2], 200.0);
        assert_abs_diff_eq!(table[3], 150.0);
    }

    #[test]
    fn test_stop_index_first_matching_bin() {
        let table = wavelength_table(8, 100.0);
        // lambda(8) = 75 is the first candidate at or below 80
        assert_eq!(stop_index(&table, 80.0).unwrap(), 8);
        // a generous cutoff stops at the very first bin
        assert_eq!(stop_index(&table, 600.0).unwrap(), 1);
    }

    #[test]
    fn test_stop_index_unreachable_cutoff() {
        let table = wavelength_table(4, 100.0);
        // shortest candidate is 150, so a 80 cutoff can never be reached
        match stop_index(&table, 80.0) {
            Err(SurfaceError::CutoffUnreachable { cutoff, shortest }) => {
                assert_abs_diff_eq!(cutoff, 80.0);
                assert_abs_diff_eq!(shortest, 150.0);
            }
            other => panic!("expected CutoffUnreachable, got {other:?}"),
        }
    }

    #[test]
    fn test_stop_index_degenerate_row() {
        let table = wavelength_table(1, 100.0);
        assert!(matches!(
            stop_index(&table, 80.0),
            Err(SurfaceError::DegenerateGrid { n: 1 })
        ));
    }
}
