//! Per-row frequency-domain low-pass filter producing the waviness profile.
//!
//! Each scan row is mirror-padded to three times its length, transformed with
//! a complex FFT, cut off at the stop index derived from the cutoff
//! wavelength, and transformed back. The middle third of the reconstruction
//! is the waviness row; everything shorter-waved ends up in roughness.

use crate::config::DecompositionConfig;
use crate::data_container::ProfileGrid;
use crate::error::Result;
use crate::math_tools::{mirror_pad, stop_index, wavelength_table};
use ndarray::parallel::prelude::*;
use ndarray::{Array1, Array2, ArrayView1, Axis};
use num_complex::Complex32;
use rustfft::{Fft, FftPlanner};

/// Low-pass filters one scan row in the frequency domain.
///
/// The spectrum of the real-valued padded row is conjugate-symmetric, so
/// every bin except DC and the final one is doubled before filtering. The
/// upper bins (including the mirrored negative-frequency half, but not the
/// final bin) are then zeroed, which leaves kept content reconstructed at
/// full amplitude from its positive-frequency bin alone. This reproduces the
/// legacy LEXT processing bin for bin; do not replace it with a plain
/// two-sided low pass.
///
/// `stop` must come from [`stop_index`] for this row length, which bounds it
/// by the row length and rejects rows shorter than 2 samples; both FFT plans
/// must be sized for three times the row length.
pub fn filter_row(
    row: ArrayView1<'_, f32>,
    stop: usize,
    forward: &dyn Fft<f32>,
    inverse: &dyn Fft<f32>,
) -> Array1<f32> {
    let n = row.len();
    let mut spectrum = mirror_pad(row);
    let len = spectrum.len();
    debug_assert!(n >= 2, "row too short to filter");
    debug_assert!(
        stop >= 1 && stop < len - 1,
        "stop index {stop} out of range for padded length {len}"
    );
    forward.process(&mut spectrum);

    for bin in spectrum[1..len - 1].iter_mut() {
        *bin *= 2.0;
    }

    // discard short-wavelength content; the final bin survives
    for bin in spectrum[stop..len - 1].iter_mut() {
        *bin = Complex32::new(0.0, 0.0);
    }

    inverse.process(&mut spectrum);

    // rustfft leaves the inverse unscaled; normalize and keep the middle
    // third, which corresponds to the unpadded row.
    let scale = 1.0 / len as f32;
    spectrum[n..2 * n].iter().map(|c| c.re * scale).collect()
}

/// Runs the low-pass filter over every row of the primary grid.
///
/// The FFT plans and the stop index depend only on the grid dimension and the
/// configuration, so they are computed once and shared read-only across rows.
/// Rows have no cross dependency and are filtered in parallel.
///
/// # Errors
/// `CutoffUnreachable` or `DegenerateGrid` from the stop-index lookup.
pub fn waviness_grid(grid: &ProfileGrid, config: &DecompositionConfig) -> Result<Array2<f32>> {
    let n = grid.n();
    let wavelengths = wavelength_table(n, config.sample_width);
    let stop = stop_index(&wavelengths, config.cutoff)?;

    let mut planner = FftPlanner::<f32>::new();
    let forward = planner.plan_fft_forward(3 * n);
    let inverse = planner.plan_fft_inverse(3 * n);

    let mut waviness = Array2::<f32>::zeros((n, n));
    (
        grid.data().axis_iter(Axis(0)),
        waviness.axis_iter_mut(Axis(0)),
    )
        .into_par_iter()
        .for_each(|(row, mut out)| {
            out.assign(&filter_row(row, stop, forward.as_ref(), inverse.as_ref()));
        });

    Ok(waviness)
}
