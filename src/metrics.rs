//! Per-row metric aggregation.
//!
//! Wa and Ra are the mean absolute waviness and roughness magnitudes of a
//! single scan row. They are row-resolved series, one scalar per row, never
//! a single surface-wide figure, and they are plain means of absolute values
//! rather than root-mean-square magnitudes.

use crate::data_container::MetricSeries;
use ndarray::{Array1, Array2, ArrayView1, Axis};

/// Mean absolute value of one row. The divisor is the row length N.
fn mean_abs(row: ArrayView1<'_, f32>) -> f32 {
    row.iter().map(|v| v.abs()).sum::<f32>() / row.len() as f32
}

/// Reduces the waviness and roughness grids to their per-row Wa/Ra series.
///
/// Pure function of the two grids; both must share the same shape.
pub fn metric_series(waviness: &Array2<f32>, roughness: &Array2<f32>) -> MetricSeries {
    let wa = Array1::from_iter(waviness.axis_iter(Axis(0)).map(mean_abs));
    let ra = Array1::from_iter(roughness.axis_iter(Axis(0)).map(mean_abs));
    MetricSeries { wa, ra }
}
