//! Data structures for a surface scan and everything derived from it: the
//! primary height grid, the waviness/roughness split, and the per-row metric
//! series.
//!
//! All of these are built once and read thereafter. Re-running the
//! decomposition with a different configuration produces a fresh set; nothing
//! here is updated in place.

use crate::config::DecompositionConfig;
use crate::error::{Result, SurfaceError};
use ndarray::{Array1, Array2, ArrayView1};
use std::path::Path;

/// The raw square height-sample matrix of one scan.
///
/// The grid dimension N is the integer square root of the flat sample count;
/// one row corresponds to one scan line of the surface.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileGrid {
    data: Array2<f32>,
}

impl ProfileGrid {
    /// Reshapes a flat, row-major scan line into an N x N grid.
    ///
    /// # Errors
    /// - `NonSquareSampleCount` if the count has no integer square root.
    /// - `DegenerateGrid` if the grid would end up smaller than 2 x 2.
    pub fn from_samples(samples: Vec<f32>) -> Result<ProfileGrid> {
        let count = samples.len();
        let n = (count as f64).sqrt() as usize;
        if n * n != count {
            return Err(SurfaceError::NonSquareSampleCount { count });
        }
        if n < 2 {
            return Err(SurfaceError::DegenerateGrid { n });
        }
        let data = Array2::from_shape_vec((n, n), samples).expect("count is n * n");
        Ok(ProfileGrid { data })
    }

    /// Reshapes like [`ProfileGrid::from_samples`], but tolerates a
    /// non-square count by dropping the trailing samples, as the legacy LEXT
    /// importer did. The loss is reported through the log facade instead of
    /// passing silently.
    ///
    /// # Errors
    /// `DegenerateGrid` if fewer than 4 samples survive.
    pub fn from_samples_truncated(mut samples: Vec<f32>) -> Result<ProfileGrid> {
        let count = samples.len();
        let n = (count as f64).sqrt() as usize;
        if n < 2 {
            return Err(SurfaceError::DegenerateGrid { n });
        }
        if n * n != count {
            log::warn!(
                "sample count {count} is not a perfect square, dropping {} trailing samples",
                count - n * n
            );
            samples.truncate(n * n);
        }
        let data = Array2::from_shape_vec((n, n), samples).expect("count truncated to n * n");
        Ok(ProfileGrid { data })
    }

    /// Grid dimension N (side length of the square sample grid).
    pub fn n(&self) -> usize {
        self.data.nrows()
    }

    pub fn data(&self) -> &Array2<f32> {
        &self.data
    }

    /// One scan line of the surface.
    pub fn row(&self, index: usize) -> ArrayView1<'_, f32> {
        self.data.row(index)
    }
}

/// Per-row metric magnitudes: one scalar per scan row, not one per surface.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricSeries {
    /// Mean absolute waviness per row.
    pub wa: Array1<f32>,
    /// Mean absolute roughness per row.
    pub ra: Array1<f32>,
}

impl MetricSeries {
    /// Looks a series up by its conventional name (`"Wa"` or `"Ra"`).
    pub fn get(&self, name: &str) -> Option<&Array1<f32>> {
        match name {
            "Wa" => Some(&self.wa),
            "Ra" => Some(&self.ra),
            _ => None,
        }
    }

    /// A series minus its own mean, for display balanced around zero.
    pub fn centered(&self, name: &str) -> Option<Array1<f32>> {
        self.get(name).map(|series| {
            let mean = series.mean().unwrap_or(0.0);
            series.mapv(|v| v - mean)
        })
    }
}

/// A primary profile together with its waviness/roughness split and the
/// derived metric series.
///
/// `roughness` is the row-wise difference `primary - waviness`, so the
/// decomposition identity holds exactly by construction.
#[derive(Clone, Debug)]
pub struct SurfaceDecomposition {
    pub primary: Array2<f32>,
    pub waviness: Array2<f32>,
    pub roughness: Array2<f32>,
    pub metrics: MetricSeries,
}

impl SurfaceDecomposition {
    /// Grid dimension N.
    pub fn n(&self) -> usize {
        self.primary.nrows()
    }

    /// The primary/waviness/roughness triplet of one scan row, for
    /// cross-section overlays.
    #[allow(clippy::type_complexity)]
    pub fn section(
        &self,
        index: usize,
    ) -> Option<(
        ArrayView1<'_, f32>,
        ArrayView1<'_, f32>,
        ArrayView1<'_, f32>,
    )> {
        if index >= self.primary.nrows() {
            return None;
        }
        Some((
            self.primary.row(index),
            self.waviness.row(index),
            self.roughness.row(index),
        ))
    }

    /// Loads a scan line from a LEXT CSV export and decomposes it in one
    /// step.
    pub fn from_csv<P: AsRef<Path>>(
        path: P,
        config: &DecompositionConfig,
    ) -> Result<SurfaceDecomposition> {
        let samples = crate::io::read_height_samples(path)?;
        let grid = ProfileGrid::from_samples(samples)?;
        crate::decompose(&grid, config)
    }
}
