//! Frequency-domain surface-texture decomposition for confocal height maps.
//!
//! Splits a square height-sample grid (the primary profile) into its
//! long-wavelength waviness and short-wavelength roughness components with a
//! per-row FFT low-pass filter, then reduces both to per-row Wa/Ra
//! mean-absolute magnitude series, following the ISO surface-texture
//! convention (primary = waviness + roughness).
//!
//! The pipeline is a composition of pure stages:
//! primary grid -> waviness grid -> roughness grid -> metric series,
//! driven by [`decompose`]. Rendering and CLI plumbing live downstream of
//! this crate; [`io::read_height_samples`] covers the LEXT CSV input
//! boundary.

pub mod config;
pub mod data_container;
pub mod error;
pub mod filters;
pub mod io;
pub mod math_tools;
pub mod metrics;

pub use config::DecompositionConfig;
pub use data_container::{MetricSeries, ProfileGrid, SurfaceDecomposition};
pub use error::{Result, SurfaceError};

/// Decomposes a primary profile into waviness, roughness, and the per-row
/// metric series.
///
/// # Errors
/// `CutoffUnreachable` or `DegenerateGrid` if the configuration admits no
/// stop index for this grid dimension.
pub fn decompose(
    grid: &ProfileGrid,
    config: &DecompositionConfig,
) -> Result<SurfaceDecomposition> {
    let waviness = filters::waviness_grid(grid, config)?;
    let roughness = filters::roughness_grid(grid.data(), &waviness);
    let metrics = metrics::metric_series(&waviness, &roughness);
    Ok(SurfaceDecomposition {
        primary: grid.data().clone(),
        waviness,
        roughness,
        metrics,
    })
}
