//! Error types reported by the decomposition pipeline.
//!
//! Every failure mode is a named variant rather than a silent default: a scan
//! that cannot be reshaped, a cutoff no frequency bin can satisfy, a grid too
//! small to filter, or a broken input file.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The flat scan line has no integer square root, so it cannot be
    /// reshaped into a square grid without dropping trailing samples.
    #[error("sample count {count} is not a perfect square")]
    NonSquareSampleCount { count: usize },

    /// The cutoff wavelength lies below every candidate wavelength
    /// representable for this row length, so no stop index exists.
    #[error(
        "cutoff wavelength {cutoff} is unreachable for this row length \
         (shortest candidate wavelength is {shortest})"
    )]
    CutoffUnreachable { cutoff: f32, shortest: f32 },

    /// Rows of fewer than 2 samples cannot carry a meaningful stop index.
    #[error("grid dimension {n} is too small to filter")]
    DegenerateGrid { n: usize },

    #[error("failed to read height data: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse height data: {0}")]
    Csv(#[from] csv::Error),

    /// A non-empty field in the scan line failed to parse as a height value.
    #[error("invalid height sample in field {index}: {source}")]
    InvalidSample {
        index: usize,
        source: std::num::ParseFloatError,
    },
}

pub type Result<T> = std::result::Result<T, SurfaceError>;
