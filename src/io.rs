//! Loader for the flat CSV scan lines exported by the Olympus LEXT software.
//!
//! A LEXT export carries the whole height map on a single comma-separated
//! line. Empty fields are skipped rather than read as zero; any other field
//! that fails to parse is reported with its position.

use crate::error::{Result, SurfaceError};
use csv::ReaderBuilder;
use std::path::Path;

/// Reads the flat, row-major height samples from a LEXT CSV export.
///
/// The caller reshapes them with [`crate::ProfileGrid::from_samples`]; this
/// function makes no assumption about the sample count.
pub fn read_height_samples<P: AsRef<Path>>(path: P) -> Result<Vec<f32>> {
    let file = std::fs::File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut samples = Vec::new();
    let mut position = 0usize;
    for record in reader.records() {
        let record = record?;
        for field in record.iter() {
            let field = field.trim();
            if !field.is_empty() {
                let value = field
                    .parse::<f32>()
                    .map_err(|source| SurfaceError::InvalidSample {
                        index: position,
                        source,
                    })?;
                samples.push(value);
            }
            position += 1;
        }
    }
    Ok(samples)
}
