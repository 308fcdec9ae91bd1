use serde::{Deserialize, Serialize};

/// Configuration for one waviness/roughness decomposition.
///
/// Both values are in the same length unit as the height data (microns for
/// Olympus LEXT scans). Changing either value means running a fresh
/// decomposition; there is no in-place update path.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecompositionConfig {
    /// Cutoff wavelength separating waviness from roughness. Wavelengths
    /// longer than the cutoff stay in the waviness profile.
    pub cutoff: f32,
    /// Physical width of the sampled area, used to map frequency bin indices
    /// to spatial wavelengths (and as the plot axis extent downstream).
    pub sample_width: f32,
}

impl Default for DecompositionConfig {
    fn default() -> Self {
        DecompositionConfig {
            cutoff: 80.0,
            // 643 um field width at 10x magnification on the LEXT.
            sample_width: 643.0,
        }
    }
}
