//! Processing stages that turn a primary profile into its waviness and
//! roughness components.
//!
//! The only filter proper is the per-row frequency-domain low pass in
//! `low_pass_fd`; roughness extraction is a plain row-wise subtraction and
//! lives here. Each stage is a pure function of its grid inputs plus the
//! decomposition configuration, so stages compose without shared mutable
//! state.

/// Frequency-domain low-pass filter producing the waviness profile.
mod low_pass_fd;

pub use low_pass_fd::{filter_row, waviness_grid};

use ndarray::Array2;

/// Row-wise difference `primary - waviness`, the roughness profile.
///
/// No filtering and no configuration dependence; the decomposition identity
/// `waviness + roughness == primary` holds exactly by construction.
pub fn roughness_grid(primary: &Array2<f32>, waviness: &Array2<f32>) -> Array2<f32> {
    primary - waviness
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::arr2;

    #[test]
    fn test_roughness_is_rowwise_difference() {
        let primary = arr2(&[[3.0, 4.0], [5.0, 6.0]]);
        let waviness = arr2(&[[1.0, 1.5], [2.0, 2.5]]);
        let roughness = roughness_grid(&primary, &waviness);
        assert_abs_diff_eq!(roughness[[0, 0]], 2.0);
        assert_abs_diff_eq!(roughness[[1, 1]], 3.5);
        // identity: waviness + roughness == primary
        let rebuilt = &waviness + &roughness;
        assert_abs_diff_eq!(rebuilt[[0, 1]], primary[[0, 1]]);
    }
}
