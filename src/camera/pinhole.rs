//! Pinhole camera models without lens distortion.
//!
//! - [`SimplePinholeModel`]: a single focal length shared by both axes.
//! - [`PinholeModel`]: separate focal lengths along x and y.
//!
//! Neither model has distortion parameters, so the bogus check reduces to
//! the focal length ratio test.

use crate::camera::{CameraModel, CameraModelId};

/// Simple pinhole camera with parameters `f, cx, cy`.
///
/// Suited for images from an unknown camera where the intrinsics are
/// estimated from EXIF data and the images have already been undistorted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplePinholeModel;

impl CameraModel for SimplePinholeModel {
    const MODEL_ID: CameraModelId = 0;
    const MODEL_NAME: &'static str = "SIMPLE_PINHOLE";
    const NUM_PARAMS: usize = 3;
    const PARAMS_INFO: &'static str = "f, cx, cy";
    const FOCAL_LENGTH_IDXS: &'static [usize] = &[0];
    const PRINCIPAL_POINT_IDXS: [usize; 2] = [1, 2];
    const EXTRA_PARAMS_IDXS: &'static [usize] = &[];
}

/// Pinhole camera with parameters `fx, fy, cx, cy`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinholeModel;

impl CameraModel for PinholeModel {
    const MODEL_ID: CameraModelId = 1;
    const MODEL_NAME: &'static str = "PINHOLE";
    const NUM_PARAMS: usize = 4;
    const PARAMS_INFO: &'static str = "fx, fy, cx, cy";
    const FOCAL_LENGTH_IDXS: &'static [usize] = &[0, 1];
    const PRINCIPAL_POINT_IDXS: [usize; 2] = [2, 3];
    const EXTRA_PARAMS_IDXS: &'static [usize] = &[];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pinhole_is_bogus(params: &[f64]) -> bool {
        PinholeModel::has_bogus_params(params, 640, 480, 0.1, 10.0, 1.0)
    }

    #[test]
    fn test_pinhole_focal_length_ratio() {
        // 5 / 640 is far below a 0.1 ratio.
        assert!(pinhole_is_bogus(&[5.0, 700.0, 320.0, 240.0]));
        assert!(!pinhole_is_bogus(&[700.0, 700.0, 320.0, 240.0]));
        assert!(pinhole_is_bogus(&[700.0, 7000.0, 320.0, 240.0]));
    }

    #[test]
    fn test_simple_pinhole_uses_longer_side() {
        // 60 / 640 < 0.1 even though 60 / 480 > 0.1.
        let too_short = [60.0, 240.0, 320.0];
        let at_limit = [64.0, 240.0, 320.0];
        assert!(SimplePinholeModel::has_bogus_params(&too_short, 480, 640, 0.1, 10.0, 1.0));
        assert!(!SimplePinholeModel::has_bogus_params(&at_limit, 480, 640, 0.1, 10.0, 1.0));
    }
}
