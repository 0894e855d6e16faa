//! OpenCV-compatible camera models.
//!
//! The parameter order matches the layout OpenCV uses for its calibration
//! output, so vectors can be copied across without reordering.

use crate::camera::{CameraModel, CameraModelId};

/// OpenCV camera with parameters `fx, fy, cx, cy, k1, k2, p1, p2`.
///
/// Two radial (`k1`, `k2`) and two tangential (`p1`, `p2`) coefficients.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenCvModel;

impl CameraModel for OpenCvModel {
    const MODEL_ID: CameraModelId = 4;
    const MODEL_NAME: &'static str = "OPENCV";
    const NUM_PARAMS: usize = 8;
    const PARAMS_INFO: &'static str = "fx, fy, cx, cy, k1, k2, p1, p2";
    const FOCAL_LENGTH_IDXS: &'static [usize] = &[0, 1];
    const PRINCIPAL_POINT_IDXS: [usize; 2] = [2, 3];
    const EXTRA_PARAMS_IDXS: &'static [usize] = &[4, 5, 6, 7];
}

/// OpenCV fisheye camera with parameters `fx, fy, cx, cy, k1, k2, k3, k4`.
///
/// Equidistant projection with four polynomial coefficients on the
/// incidence angle (the Kannala-Brandt family).
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenCvFisheyeModel;

impl CameraModel for OpenCvFisheyeModel {
    const MODEL_ID: CameraModelId = 5;
    const MODEL_NAME: &'static str = "OPENCV_FISHEYE";
    const NUM_PARAMS: usize = 8;
    const PARAMS_INFO: &'static str = "fx, fy, cx, cy, k1, k2, k3, k4";
    const FOCAL_LENGTH_IDXS: &'static [usize] = &[0, 1];
    const PRINCIPAL_POINT_IDXS: [usize; 2] = [2, 3];
    const EXTRA_PARAMS_IDXS: &'static [usize] = &[4, 5, 6, 7];
}

/// Full OpenCV camera with parameters
/// `fx, fy, cx, cy, k1, k2, p1, p2, k3, k4, k5, k6`.
///
/// Rational radial distortion (`k1`..`k6`) plus tangential terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullOpenCvModel;

impl CameraModel for FullOpenCvModel {
    const MODEL_ID: CameraModelId = 6;
    const MODEL_NAME: &'static str = "FULL_OPENCV";
    const NUM_PARAMS: usize = 12;
    const PARAMS_INFO: &'static str = "fx, fy, cx, cy, k1, k2, p1, p2, k3, k4, k5, k6";
    const FOCAL_LENGTH_IDXS: &'static [usize] = &[0, 1];
    const PRINCIPAL_POINT_IDXS: [usize; 2] = [2, 3];
    const EXTRA_PARAMS_IDXS: &'static [usize] = &[4, 5, 6, 7, 8, 9, 10, 11];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opencv_tangential_terms_are_checked() {
        let mut params = [500.0, 500.0, 320.0, 240.0, 0.1, -0.05, 0.001, 0.001];
        assert!(!OpenCvModel::has_bogus_params(&params, 640, 480, 0.1, 10.0, 1.0));

        params[7] = 2.0;
        assert!(OpenCvModel::has_bogus_params(&params, 640, 480, 0.1, 10.0, 1.0));
    }

    #[test]
    fn test_full_opencv_last_coefficient_is_checked() {
        let mut params = [0.0; 12];
        params[..4].copy_from_slice(&[500.0, 500.0, 320.0, 240.0]);
        assert!(!FullOpenCvModel::has_bogus_params(&params, 640, 480, 0.1, 10.0, 1.0));

        params[11] = -3.0;
        assert!(FullOpenCvModel::has_bogus_extra_params(&params, 1.0));
    }
}
