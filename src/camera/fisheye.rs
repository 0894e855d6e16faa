//! Wide-angle and fisheye camera models.

use crate::camera::{CameraModel, CameraModelId};

/// Field-of-view camera with parameters `fx, fy, cx, cy, omega`.
///
/// `omega` is the field of view of the ideal fisheye lens, in radians.
#[derive(Debug, Clone, Copy, Default)]
pub struct FovModel;

impl CameraModel for FovModel {
    const MODEL_ID: CameraModelId = 7;
    const MODEL_NAME: &'static str = "FOV";
    const NUM_PARAMS: usize = 5;
    const PARAMS_INFO: &'static str = "fx, fy, cx, cy, omega";
    const FOCAL_LENGTH_IDXS: &'static [usize] = &[0, 1];
    const PRINCIPAL_POINT_IDXS: [usize; 2] = [2, 3];
    const EXTRA_PARAMS_IDXS: &'static [usize] = &[4];
}

/// Simple radial fisheye camera with parameters `f, cx, cy, k`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRadialFisheyeModel;

impl CameraModel for SimpleRadialFisheyeModel {
    const MODEL_ID: CameraModelId = 8;
    const MODEL_NAME: &'static str = "SIMPLE_RADIAL_FISHEYE";
    const NUM_PARAMS: usize = 4;
    const PARAMS_INFO: &'static str = "f, cx, cy, k";
    const FOCAL_LENGTH_IDXS: &'static [usize] = &[0];
    const PRINCIPAL_POINT_IDXS: [usize; 2] = [1, 2];
    const EXTRA_PARAMS_IDXS: &'static [usize] = &[3];
}

/// Radial fisheye camera with parameters `f, cx, cy, k1, k2`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RadialFisheyeModel;

impl CameraModel for RadialFisheyeModel {
    const MODEL_ID: CameraModelId = 9;
    const MODEL_NAME: &'static str = "RADIAL_FISHEYE";
    const NUM_PARAMS: usize = 5;
    const PARAMS_INFO: &'static str = "f, cx, cy, k1, k2";
    const FOCAL_LENGTH_IDXS: &'static [usize] = &[0];
    const PRINCIPAL_POINT_IDXS: [usize; 2] = [1, 2];
    const EXTRA_PARAMS_IDXS: &'static [usize] = &[3, 4];
}

/// Thin-prism fisheye camera with parameters
/// `fx, fy, cx, cy, k1, k2, p1, p2, k3, k4, sx1, sy1`.
///
/// Extends the OpenCV fisheye model with tangential and thin-prism terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThinPrismFisheyeModel;

impl CameraModel for ThinPrismFisheyeModel {
    const MODEL_ID: CameraModelId = 10;
    const MODEL_NAME: &'static str = "THIN_PRISM_FISHEYE";
    const NUM_PARAMS: usize = 12;
    const PARAMS_INFO: &'static str = "fx, fy, cx, cy, k1, k2, p1, p2, k3, k4, sx1, sy1";
    const FOCAL_LENGTH_IDXS: &'static [usize] = &[0, 1];
    const PRINCIPAL_POINT_IDXS: [usize; 2] = [2, 3];
    const EXTRA_PARAMS_IDXS: &'static [usize] = &[4, 5, 6, 7, 8, 9, 10, 11];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fov_omega_is_an_extra_param() {
        let params = [300.0, 300.0, 320.0, 240.0, 0.9];
        assert!(!FovModel::has_bogus_params(&params, 640, 480, 0.1, 10.0, 1.0));
        assert!(FovModel::has_bogus_params(&params, 640, 480, 0.1, 10.0, 0.5));
    }

    #[test]
    fn test_thin_prism_rejects_wide_focal_ratio() {
        let mut params = [0.0; 12];
        params[..4].copy_from_slice(&[7000.0, 300.0, 320.0, 240.0]);
        assert!(ThinPrismFisheyeModel::has_bogus_focal_length(&params, 640, 480, 0.1, 10.0));
        assert!(!ThinPrismFisheyeModel::has_bogus_extra_params(&params, 1.0));
    }
}
