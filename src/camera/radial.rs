//! Pinhole models with polynomial radial distortion and a single focal length.

use crate::camera::{CameraModel, CameraModelId};

/// Simple radial camera with parameters `f, cx, cy, k`.
///
/// One radial distortion coefficient. The usual choice when the intrinsics
/// are unknown and every image has a different camera calibration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRadialModel;

impl CameraModel for SimpleRadialModel {
    const MODEL_ID: CameraModelId = 2;
    const MODEL_NAME: &'static str = "SIMPLE_RADIAL";
    const NUM_PARAMS: usize = 4;
    const PARAMS_INFO: &'static str = "f, cx, cy, k";
    const FOCAL_LENGTH_IDXS: &'static [usize] = &[0];
    const PRINCIPAL_POINT_IDXS: [usize; 2] = [1, 2];
    const EXTRA_PARAMS_IDXS: &'static [usize] = &[3];
}

/// Radial camera with parameters `f, cx, cy, k1, k2`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RadialModel;

impl CameraModel for RadialModel {
    const MODEL_ID: CameraModelId = 3;
    const MODEL_NAME: &'static str = "RADIAL";
    const NUM_PARAMS: usize = 5;
    const PARAMS_INFO: &'static str = "f, cx, cy, k1, k2";
    const FOCAL_LENGTH_IDXS: &'static [usize] = &[0];
    const PRINCIPAL_POINT_IDXS: [usize; 2] = [1, 2];
    const EXTRA_PARAMS_IDXS: &'static [usize] = &[3, 4];
}
