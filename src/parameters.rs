//! A camera's model, image resolution and parameter vector, kept consistent.
//!
//! [`CameraParameters`] can only be built for a registered model and always
//! holds exactly as many parameters as that model requires, so its accessors
//! index the vector directly.

use crate::camera::{CameraModelDescriptor, CameraModelError, CameraModelId, Resolution};
use crate::config::BogusThresholds;
use crate::dispatch::{camera_model_assess_params, camera_model_initialize_params, ParamsAssessment};
use crate::registry::{camera_model_descriptor, camera_model_name_to_id};
use log::warn;
use nalgebra::Matrix3;
use serde::Serialize;

/// Intrinsic parameters of one camera together with their model.
///
/// # Examples
///
/// ```rust
/// use camera_models::{CameraParameters, Resolution};
///
/// let resolution = Resolution::new(640, 480);
/// let camera = CameraParameters::from_model_name("SIMPLE_RADIAL", 800.0, resolution).unwrap();
/// assert_eq!(camera.params(), &[800.0, 320.0, 240.0, 0.0]);
/// assert_eq!(camera.params_to_string(), "800, 320, 240, 0");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct CameraParameters {
    model_id: CameraModelId,
    resolution: Resolution,
    params: Vec<f64>,
    #[serde(skip)]
    descriptor: &'static CameraModelDescriptor,
}

impl CameraParameters {
    /// Creates a camera with default parameters for `model_id`.
    ///
    /// # Errors
    ///
    /// [`CameraModelError::UnknownModelId`] if the model is not registered.
    pub fn new(
        model_id: CameraModelId,
        focal_length: f64,
        resolution: Resolution,
    ) -> Result<Self, CameraModelError> {
        let descriptor = camera_model_descriptor(model_id).ok_or_else(|| {
            warn!("Cannot create camera for unknown model id {model_id}");
            CameraModelError::UnknownModelId(model_id)
        })?;
        let mut params = Vec::with_capacity(descriptor.num_params);
        camera_model_initialize_params(
            model_id,
            focal_length,
            resolution.width as usize,
            resolution.height as usize,
            &mut params,
        )?;
        Ok(Self {
            model_id,
            resolution,
            params,
            descriptor,
        })
    }

    /// Creates a camera with default parameters for the model called `model_name`.
    ///
    /// # Errors
    ///
    /// [`CameraModelError::UnknownModelName`] if no model has that name.
    pub fn from_model_name(
        model_name: &str,
        focal_length: f64,
        resolution: Resolution,
    ) -> Result<Self, CameraModelError> {
        let model_id = camera_model_name_to_id(model_name);
        if camera_model_descriptor(model_id).is_none() {
            warn!("Cannot create camera for unknown model {model_name:?}");
            return Err(CameraModelError::UnknownModelName(model_name.to_string()));
        }
        Self::new(model_id, focal_length, resolution)
    }

    pub fn model_id(&self) -> CameraModelId {
        self.model_id
    }

    pub fn model_name(&self) -> &'static str {
        self.descriptor.name
    }

    pub fn params_info(&self) -> &'static str {
        self.descriptor.params_info
    }

    pub fn num_params(&self) -> usize {
        self.descriptor.num_params
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn params(&self) -> &[f64] {
        &self.params
    }

    /// Replaces the parameter vector.
    ///
    /// # Errors
    ///
    /// [`CameraModelError::ParamCountMismatch`] if `params` has the wrong
    /// length; the current parameters are kept.
    pub fn set_params(&mut self, params: Vec<f64>) -> Result<(), CameraModelError> {
        if params.len() != self.descriptor.num_params {
            return Err(self.count_mismatch(params.len()));
        }
        self.params = params;
        Ok(())
    }

    /// Focal length along x. For single focal length models this is the focal length.
    pub fn focal_length_x(&self) -> f64 {
        self.params[self.descriptor.focal_length_idxs[0]]
    }

    /// Focal length along y. For single focal length models this is the focal length.
    pub fn focal_length_y(&self) -> f64 {
        let idxs = self.descriptor.focal_length_idxs;
        self.params[idxs[idxs.len() - 1]]
    }

    pub fn mean_focal_length(&self) -> f64 {
        let idxs = self.descriptor.focal_length_idxs;
        idxs.iter().map(|&idx| self.params[idx]).sum::<f64>() / idxs.len() as f64
    }

    /// Sets every focal length slot to `focal_length`.
    pub fn set_focal_length(&mut self, focal_length: f64) {
        for &idx in self.descriptor.focal_length_idxs {
            self.params[idx] = focal_length;
        }
    }

    pub fn principal_point_x(&self) -> f64 {
        self.params[self.descriptor.principal_point_idxs[0]]
    }

    pub fn principal_point_y(&self) -> f64 {
        self.params[self.descriptor.principal_point_idxs[1]]
    }

    pub fn set_principal_point(&mut self, cx: f64, cy: f64) {
        let [idx_x, idx_y] = self.descriptor.principal_point_idxs;
        self.params[idx_x] = cx;
        self.params[idx_y] = cy;
    }

    /// Distortion coefficients in slot order.
    pub fn extra_params(&self) -> Vec<f64> {
        self.descriptor
            .extra_params_idxs
            .iter()
            .map(|&idx| self.params[idx])
            .collect()
    }

    pub fn verify_params(&self) -> bool {
        self.params.len() == self.descriptor.num_params
    }

    pub fn has_bogus_params(&self, thresholds: &BogusThresholds) -> bool {
        self.descriptor.has_bogus_params(
            &self.params,
            self.resolution.width as usize,
            self.resolution.height as usize,
            thresholds.min_focal_length_ratio,
            thresholds.max_focal_length_ratio,
            thresholds.max_extra_param,
        )
    }

    pub fn has_bogus_principal_point(&self) -> bool {
        self.descriptor.has_bogus_principal_point(
            &self.params,
            self.resolution.width as usize,
            self.resolution.height as usize,
        )
    }

    pub fn assess(&self, thresholds: &BogusThresholds) -> ParamsAssessment {
        camera_model_assess_params(
            self.model_id,
            &self.params,
            self.resolution.width as usize,
            self.resolution.height as usize,
            thresholds,
        )
    }

    /// Comma separated parameter values, e.g. `"1000, 1000, 320, 240"`.
    pub fn params_to_string(&self) -> String {
        self.params
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Parses comma separated values into the parameter vector.
    ///
    /// Whitespace around values and empty items are ignored.
    ///
    /// # Errors
    ///
    /// * [`CameraModelError::InvalidParams`] if a value is not a number.
    /// * [`CameraModelError::ParamCountMismatch`] if the number of values is wrong.
    ///
    /// The current parameters are kept on error.
    pub fn set_params_from_string(&mut self, string: &str) -> Result<(), CameraModelError> {
        let params = string
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| {
                item.parse::<f64>().map_err(|e| {
                    CameraModelError::InvalidParams(format!("Invalid value {item:?}: {e}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.set_params(params)
    }

    /// The 3x3 pinhole calibration matrix `K` built from focal lengths and
    /// principal point. Distortion is not represented.
    pub fn calibration_matrix(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.focal_length_x(),
            0.0,
            self.principal_point_x(),
            0.0,
            self.focal_length_y(),
            self.principal_point_y(),
            0.0,
            0.0,
            1.0,
        )
    }

    /// Rescales the image by `scale`, adjusting focal lengths and principal point.
    ///
    /// The new resolution is rounded to whole pixels and the intrinsics are
    /// scaled by the effective per-axis factor.
    ///
    /// # Errors
    ///
    /// [`CameraModelError::InvalidParams`] if `scale` is not a positive finite
    /// number or the current or resulting resolution is empty.
    pub fn rescale(&mut self, scale: f64) -> Result<(), CameraModelError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(CameraModelError::InvalidParams(format!(
                "Scale must be positive and finite, got {scale}"
            )));
        }
        let width = self.resolution.width as f64;
        let height = self.resolution.height as f64;
        let new_width = (scale * width).round();
        let new_height = (scale * height).round();
        if width == 0.0 || height == 0.0 || new_width < 1.0 || new_height < 1.0 {
            return Err(CameraModelError::InvalidParams(format!(
                "Cannot rescale {}x{} image by {scale}",
                self.resolution.width, self.resolution.height
            )));
        }
        if new_width > u32::MAX as f64 || new_height > u32::MAX as f64 {
            return Err(CameraModelError::InvalidParams(format!(
                "Rescaled resolution {new_width}x{new_height} is too large"
            )));
        }
        let scale_x = new_width / width;
        let scale_y = new_height / height;

        let focal_length_idxs = self.descriptor.focal_length_idxs;
        if let [idx] = focal_length_idxs {
            self.params[*idx] *= (scale_x + scale_y) / 2.0;
        } else {
            self.params[focal_length_idxs[0]] *= scale_x;
            self.params[focal_length_idxs[1]] *= scale_y;
        }
        let [idx_x, idx_y] = self.descriptor.principal_point_idxs;
        self.params[idx_x] *= scale_x;
        self.params[idx_y] *= scale_y;
        self.resolution = Resolution::new(new_width as u32, new_height as u32);

        Ok(())
    }

    fn count_mismatch(&self, actual: usize) -> CameraModelError {
        CameraModelError::ParamCountMismatch {
            model: self.descriptor.name,
            expected: self.descriptor.num_params,
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{CameraModel, OpenCvModel, PinholeModel, SimpleRadialModel};
    use approx::assert_relative_eq;

    fn vga() -> Resolution {
        Resolution::new(640, 480)
    }

    #[test]
    fn test_new_initializes_defaults() {
        let camera = CameraParameters::new(PinholeModel::MODEL_ID, 1000.0, vga()).unwrap();

        assert_eq!(camera.model_name(), "PINHOLE");
        assert_eq!(camera.params_info(), "fx, fy, cx, cy");
        assert_eq!(camera.num_params(), 4);
        assert_eq!(camera.params(), &[1000.0, 1000.0, 320.0, 240.0]);
        assert!(camera.verify_params());
    }

    #[test]
    fn test_unknown_models_are_rejected() {
        assert!(matches!(
            CameraParameters::new(42, 1000.0, vga()),
            Err(CameraModelError::UnknownModelId(42))
        ));
        assert!(matches!(
            CameraParameters::from_model_name("opencv", 1000.0, vga()),
            Err(CameraModelError::UnknownModelName(name)) if name == "opencv"
        ));
    }

    #[test]
    fn test_focal_length_and_principal_point_accessors() {
        let mut camera = CameraParameters::new(OpenCvModel::MODEL_ID, 500.0, vga()).unwrap();
        camera.set_params(vec![500.0, 520.0, 310.0, 250.0, 0.1, -0.2, 0.01, 0.02]).unwrap();

        assert_eq!(camera.focal_length_x(), 500.0);
        assert_eq!(camera.focal_length_y(), 520.0);
        assert_relative_eq!(camera.mean_focal_length(), 510.0);
        assert_eq!(camera.principal_point_x(), 310.0);
        assert_eq!(camera.principal_point_y(), 250.0);
        assert_eq!(camera.extra_params(), vec![0.1, -0.2, 0.01, 0.02]);

        camera.set_focal_length(600.0);
        camera.set_principal_point(300.0, 200.0);
        assert_eq!(&camera.params()[..4], &[600.0, 600.0, 300.0, 200.0]);
    }

    #[test]
    fn test_set_params_rejects_wrong_length() {
        let mut camera = CameraParameters::new(PinholeModel::MODEL_ID, 1000.0, vga()).unwrap();
        let result = camera.set_params(vec![1.0, 2.0, 3.0]);

        assert!(matches!(
            result,
            Err(CameraModelError::ParamCountMismatch { model: "PINHOLE", expected: 4, actual: 3 })
        ));
        assert_eq!(camera.params(), &[1000.0, 1000.0, 320.0, 240.0]);
    }

    #[test]
    fn test_params_string_round_trip() {
        let mut camera = CameraParameters::new(SimpleRadialModel::MODEL_ID, 800.5, vga()).unwrap();
        assert_eq!(camera.params_to_string(), "800.5, 320, 240, 0");

        camera.set_params_from_string(" 700, 321.25,240 ,-0.125 ").unwrap();
        assert_eq!(camera.params(), &[700.0, 321.25, 240.0, -0.125]);

        let text = camera.params_to_string();
        camera.set_params_from_string(&text).unwrap();
        assert_eq!(camera.params(), &[700.0, 321.25, 240.0, -0.125]);
    }

    #[test]
    fn test_set_params_from_string_errors() {
        let mut camera = CameraParameters::new(SimpleRadialModel::MODEL_ID, 800.0, vga()).unwrap();

        assert!(matches!(
            camera.set_params_from_string("700, abc, 240, 0"),
            Err(CameraModelError::InvalidParams(_))
        ));
        assert!(matches!(
            camera.set_params_from_string("700, 320, 240"),
            Err(CameraModelError::ParamCountMismatch { actual: 3, .. })
        ));
        assert_eq!(camera.params(), &[800.0, 320.0, 240.0, 0.0]);
    }

    #[test]
    fn test_bogus_checks_use_resolution() {
        let thresholds = BogusThresholds::default();
        let mut camera = CameraParameters::new(PinholeModel::MODEL_ID, 700.0, vga()).unwrap();
        assert!(!camera.has_bogus_params(&thresholds));
        assert!(!camera.has_bogus_principal_point());
        assert_eq!(camera.assess(&thresholds), ParamsAssessment::Valid);

        camera.set_focal_length(5.0);
        assert!(camera.has_bogus_params(&thresholds));
        assert_eq!(camera.assess(&thresholds), ParamsAssessment::Bogus);

        camera.set_focal_length(700.0);
        camera.set_principal_point(-10.0, 240.0);
        assert!(camera.has_bogus_principal_point());
        assert!(!camera.has_bogus_params(&thresholds));
    }

    #[test]
    fn test_calibration_matrix() {
        let mut camera = CameraParameters::new(PinholeModel::MODEL_ID, 500.0, vga()).unwrap();
        camera.set_params(vec![500.0, 510.0, 320.0, 240.0]).unwrap();
        let k = camera.calibration_matrix();

        assert_eq!(k[(0, 0)], 500.0);
        assert_eq!(k[(1, 1)], 510.0);
        assert_eq!(k[(0, 2)], 320.0);
        assert_eq!(k[(1, 2)], 240.0);
        assert_eq!(k[(2, 2)], 1.0);
        assert_eq!(k[(1, 0)], 0.0);
        assert_eq!(k[(0, 1)], 0.0);
    }

    #[test]
    fn test_rescale() {
        let mut camera = CameraParameters::new(PinholeModel::MODEL_ID, 1000.0, vga()).unwrap();
        camera.rescale(0.5).unwrap();

        assert_eq!(camera.resolution(), Resolution::new(320, 240));
        assert_relative_eq!(camera.focal_length_x(), 500.0);
        assert_relative_eq!(camera.focal_length_y(), 500.0);
        assert_relative_eq!(camera.principal_point_x(), 160.0);
        assert_relative_eq!(camera.principal_point_y(), 120.0);
    }

    #[test]
    fn test_rescale_single_focal_length_uses_mean_factor() {
        let resolution = Resolution::new(3, 5);
        let mut camera =
            CameraParameters::new(SimpleRadialModel::MODEL_ID, 100.0, resolution).unwrap();
        camera.rescale(0.5).unwrap();

        // round(1.5) = 2 and round(2.5) = 3, so the axes scale differently.
        assert_eq!(camera.resolution(), Resolution::new(2, 3));
        assert_relative_eq!(camera.focal_length_x(), 100.0 * (2.0 / 3.0 + 3.0 / 5.0) / 2.0);
        assert_relative_eq!(camera.principal_point_x(), 1.0);
        assert_relative_eq!(camera.principal_point_y(), 1.5);
    }

    #[test]
    fn test_rescale_rejects_invalid_scale() {
        let mut camera = CameraParameters::new(PinholeModel::MODEL_ID, 1000.0, vga()).unwrap();
        assert!(camera.rescale(0.0).is_err());
        assert!(camera.rescale(f64::NAN).is_err());
        assert!(camera.rescale(1e-6).is_err());
        assert_eq!(camera.resolution(), vga());
    }
}
