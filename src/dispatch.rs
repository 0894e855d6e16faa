//! Id-based queries over the registered camera models.
//!
//! Every function resolves the model id with a single bounds-checked index
//! into [`CAMERA_MODELS`](crate::registry::CAMERA_MODELS). These functions run
//! inside bundle adjustment loops, so an unknown id never panics: it produces
//! an empty slice, [`UNKNOWN_MODEL_PARAMS_INFO`] or `false`. The one
//! exception is default initialization, which returns an error because it
//! has no meaningful output to give.

use crate::camera::{CameraModelError, CameraModelId, UNKNOWN_MODEL_PARAMS_INFO};
use crate::config::BogusThresholds;
use crate::registry::camera_model_descriptor;
use log::trace;
use serde::{Deserialize, Serialize};

/// Fills `params` with default values for the model `model_id`.
///
/// Focal length slots receive `focal_length`, the principal point is placed
/// at the image centre and distortion coefficients are zeroed. Pixel
/// coordinates are assumed to span `[0, width] x [0, height]` with the upper
/// left corner of the image (not the centre of the upper left pixel) at the
/// origin.
///
/// # Errors
///
/// Returns [`CameraModelError::UnknownModelId`] if the id is not registered;
/// `params` is left untouched in that case.
pub fn camera_model_initialize_params(
    model_id: CameraModelId,
    focal_length: f64,
    width: usize,
    height: usize,
    params: &mut Vec<f64>,
) -> Result<(), CameraModelError> {
    let descriptor =
        camera_model_descriptor(model_id).ok_or(CameraModelError::UnknownModelId(model_id))?;

    params.clear();
    params.resize(descriptor.num_params, 0.0);
    for &idx in descriptor.focal_length_idxs {
        params[idx] = focal_length;
    }
    let [idx_x, idx_y] = descriptor.principal_point_idxs;
    params[idx_x] = width as f64 / 2.0;
    params[idx_y] = height as f64 / 2.0;
    for &idx in descriptor.extra_params_idxs {
        params[idx] = 0.0;
    }

    Ok(())
}

/// Allocating variant of [`camera_model_initialize_params`].
///
/// # Examples
///
/// ```rust
/// use camera_models::{camera_model_name_to_id, camera_model_params};
///
/// let pinhole = camera_model_name_to_id("PINHOLE");
/// let params = camera_model_params(pinhole, 1000.0, 640, 480).unwrap();
/// assert_eq!(params, vec![1000.0, 1000.0, 320.0, 240.0]);
/// ```
pub fn camera_model_params(
    model_id: CameraModelId,
    focal_length: f64,
    width: usize,
    height: usize,
) -> Result<Vec<f64>, CameraModelError> {
    let mut params = Vec::new();
    camera_model_initialize_params(model_id, focal_length, width, height, &mut params)?;
    Ok(params)
}

pub fn camera_model_params_info(model_id: CameraModelId) -> &'static str {
    camera_model_descriptor(model_id).map_or(UNKNOWN_MODEL_PARAMS_INFO, |d| d.params_info)
}

pub fn camera_model_num_params(model_id: CameraModelId) -> Option<usize> {
    camera_model_descriptor(model_id).map(|d| d.num_params)
}

pub fn camera_model_focal_length_idxs(model_id: CameraModelId) -> &'static [usize] {
    camera_model_descriptor(model_id).map_or(&[] as &[usize], |d| d.focal_length_idxs)
}

pub fn camera_model_principal_point_idxs(model_id: CameraModelId) -> &'static [usize] {
    camera_model_descriptor(model_id).map_or(&[] as &[usize], |d| &d.principal_point_idxs[..])
}

pub fn camera_model_extra_params_idxs(model_id: CameraModelId) -> &'static [usize] {
    camera_model_descriptor(model_id).map_or(&[] as &[usize], |d| d.extra_params_idxs)
}

/// Returns `true` iff `model_id` is registered and `params` has exactly the
/// number of parameters the model requires. Values are not inspected.
pub fn camera_model_verify_params(model_id: CameraModelId, params: &[f64]) -> bool {
    camera_model_descriptor(model_id).is_some_and(|d| params.len() == d.num_params)
}

/// Flags parameter vectors that are well-formed but physically implausible.
///
/// A focal length is bogus when its ratio to the longer image side falls
/// outside `[min_focal_length_ratio, max_focal_length_ratio]`; a distortion
/// coefficient is bogus when its magnitude exceeds `max_extra_param`.
///
/// An unregistered `model_id` yields `false`: there is no layout to assess.
/// Callers that need to tell that case apart should check the id first or
/// use [`camera_model_assess_params`]. A vector of the wrong length for a
/// registered model is reported as bogus.
pub fn camera_model_has_bogus_params(
    model_id: CameraModelId,
    params: &[f64],
    width: usize,
    height: usize,
    min_focal_length_ratio: f64,
    max_focal_length_ratio: f64,
    max_extra_param: f64,
) -> bool {
    let Some(descriptor) = camera_model_descriptor(model_id) else {
        return false;
    };
    if params.len() != descriptor.num_params {
        trace!(
            "{} expects {} parameters, got {}",
            descriptor.name,
            descriptor.num_params,
            params.len()
        );
        return true;
    }
    descriptor.has_bogus_params(
        params,
        width,
        height,
        min_focal_length_ratio,
        max_focal_length_ratio,
        max_extra_param,
    )
}

/// Returns `true` if the principal point lies outside the image.
///
/// Unregistered ids yield `false`, malformed vectors `true`, as in
/// [`camera_model_has_bogus_params`].
pub fn camera_model_has_bogus_principal_point(
    model_id: CameraModelId,
    params: &[f64],
    width: usize,
    height: usize,
) -> bool {
    camera_model_descriptor(model_id).is_some_and(|d| {
        params.len() != d.num_params || d.has_bogus_principal_point(params, width, height)
    })
}

/// Outcome of a full parameter assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamsAssessment {
    /// The model id is not registered.
    UnknownModel,
    /// The vector length does not match the model.
    Malformed,
    /// Well-formed but outside the plausibility thresholds.
    Bogus,
    Valid,
}

impl ParamsAssessment {
    pub fn is_valid(self) -> bool {
        self == ParamsAssessment::Valid
    }
}

/// Distinguishes an unknown model from malformed, bogus and valid parameters.
pub fn camera_model_assess_params(
    model_id: CameraModelId,
    params: &[f64],
    width: usize,
    height: usize,
    thresholds: &BogusThresholds,
) -> ParamsAssessment {
    let Some(descriptor) = camera_model_descriptor(model_id) else {
        return ParamsAssessment::UnknownModel;
    };
    if params.len() != descriptor.num_params {
        return ParamsAssessment::Malformed;
    }
    if descriptor.has_bogus_params(
        params,
        width,
        height,
        thresholds.min_focal_length_ratio,
        thresholds.max_focal_length_ratio,
        thresholds.max_extra_param,
    ) {
        ParamsAssessment::Bogus
    } else {
        ParamsAssessment::Valid
    }
}
