//! This module defines the camera model contract shared by every supported model.
//!
//! Each camera model is a zero-sized type implementing [`CameraModel`]. The trait
//! carries the static layout of the model's parameter vector (how many parameters
//! there are and which slots hold the focal length, the principal point and the
//! distortion coefficients) together with the sanity heuristics used to decide
//! whether a fitted parameter vector is plausible.
//!
//! A [`CameraModelDescriptor`] is the type-erased form of that contract. The
//! descriptors of all models live in a dense static table (see [`crate::registry`])
//! so that id-based queries resolve with a single index operation.
//!
//! This module re-exports the concrete models from its submodules:
//! - `pinhole`: `SIMPLE_PINHOLE` and `PINHOLE`.
//! - `radial`: `SIMPLE_RADIAL` and `RADIAL`.
//! - `opencv`: `OPENCV`, `OPENCV_FISHEYE` and `FULL_OPENCV`.
//! - `fisheye`: `FOV`, `SIMPLE_RADIAL_FISHEYE`, `RADIAL_FISHEYE` and `THIN_PRISM_FISHEYE`.

use serde::{Deserialize, Serialize};

pub mod fisheye;
pub mod opencv;
pub mod pinhole;
pub mod radial;

pub use fisheye::{FovModel, RadialFisheyeModel, SimpleRadialFisheyeModel, ThinPrismFisheyeModel};
pub use opencv::{FullOpenCvModel, OpenCvFisheyeModel, OpenCvModel};
pub use pinhole::{PinholeModel, SimplePinholeModel};
pub use radial::{RadialModel, SimpleRadialModel};

/// Compact integer identifier of a camera model.
pub type CameraModelId = i32;

/// Sentinel id returned when a model name is not registered.
pub const INVALID_CAMERA_MODEL_ID: CameraModelId = -1;

/// Sentinel name returned when a model id is not registered.
pub const INVALID_CAMERA_MODEL_NAME: &str = "INVALID_CAMERA_MODEL";

/// Parameter description returned when a model id is not registered.
pub const UNKNOWN_MODEL_PARAMS_INFO: &str = "Camera model does not exist";

/// Represents the resolution of a camera image.
///
/// This struct holds the width and height of the image sensor in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// The width of the image in pixels.
    pub width: u32,
    /// The height of the image in pixels.
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Length of the longer image side, the reference for focal length ratios.
    pub fn max_dimension(&self) -> u32 {
        self.width.max(self.height)
    }
}

/// Defines the possible errors that can occur in camera model operations.
///
/// Hot-path queries never produce these; they answer with sentinels instead.
/// Errors are reserved for constructors, parsing and configuration loading.
#[derive(thiserror::Error, Debug)]
pub enum CameraModelError {
    /// No camera model is registered under the given id.
    #[error("Unknown camera model id: {0}")]
    UnknownModelId(CameraModelId),
    /// No camera model is registered under the given name.
    #[error("Unknown camera model name: {0}")]
    UnknownModelName(String),
    /// A parameter vector does not have the length the model requires.
    #[error("Camera model {model} expects {expected} parameters, got {actual}")]
    ParamCountMismatch {
        model: &'static str,
        expected: usize,
        actual: usize,
    },
    /// Contains a string describing the specific parameter issue.
    #[error("Invalid camera parameters: {0}")]
    InvalidParams(String),
    #[error("Failed to load YAML: {0}")]
    YamlError(String),
    #[error("IO Error: {0}")]
    IOError(String),
}

impl From<std::io::Error> for CameraModelError {
    fn from(err: std::io::Error) -> Self {
        CameraModelError::IOError(err.to_string())
    }
}

impl From<serde_yaml::Error> for CameraModelError {
    fn from(err: serde_yaml::Error) -> Self {
        CameraModelError::YamlError(err.to_string())
    }
}

/// Signature of a model's bogus-parameter check:
/// `(params, width, height, min_focal_length_ratio, max_focal_length_ratio, max_extra_param)`.
pub type BogusParamsFn = fn(&[f64], usize, usize, f64, f64, f64) -> bool;

/// Signature of a model's principal point check: `(params, width, height)`.
pub type BogusPrincipalPointFn = fn(&[f64], usize, usize) -> bool;

/// Contract a camera model must satisfy to participate in the registry.
///
/// The projection and distortion formulas of a model live with the solver
/// that consumes them; this trait only describes the parameter layout. The
/// provided `has_bogus_*` methods implement the default sanity heuristics
/// and may be overridden by a model with different priors.
///
/// All provided methods tolerate a parameter slice that is shorter than
/// [`CameraModel::NUM_PARAMS`]: a missing focal length or distortion slot
/// counts as bogus instead of panicking.
pub trait CameraModel {
    /// Stable, unique id. Ids are dense starting from zero.
    const MODEL_ID: CameraModelId;
    /// Unique name used in configuration files.
    const MODEL_NAME: &'static str;
    /// Length of every well-formed parameter vector of this model.
    const NUM_PARAMS: usize;
    /// Human readable, ordered description of the parameter slots.
    const PARAMS_INFO: &'static str;
    const FOCAL_LENGTH_IDXS: &'static [usize];
    /// Slots of the principal point, x then y.
    const PRINCIPAL_POINT_IDXS: [usize; 2];
    const EXTRA_PARAMS_IDXS: &'static [usize];

    /// Returns `true` if any focal length, relative to the longer image side,
    /// falls outside `[min_focal_length_ratio, max_focal_length_ratio]`.
    fn has_bogus_focal_length(
        params: &[f64],
        width: usize,
        height: usize,
        min_focal_length_ratio: f64,
        max_focal_length_ratio: f64,
    ) -> bool {
        let max_size = width.max(height) as f64;
        Self::FOCAL_LENGTH_IDXS.iter().any(|&idx| {
            params.get(idx).map_or(true, |&focal_length| {
                let focal_length_ratio = focal_length / max_size;
                focal_length_ratio < min_focal_length_ratio
                    || focal_length_ratio > max_focal_length_ratio
            })
        })
    }

    /// Returns `true` if the principal point lies outside `[0, width] x [0, height]`.
    fn has_bogus_principal_point(params: &[f64], width: usize, height: usize) -> bool {
        let [idx_x, idx_y] = Self::PRINCIPAL_POINT_IDXS;
        match (params.get(idx_x), params.get(idx_y)) {
            (Some(&cx), Some(&cy)) => {
                cx < 0.0 || cx > width as f64 || cy < 0.0 || cy > height as f64
            }
            _ => true,
        }
    }

    /// Returns `true` if any distortion coefficient exceeds `max_extra_param` in magnitude.
    fn has_bogus_extra_params(params: &[f64], max_extra_param: f64) -> bool {
        Self::EXTRA_PARAMS_IDXS.iter().any(|&idx| {
            params
                .get(idx)
                .map_or(true, |&value| value.abs() > max_extra_param)
        })
    }

    /// Combined focal length and distortion check.
    ///
    /// The principal point is not part of this check; use
    /// [`CameraModel::has_bogus_principal_point`] when it matters.
    fn has_bogus_params(
        params: &[f64],
        width: usize,
        height: usize,
        min_focal_length_ratio: f64,
        max_focal_length_ratio: f64,
        max_extra_param: f64,
    ) -> bool {
        Self::has_bogus_focal_length(
            params,
            width,
            height,
            min_focal_length_ratio,
            max_focal_length_ratio,
        ) || Self::has_bogus_extra_params(params, max_extra_param)
    }
}

/// Type-erased, static description of one camera model.
///
/// Built at compile time from a [`CameraModel`] implementation with
/// [`CameraModelDescriptor::of`].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CameraModelDescriptor {
    pub id: CameraModelId,
    pub name: &'static str,
    pub num_params: usize,
    pub params_info: &'static str,
    pub focal_length_idxs: &'static [usize],
    pub principal_point_idxs: [usize; 2],
    pub extra_params_idxs: &'static [usize],
    #[serde(skip)]
    has_bogus_params: BogusParamsFn,
    #[serde(skip)]
    has_bogus_principal_point: BogusPrincipalPointFn,
}

impl CameraModelDescriptor {
    /// Captures the layout and checks of the camera model `M`.
    pub const fn of<M: CameraModel>() -> Self {
        Self {
            id: M::MODEL_ID,
            name: M::MODEL_NAME,
            num_params: M::NUM_PARAMS,
            params_info: M::PARAMS_INFO,
            focal_length_idxs: M::FOCAL_LENGTH_IDXS,
            principal_point_idxs: M::PRINCIPAL_POINT_IDXS,
            extra_params_idxs: M::EXTRA_PARAMS_IDXS,
            has_bogus_params: M::has_bogus_params,
            has_bogus_principal_point: M::has_bogus_principal_point,
        }
    }

    /// Runs the model's bogus-parameter check.
    pub fn has_bogus_params(
        &self,
        params: &[f64],
        width: usize,
        height: usize,
        min_focal_length_ratio: f64,
        max_focal_length_ratio: f64,
        max_extra_param: f64,
    ) -> bool {
        (self.has_bogus_params)(
            params,
            width,
            height,
            min_focal_length_ratio,
            max_focal_length_ratio,
            max_extra_param,
        )
    }

    pub fn has_bogus_principal_point(&self, params: &[f64], width: usize, height: usize) -> bool {
        (self.has_bogus_principal_point)(params, width, height)
    }

    /// Checks the layout invariant: the three index sets are pairwise
    /// disjoint, lie in `[0, num_params)` and together cover every slot.
    pub fn is_consistent(&self) -> bool {
        let mut seen = vec![false; self.num_params];
        let all_idxs = self
            .focal_length_idxs
            .iter()
            .chain(self.principal_point_idxs.iter())
            .chain(self.extra_params_idxs.iter());
        for &idx in all_idxs {
            match seen.get_mut(idx) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        !self.focal_length_idxs.is_empty()
            && self.focal_length_idxs.len() <= 2
            && seen.into_iter().all(|used| used)
    }
}
