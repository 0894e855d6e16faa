//! Camera Models Library
//!
//! A registry of the camera models used by a 3D reconstruction pipeline,
//! together with the parameter bookkeeping that sits around them:
//! - Name ↔ id translation for every registered model
//! - Default parameter vectors from a focal length guess and the image size
//! - Parameter vector shape validation
//! - Heuristic detection of implausible ("bogus") calibration results
//!
//! Supported models: `SIMPLE_PINHOLE`, `PINHOLE`, `SIMPLE_RADIAL`, `RADIAL`,
//! `OPENCV`, `OPENCV_FISHEYE`, `FULL_OPENCV`, `FOV`, `SIMPLE_RADIAL_FISHEYE`,
//! `RADIAL_FISHEYE` and `THIN_PRISM_FISHEYE`.
//!
//! The id-based functions are meant for hot loops: they never panic and report
//! unknown models through sentinel values instead of errors.
//!
//! ```rust
//! use camera_models::{
//!     camera_model_has_bogus_params, camera_model_name_to_id, camera_model_params,
//! };
//!
//! let model_id = camera_model_name_to_id("OPENCV");
//! let params = camera_model_params(model_id, 700.0, 640, 480).unwrap();
//! assert!(!camera_model_has_bogus_params(model_id, &params, 640, 480, 0.1, 10.0, 1.0));
//! ```

pub mod camera;
pub mod config;
pub mod dispatch;
pub mod parameters;
pub mod registry;

// Re-export commonly used types
pub use camera::{
    CameraModel, CameraModelDescriptor, CameraModelError, CameraModelId, Resolution,
    INVALID_CAMERA_MODEL_ID, INVALID_CAMERA_MODEL_NAME, UNKNOWN_MODEL_PARAMS_INFO,
};

pub use config::BogusThresholds;

pub use dispatch::{
    camera_model_assess_params, camera_model_extra_params_idxs, camera_model_focal_length_idxs,
    camera_model_has_bogus_params, camera_model_has_bogus_principal_point,
    camera_model_initialize_params, camera_model_num_params, camera_model_params,
    camera_model_params_info, camera_model_principal_point_idxs, camera_model_verify_params,
    ParamsAssessment,
};

pub use parameters::CameraParameters;

pub use registry::{
    camera_model_descriptor, camera_model_exists, camera_model_exists_name,
    camera_model_id_to_name, camera_model_name_to_id, camera_models, initialize_camera_models,
    CameraModelRegistry, CAMERA_MODELS, NUM_CAMERA_MODELS,
};
