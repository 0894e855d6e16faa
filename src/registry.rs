//! Registry of all supported camera models.
//!
//! The descriptor table is a `static` array indexed by model id. The
//! name-to-id and id-to-name lookup tables are built once, on first use or by
//! an explicit [`initialize_camera_models`] call, and are immutable afterwards,
//! so every query is safe to run concurrently without locking.

use crate::camera::{
    CameraModelDescriptor, CameraModelId, FovModel, FullOpenCvModel, OpenCvFisheyeModel,
    OpenCvModel, PinholeModel, RadialFisheyeModel, RadialModel, SimplePinholeModel,
    SimpleRadialFisheyeModel, SimpleRadialModel, ThinPrismFisheyeModel, INVALID_CAMERA_MODEL_ID,
    INVALID_CAMERA_MODEL_NAME,
};
use log::debug;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Number of registered camera models.
pub const NUM_CAMERA_MODELS: usize = 11;

/// Descriptors of every registered model. Position `i` holds the model with id `i`.
pub static CAMERA_MODELS: [CameraModelDescriptor; NUM_CAMERA_MODELS] = [
    CameraModelDescriptor::of::<SimplePinholeModel>(),
    CameraModelDescriptor::of::<PinholeModel>(),
    CameraModelDescriptor::of::<SimpleRadialModel>(),
    CameraModelDescriptor::of::<RadialModel>(),
    CameraModelDescriptor::of::<OpenCvModel>(),
    CameraModelDescriptor::of::<OpenCvFisheyeModel>(),
    CameraModelDescriptor::of::<FullOpenCvModel>(),
    CameraModelDescriptor::of::<FovModel>(),
    CameraModelDescriptor::of::<SimpleRadialFisheyeModel>(),
    CameraModelDescriptor::of::<RadialFisheyeModel>(),
    CameraModelDescriptor::of::<ThinPrismFisheyeModel>(),
];

static REGISTRY: OnceLock<CameraModelRegistry> = OnceLock::new();

/// Immutable name/id lookup tables over a set of model descriptors.
#[derive(Debug)]
pub struct CameraModelRegistry {
    name_to_id: HashMap<&'static str, CameraModelId>,
    id_to_name: HashMap<CameraModelId, &'static str>,
}

impl CameraModelRegistry {
    /// Builds the lookup tables from `descriptors`.
    pub fn new(descriptors: &[CameraModelDescriptor]) -> Self {
        let mut name_to_id = HashMap::with_capacity(descriptors.len());
        let mut id_to_name = HashMap::with_capacity(descriptors.len());

        for descriptor in descriptors {
            debug_assert!(
                descriptor.is_consistent(),
                "inconsistent parameter layout for {}",
                descriptor.name
            );
            let previous_id = name_to_id.insert(descriptor.name, descriptor.id);
            let previous_name = id_to_name.insert(descriptor.id, descriptor.name);
            debug_assert!(
                previous_id.is_none() && previous_name.is_none(),
                "duplicate camera model {} ({})",
                descriptor.name,
                descriptor.id
            );
        }

        debug!("Registered {} camera models", name_to_id.len());

        Self {
            name_to_id,
            id_to_name,
        }
    }

    /// Returns the process-wide registry, building it on first access.
    pub fn global() -> &'static CameraModelRegistry {
        REGISTRY.get_or_init(|| CameraModelRegistry::new(&CAMERA_MODELS))
    }

    /// Id registered under `name` (exact, case-sensitive match), or
    /// [`INVALID_CAMERA_MODEL_ID`].
    pub fn name_to_id(&self, name: &str) -> CameraModelId {
        self.name_to_id
            .get(name)
            .copied()
            .unwrap_or(INVALID_CAMERA_MODEL_ID)
    }

    /// Name registered under `model_id`, or [`INVALID_CAMERA_MODEL_NAME`].
    pub fn id_to_name(&self, model_id: CameraModelId) -> &'static str {
        self.id_to_name
            .get(&model_id)
            .copied()
            .unwrap_or(INVALID_CAMERA_MODEL_NAME)
    }

    pub fn len(&self) -> usize {
        self.name_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_id.is_empty()
    }
}

/// Builds the global lookup tables now instead of on first query.
///
/// Calling it more than once is harmless.
pub fn initialize_camera_models() -> &'static CameraModelRegistry {
    CameraModelRegistry::global()
}

/// Returns the descriptor registered under `model_id`, if any.
#[inline]
pub fn camera_model_descriptor(model_id: CameraModelId) -> Option<&'static CameraModelDescriptor> {
    usize::try_from(model_id)
        .ok()
        .and_then(|idx| CAMERA_MODELS.get(idx))
}

/// Iterates over the descriptors of all registered models in id order.
pub fn camera_models() -> impl Iterator<Item = &'static CameraModelDescriptor> {
    CAMERA_MODELS.iter()
}

pub fn camera_model_name_to_id(model_name: &str) -> CameraModelId {
    CameraModelRegistry::global().name_to_id(model_name)
}

pub fn camera_model_id_to_name(model_id: CameraModelId) -> &'static str {
    CameraModelRegistry::global().id_to_name(model_id)
}

pub fn camera_model_exists(model_id: CameraModelId) -> bool {
    camera_model_descriptor(model_id).is_some()
}

pub fn camera_model_exists_name(model_name: &str) -> bool {
    camera_model_name_to_id(model_name) != INVALID_CAMERA_MODEL_ID
}
