//! Thresholds for the bogus-parameter heuristics.
//!
//! The thresholds depend on the lenses a reconstruction expects (a telephoto
//! dataset tolerates much larger focal length ratios than a fisheye rig), so
//! they are loaded from the `bogus_params` section of a YAML file:
//!
//! ```yaml
//! bogus_params:
//!   min_focal_length_ratio: 0.1
//!   max_focal_length_ratio: 10.0
//!   max_extra_param: 1.0
//! ```
//!
//! Missing fields, or a missing section, fall back to [`BogusThresholds::default`].

use crate::camera::CameraModelError;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;

pub const DEFAULT_MIN_FOCAL_LENGTH_RATIO: f64 = 0.1;
pub const DEFAULT_MAX_FOCAL_LENGTH_RATIO: f64 = 10.0;
pub const DEFAULT_MAX_EXTRA_PARAM: f64 = 1.0;

/// Plausibility limits applied by the bogus-parameter detector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BogusThresholds {
    /// Smallest accepted ratio of focal length to the longer image side.
    pub min_focal_length_ratio: f64,
    /// Largest accepted ratio of focal length to the longer image side.
    pub max_focal_length_ratio: f64,
    /// Largest accepted magnitude of any distortion coefficient.
    pub max_extra_param: f64,
}

impl Default for BogusThresholds {
    fn default() -> Self {
        Self {
            min_focal_length_ratio: DEFAULT_MIN_FOCAL_LENGTH_RATIO,
            max_focal_length_ratio: DEFAULT_MAX_FOCAL_LENGTH_RATIO,
            max_extra_param: DEFAULT_MAX_EXTRA_PARAM,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigDocument {
    #[serde(default)]
    bogus_params: BogusThresholds,
}

impl BogusThresholds {
    /// Loads thresholds from the `bogus_params` section of a YAML file.
    ///
    /// # Errors
    ///
    /// * [`CameraModelError::IOError`] if the file cannot be read.
    /// * [`CameraModelError::YamlError`] if the content is not valid YAML.
    /// * [`CameraModelError::InvalidParams`] if the loaded values fail
    ///   [`BogusThresholds::validate`].
    pub fn load_from_yaml(path: &str) -> Result<Self, CameraModelError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents).inspect_err(|e| warn!("Rejected {path}: {e}"))
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, CameraModelError> {
        // An empty document deserializes to `null`, not to an empty mapping.
        let document: ConfigDocument = if contents.trim().is_empty() {
            ConfigDocument::default()
        } else {
            serde_yaml::from_str(contents)?
        };
        let thresholds = document.bogus_params;
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Rejects non-finite or negative limits and an inverted focal length range.
    pub fn validate(&self) -> Result<(), CameraModelError> {
        let values = [
            ("min_focal_length_ratio", self.min_focal_length_ratio),
            ("max_focal_length_ratio", self.max_focal_length_ratio),
            ("max_extra_param", self.max_extra_param),
        ];
        for (name, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(CameraModelError::InvalidParams(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if self.min_focal_length_ratio > self.max_focal_length_ratio {
            return Err(CameraModelError::InvalidParams(format!(
                "min_focal_length_ratio ({}) exceeds max_focal_length_ratio ({})",
                self.min_focal_length_ratio, self.max_focal_length_ratio
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_yaml() {
        let thresholds = BogusThresholds::load_from_yaml("samples/bogus_thresholds.yaml").unwrap();

        assert_eq!(thresholds.min_focal_length_ratio, 0.2);
        assert_eq!(thresholds.max_focal_length_ratio, 5.0);
        assert_eq!(thresholds.max_extra_param, 0.5);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let thresholds =
            BogusThresholds::from_yaml_str("bogus_params:\n  max_extra_param: 2.5\n").unwrap();
        assert_eq!(thresholds.min_focal_length_ratio, DEFAULT_MIN_FOCAL_LENGTH_RATIO);
        assert_eq!(thresholds.max_focal_length_ratio, DEFAULT_MAX_FOCAL_LENGTH_RATIO);
        assert_eq!(thresholds.max_extra_param, 2.5);

        assert_eq!(BogusThresholds::from_yaml_str("").unwrap(), BogusThresholds::default());
        assert_eq!(
            BogusThresholds::from_yaml_str("other_section: 1\n").unwrap(),
            BogusThresholds::default()
        );
    }

    #[test]
    fn test_invalid_thresholds_are_rejected() {
        let inverted = concat!(
            "bogus_params:\n",
            "  min_focal_length_ratio: 3.0\n",
            "  max_focal_length_ratio: 2.0\n",
        );
        assert!(matches!(
            BogusThresholds::from_yaml_str(inverted),
            Err(CameraModelError::InvalidParams(_))
        ));

        let negative = BogusThresholds {
            max_extra_param: -1.0,
            ..BogusThresholds::default()
        };
        assert!(negative.validate().is_err());

        let nan = BogusThresholds {
            min_focal_length_ratio: f64::NAN,
            ..BogusThresholds::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_malformed_yaml() {
        let result = BogusThresholds::from_yaml_str("bogus_params: [1, 2");
        assert!(matches!(result, Err(CameraModelError::YamlError(_))));

        let result = BogusThresholds::load_from_yaml("samples/does_not_exist.yaml");
        assert!(matches!(result, Err(CameraModelError::IOError(_))));
    }
}
