//! Runtime configuration with TOML persistence.
//!
//! The interaction constants of the controller (drag and hover
//! sensitivity) are fixed by design and deliberately absent here. What
//! is configurable: the spring preset shared by the three orientation
//! channels, and whether pitch is clamped — the one behavior question
//! the original interaction left open. All structs use
//! `#[serde(default)]` so partial TOML files work correctly.

use std::f32::consts::FRAC_PI_2;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SwivelError;
use crate::orientation::PitchLimit;
use crate::spring::SpringConfig;

/// Spring preset applied to all three orientation channels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Spring", inline)]
#[serde(default)]
pub struct SpringOptions {
    /// Restoring force per unit displacement.
    #[schemars(title = "Stiffness", range(min = 1.0, max = 1000.0), extend("step" = 1.0))]
    pub stiffness: f32,
    /// Drag force per unit velocity.
    #[schemars(title = "Damping", range(min = 0.0, max = 200.0), extend("step" = 0.5))]
    pub damping: f32,
    /// Virtual mass of the animated value.
    #[schemars(title = "Mass", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub mass: f32,
}

impl SpringOptions {
    /// Convert to the runtime spring configuration.
    #[must_use]
    pub fn to_config(self) -> SpringConfig {
        SpringConfig {
            stiffness: self.stiffness,
            damping: self.damping,
            mass: self.mass,
        }
    }
}

impl Default for SpringOptions {
    fn default() -> Self {
        let config = SpringConfig::default();
        Self {
            stiffness: config.stiffness,
            damping: config.damping,
            mass: config.mass,
        }
    }
}

/// Pitch axis bounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Pitch", inline)]
#[serde(default)]
pub struct PitchOptions {
    /// Whether pitch is clamped at all. Off by default: the view may
    /// rotate past vertical, matching the original unbounded drag
    /// behavior.
    #[schemars(title = "Clamp Pitch")]
    pub clamp: bool,
    /// Symmetric clamp bound in radians, applied when `clamp` is set.
    #[schemars(title = "Max Pitch", range(min = 0.1, max = 1.5707964), extend("step" = 0.01))]
    pub max: f32,
}

impl Default for PitchOptions {
    fn default() -> Self {
        Self {
            clamp: false,
            max: FRAC_PI_2,
        }
    }
}

/// Top-level controller options.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct ControlOptions {
    /// Spring smoothing preset.
    pub spring: SpringOptions,
    /// Pitch axis bounds.
    pub pitch: PitchOptions,
}

impl ControlOptions {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(ControlOptions)
    }

    /// Runtime pitch limit derived from the pitch options.
    #[must_use]
    pub fn pitch_limit(&self) -> PitchLimit {
        if self.pitch.clamp {
            PitchLimit::Clamped {
                max: self.pitch.max,
            }
        } else {
            PitchLimit::Free
        }
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, SwivelError> {
        let content = std::fs::read_to_string(path).map_err(SwivelError::Io)?;
        toml::from_str(&content)
            .map_err(|e| SwivelError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), SwivelError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SwivelError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SwivelError::Io)?;
        }
        std::fs::write(path, content).map_err(SwivelError::Io)
    }
}
