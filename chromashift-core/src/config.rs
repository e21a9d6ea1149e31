//! Runtime settings surface recognized by the telemetry core.
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure while loading or validating a [`ChromaConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("max-ghosts must be at least 1")]
    ZeroGhostCapacity,
}

/// Settings consumed by the session. Keys match the host mod's settings
/// file, so this deserializes straight from its JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ChromaConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub ghost_trail: bool,
    #[serde(default = "default_ghost_opacity")]
    pub ghost_opacity: f32,
    #[serde(default = "default_true")]
    pub time_echo: bool,
    #[serde(default = "default_true")]
    pub emotion_engine: bool,
    #[serde(default = "default_true")]
    pub rhythm_pulse: bool,
    #[serde(default = "default_pulse_intensity")]
    pub pulse_intensity: f32,
    #[serde(default = "default_true")]
    pub dimension_fracture: bool,
    #[serde(default)]
    pub fracture_persist: bool,
    #[serde(default = "default_max_ghosts")]
    pub max_ghosts: usize,
}

impl Default for ChromaConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ghost_trail: true,
            ghost_opacity: default_ghost_opacity(),
            time_echo: true,
            emotion_engine: true,
            rhythm_pulse: true,
            pulse_intensity: default_pulse_intensity(),
            dimension_fracture: true,
            fracture_persist: false,
            max_ghosts: default_max_ghosts(),
        }
    }
}

impl ChromaConfig {
    /// Load settings from a JSON string, normalizing out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or if `max-ghosts`
    /// is zero.
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(json_str)?;
        if config.max_ghosts == 0 {
            return Err(ConfigError::ZeroGhostCapacity);
        }
        config.ghost_opacity = config.ghost_opacity.clamp(0.0, 1.0);
        config.pulse_intensity = config.pulse_intensity.max(0.0);
        Ok(config)
    }
}

fn default_true() -> bool {
    true
}

fn default_ghost_opacity() -> f32 {
    0.5
}

fn default_pulse_intensity() -> f32 {
    1.0
}

fn default_max_ghosts() -> usize {
    5
}
