// Haze Engine - Data-Oriented Programming (DOP) Architecture
//
// Particle overlay that renders air-pollution severity as an animated field.
// - *_data modules hold plain data
// - *_operations modules hold pure functions over that data
// - ParticleEngine is the only stateful piece and owns the lifecycle

// Constants module
pub mod constants;

// Core engine modules
pub mod engine;
pub mod error;

// Simulation and compositing
pub mod color;
pub mod config;
pub mod particles;
pub mod renderer;
pub mod scheduler;
pub mod surface;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use color::{Rgb, Rgba};
pub use config::{
    BackgroundConfig, BehaviorConfig, EffectsConfig, ParticleConfig, ParticleGroup,
};
pub use engine::ParticleEngine;
pub use error::{EngineError, EngineResult, OptionExt};
pub use particles::ParticleData;
pub use scheduler::{FrameHandle, FrameScheduler, ManualScheduler};
pub use surface::{DrawContext2d, DrawSurface, RasterContext, RasterSurface};

/// Host-side engine settings, independent of the pollutant configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Age wraps at this many frames; one full pulse period
    pub max_age: f32,
    /// Alpha of the per-frame black fade in trails mode
    pub trail_fade_alpha: f32,
    /// Optional cap on seeded particles; `None` seeds every group count
    pub max_particles: Option<u32>,
    /// Fixed RNG seed for reproducible runs; entropy-seeded when `None`
    pub rng_seed: Option<u64>,
    /// Cadence of the paced driver
    pub target_fps: u32,
    /// Hex color used when a group color fails to parse
    pub fallback_color: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_age: constants::defaults::MAX_AGE,
            trail_fade_alpha: constants::defaults::TRAIL_FADE_ALPHA,
            max_particles: None,
            rng_seed: None,
            target_fps: constants::defaults::TARGET_FPS,
            fallback_color: constants::defaults::FALLBACK_COLOR.to_string(),
        }
    }
}

impl EngineConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !self.max_age.is_finite() || self.max_age <= 0.0 {
            return Err(anyhow::anyhow!(
                "EngineConfig: max_age must be a positive number, got {}",
                self.max_age
            ));
        }

        if !(self.trail_fade_alpha > 0.0 && self.trail_fade_alpha <= 1.0) {
            return Err(anyhow::anyhow!(
                "EngineConfig: trail_fade_alpha {} outside (0, 1]",
                self.trail_fade_alpha
            ));
        }

        if self.max_particles == Some(0) {
            return Err(anyhow::anyhow!("EngineConfig: max_particles cannot be 0"));
        }

        if self.target_fps == 0 {
            return Err(anyhow::anyhow!("EngineConfig: target_fps cannot be 0"));
        }

        color::parse_hex_rgb(&self.fallback_color).map_err(|e| {
            anyhow::anyhow!("EngineConfig: fallback_color: {}", e)
        })?;

        log::debug!("[EngineConfig] Configuration validated successfully");
        Ok(())
    }

    /// Parse settings from TOML; missing keys take their defaults
    pub fn from_toml_str(text: &str) -> EngineResult<Self> {
        let config: EngineConfig = toml::from_str(text)?;
        Ok(config)
    }

    /// Load settings from a TOML file
    pub fn load(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| EngineError::IoError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        let config = Self::from_toml_str(&text)?;
        log::info!("[EngineConfig] Loaded settings from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_particles, None);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cases = [
            EngineConfig {
                max_age: 0.0,
                ..Default::default()
            },
            EngineConfig {
                max_age: f32::INFINITY,
                ..Default::default()
            },
            EngineConfig {
                trail_fade_alpha: 0.0,
                ..Default::default()
            },
            EngineConfig {
                trail_fade_alpha: 1.5,
                ..Default::default()
            },
            EngineConfig {
                max_particles: Some(0),
                ..Default::default()
            },
            EngineConfig {
                target_fps: 0,
                ..Default::default()
            },
            EngineConfig {
                fallback_color: "chartreuse".to_string(),
                ..Default::default()
            },
        ];
        for case in cases {
            assert!(case.validate().is_err(), "{:?} should be rejected", case);
        }
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = EngineConfig::from_toml_str("max_particles = 500\nrng_seed = 7\n").unwrap();
        assert_eq!(config.max_particles, Some(500));
        assert_eq!(config.rng_seed, Some(7));
        assert_eq!(config.max_age, constants::defaults::MAX_AGE);
        assert_eq!(config.fallback_color, "#FFFFFF");
    }

    #[test]
    fn test_bad_toml_is_a_deserialization_error() {
        let err = EngineConfig::from_toml_str("max_particles = \"lots\"").unwrap_err();
        assert!(matches!(err, EngineError::DeserializationError { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("haze.toml");
        std::fs::write(&path, "target_fps = 30\ntrail_fade_alpha = 0.1\n").unwrap();
        let config = EngineConfig::load(&path).unwrap();
        assert_eq!(config.target_fps, 30);
        assert!((config.trail_fade_alpha - 0.1).abs() < 1e-6);
        assert!(config.validate().is_ok());
    }
}
