//! Particle configuration data - Pure DOP
//!
//! Wire shape of the pollutant description handed to the engine. Field names
//! follow the camelCase JSON produced upstream. Everything optional defaults
//! to "off" or zero.

use serde::{Deserialize, Deserializer, Serialize};

/// Declarative description of a pollutant visualization
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticleConfig {
    /// Informational total. The seeded count is the sum of group counts.
    #[serde(default, deserialize_with = "lenient_count")]
    pub particle_count: u32,

    #[serde(default, alias = "particles")]
    pub particle_groups: Vec<ParticleGroup>,

    #[serde(default)]
    pub background: BackgroundConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,

    #[serde(default)]
    pub effects: EffectsConfig,
}

/// One pollutant cluster of visually identical particles
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleGroup {
    /// Pollutant name, e.g. "PM2.5"
    #[serde(rename = "type")]
    pub label: String,

    /// Hex RGB fill color
    pub color: String,

    /// Base radius in pixels
    pub size: f32,

    /// Speed scale in pixels per frame
    pub speed: f32,

    /// Base opacity in [0, 1]
    pub opacity: f32,

    #[serde(deserialize_with = "lenient_count")]
    pub count: u32,
}

/// Full-surface tint painted every frame
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// CSS color, usually `rgba(...)`. Empty means no overlay.
    pub overlay: String,

    /// Display-only
    pub description: String,
}

/// Uniform forces applied to every particle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BehaviorConfig {
    /// Random-walk acceleration magnitude, [0, 1]
    pub turbulence: f32,

    /// Constant horizontal bias, [-1, 1]
    pub drift: f32,

    /// Constant downward bias, [0, 1]
    pub sink_rate: f32,
}

/// Independent compositing toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub glow: bool,
    pub trails: bool,
    pub pulse: bool,
}

/// Accept any JSON number for a count. Negative, fractional or non-finite
/// values saturate into `u32` instead of failing the whole document.
fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(match value {
        Some(v) if v.is_finite() && v > 0.0 => v.floor().min(u32::MAX as f64) as u32,
        _ => 0,
    })
}
