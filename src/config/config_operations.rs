//! Particle configuration operations - Pure functions
//!
//! Parsing and inspection of `ParticleConfig` values. The engine does not
//! validate configurations beyond what serde enforces; degenerate values
//! are tolerated downstream.

use super::config_data::{
    BackgroundConfig, BehaviorConfig, EffectsConfig, ParticleConfig, ParticleGroup,
};
use crate::error::{EngineError, EngineResult};
use std::path::Path;

// ============================================================================
// PARSING
// ============================================================================

/// Parse a configuration from a JSON document
pub fn parse_particle_config(json: &str) -> EngineResult<ParticleConfig> {
    let config: ParticleConfig = serde_json::from_str(json)?;
    log::debug!(
        "[config::parse_particle_config] {} groups, {} particles (declared {})",
        config.particle_groups.len(),
        total_group_count(&config),
        config.particle_count
    );
    Ok(config)
}

/// Parse a configuration out of a generated text response.
///
/// Generated JSON commonly arrives wrapped in a markdown code fence
/// (```` ```json ... ``` ````); the fence is stripped before parsing.
pub fn parse_config_response(text: &str) -> EngineResult<ParticleConfig> {
    parse_particle_config(strip_code_fence(text))
}

/// Remove a surrounding markdown code fence, if any
pub fn strip_code_fence(text: &str) -> &str {
    let mut body = text.trim();
    if let Some(rest) = body.strip_prefix("```json") {
        body = rest;
    } else if let Some(rest) = body.strip_prefix("```") {
        body = rest;
    }
    if let Some(rest) = body.strip_suffix("```") {
        body = rest;
    }
    body.trim()
}

/// Load a configuration from a JSON file on disk
pub fn load_particle_config(path: impl AsRef<Path>) -> EngineResult<ParticleConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| EngineError::IoError {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    log::info!(
        "[config::load_particle_config] Loaded {} bytes from {}",
        text.len(),
        path.display()
    );
    parse_config_response(&text)
}

// ============================================================================
// INSPECTION
// ============================================================================

/// Number of particles a reseed with this configuration produces
/// (before any `max_particles` cap the host sets)
pub fn total_group_count(config: &ParticleConfig) -> u64 {
    config
        .particle_groups
        .iter()
        .map(|group| group.count as u64)
        .sum()
}

/// Whether the background overlay should be painted at all
pub fn has_overlay(config: &ParticleConfig) -> bool {
    !config.background.overlay.trim().is_empty()
}

// ============================================================================
// DEFAULTS
// ============================================================================

/// A light, clean-air configuration suitable before real data arrives
pub fn clear_air_config() -> ParticleConfig {
    let groups = vec![
        ParticleGroup {
            label: "PM2.5".to_string(),
            color: "#D8DEE4".to_string(),
            size: 1.5,
            speed: 0.6,
            opacity: 0.35,
            count: 30,
        },
        ParticleGroup {
            label: "O3".to_string(),
            color: "#A8C8F0".to_string(),
            size: 2.0,
            speed: 0.4,
            opacity: 0.25,
            count: 15,
        },
    ];

    ParticleConfig {
        particle_count: 45,
        particle_groups: groups,
        background: BackgroundConfig {
            overlay: "rgba(200, 220, 255, 0.03)".to_string(),
            description: "Clear air with a faint trace of fine particles".to_string(),
        },
        behavior: BehaviorConfig {
            turbulence: 0.1,
            drift: 0.05,
            sink_rate: 0.02,
        },
        effects: EffectsConfig {
            glow: false,
            trails: false,
            pulse: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENERATED: &str = r##"{
        "particleCount": 40,
        "particles": [
            {"type": "PM2.5", "color": "#8B7D6B", "size": 2, "speed": 1.2, "opacity": 0.6, "count": 25},
            {"type": "NO2", "color": "#CC7722", "size": 3, "speed": 0.8, "opacity": 0.5, "count": 15}
        ],
        "background": {"overlay": "rgba(139, 125, 107, 0.15)", "description": "Hazy"},
        "behavior": {"turbulence": 0.4, "drift": -0.2, "sinkRate": 0.1},
        "effects": {"glow": true, "trails": false, "pulse": true}
    }"##;

    #[test]
    fn test_parse_full_config() {
        let config = parse_particle_config(GENERATED).unwrap();
        assert_eq!(config.particle_count, 40);
        assert_eq!(config.particle_groups.len(), 2);
        assert_eq!(config.particle_groups[1].label, "NO2");
        assert_eq!(config.particle_groups[1].count, 15);
        assert_eq!(config.behavior.sink_rate, 0.1);
        assert!(config.effects.glow && config.effects.pulse && !config.effects.trails);
        assert_eq!(total_group_count(&config), 40);
    }

    #[test]
    fn test_particle_groups_wire_name() {
        let config =
            parse_particle_config(r#"{"particleGroups": [{"type": "PM10", "count": 3}]}"#)
                .unwrap();
        assert_eq!(config.particle_groups.len(), 1);
        assert_eq!(total_group_count(&config), 3);
    }

    #[test]
    fn test_missing_fields_default_off() {
        let config = parse_particle_config("{}").unwrap();
        assert!(config.particle_groups.is_empty());
        assert_eq!(config.effects, EffectsConfig::default());
        assert_eq!(config.behavior, BehaviorConfig::default());
        assert!(!has_overlay(&config));
        assert_eq!(total_group_count(&config), 0);
    }

    #[test]
    fn test_lenient_counts() {
        let config = parse_particle_config(
            r#"{"particleCount": -4, "particles": [
                {"type": "a", "count": -5},
                {"type": "b", "count": 2.9},
                {"type": "c", "count": null}
            ]}"#,
        )
        .unwrap();
        assert_eq!(config.particle_count, 0);
        let counts: Vec<u32> = config.particle_groups.iter().map(|g| g.count).collect();
        assert_eq!(counts, vec![0, 2, 0]);
    }

    #[test]
    fn test_duplicate_groups_are_kept() {
        let config = parse_particle_config(
            r#"{"particles": [{"type": "PM2.5", "count": 4}, {"type": "PM2.5", "count": 4}]}"#,
        )
        .unwrap();
        assert_eq!(config.particle_groups.len(), 2);
        assert_eq!(total_group_count(&config), 8);
    }

    #[test]
    fn test_parse_fenced_response() {
        let fenced = format!("```json\n{}\n```\n", GENERATED);
        let config = parse_config_response(&fenced).unwrap();
        assert_eq!(total_group_count(&config), 40);

        let bare_fence = format!("```{}```", GENERATED);
        assert!(parse_config_response(&bare_fence).is_ok());
    }

    #[test]
    fn test_parse_rejects_non_json() {
        let err = parse_config_response("I'm sorry, I can't do that").unwrap_err();
        assert!(matches!(err, EngineError::DeserializationError { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("haze.json");
        std::fs::write(&path, GENERATED).unwrap();
        let config = load_particle_config(&path).unwrap();
        assert_eq!(config.particle_groups[0].label, "PM2.5");

        let missing = load_particle_config(dir.path().join("missing.json"));
        assert!(matches!(missing, Err(EngineError::IoError { .. })));
    }

    #[test]
    fn test_clear_air_config_is_consistent() {
        let config = clear_air_config();
        assert_eq!(total_group_count(&config), config.particle_count as u64);
        assert!(has_overlay(&config));
    }
}
