//! Config Module - pollutant description consumed by the engine
//!
//! - config_data.rs: serde wire types
//! - config_operations.rs: parsing, loading and inspection

pub mod config_data;
pub mod config_operations;

pub use config_data::{
    BackgroundConfig, BehaviorConfig, EffectsConfig, ParticleConfig, ParticleGroup,
};

pub use config_operations::{
    clear_air_config, has_overlay, load_particle_config, parse_config_response,
    parse_particle_config, strip_code_fence, total_group_count,
};
