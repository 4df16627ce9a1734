//! Particles Module - Data-Oriented Programming (DOP) style
//!
//! - particle_data.rs: fixed-shape particle record, NO METHODS
//! - particle_operations.rs: pure spawn/update/pulse functions

pub mod particle_data;
pub mod particle_operations;

pub use particle_data::{ParticleData, PulseMultipliers, SurfaceBounds};

pub use particle_operations::{
    // Spawning
    seed_particles,
    spawn_particle,

    // Per-frame update
    update_particle,
    wrap_particle,

    // Pulse
    displayed_size_and_opacity,
    pulse_multipliers,

    // Diagnostics
    is_finite_particle,
    within_wrap_bounds,
};
