//! Particle operations - Pure DOP functions
//!
//! Spawning, per-frame kinematics and pulse evaluation. Randomness is always
//! passed in, so every function here is deterministic for a seeded RNG.

use super::particle_data::{ParticleData, PulseMultipliers, SurfaceBounds};
use crate::color::{resolve_color, Rgb};
use crate::config::{BehaviorConfig, ParticleConfig, ParticleGroup};
use crate::constants::{physics, pulse, seeding};
use cgmath::Vector2;
use rand::Rng;
use std::f32::consts::TAU;

/// `lo + U[0, 1) * (hi - lo)`. Unlike `gen_range` this never panics on
/// empty or non-finite ranges.
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    lo + rng.gen::<f32>() * (hi - lo)
}

// ============================================================================
// SPAWNING
// ============================================================================

/// Create one particle for `group` at a uniformly random position
pub fn spawn_particle<R: Rng + ?Sized>(
    rng: &mut R,
    group: &ParticleGroup,
    color: Rgb,
    bounds: SurfaceBounds,
    max_age: f32,
) -> ParticleData {
    let half_speed = group.speed * seeding::VERTICAL_SPEED_SCALE;

    ParticleData {
        position: Vector2::new(
            uniform(rng, 0.0, bounds.width),
            uniform(rng, 0.0, bounds.height),
        ),
        velocity: Vector2::new(
            uniform(rng, -group.speed / 2.0, group.speed / 2.0),
            uniform(rng, 0.0, half_speed),
        ),
        radius: group.size * uniform(rng, seeding::RADIUS_JITTER_MIN, 1.0),
        color,
        opacity: group.opacity * uniform(rng, seeding::OPACITY_JITTER_MIN, 1.0),
        age: uniform(rng, 0.0, max_age),
        group: group.label.clone(),
    }
}

/// Build the full particle set for `config`: exactly `count` particles per
/// group, in group order. Truncated only when the host sets `max_particles`.
pub fn seed_particles<R: Rng + ?Sized>(
    rng: &mut R,
    config: &ParticleConfig,
    bounds: SurfaceBounds,
    max_age: f32,
    max_particles: Option<u32>,
    fallback_color: Rgb,
) -> Vec<ParticleData> {
    let requested: u64 = config
        .particle_groups
        .iter()
        .map(|group| group.count as u64)
        .sum();
    let capacity = match max_particles {
        Some(cap) => requested.min(cap as u64),
        None => requested,
    } as usize;
    let mut particles = Vec::with_capacity(capacity);

    for group in &config.particle_groups {
        let remaining = capacity - particles.len();
        let count = (group.count as usize).min(remaining);
        if count == 0 {
            continue;
        }

        let color = resolve_color(&group.color, fallback_color);
        for _ in 0..count {
            particles.push(spawn_particle(rng, group, color, bounds, max_age));
        }
    }

    if requested > capacity as u64 {
        log::warn!(
            "[particles::seed_particles] Requested {} particles, capped at {}",
            requested,
            capacity
        );
    }

    particles
}

// ============================================================================
// PER-FRAME UPDATE
// ============================================================================

/// Advance one particle by one frame: integrate, perturb, damp, wrap, age
pub fn update_particle<R: Rng + ?Sized>(
    rng: &mut R,
    particle: &mut ParticleData,
    behavior: &BehaviorConfig,
    bounds: SurfaceBounds,
    max_age: f32,
) {
    particle.position.x += particle.velocity.x + behavior.drift * physics::DRIFT_SCALE;
    particle.position.y += particle.velocity.y + behavior.sink_rate * physics::SINK_SCALE;

    if behavior.turbulence > 0.0 {
        let kick = behavior.turbulence * physics::TURBULENCE_SCALE;
        particle.velocity.x += uniform(rng, -kick, kick);
        particle.velocity.y += uniform(rng, -kick, kick);
    }

    particle.velocity *= physics::DAMPING;

    wrap_particle(rng, particle, bounds);

    particle.age = (particle.age + 1.0) % max_age;
}

/// Edge wrap with a margin of the particle's own radius.
///
/// Horizontal is a torus. Leaving through the bottom re-enters at the top
/// at a fresh random x; leaving through the top re-enters at the bottom at
/// the same x.
pub fn wrap_particle<R: Rng + ?Sized>(
    rng: &mut R,
    particle: &mut ParticleData,
    bounds: SurfaceBounds,
) {
    let margin = particle.radius;

    if particle.position.x < -margin {
        particle.position.x = bounds.width + margin;
    }
    if particle.position.x > bounds.width + margin {
        particle.position.x = -margin;
    }
    if particle.position.y > bounds.height + margin {
        particle.position.y = -margin;
        particle.position.x = uniform(rng, 0.0, bounds.width);
    }
    if particle.position.y < -margin {
        particle.position.y = bounds.height + margin;
    }
}

/// Whether every kinematic field is a finite number
pub fn is_finite_particle(particle: &ParticleData) -> bool {
    particle.position.x.is_finite()
        && particle.position.y.is_finite()
        && particle.velocity.x.is_finite()
        && particle.velocity.y.is_finite()
}

/// Whether the particle lies inside the wrap bounds
pub fn within_wrap_bounds(particle: &ParticleData, bounds: SurfaceBounds) -> bool {
    let margin = particle.radius;
    particle.position.x >= -margin
        && particle.position.x <= bounds.width + margin
        && particle.position.y >= -margin
        && particle.position.y <= bounds.height + margin
}

// ============================================================================
// PULSE
// ============================================================================

/// Size and opacity factors for a particle of the given age
pub fn pulse_multipliers(age: f32, max_age: f32, enabled: bool) -> PulseMultipliers {
    if !enabled {
        return PulseMultipliers::default();
    }

    let phase = (age / max_age) * TAU;
    let wave = phase.sin();
    PulseMultipliers {
        size: pulse::SIZE_BASE + pulse::SIZE_AMPLITUDE * wave,
        opacity: pulse::OPACITY_BASE + pulse::OPACITY_AMPLITUDE * wave,
    }
}

/// Radius and opacity as painted this frame
pub fn displayed_size_and_opacity(
    particle: &ParticleData,
    max_age: f32,
    pulse_enabled: bool,
) -> (f32, f32) {
    let multipliers = pulse_multipliers(particle.age, max_age, pulse_enabled);
    (
        particle.radius * multipliers.size,
        particle.opacity * multipliers.opacity,
    )
}
