//! Particle data structures - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in particle_operations.rs

use crate::color::Rgb;
use cgmath::Vector2;

/// One simulated pollutant particle.
///
/// Radius, color and opacity are fixed at spawn; pulse multipliers are
/// applied at draw time only.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleData {
    /// Position in surface pixels
    pub position: Vector2<f32>,

    /// Velocity in pixels per frame
    pub velocity: Vector2<f32>,

    /// Base radius in pixels, also the wrap margin
    pub radius: f32,

    pub color: Rgb,

    /// Base opacity in [0, 1]
    pub opacity: f32,

    /// Frame counter in [0, max_age), drives the pulse phase
    pub age: f32,

    /// Pollutant label of the originating group
    pub group: String,
}

/// Surface extent the wrap step works against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceBounds {
    pub width: f32,
    pub height: f32,
}

/// Displayed size and opacity factors for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseMultipliers {
    pub size: f32,
    pub opacity: f32,
}

impl Default for PulseMultipliers {
    fn default() -> Self {
        Self {
            size: 1.0,
            opacity: 1.0,
        }
    }
}
