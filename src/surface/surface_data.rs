//! Paint data structures - Pure DOP
//!
//! Mirrors the small subset of 2D-canvas paint state the engine uses.

use crate::color::Rgba;

/// A color stop along a gradient, `offset` in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

/// Two-circle radial gradient.
///
/// The color at a point is taken from the largest `t` for which the point
/// lies on the circle interpolated between the start and end circles.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub start: [f32; 2],
    pub start_radius: f32,
    pub end: [f32; 2],
    pub end_radius: f32,
    /// Sorted by offset
    pub stops: Vec<GradientStop>,
}

/// Fill style for shape primitives
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Radial(RadialGradient),
}
