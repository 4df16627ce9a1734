//! Renderer Data - per-frame compositing parameters

use crate::color::Rgba;
use crate::config::EffectsConfig;

/// Everything the compositor needs besides the particles themselves.
/// Built once per configuration so no color is parsed inside a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStyle {
    /// Parsed background tint, `None` when the configuration has none
    pub overlay: Option<Rgba>,

    pub effects: EffectsConfig,

    /// Pulse period in frames
    pub max_age: f32,

    /// Alpha of the black fade rectangle in trails mode
    pub trail_fade_alpha: f32,
}

/// Counters for one rendered frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub particles_drawn: usize,
    pub particles_skipped: usize,
}
