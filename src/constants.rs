//! Engine constants
//!
//! Per-frame physics and compositing factors. All motion is expressed in
//! pixels per frame; the engine never measures wall-clock delta.

/// Kinematics applied in the per-frame update
pub mod physics {
    /// Drift bias contributes `drift * DRIFT_SCALE` px/frame horizontally
    pub const DRIFT_SCALE: f32 = 0.5;

    /// Sink bias contributes `sink_rate * SINK_SCALE` px/frame downward
    pub const SINK_SCALE: f32 = 0.3;

    /// Turbulence kick half-range is `turbulence * TURBULENCE_SCALE`
    pub const TURBULENCE_SCALE: f32 = 0.1;

    /// Isotropic velocity damping per frame
    pub const DAMPING: f32 = 0.99;
}

/// Seeding jitter ranges
pub mod seeding {
    /// Radius is `size * U(RADIUS_JITTER_MIN, 1.0)`
    pub const RADIUS_JITTER_MIN: f32 = 0.5;

    /// Opacity is `opacity * U(OPACITY_JITTER_MIN, 1.0)`
    pub const OPACITY_JITTER_MIN: f32 = 0.7;

    /// Initial downward velocity is at most `speed * VERTICAL_SPEED_SCALE`
    pub const VERTICAL_SPEED_SCALE: f32 = 0.5;
}

/// Pulse modulation amplitudes
pub mod pulse {
    pub const SIZE_BASE: f32 = 1.0;
    pub const SIZE_AMPLITUDE: f32 = 0.2;
    pub const OPACITY_BASE: f32 = 0.8;
    pub const OPACITY_AMPLITUDE: f32 = 0.2;
}

/// Compositing factors
pub mod render {
    /// Glow extends to `GLOW_RADIUS_SCALE` times the displayed radius
    pub const GLOW_RADIUS_SCALE: f32 = 2.0;

    /// Glow mid stop keeps this fraction of the displayed opacity
    pub const GLOW_MID_ALPHA: f32 = 0.5;

    /// Highlight focus is offset up-left by this fraction of the radius
    pub const HIGHLIGHT_OFFSET: f32 = 0.3;

    /// Highlight peak alpha as a fraction of the displayed opacity
    pub const HIGHLIGHT_ALPHA: f32 = 0.3;
}

/// Engine defaults, overridable through `EngineConfig`
pub mod defaults {
    /// Age wraps at this many frames (one pulse period)
    pub const MAX_AGE: f32 = 100.0;

    /// Alpha of the black rectangle composited per frame in trails mode
    pub const TRAIL_FADE_ALPHA: f32 = 0.05;

    pub const TARGET_FPS: u32 = 60;

    pub const FALLBACK_COLOR: &str = "#FFFFFF";
}

/// Surface limits
pub mod surface {
    /// Largest width or height a raster surface will allocate
    pub const MAX_SURFACE_DIMENSION: u32 = 16384;
}
