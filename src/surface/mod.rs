//! Surface Module - the 2D drawing target the engine paints into
//!
//! The engine only needs a handful of canvas-style primitives. Hosts supply
//! a `DrawSurface`; the engine asks it once for a `DrawContext2d` and keeps
//! that context for its whole lifetime.

pub mod gradient_operations;
pub mod raster_surface;
pub mod surface_data;

pub use gradient_operations::{color_at_offset, radial_gradient, sample_paint, sample_radial_gradient};
pub use raster_surface::{RasterContext, RasterSurface};
pub use surface_data::{GradientStop, Paint, RadialGradient};

use crate::color::Rgba;

/// Something that can yield a 2D drawing context
pub trait DrawSurface {
    type Context: DrawContext2d;

    /// Width and height in pixels, for diagnostics when acquisition fails
    fn dimensions(&self) -> (u32, u32);

    /// Acquire the drawing context. `None` means the surface cannot render.
    fn context_2d(self) -> Option<Self::Context>;
}

/// Canvas-style drawing primitives with source-over compositing
pub trait DrawContext2d {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Change the surface dimensions. Contents after a resize are unspecified.
    fn set_size(&mut self, width: u32, height: u32);

    /// Reset every pixel to fully transparent
    fn clear(&mut self);

    /// Composite a color over the whole surface
    fn fill_rect(&mut self, color: Rgba);

    /// Composite a filled disc
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, paint: &Paint);
}
