//! Software raster surface backed by an `image::RgbaImage`
//!
//! Pixels are straight-alpha RGBA8. A pixel is covered by a disc when its
//! center lies inside the disc; no anti-aliasing.

use super::gradient_operations::sample_paint;
use super::surface_data::Paint;
use super::{DrawContext2d, DrawSurface};
use crate::color::{blend_over, Rgba};
use crate::constants::surface::MAX_SURFACE_DIMENSION;
use crate::error::{EngineError, EngineResult};
use image::{Rgba as Pixel, RgbaImage};
use std::path::Path;

/// Raster surface description, before a context is acquired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterSurface {
    pub width: u32,
    pub height: u32,
}

/// Drawing context over an owned pixel buffer
#[derive(Debug, Clone)]
pub struct RasterContext {
    image: RgbaImage,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

fn dimensions_supported(width: u32, height: u32) -> bool {
    width > 0 && height > 0 && width <= MAX_SURFACE_DIMENSION && height <= MAX_SURFACE_DIMENSION
}

impl DrawSurface for RasterSurface {
    type Context = RasterContext;

    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn context_2d(self) -> Option<RasterContext> {
        if !dimensions_supported(self.width, self.height) {
            log::error!(
                "[RasterSurface::context_2d] Unsupported dimensions {}x{} (max {} per side)",
                self.width,
                self.height,
                MAX_SURFACE_DIMENSION
            );
            return None;
        }
        Some(RasterContext {
            image: RgbaImage::new(self.width, self.height),
        })
    }
}

impl RasterContext {
    /// Current pixel buffer
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// RGBA value at (x, y), `None` outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        (x < self.image.width() && y < self.image.height()).then(|| self.image.get_pixel(x, y).0)
    }

    /// Write the current frame as a PNG
    pub fn save_png(&self, path: impl AsRef<Path>) -> EngineResult<()> {
        let path = path.as_ref();
        self.image.save(path).map_err(|e| EngineError::IoError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        log::info!(
            "[RasterContext::save_png] Wrote {}x{} frame to {}",
            self.image.width(),
            self.image.height(),
            path.display()
        );
        Ok(())
    }
}

impl DrawContext2d for RasterContext {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn set_size(&mut self, width: u32, height: u32) {
        if width > MAX_SURFACE_DIMENSION || height > MAX_SURFACE_DIMENSION {
            log::warn!(
                "[RasterContext::set_size] Requested {}x{} exceeds {} px per side, clamping",
                width,
                height,
                MAX_SURFACE_DIMENSION
            );
        }
        let width = width.min(MAX_SURFACE_DIMENSION);
        let height = height.min(MAX_SURFACE_DIMENSION);
        if width == self.image.width() && height == self.image.height() {
            return;
        }
        log::debug!(
            "[RasterContext::set_size] {}x{} -> {}x{}",
            self.image.width(),
            self.image.height(),
            width,
            height
        );
        self.image = RgbaImage::new(width, height);
    }

    fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = Pixel([0, 0, 0, 0]);
        }
    }

    fn fill_rect(&mut self, color: Rgba) {
        if color.a <= 0.0 {
            return;
        }
        for pixel in self.image.pixels_mut() {
            pixel.0 = blend_over(pixel.0, color);
        }
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, paint: &Paint) {
        if !(cx.is_finite() && cy.is_finite() && radius.is_finite()) || radius <= 0.0 {
            return;
        }

        let (width, height) = (self.image.width() as f32, self.image.height() as f32);
        let x_min = (cx - radius).floor().max(0.0);
        let y_min = (cy - radius).floor().max(0.0);
        let x_max = (cx + radius).ceil().min(width);
        let y_max = (cy + radius).ceil().min(height);
        if x_min >= x_max || y_min >= y_max {
            return;
        }

        let radius_sq = radius * radius;
        for py in y_min as u32..y_max as u32 {
            let sy = py as f32 + 0.5;
            let dy = sy - cy;
            for px in x_min as u32..x_max as u32 {
                let sx = px as f32 + 0.5;
                let dx = sx - cx;
                if dx * dx + dy * dy > radius_sq {
                    continue;
                }
                let color = sample_paint(paint, sx, sy);
                let pixel = self.image.get_pixel_mut(px, py);
                pixel.0 = blend_over(pixel.0, color);
            }
        }
    }
}
