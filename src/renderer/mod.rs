//! Renderer Module - per-frame compositing onto a `DrawContext2d`

pub mod renderer_data;
pub mod renderer_operations;

pub use renderer_data::{FrameStats, FrameStyle};
pub use renderer_operations::{
    build_frame_style, clear_frame, draw_particle, overlay_pixel, paint_overlay, render_frame,
};
