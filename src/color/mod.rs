/// Color Module - Data-Oriented Programming (DOP) style
///
/// - color_data.rs: color value types and the parse error
/// - color_operations.rs: parsing, conversion and compositing functions

pub mod color_data;
pub mod color_operations;

pub use color_data::{ColorError, Rgb, Rgba};

pub use color_operations::{
    blend_over, lerp_rgba, parse_css_color, parse_hex_rgb, resolve_color, with_alpha,
};
