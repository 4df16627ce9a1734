//! Color data structures - Pure DOP
//!
//! NO METHODS beyond trivial accessors. Conversions live in color_operations.rs

/// Opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// RGB color with straight (non-premultiplied) alpha in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0.0,
    };
}

/// Color parsing failure
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    #[error("empty color string")]
    Empty,

    #[error("malformed hex color '{0}'")]
    MalformedHex(String),

    #[error("malformed functional color '{0}'")]
    MalformedFunction(String),

    #[error("unsupported color syntax '{0}'")]
    Unsupported(String),
}

impl ColorError {
    /// The offending input, for error reporting
    pub fn input(&self) -> &str {
        match self {
            ColorError::Empty => "",
            ColorError::MalformedHex(s)
            | ColorError::MalformedFunction(s)
            | ColorError::Unsupported(s) => s,
        }
    }
}
