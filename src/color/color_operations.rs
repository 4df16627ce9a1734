//! Color operations - Pure functions
//!
//! Every color string the engine sees goes through here exactly once, at
//! configuration time. The paint path only ever handles parsed values.

use super::color_data::{ColorError, Rgb, Rgba};

// ============================================================================
// PARSING
// ============================================================================

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
/// An alpha byte, if present, is ignored.
pub fn parse_hex_rgb(input: &str) -> Result<Rgb, ColorError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ColorError::Empty);
    }

    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::MalformedHex(input.to_string()));
    }

    match hex.len() {
        3 => {
            let expand = |i: usize| -> Result<u8, ColorError> {
                let nibble = u8::from_str_radix(&hex[i..i + 1], 16)
                    .map_err(|_| ColorError::MalformedHex(input.to_string()))?;
                Ok(nibble * 17)
            };
            Ok(Rgb {
                r: expand(0)?,
                g: expand(1)?,
                b: expand(2)?,
            })
        }
        6 | 8 => {
            let channel = |i: usize| -> Result<u8, ColorError> {
                u8::from_str_radix(&hex[i..i + 2], 16)
                    .map_err(|_| ColorError::MalformedHex(input.to_string()))
            };
            Ok(Rgb {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
            })
        }
        _ => Err(ColorError::MalformedHex(input.to_string())),
    }
}

/// Parse a CSS-style color: hex, `rgb(r, g, b)`, `rgba(r, g, b, a)` or
/// `transparent`. Channels are clamped to their valid ranges.
pub fn parse_css_color(input: &str) -> Result<Rgba, ColorError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ColorError::Empty);
    }

    let lower = trimmed.to_ascii_lowercase();
    if lower == "transparent" {
        return Ok(Rgba::TRANSPARENT);
    }

    if let Some(args) = function_args(&lower, "rgba").or_else(|| function_args(&lower, "rgb")) {
        return parse_rgb_function(input, args);
    }

    if lower.starts_with('#') || lower.chars().all(|c| c.is_ascii_hexdigit()) {
        return parse_hex_rgb(trimmed).map(|rgb| with_alpha(rgb, 1.0));
    }

    Err(ColorError::Unsupported(input.to_string()))
}

fn function_args<'a>(lower: &'a str, name: &str) -> Option<&'a str> {
    lower
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_rgb_function(input: &str, args: &str) -> Result<Rgba, ColorError> {
    let malformed = || ColorError::MalformedFunction(input.to_string());

    let parts: Vec<&str> = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(malformed());
    }

    let mut channels = [0u8; 3];
    for (slot, part) in channels.iter_mut().zip(&parts[..3]) {
        let value: f32 = part.parse().map_err(|_| malformed())?;
        if !value.is_finite() {
            return Err(malformed());
        }
        *slot = value.round().clamp(0.0, 255.0) as u8;
    }

    let a = match parts.get(3) {
        Some(part) => parse_alpha(part).ok_or_else(malformed)?,
        None => 1.0,
    };

    Ok(Rgba {
        r: channels[0],
        g: channels[1],
        b: channels[2],
        a,
    })
}

fn parse_alpha(part: &str) -> Option<f32> {
    let value = match part.strip_suffix('%') {
        Some(pct) => pct.parse::<f32>().ok()? / 100.0,
        None => part.parse::<f32>().ok()?,
    };
    value.is_finite().then(|| value.clamp(0.0, 1.0))
}

/// Parse a hex color, falling back to `fallback` when malformed.
/// Never fails; a bad group color must not take down the paint path.
pub fn resolve_color(input: &str, fallback: Rgb) -> Rgb {
    match parse_hex_rgb(input) {
        Ok(rgb) => rgb,
        Err(e) => {
            log::warn!(
                "[color::resolve_color] {} - using fallback #{:02X}{:02X}{:02X}",
                e,
                fallback.r,
                fallback.g,
                fallback.b
            );
            fallback
        }
    }
}

// ============================================================================
// CONVERSION
// ============================================================================

/// Attach an alpha to an opaque color, clamping to [0, 1]
pub fn with_alpha(rgb: Rgb, alpha: f32) -> Rgba {
    let a = if alpha.is_finite() {
        alpha.clamp(0.0, 1.0)
    } else {
        0.0
    };
    Rgba {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
        a,
    }
}

/// Linear interpolation between two colors, all four channels
pub fn lerp_rgba(from: Rgba, to: Rgba, t: f32) -> Rgba {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| -> u8 { (a as f32 + (b as f32 - a as f32) * t).round() as u8 };
    Rgba {
        r: mix(from.r, to.r),
        g: mix(from.g, to.g),
        b: mix(from.b, to.b),
        a: from.a + (to.a - from.a) * t,
    }
}

/// Source-over compositing of `src` onto an 8-bit RGBA destination pixel
/// (straight alpha on both sides)
pub fn blend_over(dst: [u8; 4], src: Rgba) -> [u8; 4] {
    let sa = src.a.clamp(0.0, 1.0);
    if sa <= 0.0 {
        return dst;
    }

    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return [0, 0, 0, 0];
    }

    let channel = |s: u8, d: u8| -> u8 {
        let c = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
        c.round().clamp(0.0, 255.0) as u8
    };

    [
        channel(src.r, dst[0]),
        channel(src.g, dst[1]),
        channel(src.b, dst[2]),
        (out_a * 255.0).round() as u8,
    ]
}
