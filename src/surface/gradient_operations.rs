//! Gradient operations - Pure functions
//!
//! Sampling of `Paint` at a point, independent of any pixel storage.

use super::surface_data::{GradientStop, Paint, RadialGradient};
use crate::color::{lerp_rgba, Rgba};

/// Build a gradient between two circles with the given stops.
/// Stops are sorted by offset and clamped into [0, 1].
pub fn radial_gradient(
    start: [f32; 2],
    start_radius: f32,
    end: [f32; 2],
    end_radius: f32,
    stops: &[(f32, Rgba)],
) -> RadialGradient {
    let mut stops: Vec<GradientStop> = stops
        .iter()
        .map(|&(offset, color)| GradientStop {
            offset: offset.clamp(0.0, 1.0),
            color,
        })
        .collect();
    stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));

    RadialGradient {
        start,
        start_radius,
        end,
        end_radius,
        stops,
    }
}

/// Color of `paint` at point (x, y)
pub fn sample_paint(paint: &Paint, x: f32, y: f32) -> Rgba {
    match paint {
        Paint::Solid(color) => *color,
        Paint::Radial(gradient) => sample_radial_gradient(gradient, x, y),
    }
}

/// Color of a radial gradient at point (x, y).
///
/// Solves |p - c(t)| = r(t) with c(t) = start + t * (end - start) and
/// r(t) = r0 + t * (r1 - r0), takes the largest root with r(t) >= 0 and
/// pads outside [0, 1]. Points with no solution are transparent.
pub fn sample_radial_gradient(gradient: &RadialGradient, x: f32, y: f32) -> Rgba {
    match gradient_parameter(gradient, x, y) {
        Some(t) => color_at_offset(&gradient.stops, t.clamp(0.0, 1.0)),
        None => Rgba::TRANSPARENT,
    }
}

fn gradient_parameter(gradient: &RadialGradient, x: f32, y: f32) -> Option<f32> {
    let dx = gradient.end[0] - gradient.start[0];
    let dy = gradient.end[1] - gradient.start[1];
    let dr = gradient.end_radius - gradient.start_radius;
    let r0 = gradient.start_radius;
    let qx = x - gradient.start[0];
    let qy = y - gradient.start[1];

    let a = dx * dx + dy * dy - dr * dr;
    let b = qx * dx + qy * dy + r0 * dr;
    let c = qx * qx + qy * qy - r0 * r0;

    let valid = |t: f32| t.is_finite() && r0 + t * dr >= 0.0;

    if a.abs() < f32::EPSILON {
        if b.abs() < f32::EPSILON {
            return None;
        }
        let t = c / (2.0 * b);
        return valid(t).then_some(t);
    }

    let discriminant = b * b - a * c;
    if discriminant < 0.0 {
        return None;
    }
    let root = discriminant.sqrt();
    let t1 = (b + root) / a;
    let t2 = (b - root) / a;
    let (hi, lo) = if t1 >= t2 { (t1, t2) } else { (t2, t1) };

    if valid(hi) {
        Some(hi)
    } else if valid(lo) {
        Some(lo)
    } else {
        None
    }
}

/// Interpolate a sorted stop list at offset `t`
pub fn color_at_offset(stops: &[GradientStop], t: f32) -> Rgba {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Rgba::TRANSPARENT,
    };

    if t <= first.offset {
        return first.color;
    }
    if t >= last.offset {
        return last.color;
    }

    for pair in stops.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if t >= lo.offset && t <= hi.offset {
            let span = hi.offset - lo.offset;
            if span <= f32::EPSILON {
                return hi.color;
            }
            return lerp_rgba(lo.color, hi.color, (t - lo.offset) / span);
        }
    }

    last.color
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{with_alpha, Rgb};

    fn white(alpha: f32) -> Rgba {
        with_alpha(Rgb::WHITE, alpha)
    }

    #[test]
    fn test_concentric_gradient_falloff() {
        // Glow-style gradient: centered, radius 10, opaque center fading out
        let g = radial_gradient([0.0, 0.0], 0.0, [0.0, 0.0], 10.0, &[(0.0, white(1.0)), (1.0, white(0.0))]);

        assert!((sample_radial_gradient(&g, 0.0, 0.0).a - 1.0).abs() < 1e-5);
        assert!((sample_radial_gradient(&g, 5.0, 0.0).a - 0.5).abs() < 1e-5);
        assert!((sample_radial_gradient(&g, 0.0, -5.0).a - 0.5).abs() < 1e-5);
        // Padded beyond the end circle
        assert_eq!(sample_radial_gradient(&g, 20.0, 0.0).a, 0.0);
    }

    #[test]
    fn test_offset_focus_is_brightest() {
        // Highlight-style gradient: focus up-left of center
        let g = radial_gradient([7.0, 7.0], 0.0, [10.0, 10.0], 10.0, &[(0.0, white(0.3)), (1.0, white(0.0))]);

        let at_focus = sample_radial_gradient(&g, 7.0, 7.0).a;
        let at_center = sample_radial_gradient(&g, 10.0, 10.0).a;
        let lower_right = sample_radial_gradient(&g, 15.0, 15.0).a;

        assert!((at_focus - 0.3).abs() < 1e-5);
        assert!(at_focus > at_center);
        assert!(at_center > lower_right);
    }

    #[test]
    fn test_color_at_offset_three_stops() {
        let stops = radial_gradient(
            [0.0, 0.0],
            0.0,
            [0.0, 0.0],
            1.0,
            &[(1.0, white(0.0)), (0.0, white(1.0)), (0.5, white(0.5))],
        )
        .stops;
        // Sorted on construction
        assert_eq!(stops[1].offset, 0.5);
        assert!((color_at_offset(&stops, 0.25).a - 0.75).abs() < 1e-5);
        assert!((color_at_offset(&stops, 0.75).a - 0.25).abs() < 1e-5);
    }

    #[test]
    fn test_empty_stops_are_transparent() {
        assert_eq!(color_at_offset(&[], 0.5), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_solid_paint_sample() {
        let paint = Paint::Solid(white(0.4));
        assert_eq!(sample_paint(&paint, 123.0, -4.0), white(0.4));
    }
}
