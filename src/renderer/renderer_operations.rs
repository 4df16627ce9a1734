//! Renderer Operations - per-frame compositing
//!
//! Order per frame: clear (or trail fade), background overlay, then each
//! particle as glow, body, highlight. Particles are drawn in storage order
//! with no depth sorting.

use super::renderer_data::{FrameStats, FrameStyle};
use crate::color::{parse_css_color, with_alpha, Rgb, Rgba};
use crate::config::{has_overlay, ParticleConfig};
use crate::constants::render;
use crate::particles::{displayed_size_and_opacity, ParticleData};
use crate::surface::{radial_gradient, DrawContext2d, Paint};

// ============================================================================
// STYLE
// ============================================================================

/// Resolve the compositing parameters for a configuration.
///
/// An overlay that fails to parse is dropped with a warning rather than
/// failing every subsequent frame.
pub fn build_frame_style(config: &ParticleConfig, max_age: f32, trail_fade_alpha: f32) -> FrameStyle {
    let overlay = if has_overlay(config) {
        match parse_css_color(&config.background.overlay) {
            Ok(color) => Some(color),
            Err(e) => {
                log::warn!("[renderer::build_frame_style] Ignoring background overlay: {}", e);
                None
            }
        }
    } else {
        None
    };

    FrameStyle {
        overlay,
        effects: config.effects,
        max_age,
        trail_fade_alpha,
    }
}

// ============================================================================
// FRAME PASSES
// ============================================================================

/// Hard clear, or composite a faint black rectangle in trails mode
pub fn clear_frame<C: DrawContext2d + ?Sized>(ctx: &mut C, style: &FrameStyle) {
    if style.effects.trails {
        ctx.fill_rect(with_alpha(Rgb::BLACK, style.trail_fade_alpha));
    } else {
        ctx.clear();
    }
}

/// Paint the background tint over the whole surface
pub fn paint_overlay<C: DrawContext2d + ?Sized>(ctx: &mut C, style: &FrameStyle) {
    if let Some(overlay) = style.overlay {
        ctx.fill_rect(overlay);
    }
}

/// Draw one particle. Returns false when it was skipped as non-drawable.
pub fn draw_particle<C: DrawContext2d + ?Sized>(
    ctx: &mut C,
    particle: &ParticleData,
    style: &FrameStyle,
) -> bool {
    let (size, opacity) = displayed_size_and_opacity(particle, style.max_age, style.effects.pulse);
    let (x, y) = (particle.position.x, particle.position.y);
    if !(x.is_finite() && y.is_finite() && size.is_finite()) || size <= 0.0 {
        return false;
    }

    if style.effects.glow {
        let glow_radius = size * render::GLOW_RADIUS_SCALE;
        let glow = radial_gradient(
            [x, y],
            0.0,
            [x, y],
            glow_radius,
            &[
                (0.0, with_alpha(particle.color, opacity)),
                (0.5, with_alpha(particle.color, opacity * render::GLOW_MID_ALPHA)),
                (1.0, with_alpha(particle.color, 0.0)),
            ],
        );
        ctx.fill_circle(x, y, glow_radius, &Paint::Radial(glow));
    }

    ctx.fill_circle(x, y, size, &Paint::Solid(with_alpha(particle.color, opacity)));

    let offset = size * render::HIGHLIGHT_OFFSET;
    let highlight = radial_gradient(
        [x - offset, y - offset],
        0.0,
        [x, y],
        size,
        &[
            (0.0, with_alpha(Rgb::WHITE, opacity * render::HIGHLIGHT_ALPHA)),
            (1.0, with_alpha(Rgb::WHITE, 0.0)),
        ],
    );
    ctx.fill_circle(x, y, size, &Paint::Radial(highlight));

    true
}

/// Composite a complete frame
pub fn render_frame<C: DrawContext2d + ?Sized>(
    ctx: &mut C,
    particles: &[ParticleData],
    style: &FrameStyle,
) -> FrameStats {
    clear_frame(ctx, style);
    paint_overlay(ctx, style);

    let mut stats = FrameStats::default();
    for particle in particles {
        if draw_particle(ctx, particle, style) {
            stats.particles_drawn += 1;
        } else {
            stats.particles_skipped += 1;
        }
    }
    stats
}

/// The flat color a cleared frame shows before particles are drawn
pub fn overlay_pixel(style: &FrameStyle) -> [u8; 4] {
    crate::color::blend_over([0, 0, 0, 0], style.overlay.unwrap_or(Rgba::TRANSPARENT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BackgroundConfig, EffectsConfig};
    use crate::surface::{DrawSurface, RasterContext, RasterSurface};
    use cgmath::Vector2;

    fn context() -> RasterContext {
        RasterSurface::new(64, 64).context_2d().unwrap()
    }

    fn style(effects: EffectsConfig, overlay: &str) -> FrameStyle {
        let config = ParticleConfig {
            background: BackgroundConfig {
                overlay: overlay.to_string(),
                description: String::new(),
            },
            effects,
            ..Default::default()
        };
        build_frame_style(&config, 100.0, 0.05)
    }

    fn particle(x: f32, y: f32, radius: f32) -> ParticleData {
        ParticleData {
            position: Vector2::new(x, y),
            velocity: Vector2::new(0.0, 0.0),
            radius,
            color: Rgb { r: 200, g: 50, b: 50 },
            opacity: 1.0,
            age: 0.0,
            group: "NO2".to_string(),
        }
    }

    #[test]
    fn test_build_style_overlay_handling() {
        let s = style(EffectsConfig::default(), "rgba(139, 69, 19, 0.2)");
        let overlay = s.overlay.unwrap();
        assert_eq!((overlay.r, overlay.g, overlay.b), (139, 69, 19));

        assert_eq!(style(EffectsConfig::default(), "").overlay, None);
        // Unparsable overlays are dropped, not fatal
        assert_eq!(style(EffectsConfig::default(), "murky").overlay, None);
    }

    #[test]
    fn test_clear_without_trails_resets_surface() {
        let mut ctx = context();
        ctx.fill_rect(with_alpha(Rgb::WHITE, 1.0));
        let s = style(EffectsConfig::default(), "rgba(0, 0, 255, 0.5)");
        render_frame(&mut ctx, &[], &s);

        let flat = overlay_pixel(&s);
        assert_eq!(flat, [0, 0, 255, 128]);
        assert!(ctx.image().pixels().all(|p| p.0 == flat));
    }

    #[test]
    fn test_trails_fade_instead_of_clear() {
        let mut ctx = context();
        ctx.fill_rect(with_alpha(Rgb::WHITE, 1.0));
        let trails = EffectsConfig {
            trails: true,
            ..Default::default()
        };
        render_frame(&mut ctx, &[], &style(trails, ""));

        // White faded by 5% black, still mostly white
        let p = ctx.pixel(0, 0).unwrap();
        assert_eq!(p[3], 255);
        assert!(p[0] > 230 && p[0] < 255);
    }

    #[test]
    fn test_particle_body_and_highlight() {
        let mut ctx = context();
        let s = style(EffectsConfig::default(), "");
        let stats = render_frame(&mut ctx, &[particle(32.0, 32.0, 6.0)], &s);
        assert_eq!(stats.particles_drawn, 1);

        // Body is opaque particle color, lightened by the highlight
        let up_left = ctx.pixel(29, 29).unwrap();
        let down_right = ctx.pixel(35, 35).unwrap();
        assert_eq!(up_left[3], 255);
        assert!(up_left[1] > down_right[1], "{:?} vs {:?}", up_left, down_right);
        assert!(up_left[0] >= 200);

        // Nothing outside the disc
        assert_eq!(ctx.pixel(32, 45), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_glow_extends_beyond_body() {
        let plain = style(EffectsConfig::default(), "");
        let glowing = style(
            EffectsConfig {
                glow: true,
                ..Default::default()
            },
            "",
        );

        let mut a = context();
        render_frame(&mut a, &[particle(32.0, 32.0, 6.0)], &plain);
        let mut b = context();
        render_frame(&mut b, &[particle(32.0, 32.0, 6.0)], &glowing);

        // 9px out: outside the body (6) but inside the glow (12)
        assert_eq!(a.pixel(41, 32).unwrap()[3], 0);
        let halo = b.pixel(41, 32).unwrap();
        assert!(halo[3] > 0);
        assert_eq!(halo[0], 200);
        // Glow stays within twice the radius
        assert_eq!(b.pixel(45, 32).unwrap()[3], 0);
    }

    #[test]
    fn test_non_drawable_particles_are_skipped() {
        let mut ctx = context();
        let s = style(EffectsConfig::default(), "");
        let particles = [
            particle(f32::NAN, 10.0, 2.0),
            particle(10.0, 10.0, 0.0),
            particle(10.0, 10.0, 2.0),
        ];
        let stats = render_frame(&mut ctx, &particles, &s);
        assert_eq!(stats.particles_drawn, 1);
        assert_eq!(stats.particles_skipped, 2);
    }
}
