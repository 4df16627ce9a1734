//! Particle engine - lifecycle around the pure particle/renderer functions
//!
//! States: Stopped (no frame requested) and Running (exactly one frame
//! requested from the scheduler). `update_config` and `resize` never change
//! state. All mutation happens through `&mut self`, so a frame always sees
//! one configuration together with the particle set seeded from it.

use crate::color::{parse_hex_rgb, Rgb};
use crate::config::{total_group_count, ParticleConfig};
use crate::error::{EngineError, EngineResult, OptionExt};
use crate::particles::{is_finite_particle, seed_particles, update_particle, ParticleData, SurfaceBounds};
use crate::renderer::{build_frame_style, render_frame, FrameStats, FrameStyle};
use crate::scheduler::{FrameHandle, FrameScheduler};
use crate::surface::{DrawContext2d, DrawSurface};
use crate::EngineConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Animated pollutant overlay bound to one drawing context
pub struct ParticleEngine<C: DrawContext2d, F: FrameScheduler> {
    context: C,
    scheduler: F,
    settings: EngineConfig,
    config: ParticleConfig,
    style: FrameStyle,
    particles: Vec<ParticleData>,
    fallback_color: Rgb,
    rng: StdRng,
    /// Outstanding frame request; `Some` exactly while running
    frame_handle: Option<FrameHandle>,
    frame_count: u64,
}

impl<C: DrawContext2d, F: FrameScheduler> ParticleEngine<C, F> {
    /// Acquire a drawing context from `surface` and seed the first particle
    /// set. Fails if the surface cannot provide a 2D context or the engine
    /// settings are invalid; the engine starts Stopped.
    pub fn new<S>(
        surface: S,
        scheduler: F,
        config: ParticleConfig,
        settings: EngineConfig,
    ) -> EngineResult<Self>
    where
        S: DrawSurface<Context = C>,
    {
        log::debug!("[ParticleEngine::new] Starting engine initialization");

        settings.validate().map_err(|e| EngineError::InvalidConfig {
            field: "engine_config".to_string(),
            value: format!("{:?}", settings),
            reason: e.to_string(),
        })?;
        let fallback_color = parse_hex_rgb(&settings.fallback_color)?;

        let (width, height) = surface.dimensions();
        let context = surface.context_2d().ok_or_engine(|| {
            log::error!(
                "[ParticleEngine::new] Surface {}x{} has no 2D context",
                width,
                height
            );
            EngineError::ContextUnavailable { width, height }
        })?;

        let rng = match settings.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let style = build_frame_style(&config, settings.max_age, settings.trail_fade_alpha);

        let mut engine = Self {
            context,
            scheduler,
            settings,
            config,
            style,
            particles: Vec::new(),
            fallback_color,
            rng,
            frame_handle: None,
            frame_count: 0,
        };
        engine.reseed();

        log::info!(
            "[ParticleEngine::new] Engine ready: {}x{} surface, {} particles",
            width,
            height,
            engine.particles.len()
        );
        Ok(engine)
    }

    // ========================================================================
    // LIFECYCLE
    // ========================================================================

    /// Begin the frame loop. Returns false if it was already running.
    pub fn start(&mut self) -> bool {
        if self.frame_handle.is_some() {
            return false;
        }
        self.frame_handle = Some(self.scheduler.request_frame());
        log::info!("[ParticleEngine::start] Frame loop started");
        true
    }

    /// Halt the frame loop, withdrawing the pending request before
    /// returning. Returns false if it was already stopped.
    pub fn stop(&mut self) -> bool {
        match self.frame_handle.take() {
            Some(handle) => {
                self.scheduler.cancel_frame(handle);
                log::info!(
                    "[ParticleEngine::stop] Frame loop stopped after {} frames",
                    self.frame_count
                );
                true
            }
            None => false,
        }
    }

    /// Change surface dimensions. Existing particles keep their positions
    /// and wrap against the new bounds from the next frame on.
    pub fn resize(&mut self, width: u32, height: u32) {
        log::debug!("[ParticleEngine::resize] {}x{}", width, height);
        self.context.set_size(width, height);
    }

    /// Replace the configuration and reseed. Safe while running: the next
    /// frame sees only the new configuration and its particles.
    pub fn update_config(&mut self, config: ParticleConfig) {
        self.style = build_frame_style(&config, self.settings.max_age, self.settings.trail_fade_alpha);
        self.config = config;
        self.reseed();
    }

    /// Discard every particle and seed a fresh set from the active
    /// configuration
    pub fn reseed(&mut self) {
        let bounds = self.bounds();
        self.particles = seed_particles(
            &mut self.rng,
            &self.config,
            bounds,
            self.settings.max_age,
            self.settings.max_particles,
            self.fallback_color,
        );
        log::debug!(
            "[ParticleEngine::reseed] {} particles across {} groups (requested {})",
            self.particles.len(),
            self.config.particle_groups.len(),
            total_group_count(&self.config)
        );
    }

    // ========================================================================
    // FRAMES
    // ========================================================================

    /// Host callback for a fired frame request.
    ///
    /// Stale handles (fired after `stop`, or superseded) are ignored and
    /// return `Ok(false)` without touching the surface. Otherwise the next
    /// frame is requested and the current one is run; a failed frame is
    /// reported as an error while the loop stays scheduled, leaving the
    /// decision to stop with the host.
    pub fn on_frame(&mut self, handle: FrameHandle) -> EngineResult<bool> {
        if self.frame_handle != Some(handle) {
            log::trace!("[ParticleEngine::on_frame] Ignoring stale {:?}", handle);
            return Ok(false);
        }

        self.frame_handle = Some(self.scheduler.request_frame());
        self.step().map(|_| true)
    }

    /// Advance the simulation by one frame and composite it
    fn step(&mut self) -> EngineResult<FrameStats> {
        self.frame_count += 1;
        let bounds = self.bounds();
        let max_age = self.settings.max_age;

        let mut non_finite = 0usize;
        for particle in self.particles.iter_mut() {
            update_particle(&mut self.rng, particle, &self.config.behavior, bounds, max_age);
            if !is_finite_particle(particle) {
                non_finite += 1;
            }
        }

        if non_finite > 0 {
            log::error!(
                "[ParticleEngine::step] Frame {}: {} of {} particles non-finite",
                self.frame_count,
                non_finite,
                self.particles.len()
            );
            return Err(EngineError::FrameFailed {
                frame: self.frame_count,
                reason: format!(
                    "{} of {} particles have non-finite position or velocity",
                    non_finite,
                    self.particles.len()
                ),
            });
        }

        let stats = render_frame(&mut self.context, &self.particles, &self.style);
        log::trace!(
            "[ParticleEngine::step] Frame {}: drew {}, skipped {}",
            self.frame_count,
            stats.particles_drawn,
            stats.particles_skipped
        );
        Ok(stats)
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn is_running(&self) -> bool {
        self.frame_handle.is_some()
    }

    /// Size of the live particle set
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Frames simulated since construction
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn settings(&self) -> &EngineConfig {
        &self.settings
    }

    /// The drawing context holding the last composited frame
    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }

    fn bounds(&self) -> SurfaceBounds {
        SurfaceBounds {
            width: self.context.width() as f32,
            height: self.context.height() as f32,
        }
    }
}

impl<C: DrawContext2d, F: FrameScheduler> Drop for ParticleEngine<C, F> {
    fn drop(&mut self) {
        self.stop();
    }
}
