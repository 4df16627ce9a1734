//! Real-time driver: fires a `ManualScheduler` at a fixed cadence
//!
//! Stands in for a display refresh callback when the host has none (demos,
//! headless capture). Frames are still treated as fixed steps; the delay
//! only paces them.

use super::ManualScheduler;
use crate::engine::ParticleEngine;
use crate::error::EngineResult;
use crate::surface::DrawContext2d;
use futures_timer::Delay;
use std::time::{Duration, Instant};

/// Outcome of a paced run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PacedRunStats {
    pub frames: u64,
    pub elapsed: Duration,
}

/// Delay between frames for a target rate (clamped to at least 1 fps)
pub fn frame_interval(target_fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / target_fps.max(1) as f64)
}

/// Fire up to `frames` pending frames at the engine's `target_fps`.
///
/// Ends early when the engine stops scheduling. The first frame error is
/// returned as-is; the engine is left running for the caller to stop.
pub fn run_paced<C: DrawContext2d>(
    engine: &mut ParticleEngine<C, ManualScheduler>,
    frames: u64,
) -> EngineResult<PacedRunStats> {
    let interval = frame_interval(engine.settings().target_fps);
    log::info!(
        "[scheduler::run_paced] Driving {} frames every {:?}",
        frames,
        interval
    );

    let started = Instant::now();
    let fired = pollster::block_on(async {
        let mut fired = 0u64;
        while fired < frames {
            Delay::new(interval).await;
            let handle = match engine.scheduler_mut().fire() {
                Some(handle) => handle,
                None => break,
            };
            if engine.on_frame(handle)? {
                fired += 1;
            }
        }
        EngineResult::Ok(fired)
    })?;

    let stats = PacedRunStats {
        frames: fired,
        elapsed: started.elapsed(),
    };
    log::info!(
        "[scheduler::run_paced] {} frames in {:?}",
        stats.frames,
        stats.elapsed
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::clear_air_config;
    use crate::surface::RasterSurface;
    use crate::EngineConfig;

    fn engine() -> ParticleEngine<crate::surface::RasterContext, ManualScheduler> {
        ParticleEngine::new(
            RasterSurface::new(64, 48),
            ManualScheduler::new(),
            clear_air_config(),
            EngineConfig {
                rng_seed: Some(3),
                target_fps: 1000,
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn test_frame_interval() {
        assert_eq!(frame_interval(50), Duration::from_millis(20));
        assert_eq!(frame_interval(0), Duration::from_secs(1));
    }

    #[test]
    fn test_run_paced_fires_requested_frames() {
        let mut engine = engine();
        engine.start();
        let stats = run_paced(&mut engine, 5).unwrap();
        assert_eq!(stats.frames, 5);
        assert_eq!(engine.frame_count(), 5);
        assert!(engine.is_running());
    }

    #[test]
    fn test_run_paced_on_stopped_engine_returns_immediately() {
        let mut engine = engine();
        let stats = run_paced(&mut engine, 5).unwrap();
        assert_eq!(stats.frames, 0);
        assert_eq!(engine.frame_count(), 0);
    }
}
