//! Example rendering a pollutant overlay to PNG
//!
//! Loads a particle configuration (or the built-in clear-air one), drives the
//! engine in real time for a couple of seconds and writes the last frame.
//!
//! Usage: cargo run --example haze_overlay -- [config.json] [settings.toml]

use haze_engine::{
    config::{clear_air_config, load_particle_config, total_group_count},
    scheduler::run_paced,
    EngineConfig, ManualScheduler, ParticleEngine, RasterSurface,
};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    println!("Haze Overlay Example");
    println!("====================");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => load_particle_config(&path)?,
        None => clear_air_config(),
    };
    let settings = match args.next() {
        Some(path) => EngineConfig::load(&path)?,
        None => EngineConfig::default(),
    };

    println!("  Background: {}", config.background.description);
    println!("  Groups: {}", config.particle_groups.len());
    println!("  Particles: {}", total_group_count(&config));

    let mut engine = ParticleEngine::new(
        RasterSurface::new(1280, 720),
        ManualScheduler::new(),
        config,
        settings,
    )?;

    engine.start();
    let frames = u64::from(engine.settings().target_fps) * 2;
    let result = run_paced(&mut engine, frames);
    engine.stop();
    let stats = result?;

    println!(
        "  Rendered {} frames in {:.2}s",
        stats.frames,
        stats.elapsed.as_secs_f32()
    );

    engine.context().save_png("haze_overlay.png")?;
    println!("  Wrote haze_overlay.png");

    Ok(())
}
