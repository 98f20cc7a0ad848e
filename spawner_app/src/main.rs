//! Spawner demo: a turret firing pooled bullets from a fixed tick loop
//!
//! Usage: `spawner_demo [config.toml|config.ron]`

mod bullet;
mod config;
mod demo;

use frame_core::config::Config;
use frame_core::foundation::logging;

use crate::config::SpawnerConfig;
use crate::demo::{AppError, SpawnerDemo};

fn main() -> Result<(), AppError> {
    logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => SpawnerConfig::load_from_file(path)?,
        None => SpawnerConfig::default(),
    };
    log::info!("Running spawner demo for {} ticks", config.ticks);

    let mut demo = SpawnerDemo::new(&config)?;
    let report = demo.run(config.ticks)?;

    log::info!(
        "Fired {} shots over {} ticks with {} bullets built ({} in flight)",
        report.shots,
        report.ticks,
        report.bullets.created,
        report.live_bullets
    );
    log::info!("Bullet pool: {:?}", report.bullets);
    log::info!("Flash pool: {:?}", report.flashes);
    Ok(())
}
