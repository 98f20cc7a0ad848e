//! Tick loop wiring pools and timers together

use std::cell::RefCell;
use std::rc::Rc;

use frame_core::config::ConfigError;
use frame_core::pooling::{PoolError, PoolRegistry, PoolStats, Pooled};
use frame_core::timing::{TemporalTimer, TimerError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::bullet::{Bullet, MuzzleFlash};
use crate::config::SpawnerConfig;

/// Pools owned by the demo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolKind {
    /// Projectiles
    Bullet,
    /// Short-lived flash effects
    MuzzleFlash,
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Pool operation failed
    #[error("Pool error: {0}")]
    Pool(#[from] PoolError),

    /// Timer could not be built
    #[error("Timer error: {0}")]
    Timer(#[from] TimerError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Summary printed after a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Ticks simulated
    pub ticks: u32,
    /// Shots fired
    pub shots: u64,
    /// Bullets alive when the run stopped
    pub live_bullets: usize,
    /// Bullet pool counters
    pub bullets: PoolStats,
    /// Flash pool counters
    pub flashes: PoolStats,
}

/// Turret that fires pooled bullets on a looping timer
pub struct SpawnerDemo {
    pools: PoolRegistry<PoolKind>,
    fire_timer: TemporalTimer<u32>,
    bullets: Vec<Pooled<Bullet>>,
    flashes: Vec<Pooled<MuzzleFlash>>,
    tick: u32,
}

impl SpawnerDemo {
    /// Register the pools and timers described by `config`
    pub fn new(config: &SpawnerConfig) -> Result<Self, AppError> {
        let rng = Rc::new(RefCell::new(StdRng::seed_from_u64(config.seed)));
        let lifetime = config.bullet_lifetime;
        let jitter = config.lifetime_jitter;

        let mut pools = PoolRegistry::new();
        pools.create_pool_with(
            PoolKind::Bullet,
            move || Bullet::new(&lifetime, jitter, rng.clone()),
            config.bullets,
        )?;
        pools.create_pool_with(PoolKind::MuzzleFlash, MuzzleFlash::default, config.flashes)?;

        let fire_timer = TemporalTimer::builder(config.fire_timer.start, config.fire_timer.end)
            .step(config.fire_timer.step)
            .direction(config.fire_timer.direction)
            .looping(config.fire_timer.looping)
            .on_stop(|| log::info!("Turret stopped firing"))
            .build()?;

        Ok(Self {
            pools,
            fire_timer,
            bullets: Vec::new(),
            flashes: Vec::new(),
            tick: 0,
        })
    }

    /// Advance the simulation by one tick
    pub fn update(&mut self) -> Result<(), AppError> {
        self.tick += 1;

        // flashes last exactly one tick
        for flash in self.flashes.drain(..) {
            self.pools.release(&PoolKind::MuzzleFlash, flash).map_err(PoolError::from)?;
        }

        if self.fire_timer.advance().ended_cycle() {
            let bullet = self.pools.acquire::<Bullet>(&PoolKind::Bullet)?;
            self.bullets.push(bullet);
            let flash = self.pools.acquire::<MuzzleFlash>(&PoolKind::MuzzleFlash)?;
            log::trace!("Muzzle flash shown {} times (visible: {})", flash.shown, flash.visible);
            self.flashes.push(flash);
            let visible = self.bullets.iter().filter(|bullet| bullet.visible).count();
            log::debug!("Tick {}: fired, {} bullets in flight", self.tick, visible);
        }

        let mut index = 0;
        while index < self.bullets.len() {
            if self.bullets[index].update() {
                let expired = self.bullets.swap_remove(index);
                self.pools.release(&PoolKind::Bullet, expired).map_err(PoolError::from)?;
            } else {
                index += 1;
            }
        }
        Ok(())
    }

    /// Stop firing; bullets in flight keep flying
    pub fn cease_fire(&mut self) {
        self.fire_timer.stop();
    }

    /// Run `ticks` updates and report pool usage
    pub fn run(&mut self, ticks: u32) -> Result<RunReport, AppError> {
        for _ in 0..ticks {
            self.update()?;
        }
        self.report()
    }

    /// Current counters
    pub fn report(&self) -> Result<RunReport, AppError> {
        let bullets = self.pools.stats(&PoolKind::Bullet)?;
        Ok(RunReport {
            ticks: self.tick,
            shots: bullets.acquired,
            live_bullets: self.bullets.len(),
            bullets,
            flashes: self.pools.stats(&PoolKind::MuzzleFlash)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frame_core::config::{PoolSettings, TimerSettings};
    use frame_core::timing::Direction;

    fn quick_config() -> SpawnerConfig {
        SpawnerConfig {
            ticks: 0,
            seed: 3,
            bullets: PoolSettings::with_starting_size(2),
            flashes: PoolSettings::with_starting_size(1),
            fire_timer: TimerSettings {
                start: 0,
                end: 2,
                step: 1,
                direction: Direction::Increasing,
                looping: true,
            },
            bullet_lifetime: TimerSettings {
                start: 5.0,
                end: 0.0,
                step: 1.0,
                direction: Direction::Decreasing,
                looping: false,
            },
            lifetime_jitter: 0.0,
        }
    }

    #[test]
    fn test_steady_state_reuses_bullets() {
        let mut demo = SpawnerDemo::new(&quick_config()).unwrap();
        let report = demo.run(100).unwrap();

        // a bullet every 2 ticks living 5 ticks keeps at most 3 in flight
        assert_eq!(report.shots, 50);
        assert_eq!(report.bullets.created, 3);
        assert_eq!(report.bullets.checked_out, report.live_bullets);
        assert_eq!(report.flashes.created, 1);
    }

    #[test]
    fn test_cease_fire_drains_bullets() {
        let mut demo = SpawnerDemo::new(&quick_config()).unwrap();
        demo.run(10).unwrap();
        demo.cease_fire();
        let report = demo.run(10).unwrap();

        assert_eq!(report.shots, 5);
        assert_eq!(report.live_bullets, 0);
        assert_eq!(report.bullets.idle, report.bullets.created as usize);
        assert_eq!(report.flashes.checked_out, 0);
    }

    #[test]
    fn test_zero_fire_step_never_fires() {
        let mut config = quick_config();
        config.fire_timer.step = 0;
        let mut demo = SpawnerDemo::new(&config).unwrap();
        assert_eq!(demo.run(20).unwrap().shots, 0);
    }
}
