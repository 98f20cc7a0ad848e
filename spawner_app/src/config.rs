//! Demo configuration

use frame_core::config::{Config, PoolSettings, TimerSettings};
use frame_core::timing::Direction;
use serde::{Deserialize, Serialize};

/// Settings for the spawner demo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    /// Number of ticks to simulate
    pub ticks: u32,

    /// Seed for the lifetime jitter
    pub seed: u64,

    /// Bullet pool settings
    pub bullets: PoolSettings,

    /// Muzzle flash pool settings
    pub flashes: PoolSettings,

    /// Looping timer deciding when to fire, in ticks
    pub fire_timer: TimerSettings<u32>,

    /// Bullet lifetime countdown, in seconds of simulated time
    pub bullet_lifetime: TimerSettings<f32>,

    /// Maximum random deviation added to each lifetime step
    pub lifetime_jitter: f32,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            ticks: 240,
            seed: 7,
            bullets: PoolSettings::with_starting_size(8),
            flashes: PoolSettings::with_starting_size(2),
            fire_timer: TimerSettings {
                start: 0,
                end: 6,
                step: 1,
                direction: Direction::Increasing,
                looping: true,
            },
            bullet_lifetime: TimerSettings {
                start: 1.5,
                end: 0.0,
                step: 1.0 / 60.0,
                direction: Direction::Decreasing,
                looping: false,
            },
            lifetime_jitter: 0.005,
        }
    }
}

impl Config for SpawnerConfig {}
