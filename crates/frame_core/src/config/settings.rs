//! Serializable settings for pools and timers

use serde::{Deserialize, Serialize};

use crate::timing::Direction;

/// Default number of instances built when a pool is registered
pub const DEFAULT_STARTING_SIZE: usize = 0;

/// Per-pool settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolSettings {
    /// Instances built eagerly at registration
    pub starting_size: usize,

    /// Whether the pool toggles [`Poolable::set_active`](crate::pooling::Poolable::set_active)
    /// on acquire and release
    pub manage_activation: bool,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            starting_size: DEFAULT_STARTING_SIZE,
            manage_activation: true,
        }
    }
}

impl PoolSettings {
    /// Settings with a starting size and managed activation
    pub fn with_starting_size(starting_size: usize) -> Self {
        Self {
            starting_size,
            ..Self::default()
        }
    }
}

/// Timer settings
///
/// Describes a fixed-step timer. Dynamic step providers are closures and
/// have to be attached in code after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerSettings<T> {
    /// Value the counter starts from and resets to
    pub start: T,
    /// Value that ends a cycle once reached or crossed
    pub end: T,
    /// Amount applied per tick
    pub step: T,
    /// Whether the counter counts up or down
    pub direction: Direction,
    /// Restart automatically after a cycle ends
    pub looping: bool,
}

impl<T: Default> Default for TimerSettings<T> {
    fn default() -> Self {
        Self {
            start: T::default(),
            end: T::default(),
            step: T::default(),
            direction: Direction::Increasing,
            looping: false,
        }
    }
}
