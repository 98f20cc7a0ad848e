//! # Frame Core
//!
//! Building blocks for per-frame game logic: object pools that recycle
//! short-lived objects, and timers that advance once per tick.
//!
//! ## Features
//!
//! - **Object Pooling**: Multi-type registry, FIFO reuse, on-demand growth
//! - **Release Checking**: Foreign and double releases are rejected
//! - **Tick Timers**: Generic over the value type, fixed or dynamic step,
//!   one-shot or looping, with lifecycle callbacks
//! - **Configuration**: Pool and timer settings loadable from TOML or RON
//!
//! Both components are synchronous and single-threaded. The caller owns the
//! loop and decides when a tick happens.
//!
//! ## Quick Start
//!
//! ```rust
//! use frame_core::prelude::*;
//!
//! #[derive(Default)]
//! struct Bullet {
//!     visible: bool,
//! }
//!
//! impl Poolable for Bullet {
//!     fn on_spawn(&mut self) {}
//!     fn on_despawn(&mut self) {}
//!     fn set_active(&mut self, active: bool) {
//!         self.visible = active;
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bullets = PoolKey::from("Bullet");
//!     let mut pools = PoolRegistry::new();
//!     pools.create_pool(bullets.clone(), Bullet::default, 16)?;
//!
//!     let bullet = pools.acquire::<Bullet>(&bullets)?;
//!     let mut lifetime = TemporalTimer::new(0, 3, 1);
//!
//!     // game loop
//!     while lifetime.advance() != TickOutcome::CycleEnded {}
//!     pools.release(&bullets, bullet)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod pooling;
pub mod timing;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, PoolSettings, TimerSettings},
        pooling::{PoolError, PoolKey, PoolRegistry, PoolStats, Poolable, Pooled, ReleaseError},
        timing::{Direction, SimpleTimer, TemporalTimer, TickOutcome, TimerError},
    };
}
