//! Object pooling
//!
//! Reuses instances of frequently spawned objects (bullets, particles,
//! pickups) instead of constructing them every frame.
//!
//! # Architecture
//!
//! - **[`Pool`]**: FIFO queue of idle instances of one type plus the factory
//!   used to grow it. Grows on demand, never shrinks.
//! - **[`PoolRegistry`]**: one type-erased pool per caller-chosen key, stored
//!   in a slot map arena.
//! - **[`Pooled`]**: owning wrapper returned by `acquire`. Its [`InstanceTag`]
//!   lets the pool reject foreign and double releases. A rejected release
//!   hands the instance back inside a [`ReleaseError`].
//!
//! # Usage
//!
//! ```rust
//! use frame_core::pooling::{Poolable, PoolKey, PoolRegistry};
//!
//! #[derive(Default)]
//! struct Spark { live: bool }
//!
//! impl Poolable for Spark {
//!     fn on_spawn(&mut self) {}
//!     fn on_despawn(&mut self) {}
//!     fn set_active(&mut self, active: bool) { self.live = active; }
//! }
//!
//! let mut pools = PoolRegistry::new();
//! let key = PoolKey::from("Spark");
//! pools.create_pool(key.clone(), Spark::default, 8)?;
//!
//! let spark = pools.acquire::<Spark>(&key)?;
//! assert!(spark.live);
//! pools.release(&key, spark)?;
//! # Ok::<(), frame_core::pooling::PoolError>(())
//! ```

mod error;
mod pool;
mod poolable;
mod pooled;
mod registry;

pub use error::{FactoryError, PoolError, ReleaseError};
pub use pool::{Pool, PoolStats};
pub use poolable::Poolable;
pub use pooled::{InstanceTag, PoolId, Pooled};
pub use registry::{PoolHandle, PoolKey, PoolRegistry};
