//! Single-type object pool

use std::collections::{HashMap, VecDeque};
use std::fmt;

use super::{FactoryError, InstanceTag, PoolError, PoolId, Poolable, Pooled, ReleaseError};
use crate::config::PoolSettings;

type BoxedFactory<T> = Box<dyn FnMut() -> Result<T, FactoryError>>;

/// Counters for monitoring a pool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Instances waiting in the pool
    pub idle: usize,
    /// Instances currently held by callers
    pub checked_out: usize,
    /// Instances built by the factory since creation
    pub created: u64,
    /// Successful acquires since creation
    pub acquired: u64,
    /// Successful releases since creation
    pub released: u64,
}

/// Reusable set of instances of one type
///
/// Idle instances are handed out in FIFO order. When none are idle the
/// factory builds exactly one more; capacity is never given back.
pub struct Pool<T: Poolable> {
    id: PoolId,
    label: String,
    settings: PoolSettings,
    available: VecDeque<Pooled<T>>,
    /// Serial of each instance held by a caller, mapped to its checkout
    checked_out: HashMap<u64, u64>,
    factory: BoxedFactory<T>,
    next_serial: u64,
    next_checkout: u64,
    stats: PoolStats,
}

impl<T: Poolable> Pool<T> {
    /// Create a pool with an infallible factory
    ///
    /// Builds `settings.starting_size` idle instances up front.
    pub fn new(
        label: impl Into<String>,
        mut factory: impl FnMut() -> T + 'static,
        settings: PoolSettings,
    ) -> Self {
        let initial = (0..settings.starting_size).map(|_| factory()).collect();
        Self::from_parts(label.into(), Box::new(move || Ok(factory())), settings, initial)
    }

    /// Create a pool with a factory that can fail
    ///
    /// # Errors
    ///
    /// [`PoolError::Factory`] if any of the starting instances cannot be
    /// built. Nothing is kept in that case.
    pub fn try_new<E>(
        label: impl Into<String>,
        mut factory: impl FnMut() -> Result<T, E> + 'static,
        settings: PoolSettings,
    ) -> Result<Self, PoolError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let label = label.into();
        let mut initial = Vec::with_capacity(settings.starting_size);
        for _ in 0..settings.starting_size {
            let value = factory().map_err(|err| PoolError::Factory {
                pool: label.clone(),
                source: Box::new(err),
            })?;
            initial.push(value);
        }
        let boxed: BoxedFactory<T> =
            Box::new(move || factory().map_err(|err| Box::new(err) as FactoryError));
        Ok(Self::from_parts(label, boxed, settings, initial))
    }

    fn from_parts(
        label: String,
        factory: BoxedFactory<T>,
        settings: PoolSettings,
        initial: Vec<T>,
    ) -> Self {
        let mut pool = Self {
            id: PoolId::next(),
            label,
            settings,
            available: VecDeque::with_capacity(initial.len()),
            checked_out: HashMap::new(),
            factory,
            next_serial: 0,
            next_checkout: 0,
            stats: PoolStats::default(),
        };
        for mut value in initial {
            if pool.settings.manage_activation {
                value.set_active(false);
            }
            let pooled = pool.adopt(value);
            pool.available.push_back(pooled);
        }
        pool
    }

    fn adopt(&mut self, value: T) -> Pooled<T> {
        let tag = InstanceTag::new(self.id, self.next_serial);
        self.next_serial += 1;
        self.stats.created += 1;
        Pooled::new(value, tag)
    }

    /// Take an instance out of the pool, growing it by one if empty
    ///
    /// The instance is activated (if managed) and its `on_spawn` hook runs
    /// before it is returned.
    ///
    /// # Errors
    ///
    /// [`PoolError::Factory`] if the pool had to grow and the factory failed.
    pub fn acquire(&mut self) -> Result<Pooled<T>, PoolError> {
        let mut pooled = match self.available.pop_front() {
            Some(pooled) => pooled,
            None => {
                let value = (self.factory)().map_err(|source| PoolError::Factory {
                    pool: self.label.clone(),
                    source,
                })?;
                let pooled = self.adopt(value);
                log::debug!(
                    "Pool {} grew to {} instances",
                    self.label,
                    self.stats.created
                );
                pooled
            }
        };

        if self.settings.manage_activation {
            pooled.set_active(true);
        }
        pooled.on_spawn();

        let checkout = self.next_checkout;
        self.next_checkout += 1;
        pooled.stamp_checkout(checkout);
        self.checked_out.insert(pooled.tag().serial(), checkout);
        self.stats.acquired += 1;
        log::trace!("Pool {} issued instance #{}", self.label, pooled.tag().serial());
        Ok(pooled)
    }

    /// Hand an instance back to the pool
    ///
    /// The instance is deactivated (if managed) and its `on_despawn` hook
    /// runs before it is queued.
    ///
    /// # Errors
    ///
    /// The instance comes back inside the [`ReleaseError`] with
    /// - [`PoolError::ForeignInstance`] if it came from another pool
    /// - [`PoolError::DoubleRelease`] if this checkout of it was already
    ///   released
    pub fn release(&mut self, mut pooled: Pooled<T>) -> Result<(), ReleaseError<T>> {
        let tag = pooled.tag();
        if tag.pool() != self.id {
            log::warn!("Pool {} rejected foreign instance #{}", self.label, tag.serial());
            let error = PoolError::ForeignInstance {
                pool: self.label.clone(),
                serial: tag.serial(),
            };
            return Err(ReleaseError::new(error, pooled));
        }
        if self.checked_out.get(&tag.serial()) != Some(&tag.checkout()) {
            log::warn!("Pool {} rejected double release of #{}", self.label, tag.serial());
            let error = PoolError::DoubleRelease {
                pool: self.label.clone(),
                serial: tag.serial(),
            };
            return Err(ReleaseError::new(error, pooled));
        }
        self.checked_out.remove(&tag.serial());

        if self.settings.manage_activation {
            pooled.set_active(false);
        }
        pooled.on_despawn();

        self.available.push_back(pooled);
        self.stats.released += 1;
        log::trace!("Pool {} took back instance #{}", self.label, tag.serial());
        Ok(())
    }

    /// Whether `pooled` is currently checked out from this pool
    pub fn is_checked_out(&self, pooled: &Pooled<T>) -> bool {
        let tag = pooled.tag();
        tag.pool() == self.id && self.checked_out.get(&tag.serial()) == Some(&tag.checkout())
    }

    /// Identity stamped into every instance's tag
    pub fn id(&self) -> PoolId {
        self.id
    }

    /// Name used in logs and errors
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Settings the pool was created with
    pub fn settings(&self) -> PoolSettings {
        self.settings
    }

    /// Number of idle instances
    pub fn idle_count(&self) -> usize {
        self.available.len()
    }

    /// Number of instances held by callers
    pub fn checked_out_count(&self) -> usize {
        self.checked_out.len()
    }

    /// Snapshot of the pool counters
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            idle: self.available.len(),
            checked_out: self.checked_out.len(),
            ..self.stats
        }
    }
}

impl<T: Poolable> fmt::Debug for Pool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("settings", &self.settings)
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}
