//! Multi-type pool registry
//!
//! [`PoolRegistry`] keeps one [`Pool`] per caller-chosen key, each possibly
//! of a different type. Pools live type-erased in a slot map; the typed
//! `acquire`/`release` calls downcast them back.

use std::any::{type_name, Any};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use slotmap::SlotMap;

use super::{Pool, PoolError, PoolStats, Poolable, Pooled, ReleaseError};
use crate::config::PoolSettings;

slotmap::new_key_type! {
    /// Generational handle to a registered pool
    ///
    /// Cheaper than a key lookup for per-frame hot paths. Goes stale when the
    /// pool is removed.
    pub struct PoolHandle;
}

/// Default pool key: a caller-chosen name such as `"Bullet"`
///
/// Debug-formats as the bare name, which is how pools are labelled in logs
/// and errors.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PoolKey(Cow<'static, str>);

impl PoolKey {
    /// Create a key from a static name
    pub const fn new(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Key name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PoolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for PoolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for PoolKey {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<String> for PoolKey {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

/// Object-safe view of a `Pool<T>` for storage and diagnostics
trait ErasedPool {
    fn stats(&self) -> PoolStats;
    fn type_name(&self) -> &'static str;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Poolable> ErasedPool for Pool<T> {
    fn stats(&self) -> PoolStats {
        Pool::stats(self)
    }

    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

struct PoolEntry<K> {
    key: K,
    pool: Box<dyn ErasedPool>,
}

/// Registry of object pools, one per key
///
/// Keys must be registered with one of the `create_pool*` methods before
/// use; nothing is created implicitly.
///
/// # Usage
///
/// ```rust
/// use frame_core::pooling::{Poolable, PoolRegistry};
///
/// #[derive(Default)]
/// struct Bullet;
///
/// impl Poolable for Bullet {
///     fn on_spawn(&mut self) {}
///     fn on_despawn(&mut self) {}
/// }
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// enum Kind { Bullet }
///
/// let mut pools: PoolRegistry<Kind> = PoolRegistry::new();
/// pools.create_pool(Kind::Bullet, Bullet::default, 3)?;
/// let bullet = pools.acquire::<Bullet>(&Kind::Bullet)?;
/// pools.release(&Kind::Bullet, bullet)?;
/// # Ok::<(), frame_core::pooling::PoolError>(())
/// ```
pub struct PoolRegistry<K = PoolKey> {
    defaults: PoolSettings,
    pools: SlotMap<PoolHandle, PoolEntry<K>>,
    handles: HashMap<K, PoolHandle>,
}

impl<K> PoolRegistry<K>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    /// Create an empty registry with default settings
    pub fn new() -> Self {
        Self::with_defaults(PoolSettings::default())
    }

    /// Create an empty registry whose pools manage activation as `defaults` says
    ///
    /// `defaults.starting_size` is ignored by [`create_pool`](Self::create_pool),
    /// which takes the size explicitly.
    pub fn with_defaults(defaults: PoolSettings) -> Self {
        Self {
            defaults,
            pools: SlotMap::with_key(),
            handles: HashMap::new(),
        }
    }

    /// Settings applied by [`create_pool`](Self::create_pool)
    pub fn defaults(&self) -> PoolSettings {
        self.defaults
    }

    /// Register a pool and build `starting_size` idle instances
    ///
    /// # Errors
    ///
    /// [`PoolError::DuplicatePool`] if `key` is already registered.
    pub fn create_pool<T: Poolable>(
        &mut self,
        key: K,
        factory: impl FnMut() -> T + 'static,
        starting_size: usize,
    ) -> Result<PoolHandle, PoolError> {
        let settings = PoolSettings {
            starting_size,
            ..self.defaults
        };
        self.create_pool_with(key, factory, settings)
    }

    /// Register a pool with explicit settings
    ///
    /// # Errors
    ///
    /// [`PoolError::DuplicatePool`] if `key` is already registered.
    pub fn create_pool_with<T: Poolable>(
        &mut self,
        key: K,
        factory: impl FnMut() -> T + 'static,
        settings: PoolSettings,
    ) -> Result<PoolHandle, PoolError> {
        self.ensure_vacant(&key)?;
        let pool = Pool::new(format!("{key:?}"), factory, settings);
        Ok(self.insert(key, pool))
    }

    /// Register a pool whose factory can fail
    ///
    /// # Errors
    ///
    /// - [`PoolError::DuplicatePool`] if `key` is already registered
    /// - [`PoolError::Factory`] if a starting instance cannot be built; the
    ///   key stays unregistered
    pub fn try_create_pool_with<T, E>(
        &mut self,
        key: K,
        factory: impl FnMut() -> Result<T, E> + 'static,
        settings: PoolSettings,
    ) -> Result<PoolHandle, PoolError>
    where
        T: Poolable,
        E: std::error::Error + Send + Sync + 'static,
    {
        self.ensure_vacant(&key)?;
        let pool = Pool::try_new(format!("{key:?}"), factory, settings)?;
        Ok(self.insert(key, pool))
    }

    fn ensure_vacant(&self, key: &K) -> Result<(), PoolError> {
        if self.handles.contains_key(key) {
            return Err(PoolError::DuplicatePool(format!("{key:?}")));
        }
        Ok(())
    }

    fn insert<T: Poolable>(&mut self, key: K, pool: Pool<T>) -> PoolHandle {
        log::info!(
            "Created pool {:?} for {} with {} instances (manage activation: {})",
            key,
            type_name::<T>(),
            pool.idle_count(),
            pool.settings().manage_activation
        );
        let handle = self.pools.insert(PoolEntry {
            key: key.clone(),
            pool: Box::new(pool),
        });
        self.handles.insert(key, handle);
        handle
    }

    /// Unregister a pool, dropping its idle instances
    ///
    /// Instances still checked out from it are foreign to any pool later
    /// registered under the same key.
    ///
    /// # Errors
    ///
    /// [`PoolError::UnknownPool`] if `key` is not registered.
    pub fn remove_pool(&mut self, key: &K) -> Result<PoolStats, PoolError> {
        let handle = self.handle(key)?;
        self.handles.remove(key);
        let entry = self.pools.remove(handle).ok_or(PoolError::StaleHandle)?;
        let stats = entry.pool.stats();
        log::info!("Removed pool {:?} ({} still checked out)", key, stats.checked_out);
        Ok(stats)
    }

    /// Resolve a key to a handle
    ///
    /// # Errors
    ///
    /// [`PoolError::UnknownPool`] if `key` is not registered.
    pub fn handle(&self, key: &K) -> Result<PoolHandle, PoolError> {
        self.handles
            .get(key)
            .copied()
            .ok_or_else(|| PoolError::UnknownPool(format!("{key:?}")))
    }

    /// Take an instance from the pool registered under `key`
    ///
    /// # Errors
    ///
    /// - [`PoolError::UnknownPool`] if `key` is not registered
    /// - [`PoolError::TypeMismatch`] if the pool stores another type
    /// - [`PoolError::Factory`] if the pool had to grow and could not
    pub fn acquire<T: Poolable>(&mut self, key: &K) -> Result<Pooled<T>, PoolError> {
        let handle = self.handle(key)?;
        self.acquire_from(handle)
    }

    /// Return an instance to the pool registered under `key`
    ///
    /// # Errors
    ///
    /// The instance comes back inside the [`ReleaseError`], untouched, with
    /// - [`PoolError::UnknownPool`] if `key` is not registered
    /// - [`PoolError::TypeMismatch`] if the pool stores another type
    /// - [`PoolError::ForeignInstance`] / [`PoolError::DoubleRelease`] if the
    ///   instance is not checked out from that pool
    pub fn release<T: Poolable>(
        &mut self,
        key: &K,
        pooled: Pooled<T>,
    ) -> Result<(), ReleaseError<T>> {
        match self.handle(key) {
            Ok(handle) => self.release_to(handle, pooled),
            Err(error) => Err(ReleaseError::new(error, pooled)),
        }
    }

    /// [`acquire`](Self::acquire) through a previously resolved handle
    ///
    /// # Errors
    ///
    /// As [`acquire`](Self::acquire), with [`PoolError::StaleHandle`] in place
    /// of `UnknownPool`.
    pub fn acquire_from<T: Poolable>(
        &mut self,
        handle: PoolHandle,
    ) -> Result<Pooled<T>, PoolError> {
        self.typed_pool_mut::<T>(handle)?.acquire()
    }

    /// [`release`](Self::release) through a previously resolved handle
    ///
    /// # Errors
    ///
    /// As [`release`](Self::release), with [`PoolError::StaleHandle`] in place
    /// of `UnknownPool`.
    pub fn release_to<T: Poolable>(
        &mut self,
        handle: PoolHandle,
        pooled: Pooled<T>,
    ) -> Result<(), ReleaseError<T>> {
        match self.typed_pool_mut::<T>(handle) {
            Ok(pool) => pool.release(pooled),
            Err(error) => Err(ReleaseError::new(error, pooled)),
        }
    }

    /// Typed access to a registered pool
    ///
    /// # Errors
    ///
    /// [`PoolError::UnknownPool`] or [`PoolError::TypeMismatch`].
    pub fn pool<T: Poolable>(&self, key: &K) -> Result<&Pool<T>, PoolError> {
        let entry = self
            .pools
            .get(self.handle(key)?)
            .ok_or(PoolError::StaleHandle)?;
        entry
            .pool
            .as_any()
            .downcast_ref::<Pool<T>>()
            .ok_or_else(|| type_mismatch::<T, K>(entry))
    }

    fn typed_pool_mut<T: Poolable>(
        &mut self,
        handle: PoolHandle,
    ) -> Result<&mut Pool<T>, PoolError> {
        let entry = self.pools.get_mut(handle).ok_or(PoolError::StaleHandle)?;
        if entry.pool.as_any().is::<Pool<T>>() {
            entry
                .pool
                .as_any_mut()
                .downcast_mut::<Pool<T>>()
                .ok_or(PoolError::StaleHandle)
        } else {
            Err(type_mismatch::<T, K>(entry))
        }
    }

    /// Whether a pool is registered under `key`
    pub fn contains(&self, key: &K) -> bool {
        self.handles.contains_key(key)
    }

    /// Number of registered pools
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Whether no pool is registered
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Registered keys, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.pools.values().map(|entry| &entry.key)
    }

    /// Number of idle instances in the pool under `key`
    ///
    /// # Errors
    ///
    /// [`PoolError::UnknownPool`] if `key` is not registered.
    pub fn idle_count(&self, key: &K) -> Result<usize, PoolError> {
        self.stats(key).map(|stats| stats.idle)
    }

    /// Counters of the pool under `key`
    ///
    /// # Errors
    ///
    /// [`PoolError::UnknownPool`] if `key` is not registered.
    pub fn stats(&self, key: &K) -> Result<PoolStats, PoolError> {
        let handle = self.handle(key)?;
        self.pools
            .get(handle)
            .map(|entry| entry.pool.stats())
            .ok_or(PoolError::StaleHandle)
    }

    /// Counters summed over every registered pool
    pub fn total_stats(&self) -> PoolStats {
        self.pools.values().map(|entry| entry.pool.stats()).fold(
            PoolStats::default(),
            |acc, stats| PoolStats {
                idle: acc.idle + stats.idle,
                checked_out: acc.checked_out + stats.checked_out,
                created: acc.created + stats.created,
                acquired: acc.acquired + stats.acquired,
                released: acc.released + stats.released,
            },
        )
    }
}

fn type_mismatch<T, K: fmt::Debug>(entry: &PoolEntry<K>) -> PoolError {
    PoolError::TypeMismatch {
        pool: format!("{:?}", entry.key),
        registered: entry.pool.type_name(),
        requested: type_name::<T>(),
    }
}

impl<K> Default for PoolRegistry<K>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for PoolRegistry<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for entry in self.pools.values() {
            map.entry(&entry.key, &(entry.pool.type_name(), entry.pool.stats()));
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Default)]
    struct Bullet {
        visible: bool,
        spawned: u32,
    }

    impl Poolable for Bullet {
        fn on_spawn(&mut self) {
            self.spawned += 1;
        }

        fn on_despawn(&mut self) {}

        fn set_active(&mut self, active: bool) {
            self.visible = active;
        }
    }

    #[derive(Debug, Default)]
    struct Explosion;

    impl Poolable for Explosion {
        fn on_spawn(&mut self) {}
        fn on_despawn(&mut self) {}
    }

    #[derive(Debug, thiserror::Error)]
    #[error("asset missing")]
    struct AssetMissing;

    const BULLET: PoolKey = PoolKey::new("Bullet");
    const EXPLOSION: PoolKey = PoolKey::new("Explosion");

    fn counting_factory() -> (impl FnMut() -> Bullet + 'static, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let factory = move || {
            counter.set(counter.get() + 1);
            Bullet::default()
        };
        (factory, calls)
    }

    #[test]
    fn test_bullet_scenario() {
        let mut pools = PoolRegistry::new();
        let (factory, calls) = counting_factory();
        pools.create_pool(BULLET, factory, 3).unwrap();
        assert_eq!(calls.get(), 3);

        let mut held = Vec::new();
        for _ in 0..3 {
            held.push(pools.acquire::<Bullet>(&BULLET).unwrap());
        }
        assert_eq!(calls.get(), 3);
        held.push(pools.acquire::<Bullet>(&BULLET).unwrap());
        assert_eq!(calls.get(), 4);

        for bullet in held {
            pools.release(&BULLET, bullet).unwrap();
        }
        let reused = pools.acquire::<Bullet>(&BULLET).unwrap();
        assert_eq!(calls.get(), 4);
        assert!(reused.visible);
        assert_eq!(reused.spawned, 2);
    }

    #[test]
    fn test_duplicate_pool_is_rejected_without_building() {
        let mut pools = PoolRegistry::new();
        pools.create_pool(BULLET, Bullet::default, 1).unwrap();

        let (factory, calls) = counting_factory();
        let result = pools.create_pool(BULLET, factory, 5);

        assert!(matches!(result, Err(PoolError::DuplicatePool(_))));
        assert_eq!(calls.get(), 0);
        assert_eq!(pools.idle_count(&BULLET).unwrap(), 1);
    }

    #[test]
    fn test_unknown_pool_errors() {
        let mut pools = PoolRegistry::new();
        pools.create_pool(BULLET, Bullet::default, 1).unwrap();
        let bullet = pools.acquire::<Bullet>(&BULLET).unwrap();

        let missing = PoolKey::from("X");
        assert!(matches!(pools.acquire::<Bullet>(&missing), Err(PoolError::UnknownPool(_))));
        let rejected = pools.release(&missing, bullet).unwrap_err();
        assert!(matches!(rejected.error(), PoolError::UnknownPool(name) if name == "X"));
        assert!(matches!(pools.stats(&missing), Err(PoolError::UnknownPool(_))));
    }

    #[test]
    fn test_rejected_release_can_be_retried() {
        let mut pools = PoolRegistry::new();
        pools.create_pool(BULLET, Bullet::default, 1).unwrap();
        let bullet = pools.acquire::<Bullet>(&BULLET).unwrap();

        let misspelled = PoolKey::from("Bulet");
        let (err, bullet) = pools.release(&misspelled, bullet).unwrap_err().into_parts();
        assert_eq!(err.to_string(), "No pool registered for Bulet");
        assert_eq!(pools.stats(&BULLET).unwrap().checked_out, 1);

        pools.release(&BULLET, bullet).unwrap();
        let stats = pools.stats(&BULLET).unwrap();
        assert_eq!(stats.checked_out, 0);
        assert_eq!(stats.released, 1);
    }

    #[test]
    fn test_pools_of_different_types() {
        let mut pools = PoolRegistry::new();
        pools.create_pool(BULLET, Bullet::default, 2).unwrap();
        pools.create_pool(EXPLOSION, || Explosion, 1).unwrap();

        let bullet = pools.acquire::<Bullet>(&BULLET).unwrap();
        let boom = pools.acquire::<Explosion>(&EXPLOSION).unwrap();
        pools.release(&EXPLOSION, boom).unwrap();
        pools.release(&BULLET, bullet).unwrap();

        assert_eq!(pools.len(), 2);
        assert_eq!(pools.total_stats().acquired, 2);
        let mut keys: Vec<_> = pools.keys().map(PoolKey::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["Bullet", "Explosion"]);
    }

    #[test]
    fn test_type_mismatch() {
        let mut pools = PoolRegistry::new();
        pools.create_pool(BULLET, Bullet::default, 1).unwrap();

        let err = pools.acquire::<Explosion>(&BULLET).unwrap_err();
        assert!(matches!(err, PoolError::TypeMismatch { .. }));
        assert!(err.to_string().contains("Explosion"));
        assert_eq!(pools.idle_count(&BULLET).unwrap(), 1);
        assert!(pools.pool::<Explosion>(&BULLET).is_err());
        assert!(pools.pool::<Bullet>(&BULLET).is_ok());
    }

    #[test]
    fn test_release_into_wrong_pool_of_same_type() {
        let mut pools = PoolRegistry::new();
        let enemy_bullets = PoolKey::from("EnemyBullet");
        pools.create_pool(BULLET, Bullet::default, 1).unwrap();
        pools.create_pool(enemy_bullets.clone(), Bullet::default, 1).unwrap();

        let bullet = pools.acquire::<Bullet>(&BULLET).unwrap();
        let rejected = pools.release(&enemy_bullets, bullet).unwrap_err();

        assert!(matches!(rejected.error(), PoolError::ForeignInstance { .. }));
        assert_eq!(pools.stats(&BULLET).unwrap().checked_out, 1);
        assert_eq!(pools.idle_count(&enemy_bullets).unwrap(), 1);

        pools.release(&BULLET, rejected.into_inner()).unwrap();
        assert_eq!(pools.stats(&BULLET).unwrap().checked_out, 0);
        assert_eq!(pools.idle_count(&BULLET).unwrap(), 1);
    }

    #[test]
    fn test_type_mismatch_release_returns_instance() {
        let mut pools = PoolRegistry::new();
        pools.create_pool(BULLET, Bullet::default, 1).unwrap();
        pools.create_pool(EXPLOSION, || Explosion, 1).unwrap();

        let boom = pools.acquire::<Explosion>(&EXPLOSION).unwrap();
        let rejected = pools.release(&BULLET, boom).unwrap_err();
        assert!(matches!(rejected.error(), PoolError::TypeMismatch { .. }));

        pools.release(&EXPLOSION, rejected.into_inner()).unwrap();
        assert_eq!(pools.stats(&EXPLOSION).unwrap().checked_out, 0);
    }

    #[test]
    fn test_double_release_through_registry() {
        let mut pools = PoolRegistry::new();
        pools.create_pool(BULLET, Bullet::default, 0).unwrap();

        let bullet = pools.acquire::<Bullet>(&BULLET).unwrap();
        let duplicate = bullet.clone();
        pools.release(&BULLET, bullet).unwrap();

        let rejected = pools.release(&BULLET, duplicate).unwrap_err();
        assert!(matches!(rejected.error(), PoolError::DoubleRelease { .. }));
        assert_eq!(pools.idle_count(&BULLET).unwrap(), 1);
    }

    #[test]
    fn test_stale_clone_is_rejected_after_reacquire() {
        let mut pools = PoolRegistry::new();
        pools.create_pool(BULLET, Bullet::default, 0).unwrap();

        let bullet = pools.acquire::<Bullet>(&BULLET).unwrap();
        let stale = bullet.clone();
        pools.release(&BULLET, bullet).unwrap();
        let live = pools.acquire::<Bullet>(&BULLET).unwrap();

        let err = pools.release(&BULLET, stale).unwrap_err().into_error();
        assert_eq!(err.to_string(), "Instance #0 of pool Bullet is not checked out");
        assert_eq!(pools.stats(&BULLET).unwrap().idle, 0);

        pools.release(&BULLET, live).unwrap();
        let stats = pools.stats(&BULLET).unwrap();
        assert_eq!((stats.idle, stats.checked_out, stats.released), (1, 0, 2));
    }

    #[test]
    fn test_failed_registration_leaves_key_free() {
        let mut pools: PoolRegistry = PoolRegistry::new();
        let result = pools.try_create_pool_with(
            BULLET,
            || Err::<Bullet, _>(AssetMissing),
            PoolSettings::with_starting_size(2),
        );

        assert!(matches!(result, Err(PoolError::Factory { .. })));
        assert!(!pools.contains(&BULLET));
        assert!(pools.create_pool(BULLET, Bullet::default, 1).is_ok());
    }

    #[test]
    fn test_fallible_factory_grows() {
        let mut pools = PoolRegistry::new();
        let factory = || Ok::<_, AssetMissing>(Bullet::default());
        pools
            .try_create_pool_with(BULLET, factory, PoolSettings::default())
            .unwrap();

        let bullet = pools.acquire::<Bullet>(&BULLET).unwrap();
        assert_eq!(pools.stats(&BULLET).unwrap().created, 1);
        pools.release(&BULLET, bullet).unwrap();
    }

    #[test]
    fn test_registry_defaults_control_activation() {
        let mut pools = PoolRegistry::with_defaults(PoolSettings {
            starting_size: 99,
            manage_activation: false,
        });
        pools.create_pool(BULLET, Bullet::default, 1).unwrap();

        let bullet = pools.acquire::<Bullet>(&BULLET).unwrap();
        assert!(!bullet.visible);
        assert_eq!(pools.stats(&BULLET).unwrap().created, 1);
    }

    #[test]
    fn test_handles() {
        let mut pools = PoolRegistry::new();
        let handle = pools.create_pool(BULLET, Bullet::default, 1).unwrap();
        assert_eq!(pools.handle(&BULLET).unwrap(), handle);

        let bullet = pools.acquire_from::<Bullet>(handle).unwrap();
        pools.release_to(handle, bullet).unwrap();

        pools.remove_pool(&BULLET).unwrap();
        assert!(matches!(pools.acquire_from::<Bullet>(handle), Err(PoolError::StaleHandle)));
    }

    #[test]
    fn test_remove_and_recreate_makes_old_instances_foreign() {
        let mut pools = PoolRegistry::new();
        pools.create_pool(BULLET, Bullet::default, 1).unwrap();
        let stale = pools.acquire::<Bullet>(&BULLET).unwrap();

        let stats = pools.remove_pool(&BULLET).unwrap();
        assert_eq!(stats.checked_out, 1);
        assert!(pools.is_empty());
        assert!(matches!(pools.remove_pool(&BULLET), Err(PoolError::UnknownPool(_))));

        pools.create_pool(BULLET, Bullet::default, 0).unwrap();
        let rejected = pools.release(&BULLET, stale).unwrap_err();
        assert!(matches!(rejected.error(), PoolError::ForeignInstance { .. }));
    }

    #[test]
    fn test_enum_keys() {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        enum Kind {
            Bullet,
        }

        let mut pools: PoolRegistry<Kind> = PoolRegistry::default();
        pools.create_pool(Kind::Bullet, Bullet::default, 0).unwrap();
        let err = pools.create_pool(Kind::Bullet, Bullet::default, 0).unwrap_err();
        assert_eq!(err.to_string(), "Pool already exists: Bullet");
    }

    #[test]
    fn test_debug_lists_pools() {
        let mut pools = PoolRegistry::new();
        pools.create_pool(BULLET, Bullet::default, 2).unwrap();
        let text = format!("{pools:?}");
        assert!(text.contains("Bullet"));
        assert!(!text.contains("PoolKey"));
        assert!(text.contains("idle: 2"));
    }

    #[test]
    fn test_pool_key_labels_errors_by_name() {
        let mut pools = PoolRegistry::new();
        pools.create_pool(BULLET, Bullet::default, 0).unwrap();

        let err = pools.create_pool(BULLET, Bullet::default, 0).unwrap_err();
        assert_eq!(err.to_string(), "Pool already exists: Bullet");
        assert_eq!(pools.pool::<Bullet>(&BULLET).unwrap().label(), "Bullet");
        assert_eq!(format!("{:?}", PoolKey::from(String::from("Spark"))), "Spark");
    }
}
