//! Checked-out instances and their identity tags

use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_POOL_ID: AtomicU64 = AtomicU64::new(1);

/// Process-wide unique identity of a [`Pool`](super::Pool)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PoolId(u64);

impl PoolId {
    pub(super) fn next() -> Self {
        Self(NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Identifies one checkout of an instance: owning pool, serial number and
/// the checkout generation stamped by the latest `acquire`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceTag {
    pool: PoolId,
    serial: u64,
    checkout: u64,
}

impl InstanceTag {
    pub(super) fn new(pool: PoolId, serial: u64) -> Self {
        Self {
            pool,
            serial,
            checkout: 0,
        }
    }

    /// Pool that created the instance
    pub fn pool(self) -> PoolId {
        self.pool
    }

    /// Serial number, unique within the pool
    pub fn serial(self) -> u64 {
        self.serial
    }

    /// Checkout generation, unique within the pool
    pub fn checkout(self) -> u64 {
        self.checkout
    }
}

/// An instance taken out of a pool
///
/// Owns the value until it is handed back with `release`. Dereferences to
/// the inner value. A clone carries the same tag as the original, so only
/// one of the two can be released, and neither once the instance has been
/// released and handed out again.
#[derive(Debug, Clone)]
pub struct Pooled<T> {
    value: T,
    tag: InstanceTag,
}

impl<T> Pooled<T> {
    pub(super) fn new(value: T, tag: InstanceTag) -> Self {
        Self { value, tag }
    }

    /// Identity of this instance
    pub fn tag(&self) -> InstanceTag {
        self.tag
    }

    pub(super) fn stamp_checkout(&mut self, checkout: u64) {
        self.tag.checkout = checkout;
    }
}

impl<T> Deref for Pooled<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for Pooled<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}
