//! Pool error types

use std::fmt;

use super::Pooled;

/// Error produced by a fallible pool factory
pub type FactoryError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur during pool management
///
/// Every operation validates before mutating, so a returned error means the
/// pool is unchanged.
#[derive(thiserror::Error, Debug)]
pub enum PoolError {
    /// A pool is already registered under this key
    #[error("Pool already exists: {0}")]
    DuplicatePool(String),

    /// No pool is registered under this key
    #[error("No pool registered for {0}")]
    UnknownPool(String),

    /// The handle refers to a pool that has been removed
    #[error("Pool handle no longer refers to a registered pool")]
    StaleHandle,

    /// The pool stores a different type than the one requested
    #[error("Pool {pool} stores {registered}, not {requested}")]
    TypeMismatch {
        /// Pool that was addressed
        pool: String,
        /// Type the pool was created for
        registered: &'static str,
        /// Type the caller asked for
        requested: &'static str,
    },

    /// The instance was acquired from a different pool
    #[error("Instance #{serial} does not belong to pool {pool}")]
    ForeignInstance {
        /// Pool the instance was released into
        pool: String,
        /// Serial number of the rejected instance
        serial: u64,
    },

    /// The instance is not checked out (already released)
    #[error("Instance #{serial} of pool {pool} is not checked out")]
    DoubleRelease {
        /// Pool the instance belongs to
        pool: String,
        /// Serial number of the rejected instance
        serial: u64,
    },

    /// The factory failed to build a new instance
    #[error("Factory for pool {pool} failed: {source}")]
    Factory {
        /// Pool whose factory failed
        pool: String,
        /// Error reported by the factory
        #[source]
        source: FactoryError,
    },
}

/// A rejected release, handing the instance back to the caller
///
/// The pool is left exactly as it was, so the instance can be released again
/// under the right key. Converts into the plain [`PoolError`] with `?`, which
/// drops the instance.
#[derive(thiserror::Error)]
#[error("{error}")]
pub struct ReleaseError<T> {
    error: PoolError,
    pooled: Pooled<T>,
}

impl<T> ReleaseError<T> {
    pub(super) fn new(error: PoolError, pooled: Pooled<T>) -> Self {
        Self { error, pooled }
    }

    /// Why the release was rejected
    pub fn error(&self) -> &PoolError {
        &self.error
    }

    /// Recover the instance
    pub fn into_inner(self) -> Pooled<T> {
        self.pooled
    }

    /// Discard the instance and keep the error
    pub fn into_error(self) -> PoolError {
        self.error
    }

    /// Split into error and instance
    pub fn into_parts(self) -> (PoolError, Pooled<T>) {
        (self.error, self.pooled)
    }
}

impl<T> From<ReleaseError<T>> for PoolError {
    fn from(rejected: ReleaseError<T>) -> Self {
        rejected.error
    }
}

impl<T> fmt::Debug for ReleaseError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReleaseError")
            .field("error", &self.error)
            .field("tag", &self.pooled.tag())
            .finish()
    }
}
