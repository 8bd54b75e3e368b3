//! Factory for creating identically configured pools.
//!
//! `PoolFactory` is a cheap `(policy, chunk_size)` pair for call sites that
//! spin up many pools with the same configuration, such as one pool per
//! parse unit. There is no pooling or reuse: every call to
//! [`PoolFactory::create_pool`] builds a fresh pool, and dropping a pool
//! reclaims all of its memory at once.

use crate::policy::PlacementPolicy;
use crate::pool::StringPool;

/// Configuration stamp for [`StringPool`] instances.
///
/// # Examples
///
/// ```
/// use strpool::{PlacementPolicy, PoolFactory};
///
/// let factory = PoolFactory::new(PlacementPolicy::Balanced, 4096);
///
/// let mut pool = factory.create_pool();
/// assert_eq!(pool.policy_name(), "Balanced");
/// assert_eq!(pool.chunk_size(), 4096);
///
/// let stored = pool.store("per-phase string").unwrap();
/// unsafe {
///     assert_eq!(stored.as_str(), "per-phase string");
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PoolFactory {
    policy: PlacementPolicy,
    chunk_size: usize,
}

impl PoolFactory {
    /// Creates a factory that stamps out pools with the given policy and
    /// per-chunk capacity.
    #[must_use]
    pub const fn new(policy: PlacementPolicy, chunk_size: usize) -> Self {
        Self { policy, chunk_size }
    }

    /// Builds a fresh pool. Never reused from any cache.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`StringPool::new`].
    #[must_use]
    pub fn create_pool(&self) -> StringPool {
        StringPool::new(self.policy, self.chunk_size)
    }
}
