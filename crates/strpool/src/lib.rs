//! Fixed-capacity chunked pool for interning C-style strings.
//!
//! `strpool` avoids per-string heap allocation: hand the pool a string and
//! it returns a handle to an internally owned, null-terminated copy that
//! stays valid for the pool's entire lifetime. Storage grows by appending
//! fixed-size chunks; which chunk receives each string is decided by a
//! [`PlacementPolicy`] fixed at construction.
//!
//! - [`StringPool`]: owns the chunks, exposes `store` and introspection.
//! - [`PlacementPolicy`]: Greedy / Balanced / Conservative chunk selection.
//! - [`StoredStr`]: copyable handle to one stored string.
//! - [`PoolFactory`]: stamps out identically configured pools.
//!
//! Out of scope by design: freeing or deduplicating individual strings,
//! thread-safety, and inputs larger than one chunk (those are rejected up
//! front with `None`).
//!
//! # Example
//!
//! ```
//! use strpool::{PlacementPolicy, StringPool};
//!
//! let mut pool = StringPool::new(PlacementPolicy::Conservative, 4096);
//!
//! let a = pool.store("Hello World!").unwrap();
//! let b = pool.store("Hello World!").unwrap();
//!
//! unsafe {
//!     // Two copies: the pool never deduplicates.
//!     assert_eq!(a.as_str(), b.as_str());
//!     assert_ne!(a.as_ptr(), b.as_ptr());
//! }
//! ```

mod chunk;
mod factory;
mod policy;
mod pool;
mod stored;

pub use chunk::ChunkAllocError;
pub use factory::PoolFactory;
pub use policy::PlacementPolicy;
pub use pool::StringPool;
pub use stored::StoredStr;
