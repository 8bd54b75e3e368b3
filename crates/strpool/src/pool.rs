//! The chunk manager: owns the chunks, applies the placement policy.

use std::ffi::CStr;

use strpool_log::{debug, trace};

use crate::chunk::Chunk;
use crate::policy::PlacementPolicy;
use crate::stored::StoredStr;

/// Fixed-capacity chunked pool for immutable, null-terminated strings.
///
/// Every `store` call copies its input into one of the pool's chunks,
/// appends an explicit `0` terminator, and returns a [`StoredStr`] handle
/// whose address stays valid for the pool's entire lifetime. Chunks are
/// append-only: existing data is never moved, compacted, or freed before
/// the pool itself is dropped.
///
/// The chunk that receives each string is chosen by the
/// [`PlacementPolicy`] fixed at construction; when no existing chunk has
/// room, a fresh chunk is appended. The single caller-visible failure is
/// an input that can never fit: `len + 1 > chunk_size` yields `None`,
/// deterministically, for every retry.
///
/// Single-threaded by design. `store` takes `&mut self` and the pool is
/// meant for single-owner bulk interning phases; there is no internal
/// synchronization.
///
/// # Examples
///
/// ```
/// use strpool::{PlacementPolicy, StringPool};
///
/// let mut pool = StringPool::new(PlacementPolicy::Conservative, 4096);
///
/// let hello = pool.store("Hello World!").unwrap();
/// unsafe {
///     assert_eq!(hello.as_str(), "Hello World!");
///     assert_eq!(hello.as_bytes_with_nul().last(), Some(&0));
/// }
///
/// assert_eq!(pool.num_chunks(), 1);
/// assert_eq!(pool.policy_name(), "Conservative");
/// ```
pub struct StringPool {
    /// Append-only; chunks are never reordered or removed.
    chunks: Vec<Chunk>,
    /// Capacity of every chunk, fixed for the pool's lifetime.
    chunk_size: usize,
    policy: PlacementPolicy,
}

impl StringPool {
    /// Creates a pool with the given policy and per-chunk capacity, eagerly
    /// allocating the first chunk.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero, or if the initial chunk cannot be
    /// allocated.
    #[must_use]
    pub fn new(policy: PlacementPolicy, chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "chunk_size must be non-zero");

        let first = Chunk::new(chunk_size).expect("failed to allocate initial chunk");

        StringPool {
            chunks: vec![first],
            chunk_size,
            policy,
        }
    }

    /// Stores a copy of `data` followed by a `0` terminator.
    ///
    /// Returns `None` when `data.len() + 1` exceeds the configured chunk
    /// capacity; such an input can never fit in this pool and retrying is
    /// pointless. Chunk exhaustion is handled internally by appending a
    /// fresh chunk and is never visible to the caller.
    ///
    /// `data` may contain `0` bytes; they are stored verbatim (see
    /// [`StoredStr::as_c_str`] for how C-string views treat them).
    pub fn store_bytes(&mut self, data: &[u8]) -> Option<StoredStr> {
        let total = data.len() + 1;
        if total > self.chunk_size {
            debug!(
                "rejecting {} byte string: exceeds chunk capacity {}",
                data.len(),
                self.chunk_size
            );
            return None;
        }

        let idx = match self.policy.place(total, &self.chunks) {
            Some(idx) => idx,
            None => self.grow(),
        };

        let ptr = self.chunks[idx].copy_in(data);
        Some(StoredStr::new(ptr, data.len()))
    }

    /// Stores a copy of `s` followed by a `0` terminator.
    ///
    /// Handles from this entry point are always valid UTF-8, so
    /// [`StoredStr::as_str`] applies to them.
    pub fn store(&mut self, s: &str) -> Option<StoredStr> {
        self.store_bytes(s.as_bytes())
    }

    /// Stores a copy of a C string (terminator recomputed, not copied).
    pub fn store_c_str(&mut self, s: &CStr) -> Option<StoredStr> {
        self.store_bytes(s.to_bytes())
    }

    /// Appends a fresh chunk and returns its index.
    fn grow(&mut self) -> usize {
        // The size gate in store_bytes passed, so a fresh chunk always fits
        // the pending reservation; growth cannot fail other than by OOM.
        let chunk = Chunk::new(self.chunk_size).expect("failed to allocate chunk");
        self.chunks.push(chunk);

        trace!(
            "appended chunk {} ({} bytes, policy {})",
            self.chunks.len(),
            self.chunk_size,
            self.policy.name()
        );
        self.chunks.len() - 1
    }

    /// Number of chunks allocated so far. At least 1.
    #[must_use]
    pub fn num_chunks(&self) -> usize {
        self.chunks.len()
    }

    /// Upper bound on reserved memory: chunk count times fixed chunk size
    /// plus per-chunk bookkeeping. Not the bytes actually occupied.
    #[must_use]
    pub fn total_allocated(&self) -> usize {
        self.num_chunks() * (self.chunk_size + std::mem::size_of::<Chunk>())
    }

    /// Name of the placement policy fixed at construction.
    #[must_use]
    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Per-chunk capacity fixed at construction.
    #[must_use]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}
