//! Fixed-capacity chunk with a bump cursor.
//!
//! A [`Chunk`] owns a raw heap block of exactly `capacity` bytes. Copies go
//! in at the cursor and the cursor only ever advances; nothing is freed
//! until the chunk itself is dropped. The block's address is fixed for the
//! chunk's lifetime, so moving the `Chunk` value around (for example when
//! the pool's chunk vector reallocates) never invalidates pointers handed
//! out earlier. That address stability is what the whole pool is built on.

use std::alloc::{self, Layout};
use std::ptr::NonNull;

/// Error type for chunk buffer allocation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkAllocError;

impl std::fmt::Display for ChunkAllocError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "chunk allocation failed: out of memory")
    }
}

impl std::error::Error for ChunkAllocError {}

/// A fixed-size heap buffer with a monotonically advancing cursor.
///
/// `Chunk` is a trusted low-level primitive: [`Chunk::copy_in`] does not
/// validate capacity in release builds. The pool checks
/// [`Chunk::remaining_capacity`] before every copy.
pub(crate) struct Chunk {
    /// Start of the owned block. Never changes after allocation.
    buf: NonNull<u8>,
    /// Offset of the next free byte. `0 <= cursor <= capacity`.
    cursor: usize,
    /// Total size of the block in bytes.
    capacity: usize,
}

impl Chunk {
    /// Allocates a new, empty chunk of `capacity` bytes.
    pub(crate) fn new(capacity: usize) -> Result<Self, ChunkAllocError> {
        let layout = Layout::array::<u8>(capacity).map_err(|_| ChunkAllocError)?;

        // SAFETY: capacity is non-zero (enforced by the pool constructor)
        // and the layout is valid for a byte array of that size.
        let buf = unsafe { alloc::alloc(layout) };
        let buf = NonNull::new(buf).ok_or(ChunkAllocError)?;

        Ok(Chunk {
            buf,
            cursor: 0,
            capacity,
        })
    }

    /// Bytes not yet occupied.
    pub(crate) fn remaining_capacity(&self) -> usize {
        self.capacity - self.cursor
    }

    /// Copies `data` in at the cursor, writes a `0` terminator after it,
    /// and advances the cursor past both. Returns the address of the copy,
    /// stable for the chunk's lifetime.
    ///
    /// The caller must have checked `data.len() + 1 <=
    /// remaining_capacity()`; release builds do not re-validate.
    pub(crate) fn copy_in(&mut self, data: &[u8]) -> NonNull<u8> {
        let total = data.len() + 1;
        debug_assert!(total <= self.remaining_capacity());

        // SAFETY: the capacity check above guarantees cursor + total stays
        // within the block, the source slice is valid for data.len() bytes,
        // and freshly reserved chunk memory cannot overlap the source.
        unsafe {
            let dst = self.buf.as_ptr().add(self.cursor);
            std::ptr::copy_nonoverlapping(data.as_ptr(), dst, data.len());
            *dst.add(data.len()) = 0;
            self.cursor += total;
            NonNull::new_unchecked(dst)
        }
    }
}

impl Drop for Chunk {
    fn drop(&mut self) {
        // SAFETY: buf was allocated with exactly this layout in Chunk::new
        // and is freed only once.
        unsafe {
            let layout = Layout::array::<u8>(self.capacity).unwrap_unchecked();
            alloc::dealloc(self.buf.as_ptr(), layout);
        }
    }
}
