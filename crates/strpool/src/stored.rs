//! Handle to a string stored in a pool.

use std::ffi::CStr;
use std::ptr::NonNull;

/// A stable handle to one stored string.
///
/// `StoredStr` is a thin `Copy` value: the address of the copy inside a
/// chunk plus the payload length (terminator excluded). The address never
/// moves for the owning [`StringPool`](crate::StringPool)'s lifetime, no
/// matter how many strings are stored after it.
///
/// Equality and hashing are by identity (which copy this is), not by
/// content: two separate `store` calls with equal input produce distinct,
/// unequal handles because the pool never deduplicates.
///
/// # Safety
///
/// The read accessors are `unsafe` because nothing ties a handle's
/// lifetime to its pool: the caller must guarantee the pool that produced
/// the handle is still alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StoredStr {
    ptr: NonNull<u8>,
    len: usize,
}

impl StoredStr {
    pub(crate) fn new(ptr: NonNull<u8>, len: usize) -> Self {
        Self { ptr, len }
    }

    /// Address of the first payload byte.
    #[must_use]
    pub const fn as_ptr(self) -> *const u8 {
        self.ptr.as_ptr()
    }

    /// Payload length in bytes, terminator excluded.
    #[must_use]
    pub const fn len(self) -> usize {
        self.len
    }

    /// True for the empty string (which still occupies one terminator byte).
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// The stored payload, without the terminator.
    ///
    /// # Safety
    ///
    /// The pool that produced this handle must still be alive; the returned
    /// lifetime is unbounded.
    #[must_use]
    pub unsafe fn as_bytes<'a>(self) -> &'a [u8] {
        // SAFETY: the pool wrote len payload bytes at ptr and never frees
        // or moves them while it is alive, which the caller guarantees.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// The stored payload including the trailing `0` byte.
    ///
    /// # Safety
    ///
    /// Same contract as [`StoredStr::as_bytes`].
    #[must_use]
    pub unsafe fn as_bytes_with_nul<'a>(self) -> &'a [u8] {
        // SAFETY: the pool reserved and wrote len + 1 bytes at ptr.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len + 1) }
    }

    /// The stored string as a [`CStr`].
    ///
    /// If the payload itself contained `0` bytes, the result ends at the
    /// first one, exactly as a C consumer would see it.
    ///
    /// # Safety
    ///
    /// Same contract as [`StoredStr::as_bytes`].
    #[must_use]
    pub unsafe fn as_c_str<'a>(self) -> &'a CStr {
        // SAFETY: the chunk wrote a 0 terminator after the payload, so the
        // region starting at ptr is a valid C string while the pool lives.
        unsafe { CStr::from_ptr(self.ptr.as_ptr().cast()) }
    }

    /// The stored payload as `&str`.
    ///
    /// # Safety
    ///
    /// Same contract as [`StoredStr::as_bytes`], and the payload must be
    /// valid UTF-8 (always true for handles returned by
    /// [`StringPool::store`](crate::StringPool::store)).
    #[must_use]
    pub unsafe fn as_str<'a>(self) -> &'a str {
        // SAFETY: bytes are valid per as_bytes; UTF-8 validity is the
        // caller's obligation.
        unsafe { std::str::from_utf8_unchecked(self.as_bytes()) }
    }
}

#[cfg(test)]
mod tests {
    use crate::{PlacementPolicy, StringPool};

    #[test]
    fn accessors_agree_on_the_same_bytes() {
        let mut pool = StringPool::new(PlacementPolicy::Greedy, 64);
        let stored = pool.store("hello").unwrap();

        assert_eq!(stored.len(), 5);
        assert!(!stored.is_empty());

        unsafe {
            assert_eq!(stored.as_bytes(), b"hello");
            assert_eq!(stored.as_bytes_with_nul(), b"hello\0");
            assert_eq!(stored.as_c_str().to_bytes(), b"hello");
            assert_eq!(stored.as_str(), "hello");
        }
    }

    #[test]
    fn empty_string_handle() {
        let mut pool = StringPool::new(PlacementPolicy::Greedy, 64);
        let stored = pool.store("").unwrap();

        assert_eq!(stored.len(), 0);
        assert!(stored.is_empty());
        unsafe {
            assert_eq!(stored.as_bytes(), b"");
            assert_eq!(stored.as_bytes_with_nul(), b"\0");
        }
    }

    #[test]
    fn handles_are_identity_not_content() {
        let mut pool = StringPool::new(PlacementPolicy::Greedy, 64);

        let a = pool.store("same").unwrap();
        let b = pool.store("same").unwrap();

        assert_ne!(a, b);
        unsafe {
            assert_eq!(a.as_str(), b.as_str());
        }
    }

    #[test]
    fn interior_nul_truncates_the_c_view_only() {
        let mut pool = StringPool::new(PlacementPolicy::Greedy, 64);
        let stored = pool.store_bytes(b"ab\0cd").unwrap();

        unsafe {
            assert_eq!(stored.as_bytes(), b"ab\0cd");
            assert_eq!(stored.as_c_str().to_bytes(), b"ab");
        }
    }

    #[test]
    fn handle_is_copy() {
        let mut pool = StringPool::new(PlacementPolicy::Greedy, 64);
        let a = pool.store("copy").unwrap();
        let b = a;

        assert_eq!(a, b);
        assert_eq!(a.as_ptr(), b.as_ptr());
    }
}
