//! Placement policies: which chunk receives the next string.
//!
//! All policies share one fallback rule, enforced by the pool rather than
//! here: when [`PlacementPolicy::place`] returns `None`, the pool appends a
//! fresh chunk and stores there. The policies differ only in where they
//! look first, and every one of them is first-fit in its scan order; none
//! considers best-fit or leftover-space minimization.

use crate::chunk::Chunk;

/// Strategy for choosing the chunk that receives a new string.
///
/// Fixed at pool construction.
///
/// | Policy | Search order |
/// |---|---|
/// | [`Greedy`](PlacementPolicy::Greedy) | most recent chunk only |
/// | [`Balanced`](PlacementPolicy::Balanced) | most recent chunk, then reverse first-fit scan |
/// | [`Conservative`](PlacementPolicy::Conservative) | reverse first-fit scan |
///
/// `Balanced` and `Conservative` are observably equivalent: the reverse
/// scan visits the most recent chunk first anyway, so the fast path only
/// skips a step of the same search. Both names are kept; callers pick
/// whichever reads better at the call site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlacementPolicy {
    /// O(1) placement. Only the most recently appended chunk is considered;
    /// leftover space in older chunks is never reused.
    #[default]
    Greedy,
    /// Reverse first-fit with a fast path for the most recent chunk.
    Balanced,
    /// Plain reverse first-fit over all chunks.
    Conservative,
}

impl PlacementPolicy {
    /// Diagnostic name of this policy.
    pub const fn name(self) -> &'static str {
        match self {
            PlacementPolicy::Greedy => "Greedy",
            PlacementPolicy::Balanced => "Balanced",
            PlacementPolicy::Conservative => "Conservative",
        }
    }

    /// Picks the chunk that should receive a `total`-byte reservation
    /// (payload plus terminator). Returns `None` when no existing chunk
    /// has room, in which case the pool appends a fresh chunk.
    pub(crate) fn place(self, total: usize, chunks: &[Chunk]) -> Option<usize> {
        match self {
            PlacementPolicy::Greedy => {
                let last = chunks.len().checked_sub(1)?;
                (chunks[last].remaining_capacity() >= total).then_some(last)
            }
            PlacementPolicy::Balanced => {
                if let Some(last) = chunks.last()
                    && last.remaining_capacity() >= total
                {
                    return Some(chunks.len() - 1);
                }
                first_fit_rev(total, chunks)
            }
            PlacementPolicy::Conservative => first_fit_rev(total, chunks),
        }
    }
}

/// First-fit scan from the most recently appended chunk back to the first.
fn first_fit_rev(total: usize, chunks: &[Chunk]) -> Option<usize> {
    chunks
        .iter()
        .enumerate()
        .rev()
        .find(|(_, chunk)| chunk.remaining_capacity() >= total)
        .map(|(idx, _)| idx)
}
