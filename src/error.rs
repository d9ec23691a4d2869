use std::{error, fmt};

/// Unrecoverable allocator failures.
///
/// Neither variant can be retried or repaired. They are surfaced as
/// values instead of aborting in place so the host can decide how to go
/// down: log, dump stats, or abort on the spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
    /// The OS could not satisfy a request for `bytes` of fresh pages.
    MapFailed { bytes: usize },
    /// A free-list operation was asked to carve a block at `addr`, but
    /// no free node starts there. The heap is corrupt, typically from a
    /// double release or from releasing an address the allocator never
    /// handed out.
    CorruptFreeList { addr: usize },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MapFailed { bytes } => {
                write!(f, "the OS could not map {bytes} bytes of pages")
            }
            Self::CorruptFreeList { addr } => {
                write!(f, "no free block starts at {addr:#x}, the free list is corrupt")
            }
        }
    }
}

impl error::Error for AllocError {}
