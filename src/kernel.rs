use std::ptr::NonNull;

use log::debug;

use crate::error::AllocError;

/// Virtual memory page size, in bytes. The allocator and the OS boundary
/// share this constant: every span we request or return is a whole
/// number of these pages.
pub(crate) const PAGE_SIZE: usize = 4096;

/// This trait provides an abstraction to handle low level memory
/// operations and syscalls. The allocator's view of memory has nothing
/// to do with the concrete APIs offered by each kernel, so each platform
/// implements it behind a cfg gate.
trait PlatformMemory {
    /// Requests a fresh page-aligned, zero-filled, read-write span of
    /// `len` bytes. Returns `None` if the underlying syscall fails.
    unsafe fn request_pages(len: usize) -> Option<NonNull<u8>>;

    /// Returns the span of `len` bytes starting at `addr` back to the
    /// kernel. Must receive the exact pair handed out by
    /// [`PlatformMemory::request_pages`].
    unsafe fn return_pages(addr: *mut u8, len: usize);
}

/// Unit handle the platform modules hang their implementations on.
struct Kernel;

/// Maps `len` bytes of fresh, zeroed virtual memory. `len` must be a
/// multiple of [`PAGE_SIZE`].
pub(crate) fn map(len: usize) -> Result<NonNull<u8>, AllocError> {
    let addr = unsafe { Kernel::request_pages(len) };

    match addr {
        Some(addr) => {
            debug!("mapped {len} bytes at {addr:p}");
            Ok(addr)
        }
        None => Err(AllocError::MapFailed { bytes: len }),
    }
}

/// Unmaps a span previously returned by [`map`].
///
/// SAFETY: `addr` and `len` must be the exact pair [`map`] handed out,
/// and no live reference into the span may remain.
pub(crate) unsafe fn unmap(addr: NonNull<u8>, len: usize) {
    debug!("unmapping {len} bytes at {addr:p}");
    unsafe { Kernel::return_pages(addr.as_ptr(), len) }
}

#[cfg(unix)]
mod unix {
    use super::{Kernel, PlatformMemory};

    use libc::{mmap, munmap, off_t, size_t};

    use std::{
        os::raw::{c_int, c_void},
        ptr::NonNull,
    };

    impl PlatformMemory for Kernel {
        unsafe fn request_pages(len: usize) -> Option<NonNull<u8>> {
            // mmap parameters.
            const ADDR: *mut c_void = std::ptr::null_mut::<c_void>();
            // Read-write only memory, never backed by a file.
            const PROT: c_int = libc::PROT_READ | libc::PROT_WRITE;
            const FLAGS: c_int = libc::MAP_PRIVATE | libc::MAP_ANONYMOUS;
            const FD: c_int = -1;
            const OFFSET: off_t = 0;

            unsafe {
                let addr = mmap(ADDR, len as size_t, PROT, FLAGS, FD, OFFSET);

                match addr {
                    libc::MAP_FAILED => None,
                    addr => Some(NonNull::new_unchecked(addr).cast::<u8>()),
                }
            }
        }

        unsafe fn return_pages(addr: *mut u8, len: usize) {
            unsafe {
                munmap(addr as *mut c_void, len as size_t);
            }
        }
    }
}

#[cfg(windows)]
mod windows {
    use super::{Kernel, PlatformMemory};

    use std::{os::raw::c_void, ptr::NonNull};

    use windows::Win32::System::Memory;

    impl PlatformMemory for Kernel {
        unsafe fn request_pages(len: usize) -> Option<NonNull<u8>> {
            // Read-write only; committed pages arrive zeroed.
            let protection = Memory::PAGE_READWRITE;
            let flags = Memory::MEM_RESERVE | Memory::MEM_COMMIT;

            unsafe {
                let addr = Memory::VirtualAlloc(None, len, flags, protection);

                NonNull::new(addr.cast())
            }
        }

        unsafe fn return_pages(addr: *mut u8, _len: usize) {
            unsafe {
                let _ = Memory::VirtualFree(addr as *mut c_void, 0, Memory::MEM_RELEASE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapped_pages_are_zeroed_and_writable() {
        let addr = map(PAGE_SIZE).unwrap();

        unsafe {
            for offset in 0..PAGE_SIZE {
                assert_eq!(*addr.as_ptr().add(offset), 0);
            }

            addr.as_ptr().write(0xAB);
            assert_eq!(*addr.as_ptr(), 0xAB);

            unmap(addr, PAGE_SIZE);
        }
    }
}
