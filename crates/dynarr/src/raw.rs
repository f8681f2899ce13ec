//! Owned raw buffer: allocation, exact reallocation, release.
//!
//! All allocator-facing `unsafe` in the crate lives here. `RawBuf` tracks a
//! pointer and a slot count, nothing else — element liveness is the caller's
//! business (`array.rs` layers that on top). The zero state is a dangling,
//! well-aligned pointer with capacity 0; no allocation is ever made for it,
//! so constructing one is `const` and free.
//!
//! Zero-sized element types never need storage: every resize request on a
//! ZST buffer is a no-op and the array layer reports unbounded capacity.

use std::alloc::{self, handle_alloc_error, Layout};
use std::ptr::NonNull;

use crate::error::CapacityError;

/// An owned allocation of `cap` slots of `T` with no notion of which slots
/// are live.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
}

impl<T> RawBuf<T> {
    const IS_ZST: bool = std::mem::size_of::<T>() == 0;

    /// The unallocated zero state: dangling pointer, capacity 0.
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
        }
    }

    /// Base pointer of the allocation. Dangling (but aligned) at capacity 0.
    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Allocated slot count. Always 0 for ZST elements, which never allocate.
    pub(crate) fn cap(&self) -> usize {
        self.cap
    }

    /// Reallocates to exactly `new_cap` slots, preserving the byte contents
    /// of the slots that remain. `new_cap == 0` releases the allocation and
    /// returns to the zero state.
    ///
    /// On failure the buffer is untouched and an error is returned; the
    /// fatal-path wrapper is [`RawBuf::set_cap`].
    pub(crate) fn try_set_cap(&mut self, new_cap: usize) -> Result<(), CapacityError> {
        if Self::IS_ZST || new_cap == self.cap {
            return Ok(());
        }
        if new_cap == 0 {
            self.release();
            return Ok(());
        }
        let new_layout = Layout::array::<T>(new_cap).map_err(|_| CapacityError::Overflow)?;
        let raw = if self.cap == 0 {
            unsafe { alloc::alloc(new_layout) }
        } else {
            let old_layout = match Layout::array::<T>(self.cap) {
                Ok(layout) => layout,
                // The current capacity was laid out once already.
                Err(_) => unreachable!("live capacity has a valid layout"),
            };
            unsafe { alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()) }
        };
        match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => {
                self.ptr = ptr;
                self.cap = new_cap;
                Ok(())
            }
            None => Err(CapacityError::AllocFailed {
                bytes: new_layout.size(),
            }),
        }
    }

    /// Fatal-path resize: capacity overflow panics, allocation failure
    /// aborts the process through [`handle_alloc_error`].
    pub(crate) fn set_cap(&mut self, new_cap: usize) {
        match self.try_set_cap(new_cap) {
            Ok(()) => {}
            Err(CapacityError::Overflow) => panic!("capacity overflow"),
            Err(CapacityError::AllocFailed { .. }) => match Layout::array::<T>(new_cap) {
                Ok(layout) => handle_alloc_error(layout),
                Err(_) => panic!("capacity overflow"),
            },
        }
    }

    /// Releases the allocation (if any) and resets to the zero state.
    /// Idempotent: releasing an already-zero buffer does nothing.
    pub(crate) fn release(&mut self) {
        if !Self::IS_ZST && self.cap != 0 {
            let layout = match Layout::array::<T>(self.cap) {
                Ok(layout) => layout,
                Err(_) => unreachable!("live capacity has a valid layout"),
            };
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) };
        }
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        self.release();
    }
}
