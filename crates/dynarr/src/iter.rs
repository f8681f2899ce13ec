//! Consuming iteration: a single forward traversal that takes ownership.
//!
//! Borrowed iteration comes for free through the slice deref; this module
//! only adds the by-value form. The iterator is deliberately forward-only —
//! there is no `DoubleEndedIterator` — and dropping it mid-way drops the
//! unvisited elements (ascending) before the buffer is released.

use std::mem::{self, ManuallyDrop};

use crate::array::DynArr;
use crate::growth::DEFAULT_INIT_CAP;
use crate::raw::RawBuf;

/// By-value iterator over a [`DynArr`], front to back.
pub struct IntoIter<T, const INIT_CAP: usize = { DEFAULT_INIT_CAP }> {
    buf: RawBuf<T>,
    next: usize,
    end: usize,
}

impl<T, const INIT_CAP: usize> Iterator for IntoIter<T, INIT_CAP> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.next == self.end {
            return None;
        }
        let value = unsafe { self.buf.ptr().add(self.next).read() };
        self.next += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl<T, const INIT_CAP: usize> ExactSizeIterator for IntoIter<T, INIT_CAP> {}

impl<T, const INIT_CAP: usize> Drop for IntoIter<T, INIT_CAP> {
    fn drop(&mut self) {
        // Unvisited elements still own their contents; the buffer itself is
        // released by RawBuf's own drop.
        for i in self.next..self.end {
            unsafe { std::ptr::drop_in_place(self.buf.ptr().add(i)) };
        }
    }
}

impl<T, const INIT_CAP: usize> IntoIterator for DynArr<T, INIT_CAP> {
    type Item = T;
    type IntoIter = IntoIter<T, INIT_CAP>;

    fn into_iter(self) -> IntoIter<T, INIT_CAP> {
        // Disarm the array's drop; the iterator takes over both the buffer
        // and the element lifetimes.
        let mut this = ManuallyDrop::new(self);
        IntoIter {
            buf: mem::replace(&mut this.buf, RawBuf::new()),
            next: 0,
            end: this.len,
        }
    }
}

impl<'a, T, const INIT_CAP: usize> IntoIterator for &'a DynArr<T, INIT_CAP> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, const INIT_CAP: usize> IntoIterator for &'a mut DynArr<T, INIT_CAP> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

unsafe impl<T: Send, const INIT_CAP: usize> Send for IntoIter<T, INIT_CAP> {}
unsafe impl<T: Sync, const INIT_CAP: usize> Sync for IntoIter<T, INIT_CAP> {}
