//! The growable array itself: element semantics over [`RawBuf`].
//!
//! `DynArr` keeps the classic three-field dynamic-array shape — base pointer,
//! live count, allocated capacity — and makes every capacity transition an
//! explicit call. Slots `[0, len)` are initialized; slots `[len, cap)` are
//! spare storage that is never read. Every operation preserves the relative
//! order of the elements that survive it.
//!
//! Removal comes in two flavors per operation: the plain form, where Rust's
//! own drop (or the returned value) is the destruction mechanism, and a
//! `_with` form that runs a caller-supplied finalizer on each element,
//! ascending, strictly before it is dropped in place. The finalizer takes
//! `&mut T` while the array is exclusively borrowed, so it can never re-enter
//! the array it is called from.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::error::CapacityError;
use crate::growth::{self, DEFAULT_INIT_CAP};
use crate::raw::RawBuf;

/// A growable contiguous array of `T` with explicit capacity control.
///
/// The `INIT_CAP` parameter is the seed capacity used by the first growth of
/// a zero-capacity array (the growth policy's configuration point). It is
/// fixed per array type at definition time; the default is
/// [`DEFAULT_INIT_CAP`].
///
/// A freshly constructed array owns no allocation: [`DynArr::new`] is a
/// `const fn` and the zero state (dangling pointer, length 0, capacity 0) is
/// fully usable. [`DynArr::free`] returns an array to exactly that state.
///
/// Capacity never shrinks on its own — removal operations leave it alone,
/// and only [`shrink_to_fit`](DynArr::shrink_to_fit) and
/// [`free`](DynArr::free) give memory back.
pub struct DynArr<T, const INIT_CAP: usize = { DEFAULT_INIT_CAP }> {
    pub(crate) buf: RawBuf<T>,
    pub(crate) len: usize,
}

impl<T, const INIT_CAP: usize> DynArr<T, INIT_CAP> {
    // Evaluated when a concrete array type is instantiated; a zero seed
    // would make the growth step from empty loop forever.
    const SEED_NONZERO: () = assert!(INIT_CAP > 0, "INIT_CAP must be nonzero");

    /// Creates an empty array in the zero state. Allocates nothing.
    pub const fn new() -> Self {
        let _ = Self::SEED_NONZERO;
        Self {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots. Zero-sized element types occupy no
    /// storage, so their capacity is reported as `usize::MAX`.
    pub fn capacity(&self) -> usize {
        if std::mem::size_of::<T>() == 0 {
            usize::MAX
        } else {
            self.buf.cap()
        }
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// Grows the allocation so at least `required` slots exist, applying the
    /// geometric growth policy. Fatal on overflow or allocation failure.
    fn grow_for(&mut self, required: usize) {
        let _ = Self::SEED_NONZERO;
        match growth::grown_capacity(self.buf.cap(), required, INIT_CAP) {
            Some(target) => self.buf.set_cap(target),
            None => panic!("capacity overflow"),
        }
    }

    /// Appends `value` at the end.
    ///
    /// Grows by the geometric policy when full: an empty array jumps to
    /// `INIT_CAP` slots, a full one gains half its capacity (rounded up).
    /// All prior elements keep their indices.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts the process if the allocator
    /// fails (see [`DynArr::try_push`] for the recoverable form).
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow_for(self.len + 1);
        }
        unsafe { self.buf.ptr().add(self.len).write(value) };
        self.len += 1;
    }

    /// Appends `value` at the end, reporting growth failure instead of
    /// aborting. The array is untouched on error and `value` is returned
    /// alongside the cause.
    pub fn try_push(&mut self, value: T) -> Result<(), (T, CapacityError)> {
        if self.len == self.capacity() {
            let target = match growth::grown_capacity(self.buf.cap(), self.len + 1, INIT_CAP) {
                Some(target) => target,
                None => return Err((value, CapacityError::Overflow)),
            };
            if let Err(err) = self.buf.try_set_cap(target) {
                return Err((value, err));
            }
        }
        unsafe { self.buf.ptr().add(self.len).write(value) };
        self.len += 1;
        Ok(())
    }

    /// Appends every element of `values` in order, by bitwise copy.
    ///
    /// Growth replicates the single-push step sequence until the total
    /// requirement fits, so a bulk append lands on the same capacity as the
    /// equivalent run of single pushes. An empty slice is a no-op.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts the process on allocation
    /// failure.
    pub fn extend_from_slice(&mut self, values: &[T])
    where
        T: Copy,
    {
        if values.is_empty() {
            return;
        }
        let required = match self.len.checked_add(values.len()) {
            Some(required) => required,
            None => panic!("capacity overflow"),
        };
        if required > self.capacity() {
            self.grow_for(required);
        }
        unsafe {
            ptr::copy_nonoverlapping(values.as_ptr(), self.buf.ptr().add(self.len), values.len());
        }
        self.len = required;
    }

    /// Grows the allocation to hold at least `min_capacity` slots.
    ///
    /// The target is absolute (not additional) and is honored exactly: no
    /// geometric growth is applied on top. Anything at or below the current
    /// capacity is a no-op — this never shrinks.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts the process on allocation
    /// failure.
    pub fn reserve(&mut self, min_capacity: usize) {
        if min_capacity > self.capacity() {
            self.buf.set_cap(min_capacity);
        }
    }

    /// Like [`reserve`](DynArr::reserve), but reports failure instead of
    /// aborting. The array is untouched on error.
    pub fn try_reserve(&mut self, min_capacity: usize) -> Result<(), CapacityError> {
        if min_capacity > self.capacity() {
            self.buf.try_set_cap(min_capacity)?;
        }
        Ok(())
    }

    /// Reallocates so capacity equals the live count exactly.
    ///
    /// With no live elements this releases the buffer entirely, leaving the
    /// array in the zero state — indistinguishable from a fresh one.
    pub fn shrink_to_fit(&mut self) {
        self.buf.set_cap(self.len);
    }

    /// Drops every element in ascending index order and resets the length
    /// to zero. Capacity is retained for reuse.
    ///
    /// The vacated slots are scrubbed to zero bytes after the drops run.
    pub fn clear(&mut self) {
        self.clear_with(|_| {});
    }

    /// [`clear`](DynArr::clear), running `finalize` on each element
    /// (ascending) strictly before it is dropped.
    pub fn clear_with(&mut self, mut finalize: impl FnMut(&mut T)) {
        let live = self.len;
        // Length goes to zero first so a panicking finalizer or drop leaks
        // the remainder instead of double-dropping it.
        self.len = 0;
        unsafe {
            finalize_slots(self.buf.ptr(), 0, live, &mut finalize);
            ptr::write_bytes(self.buf.ptr(), 0, live);
        }
    }

    /// Drops every element in ascending index order, releases the buffer,
    /// and resets the array to the zero state.
    ///
    /// Safe to call on an array that is already in the zero state; the
    /// array remains fully usable afterwards.
    pub fn free(&mut self) {
        self.free_with(|_| {});
    }

    /// [`free`](DynArr::free), running `finalize` on each element
    /// (ascending) strictly before it is dropped.
    pub fn free_with(&mut self, mut finalize: impl FnMut(&mut T)) {
        let live = self.len;
        self.len = 0;
        unsafe { finalize_slots(self.buf.ptr(), 0, live, &mut finalize) };
        self.buf.release();
    }

    /// Removes the element at `index` and returns it. Elements after it
    /// shift left by one; capacity is unchanged and the vacated tail slot
    /// keeps its stale bytes.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "remove index {index} out of range for length {}",
            self.len
        );
        unsafe {
            let slot = self.buf.ptr().add(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Removes the element at `index`, running `finalize` on it and then
    /// dropping it in place before the tail shifts left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove_with(&mut self, index: usize, finalize: impl FnOnce(&mut T)) {
        assert!(
            index < self.len,
            "remove index {index} out of range for length {}",
            self.len
        );
        let old_len = self.len;
        self.len = index;
        unsafe {
            let slot = self.buf.ptr().add(index);
            finalize(&mut *slot);
            ptr::drop_in_place(slot);
            ptr::copy(slot.add(1), slot, old_len - index - 1);
        }
        self.len = old_len - 1;
    }

    /// Removes the half-open range `[start, end)`, dropping each element in
    /// ascending order. Elements at `[end, len)` shift left to `start`;
    /// capacity is unchanged.
    ///
    /// An empty range (`start == end`) removes nothing, but `start` must
    /// still be a live index: `start == len()` is rejected even then.
    ///
    /// # Panics
    ///
    /// Panics if `start >= len()`, `end > len()`, or `start > end`.
    pub fn remove_range(&mut self, start: usize, end: usize) {
        self.remove_range_with(start, end, |_| {});
    }

    /// [`remove_range`](DynArr::remove_range), running `finalize` on each
    /// removed element (ascending) strictly before it is dropped.
    ///
    /// # Panics
    ///
    /// Panics if `start >= len()`, `end > len()`, or `start > end`.
    pub fn remove_range_with(&mut self, start: usize, end: usize, mut finalize: impl FnMut(&mut T)) {
        assert!(
            start < self.len && end <= self.len,
            "range [{start}, {end}) out of range for length {}",
            self.len
        );
        assert!(start <= end, "range start {start} exceeds end {end}");
        let old_len = self.len;
        self.len = start;
        unsafe {
            finalize_slots(self.buf.ptr(), start, end, &mut finalize);
            ptr::copy(
                self.buf.ptr().add(end),
                self.buf.ptr().add(start),
                old_len - end,
            );
        }
        self.len = start + (old_len - end);
    }
}

/// Runs `finalize` then `drop_in_place` on each slot in `[start, end)`,
/// ascending.
///
/// # Safety
///
/// Slots `[start, end)` must hold initialized elements, and the caller must
/// have already removed them from its live count so a panic mid-loop leaks
/// rather than double-drops.
unsafe fn finalize_slots<T, F: FnMut(&mut T)>(base: *mut T, start: usize, end: usize, finalize: &mut F) {
    for i in start..end {
        let slot = base.add(i);
        finalize(&mut *slot);
        ptr::drop_in_place(slot);
    }
}

impl<T, const INIT_CAP: usize> Drop for DynArr<T, INIT_CAP> {
    fn drop(&mut self) {
        self.free();
    }
}

impl<T, const INIT_CAP: usize> Default for DynArr<T, INIT_CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const INIT_CAP: usize> Deref for DynArr<T, INIT_CAP> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const INIT_CAP: usize> DerefMut for DynArr<T, INIT_CAP> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug, const INIT_CAP: usize> fmt::Debug for DynArr<T, INIT_CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T, const INIT_CAP: usize> Extend<T> for DynArr<T, INIT_CAP> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if lower > 0 {
            if let Some(required) = self.len.checked_add(lower) {
                if required > self.capacity() {
                    self.grow_for(required);
                }
            }
        }
        for value in iter {
            self.push(value);
        }
    }
}

// The array owns its elements outright, so cross-thread movement and shared
// access follow the element type. There is no internal synchronization;
// shared mutation across threads needs external mutual exclusion like any
// `&mut` access.
unsafe impl<T: Send, const INIT_CAP: usize> Send for DynArr<T, INIT_CAP> {}
unsafe impl<T: Sync, const INIT_CAP: usize> Sync for DynArr<T, INIT_CAP> {}
