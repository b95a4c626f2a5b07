use core::{
    mem,
    ptr::NonNull,
};

use std::alloc::{Layout, handle_alloc_error};

use crate::raw_alloc::{HEAP, RawAlloc};

/// Move-only owner of `capacity` uninitialized element slots.
///
/// The buffer tracks storage, never elements: dropping it releases the
/// allocation without running any element destructor. Slots past whatever
/// the caller has initialized hold unspecified bytes.
pub struct RawBuf<T> {
    data: NonNull<T>,
    capacity: usize,
}

impl<T> RawBuf<T> {

    /// An empty buffer. No allocation, capacity 0, dangling pointer.
    pub const fn new() -> Self {
        Self {
            data: NonNull::dangling(),
            capacity: 0,
        }
    }

    /// Allocates storage for exactly `capacity` elements, all uninitialized.
    ///
    /// A capacity of 0 allocates nothing. Allocation failure is fatal and
    /// reported through [`handle_alloc_error`]. Zero-sized element types are
    /// unsupported and panic.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(size_of::<T>() != 0, "zero sized element types are not supported");
        if capacity == 0 {
            return Self::new()
        }
        let layout = match Layout::array::<T>(capacity) {
            Ok(r) => r,
            Err(_) => panic!("capacity overflow"),
        };
        let data = match unsafe { HEAP.alloc_array(capacity) } {
            Some(r) => r,
            None => handle_alloc_error(layout),
        };
        Self {
            data,
            capacity,
        }
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_ptr()
    }

    #[inline(always)]
    pub fn as_non_null(&self) -> NonNull<T> {
        self.data
    }

    /// Address of slot `index` without a bounds check.
    ///
    /// Caller guarantees `index < capacity()`. The slot may be uninitialized;
    /// this is an address, not a reference.
    #[inline(always)]
    pub unsafe fn ptr_at(&self, index: usize) -> NonNull<T> {
        debug_assert!(index < self.capacity);
        unsafe { self.data.add(index) }
    }

    /// Exchanges owned storage with `other` in O(1).
    #[inline(always)]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other)
    }
}

impl<T> Default for RawBuf<T> {

    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawBuf<T> {

    fn drop(&mut self) {
        if self.capacity != 0 {
            unsafe { HEAP.free_array(self.data, self.capacity) }
        }
    }
}

unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}
