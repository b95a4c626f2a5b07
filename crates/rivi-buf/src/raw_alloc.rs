use core::ptr::NonNull;

use std::alloc::{self, Layout};

/// Raw allocation seam beneath [`RawBuf`](crate::RawBuf).
///
/// Implementations hand out uninitialized storage for arrays of `T` and take
/// it back with the same count.
pub trait RawAlloc {

    /// Allocates uninitialized storage for exactly `count` elements.
    ///
    /// Returns `None` on allocator failure or when the request is zero bytes.
    unsafe fn alloc_array<T>(&self, count: usize) -> Option<NonNull<T>>;

    /// Releases storage previously returned by [`alloc_array`](Self::alloc_array)
    /// with the same `count`.
    unsafe fn free_array<T>(&self, ptr: NonNull<T>, count: usize);
}

/// The process-wide heap.
pub struct Heap;

pub static HEAP: Heap = Heap;

impl RawAlloc for Heap {

    unsafe fn alloc_array<T>(&self, count: usize) -> Option<NonNull<T>> {
        let layout = Layout::array::<T>(count).ok()?;
        if layout.size() == 0 {
            return None
        }
        let ptr = unsafe { alloc::alloc(layout) };
        NonNull::new(ptr.cast())
    }

    unsafe fn free_array<T>(&self, ptr: NonNull<T>, count: usize) {
        let layout = match Layout::array::<T>(count) {
            Ok(r) => r,
            Err(_) => return,
        };
        if layout.size() == 0 {
            return
        }
        unsafe { alloc::dealloc(ptr.as_ptr().cast(), layout) }
    }
}
