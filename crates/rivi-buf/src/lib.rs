//! Exclusive-ownership raw heap arrays.
//!
//! [`RawBuf`] owns uninitialized storage for a fixed number of elements and
//! releases it exactly once. Element lifecycle is the caller's business:
//! nothing here ever runs an element destructor.

mod raw_alloc;
mod raw_buf;


pub use raw_alloc::{Heap, HEAP, RawAlloc};
pub use raw_buf::RawBuf;
