/// Growth strategy for [`DynArray`](crate::DynArray).
///
/// `grow` decides the capacity to allocate when storage must hold at least
/// `required` elements. Returns `None` when `required <= current`.
pub trait CapacityPolicy {
    fn grow(current: usize, required: usize) -> Option<usize>;
}

/// Doubles capacity on growth: `max(required, 2 * current)`.
///
/// Growing from capacity 0 for a single element yields 1. Amortizes
/// reallocation to O(1) per append; a run of N appends reallocates at most
/// ceil(log2 N) + 1 times.
pub struct Doubling {}

impl CapacityPolicy for Doubling {

    #[inline]
    fn grow(current: usize, required: usize) -> Option<usize> {
        if required <= current { None }
        else { Some(required.max(current.saturating_mul(2))) }
    }
}

/// Grows to exactly the required capacity. Never over-allocates.
pub struct Tight {}

impl CapacityPolicy for Tight {

    #[inline]
    fn grow(current: usize, required: usize) -> Option<usize> {
        if required <= current { None }
        else { Some(required) }
    }
}
