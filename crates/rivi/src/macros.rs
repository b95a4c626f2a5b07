#[macro_export]
macro_rules! const_assert {
    ($check:expr $(,$msg:tt)*) => {
        const _: () = assert!($check $(,$msg)*);
    };
}

/// Builds a [`DynArray`](crate::DynArray) from a list of values, or from
/// `value; count` the way `vec!` does.
#[macro_export]
macro_rules! dyn_array {
    () => {
        $crate::DynArray::new()
    };
    ($value:expr; $n:expr) => {
        $crate::DynArray::with_len($n, $value)
    };
    [$($elem:expr),+ $(,)?] => {
        $crate::DynArray::from([$($elem),+])
    };
}
