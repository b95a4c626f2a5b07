/// Index rejected by a checked accessor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl core::fmt::Display for OutOfBounds {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "index {} was out of bounds of len {}", self.index, self.len)
    }
}

impl core::error::Error for OutOfBounds {}
