use std::num::NonZeroUsize;
use thiserror::Error;

#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Debug, Hash)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    #[must_use]
    pub const fn new(size: usize) -> Option<Self> {
        match NonZeroUsize::new(size) {
            Some(inner) => Some(Self(inner)),
            None => None,
        }
    }

    #[must_use]
    pub fn new_unchecked(size: usize) -> Self {
        Self::new(size).expect("Page size was zero.")
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Error)]
#[error("The page size is not positive: {0}")]
pub struct ZeroPageSizeError(usize);

impl TryFrom<usize> for PageSize {
    type Error = ZeroPageSizeError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ZeroPageSizeError(value))
    }
}
