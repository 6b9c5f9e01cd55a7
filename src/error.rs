use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidCapacity {
    Zero,
    NotPowerOfTwo(usize),
}

impl fmt::Display for InvalidCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            InvalidCapacity::Zero => write!(f, "queue capacity must be greater than zero"),
            InvalidCapacity::NotPowerOfTwo(cap) => {
                write!(f, "masked queue capacity {} is not a power of two", cap)
            }
        }
    }
}

impl std::error::Error for InvalidCapacity {}

impl InvalidCapacity {
    pub fn is_zero(&self) -> bool {
        matches!(&self, InvalidCapacity::Zero)
    }

    pub fn is_not_power_of_two(&self) -> bool {
        matches!(&self, InvalidCapacity::NotPowerOfTwo(_))
    }
}

/// Returned by `try_push` when the queue is full. Holds the rejected value.
#[derive(Clone, PartialEq, Eq)]
pub struct PushError<T> {
    pub(crate) val: T,
}

impl<T> fmt::Debug for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushError").finish_non_exhaustive()
    }
}

impl<T> fmt::Display for PushError<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "push failed because queue is full")
    }
}

impl<T: core::any::Any> std::error::Error for PushError<T> {}

impl<T> PushError<T> {
    pub fn into_inner(self) -> T {
        self.val
    }
}
