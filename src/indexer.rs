use crate::error::InvalidCapacity;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Mask {}
    impl Sealed for super::Remainder {}
}

/// Maps a position in `[0, 2 * cap)` onto a slot in `[0, cap)`.
///
/// Only [`Remainder`] and [`Mask`] implement it. Both are built through a
/// `new` that rejects a zero capacity, so every queue has at least one slot.
///
/// ```compile_fail
/// use circular_queue::{CircularQueue, Indexer};
///
/// struct ZeroCap;
///
/// impl Indexer for ZeroCap {
///     fn index(&self, pos: usize) -> usize {
///         pos
///     }
///
///     fn cap(&self) -> usize {
///         0
///     }
/// }
///
/// let _ = CircularQueue::<i32, ZeroCap>::with_indexer(ZeroCap);
/// ```
pub trait Indexer: sealed::Sealed {
    fn index(&self, pos: usize) -> usize;

    fn cap(&self) -> usize;
}

#[derive(Debug)]
pub struct Mask {
    mask: usize,
    cap: usize,
}

impl Mask {
    pub fn new(cap: usize) -> Result<Self, InvalidCapacity> {
        if cap == 0 {
            Err(InvalidCapacity::Zero)
        } else if !cap.is_power_of_two() {
            Err(InvalidCapacity::NotPowerOfTwo(cap))
        } else {
            Ok(Self { mask: cap - 1, cap })
        }
    }
}

impl Indexer for Mask {
    fn index(&self, pos: usize) -> usize {
        pos & self.mask
    }

    fn cap(&self) -> usize {
        self.cap
    }
}

#[derive(Debug)]
pub struct Remainder {
    cap: usize,
}

impl Remainder {
    pub fn new(cap: usize) -> Result<Self, InvalidCapacity> {
        if cap == 0 {
            Err(InvalidCapacity::Zero)
        } else {
            Ok(Self { cap })
        }
    }
}

impl Indexer for Remainder {
    fn index(&self, pos: usize) -> usize {
        pos % self.cap
    }

    fn cap(&self) -> usize {
        self.cap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remainder_wraps_any_capacity() {
        let idx = Remainder::new(3).unwrap();
        assert_eq!(idx.cap(), 3);
        assert_eq!(idx.index(0), 0);
        assert_eq!(idx.index(2), 2);
        assert_eq!(idx.index(3), 0);
        assert_eq!(idx.index(5), 2);
    }

    #[test]
    fn mask_matches_remainder() {
        for cap in [1, 2, 4, 8, 64] {
            let mask = Mask::new(cap).unwrap();
            let rem = Remainder::new(cap).unwrap();
            for pos in 0..2 * cap {
                assert_eq!(mask.index(pos), rem.index(pos));
            }
        }
    }

    #[test]
    fn rejects_bad_capacity() {
        assert_eq!(Remainder::new(0).unwrap_err(), InvalidCapacity::Zero);
        assert_eq!(Mask::new(0).unwrap_err(), InvalidCapacity::Zero);
        assert_eq!(Mask::new(6).unwrap_err(), InvalidCapacity::NotPowerOfTwo(6));
    }
}
