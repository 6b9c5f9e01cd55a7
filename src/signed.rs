mod sealed {
    pub trait Sealed {}
}

/// Element types a [`CircularQueue`](crate::CircularQueue) can hold.
///
/// Implemented for the primitive signed integers only. `ZERO` is what a slot
/// is reset to after its value has been popped.
pub trait Signed: sealed::Sealed + Copy {
    const ZERO: Self;
}

macro_rules! impl_signed {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Signed for $t {
                const ZERO: Self = 0;
            }
        )*
    };
}

impl_signed!(i8, i16, i32, i64, i128, isize);
