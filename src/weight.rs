//! Edge weights.
use std::fmt::Debug;

/// Non-negative, totally ordered edge weight.
///
/// Implemented for the unsigned integer types, which makes negative weights
/// unrepresentable.
pub trait Weight: Copy + Ord + Debug {
    /// The additive identity, used as the distance of a source vertex.
    const ZERO: Self;

    /// Weight of an edge inserted without an explicit weight.
    const ONE: Self;

    /// Adds two weights, returning `None` on overflow.
    fn checked_add(self, other: Self) -> Option<Self>;
}

macro_rules! int_weight_impl {
    ($weight:ident) => {
        impl $crate::weight::Weight for $weight {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline(always)]
            fn checked_add(self, other: Self) -> Option<Self> {
                <$weight>::checked_add(self, other)
            }
        }
    };
}

int_weight_impl!(u128);
int_weight_impl!(u64);
int_weight_impl!(u32);
int_weight_impl!(u16);
int_weight_impl!(u8);
int_weight_impl!(usize);
