use std::fmt::Debug;
use num_traits::Zero;
use ordered_float::{NotNan, OrderedFloat};


/// Default real valued cost - f64 with a total order that can never hold NaN
pub type Cost = NotNan<f64>;


/// Cost type usable by the searches
/// Addition reports overflow as None instead of panicking or wrapping,
/// the search then treats the longer route as unreachable
pub trait PathCost: Zero + Ord + Copy + Debug {
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! integer_path_cost {
    ($($t:ty),*) => {$(
        impl PathCost for $t {
            fn checked_sum(self, other: Self) -> Option<Self> {
                self.checked_add(other)
            }
        }
    )*};
}

integer_path_cost!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

// an infinite sum counts as overflow, so an infinite connection is impassable
macro_rules! float_path_cost {
    ($($t:ty),*) => {$(
        impl PathCost for NotNan<$t> {
            fn checked_sum(self, other: Self) -> Option<Self> {
                let sum = self.into_inner() + other.into_inner();
                if sum.is_finite() { NotNan::new(sum).ok() } else { None }
            }
        }

        impl PathCost for OrderedFloat<$t> {
            fn checked_sum(self, other: Self) -> Option<Self> {
                let sum = self.0 + other.0;
                if sum.is_finite() { Some(OrderedFloat(sum)) } else { None }
            }
        }
    )*};
}

float_path_cost!(f32, f64);
