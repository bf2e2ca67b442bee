use num_traits::{Float, FromPrimitive, ToPrimitive};
use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A trait comprising all operations required of the scalar carried by
/// [`DualNumber`](crate::DualNumber).
///
/// This aggregates `num_traits::Float` (zero/one, powf, ln, etc.) with the
/// standard arithmetic and formatting traits, so the dual algebra can be
/// written once for `f64`, `f32`, or any other conforming float.
pub trait MathScalar:
    Float
    + FromPrimitive
    + ToPrimitive
    + Debug
    + Display
    + Copy
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + 'static
{
}

// Blanket implementation for any type that satisfies the bounds
impl<T> MathScalar for T where
    T: Float
        + FromPrimitive
        + ToPrimitive
        + Debug
        + Display
        + Copy
        + PartialEq
        + PartialOrd
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Neg<Output = T>
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
        + 'static
{
}
