//! Dual-number arithmetic
//!
//! A dual number is a pair `real + dual·e` with `e² = 0`; pushing one through
//! arithmetic carries a first-order derivative alongside the value without
//! building any tree. The type implements the same differentiation contract
//! as the tree traversal and stands alone as a reusable primitive.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::traits::MathScalar;

/// A value together with its infinitesimal dual component.
///
/// Every operation produces a new instance; plain scalars mix in on either
/// side as `(n, 0)`.
///
/// # Example
/// ```ignore
/// use symgrad::DualNumber;
///
/// let x = DualNumber::variable(3.0);          // (3, 1)
/// let f = x * x + 2.0 * x;                    // value 15, derivative 8
/// assert_eq!(f.real, 15.0);
/// assert_eq!(f.dual, 8.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct DualNumber<T: MathScalar = f64> {
    pub real: T,
    pub dual: T,
}

impl<T: MathScalar> DualNumber<T> {
    pub fn new(real: T, dual: T) -> Self {
        Self { real, dual }
    }

    /// A constant: zero dual part
    pub fn constant(real: T) -> Self {
        Self {
            real,
            dual: T::zero(),
        }
    }

    /// A seeded variable: unit dual part
    pub fn variable(real: T) -> Self {
        Self {
            real,
            dual: T::one(),
        }
    }
}

impl<T: MathScalar> fmt::Display for DualNumber<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}e", self.real, self.dual)
    }
}

// Basic arithmetic; each rule is the first-order expansion under e² = 0

impl<T: MathScalar> Add for DualNumber<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.real + rhs.real, self.dual + rhs.dual)
    }
}

impl<T: MathScalar> Sub for DualNumber<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.real - rhs.real, self.dual - rhs.dual)
    }
}

impl<T: MathScalar> Mul for DualNumber<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        // Product rule
        Self::new(
            self.real * rhs.real,
            self.real * rhs.dual + self.dual * rhs.real,
        )
    }
}

impl<T: MathScalar> Div for DualNumber<T> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        // Quotient rule
        let real = self.real / rhs.real;
        let dual = (self.dual * rhs.real - self.real * rhs.dual) / (rhs.real * rhs.real);
        Self::new(real, dual)
    }
}

impl<T: MathScalar> Neg for DualNumber<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.real, -self.dual)
    }
}

// Assignments

impl<T: MathScalar> AddAssign for DualNumber<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: MathScalar> SubAssign for DualNumber<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: MathScalar> MulAssign for DualNumber<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: MathScalar> DivAssign for DualNumber<T> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

// Mixed operations with plain scalars; the scalar lifts to (n, 0)

impl<T: MathScalar> Add<T> for DualNumber<T> {
    type Output = Self;
    fn add(self, rhs: T) -> Self {
        self + Self::constant(rhs)
    }
}

impl<T: MathScalar> Sub<T> for DualNumber<T> {
    type Output = Self;
    fn sub(self, rhs: T) -> Self {
        self - Self::constant(rhs)
    }
}

impl<T: MathScalar> Mul<T> for DualNumber<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        self * Self::constant(rhs)
    }
}

impl<T: MathScalar> Div<T> for DualNumber<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        self / Self::constant(rhs)
    }
}

// Scalar on the left; concrete impls per float type since a blanket impl
// over T would collide with the standard library's own operators
macro_rules! impl_scalar_lhs_ops {
    ($($t:ty),*) => {
        $(
            impl Add<DualNumber<$t>> for $t {
                type Output = DualNumber<$t>;
                fn add(self, rhs: DualNumber<$t>) -> DualNumber<$t> {
                    DualNumber::constant(self) + rhs
                }
            }
            impl Sub<DualNumber<$t>> for $t {
                type Output = DualNumber<$t>;
                fn sub(self, rhs: DualNumber<$t>) -> DualNumber<$t> {
                    DualNumber::constant(self) - rhs
                }
            }
            impl Mul<DualNumber<$t>> for $t {
                type Output = DualNumber<$t>;
                fn mul(self, rhs: DualNumber<$t>) -> DualNumber<$t> {
                    DualNumber::constant(self) * rhs
                }
            }
            impl Div<DualNumber<$t>> for $t {
                type Output = DualNumber<$t>;
                fn div(self, rhs: DualNumber<$t>) -> DualNumber<$t> {
                    DualNumber::constant(self) / rhs
                }
            }
        )*
    };
}

impl_scalar_lhs_ops!(f64, f32);
