//! Symbol factory and operator overloading for ergonomic tree building
//!
//! # Example
//! ```ignore
//! use symgrad::symbols;
//!
//! let [a, b] = symbols::<2>("a b")?;
//! let f = a.clone().pow(2.0) + a * b.clone() - b;  // a² + a·b − b
//! ```

use std::ops::{Add, Div, Mul, Neg, Sub};

use rustc_hash::FxHashSet;

use crate::ast::Symbol;
use crate::error::ValidationError;

/// Create one variable leaf per whitespace-separated identifier.
///
/// The returned symbols preserve input order. The function is pure: no
/// registry is consulted or updated, and two calls with the same name
/// produce independent leaves that evaluation nevertheless treats as the
/// same variable (binding is by name).
///
/// # Errors
/// - [`ValidationError::EmptySpec`] if the input contains no identifiers
/// - [`ValidationError::DuplicateName`] if an identifier repeats within
///   the call
pub fn symbol(spec: &str) -> Result<Vec<Symbol>, ValidationError> {
    let names: Vec<&str> = spec.split_whitespace().collect();
    if names.is_empty() {
        return Err(ValidationError::EmptySpec);
    }

    let mut seen = FxHashSet::default();
    for name in &names {
        if !seen.insert(*name) {
            return Err(ValidationError::DuplicateName((*name).to_owned()));
        }
    }

    Ok(names
        .into_iter()
        .map(Symbol::variable_unchecked)
        .collect())
}

/// Array form of [`symbol`] for direct destructuring:
/// `let [a, b] = symbols::<2>("a b")?;`
///
/// # Errors
/// As [`symbol`], plus [`ValidationError::ArityMismatch`] when the
/// identifier count differs from `N`.
pub fn symbols<const N: usize>(spec: &str) -> Result<[Symbol; N], ValidationError> {
    let syms = symbol(spec)?;
    let found = syms.len();
    syms.try_into()
        .map_err(|_| ValidationError::ArityMismatch { expected: N, found })
}

// Lift plain numbers to constant leaves

impl From<f64> for Symbol {
    fn from(n: f64) -> Self {
        Symbol::constant(n)
    }
}

impl From<i32> for Symbol {
    fn from(n: i32) -> Self {
        Symbol::constant(n as f64)
    }
}

// ===== Macro for generating operator implementations =====
// Every arithmetic operator builds a new node; nothing is evaluated here.
// Operand order is preserved for the non-commutative operators in both the
// Symbol-number and number-Symbol directions.

macro_rules! impl_binary_ops {
    ($lhs:ty, $rhs:ty, $to_lhs:expr, $to_rhs:expr) => {
        impl Add<$rhs> for $lhs {
            type Output = Symbol;
            fn add(self, rhs: $rhs) -> Symbol {
                Symbol::add($to_lhs(self), $to_rhs(rhs))
            }
        }
        impl Sub<$rhs> for $lhs {
            type Output = Symbol;
            fn sub(self, rhs: $rhs) -> Symbol {
                Symbol::sub($to_lhs(self), $to_rhs(rhs))
            }
        }
        impl Mul<$rhs> for $lhs {
            type Output = Symbol;
            fn mul(self, rhs: $rhs) -> Symbol {
                Symbol::mul($to_lhs(self), $to_rhs(rhs))
            }
        }
        impl Div<$rhs> for $lhs {
            type Output = Symbol;
            fn div(self, rhs: $rhs) -> Symbol {
                Symbol::div($to_lhs(self), $to_rhs(rhs))
            }
        }
    };
}

impl_binary_ops!(Symbol, Symbol, |s: Symbol| s, |r: Symbol| r);
impl_binary_ops!(Symbol, f64, |s: Symbol| s, |r: f64| Symbol::constant(r));
impl_binary_ops!(f64, Symbol, |s: f64| Symbol::constant(s), |r: Symbol| r);

impl Neg for Symbol {
    type Output = Symbol;
    fn neg(self) -> Symbol {
        Symbol::neg(self)
    }
}

impl Symbol {
    /// Raise to a power (Rust `^` is XOR, not exponentiation).
    ///
    /// The exponent may be a plain number or a full subtree, so
    /// expression-valued exponents work: `(a + 2.0).pow(a * 2.0)`. For the
    /// reflected `number ** symbol` form, lift the base first:
    /// `Symbol::from(3.0).pow(a)`.
    pub fn pow(self, exp: impl Into<Symbol>) -> Symbol {
        let exp = exp.into();
        Symbol::new(crate::ast::SymbolKind::Pow(self.into(), exp.into()))
    }
}
