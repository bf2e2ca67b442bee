//! Forward-Mode Automatic Differentiation
//!
//! A small, focused library for exact derivatives (no finite differences)
//! over two representations:
//!
//! - [`Symbol`]: an immutable symbolic expression tree built lazily through
//!   operator overloading, evaluated with [`Symbol::eval`] and differentiated
//!   with [`Symbol::deriv`] (full gradient) or [`Symbol::deriv_along`]
//!   (directional derivative against a seed vector)
//! - [`DualNumber`]: a standalone `(real, dual)` pair whose arithmetic
//!   propagates a first-order derivative with no tree at all
//!
//! # Usage Examples
//!
//! ## Expression trees
//! ```ignore
//! use symgrad::{symbols, Point, Seed};
//!
//! let [a, b] = symbols::<2>("a b")?;
//! let f = a.clone().pow(2.0) + a * b.clone() - b;
//!
//! let point: Point = [("a", 1.0), ("b", 2.0)].into_iter().collect();
//! let grad = f.deriv(&point)?;            // {a: 4, b: 0}
//!
//! let seed: Seed = [("a", 2.0), ("b", 5.0)].into_iter().collect();
//! assert_eq!(f.deriv_along(&point, &seed)?, 8.0);
//! ```
//!
//! ## Dual numbers
//! ```ignore
//! use symgrad::DualNumber;
//!
//! let x = DualNumber::variable(3.0);
//! let f = x * x + 2.0 * x;                // value 15, derivative 8
//! ```
//!
//! Trees are never mutated after construction, so sharing one across
//! threads and evaluating concurrently needs no synchronization.

mod ast;
mod builder;
mod deriv;
mod display;
mod dual;
mod error;
mod eval;
mod symbol;
pub mod traits;

#[cfg(test)]
mod tests;

// Re-export key types for easier usage
pub use ast::{Operator, Symbol, SymbolKind};
pub use builder::SymbolBuilder;
pub use dual::DualNumber;
pub use error::{UnboundVariableError, ValidationError};
pub use symbol::{symbol, symbols};

use rustc_hash::FxHashMap;

/// Variable bindings supplied to [`Symbol::eval`] and [`Symbol::deriv`];
/// caller-owned and reusable across calls.
pub type Point<'a> = FxHashMap<&'a str, f64>;

/// Per-variable weights for [`Symbol::deriv_along`].
pub type Seed<'a> = FxHashMap<&'a str, f64>;

/// Gradient returned by [`Symbol::deriv`]: every variable present in the
/// tree maps to its partial derivative at the point.
pub type Gradient = FxHashMap<String, f64>;
