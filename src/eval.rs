//! Numeric evaluation of expression trees

use crate::ast::{Symbol, SymbolKind};
use crate::error::UnboundVariableError;
use crate::Point;

impl Symbol {
    /// Evaluate the tree at `point`, bottom-up.
    ///
    /// Every call is a fresh traversal, O(tree size); nothing is cached
    /// between calls. Division by zero and `0^0` are not special-cased:
    /// IEEE 754 semantics propagate (`inf`/`NaN` rather than an error).
    ///
    /// # Errors
    /// [`UnboundVariableError`] if the tree references a variable the point
    /// does not bind. The whole call aborts; there is no partial result.
    ///
    /// # Example
    /// ```ignore
    /// let [a, b] = symbols::<2>("a b")?;
    /// let f = a + b;
    /// let point: Point = [("a", 1.0), ("b", 2.0)].into_iter().collect();
    /// assert_eq!(f.eval(&point)?, 3.0);
    /// ```
    pub fn eval(&self, point: &Point<'_>) -> Result<f64, UnboundVariableError> {
        match &self.kind {
            SymbolKind::Constant(n) => Ok(*n),

            SymbolKind::Variable(name) => point
                .get(name.as_str())
                .copied()
                .ok_or_else(|| UnboundVariableError::new(name.clone())),

            SymbolKind::Add(u, v) => Ok(u.eval(point)? + v.eval(point)?),
            SymbolKind::Sub(u, v) => Ok(u.eval(point)? - v.eval(point)?),
            SymbolKind::Mul(u, v) => Ok(u.eval(point)? * v.eval(point)?),
            SymbolKind::Div(u, v) => Ok(u.eval(point)? / v.eval(point)?),
            SymbolKind::Pow(u, v) => Ok(u.eval(point)?.powf(v.eval(point)?)),
            SymbolKind::Neg(u) => Ok(-u.eval(point)?),
        }
    }
}
