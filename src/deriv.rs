//! Forward-mode differentiation of expression trees
//!
//! One recursive traversal carries, per node, both the numeric value and the
//! full partial-derivative map over every variable beneath that node: the
//! dual-number algebra generalized from a single epsilon component to a
//! dynamically keyed gradient. The tree is therefore walked once per call,
//! never once per variable.

use crate::ast::{Symbol, SymbolKind};
use crate::error::UnboundVariableError;
use crate::{Gradient, Point, Seed};

/// Value and partial-derivative map of one subtree at the point.
struct ValueGrad {
    value: f64,
    grad: Gradient,
}

impl ValueGrad {
    fn constant(value: f64) -> Self {
        ValueGrad {
            value,
            grad: Gradient::default(),
        }
    }

    /// Scale every partial by a factor, keeping the variable set intact
    fn scaled(&self, factor: f64) -> Gradient {
        self.grad
            .iter()
            .map(|(name, d)| (name.clone(), factor * d))
            .collect()
    }
}

/// Combine two gradients over the union of their variables; partials missing
/// on one side enter the rule as 0.
fn combine(a: &Gradient, b: &Gradient, rule: impl Fn(f64, f64) -> f64) -> Gradient {
    let mut out = Gradient::default();
    for name in a.keys().chain(b.keys()) {
        if out.contains_key(name) {
            continue;
        }
        let da = a.get(name).copied().unwrap_or(0.0);
        let db = b.get(name).copied().unwrap_or(0.0);
        out.insert(name.clone(), rule(da, db));
    }
    out
}

impl Symbol {
    /// Partial derivatives of the tree with respect to every variable it
    /// contains, evaluated at `point`.
    ///
    /// The result maps each variable name reachable in the tree to its
    /// partial (zeros included); names absent from the tree are absent from
    /// the result.
    ///
    /// # Errors
    /// [`UnboundVariableError`] under the same conditions as [`Symbol::eval`];
    /// the chain-rule terms need subtree values at the point.
    ///
    /// # Example
    /// ```ignore
    /// let [a, b] = symbols::<2>("a b")?;
    /// let f = a.clone().pow(2.0) + a * b.clone() - b;
    /// let point: Point = [("a", 1.0), ("b", 2.0)].into_iter().collect();
    /// let grad = f.deriv(&point)?;   // {a: 4, b: 0}
    /// ```
    pub fn deriv(&self, point: &Point<'_>) -> Result<Gradient, UnboundVariableError> {
        Ok(self.value_grad(point)?.grad)
    }

    /// Directional derivative along `seed`: `Σ seed[name] · ∂f/∂name`.
    ///
    /// Variables present in the tree but absent from the seed carry weight
    /// 0, and seed entries for variables the tree never mentions are
    /// ignored.
    ///
    /// # Errors
    /// [`UnboundVariableError`] under the same conditions as [`Symbol::eval`].
    pub fn deriv_along(
        &self,
        point: &Point<'_>,
        seed: &Seed<'_>,
    ) -> Result<f64, UnboundVariableError> {
        let grad = self.deriv(point)?;
        Ok(grad
            .iter()
            .map(|(name, d)| seed.get(name.as_str()).copied().unwrap_or(0.0) * d)
            .sum())
    }

    fn value_grad(&self, point: &Point<'_>) -> Result<ValueGrad, UnboundVariableError> {
        match &self.kind {
            SymbolKind::Constant(n) => Ok(ValueGrad::constant(*n)),

            SymbolKind::Variable(name) => {
                let value = point
                    .get(name.as_str())
                    .copied()
                    .ok_or_else(|| UnboundVariableError::new(name.clone()))?;
                let mut grad = Gradient::default();
                grad.insert(name.clone(), 1.0);
                Ok(ValueGrad { value, grad })
            }

            SymbolKind::Add(l, r) => {
                let (u, v) = (l.value_grad(point)?, r.value_grad(point)?);
                Ok(ValueGrad {
                    value: u.value + v.value,
                    grad: combine(&u.grad, &v.grad, |du, dv| du + dv),
                })
            }

            SymbolKind::Sub(l, r) => {
                let (u, v) = (l.value_grad(point)?, r.value_grad(point)?);
                Ok(ValueGrad {
                    value: u.value - v.value,
                    grad: combine(&u.grad, &v.grad, |du, dv| du - dv),
                })
            }

            SymbolKind::Mul(l, r) => {
                let (u, v) = (l.value_grad(point)?, r.value_grad(point)?);
                Ok(ValueGrad {
                    value: u.value * v.value,
                    grad: combine(&u.grad, &v.grad, |du, dv| du * v.value + u.value * dv),
                })
            }

            SymbolKind::Div(l, r) => {
                let (u, v) = (l.value_grad(point)?, r.value_grad(point)?);
                Ok(ValueGrad {
                    value: u.value / v.value,
                    grad: combine(&u.grad, &v.grad, |du, dv| {
                        (du * v.value - u.value * dv) / (v.value * v.value)
                    }),
                })
            }

            SymbolKind::Neg(operand) => {
                let u = operand.value_grad(point)?;
                Ok(ValueGrad {
                    value: -u.value,
                    grad: u.scaled(-1.0),
                })
            }

            SymbolKind::Pow(l, r) => {
                let (u, v) = (l.value_grad(point)?, r.value_grad(point)?);
                let value = u.value.powf(v.value);

                // Constancy is structural: a subtree with an empty partial
                // map carries no variables. ln(u) only enters on the paths
                // whose rules require it, so constant exponents keep
                // negative bases meaningful.
                let grad = if v.grad.is_empty() {
                    // d/dx u^c = c·u^(c−1)·u'
                    u.scaled(v.value * u.value.powf(v.value - 1.0))
                } else if u.grad.is_empty() {
                    // d/dx c^v = c^v·ln(c)·v'
                    v.scaled(value * u.value.ln())
                } else {
                    // Generalized power rule:
                    // d/dx u^v = u^v·(v'·ln(u) + v·u'/u)
                    combine(&u.grad, &v.grad, |du, dv| {
                        value * (dv * u.value.ln() + v.value * du / u.value)
                    })
                };

                Ok(ValueGrad { value, grad })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols;

    const EPSILON: f64 = 1e-10;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn point(bindings: &[(&'static str, f64)]) -> Point<'static> {
        bindings.iter().copied().collect()
    }

    #[test]
    fn test_gradient_covers_all_tree_variables() {
        let [a, b] = symbols::<2>("a b").unwrap();
        // ∂f/∂b is 0 at this point, but b still gets a gradient entry
        let f = a.clone().pow(2.0) + a * b.clone() - b;
        let grad = f.deriv(&point(&[("a", 1.0), ("b", 2.0)])).unwrap();

        assert_eq!(grad.len(), 2);
        assert_eq!(grad["a"], 4.0);
        assert_eq!(grad["b"], 0.0);
    }

    #[test]
    fn test_constant_has_empty_gradient() {
        let f = Symbol::constant(3.0) * Symbol::constant(4.0);
        let grad = f.deriv(&point(&[])).unwrap();
        assert!(grad.is_empty());
    }

    #[test]
    fn test_seeded_is_weighted_sum() {
        let [a, b] = symbols::<2>("a b").unwrap();
        let f = a.clone().pow(2.0) + a * b.clone() - b;
        let p = point(&[("a", 1.0), ("b", 2.0)]);

        let seed: Seed = [("a", 2.0), ("b", 5.0)].into_iter().collect();
        assert_eq!(f.deriv_along(&p, &seed).unwrap(), 8.0);

        // Seed entries for variables outside the tree are ignored, and
        // tree variables missing from the seed count as weight 0
        let partial_seed: Seed = [("a", 2.0), ("z", 100.0)].into_iter().collect();
        assert_eq!(f.deriv_along(&p, &partial_seed).unwrap(), 8.0);
    }

    #[test]
    fn test_pow_constant_exponent_keeps_power_rule() {
        let [a] = symbols::<1>("a").unwrap();
        // Negative base with an integer constant exponent: the power rule
        // path must not route through ln(u)
        let f = a.pow(3.0);
        let grad = f.deriv(&point(&[("a", -2.0)])).unwrap();
        assert!(approx_eq(grad["a"], 12.0));
    }

    #[test]
    fn test_pow_constant_base() {
        let [a] = symbols::<1>("a").unwrap();
        let f = Symbol::from(3.0).pow(a);
        let grad = f.deriv(&point(&[("a", -2.0)])).unwrap();
        assert!(approx_eq(grad["a"], 3.0_f64.ln() / 9.0));
    }

    #[test]
    fn test_pow_generalized() {
        let [a, b] = symbols::<2>("a b").unwrap();
        let f = a.pow(b);
        let grad = f.deriv(&point(&[("a", 2.0), ("b", 3.0)])).unwrap();
        assert!(approx_eq(grad["a"], 12.0));
        assert!(approx_eq(grad["b"], 8.0 * 2.0_f64.ln()));
    }

    #[test]
    fn test_deriv_unbound_variable() {
        let [a, b] = symbols::<2>("a b").unwrap();
        let f = a * b;
        let err = f.deriv(&point(&[("a", 1.0)])).unwrap_err();
        assert_eq!(err.name(), "b");
    }
}
