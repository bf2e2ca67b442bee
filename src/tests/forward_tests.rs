//! End-to-end scenarios for the tree engine: factory validation, evaluation,
//! gradients, seeded derivatives, and the reflected operand forms.

use crate::{symbol, symbols, Point, Seed, Symbol, ValidationError};

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point(bindings: &[(&'static str, f64)]) -> Point<'static> {
    bindings.iter().copied().collect()
}

#[test]
fn test_symbol_factory_order_and_shape() {
    let syms = symbol("a b").unwrap();
    assert_eq!(syms[0].name(), Some("a"));
    assert_eq!(syms[1].name(), Some("b"));

    // Fresh leaves carry a name and nothing else
    for s in &syms {
        assert!(s.constant_value().is_none());
        assert!(s.operator().is_none());
        assert!(s.left().is_none() && s.right().is_none());
    }
}

#[test]
fn test_factory_rejects_duplicate_and_empty() {
    assert!(matches!(
        symbol("a a"),
        Err(ValidationError::DuplicateName(_))
    ));
    assert_eq!(symbol(""), Err(ValidationError::EmptySpec));
}

#[test]
fn test_builder_rejects_name_with_constant() {
    let res = Symbol::builder().constant(1.0).name("a").build();
    assert!(matches!(res, Err(ValidationError::NameAndConstant { .. })));
}

#[test]
fn test_eval_sum() {
    let [a, b] = symbols::<2>("a b").unwrap();
    let f = a + b;
    assert_eq!(f.eval(&point(&[("a", 1.0), ("b", 2.0)])).unwrap(), 3.0);
}

#[test]
fn test_eval_missing_binding() {
    let [a, b] = symbols::<2>("a b").unwrap();
    let f = a + b;
    let err = f.eval(&point(&[("a", 1.0), ("c", 2.0)])).unwrap_err();
    assert_eq!(err.name(), "b");
}

#[test]
fn test_deriv_seeded_and_unseeded() {
    let [a, b] = symbols::<2>("a b").unwrap();
    let f = a.clone().pow(2.0) + a * b.clone() - b;
    let p = point(&[("a", 1.0), ("b", 2.0)]);

    let seed: Seed = [("a", 2.0), ("b", 5.0)].into_iter().collect();
    assert_eq!(f.deriv_along(&p, &seed).unwrap(), 8.0);

    let grad = f.deriv(&p).unwrap();
    assert_eq!(grad.len(), 2);
    assert_eq!(grad["a"], 4.0);
    assert_eq!(grad["b"], 0.0);
}

#[test]
fn test_add_with_constants() {
    let [a, b] = symbols::<2>("a b").unwrap();
    let f = 2.0 * a + b + 1.0;
    let p = point(&[("a", 1.0), ("b", 2.0)]);

    assert_eq!(f.eval(&p).unwrap(), 5.0);
    let grad = f.deriv(&p).unwrap();
    assert_eq!(grad["a"], 2.0);
    assert_eq!(grad["b"], 1.0);
}

#[test]
fn test_add_reflected() {
    let [a, b] = symbols::<2>("a b").unwrap();
    let f = 1.0 + 2.0 * a + b;
    let p = point(&[("a", 1.0), ("b", 2.0)]);

    assert_eq!(f.eval(&p).unwrap(), 5.0);
    let grad = f.deriv(&p).unwrap();
    assert_eq!(grad["a"], 2.0);
    assert_eq!(grad["b"], 1.0);
}

#[test]
fn test_mul() {
    let [a, b] = symbols::<2>("a b").unwrap();
    let f = a.clone() * b + 2.0 * a;
    let p = point(&[("a", 1.0), ("b", 2.0)]);

    assert_eq!(f.eval(&p).unwrap(), 4.0);
    let grad = f.deriv(&p).unwrap();
    assert_eq!(grad["a"], 4.0);
    assert_eq!(grad["b"], 1.0);
}

#[test]
fn test_div_chain() {
    let [a, b] = symbols::<2>("a b").unwrap();
    let f = a.clone() * b.clone() / 1.0 + 3.0 * b / a.clone() + 1.0 / a;
    let p = point(&[("a", 1.0), ("b", 2.0)]);

    assert_eq!(f.eval(&p).unwrap(), 9.0);
    let grad = f.deriv(&p).unwrap();
    assert_eq!(grad["a"], -5.0);
    assert_eq!(grad["b"], 4.0);
}

#[test]
fn test_pow_constant_exponents() {
    let [a, b] = symbols::<2>("a b").unwrap();
    let f = a.pow(0.5) + b.pow(1.0);
    let p = point(&[("a", 1.0), ("b", 2.0)]);

    assert_eq!(f.eval(&p).unwrap(), 3.0);
    let grad = f.deriv(&p).unwrap();
    assert_eq!(grad["a"], 0.5);
    assert_eq!(grad["b"], 1.0);
}

#[test]
fn test_pow_variable_exponent() {
    let [a, b] = symbols::<2>("a b").unwrap();
    let f = a.pow(b);
    let p = point(&[("a", 2.0), ("b", 3.0)]);

    assert_eq!(f.eval(&p).unwrap(), 8.0);
    let grad = f.deriv(&p).unwrap();
    assert_eq!(grad["a"], 12.0);
    assert!(approx_eq(grad["b"], 8.0 * 2.0_f64.ln()));
}

#[test]
fn test_pow_reflected_base() {
    let [a, b] = symbols::<2>("a b").unwrap();
    let f = Symbol::from(3.0).pow(a) + Symbol::from(2.0).pow(b);
    let p = point(&[("a", -2.0), ("b", 4.0)]);

    assert!(approx_eq(f.eval(&p).unwrap(), 1.0 / 9.0 + 16.0));
    let grad = f.deriv(&p).unwrap();
    assert!(approx_eq(grad["a"], 3.0_f64.ln() / 9.0));
    assert!(approx_eq(grad["b"], 16.0 * 2.0_f64.ln()));
}

#[test]
fn test_pow_expression_exponent() {
    let [a] = symbols::<1>("a").unwrap();
    let f = (a.clone() + 2.0).pow(a * 2.0);
    let p = point(&[("a", 1.0)]);

    assert_eq!(f.eval(&p).unwrap(), 9.0);
    let grad = f.deriv(&p).unwrap();
    assert!(approx_eq(
        grad["a"],
        9.0 * (2.0 * 3.0_f64.ln() + 2.0 / 3.0)
    ));
}

#[test]
fn test_sub_reflected_order() {
    let [a, b] = symbols::<2>("a b").unwrap();
    let f = b - 0.5 * a - 1.0;
    let p = point(&[("a", 1.0), ("b", 2.0)]);

    assert_eq!(f.eval(&p).unwrap(), 0.5);
    let grad = f.deriv(&p).unwrap();
    assert_eq!(grad["a"], -0.5);
    assert_eq!(grad["b"], 1.0);
}

#[test]
fn test_neg() {
    let [a, b] = symbols::<2>("a b").unwrap();
    let f = -b - 0.5 * a - 5.0;
    let p = point(&[("a", 1.0), ("b", 2.0)]);

    assert_eq!(f.eval(&p).unwrap(), -7.5);
    let grad = f.deriv(&p).unwrap();
    assert_eq!(grad["a"], -0.5);
    assert_eq!(grad["b"], -1.0);
}

#[test]
fn test_eval_is_repeatable() {
    let [a, b] = symbols::<2>("a b").unwrap();
    let f = (a.clone() + b.clone()).pow(a / b);
    let p = point(&[("a", 1.5), ("b", 2.5)]);

    let first = f.eval(&p).unwrap();
    for _ in 0..5 {
        assert_eq!(f.eval(&p).unwrap(), first);
    }
}

#[test]
fn test_point_reuse_across_trees() {
    let [a, b] = symbols::<2>("a b").unwrap();
    let p = point(&[("a", 3.0), ("b", 4.0)]);

    let f = a.clone() * b.clone();
    let g = a + b;
    assert_eq!(f.eval(&p).unwrap(), 12.0);
    assert_eq!(g.eval(&p).unwrap(), 7.0);

    // Independently created leaves with the same name bind to the same entry
    let [a2] = symbols::<1>("a").unwrap();
    assert_eq!((a2 * 2.0).eval(&p).unwrap(), 6.0);
}

#[test]
fn test_same_name_leaves_share_gradient_key() {
    let [a1] = symbols::<1>("a").unwrap();
    let [a2] = symbols::<1>("a").unwrap();
    let f = a1 * a2; // a², by name
    let p = point(&[("a", 3.0)]);

    assert_eq!(f.eval(&p).unwrap(), 9.0);
    let grad = f.deriv(&p).unwrap();
    assert_eq!(grad.len(), 1);
    assert_eq!(grad["a"], 6.0);
}
