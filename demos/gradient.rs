//! Walkthrough of the two differentiation surfaces: symbolic trees with
//! gradients and seeded directional derivatives, and standalone dual numbers.
//!
//! Run with `cargo run --example gradient`.

use symgrad::{symbols, DualNumber, Point, Seed};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build f(a, b) = a² + a·b − b lazily; nothing evaluates here
    let [a, b] = symbols::<2>("a b")?;
    let f = a.clone().pow(2.0) + a * b.clone() - b;
    println!("f(a, b) = {}", f);

    let point: Point = [("a", 1.0), ("b", 2.0)].into_iter().collect();
    println!("f(1, 2) = {}", f.eval(&point)?);

    // Full gradient: every variable in the tree gets a partial
    let grad = f.deriv(&point)?;
    let mut names: Vec<&str> = grad.keys().map(String::as_str).collect();
    names.sort_unstable();
    for name in names {
        println!("∂f/∂{} = {}", name, grad[name]);
    }

    // Directional derivative along a seed vector
    let seed: Seed = [("a", 2.0), ("b", 5.0)].into_iter().collect();
    println!("∇f · (2, 5) = {}", f.deriv_along(&point, &seed)?);

    // The same contract with no tree: dual numbers carry the derivative
    // through the arithmetic itself
    let x = DualNumber::variable(3.0);
    let g = x * x + 2.0 * x; // g(x) = x² + 2x, g'(3) = 8
    println!("g(3) as a dual number: {}", g);

    Ok(())
}
