//! Pointwise product of two functions

use crate::function::RealFunction;

/// `first(x) * second(x)`, defined where both operands are defined
///
/// The product owns its operands exclusively; they are dropped with it.
pub struct Product {
    first: Box<dyn RealFunction>,
    second: Box<dyn RealFunction>,
}

impl Product {
    /// Build a product, taking ownership of both operands
    pub fn new(first: Box<dyn RealFunction>, second: Box<dyn RealFunction>) -> Self {
        Self { first, second }
    }

    pub fn first(&self) -> &dyn RealFunction {
        self.first.as_ref()
    }

    pub fn second(&self) -> &dyn RealFunction {
        self.second.as_ref()
    }
}

impl RealFunction for Product {
    // No domain guard here: outside the domain the result is whatever the
    // operands produce.
    fn evaluate(&self, x: f64) -> f64 {
        self.first.evaluate(x) * self.second.evaluate(x)
    }

    fn is_defined_at(&self, x: f64) -> bool {
        self.first.is_defined_at(x) && self.second.is_defined_at(x)
    }

    fn describe(&self) -> String {
        format!(
            "Functions: {} * {}",
            self.first.describe(),
            self.second.describe()
        )
    }

    fn describe_at(&self, x: f64) -> String {
        format!(
            "Product: ({:.6})",
            self.first.evaluate(x) * self.second.evaluate(x)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::{Square, SquareRoot};

    fn root_times_square() -> Product {
        Product::new(Box::new(SquareRoot), Box::new(Square))
    }

    #[test]
    fn test_domain_is_intersection() {
        let p = root_times_square();
        assert!(!p.is_defined_at(-0.5));
        assert!(p.is_defined_at(0.0));
        assert!(p.is_defined_at(4.0));
    }

    #[test]
    fn test_evaluate() {
        let p = root_times_square();
        assert_eq!(p.evaluate(4.0), 32.0);
        assert_eq!(p.evaluate(0.0), 0.0);
        assert_eq!(p.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_evaluate_outside_domain_is_unguarded() {
        assert!(root_times_square().evaluate(-1.0).is_nan());
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            root_times_square().describe(),
            "Functions: f(x) = SquareRoot(x) * f(x) = Square(x)"
        );
    }

    #[test]
    fn test_describe_at() {
        let p = root_times_square();
        assert_eq!(p.describe_at(4.0), "Product: (32.000000)");
        assert_eq!(p.describe_at(-1.0), "Product: (NaN)");
    }

    #[test]
    fn test_nested_products() {
        let inner = Product::new(Box::new(Square), Box::new(Square));
        let outer = Product::new(Box::new(inner), Box::new(SquareRoot));
        assert_eq!(outer.evaluate(4.0), 512.0);
        assert!(!outer.is_defined_at(-2.0));
        assert_eq!(
            outer.describe(),
            "Functions: Functions: f(x) = Square(x) * f(x) = Square(x) * f(x) = SquareRoot(x)"
        );
    }

    #[test]
    fn test_accessors() {
        let p = root_times_square();
        assert_eq!(p.first().describe(), SquareRoot.describe());
        assert_eq!(p.second().describe(), Square.describe());
    }
}
