//! Real functions of one variable
//!
//! Every function exposes the same four operations: evaluate a point, check
//! whether a point lies in its domain, and describe itself with or without a
//! concrete argument.

/// A real function of one real variable
///
/// `evaluate` is only meaningful where `is_defined_at` holds. Callers must
/// check the domain first; outside it the result is whatever the underlying
/// float arithmetic yields (usually NaN).
pub trait RealFunction {
    /// Value of the function at `x`
    fn evaluate(&self, x: f64) -> f64;

    /// Whether `x` lies in the domain of the function
    fn is_defined_at(&self, x: f64) -> bool;

    /// Description of the function itself, independent of any argument
    fn describe(&self) -> String;

    /// Description of the function applied to `x`, including the computed value
    ///
    /// The value is computed unconditionally, even outside the domain.
    fn describe_at(&self, x: f64) -> String;
}

impl<F: RealFunction + ?Sized> RealFunction for Box<F> {
    fn evaluate(&self, x: f64) -> f64 {
        (**self).evaluate(x)
    }

    fn is_defined_at(&self, x: f64) -> bool {
        (**self).is_defined_at(x)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn describe_at(&self, x: f64) -> String {
        (**self).describe_at(x)
    }
}

// ============================================================================
// Leaf Functions
// ============================================================================

/// Principal square root, defined for `x >= 0`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SquareRoot;

impl RealFunction for SquareRoot {
    fn evaluate(&self, x: f64) -> f64 {
        x.sqrt()
    }

    fn is_defined_at(&self, x: f64) -> bool {
        x >= 0.0
    }

    fn describe(&self) -> String {
        "f(x) = SquareRoot(x)".to_string()
    }

    fn describe_at(&self, x: f64) -> String {
        format!("SquareRoot({:.6}) = {:.6}", x, self.evaluate(x))
    }
}

/// `x * x`, defined everywhere
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Square;

impl RealFunction for Square {
    fn evaluate(&self, x: f64) -> f64 {
        x * x
    }

    fn is_defined_at(&self, _x: f64) -> bool {
        true
    }

    fn describe(&self) -> String {
        "f(x) = Square(x)".to_string()
    }

    fn describe_at(&self, x: f64) -> String {
        format!("Square({:.6}) = {:.6}", x, self.evaluate(x))
    }
}
