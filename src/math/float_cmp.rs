use num_traits::Float;

/// Returns `true` if `|x - y| < abs_eps`.
///
/// Suited for values close to zero, where a relative bound collapses.
#[must_use]
pub fn absolute_within<T: Float>(x: T, y: T, abs_eps: T) -> bool {
    (x - y).abs() < abs_eps
}

/// Returns `true` if `|x - y| <= rel_eps * max(|x|, |y|)`.
///
/// Adapts to the magnitude of the operands but is unreliable near zero.
#[must_use]
pub fn relative_within<T: Float>(x: T, y: T, rel_eps: T) -> bool {
    (x - y).abs() <= x.abs().max(y.abs()) * rel_eps
}

/// Absolute comparison first, falling back to the relative one.
///
/// This is the equality policy used for every approximate scalar in the crate.
#[must_use]
pub fn close_enough<T: Float>(x: T, y: T, abs_eps: T, rel_eps: T) -> bool {
    // Infinities only ever match themselves.
    if x == y {
        return true;
    }
    absolute_within(x, y, abs_eps) || relative_within(x, y, rel_eps)
}

/// Pair of absolute and relative epsilons applied by [`close_enough`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance<T> {
    /// Bound on `|x - y|`.
    pub abs: T,
    /// Bound on `|x - y|` relative to the larger magnitude.
    pub rel: T,
}

impl<T: Float> Tolerance<T> {
    /// Creates a tolerance with distinct absolute and relative epsilons.
    #[must_use]
    pub fn new(abs: T, rel: T) -> Self {
        Self { abs, rel }
    }

    /// Creates a tolerance using the same epsilon for both bounds.
    #[must_use]
    pub fn uniform(eps: T) -> Self {
        Self { abs: eps, rel: eps }
    }

    #[must_use]
    pub fn close_enough(&self, x: T, y: T) -> bool {
        close_enough(x, y, self.abs, self.rel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_is_strict() {
        assert!(absolute_within(1.0_f64, 1.05, 0.1));
        assert!(!absolute_within(0.0_f64, 0.5, 0.5));
    }

    #[test]
    fn relative_scales_with_magnitude() {
        assert!(relative_within(1.0e9_f64, 1.0e9 + 1.0, 1e-8));
        assert!(!relative_within(1.0_f64, 2.0, 1e-8));
        // Zero against a tiny value never passes the relative test.
        assert!(!relative_within(0.0_f64, 1e-30, 1e-10));
    }

    #[test]
    fn close_enough_falls_back_to_relative() {
        assert!(close_enough(1e-12_f64, 0.0, 1e-10, 1e-10));
        assert!(close_enough(1.0e12_f64, 1.0e12 + 10.0, 1e-10, 1e-10));
        assert!(!close_enough(1.0_f64, 1.001, 1e-10, 1e-10));
    }

    #[test]
    fn close_enough_is_reflexive_for_zero_eps() {
        assert!(close_enough(3.25_f32, 3.25, 0.0, 0.0));
        assert!(close_enough(0.0_f64, 0.0, 0.0, 0.0));
        assert!(close_enough(f64::INFINITY, f64::INFINITY, 1e-10, 1e-10));
        assert!(!close_enough(f64::NAN, f64::NAN, 1e-10, 1e-10));
    }

    #[test]
    fn tolerance_matches_free_function() {
        let tol = Tolerance::new(1e-7_f32, 1e-7);
        assert!(tol.close_enough(-3.24, -3.240_000_2));
        assert!(!tol.close_enough(-3.24, -3.25));
        assert_eq!(Tolerance::uniform(0.5_f64), Tolerance::new(0.5, 0.5));
    }
}
