//! Piecewise-cubic coefficients for parametrized kernel families
//!
//! Keys and Mitchell-Netravali kernels share the same two-piece cubic form:
//!
//! ```text
//! k(t) = (p3 t + p2) t^2 + p0              for 0 <= t <= 1
//! k(t) = ((q3 t + q2) t + q1) t + q0       for 1 <  t <  2
//! k(t) = 0                                 otherwise
//! ```
//!
//! with `t = |x|`. Only the coefficients differ between families; they are
//! derived once from the shape parameters, in the element type's own
//! arithmetic, and never change afterwards.

use resample_core::KernelFloat;

/// Coefficients of a symmetric two-piece cubic on `[0, 2)`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicCoefficients<T: KernelFloat = f64> {
    pub p0: T,
    pub p2: T,
    pub p3: T,
    pub q0: T,
    pub q1: T,
    pub q2: T,
    pub q3: T,
}

impl<T: KernelFloat> CubicCoefficients<T> {
    /// Coefficients of the Keys cubic convolution kernel with parameter `a`
    pub fn keys(a: T) -> Self {
        let one = T::one();
        let two = T::constant(2.0);
        let three = T::constant(3.0);
        let four = T::constant(4.0);
        let five = T::constant(5.0);
        let eight = T::constant(8.0);

        Self {
            p0: one,
            p2: -a - three,
            p3: a + two,
            q0: -four * a,
            q1: eight * a,
            q2: -five * a,
            q3: a,
        }
    }

    /// Coefficients of the Mitchell-Netravali cubic with parameters `b` and `c`
    pub fn mitchell_netravali(b: T, c: T) -> Self {
        let k = |v: f64| T::constant(v);
        let six = k(6.0);

        Self {
            p0: (six - k(2.0) * b) / six,
            p2: (k(-18.0) + k(12.0) * b + six * c) / six,
            p3: (k(12.0) - k(9.0) * b - six * c) / six,
            q0: (k(8.0) * b + k(24.0) * c) / six,
            q1: (k(-12.0) * b - k(48.0) * c) / six,
            q2: (six * b + k(30.0) * c) / six,
            q3: (-b - six * c) / six,
        }
    }

    /// Inner piece, valid for `0 <= t <= 1`
    #[inline(always)]
    pub fn inner(&self, t: T) -> T {
        (self.p3 * t + self.p2) * t * t + self.p0
    }

    /// Outer piece, valid for `1 < t < 2`
    #[inline(always)]
    pub fn outer(&self, t: T) -> T {
        ((self.q3 * t + self.q2) * t + self.q1) * t + self.q0
    }

    /// Evaluate the two-piece cubic at `x`
    #[inline]
    pub fn eval(&self, x: T) -> T {
        let t = x.abs();
        if t <= T::one() {
            self.inner(t)
        } else if t < T::constant(2.0) {
            self.outer(t)
        } else {
            T::zero()
        }
    }
}
