//! Mitchell-Netravali two-parameter cubic family
//!
//! `(b, c) = (1, 0)` is the cubic B-spline, `(0, 1/2)` is Catmull-Rom and
//! `(1/3, 1/3)` is the recommended compromise between blurring and ringing.
//! Every member is normalized; only the `b = 0` members are cardinal.

use crate::{CubicCoefficients, Kernel};
use resample_core::KernelFloat;
use tracing::debug;

/// Mitchell-Netravali cubic kernel
///
/// Shape parameters are not validated: extreme values give a kernel that is
/// still evaluated with the same formulas even when it no longer has the
/// properties the family is known for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MitchellNetravali<T: KernelFloat = f64> {
    b: T,
    c: T,
    coefficients: CubicCoefficients<T>,
}

impl<T: KernelFloat> MitchellNetravali<T> {
    /// Width of the support
    pub const SUPPORT_LENGTH: usize = 4;
    /// Whether integer shifts of the kernel sum to one
    pub const IS_NORMALIZED: bool = true;

    /// Create a Mitchell-Netravali kernel with parameters `b` and `c`
    pub fn new(b: T, c: T) -> Self {
        let coefficients = CubicCoefficients::mitchell_netravali(b, c);
        debug!(
            element = T::TYPE_NAME,
            b = ?b,
            c = ?c,
            coefficients = ?coefficients,
            "derived Mitchell-Netravali kernel coefficients"
        );
        Self { b, c, coefficients }
    }

    /// The recommended parameters `b = c = 1/3`
    pub fn recommended() -> Self {
        let third = T::one() / T::constant(3.0);
        Self::new(third, third)
    }

    /// The `b` shape parameter
    pub fn b(&self) -> T {
        self.b
    }

    /// The `c` shape parameter
    pub fn c(&self) -> T {
        self.c
    }

    /// The derived piecewise coefficients
    pub fn coefficients(&self) -> &CubicCoefficients<T> {
        &self.coefficients
    }
}

impl<T: KernelFloat> Default for MitchellNetravali<T> {
    fn default() -> Self {
        Self::recommended()
    }
}

impl<T: KernelFloat> Kernel<T> for MitchellNetravali<T> {
    #[inline]
    fn support_length(&self) -> usize {
        Self::SUPPORT_LENGTH
    }

    /// Cardinality depends on the parameters: true iff `b == 0`
    #[inline]
    fn is_cardinal(&self) -> bool {
        self.b == T::zero()
    }

    #[inline]
    fn is_normalized(&self) -> bool {
        Self::IS_NORMALIZED
    }

    #[inline]
    fn eval(&self, x: T) -> T {
        self.coefficients.eval(x)
    }

    fn name(&self) -> &'static str {
        "mitchell-netravali"
    }
}
