//! Cardinal cubic convolution kernels
//!
//! Catmull-Rom is the member of the Keys family with `a = -1/2`; it gets its
//! own zero-sized type because it is by far the most common choice.

use super::singleton_kernel;
use crate::{CubicCoefficients, Kernel};
use resample_core::KernelFloat;
use tracing::debug;

singleton_kernel! {
    /// Catmull-Rom spline kernel
    CatmullRom, "catmull-rom", support = 4, cardinal = true
}

impl<T: KernelFloat> CatmullRom<T> {
    #[inline(always)]
    fn value(x: T) -> T {
        let t = x.abs();
        let one = T::one();
        let two = T::constant(2.0);
        let half = T::constant(0.5);
        let five_halves = T::constant(2.5);
        if t <= one {
            (T::constant(1.5) * t - five_halves) * t * t + one
        } else if t < two {
            ((five_halves - half * t) * t - T::constant(4.0)) * t + two
        } else {
            T::zero()
        }
    }
}

/// Keys cubic convolution kernel
///
/// `a` controls the slope at `|x| = 1`. Common choices are `-1/2` (the
/// default, identical to Catmull-Rom), `-3/4` and `-1`. Any real `a` is
/// accepted; the kernel is cardinal and normalized for every value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keys<T: KernelFloat = f64> {
    a: T,
    coefficients: CubicCoefficients<T>,
}

impl<T: KernelFloat> Keys<T> {
    /// Width of the support
    pub const SUPPORT_LENGTH: usize = 4;
    /// Whether the kernel interpolates integer samples exactly
    pub const IS_CARDINAL: bool = true;
    /// Whether integer shifts of the kernel sum to one
    pub const IS_NORMALIZED: bool = true;

    /// Create a Keys kernel with parameter `a`
    pub fn new(a: T) -> Self {
        let coefficients = CubicCoefficients::keys(a);
        debug!(
            element = T::TYPE_NAME,
            a = ?a,
            coefficients = ?coefficients,
            "derived Keys kernel coefficients"
        );
        Self { a, coefficients }
    }

    /// The shape parameter
    pub fn a(&self) -> T {
        self.a
    }

    /// The derived piecewise coefficients
    pub fn coefficients(&self) -> &CubicCoefficients<T> {
        &self.coefficients
    }
}

impl<T: KernelFloat> Default for Keys<T> {
    fn default() -> Self {
        Self::new(T::constant(-0.5))
    }
}

impl<T: KernelFloat> Kernel<T> for Keys<T> {
    #[inline]
    fn support_length(&self) -> usize {
        Self::SUPPORT_LENGTH
    }

    #[inline]
    fn is_cardinal(&self) -> bool {
        Self::IS_CARDINAL
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
        "keys"
    }
}
