//! B-spline kernels of degree 0 to 3
//!
//! The box and triangle kernels are the degree 0 and 1 B-splines and are
//! cardinal. The quadratic and cubic B-splines are smoother but blur: they are
//! normalized without being cardinal.

use super::singleton_kernel;
use crate::Kernel;
use resample_core::KernelFloat;

singleton_kernel! {
    /// Box kernel (nearest neighbour), supported on `[-1/2, 1/2)`
    ///
    /// The interval is half-open: `-1/2` is inside the support and `1/2` is
    /// not, so integer shifts of the kernel sum to exactly one everywhere.
    BoxKernel, "box", support = 1, cardinal = true
}

impl<T: KernelFloat> BoxKernel<T> {
    #[inline(always)]
    fn value(x: T) -> T {
        let half = T::constant(0.5);
        if -half <= x && x < half {
            T::one()
        } else {
            T::zero()
        }
    }
}

singleton_kernel! {
    /// Triangle kernel (linear interpolation)
    Triangle, "triangle", support = 2, cardinal = true
}

impl<T: KernelFloat> Triangle<T> {
    #[inline(always)]
    fn value(x: T) -> T {
        let t = x.abs();
        if t < T::one() {
            T::one() - t
        } else {
            T::zero()
        }
    }
}

singleton_kernel! {
    /// Quadratic B-spline
    Quadratic, "quadratic", support = 3, cardinal = false
}

impl<T: KernelFloat> Quadratic<T> {
    #[inline(always)]
    fn value(x: T) -> T {
        let t = x.abs();
        let half = T::constant(0.5);
        let three_halves = T::constant(1.5);
        if t <= half {
            T::constant(0.75) - t * t
        } else if t < three_halves {
            let u = t - three_halves;
            half * u * u
        } else {
            T::zero()
        }
    }
}

singleton_kernel! {
    /// Cubic B-spline
    Cubic, "cubic", support = 4, cardinal = false
}

impl<T: KernelFloat> Cubic<T> {
    #[inline(always)]
    fn value(x: T) -> T {
        let t = x.abs();
        let one = T::one();
        let two = T::constant(2.0);
        if t <= one {
            (t / two - one) * t * t + T::constant(2.0 / 3.0)
        } else if t < two {
            let u = two - t;
            u * u * u / T::constant(6.0)
        } else {
            T::zero()
        }
    }
}
