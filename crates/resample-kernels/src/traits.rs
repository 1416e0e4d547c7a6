//! Core traits for interpolation kernels

use num_traits::AsPrimitive;
use resample_core::KernelFloat;

/// A symmetric, compactly supported interpolation kernel
///
/// Implementors are immutable after construction, so a single instance can be
/// shared between threads and evaluated concurrently without locking.
pub trait Kernel<T: KernelFloat = f64>: Clone + Send + Sync + std::fmt::Debug {
    /// Width of the support; the kernel is zero for `|x| >= support_length() / 2`
    fn support_length(&self) -> usize;

    /// Whether the kernel is one at zero and zero at every other integer
    fn is_cardinal(&self) -> bool;

    /// Whether the integer-shifted copies of the kernel sum to one
    fn is_normalized(&self) -> bool;

    /// Evaluate the kernel at an argument already in the element type
    fn eval(&self, x: T) -> T;

    /// Convert `x` to the element type and evaluate the kernel there
    #[inline]
    fn evaluate<X: AsPrimitive<T>>(&self, x: X) -> T
    where
        Self: Sized,
    {
        self.eval(x.as_())
    }

    /// Half the support length
    fn support_radius(&self) -> T {
        T::constant(self.support_length() as f64 / 2.0)
    }

    /// Name of this kernel for debugging/logging
    fn name(&self) -> &'static str;
}
