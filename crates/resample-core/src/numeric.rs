//! Floating-point element types for kernel evaluation
//!
//! Kernels are piecewise polynomials with fractional breakpoints, so their
//! element type must have floating-point semantics. This module provides the
//! single capability trait that every kernel is generic over.
//!
//! # Design Philosophy
//!
//! - **Float only**: implemented for `f32` and `f64`; asking for a kernel over an
//!   integer element type fails to compile
//! - **Same-precision arithmetic**: constants are converted into the element type
//!   once and all arithmetic stays in that type
//! - **Any real input**: arguments of any primitive numeric type are converted
//!   with [`AsPrimitive`](num_traits::AsPrimitive)

use bytemuck::Pod;
use num_traits::Float;
use std::fmt::{Debug, Display};

/// Element type of a kernel
pub trait KernelFloat:
    Float + Pod + Debug + Display + Default + Send + Sync + 'static
{
    /// Name of the element type, recorded in log events
    const TYPE_NAME: &'static str;

    /// Convert an `f64` literal into this element type
    fn constant(val: f64) -> Self;
}

impl KernelFloat for f64 {
    const TYPE_NAME: &'static str = "f64";

    #[inline(always)]
    fn constant(val: f64) -> Self {
        val
    }
}

impl KernelFloat for f32 {
    const TYPE_NAME: &'static str = "f32";

    #[inline(always)]
    fn constant(val: f64) -> Self {
        val as f32
    }
}
