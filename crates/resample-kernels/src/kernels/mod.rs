//! The kernel catalog
//!
//! Singleton kernels ([`BoxKernel`], [`Triangle`], [`Quadratic`], [`Cubic`],
//! [`CatmullRom`]) are zero-sized and carry nothing but their element type.
//! Parametrized kernels ([`Keys`], [`MitchellNetravali`]) hold their shape
//! parameters and the cubic coefficients derived from them.
//!
//! Shared instances for `f64` and `f32` are provided as constants; the
//! default parametrized instances are created lazily on first use.

use lazy_static::lazy_static;

/// Declares a zero-sized kernel type whose value is given by an inherent
/// `value(x: T) -> T` function.
macro_rules! singleton_kernel {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal, support = $support:literal, cardinal = $cardinal:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq)]
        pub struct $name<T: KernelFloat = f64>(std::marker::PhantomData<T>);

        impl<T: KernelFloat> $name<T> {
            /// Width of the support
            pub const SUPPORT_LENGTH: usize = $support;
            /// Whether the kernel interpolates integer samples exactly
            pub const IS_CARDINAL: bool = $cardinal;
            /// Whether integer shifts of the kernel sum to one
            pub const IS_NORMALIZED: bool = true;

            /// Create the kernel
            pub const fn new() -> Self {
                Self(std::marker::PhantomData)
            }
        }

        impl<T: KernelFloat> Kernel<T> for $name<T> {
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
                Self::value(x)
            }

            fn name(&self) -> &'static str {
                $label
            }
        }
    };
}

pub(crate) use singleton_kernel;

mod cubic;
mod mitchell_netravali;
mod splines;

pub use cubic::{CatmullRom, Keys};
pub use mitchell_netravali::MitchellNetravali;
pub use splines::{BoxKernel, Cubic, Quadratic, Triangle};

/// Shared box kernel
pub const BOX: BoxKernel<f64> = BoxKernel::new();
/// Shared triangle kernel
pub const TRIANGLE: Triangle<f64> = Triangle::new();
/// Shared quadratic B-spline kernel
pub const QUADRATIC: Quadratic<f64> = Quadratic::new();
/// Shared cubic B-spline kernel
pub const CUBIC: Cubic<f64> = Cubic::new();
/// Shared Catmull-Rom kernel
pub const CATMULL_ROM: CatmullRom<f64> = CatmullRom::new();

/// Shared box kernel, single precision
pub const BOX_F32: BoxKernel<f32> = BoxKernel::new();
/// Shared triangle kernel, single precision
pub const TRIANGLE_F32: Triangle<f32> = Triangle::new();
/// Shared quadratic B-spline kernel, single precision
pub const QUADRATIC_F32: Quadratic<f32> = Quadratic::new();
/// Shared cubic B-spline kernel, single precision
pub const CUBIC_F32: Cubic<f32> = Cubic::new();
/// Shared Catmull-Rom kernel, single precision
pub const CATMULL_ROM_F32: CatmullRom<f32> = CatmullRom::new();

// Default parametrized kernels, derived once per process
lazy_static! {
    /// Keys kernel with `a = -1/2`
    pub static ref DEFAULT_KEYS: Keys<f64> = Keys::default();
    /// Keys kernel with `a = -1/2`, single precision
    pub static ref DEFAULT_KEYS_F32: Keys<f32> = Keys::default();
    /// Mitchell-Netravali kernel with `b = c = 1/3`
    pub static ref DEFAULT_MITCHELL_NETRAVALI: MitchellNetravali<f64> =
        MitchellNetravali::recommended();
    /// Mitchell-Netravali kernel with `b = c = 1/3`, single precision
    pub static ref DEFAULT_MITCHELL_NETRAVALI_F32: MitchellNetravali<f32> =
        MitchellNetravali::recommended();
}
