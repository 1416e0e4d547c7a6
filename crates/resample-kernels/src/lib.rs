//! Piecewise-polynomial interpolation kernels
//!
//! This crate provides the symmetric, compactly supported kernels used to
//! compute interpolation and filter weights when resampling discretely
//! sampled signals.
//!
//! # Kernels
//!
//! | Kernel | Support | Cardinal | Normalized |
//! |---|---|---|---|
//! | [`BoxKernel`] | 1 | yes | yes |
//! | [`Triangle`] | 2 | yes | yes |
//! | [`Quadratic`] | 3 | no | yes |
//! | [`Cubic`] | 4 | no | yes |
//! | [`CatmullRom`] | 4 | yes | yes |
//! | [`Keys`] | 4 | yes | yes |
//! | [`MitchellNetravali`] | 4 | iff `b == 0` | yes |
//!
//! Every kernel is generic over its element type (`f32` or `f64`) and is
//! immutable once built, so instances can be shared freely between threads.
//!
//! # Example
//!
//! ```rust
//! use resample_kernels::{Kernel, KernelMap, Keys, MitchellNetravali, CATMULL_ROM};
//!
//! // Scalar evaluation
//! assert_eq!(CATMULL_ROM.evaluate(0.0), 1.0);
//! assert_eq!(CATMULL_ROM.evaluate(1), 0.0);
//!
//! // Parametrized families derive their coefficients once
//! let keys = Keys::new(-0.75f32);
//! let weights = keys.evaluate_slice(&[-1.25, -0.25, 0.75, 1.75]);
//! let total: f32 = weights.iter().sum();
//! assert!((total - 1.0).abs() < 1e-6);
//!
//! let mitchell = MitchellNetravali::<f64>::recommended();
//! assert!(!mitchell.is_cardinal());
//! ```
//!
//! ## Runtime selection
//!
//! ```rust
//! use resample_kernels::{Kernel, KernelKind, KernelVariant};
//!
//! let kernel = KernelVariant::<f64>::mitchell_netravali(0.0, 0.5);
//! assert!(kernel.is_cardinal());
//! assert_eq!(kernel.support_length(), 4);
//!
//! let blur = KernelVariant::<f32>::default_of(KernelKind::Quadratic);
//! assert!(!blur.is_cardinal());
//! ```

pub mod coefficients;
pub mod kernels;
pub mod map;
pub mod traits;
pub mod variant;

// Re-export main types
pub use coefficients::CubicCoefficients;
pub use kernels::{
    BoxKernel, CatmullRom, Cubic, Keys, MitchellNetravali, Quadratic, Triangle, BOX, BOX_F32,
    CATMULL_ROM, CATMULL_ROM_F32, CUBIC, CUBIC_F32, DEFAULT_KEYS, DEFAULT_KEYS_F32,
    DEFAULT_MITCHELL_NETRAVALI, DEFAULT_MITCHELL_NETRAVALI_F32, QUADRATIC, QUADRATIC_F32,
    TRIANGLE, TRIANGLE_F32,
};
pub use map::KernelMap;
pub use traits::Kernel;
pub use variant::{KernelKind, KernelVariant};

// Re-export from resample-core
pub use resample_core::{Error, KernelFloat, Result};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        BoxKernel, CatmullRom, Cubic, Kernel, KernelKind, KernelMap, KernelVariant, Keys,
        MitchellNetravali, Quadratic, Triangle,
    };
    pub use resample_core::prelude::*;
}
