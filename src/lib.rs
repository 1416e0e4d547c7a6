//! Interpolation kernels for resampling sampled signals
//!
//! This is the umbrella crate. It re-exports:
//!
//! - [`resample_core`]: element types, errors and execution engines
//! - [`resample_kernels`]: the kernel families, the runtime-selectable
//!   [`KernelVariant`] and container evaluation
//!
//! ```rust
//! use resample::prelude::*;
//!
//! let kernel = KernelVariant::<f64>::keys(-0.5);
//!
//! // Weights for a sample sitting 0.25 past a grid point
//! let offsets = [1.25, 0.25, -0.75, -1.75];
//! let weights = kernel.evaluate_slice(&offsets);
//! assert!((weights.iter().sum::<f64>() - 1.0).abs() < 1e-12);
//! ```

pub use resample_core;
pub use resample_kernels;

pub use resample_core::{Error, KernelFloat, Result};
pub use resample_kernels::{Kernel, KernelKind, KernelMap, KernelVariant};

/// Everything needed to pick and evaluate kernels
pub mod prelude {
    pub use resample_kernels::prelude::*;
}
