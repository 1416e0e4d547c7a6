//! Core traits and types for resampling kernels
//!
//! This crate provides the foundation the kernel crate is built on:
//!
//! 1. **Element types** - [`KernelFloat`], the floating-point capability every kernel is generic over
//! 2. **Errors** - a unified [`Error`] type for the fallible layers around evaluation
//! 3. **Execution engines** - sequential and Rayon-backed element maps
//!
//! # Example
//!
//! ```rust
//! use resample_core::execution::{sequential, ExecutionEngine};
//!
//! let engine = sequential();
//! let offsets = vec![-0.5, 0.0, 0.5];
//! let doubled = engine.map_elements(&offsets, |x| 2.0 * x);
//! assert_eq!(doubled, vec![-1.0, 0.0, 1.0]);
//! ```

pub mod error;
pub mod execution;
pub mod numeric;

// Re-export core types
pub use error::{Error, Result};

pub use execution::{
    auto_engine, sequential, ExecutionEngine, ExecutionMode, ExecutionStrategy, SequentialEngine,
};
#[cfg(feature = "parallel")]
pub use execution::{parallel, ParallelEngine};

pub use numeric::KernelFloat;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ExecutionEngine, ExecutionStrategy, KernelFloat, Result, SequentialEngine};

    pub use crate::error::Error;

    #[cfg(feature = "parallel")]
    pub use crate::execution::{parallel, ParallelEngine};
    pub use crate::execution::sequential;
}
