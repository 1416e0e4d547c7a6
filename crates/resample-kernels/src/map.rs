//! Elementwise kernel evaluation over containers
//!
//! Every element is converted to the kernel's element type and evaluated on
//! its own, so the output always has the input's shape and the kernel's
//! element type whatever the input element type was. Evaluation order is
//! unspecified; the `_with` methods let an [`ExecutionEngine`] spread the work
//! over threads.

use crate::Kernel;
use ndarray::{Array, ArrayBase, Data, Dimension};
use num_traits::AsPrimitive;
use resample_core::{ExecutionEngine, KernelFloat, Result, SequentialEngine};
use tracing::trace;

/// Container evaluation for every [`Kernel`]
pub trait KernelMap<T: KernelFloat>: Kernel<T> + Sized {
    /// Evaluate the kernel at every element of a slice
    fn evaluate_slice<X>(&self, xs: &[X]) -> Vec<T>
    where
        X: AsPrimitive<T> + Sync,
    {
        self.evaluate_slice_with(&SequentialEngine, xs)
    }

    /// Evaluate the kernel at every element of a slice into `out`
    ///
    /// `out` must have the same length as `xs`.
    fn evaluate_into<X>(&self, xs: &[X], out: &mut [T]) -> Result<()>
    where
        X: AsPrimitive<T> + Sync,
    {
        self.evaluate_into_with(&SequentialEngine, xs, out)
    }

    /// Evaluate the kernel at every element of an array of any dimension
    fn evaluate_array<X, S, D>(&self, xs: &ArrayBase<S, D>) -> Array<T, D>
    where
        X: AsPrimitive<T> + Sync,
        S: Data<Elem = X>,
        D: Dimension,
    {
        self.evaluate_array_with(&SequentialEngine, xs)
    }

    /// [`evaluate_slice`](Self::evaluate_slice) driven by `engine`
    fn evaluate_slice_with<E, X>(&self, engine: &E, xs: &[X]) -> Vec<T>
    where
        E: ExecutionEngine,
        X: AsPrimitive<T> + Sync,
    {
        trace!(
            kernel = self.name(),
            len = xs.len(),
            strategy = ?engine.strategy(),
            "evaluating kernel over slice"
        );
        engine.map_elements(xs, |&x| self.eval(x.as_()))
    }

    /// [`evaluate_into`](Self::evaluate_into) driven by `engine`
    fn evaluate_into_with<E, X>(&self, engine: &E, xs: &[X], out: &mut [T]) -> Result<()>
    where
        E: ExecutionEngine,
        X: AsPrimitive<T> + Sync,
    {
        trace!(
            kernel = self.name(),
            len = xs.len(),
            strategy = ?engine.strategy(),
            "evaluating kernel into buffer"
        );
        engine.fill(xs, out, |&x| self.eval(x.as_()))
    }

    /// [`evaluate_array`](Self::evaluate_array) driven by `engine`
    fn evaluate_array_with<E, X, S, D>(&self, engine: &E, xs: &ArrayBase<S, D>) -> Array<T, D>
    where
        E: ExecutionEngine,
        X: AsPrimitive<T> + Sync,
        S: Data<Elem = X>,
        D: Dimension,
    {
        trace!(
            kernel = self.name(),
            shape = ?xs.shape(),
            strategy = ?engine.strategy(),
            "evaluating kernel over array"
        );
        engine.map_array(xs, |&x| self.eval(x.as_()))
    }
}

impl<T: KernelFloat, K: Kernel<T>> KernelMap<T> for K {}
