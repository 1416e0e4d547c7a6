//! Execution engines for controlling evaluation strategy
//!
//! Kernel evaluation over a container is embarrassingly parallel: every
//! element is independent. The engines here decide whether that map runs on
//! the current thread or on a Rayon pool. Both produce identical output.
//!
//! # Design Philosophy
//!
//! - **Unified Control**: one engine value selects the strategy for every mapping call
//! - **Zero-Cost**: the sequential engine is a plain iterator map
//! - **Thread Pool Integration**: the parallel engine uses Rayon's global pool or a sized one of its own
//! - **Shape Preserving**: array maps keep the input's dimension and shape

use crate::{Error, Result};
use ndarray::{Array, ArrayBase, Data, Dimension};

/// Execution strategy for mapping operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Process items sequentially
    Sequential,
    /// Process items in parallel
    Parallel,
}

/// Work partitioning for an execution engine
pub trait ExecutionMode {
    /// Optimal chunk size for this execution mode
    fn chunk_size(n_items: usize, n_threads: usize) -> usize;
}

/// Trait for execution engines that control how element maps are performed
pub trait ExecutionEngine: Clone + Send + Sync + ExecutionMode {
    /// Map a function over every element of a slice, preserving order
    fn map_elements<U, F, R>(&self, data: &[U], f: F) -> Vec<R>
    where
        U: Sync,
        F: Fn(&U) -> R + Sync + Send,
        R: Send;

    /// Map a function over a slice, writing results into `out`
    ///
    /// Fails if `out` does not have the same length as `data`.
    fn fill<U, F, R>(&self, data: &[U], out: &mut [R], f: F) -> Result<()>
    where
        U: Sync,
        F: Fn(&U) -> R + Sync + Send,
        R: Send;

    /// Map a function over every element of an array of any dimension
    ///
    /// The result has the same shape as `data`.
    fn map_array<A, S, D, F, R>(&self, data: &ArrayBase<S, D>, f: F) -> Array<R, D>
    where
        A: Sync,
        S: Data<Elem = A>,
        D: Dimension,
        F: Fn(&A) -> R + Sync + Send,
        R: Send;

    /// Get the execution strategy
    fn strategy(&self) -> ExecutionStrategy;

    /// Check if parallel execution is available
    fn is_parallel(&self) -> bool {
        matches!(self.strategy(), ExecutionStrategy::Parallel)
    }

    /// Get the number of threads available
    fn num_threads(&self) -> usize;
}

fn check_output_len(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(Error::size_mismatch(expected, actual, "output buffer"));
    }
    Ok(())
}

/// Sequential execution engine
///
/// Executes all operations sequentially in the current thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialEngine;

impl SequentialEngine {
    /// Create a new sequential engine
    pub fn new() -> Self {
        Self
    }
}

impl ExecutionMode for SequentialEngine {
    fn chunk_size(_n_items: usize, _n_threads: usize) -> usize {
        // Process all items in one "chunk" for sequential
        usize::MAX
    }
}

impl ExecutionEngine for SequentialEngine {
    fn map_elements<U, F, R>(&self, data: &[U], f: F) -> Vec<R>
    where
        U: Sync,
        F: Fn(&U) -> R + Sync + Send,
        R: Send,
    {
        data.iter().map(f).collect()
    }

    fn fill<U, F, R>(&self, data: &[U], out: &mut [R], f: F) -> Result<()>
    where
        U: Sync,
        F: Fn(&U) -> R + Sync + Send,
        R: Send,
    {
        check_output_len(data.len(), out.len())?;
        for (slot, x) in out.iter_mut().zip(data) {
            *slot = f(x);
        }
        Ok(())
    }

    fn map_array<A, S, D, F, R>(&self, data: &ArrayBase<S, D>, f: F) -> Array<R, D>
    where
        A: Sync,
        S: Data<Elem = A>,
        D: Dimension,
        F: Fn(&A) -> R + Sync + Send,
        R: Send,
    {
        data.map(f)
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Sequential
    }

    fn num_threads(&self) -> usize {
        1
    }
}

/// Parallel execution engine using Rayon
///
/// Executes operations in parallel using Rayon's thread pool.
#[cfg(feature = "parallel")]
#[derive(Clone, Debug, Default)]
pub struct ParallelEngine {
    thread_pool: Option<std::sync::Arc<rayon::ThreadPool>>,
}

#[cfg(feature = "parallel")]
impl ParallelEngine {
    /// Create a new parallel engine with default thread pool
    pub fn new() -> Self {
        Self { thread_pool: None }
    }

    /// Create with a specific number of threads
    pub fn with_num_threads(num_threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map_err(|e| Error::Execution(format!("Failed to create thread pool: {e}")))?;

        Ok(Self {
            thread_pool: Some(std::sync::Arc::new(pool)),
        })
    }

    fn install<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.thread_pool {
            Some(pool) => pool.install(f),
            None => f(),
        }
    }
}

#[cfg(feature = "parallel")]
impl ExecutionMode for ParallelEngine {
    fn chunk_size(n_items: usize, n_threads: usize) -> usize {
        let target_chunks = n_threads.max(1) * 6;
        let chunk_size = n_items.div_ceil(target_chunks);
        chunk_size.max(64).min(n_items.max(1))
    }
}

#[cfg(feature = "parallel")]
impl ExecutionEngine for ParallelEngine {
    fn map_elements<U, F, R>(&self, data: &[U], f: F) -> Vec<R>
    where
        U: Sync,
        F: Fn(&U) -> R + Sync + Send,
        R: Send,
    {
        use rayon::prelude::*;

        self.install(|| data.par_iter().map(f).collect())
    }

    fn fill<U, F, R>(&self, data: &[U], out: &mut [R], f: F) -> Result<()>
    where
        U: Sync,
        F: Fn(&U) -> R + Sync + Send,
        R: Send,
    {
        use rayon::prelude::*;

        check_output_len(data.len(), out.len())?;
        let chunk = Self::chunk_size(data.len(), self.num_threads());
        self.install(|| {
            out.par_chunks_mut(chunk)
                .zip(data.par_chunks(chunk))
                .for_each(|(slots, xs)| {
                    for (slot, x) in slots.iter_mut().zip(xs) {
                        *slot = f(x);
                    }
                });
        });
        Ok(())
    }

    fn map_array<A, S, D, F, R>(&self, data: &ArrayBase<S, D>, f: F) -> Array<R, D>
    where
        A: Sync,
        S: Data<Elem = A>,
        D: Dimension,
        F: Fn(&A) -> R + Sync + Send,
        R: Send,
    {
        // A view is Send whenever A: Sync, whatever the storage type
        let view = data.view();
        self.install(move || ndarray::Zip::from(view).par_map_collect(f))
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Parallel
    }

    fn num_threads(&self) -> usize {
        if let Some(pool) = &self.thread_pool {
            pool.current_num_threads()
        } else {
            rayon::current_num_threads()
        }
    }
}

/// Create a sequential engine
pub fn sequential() -> SequentialEngine {
    SequentialEngine::new()
}

/// Create a parallel engine on Rayon's global pool
#[cfg(feature = "parallel")]
pub fn parallel() -> ParallelEngine {
    ParallelEngine::new()
}

/// Create an auto-selected engine based on available features
pub fn auto_engine() -> impl ExecutionEngine {
    #[cfg(feature = "parallel")]
    {
        parallel()
    }
    #[cfg(not(feature = "parallel"))]
    {
        sequential()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array3};

    #[test]
    fn test_sequential_engine() {
        let engine = sequential();

        let data = vec![1.0, 2.0, 3.0];
        let doubled = engine.map_elements(&data, |x| x * 2.0);
        assert_eq!(doubled, vec![2.0, 4.0, 6.0]);

        let mut out = vec![0.0; 3];
        engine.fill(&data, &mut out, |x| x + 1.0).unwrap();
        assert_eq!(out, vec![2.0, 3.0, 4.0]);

        assert_eq!(engine.strategy(), ExecutionStrategy::Sequential);
        assert!(!engine.is_parallel());
        assert_eq!(engine.num_threads(), 1);
    }

    #[test]
    fn test_fill_rejects_wrong_length() {
        let engine = sequential();
        let data = [1.0, 2.0, 3.0];
        let mut out = [0.0; 2];
        let err = engine.fill(&data, &mut out, |x| *x).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_map_array_preserves_shape() {
        let engine = sequential();
        let data = array![[1, 2, 3], [4, 5, 6]];
        let out = engine.map_array(&data, |&x| x as f32 * 0.5);
        assert_eq!(out.shape(), &[2, 3]);
        assert_eq!(out[[1, 2]], 3.0);

        let cube = Array3::<f64>::zeros((2, 3, 4));
        let out = engine.map_array(&cube.view(), |x| x + 1.0);
        assert_eq!(out.dim(), (2, 3, 4));
        assert!(out.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_auto_engine() {
        let engine = auto_engine();
        assert!(engine.num_threads() > 0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_engine() {
        let engine = parallel();

        let data: Vec<f64> = (0..10_000).map(|i| i as f64).collect();
        let squares = engine.map_elements(&data, |x| x * x);
        assert_eq!(squares[9_999], 9_999.0 * 9_999.0);

        let mut out = vec![0.0; data.len()];
        engine.fill(&data, &mut out, |x| -x).unwrap();
        assert_eq!(out[1234], -1234.0);

        assert_eq!(engine.strategy(), ExecutionStrategy::Parallel);
        assert!(engine.num_threads() > 0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_engine_with_dedicated_pool() {
        let engine = ParallelEngine::with_num_threads(2).unwrap();
        assert_eq!(engine.num_threads(), 2);

        let data = array![[0.0, 1.0], [2.0, 3.0]];
        let out = engine.map_array(&data, |x| x * 10.0);
        assert_eq!(out, array![[0.0, 10.0], [20.0, 30.0]]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_map_array_over_any_storage() {
        fn halve<S, D>(engine: &ParallelEngine, data: &ArrayBase<S, D>) -> Array<f64, D>
        where
            S: Data<Elem = f64>,
            D: Dimension,
        {
            engine.map_array(data, |x| x * 0.5)
        }

        let engine = parallel();
        let owned = Array3::from_shape_fn((6, 5, 4), |(i, j, k)| (i * 20 + j * 4 + k) as f64);
        let expected = sequential().map_array(&owned, |x| x * 0.5);

        assert_eq!(halve(&engine, &owned), expected);
        assert_eq!(halve(&engine, &owned.view()), expected);

        let transposed = owned.t();
        let out = halve(&engine, &transposed);
        assert_eq!(out.dim(), (4, 5, 6));
        assert_eq!(out, expected.t());

        let shared = owned.into_shared();
        assert_eq!(halve(&engine, &shared), expected);
    }
}
