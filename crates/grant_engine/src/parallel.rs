//! Rayon-based parallelisation utilities.
//!
//! Valuations are pure and independent, so scenario sets fan out across
//! the Rayon pool once they are large enough to be worth it. Output order
//! always matches input order.

use rayon::prelude::*;

/// Minimum number of scenarios before work is spread over the thread pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4;

/// Configuration for parallel execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Minimum items before using parallelism
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }

    /// Configuration that never leaves the calling thread.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
        }
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        n_items >= self.parallel_threshold
    }
}

/// Fallible ordered map, parallel above the configured threshold.
///
/// Stops at (one of) the first failures and returns it.
///
/// # Arguments
///
/// * `items` - Slice of items to process
/// * `config` - Threshold configuration
/// * `mapper` - Function to apply to each item
pub fn try_parallel_map<T, R, E, F>(
    items: &[T],
    config: &ParallelConfig,
    mapper: F,
) -> Result<Vec<R>, E>
where
    T: Sync,
    R: Send,
    E: Send,
    F: Fn(&T) -> Result<R, E> + Sync + Send,
{
    if config.should_parallelize(items.len()) {
        items.par_iter().map(mapper).collect()
    } else {
        items.iter().map(mapper).collect()
    }
}
