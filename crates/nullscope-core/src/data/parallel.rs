//! Parallel processing configuration for whole-table scans
//!
//! Counting non-null cells along the row axis touches every cell of the
//! table. Once the cell count exceeds a configurable threshold the scan is
//! split across columns with Rayon.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default threshold for automatic parallelization (10,000 cells)
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 10_000;

/// Global parallel threshold - scans over more cells than this will be parallelized
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Get the current parallel threshold
#[must_use]
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel threshold
///
/// Set to 0 to always parallelize, or `usize::MAX` to disable parallelization.
pub fn set_parallel_threshold(threshold: usize) {
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// Check if a scan over the given number of cells should run in parallel
#[must_use]
pub(crate) fn should_parallelize(num_cells: usize) -> bool {
    num_cells > parallel_threshold()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_parallelize_against_threshold() {
        let threshold = parallel_threshold();
        assert!(!should_parallelize(threshold));
        assert!(should_parallelize(threshold.saturating_add(1)) || threshold == usize::MAX);
    }
}
