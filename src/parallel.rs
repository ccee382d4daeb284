//! Fork/join sort-and-count.
//!
//! The two halves of every split are independent, so above a size cutoff the left half is
//! handed to a scoped thread while the current thread works on the right half. Both results
//! are joined before merging, which keeps the output identical to the sequential version.

use std::thread;

use crate::count::{merge_into, sort_and_count_with_stats, Stats};

/// Slices at or below this length are always handled sequentially.
pub const DEFAULT_CUTOFF: usize = 4096;

/// Runs sort-and-count across the available cores.
pub fn par_sort_and_count<T: Ord + Clone + Send + Sync>(array: &[T]) -> (Vec<T>, u64) {
    let threads = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    // every fork level doubles the number of busy threads, one core never forks
    let depth = fork_depth(threads);
    log::debug!("{threads} threads available, forking up to depth {depth}");
    par_sort_and_count_with(array, DEFAULT_CUTOFF, depth, &mut Stats::default())
}

fn fork_depth(threads: usize) -> usize {
    threads.max(1).ilog2() as usize
}

/// Like [`par_sort_and_count`] with an explicit size `cutoff` and fork `depth`.
///
/// A `depth` of zero never spawns a thread.
pub fn par_sort_and_count_with<T: Ord + Clone + Send + Sync>(
    array: &[T],
    cutoff: usize,
    depth: usize,
    stats: &mut Stats,
) -> (Vec<T>, u64) {
    let n = array.len();
    if depth == 0 || n <= cutoff.max(1) {
        return sort_and_count_with_stats(array, stats);
    }

    let (left, right) = array.split_at(n / 2);
    log::debug!("forking {n} elements, {depth} levels left");
    let ((sorted_left, left_inv, left_stats), (sorted_right, right_inv)) = thread::scope(|s| {
        let handle = s.spawn(|| {
            let mut stats = Stats::default();
            let (sorted, inv) = par_sort_and_count_with(left, cutoff, depth - 1, &mut stats);
            (sorted, inv, stats)
        });
        let right = par_sort_and_count_with(right, cutoff, depth - 1, stats);
        let left = handle
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
        (left, right)
    });
    stats.absorb(left_stats);

    let mut merged = Vec::with_capacity(n);
    let split_inv = merge_into(&sorted_left, &sorted_right, &mut merged, stats);
    (merged, left_inv + right_inv + split_inv)
}
