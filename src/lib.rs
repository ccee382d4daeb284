//! Counting inversions with divide-and-conquer merge sort.
//!
//! An inversion is a pair of positions `i < j` with `a[i] > a[j]`. Sorting the sequence with
//! merge sort and counting, at every merge, how many left-run elements each right-run element
//! overtakes gives the total in `O(n log n)`.

pub mod bottom_up;
pub mod count;
#[cfg(test)]
mod naive;
pub mod parallel;
pub mod reader;
pub mod report;
pub mod writer;

pub use bottom_up::sort_and_count_bottom_up;
pub use count::{merge_and_count, sort_and_count, sort_and_count_with_stats, Stats};
pub use parallel::par_sort_and_count;

/// Which sort-and-count implementation to run. All of them return identical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Strategy {
    /// Top-down recursion, splitting at `n / 2`
    #[default]
    Recursive,
    /// Iterative merging of doubling run widths
    BottomUp,
    /// Recursion with the two halves on separate threads
    Parallel,
}

impl Strategy {
    pub fn sort_and_count<T: Ord + Clone + Send + Sync>(self, array: &[T]) -> (Vec<T>, u64) {
        match self {
            Strategy::Recursive => sort_and_count(array),
            Strategy::BottomUp => sort_and_count_bottom_up(array),
            Strategy::Parallel => par_sort_and_count(array),
        }
    }
}
