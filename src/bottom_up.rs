use crate::count::{merge_into, Stats};

/// Iterative sort-and-count: merges runs of width 1, 2, 4, ... until one run is left.
///
/// Produces the same `(sorted, count)` as [`crate::sort_and_count`] without recursing, so the
/// call depth stays constant however long the input is.
pub fn sort_and_count_bottom_up<T: Ord + Clone>(array: &[T]) -> (Vec<T>, u64) {
    sort_and_count_bottom_up_with_stats(array, &mut Stats::default())
}

pub fn sort_and_count_bottom_up_with_stats<T: Ord + Clone>(
    array: &[T],
    stats: &mut Stats,
) -> (Vec<T>, u64) {
    let n = array.len();
    let mut current = array.to_vec();
    let mut next = Vec::with_capacity(n);
    let mut inversions = 0;
    let mut width = 1;
    while width < n {
        let level_start = inversions;
        for run in current.chunks(2 * width) {
            let (left, right) = run.split_at(width.min(run.len()));
            inversions += merge_into(left, right, &mut next, stats);
        }
        log::debug!(
            "width {width}: {} split inversions",
            inversions - level_start
        );
        std::mem::swap(&mut current, &mut next);
        next.clear();
        width *= 2;
    }
    (current, inversions)
}
