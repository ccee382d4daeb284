/// Counters collected while sorting, used to observe how much work a run did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Number of element comparisons made by all merges
    pub comparisons: u64,
    /// Number of merge steps performed
    pub merges: u64,
}

impl Stats {
    pub fn absorb(&mut self, other: Stats) {
        self.comparisons += other.comparisons;
        self.merges += other.merges;
    }
}

/// Merges two sorted slices and counts the split inversions between them.
///
/// A split inversion is a pair `(x, y)` with `x` from `a`, `y` from `b` and `x > y`.
/// Equal values are emitted left first and never counted.
///
/// Both inputs must already be sorted ascending; this is only checked in debug builds.
pub fn merge_and_count<T: Ord + Clone>(a: &[T], b: &[T]) -> (Vec<T>, u64) {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let split = merge_into(a, b, &mut merged, &mut Stats::default());
    (merged, split)
}

pub(crate) fn merge_into<T: Ord + Clone>(
    a: &[T],
    b: &[T],
    out: &mut Vec<T>,
    stats: &mut Stats,
) -> u64 {
    debug_assert!(is_sorted(a), "left run is not sorted");
    debug_assert!(is_sorted(b), "right run is not sorted");

    let mut split = 0;
    let mut i = 0;
    let mut j = 0;
    for _ in 0..a.len() + b.len() {
        let take_left = if i == a.len() {
            false
        } else if j == b.len() {
            true
        } else {
            stats.comparisons += 1;
            a[i] <= b[j]
        };
        if take_left {
            out.push(a[i].clone());
            i += 1;
        } else {
            out.push(b[j].clone());
            // everything left in `a` is greater than b[j] and came before it
            split += (a.len() - i) as u64;
            j += 1;
        }
    }
    stats.merges += 1;
    split
}

/// Sorts `array` and counts its inversions, returning `(sorted, count)`.
///
/// The input is left untouched; every level of the recursion produces a fresh `Vec`.
pub fn sort_and_count<T: Ord + Clone>(array: &[T]) -> (Vec<T>, u64) {
    sort_and_count_with_stats(array, &mut Stats::default())
}

/// Same as [`sort_and_count`], additionally accumulating work counters into `stats`.
pub fn sort_and_count_with_stats<T: Ord + Clone>(
    array: &[T],
    stats: &mut Stats,
) -> (Vec<T>, u64) {
    let n = array.len();
    if n <= 1 {
        return (array.to_vec(), 0);
    }

    let (left, right) = array.split_at(n / 2);
    let (sorted_left, left_inv) = sort_and_count_with_stats(left, stats);
    let (sorted_right, right_inv) = sort_and_count_with_stats(right, stats);

    let mut merged = Vec::with_capacity(n);
    let split_inv = merge_into(&sorted_left, &sorted_right, &mut merged, stats);
    (merged, left_inv + right_inv + split_inv)
}

pub fn is_sorted<T: Ord>(array: &[T]) -> bool {
    array.windows(2).all(|w| w[0] <= w[1])
}
