//! Quadratic reference counters, used to cross-check the merge based ones.

/// Counts pairs `(i, j)` with `i < j` and `array[i] > array[j]` by checking every pair.
pub fn count_inversions_naive<T: Ord>(array: &[T]) -> u64 {
    let mut count = 0;
    for (i, x) in array.iter().enumerate() {
        count += array[i + 1..].iter().filter(|y| x > *y).count() as u64;
    }
    count
}

/// Counts pairs `(x, y)` with `x` from `a`, `y` from `b` and `x > y`.
pub fn count_split_naive<T: Ord>(a: &[T], b: &[T]) -> u64 {
    a.iter()
        .map(|x| b.iter().filter(|y| x > *y).count() as u64)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanity_check() {
        assert_eq!(count_inversions_naive(&[1, 5, 4, 2, 3]), 5);
        assert_eq!(count_inversions_naive(&[1, 2, 3, 4, 5]), 0);
        assert_eq!(count_inversions_naive(&[5, 4, 3, 2, 1]), 10);
        assert_eq!(count_inversions_naive(&[1, 1, 1, 1, 1]), 0);
        assert_eq!(count_split_naive(&[2, 4], &[1, 3, 5]), 3);

        let empty: [(); 0] = [];
        assert_eq!(count_inversions_naive(&empty), 0);
    }
}
