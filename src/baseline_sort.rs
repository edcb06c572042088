//! Comparison Sort Baseline
//!
//! The standard library's sorts, kept as the reference the radix sort is
//! timed and verified against.

/// Sort a slice in-place using unstable sort (pattern-defeating quicksort).
#[inline]
pub fn sort_unstable<T: Ord>(data: &mut [T]) {
    data.sort_unstable();
}

/// Sort a slice in-place using the standard library's stable sort.
#[inline]
pub fn sort_stable<T: Ord>(data: &mut [T]) {
    data.sort();
}

/// Check if a slice is sorted in ascending order.
#[inline]
pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_sort_unstable_random() {
        let mut rng = rand::thread_rng();
        let mut data: Vec<u32> = (0..1000).map(|_| rng.gen()).collect();
        sort_unstable(&mut data);
        assert!(is_sorted(&data));
    }

    #[test]
    fn test_sort_stable_reverse() {
        let mut data: Vec<u64> = (0..100).rev().collect();
        sort_stable(&mut data);
        assert!(is_sorted(&data));
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted(&[1, 2, 3, 4, 5]));
        assert!(is_sorted(&[1, 1, 1, 1]));
        assert!(is_sorted(&[1]));
        assert!(is_sorted::<u32>(&[]));
        assert!(!is_sorted(&[5, 4, 3, 2, 1]));
        assert!(!is_sorted(&[1, 3, 2]));
    }
}
