//! LSD Radix Sort
//!
//! Drives [`digit_bucket_sort`] over every decimal digit of the largest
//! element, ones place first. Each pass is stable, so after the pass for the
//! most significant digit the whole slice is in ascending order.
//!
//! The number of passes depends on the data, not on the width of `T`: it is
//! the digit count of the maximum element.
//!
//! Complexity: O(d * (n + 10)) where d is the number of decimal digits of the
//! maximum element.

use crate::decimal_key::DecimalKey;
use crate::digit_bucket_sort::digit_bucket_sort;

/// Sort a slice in-place, ascending.
///
/// This is the crate's main entry point and is equivalent to [`radix_sort`].
#[inline]
pub fn sort<T: DecimalKey>(data: &mut [T]) {
    radix_sort(data);
}

/// Sort a slice in-place using base-10 LSD radix sort.
///
/// # Arguments
/// * `data` - The slice to sort in-place
pub fn radix_sort<T: DecimalKey>(data: &mut [T]) {
    for_each_place(data, digit_bucket_sort);
}

/// Run `pass` once per decimal digit of the maximum element of `data`, with
/// place values 1, 10, 100, ...
///
/// Stops when `max / place == 0` or when the next place value would overflow
/// `T`; in the latter case every digit of `max` has already been visited.
pub(crate) fn for_each_place<T, F>(data: &mut [T], mut pass: F)
where
    T: DecimalKey,
    F: FnMut(&mut [T], T),
{
    // Nothing to find a maximum of.
    let Some(&max) = data.iter().max() else {
        return;
    };

    let mut place = T::ONE;
    while max.reaches(place) {
        pass(data, place);

        match T::next_place(place) {
            Some(next) => place = next,
            None => break,
        }
    }
}

/// Number of digit passes a slice whose largest element is `max` needs.
///
/// This is the decimal digit count of `max`, except that `max == 0` needs no
/// pass at all: the loop test `max / place > 0` fails immediately.
pub fn digit_passes<T: DecimalKey>(max: T) -> usize {
    let mut passes = 0;
    let mut place = T::ONE;
    while max.reaches(place) {
        passes += 1;
        match T::next_place(place) {
            Some(next) => place = next,
            None => break,
        }
    }

    passes
}

pub trait RadixSort {
    /// Sort ascending with base-10 LSD radix sort, see [`radix_sort`].
    fn radix_sort_lsd(&mut self);
}

impl<T: DecimalKey> RadixSort for [T] {
    fn radix_sort_lsd(&mut self) {
        radix_sort(self);
    }
}

impl<T: DecimalKey> RadixSort for Vec<T> {
    fn radix_sort_lsd(&mut self) {
        radix_sort(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::baseline_sort::is_sorted;
    use rand::Rng;

    #[test]
    fn test_sort_empty() {
        let mut data: Vec<u32> = vec![];
        sort(&mut data);
        assert!(data.is_empty());
    }

    #[test]
    fn test_sort_single() {
        let mut data = vec![5u32];
        sort(&mut data);
        assert_eq!(data, vec![5]);
    }

    #[test]
    fn test_sort_duplicates() {
        let mut data = vec![3u32, 1, 3, 2, 1];
        sort(&mut data);
        assert_eq!(data, vec![1, 1, 2, 3, 3]);
    }

    #[test]
    fn test_sort_all_zero() {
        let mut data = vec![0u32, 0, 0];
        sort(&mut data);
        assert_eq!(data, vec![0, 0, 0]);
    }

    #[test]
    fn test_sort_large_magnitude_spread() {
        let mut data = vec![1000u32, 1, 999, 10];
        sort(&mut data);
        assert_eq!(data, vec![1, 10, 999, 1000]);
    }

    #[test]
    fn test_sort_sorted() {
        let mut data: Vec<u32> = (0..100).collect();
        sort(&mut data);
        assert_eq!(data, (0..100).collect::<Vec<u32>>());
    }

    #[test]
    fn test_sort_reverse() {
        let mut data: Vec<u32> = (0..100).rev().collect();
        sort(&mut data);
        assert_eq!(data, (0..100).collect::<Vec<u32>>());
    }

    #[test]
    fn test_sort_random() {
        let mut rng = rand::thread_rng();
        let mut data: Vec<u32> = (0..10_000).map(|_| rng.gen_range(0..10_000)).collect();
        let mut expected = data.clone();
        expected.sort_unstable();

        sort(&mut data);
        assert!(is_sorted(&data));
        assert_eq!(data, expected);
    }

    #[test]
    fn test_sort_max_values() {
        let mut data = vec![u32::MAX, 0, u32::MAX / 2, 1, u32::MAX - 1];
        sort(&mut data);
        assert_eq!(data, vec![0, 1, u32::MAX / 2, u32::MAX - 1, u32::MAX]);

        let mut data = vec![u8::MAX, 0, 200, 99, 255, 7];
        sort(&mut data);
        assert_eq!(data, vec![0, 7, 99, 200, 255, 255]);

        let mut data = vec![u128::MAX, 1, u128::MAX - 10, u64::MAX as u128];
        sort(&mut data);
        assert_eq!(data, vec![1, u64::MAX as u128, u128::MAX - 10, u128::MAX]);
    }

    #[test]
    fn test_sort_is_deterministic() {
        let mut rng = rand::thread_rng();
        let input: Vec<u64> = (0..5000).map(|_| rng.gen()).collect();
        let mut a = input.clone();
        let mut b = input;
        sort(&mut a);
        sort(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_passes_match_max_digit_count() {
        let mut visited = Vec::new();
        let mut data = vec![42u32, 7, 12_345, 0];
        for_each_place(&mut data, |d, place| {
            visited.push(place);
            digit_bucket_sort(d, place);
        });
        assert_eq!(visited, vec![1, 10, 100, 1000, 10_000]);
        assert_eq!(data, vec![0, 7, 42, 12_345]);
    }

    #[test]
    fn test_each_pass_orders_processed_digits() {
        let mut rng = rand::thread_rng();
        let mut data: Vec<u64> = (0..2000).map(|_| rng.gen_range(0..10_000_000)).collect();
        let mut passes = 0;

        for_each_place(&mut data, |d, place| {
            digit_bucket_sort(d, place);
            passes += 1;

            // The low digits up to and including `place` are now in order.
            let modulus = place * 10;
            assert!(
                d.windows(2).all(|w| w[0] % modulus <= w[1] % modulus),
                "not ordered by the low digits after the pass at place {}",
                place
            );
        });

        assert_eq!(passes, digit_passes(*data.iter().max().unwrap()));
        assert!(is_sorted(&data));
    }

    #[test]
    fn test_digit_passes() {
        assert_eq!(digit_passes(0u32), 0);
        assert_eq!(digit_passes(9u32), 1);
        assert_eq!(digit_passes(10u32), 2);
        assert_eq!(digit_passes(999u32), 3);
        assert_eq!(digit_passes(1000u32), 4);
        assert_eq!(digit_passes(u8::MAX), 3);
        assert_eq!(digit_passes(u32::MAX), 10);
        assert_eq!(digit_passes(u64::MAX), 20);
        assert_eq!(digit_passes(u128::MAX), 39);
    }

    #[test]
    fn test_radix_sort_trait() {
        let mut data = vec![30u16, 2, 200, 20];
        data.radix_sort_lsd();
        assert_eq!(data, vec![2, 20, 30, 200]);

        let mut arr = [9usize, 100, 0, 55];
        arr[..].radix_sort_lsd();
        assert_eq!(arr, [0, 9, 55, 100]);
    }
}
