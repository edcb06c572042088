//! Parallel Counting with Rayon
//!
//! Same passes as [`radix_sort`](crate::radix_sort::radix_sort), but the
//! tally at the start of each pass is split across worker ranges and the
//! partial counts are merged. The scatter itself stays sequential: it is the
//! backward walk that makes each pass stable, so results are identical to the
//! single-threaded sort.

use rayon::prelude::*;

use crate::decimal_key::DecimalKey;
use crate::digit_bucket_sort::digit_bucket_sort_with_counts;
use crate::digit_counts::DigitCounts;
use crate::radix_sort::for_each_place;

/// Below this many elements the tally is done on the calling thread.
pub const PARALLEL_THRESHOLD: usize = 1 << 16;

/// Tally digits at `place` across all rayon workers.
pub fn par_tally<T: DecimalKey>(data: &[T], place: T) -> DigitCounts {
    let chunk_size = (data.len() / rayon::current_num_threads()).max(1);

    data.par_chunks(chunk_size)
        .map(|chunk| DigitCounts::tally(chunk, place))
        .reduce(DigitCounts::default, DigitCounts::merge)
}

/// Radix sort with the per-pass counting phase parallelised.
///
/// # Arguments
///
/// * `data` - Mutable slice to sort in place
///
/// # Example
///
/// ```
/// use decimal_radix_sort::parallel_radix_sort;
///
/// let mut data = vec![40u32, 2, 300, 1];
/// parallel_radix_sort(&mut data);
/// assert_eq!(data, vec![1, 2, 40, 300]);
/// ```
pub fn parallel_radix_sort<T: DecimalKey>(data: &mut [T]) {
    let parallel = data.len() >= PARALLEL_THRESHOLD;

    for_each_place(data, |data, place| {
        let counts = if parallel {
            par_tally(data, place)
        } else {
            DigitCounts::tally(data, place)
        };
        digit_bucket_sort_with_counts(data, place, counts);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::baseline_sort::is_sorted;
    use crate::radix_sort::radix_sort;
    use rand::Rng;

    #[test]
    fn test_par_tally_matches_sequential() {
        let mut rng = rand::thread_rng();
        let data: Vec<u64> = (0..200_000).map(|_| rng.gen_range(0..1_000_000)).collect();

        for place in [1u64, 10, 100, 1000, 10_000, 100_000] {
            assert_eq!(par_tally(&data, place), DigitCounts::tally(&data, place));
        }
    }

    #[test]
    fn test_par_tally_short_input() {
        let data = [5u32, 15, 25];
        assert_eq!(par_tally(&data, 1)[5], 3);
        assert_eq!(par_tally(&data, 10).total(), 3);
    }

    #[test]
    fn test_parallel_radix_sort_small() {
        let mut data = vec![4u32, 2, 1, 3, 8, 6, 5, 7];
        parallel_radix_sort(&mut data);
        assert_eq!(data, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_parallel_radix_sort_random() {
        let mut rng = rand::thread_rng();
        let size = 300_000u32;
        let mut data: Vec<u32> = (0..size).map(|_| rng.gen_range(0..size)).collect();
        let mut expected = data.clone();
        radix_sort(&mut expected);

        parallel_radix_sort(&mut data);
        assert!(is_sorted(&data));
        assert_eq!(data, expected);
    }

    #[test]
    fn test_parallel_radix_sort_empty() {
        let mut data: Vec<u32> = vec![];
        parallel_radix_sort(&mut data);
        assert!(data.is_empty());
    }

    #[test]
    fn test_parallel_radix_sort_already_sorted() {
        let mut data: Vec<u32> = (0..100_000).collect();
        let expected = data.clone();
        parallel_radix_sort(&mut data);
        assert_eq!(data, expected);
    }

    #[test]
    fn test_parallel_radix_sort_reverse_sorted() {
        let mut data: Vec<u32> = (0..100_000).rev().collect();
        parallel_radix_sort(&mut data);
        assert_eq!(data, (0..100_000).collect::<Vec<u32>>());
    }
}
