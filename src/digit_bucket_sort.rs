//! Single Digit Counting Sort
//!
//! One pass of the LSD radix sort: a stable counting sort of the slice by the
//! decimal digit at a given place value.
//!
//! The counts are turned into inclusive prefix sums (one-past-end of each
//! bucket), so the scatter walks the input from the back and fills each bucket
//! from its end. That direction is what keeps equal digits in input order.
//!
//! Complexity: O(n + RADIX) time, O(n + RADIX) extra space per pass.

use crate::decimal_key::DecimalKey;
use crate::digit_counts::DigitCounts;

/// Stably reorder `data` by the digit at `place`.
///
/// # Arguments
/// * `data` - The slice to reorder in-place
/// * `place` - Place value of the digit to sort by (1, 10, 100, ...)
pub fn digit_bucket_sort<T: DecimalKey>(data: &mut [T], place: T) {
    if data.is_empty() {
        return;
    }

    let counts = DigitCounts::tally(data, place);
    digit_bucket_sort_with_counts(data, place, counts);
}

/// Same as [`digit_bucket_sort`], with the tally already done.
///
/// `counts` must be the raw tallies of `data` at `place`.
pub fn digit_bucket_sort_with_counts<T: DecimalKey>(
    data: &mut [T],
    place: T,
    counts: DigitCounts,
) {
    let n = data.len();
    if n == 0 {
        return;
    }
    debug_assert_eq!(counts.total(), n);

    let mut bounds = counts.into_upper_bounds();
    let mut output = vec![T::ZERO; n];

    for &value in data.iter().rev() {
        let digit = value.digit_at(place);
        bounds[digit] -= 1;
        output[bounds[digit]] = value;
    }

    data.copy_from_slice(&output);
}
