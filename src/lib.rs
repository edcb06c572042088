//! # decimal-radix-sort
//!
//! Base-10 LSD radix sort for unsigned integers. Each digit position, ones
//! place first, is a stable counting sort over ten buckets; the number of
//! passes is the digit count of the largest element.
//!
//! ```
//! use decimal_radix_sort::sort;
//!
//! let mut data = vec![1000u32, 1, 999, 10];
//! sort(&mut data);
//! assert_eq!(data, vec![1, 10, 999, 1000]);
//! ```
//!
//! Also included is the benchmark harness behind the `radix-bench` binary and
//! a Links Notation report format for its results.

pub mod baseline_sort;
pub mod decimal_key;
pub mod digit_bucket_sort;
pub mod digit_counts;
pub mod error;
pub mod harness;
pub mod parallel_radix_sort;
pub mod radix_sort;
pub mod report;

pub use decimal_key::{DecimalKey, RADIX};
pub use digit_bucket_sort::digit_bucket_sort;
pub use parallel_radix_sort::parallel_radix_sort;
pub use radix_sort::{digit_passes, radix_sort, sort, RadixSort};
