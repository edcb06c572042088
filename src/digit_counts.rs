use std::ops::{Index, IndexMut};
use std::slice::SliceIndex;

use crate::decimal_key::{DecimalKey, RADIX};

/// Per-digit bucket counters for a single pass.
///
/// Holds either raw tallies or, after `into_upper_bounds`, the one-past-end
/// insertion boundary of each bucket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DigitCounts([usize; RADIX]);

impl<I> Index<I> for DigitCounts
where
    I: SliceIndex<[usize]>,
{
    type Output = I::Output;

    #[inline(always)]
    fn index(&self, index: I) -> &I::Output {
        &self.0[index]
    }
}

impl<I> IndexMut<I> for DigitCounts
where
    I: SliceIndex<[usize]>,
{
    #[inline(always)]
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        &mut self.0[index]
    }
}

impl DigitCounts {
    /// Count how many elements of `data` have each digit at `place`.
    pub fn tally<T: DecimalKey>(data: &[T], place: T) -> Self {
        let mut counts = DigitCounts::default();
        for &value in data {
            counts.0[value.digit_at(place)] += 1;
        }

        counts
    }

    /// Add another set of tallies (from a disjoint range) into this one.
    #[inline]
    pub fn merge(mut self, other: DigitCounts) -> Self {
        for (c, o) in self.0.iter_mut().zip(other.0) {
            *c += o;
        }

        self
    }

    /// Inclusive prefix sum: `count[d]` becomes the number of elements with
    /// digit `<= d`.
    #[inline]
    pub fn into_upper_bounds(mut self) -> Self {
        for d in 1..RADIX {
            self.0[d] += self.0[d - 1];
        }

        self
    }

    /// Total number of elements counted.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    #[inline]
    pub fn inner(&self) -> &[usize; RADIX] {
        &self.0
    }
}
