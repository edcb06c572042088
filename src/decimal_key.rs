//! Decimal Digit Keys
//!
//! `DecimalKey` is what the radix sort needs from an element type: a way to
//! pull out one base-10 digit given a place value, and a way to step the
//! place value to the next power of ten.
//!
//! It is implemented out-of-the-box for the unsigned primitive integers:
//!
//!  * `u8`
//!  * `u16`
//!  * `u32`
//!  * `u64`
//!  * `u128`
//!  * `usize`
//!
//! Signed types are intentionally absent, which keeps negative keys
//! unrepresentable rather than unspecified.

/// Base of the positional numeral system the sort works in.
pub const RADIX: usize = 10;

pub trait DecimalKey: Copy + Ord + Send + Sync {
    /// The additive identity, used to initialise scratch buffers.
    const ZERO: Self;
    /// The first place value (the ones place).
    const ONE: Self;

    /// Digit of `self` at `place`, i.e. `(self / place) % RADIX`.
    ///
    /// `place` must be non-zero.
    fn digit_at(self, place: Self) -> usize;

    /// Whether `self` still has a digit at or above `place`
    /// (`self / place > 0`).
    fn reaches(self, place: Self) -> bool;

    /// `place * RADIX`, or `None` once that no longer fits in `Self`.
    fn next_place(place: Self) -> Option<Self>;
}

macro_rules! impl_decimal_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl DecimalKey for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline(always)]
                fn digit_at(self, place: Self) -> usize {
                    debug_assert!(place != 0);
                    ((self / place) % (RADIX as $t)) as usize
                }

                #[inline(always)]
                fn reaches(self, place: Self) -> bool {
                    self / place > 0
                }

                #[inline(always)]
                fn next_place(place: Self) -> Option<Self> {
                    place.checked_mul(RADIX as $t)
                }
            }
        )*
    };
}

impl_decimal_key!(u8, u16, u32, u64, u128, usize);
