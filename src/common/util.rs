//! Auxiliary functions.

/// integer logarithm base 2 of a number.
pub fn log2_ceil(mut n: usize) -> usize {
    let mut ret = 0;
    let mut sticky = 0;
    while n > 1 {
        if n & 1 != 0 {
            sticky = 1;
        }
        ret += 1;
        n >>= 1;
    }
    ret + sticky
}

/// Number of decimal digits of a number.
pub fn count_digits(mut n: u64) -> usize {
    let mut ret = 1;
    while n >= 10 {
        ret += 1;
        n /= 10;
    }
    ret
}

/// Number of guard digits absorbing the error growth of `k` repeated squarings.
pub fn squaring_guard(k: usize) -> usize {
    // each squaring doubles the relative error: log10(2) digits per step
    (k * 302 + 999) / 1000
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_util() {
        assert_eq!(log2_ceil(0), 0);
        assert_eq!(log2_ceil(1), 0);
        assert_eq!(log2_ceil(8), 3);
        assert_eq!(log2_ceil(9), 4);

        assert_eq!(count_digits(0), 1);
        assert_eq!(count_digits(9), 1);
        assert_eq!(count_digits(10), 2);
        assert_eq!(count_digits(u64::MAX), 20);

        assert_eq!(squaring_guard(0), 0);
        assert_eq!(squaring_guard(1), 1);
        assert_eq!(squaring_guard(10), 4);
    }
}
