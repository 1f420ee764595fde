//! Decimal kernel: the primitive arithmetic all functions are built on.
//!
//! Algorithms are written once against [`Kernel`] and [`Value`], and instantiated
//! for every kernel implementation. The crate provides the implementation
//! for `dec::Context<dec::Decimal<N>>`, a safe binding to libdecNumber.

use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::Status;
use core::fmt::Debug;
use core::fmt::Display;
use dec::Context as DecContext;
use dec::Decimal;
use dec::Rounding;

/// Decimal number with special values.
pub trait Value: Copy + Debug + Display + PartialEq + PartialOrd {
    /// Returns positive zero.
    fn zero() -> Self;

    /// Returns a quiet NaN.
    fn nan() -> Self;

    /// Returns positive infinity.
    fn infinity() -> Self;

    /// Returns true if the number is NaN.
    fn is_nan(&self) -> bool;

    /// Returns true if the number is infinite.
    fn is_infinite(&self) -> bool;

    /// Returns true if the number is zero of either sign.
    fn is_zero(&self) -> bool;

    /// Returns true if the sign of the number is negative, including -0 and -Inf.
    fn is_negative(&self) -> bool;

    /// Returns the exponent of the least significant digit.
    fn exponent(&self) -> i32;

    /// Returns the number of digits of the coefficient.
    fn digits(&self) -> u32;

    /// Returns true if the number is neither NaN nor infinite.
    fn is_finite(&self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }

    /// Returns true if the number is finite and greater than zero.
    fn is_positive(&self) -> bool {
        self.is_finite() && !self.is_zero() && !self.is_negative()
    }

    /// Exponent of the most significant digit, i.e. `floor(log10(|x|))` for finite non-zero x.
    fn adjusted_exponent(&self) -> i64 {
        self.exponent() as i64 + self.digits() as i64 - 1
    }
}

/// Decimal arithmetic context: precision, rounding, status, and correctly rounded primitives.
///
/// All arithmetic results are rounded to the current precision with the current rounding mode.
pub trait Kernel: Default {
    /// Number type of the kernel.
    type Num: Value;

    /// Largest precision the kernel can hold.
    fn capacity(&self) -> usize;

    /// Returns the working precision in decimal digits.
    fn precision(&self) -> usize;

    /// Sets the working precision in decimal digits.
    ///
    /// ## Errors
    ///
    ///  - InvalidPrecision: `digits` is zero or exceeds the capacity.
    fn set_precision(&mut self, digits: usize) -> Result<(), Error>;

    /// Sets the range of the adjusted exponent.
    ///
    /// ## Errors
    ///
    ///  - InvalidExponentRange: the range is not supported.
    fn set_exponent_range(&mut self, emin: isize, emax: isize) -> Result<(), Error>;

    /// Returns the rounding mode.
    fn rounding(&self) -> RoundingMode;

    /// Sets the rounding mode.
    fn set_rounding(&mut self, rm: RoundingMode);

    /// Returns accumulated status flags.
    fn status(&self) -> Status;

    /// Clears the status flags.
    fn clear_status(&mut self);

    /// Parses a decimal number rounded to the working precision.
    ///
    /// ## Errors
    ///
    ///  - Parse: `s` is not a decimal number.
    fn parse(&mut self, s: &str) -> Result<Self::Num, Error>;

    /// Converts an integer, rounded to the working precision.
    fn from_i64(&mut self, n: i64) -> Self::Num;

    /// Converts an unsigned integer, rounded to the working precision.
    fn from_u64(&mut self, n: u64) -> Self::Num;

    /// Converts a finite double through its shortest round-trip decimal, rounded to the working precision.
    fn from_f64(&mut self, f: f64) -> Self::Num;

    /// Converts to the nearest double. Magnitudes outside of the double range give infinity or zero.
    fn to_f64(&self, a: &Self::Num) -> f64;

    /// Converts an integer-valued number, or returns `None` if it is not an integer or does not fit.
    fn to_i64(&self, a: &Self::Num) -> Option<i64>;

    /// Returns `a * 10^n`.
    fn scaleb(&mut self, a: &Self::Num, n: i64) -> Self::Num;

    /// Returns `a + b`.
    fn add(&mut self, a: &Self::Num, b: &Self::Num) -> Self::Num;

    /// Returns `a - b`.
    fn sub(&mut self, a: &Self::Num, b: &Self::Num) -> Self::Num;

    /// Returns `a * b`.
    fn mul(&mut self, a: &Self::Num, b: &Self::Num) -> Self::Num;

    /// Returns `a / b`.
    fn div(&mut self, a: &Self::Num, b: &Self::Num) -> Self::Num;

    /// Integer part of `a / b`, truncated toward zero.
    fn div_integer(&mut self, a: &Self::Num, b: &Self::Num) -> Self::Num;

    /// Remainder of the truncating division, with the sign of `a`.
    fn rem(&mut self, a: &Self::Num, b: &Self::Num) -> Self::Num;

    /// Rounds `a` to the exponent of `b`.
    fn quantize(&mut self, a: &Self::Num, b: &Self::Num) -> Self::Num;

    /// Correctly rounded natural logarithm.
    fn ln(&mut self, a: &Self::Num) -> Self::Num;

    /// Correctly rounded logarithm base 10.
    fn log10(&mut self, a: &Self::Num) -> Self::Num;
}

impl<const N: usize> Value for Decimal<N> {
    fn zero() -> Self {
        Decimal::<N>::zero()
    }

    fn nan() -> Self {
        Decimal::<N>::nan()
    }

    fn infinity() -> Self {
        Decimal::<N>::infinity()
    }

    fn is_nan(&self) -> bool {
        Decimal::<N>::is_nan(self)
    }

    fn is_infinite(&self) -> bool {
        Decimal::<N>::is_infinite(self)
    }

    fn is_zero(&self) -> bool {
        Decimal::<N>::is_zero(self)
    }

    fn is_negative(&self) -> bool {
        Decimal::<N>::is_negative(self)
    }

    fn exponent(&self) -> i32 {
        Decimal::<N>::exponent(self)
    }

    fn digits(&self) -> u32 {
        Decimal::<N>::digits(self)
    }
}

impl From<RoundingMode> for Rounding {
    fn from(rm: RoundingMode) -> Self {
        match rm {
            RoundingMode::Ceiling => Rounding::Ceiling,
            RoundingMode::Up => Rounding::Up,
            RoundingMode::HalfUp => Rounding::HalfUp,
            RoundingMode::HalfEven => Rounding::HalfEven,
            RoundingMode::HalfDown => Rounding::HalfDown,
            RoundingMode::Down => Rounding::Down,
            RoundingMode::Floor => Rounding::Floor,
            RoundingMode::ZeroFiveUp => Rounding::ZeroFiveUp,
        }
    }
}

impl From<Rounding> for RoundingMode {
    #[allow(unreachable_patterns)]
    fn from(r: Rounding) -> Self {
        match r {
            Rounding::Ceiling => RoundingMode::Ceiling,
            Rounding::Up => RoundingMode::Up,
            Rounding::HalfUp => RoundingMode::HalfUp,
            Rounding::HalfEven => RoundingMode::HalfEven,
            Rounding::HalfDown => RoundingMode::HalfDown,
            Rounding::Down => RoundingMode::Down,
            Rounding::Floor => RoundingMode::Floor,
            Rounding::ZeroFiveUp => RoundingMode::ZeroFiveUp,
            _ => RoundingMode::HalfEven,
        }
    }
}

// Rounds `d` to the precision of `cx`. Multiplication by one keeps the sign of zero.
fn round_to_context<const N: usize>(cx: &mut DecContext<Decimal<N>>, mut d: Decimal<N>) -> Decimal<N> {
    let one = Decimal::<N>::from(1i32);
    DecContext::<Decimal<N>>::mul(cx, &mut d, &one);
    d
}

impl<const N: usize> Kernel for DecContext<Decimal<N>> {
    type Num = Decimal<N>;

    fn capacity(&self) -> usize {
        // libdecNumber stores three digits per unit
        N * 3
    }

    fn precision(&self) -> usize {
        DecContext::<Decimal<N>>::precision(self)
    }

    fn set_precision(&mut self, digits: usize) -> Result<(), Error> {
        if digits == 0 || digits > N * 3 {
            return Err(Error::InvalidPrecision(digits));
        }
        DecContext::<Decimal<N>>::set_precision(self, digits).map_err(|_| Error::InvalidPrecision(digits))
    }

    fn set_exponent_range(&mut self, emin: isize, emax: isize) -> Result<(), Error> {
        if emin > 0 || emax < 0 {
            return Err(Error::InvalidExponentRange);
        }
        DecContext::<Decimal<N>>::set_max_exponent(self, emax).map_err(|_| Error::InvalidExponentRange)?;
        DecContext::<Decimal<N>>::set_min_exponent(self, emin).map_err(|_| Error::InvalidExponentRange)
    }

    fn rounding(&self) -> RoundingMode {
        DecContext::<Decimal<N>>::rounding(self).into()
    }

    fn set_rounding(&mut self, rm: RoundingMode) {
        DecContext::<Decimal<N>>::set_rounding(self, rm.into())
    }

    fn status(&self) -> Status {
        let s = DecContext::<Decimal<N>>::status(self);
        Status {
            inexact: s.inexact(),
            overflow: s.overflow(),
            underflow: s.underflow(),
            division_by_zero: s.division_by_zero(),
            invalid_operation: s.invalid_operation(),
        }
    }

    fn clear_status(&mut self) {
        DecContext::<Decimal<N>>::clear_status(self)
    }

    fn parse(&mut self, s: &str) -> Result<Decimal<N>, Error> {
        // the conversion flag is sticky and fails every later parse unless cleared
        let saved = DecContext::<Decimal<N>>::status(self);
        DecContext::<Decimal<N>>::clear_status(self);

        let r = DecContext::<Decimal<N>>::parse(self, s);
        let raised = DecContext::<Decimal<N>>::status(self);

        match r {
            Ok(d) => {
                DecContext::<Decimal<N>>::set_status(self, saved | raised);
                Ok(d)
            }
            Err(_) => {
                DecContext::<Decimal<N>>::set_status(self, saved);
                Err(Error::Parse)
            }
        }
    }

    fn from_i64(&mut self, n: i64) -> Decimal<N> {
        round_to_context(self, Decimal::<N>::from(n))
    }

    fn from_u64(&mut self, n: u64) -> Decimal<N> {
        round_to_context(self, Decimal::<N>::from(n))
    }

    fn from_f64(&mut self, f: f64) -> Decimal<N> {
        round_to_context(self, Decimal::<N>::from(f))
    }

    fn to_f64(&self, a: &Decimal<N>) -> f64 {
        match f64::try_from(*a) {
            Ok(f) => f,
            Err(_) => {
                let f = if a.adjusted_exponent() > 0 { f64::INFINITY } else { 0.0 };
                if Decimal::<N>::is_negative(a) {
                    -f
                } else {
                    f
                }
            }
        }
    }

    fn to_i64(&self, a: &Decimal<N>) -> Option<i64> {
        i64::try_from(*a).ok()
    }

    fn scaleb(&mut self, a: &Decimal<N>, n: i64) -> Decimal<N> {
        let mut r = *a;
        let e = Decimal::<N>::from(n);
        DecContext::<Decimal<N>>::scaleb(self, &mut r, &e);
        r
    }

    fn add(&mut self, a: &Decimal<N>, b: &Decimal<N>) -> Decimal<N> {
        let mut r = *a;
        DecContext::<Decimal<N>>::add(self, &mut r, b);
        r
    }

    fn sub(&mut self, a: &Decimal<N>, b: &Decimal<N>) -> Decimal<N> {
        let mut r = *a;
        DecContext::<Decimal<N>>::sub(self, &mut r, b);
        r
    }

    fn mul(&mut self, a: &Decimal<N>, b: &Decimal<N>) -> Decimal<N> {
        let mut r = *a;
        DecContext::<Decimal<N>>::mul(self, &mut r, b);
        r
    }

    fn div(&mut self, a: &Decimal<N>, b: &Decimal<N>) -> Decimal<N> {
        let mut r = *a;
        DecContext::<Decimal<N>>::div(self, &mut r, b);
        r
    }

    fn div_integer(&mut self, a: &Decimal<N>, b: &Decimal<N>) -> Decimal<N> {
        let mut r = *a;
        DecContext::<Decimal<N>>::div_integer(self, &mut r, b);
        r
    }

    fn rem(&mut self, a: &Decimal<N>, b: &Decimal<N>) -> Decimal<N> {
        let mut r = *a;
        DecContext::<Decimal<N>>::rem(self, &mut r, b);
        r
    }

    fn quantize(&mut self, a: &Decimal<N>, b: &Decimal<N>) -> Decimal<N> {
        let mut r = *a;
        DecContext::<Decimal<N>>::quantize(self, &mut r, b);
        r
    }

    fn ln(&mut self, a: &Decimal<N>) -> Decimal<N> {
        let mut r = *a;
        DecContext::<Decimal<N>>::ln(self, &mut r);
        r
    }

    fn log10(&mut self, a: &Decimal<N>) -> Decimal<N> {
        let mut r = *a;
        DecContext::<Decimal<N>>::log10(self, &mut r);
        r
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    type D = Decimal<12>;
    type K = DecContext<D>;

    fn num(k: &mut K, s: &str) -> D {
        Kernel::parse(k, s).unwrap()
    }

    #[test]
    fn test_dec_kernel() {
        let mut k = K::default();
        assert_eq!(Kernel::capacity(&k), 36);

        Kernel::set_precision(&mut k, 10).unwrap();
        assert_eq!(Kernel::precision(&k), 10);
        assert_eq!(Kernel::set_precision(&mut k, 0), Err(Error::InvalidPrecision(0)));
        assert_eq!(Kernel::set_precision(&mut k, 37), Err(Error::InvalidPrecision(37)));
        assert_eq!(Kernel::precision(&k), 10);

        let a = num(&mut k, "2");
        let b = num(&mut k, "3");
        let c = Kernel::div(&mut k, &a, &b);
        assert_eq!(c, num(&mut k, "0.6666666667"));
        assert!(Kernel::status(&k).inexact);
        Kernel::clear_status(&mut k);
        assert!(Kernel::status(&k).is_clear());

        Kernel::set_rounding(&mut k, RoundingMode::Down);
        assert_eq!(Kernel::rounding(&k), RoundingMode::Down);
        let c = Kernel::div(&mut k, &a, &b);
        assert_eq!(c, num(&mut k, "0.6666666666"));

        let q = num(&mut k, "7.5");
        assert_eq!(Kernel::div_integer(&mut k, &q, &a), b);
        assert_eq!(Kernel::rem(&mut k, &q, &a), num(&mut k, "1.5"));

        let s = Kernel::scaleb(&mut k, &q, -3);
        assert_eq!(s, num(&mut k, "0.0075"));
    }

    #[test]
    fn test_dec_parse_status() {
        let mut k = K::default();
        Kernel::set_precision(&mut k, 10).unwrap();

        let a = num(&mut k, "1");
        let b = num(&mut k, "3");
        Kernel::div(&mut k, &a, &b);
        assert!(Kernel::status(&k).inexact);

        // a failed parse neither fails later ones nor drops raised flags
        assert_eq!(Kernel::parse(&mut k, "abc"), Err(Error::Parse));
        assert_eq!(Kernel::parse(&mut k, "1.2.3"), Err(Error::Parse));
        assert_eq!(num(&mut k, "2.5"), Kernel::from_f64(&mut k, 2.5));
        assert!(Kernel::status(&k).inexact);

        let x = Kernel::from_f64(&mut k, 2.0);
        assert_eq!(x, Kernel::from_i64(&mut k, 2));
    }

    #[test]
    fn test_dec_conversions() {
        let mut k = K::default();
        Kernel::set_precision(&mut k, 10).unwrap();

        let x = Kernel::from_i64(&mut k, -1234567);
        assert_eq!(x, num(&mut k, "-1234567"));
        assert_eq!(Kernel::to_i64(&k, &x), Some(-1234567));

        // rounded to the working precision
        let x = Kernel::from_u64(&mut k, u64::MAX);
        assert_eq!(x, num(&mut k, "1.844674407E+19"));
        let x = Kernel::from_i64(&mut k, i64::MIN);
        assert_eq!(x, num(&mut k, "-9.223372037E+18"));

        let h = num(&mut k, "0.5");
        assert_eq!(Kernel::to_i64(&k, &h), None);

        let f = Kernel::from_f64(&mut k, 0.1);
        assert_eq!(f, num(&mut k, "0.1"));
        assert_eq!(Kernel::to_f64(&k, &f), 0.1);
        let f = Kernel::from_f64(&mut k, -1.0e-300);
        assert_eq!(f, num(&mut k, "-1E-300"));
        let z = Kernel::from_f64(&mut k, -0.0);
        assert!(Value::is_zero(&z) && Value::is_negative(&z));

        let big = num(&mut k, "-1E+400");
        assert_eq!(Kernel::to_f64(&k, &big), f64::NEG_INFINITY);
        let small = num(&mut k, "1E-400");
        assert_eq!(Kernel::to_f64(&k, &small), 0.0);
    }

    #[test]
    fn test_dec_value() {
        let mut k = K::default();
        let x = num(&mut k, "-1.2500");
        assert!(Value::is_negative(&x));
        assert_eq!(Value::exponent(&x), -4);
        assert_eq!(Value::digits(&x), 5);
        assert_eq!(x.adjusted_exponent(), 0);
        assert!(!x.is_positive());

        let z = num(&mut k, "-0");
        assert!(Value::is_zero(&z));
        assert!(Value::is_negative(&z));

        assert!(<D as Value>::nan().is_nan());
        assert!(!<D as Value>::nan().is_finite());
        assert!(<D as Value>::infinity().is_infinite());
        assert!(Value::is_zero(&<D as Value>::zero()));
    }
}
