//! All operations on numbers are performed in some context.

use crate::defs::AngleUnit;
use crate::defs::Error;
use crate::defs::Family;
use crate::defs::RoundingMode;
use crate::defs::Status;
use crate::defs::DEFAULT_DIGITS;
use crate::defs::MAX_DIGITS;
use crate::num::Kernel;
use crate::num::Value;
use crate::ops::consts::Consts;
use core::ops::Deref;
use core::ops::DerefMut;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters of a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Settings {
    /// Precision family.
    pub family: Family,

    /// Number of significant decimal digits.
    pub digits: usize,

    /// Rounding mode.
    pub rounding: RoundingMode,

    /// Unit of angles of the trigonometric functions.
    pub angle: AngleUnit,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            family: Family::Arbitrary,
            digits: DEFAULT_DIGITS,
            rounding: RoundingMode::HalfEven,
            angle: AngleUnit::Radians,
        }
    }
}

/// Context holds the decimal kernel together with the working precision, rounding mode,
/// angle unit, and the constants cache.
///
/// Every function takes its arguments by reference and returns a new value rounded
/// to the working precision of the context. Functions never return errors:
/// domain errors produce NaN, poles produce signed infinity.
///
/// A context must not be shared between threads without synchronization.
/// Internally functions widen the precision for guard digits and always restore it before returning.
pub struct Context<K: Kernel> {
    k: K,
    family: Family,
    angle: AngleUnit,
    pub(crate) cc: Consts<K::Num>,
}

impl<K: Kernel> Default for Context<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Kernel> Context<K> {
    /// Create a new context of the arbitrary-precision family with default parameters.
    pub fn new() -> Self {
        Self::with_family(Family::Arbitrary)
    }

    /// Create a new context of the precision family `family`.
    pub fn with_family(family: Family) -> Self {
        let mut k = K::default();
        let (emin, emax) = family.exponent_range();

        // a kernel with a narrower exponent range keeps its own
        let _ = k.set_exponent_range(emin, emax);

        let digits = family.fixed_digits().unwrap_or(DEFAULT_DIGITS).min(k.capacity());
        let _ = k.set_precision(digits);
        k.set_rounding(RoundingMode::HalfEven);

        Context {
            k,
            family,
            angle: AngleUnit::Radians,
            cc: Consts::new(),
        }
    }

    /// Create a new context with parameters `s`.
    ///
    /// ## Errors
    ///
    ///  - InvalidPrecision: the number of digits is not supported by the family.
    pub fn with_settings(s: &Settings) -> Result<Self, Error> {
        let mut cx = Self::with_family(s.family);
        cx.try_set_digits(s.digits)?;
        cx.k.set_rounding(s.rounding);
        cx.angle = s.angle;
        Ok(cx)
    }

    /// Context of the 7-digit decimal32 format.
    pub fn decimal32() -> Self {
        Self::with_family(Family::Decimal32)
    }

    /// Context of the 16-digit decimal64 format.
    pub fn decimal64() -> Self {
        Self::with_family(Family::Decimal64)
    }

    /// Context of the 34-digit decimal128 format.
    pub fn decimal128() -> Self {
        Self::with_family(Family::Decimal128)
    }

    /// Returns the parameters of the context.
    pub fn settings(&self) -> Settings {
        Settings {
            family: self.family,
            digits: self.k.precision(),
            rounding: self.k.rounding(),
            angle: self.angle,
        }
    }

    /// Sets the number of digits of the context.
    /// Requests outside of `1..=max_digits()` and requests to a fixed family are ignored.
    pub fn digits(&mut self, digits: usize) -> &mut Self {
        let _ = self.try_set_digits(digits);
        self
    }

    /// Sets the number of digits of the context.
    /// Requests outside of `1..=max_digits()` and requests to a fixed family are ignored.
    pub fn set_digits(&mut self, digits: usize) {
        let _ = self.try_set_digits(digits);
    }

    /// Sets the number of digits of the context.
    ///
    /// ## Errors
    ///
    ///  - InvalidPrecision: `digits` is outside of `1..=max_digits()`, or the family has a different fixed number of digits.
    pub fn try_set_digits(&mut self, digits: usize) -> Result<(), Error> {
        match self.family.fixed_digits() {
            Some(d) if d == digits => Ok(()),
            Some(_) => Err(Error::InvalidPrecision(digits)),
            None if digits == 0 || digits > self.max_digits() => Err(Error::InvalidPrecision(digits)),
            None => self.k.set_precision(digits),
        }
    }

    /// Sets the rounding mode of the context.
    pub fn rounding_mode(&mut self, rm: RoundingMode) -> &mut Self {
        self.k.set_rounding(rm);
        self
    }

    /// Sets the angle unit of the context.
    pub fn angle_unit(&mut self, unit: AngleUnit) -> &mut Self {
        self.angle = unit;
        self
    }

    /// Returns the number of digits of the context.
    pub fn get_digits(&self) -> usize {
        self.k.precision()
    }

    /// Returns the largest number of digits the context accepts.
    /// One third of the kernel capacity is kept for guard digits.
    pub fn max_digits(&self) -> usize {
        let cap = self.k.capacity();
        MAX_DIGITS.min(cap - cap / 3)
    }

    /// Largest working precision of the kernel.
    pub(crate) fn capacity(&self) -> usize {
        self.k.capacity()
    }

    /// Returns the rounding mode of the context.
    pub fn get_rounding_mode(&self) -> RoundingMode {
        self.k.rounding()
    }

    /// Returns the angle unit of the context.
    pub fn get_angle_unit(&self) -> AngleUnit {
        self.angle
    }

    /// Returns the precision family of the context.
    pub fn get_family(&self) -> Family {
        self.family
    }

    /// Returns the accumulated status flags.
    pub fn status(&self) -> Status {
        self.k.status()
    }

    /// Clears the accumulated status flags.
    pub fn clear_status(&mut self) {
        self.k.clear_status()
    }

    /// Returns the kernel of the context.
    pub fn kernel(&mut self) -> &mut K {
        &mut self.k
    }

    /// Sets the working precision to `digits` until the returned guard is dropped.
    /// The precision is clamped to the kernel capacity.
    pub(crate) fn with_precision(&mut self, digits: usize) -> PrecisionGuard<'_, K> {
        let saved = self.k.precision();
        let _ = self.k.set_precision(digits.clamp(1, self.k.capacity()));
        PrecisionGuard { cx: self, saved }
    }

    /// Widens the working precision by `extra` digits until the returned guard is dropped.
    pub(crate) fn extend(&mut self, extra: usize) -> PrecisionGuard<'_, K> {
        let p = self.k.precision();
        self.with_precision(p + extra)
    }

    //
    // Kernel arithmetic at the working precision.
    //

    /// Parses a decimal number and rounds it to the working precision.
    ///
    /// ## Errors
    ///
    ///  - Parse: `s` is not a decimal number.
    pub fn parse(&mut self, s: &str) -> Result<K::Num, Error> {
        self.k.parse(s.trim())
    }

    /// Returns the sum of `a` and `b`.
    pub fn add(&mut self, a: &K::Num, b: &K::Num) -> K::Num {
        self.k.add(a, b)
    }

    /// Returns the difference of `a` and `b`.
    pub fn sub(&mut self, a: &K::Num, b: &K::Num) -> K::Num {
        self.k.sub(a, b)
    }

    /// Returns the product of `a` and `b`.
    pub fn mul(&mut self, a: &K::Num, b: &K::Num) -> K::Num {
        self.k.mul(a, b)
    }

    /// Returns the quotient of `a` and `b`.
    pub fn div(&mut self, a: &K::Num, b: &K::Num) -> K::Num {
        self.k.div(a, b)
    }

    /// Returns the remainder of the truncating division of `a` by `b`.
    pub fn rem(&mut self, a: &K::Num, b: &K::Num) -> K::Num {
        self.k.rem(a, b)
    }

    /// Returns `x` with the opposite sign.
    pub fn neg(&mut self, x: &K::Num) -> K::Num {
        let m1 = self.from_i64(-1);
        self.k.mul(x, &m1)
    }

    /// Returns the absolute value of `x`.
    pub fn abs(&mut self, x: &K::Num) -> K::Num {
        if x.is_negative() {
            self.neg(x)
        } else {
            *x
        }
    }

    /// Returns `x` rounded to the working precision.
    pub fn round(&mut self, x: &K::Num) -> K::Num {
        let one = self.from_i64(1);
        self.k.mul(x, &one)
    }

    /// Returns the magnitude of `x` with the sign `neg`.
    pub(crate) fn copysign(&mut self, x: &K::Num, neg: bool) -> K::Num {
        if x.is_negative() == neg {
            *x
        } else {
            self.neg(x)
        }
    }

    pub(crate) fn ln_kernel(&mut self, x: &K::Num) -> K::Num {
        self.k.ln(x)
    }

    pub(crate) fn log10_kernel(&mut self, x: &K::Num) -> K::Num {
        self.k.log10(x)
    }

    //
    // Conversions.
    //

    /// Converts an integer, rounding it to the working precision.
    pub fn from_i64(&mut self, n: i64) -> K::Num {
        self.k.from_i64(n)
    }

    /// Converts an unsigned integer, rounding it to the working precision.
    pub fn from_u64(&mut self, n: u64) -> K::Num {
        self.k.from_u64(n)
    }

    /// Converts a double to the shortest decimal that converts back to the same double,
    /// rounded to the working precision.
    pub fn from_f64(&mut self, f: f64) -> K::Num {
        if f.is_nan() {
            K::Num::nan()
        } else if f.is_infinite() {
            let inf = K::Num::infinity();
            self.copysign(&inf, f < 0.0)
        } else {
            self.k.from_f64(f)
        }
    }

    /// Returns `c*10^e` rounded to the working precision.
    pub(crate) fn from_parts(&mut self, c: i64, e: i64) -> K::Num {
        let m = self.k.from_i64(c);
        self.k.scaleb(&m, e)
    }

    /// Converts `x` to the nearest double.
    pub fn to_f64(&self, x: &K::Num) -> f64 {
        self.k.to_f64(x)
    }

    /// Converts `x` to an integer, rounding fractions with the context rounding mode.
    /// Values outside of the `i64` range saturate, NaN converts to 0.
    pub fn to_i64(&mut self, x: &K::Num) -> i64 {
        if x.is_nan() {
            return 0;
        }

        let sat = if x.is_negative() { i64::MIN } else { i64::MAX };

        if x.is_infinite() || x.adjusted_exponent() > 18 {
            return sat;
        }

        let mut cx = self.with_precision(24);
        let one = cx.from_i64(1);
        let n = cx.k.quantize(x, &one);

        cx.k.to_i64(&n).unwrap_or(sat)
    }

    /// Returns the integer part of `x` truncated toward zero.
    pub fn trunc(&mut self, x: &K::Num) -> K::Num {
        if !x.is_finite() || x.exponent() >= 0 {
            return *x;
        }

        if x.adjusted_exponent() < 0 {
            return self.copysign(&K::Num::zero(), x.is_negative());
        }

        let d = x.digits() as usize;
        let p = self.get_digits();
        let mut cx = self.with_precision(p.max(d));
        let one = cx.from_i64(1);
        let t = cx.k.div_integer(x, &one);

        if t.is_zero() {
            cx.copysign(&t, x.is_negative())
        } else {
            t
        }
    }

    /// Returns true if `x` is a finite integer.
    pub fn is_integer(&mut self, x: &K::Num) -> bool {
        if !x.is_finite() {
            return false;
        }

        if x.exponent() >= 0 || x.is_zero() {
            return true;
        }

        let t = self.trunc(x);
        t == *x
    }

    /// Returns true if `x` is an odd integer.
    pub(crate) fn is_odd(&mut self, x: &K::Num) -> bool {
        if !self.is_integer(x) {
            return false;
        }

        let d = (x.adjusted_exponent().max(0) as usize) + 2;
        let p = self.get_digits();
        let mut cx = self.with_precision(p.max(d));
        let two = cx.from_i64(2);
        let r = cx.k.rem(x, &two);

        !r.is_zero()
    }
}

/// Restores the working precision of the context when dropped.
pub(crate) struct PrecisionGuard<'a, K: Kernel> {
    cx: &'a mut Context<K>,
    saved: usize,
}

impl<'a, K: Kernel> Deref for PrecisionGuard<'a, K> {
    type Target = Context<K>;

    fn deref(&self) -> &Self::Target {
        self.cx
    }
}

impl<'a, K: Kernel> DerefMut for PrecisionGuard<'a, K> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.cx
    }
}

impl<'a, K: Kernel> Drop for PrecisionGuard<'a, K> {
    fn drop(&mut self) {
        let _ = self.cx.k.set_precision(self.saved);
    }
}
