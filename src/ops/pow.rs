//! Exponentiation.

use crate::common::util::count_digits;
use crate::common::util::squaring_guard;
use crate::ctx::Context;
use crate::defs::GUARD_DIGITS;
use crate::num::Kernel;
use crate::num::Value;
use crate::ops::series::series_run;
use crate::ops::series::TermGen;

// Terms x^k/k! of the exponential series.
struct ExpTerms<V> {
    x: V,
    t: V,
    k: u64,
}

impl<K: Kernel> TermGen<K> for ExpTerms<K::Num> {
    fn next(&mut self, cx: &mut Context<K>) -> K::Num {
        self.k += 1;
        let k = cx.from_u64(self.k);
        let n0 = cx.mul(&self.t, &self.x);
        self.t = cx.div(&n0, &k);
        self.t
    }
}

impl<K: Kernel> Context<K> {
    /// Computes `x` to the power of integer `n` by squaring and multiplying.
    ///
    /// 0^0 = 1 and 0^n = 0 for any other `n`, signed when `n` is odd.
    /// Negative `n` gives the reciprocal of the positive power.
    pub fn powi(&mut self, x: &K::Num, n: i64) -> K::Num {
        if x.is_nan() {
            return K::Num::nan();
        }

        if n == 0 {
            return self.from_i64(1);
        }

        let neg = x.is_negative() && n % 2 != 0;

        if x.is_zero() {
            return self.copysign(&K::Num::zero(), neg);
        }

        if x.is_infinite() {
            let v = if n > 0 { K::Num::infinity() } else { K::Num::zero() };
            return self.copysign(&v, neg);
        }

        let m = n.unsigned_abs();

        let r = {
            let mut cx = self.extend(GUARD_DIGITS + count_digits(m));
            let r = cx.pow_uint(x, m);
            if n < 0 {
                let one = cx.from_i64(1);
                cx.div(&one, &r)
            } else {
                r
            }
        };

        self.round(&r)
    }

    // x^n at the working precision.
    pub(crate) fn pow_uint(&mut self, x: &K::Num, mut n: u64) -> K::Num {
        let mut ret = self.from_i64(1);
        let mut b = *x;

        while n > 0 {
            if n & 1 == 1 {
                ret = self.mul(&ret, &b);
            }
            n >>= 1;
            if n > 0 {
                b = self.mul(&b, &b);
            }
        }

        ret
    }

    /// Computes `x` to the power of `y`.
    ///
    /// Integral `y` is computed with `powi`. Negative `x` with non-integral `y` gives NaN.
    /// A zero base gives zero for every non-zero `y`.
    /// Otherwise the result is exp(y*ln(x)) with the sign given by the parity of `y`.
    pub fn pow(&mut self, x: &K::Num, y: &K::Num) -> K::Num {
        if x.is_nan() || y.is_nan() {
            return K::Num::nan();
        }

        if y.is_zero() {
            return self.from_i64(1);
        }

        let y_int = self.is_integer(y);

        if y_int && y.adjusted_exponent() < 18 {
            let n = self.to_i64(y);
            return self.powi(x, n);
        }

        let y_odd = y_int && self.is_odd(y);
        let y_pos = !y.is_negative();

        if x.is_zero() {
            return self.copysign(&K::Num::zero(), x.is_negative() && y_odd);
        }

        if y.is_infinite() {
            let one = self.from_i64(1);
            let ax = self.abs(x);
            if ax == one {
                return one;
            }
            return if (ax > one) == y_pos { K::Num::infinity() } else { K::Num::zero() };
        }

        if x.is_infinite() {
            let v = if y_pos { K::Num::infinity() } else { K::Num::zero() };
            return self.copysign(&v, x.is_negative() && y_odd);
        }

        if x.is_negative() && !y_int {
            return K::Num::nan();
        }

        // absolute error of y*ln(x) becomes relative error of the result
        let extra = GUARD_DIGITS
            + y.adjusted_exponent().max(0) as usize
            + count_digits(x.adjusted_exponent().unsigned_abs())
            + 1;

        let r = {
            let mut cx = self.extend(extra);
            let ax = cx.abs(x);
            let l = cx.ln(&ax);
            let t = cx.mul(y, &l);
            let r = cx.exp(&t);
            cx.copysign(&r, x.is_negative() && y_odd)
        };

        self.round(&r)
    }

    /// Computes `e` to the power of `x`.
    ///
    /// The argument is halved until it is at most 1, the exponential series is summed,
    /// and the sum is squared once per halving. Negative `x` gives the reciprocal of exp(|x|).
    /// |x| >= 1E+10 overflows to infinity or underflows to zero.
    pub fn exp(&mut self, x: &K::Num) -> K::Num {
        if x.is_nan() {
            return K::Num::nan();
        }

        if x.is_zero() {
            return self.from_i64(1);
        }

        if x.is_infinite() || x.adjusted_exponent() >= 10 {
            return if x.is_negative() { K::Num::zero() } else { K::Num::infinity() };
        }

        // number of halvings to bring |x| to at most 1
        let xf = self.to_f64(x).abs();
        let k = if xf > 1.0 { xf.log2().ceil() as usize + 1 } else { 0 };

        let r = {
            let mut cx = self.extend(GUARD_DIGITS + squaring_guard(k));
            let ax = cx.abs(x);
            let e = cx.exp_positive(&ax);
            if x.is_negative() {
                let one = cx.from_i64(1);
                cx.div(&one, &e)
            } else {
                e
            }
        };

        self.round(&r)
    }

    // exp(x) for positive finite x at the working precision.
    fn exp_positive(&mut self, x: &K::Num) -> K::Num {
        let one = self.from_i64(1);
        let two = self.from_i64(2);

        let mut r = *x;
        let mut k = 0;
        while r > one {
            r = self.div(&r, &two);
            k += 1;
        }

        let mut gen = ExpTerms { x: r, t: one, k: 0 };
        let mut s = series_run(self, one, &mut gen);

        for _ in 0..k {
            s = self.mul(&s, &s);
        }

        s
    }

    /// Computes 2 to the power of `x`.
    pub fn exp2(&mut self, x: &K::Num) -> K::Num {
        let two = self.from_i64(2);
        self.pow(&two, x)
    }

    /// Computes exp(x) - 1 without loss of precision for `x` near zero.
    pub fn expm1(&mut self, x: &K::Num) -> K::Num {
        if x.is_nan() {
            return K::Num::nan();
        }

        if x.is_zero() {
            return *x;
        }

        if x.is_infinite() {
            return if x.is_negative() { self.from_i64(-1) } else { *x };
        }

        let r = {
            let mut cx = self.extend(GUARD_DIGITS);
            if x.adjusted_exponent() < 0 {
                // x + x^2/2! + x^3/3! + ...
                let mut gen = ExpTerms { x: *x, t: *x, k: 1 };
                series_run(&mut *cx, *x, &mut gen)
            } else {
                let e = cx.exp(x);
                let one = cx.from_i64(1);
                cx.sub(&e, &one)
            }
        };

        self.round(&r)
    }
}
