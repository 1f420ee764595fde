//! Error function and complementary error function.

use crate::common::util::count_digits;
use crate::common::util::log2_ceil;
use crate::ctx::Context;
use crate::defs::GUARD_DIGITS;
use crate::defs::MAX_ITER;
use crate::num::Kernel;
use crate::num::Value;
use crate::ops::series::series_run_bounded;
use crate::ops::series::TermGen;

// Terms (-1)^k x^2k/(k!(2k+1)) of the Maclaurin series of erf(x)*sqrt(π)/(2x).
struct ErfTerms<V> {
    mx2: V,
    t: V,
    k: u64,
}

impl<K: Kernel> TermGen<K> for ErfTerms<K::Num> {
    fn next(&mut self, cx: &mut Context<K>) -> K::Num {
        self.k += 1;
        let k = cx.from_u64(self.k);
        let n0 = cx.mul(&self.t, &self.mx2);
        self.t = cx.div(&n0, &k);
        let d = cx.from_u64(2 * self.k + 1);
        cx.div(&self.t, &d)
    }
}

impl<K: Kernel> Context<K> {
    /// Computes the error function of `x`.
    pub fn erf(&mut self, x: &K::Num) -> K::Num {
        if x.is_nan() {
            return K::Num::nan();
        }

        if x.is_zero() {
            return *x;
        }

        let neg = x.is_negative();
        let one = self.from_i64(1);

        if x.is_infinite() {
            return self.copysign(&one, neg);
        }

        // 1 - erf(x) < e^(-x^2): saturated when x^2/ln(2) exceeds the bits of the precision
        let p = self.get_digits();
        let xf = self.to_f64(x).abs();
        let x2f = xf * xf;
        let bits = p as f64 * core::f64::consts::LOG2_10 + 1.0;
        if x2f / core::f64::consts::LN_2 > bits {
            return self.copysign(&one, neg);
        }

        // erf(x) lies between 2x/sqrt(π)*(1 - x^2/3) and 2x/sqrt(π)
        if x.adjusted_exponent() < -(p as i64) / 2 {
            let (hi, lo) = {
                let mut cx = self.extend(GUARD_DIGITS);
                let pi = cx.pi();
                let sp = cx.sqrt(&pi);
                let two = cx.from_i64(2);
                let n0 = cx.mul(x, &two);
                let hi = cx.div(&n0, &sp);
                let n1 = cx.mul(x, x);
                let three = cx.from_i64(3);
                let n2 = cx.div(&n1, &three);
                let n3 = cx.sub(&one, &n2);
                let lo = cx.mul(&hi, &n3);
                (hi, lo)
            };

            let hi = self.round(&hi);
            let lo = self.round(&lo);
            if hi == lo {
                return hi;
            }
        }

        // the largest term of the alternating series is about e^(x^2)
        let extra = (x2f * core::f64::consts::LOG10_E).ceil() as usize + 8 + log2_ceil(p);
        let min_iter = x2f.ceil() as usize;
        let max_iter = MAX_ITER.max(4 * min_iter + p);

        let r = {
            let mut cx = self.with_precision(p + extra);

            let ax = cx.abs(x);
            let n0 = cx.mul(&ax, &ax);
            let mx2 = cx.neg(&n0);
            let mut gen = ErfTerms { mx2, t: one, k: 0 };
            let s = series_run_bounded(&mut *cx, one, &mut gen, min_iter, max_iter);

            // 2x/sqrt(π)
            let pi = cx.pi();
            let sp = cx.sqrt(&pi);
            let two = cx.from_i64(2);
            let n1 = cx.mul(&ax, &two);
            let n2 = cx.div(&n1, &sp);
            let r = cx.mul(&n2, &s);
            cx.copysign(&r, neg)
        };

        self.round(&r)
    }

    /// Computes the complementary error function 1 - erf(x).
    ///
    /// Negative `x` gives 1 + erf(|x|). Positive `x` subtracts erf from 1 at a precision
    /// widened by the digits lost to cancellation while erfc(x) is above about 10^(-p/2),
    /// and evaluates the Laplace continued fraction beyond that. Results below the smallest
    /// normal number of the family underflow to zero.
    pub fn erfc(&mut self, x: &K::Num) -> K::Num {
        if x.is_nan() {
            return K::Num::nan();
        }

        if x.is_zero() {
            return self.from_i64(1);
        }

        if x.is_infinite() {
            return if x.is_negative() { self.from_i64(2) } else { K::Num::zero() };
        }

        if x.is_negative() {
            let r = {
                let mut cx = self.extend(GUARD_DIGITS);
                let ax = cx.abs(x);
                let e = cx.erf(&ax);
                let one = cx.from_i64(1);
                cx.add(&one, &e)
            };

            return self.round(&r);
        }

        // e^(-x^2) is below the smallest normal number of the family
        let (emin, _) = self.get_family().exponent_range();
        let xf = self.to_f64(x);
        let lost = xf * xf * core::f64::consts::LOG10_E;
        if lost > -emin as f64 {
            let one = self.from_i64(1);
            let tiny = self.kernel().scaleb(&one, emin as i64);
            return self.mul(&tiny, &tiny);
        }

        let p = self.get_digits();
        let lost = lost.ceil() as usize;

        let r = if 2 * lost <= p {
            let mut cx = self.extend(GUARD_DIGITS + lost);
            let e = cx.erf(x);
            let one = cx.from_i64(1);
            cx.sub(&one, &e)
        } else {
            // x^2 must be exact to the units digit for e^(-x^2)
            let mut cx = self.extend(GUARD_DIGITS + count_digits(lost as u64));
            cx.erfc_fraction(x)
        };

        self.round(&r)
    }

    // erfc(x) = e^(-x^2)/sqrt(π) / (x + (1/2)/(x + 1/(x + (3/2)/(x + 2/(x + ...)))))
    // by the modified Lentz method, for positive x well away from zero.
    fn erfc_fraction(&mut self, x: &K::Num) -> K::Num {
        let one = self.from_i64(1);
        let half = self.from_parts(5, -1);

        let mut f = *x;
        let mut c = *x;
        let mut d = K::Num::zero();
        let mut a = K::Num::zero();

        let mut i = 0;
        loop {
            i += 1;
            if i > MAX_ITER {
                tracing::warn!(iterations = MAX_ITER, "erfc continued fraction did not converge");
                break;
            }

            a = self.add(&a, &half);

            let n0 = self.mul(&a, &d);
            let n1 = self.add(x, &n0);
            d = self.div(&one, &n1);

            let n2 = self.div(&a, &c);
            c = self.add(x, &n2);

            let delta = self.mul(&c, &d);
            f = self.mul(&f, &delta);
            if delta == one {
                break;
            }
        }

        let x2 = self.mul(x, x);
        let mx2 = self.neg(&x2);
        let e = self.exp(&mx2);

        let pi = self.pi();
        let sp = self.sqrt(&pi);
        let n0 = self.mul(&sp, &f);
        self.div(&e, &n0)
    }
}
