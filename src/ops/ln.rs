//! Natural logarithm.

use crate::ctx::Context;
use crate::defs::GUARD_DIGITS;
use crate::num::Kernel;
use crate::num::Value;

impl<K: Kernel> Context<K> {
    /// Computes the natural logarithm of `x`.
    /// The result is NaN for negative `x`, and -Inf for zero.
    pub fn ln(&mut self, x: &K::Num) -> K::Num {
        match self.log_special(x) {
            Some(v) => v,
            None => self.ln_kernel(x),
        }
    }

    /// Computes ln(1 + x) without loss of precision for `x` near zero.
    pub fn ln1p(&mut self, x: &K::Num) -> K::Num {
        if x.is_nan() {
            return K::Num::nan();
        }

        if x.is_zero() {
            return *x;
        }

        if x.is_infinite() {
            return if x.is_negative() { K::Num::nan() } else { *x };
        }

        let r = {
            let mut cx = self.extend(GUARD_DIGITS);
            let one = cx.from_i64(1);
            let u = cx.add(&one, x);

            if u.is_zero() {
                let inf = K::Num::infinity();
                cx.neg(&inf)
            } else if u.is_negative() {
                K::Num::nan()
            } else if u == one {
                *x
            } else {
                // ln(u) * x / (u - 1) cancels the rounding error of 1 + x
                let v = cx.sub(&u, &one);
                let l = cx.ln(&u);
                let n0 = cx.mul(&l, x);
                cx.div(&n0, &v)
            }
        };

        self.round(&r)
    }

    /// Results of the logarithms at the special values and out of their domain.
    pub(crate) fn log_special(&mut self, x: &K::Num) -> Option<K::Num> {
        if x.is_nan() {
            Some(K::Num::nan())
        } else if x.is_zero() {
            let inf = K::Num::infinity();
            Some(self.neg(&inf))
        } else if x.is_negative() {
            Some(K::Num::nan())
        } else if x.is_infinite() {
            Some(*x)
        } else {
            None
        }
    }
}
