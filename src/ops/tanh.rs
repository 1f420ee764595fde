//! Hyperbolic tangent.

use crate::ctx::Context;
use crate::defs::GUARD_DIGITS;
use crate::num::Kernel;
use crate::num::Value;

impl<K: Kernel> Context<K> {
    /// Computes the hyperbolic tangent of `x`.
    pub fn tanh(&mut self, x: &K::Num) -> K::Num {
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

        // 1 - tanh(x) is about 2e^(-2|x|): beyond the guard digits for 2|x| > (p + guard + 1)*ln(10)
        let p = self.get_digits();
        let xf = self.to_f64(x).abs();
        if 2.0 * xf > (p + GUARD_DIGITS + 1) as f64 * core::f64::consts::LN_10 {
            return self.copysign(&one, neg);
        }

        let r = {
            let mut cx = self.extend(GUARD_DIGITS);
            let ax = cx.abs(x);
            let threshold = cx.from_parts(5, -2);

            let t = if ax > threshold {
                // (1 - e^(-2x))/(1 + e^(-2x))
                let m2 = cx.from_i64(-2);
                let n0 = cx.mul(&ax, &m2);
                let e = cx.exp(&n0);
                let n1 = cx.sub(&one, &e);
                let n2 = cx.add(&one, &e);
                cx.div(&n1, &n2)
            } else {
                // sinh(x)/sqrt(1 + sinh(x)^2)
                let s = cx.sinh_abs(&ax);
                let n0 = cx.mul(&s, &s);
                let n1 = cx.add(&one, &n0);
                let n2 = cx.sqrt(&n1);
                cx.div(&s, &n2)
            };

            cx.copysign(&t, neg)
        };

        self.round(&r)
    }
}
