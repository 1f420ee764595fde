//! Hyperbolic arcsine.

use crate::ctx::Context;
use crate::defs::GUARD_DIGITS;
use crate::num::Kernel;
use crate::num::Value;

impl<K: Kernel> Context<K> {
    /// Computes the hyperbolic arcsine of `x`.
    pub fn asinh(&mut self, x: &K::Num) -> K::Num {
        if x.is_nan() {
            return K::Num::nan();
        }

        if x.is_zero() || x.is_infinite() {
            return *x;
        }

        let wp = self.get_digits() + GUARD_DIGITS;

        let r = {
            let mut cx = self.extend(GUARD_DIGITS);
            let ax = cx.abs(x);

            let r = if ax.adjusted_exponent() > (wp / 2) as i64 {
                // x^2 + 1 rounds to x^2: ln(2) + ln(x)
                let l = cx.ln(&ax);
                let ln2 = cx.ln2();
                cx.add(&ln2, &l)
            } else {
                // ln1p(x + x^2/(1 + sqrt(x^2 + 1)))
                let one = cx.from_i64(1);
                let x2 = cx.mul(&ax, &ax);
                let n0 = cx.add(&x2, &one);
                let n1 = cx.sqrt(&n0);
                let n2 = cx.add(&n1, &one);
                let n3 = cx.div(&x2, &n2);
                let n4 = cx.add(&ax, &n3);
                cx.ln1p(&n4)
            };

            cx.copysign(&r, x.is_negative())
        };

        self.round(&r)
    }
}
