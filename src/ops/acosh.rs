//! Hyperbolic arccosine.

use crate::ctx::Context;
use crate::defs::GUARD_DIGITS;
use crate::num::Kernel;
use crate::num::Value;

impl<K: Kernel> Context<K> {
    /// Computes the hyperbolic arccosine of `x`.
    /// The result is NaN if x < 1.
    pub fn acosh(&mut self, x: &K::Num) -> K::Num {
        if x.is_nan() {
            return K::Num::nan();
        }

        let one = self.from_i64(1);

        if *x < one {
            return K::Num::nan();
        }

        if *x == one {
            return K::Num::zero();
        }

        if x.is_infinite() {
            return *x;
        }

        let wp = self.get_digits() + GUARD_DIGITS;

        let r = {
            let mut cx = self.extend(GUARD_DIGITS);

            if x.adjusted_exponent() > (wp / 2) as i64 {
                // x^2 - 1 rounds to x^2: ln(2) + ln(x)
                let l = cx.ln(x);
                let ln2 = cx.ln2();
                cx.add(&ln2, &l)
            } else {
                // ln1p(d + sqrt(d*(x + 1))), d = x - 1
                let d = cx.sub(x, &one);
                let n0 = cx.add(x, &one);
                let n1 = cx.mul(&d, &n0);
                let n2 = cx.sqrt(&n1);
                let n3 = cx.add(&d, &n2);
                cx.ln1p(&n3)
            }
        };

        self.round(&r)
    }
}
