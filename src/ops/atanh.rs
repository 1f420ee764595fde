//! Hyperbolic arctangent.

use crate::ctx::Context;
use crate::defs::GUARD_DIGITS;
use crate::num::Kernel;
use crate::num::Value;

impl<K: Kernel> Context<K> {
    /// Computes the hyperbolic arctangent of `x`.
    /// The result is NaN if |x| > 1, and signed infinity if |x| = 1.
    pub fn atanh(&mut self, x: &K::Num) -> K::Num {
        if x.is_nan() {
            return K::Num::nan();
        }

        if x.is_zero() {
            return *x;
        }

        let one = self.from_i64(1);
        let ax = self.abs(x);

        if ax > one {
            return K::Num::nan();
        }

        if ax == one {
            let inf = K::Num::infinity();
            tracing::debug!("atanh pole");
            return self.copysign(&inf, x.is_negative());
        }

        let r = {
            let mut cx = self.extend(GUARD_DIGITS);

            // ln1p(2x/(1 - x))/2
            let two = cx.from_i64(2);
            let n0 = cx.mul(x, &two);
            let n1 = cx.sub(&one, x);
            let n2 = cx.div(&n0, &n1);
            let l = cx.ln1p(&n2);
            cx.div(&l, &two)
        };

        self.round(&r)
    }
}
