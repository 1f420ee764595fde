//! Hyperbolic cosine.

use crate::ctx::Context;
use crate::defs::GUARD_DIGITS;
use crate::num::Kernel;
use crate::num::Value;

impl<K: Kernel> Context<K> {
    /// Computes the hyperbolic cosine of `x`.
    pub fn cosh(&mut self, x: &K::Num) -> K::Num {
        if x.is_nan() {
            return K::Num::nan();
        }

        if x.is_zero() {
            return self.from_i64(1);
        }

        if x.is_infinite() {
            return K::Num::infinity();
        }

        let r = {
            let mut cx = self.extend(GUARD_DIGITS);

            // (e^x + e^-x)/2
            let one = cx.from_i64(1);
            let two = cx.from_i64(2);
            let ax = cx.abs(x);
            let e = cx.exp(&ax);
            let ei = cx.div(&one, &e);
            let n0 = cx.add(&e, &ei);
            cx.div(&n0, &two)
        };

        self.round(&r)
    }
}
