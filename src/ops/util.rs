//! Auxiliary operations.

use crate::ctx::Context;
use crate::defs::GUARD_DIGITS;
use crate::num::Kernel;
use crate::num::Value;

impl<K: Kernel> Context<K> {
    /// Computes sqrt(x^2 + y^2) without intermediate overflow or underflow.
    /// An infinite argument gives +Inf even if the other one is NaN.
    pub fn hypot(&mut self, x: &K::Num, y: &K::Num) -> K::Num {
        if x.is_infinite() || y.is_infinite() {
            return K::Num::infinity();
        }

        if x.is_nan() || y.is_nan() {
            return K::Num::nan();
        }

        let r = {
            let mut cx = self.extend(GUARD_DIGITS);
            let ax = cx.abs(x);
            let ay = cx.abs(y);
            let (a, b) = if ax >= ay { (ax, ay) } else { (ay, ax) };

            if a.is_zero() {
                return K::Num::zero();
            }

            // a*sqrt(1 + (b/a)^2)
            let one = cx.from_i64(1);
            let t = cx.div(&b, &a);
            let t2 = cx.mul(&t, &t);
            let n0 = cx.add(&one, &t2);
            let s = cx.sqrt(&n0);
            cx.mul(&a, &s)
        };

        self.round(&r)
    }
}
