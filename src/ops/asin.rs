//! Arcsine.

use crate::ctx::Context;
use crate::defs::GUARD_DIGITS;
use crate::num::Kernel;
use crate::num::Value;

impl<K: Kernel> Context<K> {
    /// Computes the arcsine of `x` in the angle unit of the context.
    /// The result is NaN if |x| > 1.
    pub fn asin(&mut self, x: &K::Num) -> K::Num {
        if x.is_nan() {
            return K::Num::nan();
        }

        let one = self.from_i64(1);
        let ax = self.abs(x);
        if ax > one {
            return K::Num::nan();
        }

        if x.is_zero() {
            return *x;
        }

        let unit = self.get_angle_unit();

        let r = {
            let mut cx = self.extend(GUARD_DIGITS);
            let c = cx.cos_of_sin(x);
            let a = cx.atan2_rad(x, &c);
            cx.expand_angle(&a, unit)
        };

        self.round(&r)
    }

    /// sqrt((1 - x)*(1 + x)) for |x| <= 1.
    pub(crate) fn cos_of_sin(&mut self, x: &K::Num) -> K::Num {
        let one = self.from_i64(1);
        let n0 = self.sub(&one, x);
        let n1 = self.add(&one, x);
        let n2 = self.mul(&n0, &n1);
        self.sqrt(&n2)
    }
}
