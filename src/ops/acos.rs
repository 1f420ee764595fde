//! Arccosine.

use crate::ctx::Context;
use crate::defs::GUARD_DIGITS;
use crate::num::Kernel;
use crate::num::Value;

impl<K: Kernel> Context<K> {
    /// Computes the arccosine of `x` in the angle unit of the context.
    /// The result is in [0, half circle], or NaN if |x| > 1.
    pub fn acos(&mut self, x: &K::Num) -> K::Num {
        if x.is_nan() {
            return K::Num::nan();
        }

        let one = self.from_i64(1);
        let ax = self.abs(x);
        if ax > one {
            return K::Num::nan();
        }

        if *x == one {
            return K::Num::zero();
        }

        let unit = self.get_angle_unit();

        let r = {
            let mut cx = self.extend(GUARD_DIGITS);
            let s = cx.cos_of_sin(x);
            let a = cx.atan2_rad(&s, x);
            cx.expand_angle(&a, unit)
        };

        self.round(&r)
    }
}
