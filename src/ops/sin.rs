//! Sine.

use crate::ctx::Context;
use crate::defs::AngleUnit;
use crate::num::Kernel;
use crate::num::Value;
use crate::ops::series::SinCosPart;
use crate::ops::trig::Reduced;

// Values at the four right angles.
const SIN_QUADRANTS: [i64; 4] = [0, 1, 0, -1];

impl<K: Kernel> Context<K> {
    /// Computes the sine of `x` given in the angle unit of the context.
    /// Exact multiples of a right angle give exact results.
    pub fn sin(&mut self, x: &K::Num) -> K::Num {
        let unit = self.get_angle_unit();
        self.sin_unit(x, unit)
    }

    /// Sine of `x` given in `unit`.
    pub(crate) fn sin_unit(&mut self, x: &K::Num, unit: AngleUnit) -> K::Num {
        if !x.is_finite() {
            return K::Num::nan();
        }

        if x.is_zero() {
            return *x;
        }

        match self.reduce_angle(x, unit) {
            Reduced::Quadrant(q) => self.from_i64(SIN_QUADRANTS[q]),
            Reduced::Radians(a) => self
                .sincos_taylor(&a, SinCosPart::Sin)
                .sin
                .unwrap_or_else(K::Num::nan),
            Reduced::Lost => K::Num::nan(),
        }
    }
}
