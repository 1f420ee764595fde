//! Cosine.

use crate::ctx::Context;
use crate::num::Kernel;
use crate::num::Value;
use crate::ops::series::SinCosPart;
use crate::ops::trig::Reduced;

// Values at the four right angles.
const COS_QUADRANTS: [i64; 4] = [1, 0, -1, 0];

impl<K: Kernel> Context<K> {
    /// Computes the cosine of `x` given in the angle unit of the context.
    /// Exact multiples of a right angle give exact results.
    pub fn cos(&mut self, x: &K::Num) -> K::Num {
        if !x.is_finite() {
            return K::Num::nan();
        }

        if x.is_zero() {
            return self.from_i64(1);
        }

        let unit = self.get_angle_unit();
        match self.reduce_angle(x, unit) {
            Reduced::Quadrant(q) => self.from_i64(COS_QUADRANTS[q]),
            Reduced::Radians(a) => self
                .sincos_taylor(&a, SinCosPart::Cos)
                .cos
                .unwrap_or_else(K::Num::nan),
            Reduced::Lost => K::Num::nan(),
        }
    }
}
