//! Tangent.

use crate::ctx::Context;
use crate::defs::GUARD_DIGITS;
use crate::num::Kernel;
use crate::num::Value;
use crate::ops::series::SinCosPart;
use crate::ops::trig::Reduced;

// Values at the four right angles, `None` at the poles.
const TAN_QUADRANTS: [Option<i64>; 4] = [Some(0), None, Some(0), None];

impl<K: Kernel> Context<K> {
    /// Computes the tangent of `x` given in the angle unit of the context.
    /// The result is NaN at the exact odd multiples of a right angle.
    pub fn tan(&mut self, x: &K::Num) -> K::Num {
        if !x.is_finite() {
            return K::Num::nan();
        }

        if x.is_zero() {
            return *x;
        }

        let unit = self.get_angle_unit();
        let a = match self.reduce_angle(x, unit) {
            Reduced::Quadrant(q) => {
                return match TAN_QUADRANTS[q] {
                    Some(v) => self.from_i64(v),
                    None => K::Num::nan(),
                }
            }
            Reduced::Radians(a) => a,
            Reduced::Lost => return K::Num::nan(),
        };

        let ret = {
            let mut cx = self.extend(GUARD_DIGITS);
            let sc = cx.sincos_taylor(&a, SinCosPart::Both);
            match (sc.sin, sc.cos) {
                (Some(s), Some(c)) => cx.div(&s, &c),
                _ => K::Num::nan(),
            }
        };

        self.round(&ret)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::AngleUnit;
    use crate::DecContext;

    #[test]
    fn test_tangent() {
        let mut cx = DecContext::new();
        cx.set_digits(34);

        let one = cx.from_i64(1);
        assert_eq!(cx.tan(&one), cx.parse("1.557407724654902230506974807458360").unwrap());
        let x = cx.from_i64(-2);
        assert_eq!(cx.tan(&x), cx.parse("2.185039863261518991643306102313683").unwrap());

        let pi = cx.pi();
        assert_eq!(cx.tan(&pi), cx.from_i64(0));
        let two = cx.from_i64(2);
        let half_pi = cx.div(&pi, &two);
        assert!(cx.tan(&half_pi).is_nan());

        let z = cx.parse("-0").unwrap();
        let t = cx.tan(&z);
        assert!(t.is_zero() && t.is_negative());
        assert_eq!(cx.get_digits(), 34);
    }

    #[test]
    fn test_tangent_degrees() {
        let mut cx = DecContext::new();
        cx.digits(20).angle_unit(AngleUnit::Degrees);

        let x = cx.from_i64(45);
        assert_eq!(cx.tan(&x), cx.from_i64(1));
        let x = cx.from_i64(135);
        assert_eq!(cx.tan(&x), cx.from_i64(-1));
        let x = cx.from_i64(180);
        assert_eq!(cx.tan(&x), cx.from_i64(0));
        let x = cx.from_i64(90);
        assert!(cx.tan(&x).is_nan());
        let x = cx.from_i64(-270);
        assert!(cx.tan(&x).is_nan());
    }
}
