//! Reduction of angles to radians in (-π, π].

use crate::ctx::Context;
use crate::defs::AngleUnit;
use crate::defs::GUARD_DIGITS;
use crate::num::Kernel;
use crate::num::Value;

/// Angle reduced for series evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Reduced<V> {
    /// Exact multiple of a right angle: number of right angles modulo 4.
    Quadrant(usize),

    /// Angle in radians in (-π, π], carrying guard digits.
    Radians(V),

    /// The argument is too large for any digit of the reduced angle to be significant.
    Lost,
}

impl<K: Kernel> Context<K> {
    /// Reduces finite non-zero `x` given in `unit` modulo the full circle.
    /// Exact multiples of a right angle are reported as quadrants.
    pub(crate) fn reduce_angle(&mut self, x: &K::Num, unit: AngleUnit) -> Reduced<K::Num> {
        let p = self.get_digits();

        // the integer part of x/circle must fit the working precision
        let extra = GUARD_DIGITS + x.adjusted_exponent().max(0) as usize + 1;
        let mut cx = self.with_precision(p + extra);

        let ret = match unit.circle() {
            Some(circle) => cx.reduce_units(x, circle),
            None => cx.reduce_radians(x, p),
        };

        if ret == Reduced::Lost {
            tracing::debug!(digits = p, "angle reduction lost all significant digits");
        }

        ret
    }

    // Degrees and gradians: remainders are exact in decimal.
    fn reduce_units(&mut self, x: &K::Num, circle: u32) -> Reduced<K::Num> {
        let c = self.from_i64(circle as i64);
        let mut r = self.rem(x, &c);
        if r.is_nan() {
            return Reduced::Lost;
        }

        if r.is_negative() && !r.is_zero() {
            r = self.add(&r, &c);
        }

        let right = self.from_i64(circle as i64 / 4);
        let m = self.rem(&r, &right);
        if m.is_zero() {
            let q = self.div_integer_i64(&r, &right);
            return Reduced::Quadrant((q & 3) as usize);
        }

        // fold into (-circle/2, circle/2] and scale to radians
        let half = self.from_i64(circle as i64 / 2);
        if r > half {
            r = self.sub(&r, &c);
        }

        let pi = self.pi();
        let n0 = self.mul(&r, &pi);
        Reduced::Radians(self.div(&n0, &half))
    }

    // Radians: remainder by 2π computed with guard digits.
    // `p` is the precision of the caller.
    fn reduce_radians(&mut self, x: &K::Num, p: usize) -> Reduced<K::Num> {
        let pi = self.pi();
        let two = self.from_i64(2);
        let two_pi = self.mul(&pi, &two);
        let half_pi = self.div(&pi, &two);

        let mut r = self.rem(x, &two_pi);
        if r.is_nan() {
            return Reduced::Lost;
        }

        if r.is_negative() && !r.is_zero() {
            r = self.add(&r, &two_pi);
        }

        // x within one unit in the last place of the caller's precision from a
        // multiple of π/2 is treated as the exact multiple, as long as that unit
        // keeps at least half of the digits below the decimal point.
        let half = self.from_parts(5, -1);
        let n0 = self.div(&r, &half_pi);
        let n1 = self.add(&n0, &half);
        let q = self.trunc(&n1);
        let n2 = self.mul(&q, &half_pi);
        let d = self.sub(&r, &n2);
        let ulp_exp = x.adjusted_exponent() - p as i64 + 1;
        let near = ulp_exp <= -(p as i64 / 2) && d.adjusted_exponent() < ulp_exp;
        if d.is_zero() || near {
            let q = self.to_i64(&q);
            return Reduced::Quadrant((q & 3) as usize);
        }

        if r > pi {
            r = self.sub(&r, &two_pi);
        }

        Reduced::Radians(r)
    }

    /// Converts an angle in radians to `unit`.
    pub(crate) fn expand_angle(&mut self, rad: &K::Num, unit: AngleUnit) -> K::Num {
        match unit.circle() {
            None => *rad,
            Some(circle) => {
                let mut cx = self.extend(GUARD_DIGITS);
                let half = cx.from_i64(circle as i64 / 2);
                let pi = cx.pi();
                let n0 = cx.mul(rad, &half);
                cx.div(&n0, &pi)
            }
        }
    }

    // Integer quotient of non-negative a and b that is known to be small.
    fn div_integer_i64(&mut self, a: &K::Num, b: &K::Num) -> i64 {
        let n0 = self.div(a, b);
        let q = self.trunc(&n0);
        self.to_i64(&q)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::DecContext;

    #[test]
    fn test_reduce_units() {
        let mut cx = DecContext::new();
        cx.set_digits(20);

        for (s, q) in [("0", 0), ("90", 1), ("180", 2), ("270", 3), ("360", 0), ("-90", 3), ("-180", 2), ("450", 1), ("7290", 1)] {
            let x = cx.parse(s).unwrap();
            assert_eq!(cx.reduce_angle(&x, AngleUnit::Degrees), Reduced::Quadrant(q), "{}", s);
        }

        for (s, q) in [("100", 1), ("200", 2), ("300", 3), ("-100", 3)] {
            let x = cx.parse(s).unwrap();
            assert_eq!(cx.reduce_angle(&x, AngleUnit::Gradians), Reduced::Quadrant(q), "{}", s);
        }

        // 30 degrees is π/6
        let x = cx.parse("30").unwrap();
        let expected = {
            let mut g = cx.extend(10);
            let pi = g.pi();
            let six = g.from_i64(6);
            g.div(&pi, &six)
        };
        let expected = cx.round(&expected);
        match cx.reduce_angle(&x, AngleUnit::Degrees) {
            Reduced::Radians(r) => assert_eq!(cx.round(&r), expected),
            r => panic!("{:?}", r),
        }

        // 330 degrees folds to -π/6
        let x = cx.parse("330").unwrap();
        let expected = cx.neg(&expected);
        match cx.reduce_angle(&x, AngleUnit::Degrees) {
            Reduced::Radians(r) => assert_eq!(cx.round(&r), expected),
            r => panic!("{:?}", r),
        }
        assert_eq!(cx.get_digits(), 20);
    }

    #[test]
    fn test_reduce_radians() {
        let mut cx = DecContext::new();
        cx.set_digits(20);

        let pi = cx.pi();
        let two = cx.from_i64(2);
        let half_pi = cx.div(&pi, &two);
        let three_half_pi = {
            let mut g = cx.extend(10);
            let pi = g.pi();
            let three = g.from_i64(3);
            let n0 = g.mul(&pi, &three);
            g.div(&n0, &two)
        };
        let three_half_pi = cx.round(&three_half_pi);
        let minus_pi = cx.neg(&pi);

        assert_eq!(cx.reduce_angle(&half_pi, AngleUnit::Radians), Reduced::Quadrant(1));
        assert_eq!(cx.reduce_angle(&pi, AngleUnit::Radians), Reduced::Quadrant(2));
        assert_eq!(cx.reduce_angle(&three_half_pi, AngleUnit::Radians), Reduced::Quadrant(3));
        assert_eq!(cx.reduce_angle(&minus_pi, AngleUnit::Radians), Reduced::Quadrant(2));

        let x = cx.from_i64(4);
        let expected = {
            let mut g = cx.extend(10);
            let pi = g.pi();
            let n0 = g.sub(&x, &pi);
            g.sub(&n0, &pi)
        };
        let expected = cx.round(&expected);
        match cx.reduce_angle(&x, AngleUnit::Radians) {
            Reduced::Radians(r) => assert_eq!(cx.round(&r), expected),
            r => panic!("{:?}", r),
        }

        let x = cx.parse("1E-30").unwrap();
        assert_eq!(cx.reduce_angle(&x, AngleUnit::Radians), Reduced::Radians(x));

        let x = cx.parse("1E+500").unwrap();
        assert_eq!(cx.reduce_angle(&x, AngleUnit::Radians), Reduced::Lost);
        assert_eq!(cx.get_digits(), 20);

        // large arguments are reduced, never snapped to a right angle
        for s in ["1E+15", "1E+20", "123456789012E+6", "1E+40"] {
            let x = cx.parse(s).unwrap();
            match cx.reduce_angle(&x, AngleUnit::Radians) {
                Reduced::Radians(r) => assert!(!r.is_zero(), "{}", s),
                r => panic!("{} {:?}", s, r),
            }
        }
    }

    #[test]
    fn test_large_radians() {
        let mut cx = DecContext::new();
        cx.set_digits(34);

        for (x, s, c) in [
            ("1E+40", "-0.5696334009536363273080341815735687", "-0.8218988919070239214448025364432558"),
            ("1E+20", "-0.6452512852657808442058117113125230", "0.7639704044417283004001468027378811"),
        ] {
            let x = cx.parse(x).unwrap();
            assert_eq!(cx.sin(&x), cx.parse(s).unwrap(), "{}", x);
            assert_eq!(cx.cos(&x), cx.parse(c).unwrap(), "{}", x);
        }

        let x = cx.parse("1E+33").unwrap();
        assert_eq!(cx.sin(&x), cx.parse("0.7623023949526979198881641510882362").unwrap());
        assert_eq!(cx.tan(&x), cx.parse("-1.177808449309853159282839131559601").unwrap());
        let x = cx.parse("1234567890123456789012345678901234").unwrap();
        assert_eq!(cx.sin(&x), cx.parse("0.9749767042381272248424947615276280").unwrap());
        let x = cx.parse("1E+17").unwrap();
        assert_eq!(cx.cos(&x), cx.parse("-0.8855573282976306850496332070134054").unwrap());

        cx.set_digits(15);
        let x = cx.parse("123456789012E+6").unwrap();
        assert_eq!(cx.sin(&x), cx.parse("0.611883915853309").unwrap());
        assert_eq!(cx.tan(&x), cx.parse("-0.773608683698851").unwrap());
    }

    #[test]
    fn test_expand_angle() {
        let mut cx = DecContext::new();
        cx.set_digits(20);
        let pi = cx.pi();
        let r = cx.expand_angle(&pi, AngleUnit::Degrees);
        assert_eq!(cx.round(&r), cx.from_i64(180));
        let r = cx.expand_angle(&pi, AngleUnit::Gradians);
        assert_eq!(cx.round(&r), cx.from_i64(200));
        assert_eq!(cx.expand_angle(&pi, AngleUnit::Radians), pi);
    }
}
