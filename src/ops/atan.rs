//! Arctangent.

use crate::ctx::Context;
use crate::defs::GUARD_DIGITS;
use crate::defs::MAX_ITER;
use crate::num::Kernel;
use crate::num::Value;
use crate::ops::series::SinCosPart;

impl<K: Kernel> Context<K> {
    /// Computes the arctangent of `x` in the angle unit of the context.
    pub fn atan(&mut self, x: &K::Num) -> K::Num {
        let one = self.from_i64(1);
        self.atan2(x, &one)
    }

    /// Computes the angle of the point (`x`, `y`) in the angle unit of the context.
    /// The result is in [-half circle, half circle], the sign of zero `y` selects the sign of the half circle.
    /// atan2(0, 0) is NaN.
    pub fn atan2(&mut self, y: &K::Num, x: &K::Num) -> K::Num {
        let unit = self.get_angle_unit();

        let r = {
            let mut cx = self.extend(GUARD_DIGITS);
            let a = cx.atan2_rad(y, x);
            if a.is_nan() || a.is_zero() {
                return a;
            }
            cx.expand_angle(&a, unit)
        };

        self.round(&r)
    }

    /// atan2 in radians at the working precision.
    pub(crate) fn atan2_rad(&mut self, y: &K::Num, x: &K::Num) -> K::Num {
        if x.is_nan() || y.is_nan() {
            return K::Num::nan();
        }

        let yneg = y.is_negative();

        if y.is_infinite() {
            return if !x.is_infinite() {
                self.pi_frac(1, 2, yneg)
            } else if x.is_negative() {
                self.pi_frac(3, 4, yneg)
            } else {
                self.pi_frac(1, 4, yneg)
            };
        }

        if x.is_infinite() {
            return if x.is_negative() {
                self.pi_frac(1, 1, yneg)
            } else {
                self.copysign(&K::Num::zero(), yneg)
            };
        }

        if x.is_zero() {
            return if y.is_zero() { K::Num::nan() } else { self.pi_frac(1, 2, yneg) };
        }

        if y.is_zero() {
            return if x.is_negative() { self.pi_frac(1, 1, yneg) } else { *y };
        }

        if x == y {
            return if yneg { self.pi_frac(3, 4, true) } else { self.pi_frac(1, 4, false) };
        }

        let my = self.neg(y);
        if *x == my {
            return if yneg { self.pi_frac(1, 4, true) } else { self.pi_frac(3, 4, false) };
        }

        let r = {
            let mut cx = self.extend(GUARD_DIGITS);
            cx.atan2_newton(y, x)
        };

        self.round(&r)
    }

    // Solves (cos z, sin z) = (x, y)/hypot(x, y) for finite non-zero x and y,
    // refining the double precision estimate with Newton's method on the sine
    // or the cosine, whichever has the larger derivative.
    fn atan2_newton(&mut self, y: &K::Num, x: &K::Num) -> K::Num {
        let r = self.hypot(x, y);
        let xx = self.div(x, &r);
        let yy = self.div(y, &r);

        let yf = self.to_f64(&yy);
        let xf = self.to_f64(&xx);
        let mut z = self.from_f64(yf.atan2(xf));

        let ax = self.abs(&xx);
        let ay = self.abs(&yy);
        let by_sin = ax >= ay;

        let mut prev = z;
        for _ in 0..MAX_ITER {
            let sc = self.sincos_taylor(&z, SinCosPart::Both);
            let (s, c) = match (sc.sin, sc.cos) {
                (Some(s), Some(c)) => (s, c),
                _ => return K::Num::nan(),
            };

            let next = if by_sin {
                let n0 = self.sub(&yy, &s);
                let d = self.div(&n0, &c);
                self.add(&z, &d)
            } else {
                let n0 = self.sub(&xx, &c);
                let d = self.div(&n0, &s);
                self.sub(&z, &d)
            };

            // the last digit can oscillate between two values
            if next == z || next == prev {
                return next;
            }

            prev = z;
            z = next;
        }

        tracing::warn!(iterations = MAX_ITER, "arctangent iteration did not converge");

        z
    }

    // num/den * π with the sign `neg`.
    fn pi_frac(&mut self, num: i64, den: i64, neg: bool) -> K::Num {
        let r = {
            let mut cx = self.extend(2);
            let pi = cx.pi();
            let n = cx.from_i64(num);
            let d = cx.from_i64(den);
            let n0 = cx.mul(&pi, &n);
            cx.div(&n0, &d)
        };

        let r = self.round(&r);
        self.copysign(&r, neg)
    }
}

#[cfg(test)]
mod tests {

    use crate::defs::AngleUnit;
    use crate::num::Value;
    use crate::DecContext;

    #[test]
    fn test_arctangent() {
        let mut cx = DecContext::new();
        cx.set_digits(34);

        let one = cx.from_i64(1);
        assert_eq!(cx.atan(&one), cx.parse("0.7853981633974483096156608458198757").unwrap());
        let x = cx.parse("-2.5").unwrap();
        assert_eq!(cx.atan(&x), cx.parse("-1.190289949682531732927733774829318").unwrap());
        let x = cx.parse("1E+20").unwrap();
        assert_eq!(cx.atan(&x), cx.parse("1.570796326794896619221321691639751").unwrap());

        let x = cx.parse("1E-500").unwrap();
        assert_eq!(cx.atan(&x), x);
        let z = cx.parse("-0").unwrap();
        let r = cx.atan(&z);
        assert!(r.is_zero() && r.is_negative());

        let inf = cx.parse("Infinity").unwrap();
        assert_eq!(cx.atan(&inf), cx.parse("1.570796326794896619231321691639751").unwrap());
        let nan = cx.parse("NaN").unwrap();
        assert!(cx.atan(&nan).is_nan());

        cx.angle_unit(AngleUnit::Degrees);
        assert_eq!(cx.atan(&one), cx.from_i64(45));
        let three = cx.from_i64(3);
        assert_eq!(cx.atan(&three), cx.parse("71.56505117707798935157219372045329").unwrap());
        assert_eq!(cx.atan(&inf), cx.from_i64(90));

        cx.angle_unit(AngleUnit::Gradians);
        assert_eq!(cx.atan(&one), cx.from_i64(50));
        assert_eq!(cx.get_digits(), 34);
    }

    #[test]
    fn test_atan2() {
        let mut cx = DecContext::new();
        cx.set_digits(34);

        let one = cx.from_i64(1);
        let m1 = cx.from_i64(-1);
        let m2 = cx.from_i64(-2);
        let z = cx.from_i64(0);
        let nz = cx.parse("-0").unwrap();
        let pi = cx.pi();
        let mpi = cx.neg(&pi);

        assert_eq!(cx.atan2(&m1, &m1), cx.parse("-2.356194490192344928846982537459627").unwrap());
        let h = cx.parse("0.5").unwrap();
        assert_eq!(cx.atan2(&h, &m2), cx.parse("2.896613990462929084290560902068227").unwrap());

        assert!(cx.atan2(&z, &z).is_nan());
        assert!(cx.atan2(&nz, &nz).is_nan());
        assert_eq!(cx.atan2(&one, &z), cx.parse("1.570796326794896619231321691639751").unwrap());
        assert_eq!(cx.atan2(&m1, &z), cx.parse("-1.570796326794896619231321691639751").unwrap());
        assert_eq!(cx.atan2(&z, &m1), pi);
        assert_eq!(cx.atan2(&nz, &m1), mpi);
        let r = cx.atan2(&nz, &one);
        assert!(r.is_zero() && r.is_negative());

        // infinities
        let inf = cx.parse("Infinity").unwrap();
        let ninf = cx.parse("-Infinity").unwrap();
        assert_eq!(cx.atan2(&inf, &inf), cx.parse("0.7853981633974483096156608458198757").unwrap());
        assert_eq!(cx.atan2(&ninf, &ninf), cx.parse("-2.356194490192344928846982537459627").unwrap());
        assert_eq!(cx.atan2(&one, &ninf), pi);
        assert_eq!(cx.atan2(&m1, &ninf), mpi);
        let r = cx.atan2(&m1, &inf);
        assert!(r.is_zero() && r.is_negative());
        let nan = cx.parse("NaN").unwrap();
        assert!(cx.atan2(&nan, &one).is_nan());
        assert!(cx.atan2(&inf, &nan).is_nan());

        cx.angle_unit(AngleUnit::Degrees);
        assert_eq!(cx.atan2(&one, &m1), cx.from_i64(135));
        assert_eq!(cx.atan2(&nz, &m1), cx.from_i64(-180));
        assert_eq!(cx.get_digits(), 34);
    }
}
