//! Gamma function and its logarithm.

use crate::ctx::Context;
use crate::defs::AngleUnit;
use crate::defs::GUARD_DIGITS;
use crate::num::Kernel;
use crate::num::Value;

impl<K: Kernel> Context<K> {
    /// Computes the gamma function of `x`.
    ///
    /// Positive integers are computed as factorial(x - 1). Zero and negative integers give NaN.
    /// Other arguments use Spouge's approximation, reflected with Γ(x)Γ(1-x) = π/sin(πx) for x < 0.5.
    pub fn gamma(&mut self, x: &K::Num) -> K::Num {
        if x.is_nan() {
            return K::Num::nan();
        }

        if x.is_infinite() {
            return if x.is_negative() { K::Num::nan() } else { *x };
        }

        if self.is_integer(x) {
            if x.is_negative() || x.is_zero() {
                return K::Num::nan();
            }

            let n = {
                let mut cx = self.extend(GUARD_DIGITS);
                let one = cx.from_i64(1);
                cx.sub(x, &one)
            };

            return self.factorial(&n);
        }

        // |x| >= 1E+8 overflows or underflows any exponent range
        if x.adjusted_exponent() >= 8 {
            return if x.is_negative() { K::Num::zero() } else { K::Num::infinity() };
        }

        // the terms of the sum cancel, the more so the larger x is
        let p = self.get_digits();
        let wp = 2 * p + GUARD_DIGITS + x.adjusted_exponent().max(0) as usize;
        let a = (1.25 * p as f64 / core::f64::consts::TAU.log10()).ceil() as u64;

        let r = {
            let mut cx = self.with_precision(wp);

            let half = cx.from_parts(5, -1);
            if *x < half {
                let one = cx.from_i64(1);
                let arg = cx.sub(&one, x);
                let g = cx.gamma_spouge(&arg, a);

                // sin(πx) computed in degrees keeps the distance of x to an integer exact
                let d = cx.from_i64(180);
                let deg = cx.mul(x, &d);
                let s = cx.sin_unit(&deg, AngleUnit::Degrees);
                if s.is_zero() {
                    tracing::debug!("gamma pole");
                    return K::Num::infinity();
                }

                let pi = cx.pi();
                let n0 = cx.mul(&s, &g);
                cx.div(&pi, &n0)
            } else {
                cx.gamma_spouge(x, a)
            }
        };

        self.round(&r)
    }

    /// Computes the natural logarithm of the absolute value of the gamma function of `x`.
    ///
    /// 1 and 2 give exact zeros. Zero, negative integers and infinities give +Inf.
    /// Arguments below 0.5 are reflected with ln|Γ(x)| = ln π - ln|sin(πx)| - ln Γ(1 - x).
    pub fn log_gamma(&mut self, x: &K::Num) -> K::Num {
        if x.is_nan() {
            return K::Num::nan();
        }

        if x.is_infinite() {
            return K::Num::infinity();
        }

        if self.is_integer(x) && (x.is_negative() || x.is_zero()) {
            tracing::debug!("log gamma pole");
            return K::Num::infinity();
        }

        let one = self.from_i64(1);
        let two = self.from_i64(2);
        if *x == one || *x == two {
            return K::Num::zero();
        }

        // unlike gamma, the precision does not grow with the exponent of x
        let p = self.get_digits();
        let wp = 2 * p + GUARD_DIGITS;
        let a = (1.25 * p as f64 / core::f64::consts::TAU.log10()).ceil() as u64;

        let r = {
            let mut cx = self.with_precision(wp);

            let half = cx.from_parts(5, -1);
            if *x < half {
                let arg = cx.sub(&one, x);
                let (l, s) = cx.spouge_parts(&arg, a);
                let ls = cx.ln(&s);
                let lg = cx.add(&l, &ls);

                let d = cx.from_i64(180);
                let deg = cx.mul(x, &d);
                let sn = cx.sin_unit(&deg, AngleUnit::Degrees);
                let sn = cx.abs(&sn);

                let pi = cx.pi();
                let lp = cx.ln(&pi);
                let lsn = cx.ln(&sn);
                let n0 = cx.sub(&lp, &lsn);
                cx.sub(&n0, &lg)
            } else {
                let (l, s) = cx.spouge_parts(x, a);
                let ls = cx.ln(&s);
                cx.add(&l, &ls)
            }
        };

        self.round(&r)
    }

    // Spouge's approximation with parameter `a` for z >= 0.5.
    fn gamma_spouge(&mut self, z: &K::Num, a: u64) -> K::Num {
        let (l, s) = self.spouge_parts(z, a);
        let f = self.exp(&l);
        self.mul(&f, &s)
    }

    // Γ(z) = (z + a - 1)^(z - 1/2) * e^(-(z + a - 1)) * (c0 + sum(c_k/(z + k - 1), k = 1..a-1)),
    // c0 = sqrt(2π), c_k = (-1)^(k-1) * (a - k)^(k - 1/2) * e^(a - k)/(k - 1)!
    // Returns the logarithm of the factor in front of the sum, and the sum.
    fn spouge_parts(&mut self, z: &K::Num, a: u64) -> (K::Num, K::Num) {
        let one = self.from_i64(1);
        let half = self.from_parts(5, -1);

        let pi = self.pi();
        let two = self.from_i64(2);
        let two_pi = self.mul(&pi, &two);
        let mut s = self.sqrt(&two_pi);

        let e = self.exp(&one);
        let aa = self.from_u64(a);
        let mut ea = self.exp(&aa);
        let mut fact = one;

        for k in 1..a {
            if k > 1 {
                let f = self.from_u64(k - 1);
                fact = self.mul(&fact, &f);
            }
            ea = self.div(&ea, &e);

            // (a - k)^(k - 1/2)
            let b = self.from_u64(a - k);
            let n0 = self.powi(&b, k as i64);
            let n1 = self.sqrt(&b);
            let pw = self.div(&n0, &n1);

            let c = self.mul(&ea, &pw);
            let kk = self.from_u64(k - 1);
            let n2 = self.add(z, &kk);
            let d = self.mul(&fact, &n2);
            let t = self.div(&c, &d);

            s = if k & 1 == 1 { self.add(&s, &t) } else { self.sub(&s, &t) };
        }

        // (z - 1/2)*ln(z + a - 1) - (z + a - 1)
        let am1 = self.from_u64(a - 1);
        let w = self.add(z, &am1);
        let l = self.ln(&w);
        let n0 = self.sub(z, &half);
        let n1 = self.mul(&n0, &l);
        let l = self.sub(&n1, &w);

        (l, s)
    }
}

#[cfg(test)]
mod tests {

    use crate::num::Value;
    use crate::DecContext;

    #[test]
    fn test_gamma() {
        let mut cx = DecContext::new();
        cx.set_digits(34);

        for (x, g) in [
            ("0.5", "1.772453850905516027298167483341145"),
            ("2.5", "1.329340388179137020473625612505859"),
            ("7.3", "1271.423633663909273057993626678458"),
            ("-1.5", "2.363271801207354703064223311121527"),
            ("0.1", "9.513507698668731836292487177265402"),
            ("-0.5", "-3.544907701811032054596334966682290"),
            ("100.5", "9.320963104082716608349109809141910E+156"),
            ("1E-20", "99999999999999999999.42278433509847"),
            ("-2.999", "-166.8764019691200623415809340717349"),
            ("12345.6", "7.950920222942056674510754548223090E+45148"),
        ] {
            let x = cx.parse(x).unwrap();
            assert_eq!(cx.gamma(&x), cx.parse(g).unwrap(), "{}", x);
        }

        let x = cx.from_i64(11);
        assert_eq!(cx.gamma(&x), cx.from_i64(3628800));
        let one = cx.from_i64(1);
        assert_eq!(cx.gamma(&one), one);

        // non-positive integers
        let z = cx.from_i64(0);
        assert!(cx.gamma(&z).is_nan());
        let x = cx.from_i64(-3);
        assert!(cx.gamma(&x).is_nan());

        // overflow and underflow
        let x = cx.parse("1000000.5").unwrap();
        assert!(cx.gamma(&x).is_infinite());
        let x = cx.parse("1E+9").unwrap();
        assert!(cx.gamma(&x).is_infinite());
        let x = cx.parse("-123456789.5").unwrap();
        assert!(cx.gamma(&x).is_zero());

        let inf = cx.parse("Infinity").unwrap();
        assert_eq!(cx.gamma(&inf), inf);
        let ninf = cx.parse("-Infinity").unwrap();
        assert!(cx.gamma(&ninf).is_nan());
        let nan = cx.parse("NaN").unwrap();
        assert!(cx.gamma(&nan).is_nan());
        assert_eq!(cx.get_digits(), 34);

        let mut cx = DecContext::decimal64();
        let x = cx.parse("3.3").unwrap();
        assert_eq!(cx.gamma(&x), cx.parse("2.683437381955769").unwrap());

        let mut cx = DecContext::decimal32();
        let x = cx.parse("4.5").unwrap();
        assert_eq!(cx.gamma(&x), cx.parse("11.63173").unwrap());
    }

    #[test]
    fn test_log_gamma() {
        let mut cx = DecContext::new();
        cx.set_digits(34);

        for (x, g) in [
            ("0.5", "0.5723649429247000870717136756765294"),
            ("0.9", "0.06637623973474297118871673986710858"),
            ("1.5", "-0.1207822376352452223455184457816472"),
            ("2.0001", "0.00004228165811283071202532321649345543"),
            ("3.75", "1.486815578593417055540581801444205"),
            ("11", "15.10441257307551529522570932925107"),
            ("100.5", "361.4355404677776215552519127025208"),
            ("12345.6", "103959.1850661684555824548026340435"),
            ("1E+9", "19723265827.50371677097672358919198"),
            ("1E+40", "9.110340371976182736071965818737457E+41"),
            ("1E-20", "46.05170185988091368035405693703827"),
            ("-0.5", "1.265512123484645396488945797134706"),
            ("-2.999", "5.117253430432302168263543852679833"),
            ("-123456789.5", "-2176716266.025642758108009051832893"),
        ] {
            let x = cx.parse(x).unwrap();
            assert_eq!(cx.log_gamma(&x), cx.parse(g).unwrap(), "{}", x);
        }

        // exact zeros
        let one = cx.from_i64(1);
        let r = cx.log_gamma(&one);
        assert!(r.is_zero() && !r.is_negative());
        let two = cx.from_i64(2);
        assert!(cx.log_gamma(&two).is_zero());

        // poles
        for s in ["0", "-0", "-1", "-7", "Infinity", "-Infinity"] {
            let x = cx.parse(s).unwrap();
            let r = cx.log_gamma(&x);
            assert!(r.is_infinite() && !r.is_negative(), "{}", s);
        }
        let nan = cx.parse("NaN").unwrap();
        assert!(cx.log_gamma(&nan).is_nan());
        assert_eq!(cx.get_digits(), 34);

        let mut cx = DecContext::decimal64();
        let x = cx.parse("3.3").unwrap();
        assert_eq!(cx.log_gamma(&x), cx.parse("0.9870985778947346").unwrap());
        let x = cx.parse("1E+300").unwrap();
        assert_eq!(cx.log_gamma(&x), cx.parse("6.897755278982137E+302").unwrap());

        let mut cx = DecContext::decimal32();
        let x = cx.parse("4.5").unwrap();
        assert_eq!(cx.log_gamma(&x), cx.parse("2.453737").unwrap());
    }
}
