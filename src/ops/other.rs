//! Factorial, binomial coefficients, and random numbers.

use crate::common::util::count_digits;
use crate::ctx::Context;
use crate::defs::GUARD_DIGITS;
use crate::num::Kernel;
use crate::num::Value;

#[cfg(feature = "random")]
use rand::Rng;

// Lower bound of log10(n!) by Stirling's formula.
fn log10_factorial_lower(n: f64) -> f64 {
    if n < 1.0 {
        return 0.0;
    }

    n * (n / core::f64::consts::E).log10() + 0.5 * (2.0 * core::f64::consts::PI * n).log10()
}

impl<K: Kernel> Context<K> {
    /// Computes the factorial of `n`.
    /// The result is NaN if `n` is negative or not an integer. Large `n` overflows to +Inf.
    pub fn factorial(&mut self, n: &K::Num) -> K::Num {
        if n.is_nan() {
            return K::Num::nan();
        }

        if n.is_negative() && !n.is_zero() {
            return K::Num::nan();
        }

        if n.is_infinite() {
            return *n;
        }

        if !self.is_integer(n) {
            return K::Num::nan();
        }

        if n.adjusted_exponent() >= 18 {
            return self.overflow();
        }

        let m = self.to_i64(n);
        if m < 2 {
            return self.from_i64(1);
        }

        if self.exceeds_range(log10_factorial_lower(m as f64)) {
            return self.overflow();
        }

        let r = {
            let mut cx = self.extend(GUARD_DIGITS + count_digits(m as u64));

            let mut r = cx.from_i64(1);
            for i in 2..=m {
                let f = cx.from_i64(i);
                r = cx.mul(&r, &f);
                if r.is_infinite() {
                    break;
                }
            }

            r
        };

        self.round(&r)
    }

    /// Computes the number of ways to choose `k` items from `n` items without order.
    /// The result is NaN unless `n` and `k` are non-negative integers and k <= n.
    pub fn comb(&mut self, n: &K::Num, k: &K::Num) -> K::Num {
        let (n, k) = match self.binomial_args(n, k) {
            Some(v) => v,
            None => return K::Num::nan(),
        };

        // C(n, k) = C(n, n - k)
        let k = k.min(self.k_complement(&n, k));

        // C(n, k) >= (n/k)^k for k <= n/2
        if k > 0 {
            let nf = self.to_f64(&n);
            if self.exceeds_range(k as f64 * (nf / k as f64).log10()) {
                return self.overflow();
            }
        }

        let r = {
            let mut cx = self.extend(GUARD_DIGITS + count_digits(k));

            // r = r*(n - k + i)/i stays an integer
            let one = cx.from_i64(1);
            let kk = cx.from_u64(k);
            let mut f = cx.sub(&n, &kk);
            let mut r = one;
            for i in 1..=k {
                f = cx.add(&f, &one);
                let d = cx.from_u64(i);
                let n0 = cx.mul(&r, &f);
                r = cx.div(&n0, &d);
                if r.is_infinite() {
                    break;
                }
            }

            r
        };

        self.round(&r)
    }

    /// Computes the number of ways to choose `k` items from `n` items with order.
    /// The result is NaN unless `n` and `k` are non-negative integers and k <= n.
    pub fn perm(&mut self, n: &K::Num, k: &K::Num) -> K::Num {
        let (n, k) = match self.binomial_args(n, k) {
            Some(v) => v,
            None => return K::Num::nan(),
        };

        // P(n, k) >= k! and P(n, k) >= (n - k + 1)^k
        let nf = self.to_f64(&n);
        let kf = k as f64;
        let low = log10_factorial_lower(kf).max(kf * (nf - kf + 1.0).log10());
        if self.exceeds_range(low) {
            return self.overflow();
        }

        let r = {
            let mut cx = self.extend(GUARD_DIGITS + count_digits(k));

            // n*(n - 1)*...*(n - k + 1)
            let one = cx.from_i64(1);
            let mut f = n;
            let mut r = one;
            for _ in 0..k {
                r = cx.mul(&r, &f);
                if r.is_infinite() {
                    break;
                }
                f = cx.sub(&f, &one);
            }

            r
        };

        self.round(&r)
    }

    // A result of at least 10^log10 is beyond the largest finite number of the family.
    fn exceeds_range(&self, log10: f64) -> bool {
        let (_, emax) = self.get_family().exponent_range();
        log10 > emax as f64 + 1.0
    }

    // Result of an overflowing product in the rounding mode of the context.
    fn overflow(&mut self) -> K::Num {
        let (_, emax) = self.get_family().exponent_range();
        let one = self.from_i64(1);
        let big = self.kernel().scaleb(&one, emax as i64);
        self.mul(&big, &big)
    }

    // Validates the arguments of comb and perm, and converts k to an integer.
    fn binomial_args(&mut self, n: &K::Num, k: &K::Num) -> Option<(K::Num, u64)> {
        if !self.is_integer(n) || !self.is_integer(k) {
            return None;
        }

        if (n.is_negative() && !n.is_zero()) || (k.is_negative() && !k.is_zero()) || k > n {
            return None;
        }

        let kk = self.to_i64(k);

        Some((*n, kk as u64))
    }

    // n - k as an integer, saturating.
    fn k_complement(&mut self, n: &K::Num, k: u64) -> u64 {
        let d = {
            let mut cx = self.extend(GUARD_DIGITS);
            let kk = cx.from_u64(k);
            cx.sub(n, &kk)
        };

        let d = self.to_i64(&d);

        d as u64
    }

    /// Returns a uniformly distributed random number in [0, 1) with the number of digits of the context.
    #[cfg(feature = "random")]
    pub fn random(&mut self) -> K::Num {
        let mut rng = rand::thread_rng();

        let mut s = String::with_capacity(self.get_digits() + 2);
        s.push_str("0.");
        for _ in 0..self.get_digits() {
            s.push(rng.gen_range(b'0'..=b'9') as char);
        }

        self.parse(&s).unwrap_or_else(|_| K::Num::nan())
    }
}

#[cfg(test)]
mod tests {

    use crate::defs::RoundingMode;
    use crate::num::Value;
    use crate::DecContext;

    #[test]
    fn test_factorial() {
        let mut cx = DecContext::new();
        cx.set_digits(34);

        let x = cx.from_i64(10);
        assert_eq!(cx.factorial(&x), cx.from_i64(3628800));
        let x = cx.parse("100.000").unwrap();
        assert_eq!(cx.factorial(&x), cx.parse("9.332621544394415268169923885626670E+157").unwrap());

        let one = cx.from_i64(1);
        let z = cx.from_i64(0);
        assert_eq!(cx.factorial(&z), one);
        assert_eq!(cx.factorial(&one), one);

        // undefined
        let x = cx.from_i64(-1);
        assert!(cx.factorial(&x).is_nan());
        let x = cx.parse("2.5").unwrap();
        assert!(cx.factorial(&x).is_nan());
        let ninf = cx.parse("-Infinity").unwrap();
        assert!(cx.factorial(&ninf).is_nan());
        let nan = cx.parse("NaN").unwrap();
        assert!(cx.factorial(&nan).is_nan());

        // overflow
        let inf = cx.parse("Infinity").unwrap();
        assert_eq!(cx.factorial(&inf), inf);
        let x = cx.from_i64(1_000_000);
        assert!(cx.factorial(&x).is_infinite());
        assert!(cx.status().overflow);
        for s in ["1E+100", "9223372036854775807", "123456789012345678901234567890"] {
            let x = cx.parse(s).unwrap();
            assert!(cx.factorial(&x).is_infinite(), "{}", s);
        }
        assert_eq!(cx.get_digits(), 34);

        // directed rounding saturates instead of overflowing to infinity
        cx.rounding_mode(RoundingMode::Down);
        let x = cx.parse("1E+100").unwrap();
        let r = cx.factorial(&x);
        assert!(r.is_finite() && r.adjusted_exponent() == 999_999);
        cx.rounding_mode(RoundingMode::HalfEven);

        let mut cx = DecContext::decimal64();
        let x = cx.from_i64(69);
        assert_eq!(cx.factorial(&x), cx.parse("1.711224524281413E+98").unwrap());

        let mut cx = DecContext::decimal32();
        let x = cx.from_i64(69);
        assert!(cx.factorial(&x).is_infinite());
    }

    #[test]
    fn test_comb_perm() {
        let mut cx = DecContext::new();
        cx.set_digits(34);

        let n = cx.from_i64(10);
        let k = cx.from_i64(3);
        assert_eq!(cx.comb(&n, &k), cx.from_i64(120));
        assert_eq!(cx.perm(&n, &k), cx.from_i64(720));

        let n = cx.from_i64(52);
        let k = cx.from_i64(5);
        assert_eq!(cx.comb(&n, &k), cx.from_i64(2598960));

        let n = cx.from_i64(100);
        let k = cx.from_i64(50);
        assert_eq!(cx.comb(&n, &k), cx.parse("100891344545564193334812497256").unwrap());
        let n = cx.from_i64(1000);
        let k = cx.from_i64(500);
        assert_eq!(cx.comb(&n, &k), cx.parse("2.702882409454365695156146936259753E+299").unwrap());
        let n = cx.from_i64(60);
        let k = cx.from_i64(30);
        assert_eq!(cx.perm(&n, &k), cx.parse("3.137001847457162235515606771531959E+49").unwrap());

        let z = cx.from_i64(0);
        let one = cx.from_i64(1);
        assert_eq!(cx.comb(&n, &z), one);
        assert_eq!(cx.perm(&n, &z), one);
        assert_eq!(cx.comb(&n, &n), one);

        // invalid arguments
        let k = cx.from_i64(61);
        assert!(cx.comb(&n, &k).is_nan());
        let k = cx.from_i64(-1);
        assert!(cx.perm(&n, &k).is_nan());
        let k = cx.parse("1.5").unwrap();
        assert!(cx.comb(&n, &k).is_nan());
        let nan = cx.parse("NaN").unwrap();
        assert!(cx.perm(&nan, &one).is_nan());
        assert_eq!(cx.get_digits(), 34);

        // results far beyond the exponent range
        let n = cx.parse("1E+30").unwrap();
        let k = cx.parse("1E+29").unwrap();
        assert!(cx.comb(&n, &k).is_infinite());
        assert!(cx.perm(&n, &k).is_infinite());
        let n = cx.from_i64(10_000_000);
        let k = cx.from_i64(5_000_000);
        assert!(cx.comb(&n, &k).is_infinite());
    }

    #[cfg(feature = "random")]
    #[test]
    fn test_random() {
        let mut cx = DecContext::new();
        cx.set_digits(50);

        let z = cx.from_i64(0);
        let one = cx.from_i64(1);
        for _ in 0..100 {
            let r = cx.random();
            assert!(r >= z && r < one);
            assert!(r.digits() <= 50);
        }
    }
}
