//! Square root and n-th root.

use crate::ctx::Context;
use crate::defs::GUARD_DIGITS;
use crate::defs::MAX_ITER;
use crate::num::Kernel;
use crate::num::Value;

impl<K: Kernel> Context<K> {
    /// Computes the square root of `x`.
    /// The result is NaN for negative `x`, and the square root of -0 is -0.
    pub fn sqrt(&mut self, x: &K::Num) -> K::Num {
        self.root(x, 2)
    }

    /// Computes the `n`-th root of `x`.
    ///
    /// Negative `x` gives NaN for even `n`, and the negated root of |x| for odd `n`.
    /// Negative `n` gives the reciprocal of the |n|-th root. `n` = 0 gives NaN.
    pub fn root(&mut self, x: &K::Num, n: i64) -> K::Num {
        if x.is_nan() || n == 0 {
            return K::Num::nan();
        }

        if n < 0 {
            let r = {
                let mut cx = self.extend(GUARD_DIGITS);
                let r = match n.checked_neg() {
                    Some(m) => cx.root(x, m),
                    None => K::Num::nan(),
                };
                let one = cx.from_i64(1);
                cx.div(&one, &r)
            };
            return self.round(&r);
        }

        let neg = x.is_negative();

        if neg && n % 2 == 0 && !x.is_zero() {
            return K::Num::nan();
        }

        if x.is_zero() || x.is_infinite() {
            return *x;
        }

        if n == 1 {
            return self.round(x);
        }

        let r = {
            let mut cx = self.extend(GUARD_DIGITS);
            let v = cx.abs(x);
            let r = cx.nroot_newton(&v, n as u64);
            cx.copysign(&r, neg)
        };

        self.round(&r)
    }

    // Newton iteration for the n-th root of positive finite `v` at the working precision:
    // g = (v/g^(n-1) - g)/n + g
    fn nroot_newton(&mut self, v: &K::Num, n: u64) -> K::Num {
        let mut g = self.nroot_seed(v, n);
        let nd = self.from_u64(n);

        let mut prev = g;
        let mut pprev;

        for _ in 0..MAX_ITER {
            pprev = prev;
            prev = g;

            let gn = self.pow_uint(&g, n - 1);
            let n0 = self.div(v, &gn);
            let n1 = self.sub(&n0, &g);
            let n2 = self.div(&n1, &nd);
            g = self.add(&n2, &g);

            // converged, or alternating between two neighbours
            if g == prev || g == pprev {
                return g;
            }
        }

        tracing::warn!(iterations = MAX_ITER, n, "root iteration did not converge");

        g
    }

    // Initial approximation of the n-th root from a double.
    fn nroot_seed(&mut self, v: &K::Num, n: u64) -> K::Num {
        // v = f*10^e, 1 <= f < 10
        let e = v.adjusted_exponent();
        let m = self.kernel().scaleb(v, -e);
        let f = self.to_f64(&m);

        // root = 10^((e + log10(f))/n) = 10^frac * 10^k
        let l = (e as f64 + f.log10()) / n as f64;
        let k = l.floor();
        let frac = 10f64.powf(l - k);

        if frac.is_finite() && frac > 0.0 {
            let s = self.from_f64(frac);
            return self.kernel().scaleb(&s, k as i64);
        }

        let nd = self.from_u64(n);
        self.div(v, &nd)
    }
}
