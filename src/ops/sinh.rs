//! Hyperbolic sine.

use crate::ctx::Context;
use crate::defs::GUARD_DIGITS;
use crate::num::Kernel;
use crate::num::Value;
use crate::ops::series::series_run;
use crate::ops::series::TermGen;

// Terms x^(2k+1)/(2k+1)! of the hyperbolic sine series.
struct SinhTerms<V> {
    x2: V,
    t: V,
    m: i64,
}

impl<K: Kernel> TermGen<K> for SinhTerms<K::Num> {
    fn next(&mut self, cx: &mut Context<K>) -> K::Num {
        self.m += 2;
        let d = cx.from_i64((self.m - 1) * self.m);
        let n0 = cx.mul(&self.t, &self.x2);
        self.t = cx.div(&n0, &d);
        self.t
    }
}

impl<K: Kernel> Context<K> {
    /// Computes the hyperbolic sine of `x`.
    pub fn sinh(&mut self, x: &K::Num) -> K::Num {
        if x.is_nan() {
            return K::Num::nan();
        }

        if x.is_zero() || x.is_infinite() {
            return *x;
        }

        let r = {
            let mut cx = self.extend(GUARD_DIGITS);
            let ax = cx.abs(x);
            let s = cx.sinh_abs(&ax);
            cx.copysign(&s, x.is_negative())
        };

        self.round(&r)
    }

    // sinh of a positive finite argument at the working precision.
    pub(crate) fn sinh_abs(&mut self, ax: &K::Num) -> K::Num {
        let threshold = self.from_parts(5, -2);

        if *ax > threshold {
            // (e^x - e^-x)/2
            let one = self.from_i64(1);
            let two = self.from_i64(2);
            let e = self.exp(ax);
            let ei = self.div(&one, &e);
            let n0 = self.sub(&e, &ei);
            self.div(&n0, &two)
        } else {
            let x2 = self.mul(ax, ax);
            let mut gen = SinhTerms { x2, t: *ax, m: 1 };
            series_run(self, *ax, &mut gen)
        }
    }
}
