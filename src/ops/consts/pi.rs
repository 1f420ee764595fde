//! π number

use crate::ctx::Context;
use crate::defs::GUARD_DIGITS;
use crate::defs::MAX_ITER;
use crate::num::Kernel;

impl<K: Kernel> Context<K> {
    /// Returns π rounded to the working precision.
    /// The value is computed once and cached for the largest precision requested.
    pub fn pi(&mut self) -> K::Num {
        let p = self.get_digits();
        let need = (p + 2).min(self.capacity());

        let v = match self.cc.pi.get(need) {
            Some(v) => v,
            None => {
                let mut cx = self.with_precision(p + GUARD_DIGITS);
                let d = cx.get_digits();
                let v = cx.pi_borwein();
                cx.cc.pi.put(d, v);
                v
            }
        };

        self.round(&v)
    }

    // Borwein's quartic iteration at the working precision:
    // y' = (1 - (1 - y^4)^(1/4)) / (1 + (1 - y^4)^(1/4))
    // a' = a*(1 + y')^4 - m*y'*(1 + y' + y'^2), m = 2^(2k+3)
    // 1/a converges to π.
    fn pi_borwein(&mut self) -> K::Num {
        let one = self.from_i64(1);
        let two = self.from_i64(2);
        let four = self.from_i64(4);
        let six = self.from_i64(6);

        let sqrt2 = self.sqrt(&two);
        let n0 = self.mul(&four, &sqrt2);
        let mut a = self.sub(&six, &n0);
        let mut y = self.sub(&sqrt2, &one);
        let mut m = two;
        let mut pi = self.div(&one, &a);

        for _ in 0..MAX_ITER {
            m = self.mul(&m, &four);

            let y2 = self.mul(&y, &y);
            let y4 = self.mul(&y2, &y2);
            let n0 = self.sub(&one, &y4);
            let r = self.root(&n0, 4);

            let n0 = self.sub(&one, &r);
            let n1 = self.add(&one, &r);
            y = self.div(&n0, &n1);

            let y1 = self.add(&one, &y);
            let y1_2 = self.mul(&y1, &y1);
            let y1_4 = self.mul(&y1_2, &y1_2);
            let n0 = self.mul(&a, &y1_4);

            let y2 = self.mul(&y, &y);
            let n1 = self.add(&y1, &y2);
            let n2 = self.mul(&m, &y);
            let n3 = self.mul(&n2, &n1);
            a = self.sub(&n0, &n3);

            let prev = pi;
            pi = self.div(&one, &a);
            if pi == prev {
                return pi;
            }
        }

        tracing::warn!(iterations = MAX_ITER, "pi iteration did not converge");

        pi
    }
}
