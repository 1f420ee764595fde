//! Power series computation appliance.

use crate::ctx::Context;
use crate::defs::GUARD_DIGITS;
use crate::defs::MAX_ITER;
use crate::num::Kernel;

/// Generator of series terms.
pub(crate) trait TermGen<K: Kernel> {
    /// Returns the next term of the series.
    fn next(&mut self, cx: &mut Context<K>) -> K::Num;
}

/// Adds terms produced by `gen` to `acc` until a term no longer changes the sum
/// at the working precision of `cx`.
pub(crate) fn series_run<K: Kernel, G: TermGen<K>>(cx: &mut Context<K>, acc: K::Num, gen: &mut G) -> K::Num {
    series_run_bounded(cx, acc, gen, 0, MAX_ITER)
}

/// Same as `series_run`, but adds at least `min_iter` and at most `max_iter` terms.
pub(crate) fn series_run_bounded<K: Kernel, G: TermGen<K>>(
    cx: &mut Context<K>,
    mut acc: K::Num,
    gen: &mut G,
    min_iter: usize,
    max_iter: usize,
) -> K::Num {
    for i in 1..=max_iter {
        let t = gen.next(cx);
        let prev = acc;
        acc = cx.add(&acc, &t);
        if acc == prev && i >= min_iter {
            return acc;
        }
    }

    tracing::warn!(iterations = max_iter, "power series did not converge");

    acc
}

/// Which of sine and cosine to compute.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum SinCosPart {
    Sin,
    Cos,
    Both,
}

/// Result of `sincos_taylor`: the requested parts are `Some`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SinCos<V> {
    pub sin: Option<V>,
    pub cos: Option<V>,
}

impl<K: Kernel> Context<K> {
    /// Computes sine and/or cosine of a finite reduced argument `a` in radians, |a| <= π.
    ///
    /// Both series share one recurrence `t = t*a^2/(j*(j+1))`:
    /// sin(a) = a*(1 - a^2/3! + a^4/5! - ...), cos(a) = 1 - a^2/2! + a^4/4! - ...
    /// Each part stops independently once its sum stops changing.
    pub(crate) fn sincos_taylor(&mut self, a: &K::Num, part: SinCosPart) -> SinCos<K::Num> {
        let (s, c) = {
            let mut cx = self.extend(GUARD_DIGITS);

            let one = cx.from_i64(1);
            let a2 = cx.mul(a, a);

            let mut j = one;
            let mut t = one;
            let mut s = one;
            let mut c = one;
            let mut sin_done = part == SinCosPart::Cos;
            let mut cos_done = part == SinCosPart::Sin;

            let mut i = 0;
            while !(sin_done && cos_done) {
                i += 1;
                if i > MAX_ITER {
                    tracing::warn!(iterations = MAX_ITER, "sine/cosine series did not converge");
                    break;
                }

                let odd = i & 1 == 1;

                j = cx.add(&j, &one);
                let q = cx.div(&a2, &j);
                t = cx.mul(&t, &q);
                if !cos_done {
                    let prev = c;
                    c = if odd { cx.sub(&c, &t) } else { cx.add(&c, &t) };
                    cos_done = c == prev;
                }

                j = cx.add(&j, &one);
                t = cx.div(&t, &j);
                if !sin_done {
                    let prev = s;
                    s = if odd { cx.sub(&s, &t) } else { cx.add(&s, &t) };
                    sin_done = s == prev;
                }
            }

            (cx.mul(&s, a), c)
        };

        let sin = if part != SinCosPart::Cos { Some(self.round(&s)) } else { None };
        let cos = if part != SinCosPart::Sin { Some(self.round(&c)) } else { None };

        SinCos { sin, cos }
    }
}
