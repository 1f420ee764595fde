//! Logarithms base 2 and 10.

use crate::ctx::Context;
use crate::defs::GUARD_DIGITS;
use crate::num::Kernel;

impl<K: Kernel> Context<K> {
    /// Computes the logarithm base 10 of `x`. Exact powers of ten give exact results.
    pub fn log10(&mut self, x: &K::Num) -> K::Num {
        match self.log_special(x) {
            Some(v) => v,
            None => self.log10_kernel(x),
        }
    }

    /// Computes the logarithm base 2 of `x` as ln(x)/ln(2).
    pub fn log2(&mut self, x: &K::Num) -> K::Num {
        if let Some(v) = self.log_special(x) {
            return v;
        }

        let r = {
            let mut cx = self.extend(GUARD_DIGITS);
            let l = cx.ln(x);
            let l2 = cx.ln2();
            cx.div(&l, &l2)
        };

        self.round(&r)
    }
}

#[cfg(test)]
mod tests {

    use crate::num::Value;
    use crate::DecContext;

    #[test]
    fn test_log() {
        let mut cx = DecContext::new();
        cx.set_digits(34);

        let x = cx.from_i64(2);
        assert_eq!(cx.log10(&x), cx.parse("0.3010299956639811952137388947244930").unwrap());
        let x = cx.from_i64(7);
        assert_eq!(cx.log10(&x), cx.parse("0.8450980400142568307122162585926362").unwrap());
        let x = cx.parse("1E+1000").unwrap();
        assert_eq!(cx.log10(&x), cx.from_i64(1000));

        let x = cx.from_i64(10);
        assert_eq!(cx.log2(&x), cx.parse("3.321928094887362347870319429489390").unwrap());
        let x = cx.from_i64(3);
        assert_eq!(cx.log2(&x), cx.parse("1.584962500721156181453738943947817").unwrap());
        let x = cx.from_i64(1024);
        assert_eq!(cx.log2(&x), cx.from_i64(10));
        let x = cx.parse("0.125").unwrap();
        assert_eq!(cx.log2(&x), cx.from_i64(-3));

        let z = cx.parse("-0").unwrap();
        let r = cx.log2(&z);
        assert!(r.is_infinite() && r.is_negative());
        let m = cx.from_i64(-8);
        assert!(cx.log2(&m).is_nan());
        assert!(cx.log10(&m).is_nan());
        assert_eq!(cx.get_digits(), 34);
    }
}
