//! Natural logarithm of 2.

use crate::ctx::Context;
use crate::defs::GUARD_DIGITS;
use crate::defs::LN2_DIGITS;
use crate::num::Kernel;

impl<K: Kernel> Context<K> {
    /// Returns the natural logarithm of 2 rounded to the working precision.
    pub fn ln2(&mut self) -> K::Num {
        let p = self.get_digits();
        let need = (p + 2).min(self.capacity());

        let v = match self.cc.ln2.get(need) {
            Some(v) => v,
            None => {
                let mut cx = self.with_precision(p + GUARD_DIGITS);
                let d = cx.get_digits();

                // the stored digits cover any practical precision, the kernel logarithm covers the rest
                let v = match cx.parse(LN2_DIGITS) {
                    Ok(v) if d + 2 < LN2_DIGITS.len() => v,
                    _ => {
                        let two = cx.from_i64(2);
                        cx.ln_kernel(&two)
                    }
                };

                cx.cc.ln2.put(d, v);
                v
            }
        };

        self.round(&v)
    }
}
