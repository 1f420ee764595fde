//! Cube root.

use crate::ctx::Context;
use crate::num::Kernel;

impl<K: Kernel> Context<K> {
    /// Computes the cube root of `x`. Negative `x` gives the negated cube root of |x|.
    pub fn cbrt(&mut self, x: &K::Num) -> K::Num {
        self.root(x, 3)
    }
}
