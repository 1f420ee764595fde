//! Cached mathematical constants.

mod ln2;
mod pi;

/// Holds the most precise value of a constant computed so far.
pub(crate) struct ConstCache<V> {
    val: Option<(usize, V)>,
}

impl<V: Copy> ConstCache<V> {
    fn new() -> Self {
        ConstCache { val: None }
    }

    /// Returns the cached value if it was computed with at least `digits` digits.
    pub(crate) fn get(&self, digits: usize) -> Option<V> {
        match self.val {
            Some((d, v)) if d >= digits => Some(v),
            _ => None,
        }
    }

    /// Stores `v` computed with `digits` digits, unless a more precise value is already cached.
    pub(crate) fn put(&mut self, digits: usize, v: V) {
        if self.val.map_or(true, |(d, _)| d < digits) {
            self.val = Some((digits, v));
        }
    }
}

/// Constants cache contains arbitrary-precision mathematical constants.
/// Each constant is computed once for the largest precision requested so far.
pub struct Consts<V> {
    pub(crate) pi: ConstCache<V>,
    pub(crate) ln2: ConstCache<V>,
}

impl<V: Copy> Consts<V> {
    /// Initializes the empty constants cache.
    pub fn new() -> Self {
        Consts {
            pi: ConstCache::new(),
            ln2: ConstCache::new(),
        }
    }
}

impl<V: Copy> Default for Consts<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_const_cache() {
        let mut c = ConstCache::<u32>::new();
        assert_eq!(c.get(1), None);
        c.put(10, 1);
        assert_eq!(c.get(10), Some(1));
        assert_eq!(c.get(11), None);
        c.put(5, 2);
        assert_eq!(c.get(5), Some(1));
        c.put(20, 3);
        assert_eq!(c.get(15), Some(3));
    }
}
