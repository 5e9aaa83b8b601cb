//! Memoized projections
//!
//! Holds the last computed value together with the inputs it was computed
//! from, and recomputes only when the inputs change.

/// A value computed from a key, recomputed when the key changes
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    key: K,
    value: V,
    recomputations: u64,
}

impl<K: PartialEq, V> Memo<K, V> {
    /// Create a memo seeded with `compute(&key)`
    pub fn new(key: K, compute: impl FnOnce(&K) -> V) -> Self {
        let value = compute(&key);
        Self {
            key,
            value,
            recomputations: 0,
        }
    }

    /// Make the memo reflect `key`, recomputing only if it differs.
    /// Returns true when a recomputation happened.
    pub fn update(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> bool {
        if self.key == key {
            return false;
        }
        self.value = compute(&key);
        self.key = key;
        self.recomputations += 1;
        true
    }

    /// The memoized value
    pub fn value(&self) -> &V {
        &self.value
    }

    /// How many times the value was recomputed after creation
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_key_does_not_recompute() {
        let mut memo = Memo::new(2u32, |k| k * 10);
        assert!(!memo.update(2, |_| unreachable!()));
        assert_eq!(*memo.value(), 20);
        assert_eq!(memo.recomputations(), 0);
    }

    #[test]
    fn test_new_key_recomputes() {
        let mut memo = Memo::new("a".to_string(), |k| k.len());
        assert!(memo.update("abc".to_string(), |k| k.len()));
        assert_eq!(*memo.value(), 3);
        assert_eq!(memo.recomputations(), 1);
    }
}
