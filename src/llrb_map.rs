use crate::llrb_base::{
    llrb::Llrb, llrb_traits::LlrbParams, verify::Violations, DefaultLlrbConfig, TreeStats,
    VerifiedLlrbConfig,
};

/// Ordered key-value map on top of a left-leaning red-black tree.
///
/// Point operations are O(log n). `size`, `height`, `stats` and the
/// structural checks walk the whole tree and are meant for diagnostics.
pub struct LlrbMap<T: LlrbParams> {
    _tree: Llrb<T>,
}

impl<T: LlrbParams> LlrbMap<T> {
    pub fn new() -> Self {
        Self { _tree: Llrb::new() }
    }

    pub fn is_empty(&self) -> bool {
        self._tree.is_empty()
    }

    /// Number of entries, O(1).
    pub fn len(&self) -> usize {
        self._tree.len()
    }

    /// Number of entries counted by traversal, O(n).
    pub fn size(&self) -> usize {
        self._tree.size()
    }

    pub fn height(&self) -> usize {
        self._tree.height()
    }

    pub fn stats(&self) -> TreeStats {
        self._tree.stats()
    }

    pub fn clear(&mut self) {
        self._tree.clear()
    }

    pub fn contains(&self, key: &T::KeyType) -> bool {
        self._tree.contains(key)
    }

    pub fn get(&self, key: &T::KeyType) -> Option<&T::ValueType> {
        self._tree.get(key)
    }

    pub fn get_mut(&mut self, key: &T::KeyType) -> Option<&mut T::ValueType> {
        self._tree.get_mut(key)
    }

    /// Insert or overwrite. Returns the previous value for an existing key.
    pub fn insert(&mut self, key: T::KeyType, value: T::ValueType) -> Option<T::ValueType> {
        self._tree.insert(key, value)
    }

    pub fn delete(&mut self, key: &T::KeyType) -> Option<T::ValueType> {
        self._tree.delete(key)
    }

    /// Remove the smallest key and return its value.
    pub fn delete_min(&mut self) -> Option<T::ValueType> {
        self._tree.delete_min()
    }

    /// Remove the largest key and return its value.
    pub fn delete_max(&mut self) -> Option<T::ValueType> {
        self._tree.delete_max()
    }

    pub fn min(&self) -> Option<&T::KeyType> {
        self._tree.min()
    }

    pub fn max(&self) -> Option<&T::KeyType> {
        self._tree.max()
    }

    /// Value under the closest key below `key`.
    pub fn predecessor(&self, key: &T::KeyType) -> Option<&T::ValueType> {
        self._tree.predecessor(key)
    }

    /// Value under the closest key above `key`.
    pub fn successor(&self, key: &T::KeyType) -> Option<&T::ValueType> {
        self._tree.successor(key)
    }

    pub fn is_balanced(&self) -> bool {
        self._tree.is_balanced()
    }

    pub fn is_23_tree(&self) -> bool {
        self._tree.is_23_tree()
    }

    pub fn verify(&self) -> Violations {
        self._tree.verify()
    }
}

impl<T: LlrbParams> Default for LlrbMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: LlrbParams> std::fmt::Debug for LlrbMap<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self._tree, f)
    }
}

impl<T: LlrbParams> Extend<(T::KeyType, T::ValueType)> for LlrbMap<T> {
    fn extend<I: IntoIterator<Item = (T::KeyType, T::ValueType)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<T: LlrbParams> FromIterator<(T::KeyType, T::ValueType)> for LlrbMap<T> {
    fn from_iter<I: IntoIterator<Item = (T::KeyType, T::ValueType)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

pub type OrderedMap<K, V> = LlrbMap<DefaultLlrbConfig<K, V>>;
pub type VerifiedOrderedMap<K, V> = LlrbMap<VerifiedLlrbConfig<K, V>>;
