use std::mem;

use super::{
    llrb_traits::{KeyComparator, LlrbParams},
    node::{is_red, Color, Link, Node},
    rotation::{balance, move_red_left, move_red_right, rotate_right},
    tree_stats::TreeStats,
    verify::{self, Violations},
};

type NodeOf<T> = Node<<T as LlrbParams>::KeyType, <T as LlrbParams>::ValueType>;
type LinkOf<T> = Link<<T as LlrbParams>::KeyType, <T as LlrbParams>::ValueType>;

/// Left-leaning red-black tree. Every recursive helper takes ownership of a
/// subtree and returns the root of its (possibly rotated) replacement.
pub struct Llrb<T: LlrbParams> {
    root_: LinkOf<T>,
    size_: usize,
    key_less: T::KeyCompareType,
}

/// Convenient Key Comparison Functions Generated From key_less
impl<T: LlrbParams> Llrb<T> {
    fn key_less(&self, a: &T::KeyType, b: &T::KeyType) -> bool {
        self.key_less.less(a, b)
    }

    fn key_equal(&self, a: &T::KeyType, b: &T::KeyType) -> bool {
        !self.key_less.less(a, b) && !self.key_less.less(b, a)
    }
}

impl<T: LlrbParams> Llrb<T> {
    pub fn new() -> Self {
        Self {
            root_: None,
            size_: 0,
            key_less: T::KeyCompareType::new(),
        }
    }

    /// Cached entry count.
    pub fn len(&self) -> usize {
        self.size_
    }

    pub fn is_empty(&self) -> bool {
        self.size_ == 0
    }

    /// Entry count by full traversal.
    pub fn size(&self) -> usize {
        self.stats().size
    }

    /// Node count on the longest root-to-leaf path, by full traversal.
    pub fn height(&self) -> usize {
        self.stats().height
    }

    pub fn stats(&self) -> TreeStats {
        TreeStats::collect(self.root_.as_deref())
    }

    pub fn clear(&mut self) {
        log::debug!("Llrb::clear on tree size {}", self.size_);
        self.root_ = None;
        self.size_ = 0;
    }
}

/// Access functions querying the tree by binary-search descent
impl<T: LlrbParams> Llrb<T> {
    fn find(&self, key: &T::KeyType) -> Option<&NodeOf<T>> {
        let mut x = self.root_.as_deref();
        while let Some(n) = x {
            if self.key_less(key, &n.key) {
                x = n.left_deref();
            } else if self.key_less(&n.key, key) {
                x = n.right_deref();
            } else {
                return Some(n);
            }
        }
        None
    }

    pub fn get(&self, key: &T::KeyType) -> Option<&T::ValueType> {
        self.find(key).map(|n| &n.value)
    }

    pub fn get_mut(&mut self, key: &T::KeyType) -> Option<&mut T::ValueType> {
        let cmp = &self.key_less;
        let mut x = self.root_.as_deref_mut();
        while let Some(n) = x {
            if cmp.less(key, &n.key) {
                x = n.left.as_deref_mut();
            } else if cmp.less(&n.key, key) {
                x = n.right.as_deref_mut();
            } else {
                return Some(&mut n.value);
            }
        }
        None
    }

    pub fn contains(&self, key: &T::KeyType) -> bool {
        self.find(key).is_some()
    }

    pub fn min(&self) -> Option<&T::KeyType> {
        let mut x = self.root_.as_deref()?;
        while let Some(left) = x.left_deref() {
            x = left;
        }
        Some(&x.key)
    }

    pub fn max(&self) -> Option<&T::KeyType> {
        let mut x = self.root_.as_deref()?;
        while let Some(right) = x.right_deref() {
            x = right;
        }
        Some(&x.key)
    }

    /// Value stored under the largest key strictly less than `key`. `key`
    /// itself need not be present.
    pub fn predecessor(&self, key: &T::KeyType) -> Option<&T::ValueType> {
        self.predecessor_descend(self.root_.as_deref(), key)
            .map(|n| &n.value)
    }

    /// Value stored under the smallest key strictly greater than `key`.
    pub fn successor(&self, key: &T::KeyType) -> Option<&T::ValueType> {
        self.successor_descend(self.root_.as_deref(), key)
            .map(|n| &n.value)
    }

    fn predecessor_descend<'a>(
        &self,
        node: Option<&'a NodeOf<T>>,
        key: &T::KeyType,
    ) -> Option<&'a NodeOf<T>> {
        let n = node?;
        if self.key_less(&n.key, key) {
            // n is a candidate, a closer one can only be on its right
            self.predecessor_descend(n.right_deref(), key).or(Some(n))
        } else {
            self.predecessor_descend(n.left_deref(), key)
        }
    }

    fn successor_descend<'a>(
        &self,
        node: Option<&'a NodeOf<T>>,
        key: &T::KeyType,
    ) -> Option<&'a NodeOf<T>> {
        let n = node?;
        if self.key_less(key, &n.key) {
            self.successor_descend(n.left_deref(), key).or(Some(n))
        } else {
            self.successor_descend(n.right_deref(), key)
        }
    }
}

/// Insert
impl<T: LlrbParams> Llrb<T> {
    /// Insert `key`, or overwrite the value of an existing equal key and
    /// return the previous value.
    pub fn insert(&mut self, key: T::KeyType, value: T::ValueType) -> Option<T::ValueType> {
        log::debug!("Llrb::insert({:?}) on tree size {}", key, self.size_);

        let (mut root, old_value) = match self.root_.take() {
            None => (Node::new(key, value, Color::Black), None),
            root @ Some(_) => self.insert_descend(root, key, value),
        };
        root.set_black();
        self.root_ = Some(root);

        if old_value.is_none() {
            self.size_ += 1;
        }
        self.self_verify();
        old_value
    }

    fn insert_descend(
        &self,
        link: LinkOf<T>,
        key: T::KeyType,
        value: T::ValueType,
    ) -> (Box<NodeOf<T>>, Option<T::ValueType>) {
        let mut h = match link {
            None => return (Node::new(key, value, Color::Red), None),
            Some(h) => h,
        };

        let old_value = if self.key_less(&key, &h.key) {
            let (left, old_value) = self.insert_descend(h.left.take(), key, value);
            h.left = Some(left);
            old_value
        } else if self.key_less(&h.key, &key) {
            let (right, old_value) = self.insert_descend(h.right.take(), key, value);
            h.right = Some(right);
            old_value
        } else {
            // same key, nothing to rebalance
            let old_value = mem::replace(&mut h.value, value);
            return (h, Some(old_value));
        };

        (balance(h), old_value)
    }
}

/// Erase
impl<T: LlrbParams> Llrb<T> {
    pub fn delete_min(&mut self) -> Option<T::ValueType> {
        let root = self.take_root_for_delete()?;
        log::debug!("Llrb::delete_min on tree size {}", self.size_);

        let (root, min) = Self::delete_min_descend(root);
        self.finish_delete(root);
        Some(min.value)
    }

    pub fn delete_max(&mut self) -> Option<T::ValueType> {
        let root = self.take_root_for_delete()?;
        log::debug!("Llrb::delete_max on tree size {}", self.size_);

        let (root, max) = Self::delete_max_descend(root);
        self.finish_delete(root);
        Some(max.value)
    }

    /// Remove `key` and return its value. A missing key leaves the tree
    /// untouched.
    pub fn delete(&mut self, key: &T::KeyType) -> Option<T::ValueType> {
        log::debug!("Llrb::delete({:?}) on tree size {}", key, self.size_);
        if !self.contains(key) {
            log::debug!("Could not find key {:?} to delete.", key);
            return None;
        }

        let root = self.take_root_for_delete()?;
        let (root, value) = self.delete_descend(root, key);
        self.finish_delete(root);
        Some(value)
    }

    // When both children of the root are black the root is reddened, so the
    // descent always starts from a node that is not a 2-node.
    fn take_root_for_delete(&mut self) -> Option<Box<NodeOf<T>>> {
        let mut root = self.root_.take()?;
        if !is_red(root.left_deref()) && !is_red(root.right_deref()) {
            root.set_red();
        }
        Some(root)
    }

    fn finish_delete(&mut self, root: LinkOf<T>) {
        self.root_ = root;
        if let Some(root) = self.root_.as_mut() {
            root.set_black();
        }
        self.size_ -= 1;
        self.self_verify();
    }

    // Returns the remaining subtree and the detached minimum node.
    fn delete_min_descend(mut h: Box<NodeOf<T>>) -> (LinkOf<T>, Box<NodeOf<T>>) {
        if h.left.is_none() {
            debug_assert!(h.right.is_none());
            return (None, h);
        }

        if h.is_left_two_node() {
            h = move_red_left(h);
        }

        let left = h.left.take().expect("left child on the way to the minimum");
        let (left, min) = Self::delete_min_descend(left);
        h.left = left;
        (Some(balance(h)), min)
    }

    fn delete_max_descend(mut h: Box<NodeOf<T>>) -> (LinkOf<T>, Box<NodeOf<T>>) {
        if is_red(h.left_deref()) {
            h = rotate_right(h);
        }

        if h.right.is_none() {
            debug_assert!(h.left.is_none());
            return (None, h);
        }

        if h.is_right_two_node() {
            h = move_red_right(h);
        }

        let right = h.right.take().expect("right child on the way to the maximum");
        let (right, max) = Self::delete_max_descend(right);
        h.right = right;
        (Some(balance(h)), max)
    }

    // `key` must be present below `h`.
    fn delete_descend(
        &self,
        mut h: Box<NodeOf<T>>,
        key: &T::KeyType,
    ) -> (LinkOf<T>, T::ValueType) {
        let removed = if self.key_less(key, &h.key) {
            if h.is_left_two_node() {
                h = move_red_left(h);
            }
            let left = h.left.take().expect("key below the left child");
            let (left, removed) = self.delete_descend(left, key);
            h.left = left;
            removed
        } else {
            if is_red(h.left_deref()) {
                h = rotate_right(h);
            }

            if self.key_equal(key, &h.key) && h.right.is_none() {
                debug_assert!(h.left.is_none());
                let node = *h;
                return (None, node.value);
            }

            if h.is_right_two_node() {
                h = move_red_right(h);
            }

            let right = h.right.take().expect("key below the right child");
            if self.key_equal(key, &h.key) {
                // replace h by its in-order successor
                let (right, successor) = Self::delete_min_descend(right);
                h.right = right;
                let Node {
                    key: next_key,
                    value: next_value,
                    ..
                } = *successor;
                h.key = next_key;
                mem::replace(&mut h.value, next_value)
            } else {
                let (right, removed) = self.delete_descend(right, key);
                h.right = right;
                removed
            }
        };

        (Some(balance(h)), removed)
    }
}

/// Verification
impl<T: LlrbParams> Llrb<T> {
    /// Every path from the root to an empty link crosses the same number of
    /// black links.
    pub fn is_balanced(&self) -> bool {
        verify::is_balanced(self.root_.as_deref())
    }

    /// No red right links and no two red links in a row.
    pub fn is_23_tree(&self) -> bool {
        verify::is_23_tree(self.root_.as_deref())
    }

    pub fn verify(&self) -> Violations {
        let (mut violations, count) = verify::verify(self.root_.as_deref(), &self.key_less);
        if count != self.size_ {
            violations = violations | Violations::CountMismatch;
        }
        violations
    }

    fn self_verify(&self) {
        if T::SELF_VERIFY {
            let violations = self.verify();
            assert!(
                violations.is_none(),
                "Llrb::self_verify failed on tree size {}: {}",
                self.size_,
                violations
            );
        }
    }
}

/// Debug
impl<T: LlrbParams> Llrb<T> {
    fn print_node(
        f: &mut std::fmt::Formatter<'_>,
        node: &NodeOf<T>,
        depth: usize,
    ) -> std::fmt::Result {
        for _ in 0..depth {
            write!(f, "  ")?;
        }
        writeln!(f, "{:?} {:?}", node.color, node.key)?;

        if let Some(left) = node.left_deref() {
            Self::print_node(f, left, depth + 1)?;
        }
        if let Some(right) = node.right_deref() {
            Self::print_node(f, right, depth + 1)?;
        }
        Ok(())
    }
}

/// Display
impl<T: LlrbParams> std::fmt::Debug for Llrb<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(root) = self.root_.as_deref() {
            Self::print_node(f, root, 0)?;
        }
        Ok(())
    }
}

impl<T: LlrbParams> Default for Llrb<T> {
    fn default() -> Self {
        Self::new()
    }
}
