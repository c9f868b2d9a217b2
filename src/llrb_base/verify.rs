//! Structural self-checks: black balance, 2-3 shape and key order.

use std::fmt;

use bitmask_enum::bitmask;

use super::{
    llrb_traits::KeyComparator,
    node::{is_red, Node},
};

#[bitmask(u8)]
pub enum Violations {
    RedRoot = 1,
    RedRightLink = 2,
    ConsecutiveReds = 4,
    UnbalancedBlacks = 8,
    UnsortedKeys = 16,
    CountMismatch = 32,
}

impl Violations {
    const NAMES: [(Violations, &'static str); 6] = [
        (Violations::RedRoot, "red root"),
        (Violations::RedRightLink, "red right link"),
        (Violations::ConsecutiveReds, "consecutive red links"),
        (Violations::UnbalancedBlacks, "unbalanced black links"),
        (Violations::UnsortedKeys, "keys out of order"),
        (Violations::CountMismatch, "cached count mismatch"),
    ];

    /// Violations that break the left-leaning 2-3 shape.
    pub fn shape() -> Self {
        Violations::RedRightLink | Violations::ConsecutiveReds
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "ok");
        }
        let mut first = true;
        for (flag, name) in Self::NAMES.iter() {
            if self.contains(*flag) {
                if !first {
                    write!(f, ", ")?;
                }
                write!(f, "{}", name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Count the black links on the leftmost path, then check that every path
/// from `root` to an empty link crosses the same number.
pub fn is_balanced<K, V>(root: Option<&Node<K, V>>) -> bool {
    let mut black = 0;
    let mut x = root;
    while let Some(n) = x {
        if !n.is_red() {
            black += 1;
        }
        x = n.left_deref();
    }
    black_links_match(root, black)
}

fn black_links_match<K, V>(node: Option<&Node<K, V>>, mut black: usize) -> bool {
    match node {
        None => black == 0,
        Some(n) => {
            if !n.is_red() {
                if black == 0 {
                    return false;
                }
                black -= 1;
            }
            black_links_match(n.left_deref(), black) && black_links_match(n.right_deref(), black)
        }
    }
}

/// No red right links, and no red node below the root with a red left child.
pub fn is_23_tree<K, V>(root: Option<&Node<K, V>>) -> bool {
    is_23_subtree(root, true)
}

fn is_23_subtree<K, V>(node: Option<&Node<K, V>>, is_root: bool) -> bool {
    let Some(n) = node else {
        return true;
    };
    if is_red(n.right_deref()) {
        return false;
    }
    if !is_root && n.is_red() && is_red(n.left_deref()) {
        return false;
    }
    is_23_subtree(n.left_deref(), false) && is_23_subtree(n.right_deref(), false)
}

/// Walk the whole tree once and collect every violation found, along with
/// the number of nodes visited.
pub fn verify<K, V, C: KeyComparator<K>>(root: Option<&Node<K, V>>, cmp: &C) -> (Violations, usize) {
    let mut walk = Walk {
        cmp,
        prev: None,
        count: 0,
        violations: Violations::none(),
    };
    if is_red(root) {
        walk.violations = walk.violations | Violations::RedRoot;
    }
    walk.visit(root, false);
    (walk.violations, walk.count)
}

struct Walk<'a, K, C> {
    cmp: &'a C,
    prev: Option<&'a K>,
    count: usize,
    violations: Violations,
}

impl<'a, K, C: KeyComparator<K>> Walk<'a, K, C> {
    fn flag(&mut self, violation: Violations) {
        self.violations = self.violations | violation;
    }

    // returns the black height of the subtree
    fn visit<V>(&mut self, node: Option<&'a Node<K, V>>, parent_red: bool) -> usize {
        let Some(n) = node else {
            return 0;
        };
        if is_red(n.right_deref()) {
            self.flag(Violations::RedRightLink);
        }
        if parent_red && n.is_red() {
            self.flag(Violations::ConsecutiveReds);
        }

        let lblacks = self.visit(n.left_deref(), n.is_red());

        if let Some(prev) = self.prev {
            if !self.cmp.less(prev, &n.key) {
                self.flag(Violations::UnsortedKeys);
            }
        }
        self.prev = Some(&n.key);
        self.count += 1;

        let rblacks = self.visit(n.right_deref(), n.is_red());
        if lblacks != rblacks {
            self.flag(Violations::UnbalancedBlacks);
        }

        lblacks.max(rblacks) + usize::from(!n.is_red())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llrb_base::{llrb_traits::KeyComparator, node::Color, DefaultKeyComparator};

    fn cmp() -> DefaultKeyComparator<i32> {
        DefaultKeyComparator::new()
    }

    // [1 2] 3 4  as the 2-3 tree  (3) -> ([1 2], 4)
    fn valid_tree() -> Box<Node<i32, i32>> {
        let mut left = Node::new(2, 2, Color::Black);
        left.left = Some(Node::new(1, 1, Color::Red));
        let mut root = Node::new(3, 3, Color::Black);
        root.left = Some(left);
        root.right = Some(Node::new(4, 4, Color::Black));
        root
    }

    #[test]
    fn empty_tree_is_valid() {
        assert!(is_balanced::<i32, i32>(None));
        assert!(is_23_tree::<i32, i32>(None));
        let (violations, count) = verify::<i32, i32, _>(None, &cmp());
        assert!(violations.is_none());
        assert_eq!(count, 0);
    }

    #[test]
    fn valid_tree_passes() {
        let root = valid_tree();
        assert!(is_balanced(Some(&*root)));
        assert!(is_23_tree(Some(&*root)));
        let (violations, count) = verify(Some(&*root), &cmp());
        assert!(violations.is_none(), "{}", violations);
        assert_eq!(count, 4);
    }

    #[test]
    fn detects_red_right_link() {
        let mut root = valid_tree();
        root.right.as_mut().unwrap().set_red();

        assert!(!is_23_tree(Some(&*root)));
        assert!(!is_balanced(Some(&*root)));
        let (violations, _) = verify(Some(&*root), &cmp());
        assert!(violations.contains(Violations::RedRightLink));
        assert!(violations.contains(Violations::UnbalancedBlacks));
    }

    #[test]
    fn detects_consecutive_reds() {
        let mut root = valid_tree();
        root.left.as_mut().unwrap().set_red();

        assert!(!is_23_tree(Some(&*root)));
        let (violations, _) = verify(Some(&*root), &cmp());
        assert!(violations.contains(Violations::ConsecutiveReds));
        assert!(violations.intersects(Violations::shape()));
    }

    #[test]
    fn detects_unbalanced_blacks() {
        let mut root = valid_tree();
        root.left.as_mut().unwrap().left.as_mut().unwrap().set_black();

        assert!(is_23_tree(Some(&*root)));
        assert!(!is_balanced(Some(&*root)));
        let (violations, _) = verify(Some(&*root), &cmp());
        assert!(violations == Violations::UnbalancedBlacks, "{}", violations);
    }

    #[test]
    fn detects_red_root_and_unsorted_keys() {
        let mut root = valid_tree();
        root.set_red();
        root.right.as_mut().unwrap().key = 0;

        let (violations, _) = verify(Some(&*root), &cmp());
        assert!(violations.contains(Violations::RedRoot));
        assert!(violations.contains(Violations::UnsortedKeys));
        assert_eq!(
            violations.to_string(),
            "red root, keys out of order".to_string()
        );
    }
}
