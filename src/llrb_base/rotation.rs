//! Rotation and recoloring primitives shared by insertion and deletion.
//!
//! Every function takes ownership of a subtree root and hands back the root
//! of the restructured subtree, which the caller reattaches.

use std::fmt::Debug;

use super::node::{is_red, Node};

//              h                         x
//             / \                       / \
//            /   (r)                  (r)  \
//           /      \                  /     \
//         left      x                h      xr
//                  / \              / \
//                xl   xr         left  xl
//
pub fn rotate_left<K: Debug, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    assert!(
        is_red(h.right_deref()),
        "rotate_left(): rotating a black link at {:?}",
        h.key
    );
    log::trace!("rotate_left at {:?}", h.key);

    let mut x = h.right.take().expect("red right link");
    h.right = x.left.take();
    x.color = h.color;
    h.set_red();
    x.left = Some(h);
    x
}

//              h                         x
//             / \                       / \
//           (r)  \                     /  (r)
//           /     \                   /     \
//          x     right               xl      h
//         / \                               / \
//       xl   xr                           xr   right
//
pub fn rotate_right<K: Debug, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    assert!(
        is_red(h.left_deref()),
        "rotate_right(): rotating a black link at {:?}",
        h.key
    );
    log::trace!("rotate_right at {:?}", h.key);

    let mut x = h.left.take().expect("red left link");
    h.left = x.right.take();
    x.color = h.color;
    h.set_red();
    x.right = Some(h);
    x
}

/// Toggle the color of `h` and both its children. Splits a 4-node on the way
/// up, builds one on the way down.
pub fn flip_colors<K: Debug, V>(h: &mut Node<K, V>) {
    log::trace!("flip_colors at {:?}", h.key);
    match (h.left.as_mut(), h.right.as_mut()) {
        (Some(left), Some(right)) => {
            left.toggle_color();
            right.toggle_color();
        }
        _ => panic!("flip_colors(): {:?} is missing a child", h.key),
    }
    h.toggle_color();
}

/// Make `h.left` or one of its children red so a deletion can descend left.
/// Assumes `h` is red and both children are black.
pub fn move_red_left<K: Debug, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    log::trace!("move_red_left at {:?}", h.key);
    flip_colors(&mut h);

    // the right sibling is a 3-node and can lend a key
    if is_red(h.right_deref().and_then(Node::left_deref)) {
        let right = h.right.take().expect("right child after flip");
        h.right = Some(rotate_right(right));
        h = rotate_left(h);
        flip_colors(&mut h);
    }
    h
}

/// Make `h.right` or one of its children red so a deletion can descend right.
/// Assumes `h` is red and both children are black.
pub fn move_red_right<K: Debug, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    log::trace!("move_red_right at {:?}", h.key);
    flip_colors(&mut h);

    if is_red(h.left_deref().and_then(Node::left_deref)) {
        h = rotate_right(h);
        flip_colors(&mut h);
    }
    h
}

/// Restore the left-leaning invariants at `h` on the way back up.
pub fn balance<K: Debug, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    if is_red(h.right_deref()) && !is_red(h.left_deref()) {
        h = rotate_left(h);
    }
    if is_red(h.left_deref()) && is_red(h.left_deref().and_then(Node::left_deref)) {
        h = rotate_right(h);
    }
    if is_red(h.left_deref()) && is_red(h.right_deref()) {
        flip_colors(&mut h);
    }
    h
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llrb_base::node::Color;

    fn keys(h: &Node<i32, i32>) -> (i32, Option<i32>, Option<i32>) {
        (
            h.key,
            h.left_deref().map(|n| n.key),
            h.right_deref().map(|n| n.key),
        )
    }

    #[test]
    fn rotate_left_promotes_red_right_child() {
        let mut h = Node::new(2, 2, Color::Black);
        h.left = Some(Node::new(1, 1, Color::Black));
        let mut x = Node::new(4, 4, Color::Red);
        x.left = Some(Node::new(3, 3, Color::Black));
        x.right = Some(Node::new(5, 5, Color::Black));
        h.right = Some(x);

        let x = rotate_left(h);
        assert_eq!(keys(&x), (4, Some(2), Some(5)));
        assert_eq!(x.color, Color::Black);

        let h = x.left_deref().unwrap();
        assert_eq!(keys(h), (2, Some(1), Some(3)));
        assert_eq!(h.color, Color::Red);
    }

    #[test]
    fn rotate_right_promotes_red_left_child() {
        let mut h = Node::new(4, 4, Color::Red);
        let mut x = Node::new(2, 2, Color::Red);
        x.left = Some(Node::new(1, 1, Color::Black));
        x.right = Some(Node::new(3, 3, Color::Black));
        h.left = Some(x);
        h.right = Some(Node::new(5, 5, Color::Black));

        let x = rotate_right(h);
        assert_eq!(keys(&x), (2, Some(1), Some(4)));
        assert_eq!(x.color, Color::Red);

        let h = x.right_deref().unwrap();
        assert_eq!(keys(h), (4, Some(3), Some(5)));
        assert_eq!(h.color, Color::Red);
    }

    #[test]
    #[should_panic(expected = "rotating a black link")]
    fn rotate_left_on_black_link_panics() {
        let mut h = Node::new(1, 1, Color::Black);
        h.right = Some(Node::new(2, 2, Color::Black));
        rotate_left(h);
    }

    #[test]
    #[should_panic(expected = "rotating a black link")]
    fn rotate_right_without_child_panics() {
        rotate_right(Node::new(1, 1, Color::Black));
    }

    #[test]
    fn flip_colors_splits_four_node() {
        let mut h = Node::new(2, 2, Color::Black);
        h.left = Some(Node::new(1, 1, Color::Red));
        h.right = Some(Node::new(3, 3, Color::Red));

        flip_colors(&mut h);
        assert!(h.is_red());
        assert!(!is_red(h.left_deref()));
        assert!(!is_red(h.right_deref()));
    }

    #[test]
    fn balance_fixes_right_leaning_red() {
        let mut h = Node::new(1, 1, Color::Black);
        h.right = Some(Node::new(2, 2, Color::Red));

        let h = balance(h);
        assert_eq!(keys(&h), (2, Some(1), None));
        assert_eq!(h.color, Color::Black);
        assert!(is_red(h.left_deref()));
    }

    #[test]
    fn balance_splits_left_left_reds() {
        let mut mid = Node::new(2, 2, Color::Red);
        mid.left = Some(Node::new(1, 1, Color::Red));
        let mut h = Node::new(3, 3, Color::Black);
        h.left = Some(mid);

        let h = balance(h);
        assert_eq!(keys(&h), (2, Some(1), Some(3)));
        assert!(h.is_red());
        assert!(!is_red(h.left_deref()));
        assert!(!is_red(h.right_deref()));
    }

    #[test]
    fn move_red_left_borrows_from_three_node_sibling() {
        // h(red) with black children 1 and the 3-node [4 5]
        let mut h = Node::new(2, 2, Color::Red);
        h.left = Some(Node::new(1, 1, Color::Black));
        let mut right = Node::new(5, 5, Color::Black);
        right.left = Some(Node::new(4, 4, Color::Red));
        h.right = Some(right);

        let h = move_red_left(h);
        assert_eq!(keys(&h), (4, Some(2), Some(5)));
        assert!(h.is_red());

        let left = h.left_deref().unwrap();
        assert_eq!(keys(left), (2, Some(1), None));
        assert_eq!(left.color, Color::Black);
        assert!(is_red(left.left_deref()));
    }

    #[test]
    fn move_red_left_merges_with_two_node_sibling() {
        let mut h = Node::new(2, 2, Color::Red);
        h.left = Some(Node::new(1, 1, Color::Black));
        h.right = Some(Node::new(3, 3, Color::Black));

        let h = move_red_left(h);
        assert_eq!(keys(&h), (2, Some(1), Some(3)));
        assert!(!h.is_red());
        assert!(is_red(h.left_deref()));
        assert!(is_red(h.right_deref()));
    }

    #[test]
    fn move_red_right_borrows_from_three_node_sibling() {
        let mut left = Node::new(2, 2, Color::Black);
        left.left = Some(Node::new(1, 1, Color::Red));
        let mut h = Node::new(3, 3, Color::Red);
        h.left = Some(left);
        h.right = Some(Node::new(4, 4, Color::Black));

        let h = move_red_right(h);
        assert_eq!(keys(&h), (2, Some(1), Some(3)));
        assert!(h.is_red());

        let right = h.right_deref().unwrap();
        assert_eq!(right.color, Color::Black);
        assert!(is_red(right.right_deref()));
    }
}
