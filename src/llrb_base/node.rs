#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

pub type Link<K, V> = Option<Box<Node<K, V>>>;

/// A single entry of the tree together with the subtree it roots. The color
/// is the color of the link from the parent to this node.
#[derive(Debug)]
pub struct Node<K, V> {
    pub key: K,
    pub value: V,
    pub color: Color,
    pub left: Link<K, V>,
    pub right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    pub fn new(key: K, value: V, color: Color) -> Box<Self> {
        Box::new(Node {
            key,
            value,
            color,
            left: None,
            right: None,
        })
    }

    #[inline]
    pub fn left_deref(&self) -> Option<&Node<K, V>> {
        self.left.as_deref()
    }

    #[inline]
    pub fn right_deref(&self) -> Option<&Node<K, V>> {
        self.right.as_deref()
    }

    #[inline]
    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    #[inline]
    pub fn set_red(&mut self) {
        self.color = Color::Red
    }

    #[inline]
    pub fn set_black(&mut self) {
        self.color = Color::Black
    }

    #[inline]
    pub fn toggle_color(&mut self) {
        self.color = self.color.flip()
    }

    /// Whether the left child and the left child's left child are both
    /// black (or absent): the left side is a 2-node.
    #[inline]
    pub fn is_left_two_node(&self) -> bool {
        !is_red(self.left_deref()) && !is_red(self.left_deref().and_then(Node::left_deref))
    }

    /// Right-hand counterpart of `is_left_two_node`.
    #[inline]
    pub fn is_right_two_node(&self) -> bool {
        !is_red(self.right_deref()) && !is_red(self.right_deref().and_then(Node::left_deref))
    }
}

/// Empty links are black.
#[inline]
pub fn is_red<K, V>(node: Option<&Node<K, V>>) -> bool {
    node.map_or(false, Node::is_red)
}
