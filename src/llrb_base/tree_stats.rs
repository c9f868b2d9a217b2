use super::node::Node;

/// Shape figures gathered by a full traversal of the tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub size: usize,
    pub height: usize,
    pub black_height: usize,
    pub red_nodes: usize,
}

impl TreeStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn collect<K, V>(root: Option<&Node<K, V>>) -> Self {
        let mut stats = TreeStats::new();
        stats.height = stats.walk(root);

        let mut x = root;
        while let Some(n) = x {
            if !n.is_red() {
                stats.black_height += 1;
            }
            x = n.left_deref();
        }
        stats
    }

    fn walk<K, V>(&mut self, node: Option<&Node<K, V>>) -> usize {
        match node {
            None => 0,
            Some(n) => {
                self.size += 1;
                if n.is_red() {
                    self.red_nodes += 1;
                }
                let lh = self.walk(n.left_deref());
                let rh = self.walk(n.right_deref());
                lh.max(rh) + 1
            }
        }
    }

    pub fn black_nodes(&self) -> usize {
        self.size - self.red_nodes
    }

    pub fn red_ratio(&self) -> f64 {
        if self.size == 0 {
            0.0
        } else {
            self.red_nodes as f64 / self.size as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llrb_base::node::Color;

    #[test]
    fn empty() {
        let stats = TreeStats::collect::<i32, i32>(None);
        assert_eq!(stats, TreeStats::new());
        assert_eq!(stats.red_ratio(), 0.0);
    }

    #[test]
    fn three_node_root() {
        let mut root = Node::new(2, (), Color::Black);
        root.left = Some(Node::new(1, (), Color::Red));
        root.right = Some(Node::new(3, (), Color::Black));
        root.right.as_mut().unwrap().left = Some(Node::new(4, (), Color::Red));

        let stats = TreeStats::collect(Some(&*root));
        assert_eq!(stats.size, 4);
        assert_eq!(stats.height, 3);
        assert_eq!(stats.black_height, 1);
        assert_eq!(stats.red_nodes, 2);
        assert_eq!(stats.black_nodes(), 2);
        assert_eq!(stats.red_ratio(), 0.5);
    }
}
