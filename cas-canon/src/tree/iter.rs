use super::{NodeId, Tree};

/// An iterator that iteratively traverses a subtree in left-to-right post-order (i.e.
/// depth-first), yielding the handle of each node.
///
/// This iterator is created by [`Tree::post_order_iter`].
pub struct PostOrderIter<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
    last_visited: Option<NodeId>,
}

impl<'a> PostOrderIter<'a> {
    /// Creates a new iterator that traverses the subtree rooted at `root` in left-to-right
    /// post-order (i.e. depth-first).
    pub fn new(tree: &'a Tree, root: NodeId) -> Self {
        Self {
            tree,
            stack: vec![root],
            last_visited: None,
        }
    }

    /// Pops the current node in the stack and marks it as the last visited node.
    fn visit(&mut self) -> Option<NodeId> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }
}

impl Iterator for PostOrderIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let tree = self.tree;
            let id = *self.stack.last()?;
            let children = tree.children(id);
            match children.last() {
                // the last child is visited right before its parent
                Some(&last) if self.last_visited != Some(last) => {
                    self.stack.extend(children.iter().rev());
                },
                _ => return self.visit(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn post_order() {
        // (x + 2) * -y
        let mut tree = Tree::new();
        let x = tree.symbol("x");
        let two = tree.integer(2);
        let sum = tree.add(vec![x, two]);
        let y = tree.symbol("y");
        let neg = tree.opposite(y);
        let product = tree.mul(vec![sum, neg]);

        let order = tree.post_order_iter(product).collect::<Vec<_>>();
        assert_eq!(order, vec![x, two, sum, y, neg, product]);
    }

    #[test]
    fn single_node() {
        let mut tree = Tree::new();
        let x = tree.symbol("x");
        assert_eq!(tree.post_order_iter(x).collect::<Vec<_>>(), vec![x]);
    }
}
