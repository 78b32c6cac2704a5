//! Arena storage for expression trees.
//!
//! Every node of an expression lives in a single [`Tree`]. Nodes are addressed with [`NodeId`]s,
//! cheap `Copy` handles that stay valid for the lifetime of the tree. Each node stores the handles
//! of its children and a back-reference to its parent; the parent link never implies ownership
//! and is only used for ancestor queries and for splicing a node into its parent's slot.
//!
//! A node is owned by exactly one slot of its parent's child list, or by none, in which case it is
//! a root. Nodes are never freed: a node that is replaced simply becomes the root of its own
//! detached subtree.
//!
//! The mutation primitives ([`Tree::swap_children`], [`Tree::replace_with`], ...) always update
//! the child list and the parent back-references together, so no partially-linked state can be
//! observed between two operations.
//!
//! ```
//! use cas_canon::tree::Tree;
//!
//! let mut tree = Tree::new();
//! let x = tree.symbol("x");
//! let three = tree.integer(3);
//! let sum = tree.add(vec![x, three]);
//!
//! assert_eq!(tree.parent(x), Some(sum));
//! assert_eq!(tree.children(sum), &[x, three]);
//! assert_eq!(tree.display(sum).to_string(), "x + 3");
//! ```

mod fmt;
mod iter;
pub mod kind;
mod predicate;

use crate::primitive::{float, int};
use kind::{NodeKind, Number};

pub use fmt::TreeDisplay;
pub use iter::PostOrderIter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A handle to a node in a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeId(u32);

impl NodeId {
    /// Returns the index of this node in the arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single node of a [`Tree`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    /// The type of the node.
    kind: NodeKind,

    /// The children of the node, in order.
    children: Vec<NodeId>,

    /// The node whose child list contains this node, if any.
    parent: Option<NodeId>,
}

/// An arena containing the nodes of one or more expressions.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Creates a new empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of nodes in the arena, including detached nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Creates a node with the given kind and children. The children must be roots; they are
    /// attached to the new node.
    ///
    /// # Panics
    ///
    /// Panics if one of the children already has a parent.
    pub fn push(&mut self, kind: NodeKind, children: Vec<NodeId>) -> NodeId {
        let index = self.nodes.len();
        assert!(index < u32::MAX as usize, "tree capacity exceeded");
        let id = NodeId(index as u32);

        for &child in &children {
            let node = &mut self.nodes[child.index()];
            assert!(node.parent.is_none(), "node {} is already owned by {:?}", child, node.parent);
            node.parent = Some(id);
        }

        self.nodes.push(Node { kind, children, parent: None });
        id
    }

    /// Creates an integer node.
    pub fn integer(&mut self, n: i64) -> NodeId {
        self.push(NodeKind::Number(Number::Integer(int(n))), Vec::new())
    }

    /// Creates a floating-point node.
    ///
    /// # Panics
    ///
    /// Panics if `n` is not finite.
    pub fn float(&mut self, n: f64) -> NodeId {
        assert!(n.is_finite(), "trees cannot hold non-finite numbers");
        self.push(NodeKind::Number(Number::Float(float(n))), Vec::new())
    }

    /// Creates a symbol node.
    pub fn symbol(&mut self, name: &str) -> NodeId {
        self.push(NodeKind::Symbol(name.to_string()), Vec::new())
    }

    /// Creates a sum of the given terms.
    pub fn add(&mut self, terms: Vec<NodeId>) -> NodeId {
        self.push(NodeKind::Addition, terms)
    }

    /// Creates a product of the given factors.
    pub fn mul(&mut self, factors: Vec<NodeId>) -> NodeId {
        self.push(NodeKind::Multiplication, factors)
    }

    /// Creates `base^exp`.
    pub fn pow(&mut self, base: NodeId, exp: NodeId) -> NodeId {
        self.push(NodeKind::Power, vec![base, exp])
    }

    /// Creates `-operand`.
    pub fn opposite(&mut self, operand: NodeId) -> NodeId {
        self.push(NodeKind::Opposite, vec![operand])
    }

    /// Creates `conj(operand)`.
    pub fn conjugate(&mut self, operand: NodeId) -> NodeId {
        self.push(NodeKind::Conjugate, vec![operand])
    }

    /// Creates the complex number `real + imag*i`.
    pub fn complex_cartesian(&mut self, real: NodeId, imag: NodeId) -> NodeId {
        self.push(NodeKind::ComplexCartesian, vec![real, imag])
    }

    /// Creates a matrix from its entries in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if the number of entries is not `rows * columns`.
    pub fn matrix(&mut self, rows: usize, columns: usize, entries: Vec<NodeId>) -> NodeId {
        assert_eq!(entries.len(), rows * columns, "matrix entry count does not match its dimensions");
        self.push(NodeKind::Matrix { rows, columns }, entries)
    }

    /// Returns the kind of the node.
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.index()].kind
    }

    /// Returns the children of the node.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }

    /// Returns the number of children of the node.
    pub fn num_children(&self, id: NodeId) -> usize {
        self.nodes[id.index()].children.len()
    }

    /// Returns the child of the node at the given index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn child(&self, id: NodeId, index: usize) -> NodeId {
        self.nodes[id.index()].children[index]
    }

    /// Returns the parent of the node, if it has one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    /// Returns true if `ancestor` is found while walking up the parent chain of `id`. When
    /// `include_self` is true, a node counts as its own ancestor.
    pub fn has_ancestor(&self, id: NodeId, ancestor: NodeId, include_self: bool) -> bool {
        let mut current = if include_self { Some(id) } else { self.parent(id) };
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// Swaps the children of `id` at indices `i` and `j`. Parent back-references are unchanged,
    /// since both children keep the same parent.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swap_children(&mut self, id: NodeId, i: usize, j: usize) {
        self.nodes[id.index()].children.swap(i, j);
    }

    /// Puts `replacement` in the slot that `id` occupies in its parent, and detaches `id`. If
    /// `id` is a root, `replacement` becomes a root.
    ///
    /// `replacement` is first removed from its own parent, if it has one. This makes it possible
    /// to replace a node with one of its own descendants.
    pub fn replace_with(&mut self, id: NodeId, replacement: NodeId) {
        if id == replacement {
            return;
        }

        self.detach(replacement);
        if let Some(parent) = self.parent(id) {
            let slot = self.index_in_parent(parent, id);
            self.nodes[parent.index()].children[slot] = replacement;
            self.nodes[replacement.index()].parent = Some(parent);
            self.nodes[id.index()].parent = None;
        }
    }

    /// Puts the children of `id`, in order, in the slot that `id` occupies in its parent, and
    /// detaches `id`, leaving it with no children.
    ///
    /// # Panics
    ///
    /// Panics if `id` is a root.
    pub fn replace_with_children(&mut self, id: NodeId) {
        let parent = self.parent(id)
            .unwrap_or_else(|| panic!("{} has no parent to take its children", id));
        let slot = self.index_in_parent(parent, id);

        let children = std::mem::take(&mut self.nodes[id.index()].children);
        for &child in &children {
            self.nodes[child.index()].parent = Some(parent);
        }
        self.nodes[id.index()].parent = None;
        self.nodes[parent.index()].children.splice(slot..=slot, children);
    }

    /// Removes the node from its parent's child list. Does nothing if the node is a root.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.parent(id) {
            let slot = self.index_in_parent(parent, id);
            self.nodes[parent.index()].children.remove(slot);
            self.nodes[id.index()].parent = None;
        }
    }

    /// Returns the index of `child` in the child list of `parent`.
    fn index_in_parent(&self, parent: NodeId, child: NodeId) -> usize {
        self.children(parent)
            .iter()
            .position(|&c| c == child)
            .unwrap_or_else(|| panic!("{} is linked to parent {} but is not one of its children", child, parent))
    }

    /// Returns an iterator that traverses the subtree rooted at `id` in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self, id: NodeId) -> PostOrderIter {
        PostOrderIter::new(self, id)
    }

    /// Returns true if the subtrees rooted at `a` and `b` have the same shape and contents.
    pub fn structurally_eq(&self, a: NodeId, b: NodeId) -> bool {
        self.kind(a) == self.kind(b)
            && self.num_children(a) == self.num_children(b)
            && self.children(a)
                .iter()
                .zip(self.children(b))
                .all(|(&lhs, &rhs)| self.structurally_eq(lhs, rhs))
    }
}
