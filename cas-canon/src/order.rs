//! The simplification order: a total order over the nodes of a [`Tree`].
//!
//! Sums and products are commutative, so `x + 2` and `2 + x` are the same expression written two
//! ways. To give every such expression one canonical form, the operands of sums and products are
//! sorted with [`simplification_order`] (see [`Tree::sort_children_in_place`]). The order is also
//! what makes like terms end up next to each other, since terms that differ only by a numeric
//! coefficient compare by their last, non-numeric, factor.
//!
//! # Rules
//!
//! Nodes of the **same type** are compared as follows:
//!
//! - numbers by value, symbols by name, and matrices by dimensions and then entries;
//! - sums and products by their children, from the **last** child toward the first. When one node
//!   runs out of children first, the missing child acts as a "null node" that is less than every
//!   other node;
//! - every other node by its children, from the first toward the last, then by child count.
//!
//! Nodes of **different types** are compared by the node that "owns" the comparison: the sum or
//! product if exactly one of them is n-ary, otherwise the one with the greater
//! [type rank](NodeKind::rank).
//!
//! - A sum or product compares its last child against the other node. On a tie, it is greater
//!   than the other node if it has more than one child. An empty sum or product is less than
//!   everything.
//! - A power compares its base against the other node, and is greater on a tie (`x < x^2`).
//! - Any other node is greater than nodes with a lower type rank.
//!
//! Passing `ascending = false` reverses the order, except for the rule that an empty sum or
//! product is the least node.
//!
//! For every pair of nodes, `order(a, b) == order(b, a).reverse()`. A result of
//! [`Ordering::Equal`] means the two nodes can appear in either order, not that they are equal.
//!
//! # Interruption
//!
//! The [`Interrupt`] is checked at every recursive call. Once it fires, every comparison returns
//! [`Ordering::Equal`] immediately, so the caller can unwind without walking the rest of the
//! trees. Callers that need to know whether the result is meaningful must check the interrupt
//! themselves, as [`Tree::sort_children_in_place`] does.

use crate::{interrupt::Interrupt, tree::{kind::NodeKind, NodeId, Tree}};
use std::cmp::Ordering;

/// Returns `Greater` when the order is ascending, `Less` otherwise.
fn greater_if(ascending: bool) -> Ordering {
    if ascending {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

/// Reverses `ord` if the order is descending.
fn directed(ord: Ordering, ascending: bool) -> Ordering {
    if ascending {
        ord
    } else {
        ord.reverse()
    }
}

/// Compares two nodes with the simplification order.
///
/// See the [module-level documentation](self) for the rules.
pub fn simplification_order(
    tree: &Tree,
    a: NodeId,
    b: NodeId,
    ascending: bool,
    interrupt: &dyn Interrupt,
) -> Ordering {
    if interrupt.should_stop() {
        return Ordering::Equal;
    }

    let (kind_a, kind_b) = (tree.kind(a), tree.kind(b));
    if kind_a.same_type(kind_b) {
        return order_same_type(tree, a, b, ascending, interrupt);
    }

    let a_owns = match (kind_a.is_nary(), kind_b.is_nary()) {
        (true, false) => true,
        (false, true) => false,
        _ => kind_a.rank() > kind_b.rank(),
    };
    if a_owns {
        order_greater_type(tree, a, b, ascending, interrupt)
    } else {
        order_greater_type(tree, b, a, ascending, interrupt).reverse()
    }
}

/// Compares two nodes of the same type.
fn order_same_type(
    tree: &Tree,
    a: NodeId,
    b: NodeId,
    ascending: bool,
    interrupt: &dyn Interrupt,
) -> Ordering {
    match (tree.kind(a), tree.kind(b)) {
        (NodeKind::Number(lhs), NodeKind::Number(rhs)) => directed(lhs.cmp_value(rhs), ascending),
        (NodeKind::Symbol(lhs), NodeKind::Symbol(rhs)) => directed(lhs.cmp(rhs), ascending),
        (NodeKind::Addition, NodeKind::Addition)
            | (NodeKind::Multiplication, NodeKind::Multiplication) => {
            order_nary_same_type(tree, a, b, ascending, interrupt)
        },
        (
            NodeKind::Matrix { rows: lhs_rows, columns: lhs_columns },
            NodeKind::Matrix { rows: rhs_rows, columns: rhs_columns },
        ) => {
            let dims = (lhs_rows, lhs_columns).cmp(&(rhs_rows, rhs_columns));
            if dims != Ordering::Equal {
                return directed(dims, ascending);
            }
            order_children(tree, a, b, ascending, interrupt)
        },
        _ => order_children(tree, a, b, ascending, interrupt),
    }
}

/// Compares the children of two nodes pairwise from the first to the last, then by child count.
fn order_children(
    tree: &Tree,
    a: NodeId,
    b: NodeId,
    ascending: bool,
    interrupt: &dyn Interrupt,
) -> Ordering {
    let (lhs, rhs) = (tree.children(a), tree.children(b));
    for (&lhs_child, &rhs_child) in lhs.iter().zip(rhs) {
        let ord = simplification_order(tree, lhs_child, rhs_child, ascending, interrupt);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    directed(lhs.len().cmp(&rhs.len()), ascending)
}

/// Compares two sums or two products, starting from their last children.
fn order_nary_same_type(
    tree: &Tree,
    a: NodeId,
    b: NodeId,
    ascending: bool,
    interrupt: &dyn Interrupt,
) -> Ordering {
    let (lhs, rhs) = (tree.children(a), tree.children(b));
    for (&lhs_child, &rhs_child) in lhs.iter().rev().zip(rhs.iter().rev()) {
        let ord = simplification_order(tree, lhs_child, rhs_child, ascending, interrupt);
        if ord != Ordering::Equal {
            return ord;
        }
    }

    // the null node is the least node
    match lhs.len().cmp(&rhs.len()) {
        Ordering::Greater => greater_if(ascending),
        Ordering::Less => greater_if(ascending).reverse(),
        Ordering::Equal => Ordering::Equal,
    }
}

/// Compares `a` with a node `b` of a different type, where `a` owns the comparison.
fn order_greater_type(
    tree: &Tree,
    a: NodeId,
    b: NodeId,
    ascending: bool,
    interrupt: &dyn Interrupt,
) -> Ordering {
    match tree.kind(a) {
        NodeKind::Addition | NodeKind::Multiplication => {
            let Some(&last) = tree.children(a).last() else {
                return Ordering::Less;
            };

            // compare `b` to the last term of the hierarchy
            let ord = simplification_order(tree, last, b, ascending, interrupt);
            if ord != Ordering::Equal {
                return ord;
            }
            if tree.num_children(a) > 1 {
                greater_if(ascending)
            } else {
                Ordering::Equal
            }
        },
        NodeKind::Power => {
            let ord = simplification_order(tree, tree.child(a, 0), b, ascending, interrupt);
            if ord != Ordering::Equal {
                return ord;
            }
            greater_if(ascending)
        },
        _ => greater_if(ascending),
    }
}
