//! Operations on n-ary nodes: sums and products.
//!
//! A sum or product stores its operands as an ordered list of children, but since both
//! operations are commutative and associative, that order carries no meaning. This module
//! provides the tools used to put such nodes in a canonical form:
//!
//! - [`Tree::merge_same_type_children_in_place`] flattens nested sums / products;
//! - [`Tree::sort_children_in_place`] sorts the operands with the
//!   [simplification order](crate::order);
//! - [`Tree::squash_unary_hierarchy_in_place`] removes sums / products with a single operand.
//!
//! It also provides the rules that the printer and type inference apply to the operands of an
//! n-ary node: [`Tree::child_needs_user_parentheses`] and [`Tree::all_children_are_real`].

pub mod merge;
pub mod paren;
pub mod real;
pub mod sort;
pub mod squash;

use crate::tree::{NodeId, Tree};

/// Asserts that the given node is a sum or a product.
fn assert_nary(tree: &Tree, id: NodeId) {
    assert!(
        tree.kind(id).is_nary(),
        "expected a sum or product, found {:?} at {}",
        tree.kind(id),
        id,
    );
}
