//! Putting a whole tree in canonical form.
//!
//! [`canonicalize`] applies the n-ary operations of this crate to every sum and product of a
//! tree, from the leaves up: nested sums / products are flattened, their operands are sorted with
//! the [simplification order](crate::order), and sums / products left with a single operand are
//! squashed into that operand.
//!
//! ```
//! use cas_canon::{canonicalize, CanonOptions, Ctxt, Tree};
//!
//! // x + (3 + *(y))
//! let mut tree = Tree::new();
//! let x = tree.symbol("x");
//! let three = tree.integer(3);
//! let y = tree.symbol("y");
//! let product = tree.mul(vec![y]);
//! let inner = tree.add(vec![three, product]);
//! let sum = tree.add(vec![x, inner]);
//!
//! let root = canonicalize(&mut tree, sum, &Ctxt::default(), CanonOptions::default(), &(), &mut ())
//!     .unwrap();
//! assert_eq!(tree.display(root).to_string(), "3 + x + y");
//! ```

use crate::{
    ctxt::Ctxt,
    interrupt::{Interrupt, Interrupted},
    order::simplification_order,
    step::{Step, StepCollector},
    tree::{NodeId, Tree},
};
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options that control the canonical form produced by [`canonicalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CanonOptions {
    /// Whether operands are sorted in ascending simplification order. Defaults to `true`.
    pub ascending: bool,

    /// Whether two matrix operands may be swapped. Defaults to `false`, since matrix
    /// multiplication is not commutative.
    pub can_swap_matrices: bool,
}

impl Default for CanonOptions {
    fn default() -> Self {
        Self {
            ascending: true,
            can_swap_matrices: false,
        }
    }
}

/// Puts every sum and product in the subtree rooted at `root` in canonical form, and returns the
/// root of the result, which differs from `root` if `root` itself was squashed.
///
/// If the interrupt fires, the pass stops and returns [`Err(Interrupted)`](Interrupted). The tree
/// stays consistent, but only part of it may be canonical.
pub fn canonicalize(
    tree: &mut Tree,
    root: NodeId,
    ctxt: &Ctxt,
    options: CanonOptions,
    interrupt: &dyn Interrupt,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<NodeId, Interrupted> {
    // children are always handled before their parents, so each sum / product is flattened with
    // operands that are already canonical
    let nodes = tree.post_order_iter(root).collect::<Vec<_>>();
    let mut new_root = root;

    for id in nodes {
        if interrupt.should_stop() {
            debug!("canonicalization of {} interrupted at {}", root, id);
            return Err(Interrupted);
        }

        if !tree.kind(id).is_nary() {
            continue;
        }

        tree.merge_same_type_children_in_place(id, step_collector);
        tree.sort_children_in_place(
            id,
            |tree, a, b| simplification_order(tree, a, b, options.ascending, interrupt),
            ctxt,
            options.can_swap_matrices,
            interrupt,
            step_collector,
        )?;

        let replacement = tree.squash_unary_hierarchy_in_place(id, step_collector);
        if id == new_root {
            new_root = replacement;
        }
    }

    Ok(new_root)
}
