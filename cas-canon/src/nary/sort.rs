use crate::{
    ctxt::Ctxt,
    interrupt::{Interrupt, Interrupted},
    step::{Step, StepCollector},
    tree::{NodeId, Tree},
};
use log::{debug, trace};
use std::cmp::Ordering;

/// The result of a sort that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sorted {
    /// The number of times two adjacent operands were swapped. Zero if the operands were already
    /// in canonical order.
    pub swaps: usize,
}

impl Tree {
    /// Sorts the operands of a sum or product in place, in ascending order according to `order`.
    ///
    /// This is a bubble sort: it makes at most `n - 1` passes over the operands, swapping each
    /// adjacent pair `(a, b)` for which `order(a, b)` is [`Ordering::Greater`], and stops after the
    /// first pass that swaps nothing. Operand counts are small, so the `O(n^2)` comparisons are
    /// fine.
    ///
    /// Matrix multiplication is not commutative, so two adjacent operands that are both matrices
    /// (see [`Tree::deep_is_matrix`]) are never swapped, unless `can_swap_matrices` is true.
    ///
    /// `order` is usually [`simplification_order`](crate::order::simplification_order) with the
    /// same `interrupt`. The interrupt is checked before each pass and after each comparison; if it
    /// fires, the sort stops, leaving the operands partially sorted, and returns
    /// [`Err(Interrupted)`](Interrupted).
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a sum or a product.
    pub fn sort_children_in_place<F>(
        &mut self,
        id: NodeId,
        order: F,
        ctxt: &Ctxt,
        can_swap_matrices: bool,
        interrupt: &dyn Interrupt,
        step_collector: &mut dyn StepCollector<Step>,
    ) -> Result<Sorted, Interrupted>
    where
        F: Fn(&Tree, NodeId, NodeId) -> Ordering,
    {
        super::assert_nary(self, id);

        let len = self.num_children(id);
        let mut swaps = 0;
        for pass in 0..len.saturating_sub(1).max(1) {
            if interrupt.should_stop() {
                debug!("sort of {} interrupted before pass {} ({} swaps so far)", id, pass, swaps);
                return Err(Interrupted);
            }

            let mut is_sorted = true;
            for j in 0..len.saturating_sub(1) {
                let (cj, cj1) = (self.child(id, j), self.child(id, j + 1));
                let ord = order(&*self, cj, cj1);
                if interrupt.should_stop() {
                    debug!("sort of {} interrupted during pass {} ({} swaps so far)", id, pass, swaps);
                    return Err(Interrupted);
                }

                if ord == Ordering::Greater
                    && (can_swap_matrices || !(self.deep_is_matrix(cj, ctxt) && self.deep_is_matrix(cj1, ctxt)))
                {
                    self.swap_children(id, j, j + 1);
                    step_collector.push(Step::SwapOperands);
                    swaps += 1;
                    is_sorted = false;
                }
            }

            if is_sorted {
                break;
            }
        }

        trace!("sorted {} operands of {} with {} swaps", len, id, swaps);
        Ok(Sorted { swaps })
    }
}

#[cfg(test)]
mod tests {
    use crate::{ctxt::Domain, interrupt::CancelToken, order::simplification_order};
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use super::*;

    fn ascending(tree: &Tree, a: NodeId, b: NodeId) -> Ordering {
        simplification_order(tree, a, b, true, &())
    }

    /// Sorts with the ascending simplification order and no interruption.
    fn sort(tree: &mut Tree, id: NodeId, ctxt: &Ctxt, steps: &mut Vec<Step>) -> Sorted {
        tree.sort_children_in_place(id, ascending, ctxt, false, &(), steps).unwrap()
    }

    #[test]
    fn sorts_sum() {
        // x + 3 + 2  ->  2 + 3 + x
        let ctxt = Ctxt::default();
        let mut tree = Tree::new();
        let x = tree.symbol("x");
        let three = tree.integer(3);
        let two = tree.integer(2);
        let sum = tree.add(vec![x, three, two]);

        let mut steps = Vec::new();
        let sorted = sort(&mut tree, sum, &ctxt, &mut steps);
        assert_eq!(tree.children(sum), &[two, three, x]);
        assert_eq!(sorted.swaps, steps.len());
        assert!(steps.iter().all(|step| *step == Step::SwapOperands));
        assert!(tree.children(sum).iter().all(|&child| tree.parent(child) == Some(sum)));
    }

    #[test]
    fn descending_order() {
        let ctxt = Ctxt::default();
        let mut tree = Tree::new();
        let one = tree.integer(1);
        let y = tree.symbol("y");
        let x = tree.symbol("x");
        let product = tree.mul(vec![one, y, x]);

        tree.sort_children_in_place(
            product,
            |tree, a, b| simplification_order(tree, a, b, false, &()),
            &ctxt,
            false,
            &(),
            &mut (),
        ).unwrap();
        assert_eq!(tree.children(product), &[y, x, one]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let ctxt = Ctxt::default();
        let mut tree = Tree::new();
        let y = tree.symbol("y");
        let two = tree.integer(2);
        let x = tree.symbol("x");
        let x2 = tree.symbol("x");
        let three = tree.integer(3);
        let square = tree.pow(x2, three);
        let sum = tree.add(vec![y, square, two, x]);

        let first = sort(&mut tree, sum, &ctxt, &mut Vec::new());
        assert!(first.swaps > 0);
        let canonical = tree.children(sum).to_vec();
        assert_eq!(canonical, vec![two, x, square, y]);

        let mut steps = Vec::new();
        let second = sort(&mut tree, sum, &ctxt, &mut steps);
        assert_eq!(second.swaps, 0);
        assert!(steps.is_empty());
        assert_eq!(tree.children(sum), canonical.as_slice());
    }

    #[test]
    fn matrices_keep_their_order() {
        // A * B, where the order puts B before A
        let ctxt = Ctxt::default();
        let mut tree = Tree::new();
        let entries = (5..=8).map(|n| tree.integer(n)).collect();
        let a = tree.matrix(2, 2, entries);
        let entries = (1..=4).map(|n| tree.integer(n)).collect();
        let b = tree.matrix(2, 2, entries);
        let product = tree.mul(vec![a, b]);
        assert_eq!(ascending(&tree, a, b), Ordering::Greater);

        let sorted = sort(&mut tree, product, &ctxt, &mut Vec::new());
        assert_eq!(sorted.swaps, 0);
        assert_eq!(tree.children(product), &[a, b]);

        // unless told otherwise
        tree.sort_children_in_place(product, ascending, &ctxt, true, &(), &mut ()).unwrap();
        assert_eq!(tree.children(product), &[b, a]);
    }

    #[test]
    fn matrix_symbols_keep_their_order() {
        let mut ctxt = Ctxt::default();
        ctxt.add_var("A", Domain::Matrix);
        ctxt.add_var("B", Domain::Matrix);
        let mut tree = Tree::new();
        let b = tree.symbol("B");
        let a = tree.symbol("A");
        let two = tree.integer(2);
        let product = tree.mul(vec![b, a, two]);

        // `2` moves in front of the matrices, but `B` and `A` never swap
        sort(&mut tree, product, &ctxt, &mut Vec::new());
        assert_eq!(tree.children(product), &[two, b, a]);
    }

    #[test]
    fn trivial_sums() {
        let ctxt = Ctxt::default();
        let mut tree = Tree::new();
        let empty = tree.add(Vec::new());
        let x = tree.symbol("x");
        let single = tree.add(vec![x]);

        assert_eq!(sort(&mut tree, empty, &ctxt, &mut Vec::new()).swaps, 0);
        assert_eq!(sort(&mut tree, single, &ctxt, &mut Vec::new()).swaps, 0);
    }

    #[test]
    fn cancelled_before_start() {
        // the order returns `Equal` for every pair, which must not be mistaken for "sorted"
        let ctxt = Ctxt::default();
        let mut tree = Tree::new();
        let x = tree.symbol("x");
        let one = tree.integer(1);
        let sum = tree.add(vec![x, one]);

        let token = CancelToken::new();
        token.cancel();
        let result = tree.sort_children_in_place(
            sum,
            |tree, a, b| simplification_order(tree, a, b, true, &token),
            &ctxt,
            false,
            &token,
            &mut (),
        );
        assert_eq!(result, Err(Interrupted));
        assert_eq!(tree.children(sum), &[x, one]);

        // a single operand is no excuse either
        let y = tree.symbol("y");
        let single = tree.add(vec![y]);
        let result = tree.sort_children_in_place(single, ascending, &ctxt, false, &token, &mut ());
        assert_eq!(result, Err(Interrupted));
    }

    #[test]
    fn cancelled_mid_sort() {
        // cancel after the second comparison
        let ctxt = Ctxt::default();
        let mut tree = Tree::new();
        let children = (0..6).rev().map(|n| tree.integer(n)).collect();
        let sum = tree.add(children);

        let token = CancelToken::new();
        let calls = Cell::new(0);
        let result = tree.sort_children_in_place(
            sum,
            |tree, a, b| {
                calls.set(calls.get() + 1);
                if calls.get() == 2 {
                    token.cancel();
                }
                simplification_order(tree, a, b, true, &token)
            },
            &ctxt,
            false,
            &token,
            &mut (),
        );

        assert_eq!(result, Err(Interrupted));
        assert_eq!(calls.get(), 2);
        assert_eq!(tree.num_children(sum), 6);
        assert!(tree.children(sum).iter().all(|&child| tree.parent(child) == Some(sum)));
    }

    #[test]
    #[should_panic]
    fn requires_nary() {
        let ctxt = Ctxt::default();
        let mut tree = Tree::new();
        let x = tree.symbol("x");
        let neg = tree.opposite(x);
        let _ = tree.sort_children_in_place(neg, ascending, &ctxt, false, &(), &mut ());
    }
}
