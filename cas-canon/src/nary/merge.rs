use crate::{step::{Step, StepCollector}, tree::{NodeId, Tree}};

impl Tree {
    /// Flattens nested sums (or products) into `id`.
    ///
    /// Every child of `id` with the same type as `id` is replaced, in place, by its own children.
    /// For example, `a + (b + c) + d` becomes `a + b + c + d`. This is done iteratively, so
    /// deeper nesting is flattened too. The merged children are left detached and empty.
    ///
    /// Returns the number of children that were merged.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a sum or a product.
    pub fn merge_same_type_children_in_place(
        &mut self,
        id: NodeId,
        step_collector: &mut dyn StepCollector<Step>,
    ) -> usize {
        super::assert_nary(self, id);

        let mut merged = 0;
        let mut i = 0;
        while i < self.num_children(id) {
            let child = self.child(id, i);
            if !self.kind(child).same_type(self.kind(id)) {
                i += 1;
                continue;
            }

            // `i` is not advanced, so that the first grandchild is checked next
            self.replace_with_children(child);
            step_collector.push(Step::MergeSameTypeChildren);
            merged += 1;
        }
        merged
    }
}
