use crate::{step::{Step, StepCollector}, tree::{NodeId, Tree}};

impl Tree {
    /// Trivially collapses a sum or product with exactly one operand into that operand.
    ///
    /// Some operations may leave an [`Addition`] or [`Multiplication`] with a single child, such as
    /// removing the zero terms of `0 + x`. In that case, the child takes the place of the node in
    /// its parent (or becomes a root), the node is detached, and the child is returned. Otherwise,
    /// the node is returned unchanged.
    ///
    /// [`Addition`]: crate::tree::kind::NodeKind::Addition
    /// [`Multiplication`]: crate::tree::kind::NodeKind::Multiplication
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a sum or a product.
    pub fn squash_unary_hierarchy_in_place(
        &mut self,
        id: NodeId,
        step_collector: &mut dyn StepCollector<Step>,
    ) -> NodeId {
        super::assert_nary(self, id);

        if let &[child] = self.children(id) {
            self.replace_with(id, child);
            step_collector.push(Step::SquashUnaryHierarchy);
            child
        } else {
            id
        }
    }
}
