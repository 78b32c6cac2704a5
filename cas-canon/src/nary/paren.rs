use crate::tree::{kind::NodeKind, NodeId, Tree};

impl Tree {
    /// Returns true if `child`, printed as an operand of the sum or product `nary`, must be
    /// wrapped in parentheses.
    ///
    /// Operands with a leading minus sign, such as `-2` or `-x`, need parentheses unless they are
    /// the first operand: `3 + (-2)`, but `-2 + 3`. `child` does not have to be a direct child of
    /// `nary`; it is considered to be the first operand if it is the first child of `nary` or a
    /// descendant of it, as in `conj(-2) + 3`.
    ///
    /// For a conjugate, the rule applies to its argument instead.
    ///
    /// # Panics
    ///
    /// Panics if `nary` is not a sum or a product.
    pub fn child_needs_user_parentheses(&self, nary: NodeId, child: NodeId) -> bool {
        super::assert_nary(self, nary);

        let is_first_operand = self.children(nary)
            .first()
            .is_some_and(|&first| self.has_ancestor(child, first, true));
        let has_leading_sign = match self.kind(child) {
            NodeKind::Number(num) => num.is_negative(),
            NodeKind::Opposite => true,
            _ => false,
        };
        if has_leading_sign && !is_first_operand {
            return true;
        }

        if matches!(self.kind(child), NodeKind::Conjugate) {
            return self.child_needs_user_parentheses(nary, self.child(child, 0));
        }

        false
    }
}
