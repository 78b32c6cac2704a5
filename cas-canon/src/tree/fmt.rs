use std::fmt::{Display, Formatter, Result};
use super::{kind::NodeKind, NodeId, Tree};

/// Returns the binding strength of a node when printed. Nodes with lower precedence are wrapped
/// in parentheses when printed as the operand of a node with higher precedence.
fn precedence(tree: &Tree, id: NodeId) -> u8 {
    match tree.kind(id) {
        NodeKind::Addition => 1,
        NodeKind::Multiplication => 2,
        NodeKind::Opposite => 3,
        NodeKind::Number(num) if num.is_negative() => 3,
        NodeKind::Power => 4,
        _ => 5,
    }
}

/// Helper struct to print a node of a [`Tree`] and its descendants.
///
/// This type is created by [`Tree::display`].
#[derive(Debug, Clone, Copy)]
pub struct TreeDisplay<'a> {
    tree: &'a Tree,
    id: NodeId,
}

impl<'a> TreeDisplay<'a> {
    /// Returns a display helper for another node of the same tree.
    fn of(&self, id: NodeId) -> TreeDisplay<'a> {
        TreeDisplay { tree: self.tree, id }
    }

    /// Prints the given child, wrapping it in parentheses if `parens` is true.
    fn fmt_child(&self, f: &mut Formatter<'_>, child: NodeId, parens: bool) -> Result {
        if parens {
            write!(f, "({})", self.of(child))
        } else {
            write!(f, "{}", self.of(child))
        }
    }

    /// Prints the operands of a sum or product, separated by `op`.
    fn fmt_nary(&self, f: &mut Formatter<'_>, op: &str, empty: &str) -> Result {
        let tree = self.tree;
        let own_precedence = precedence(tree, self.id);
        let children = tree.children(self.id);
        if children.is_empty() {
            return write!(f, "{}", empty);
        }

        for (i, &child) in children.iter().enumerate() {
            if i > 0 {
                write!(f, " {} ", op)?;
            }
            let parens = tree.child_needs_user_parentheses(self.id, child)
                || precedence(tree, child) < own_precedence;
            self.fmt_child(f, child, parens)?;
        }
        Ok(())
    }
}

impl Display for TreeDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let tree = self.tree;
        match tree.kind(self.id) {
            NodeKind::Number(num) => write!(f, "{}", num),
            NodeKind::Symbol(name) => write!(f, "{}", name),
            NodeKind::Addition => self.fmt_nary(f, "+", "0"),
            NodeKind::Multiplication => self.fmt_nary(f, "*", "1"),
            NodeKind::Power => {
                let (base, exp) = (tree.child(self.id, 0), tree.child(self.id, 1));
                self.fmt_child(f, base, precedence(tree, base) <= 4)?;
                write!(f, "^")?;
                self.fmt_child(f, exp, precedence(tree, exp) <= 4)
            },
            NodeKind::Opposite => {
                let operand = tree.child(self.id, 0);
                write!(f, "-")?;
                self.fmt_child(f, operand, precedence(tree, operand) <= 3)
            },
            NodeKind::Conjugate => write!(f, "conj({})", self.of(tree.child(self.id, 0))),
            NodeKind::ComplexCartesian => write!(
                f,
                "complex({}, {})",
                self.of(tree.child(self.id, 0)),
                self.of(tree.child(self.id, 1)),
            ),
            NodeKind::Matrix { columns, .. } => {
                write!(f, "[")?;
                for (row_idx, row) in tree.children(self.id).chunks((*columns).max(1)).enumerate() {
                    if row_idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "[")?;
                    for (col_idx, &entry) in row.iter().enumerate() {
                        if col_idx > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", self.of(entry))?;
                    }
                    write!(f, "]")?;
                }
                write!(f, "]")
            },
        }
    }
}

impl Tree {
    /// Returns a value that prints the subtree rooted at `id` with [`Display`].
    ///
    /// Operands of sums and products are wrapped in parentheses when
    /// [`Tree::child_needs_user_parentheses`] says so, or when they bind less tightly than the
    /// operator.
    pub fn display(&self, id: NodeId) -> TreeDisplay<'_> {
        TreeDisplay { tree: self, id }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn fmt_sum_with_negative_operands() {
        // 3 + (-2) + x + (-4)
        let mut tree = Tree::new();
        let three = tree.integer(3);
        let two = tree.integer(2);
        let neg = tree.opposite(two);
        let x = tree.symbol("x");
        let minus_four = tree.integer(-4);
        let sum = tree.add(vec![three, neg, x, minus_four]);

        assert_eq!(tree.display(sum).to_string(), "3 + (-2) + x + (-4)");
    }

    #[test]
    fn fmt_first_operand() {
        // -2 * x + conj(-y)
        let mut tree = Tree::new();
        let minus_two = tree.integer(-2);
        let x = tree.symbol("x");
        let product = tree.mul(vec![minus_two, x]);
        let y = tree.symbol("y");
        let neg = tree.opposite(y);
        let conj = tree.conjugate(neg);
        let sum = tree.add(vec![product, conj]);

        assert_eq!(tree.display(sum).to_string(), "-2 * x + (conj(-y))");
    }

    #[test]
    fn fmt_precedence() {
        // (x + 1) * -(y * z) ^ 2
        let mut tree = Tree::new();
        let x = tree.symbol("x");
        let one = tree.integer(1);
        let sum = tree.add(vec![x, one]);
        let y = tree.symbol("y");
        let z = tree.symbol("z");
        let inner = tree.mul(vec![y, z]);
        let neg = tree.opposite(inner);
        let two = tree.integer(2);
        let power = tree.pow(neg, two);
        let product = tree.mul(vec![sum, power]);

        assert_eq!(tree.display(product).to_string(), "(x + 1) * (-(y * z))^2");
    }

    #[test]
    fn fmt_leaves() {
        let mut tree = Tree::new();
        let entries = (1..=4).map(|n| tree.integer(n)).collect();
        let m = tree.matrix(2, 2, entries);
        assert_eq!(tree.display(m).to_string(), "[[1, 2], [3, 4]]");

        let half = tree.float(0.5);
        let minus_one = tree.integer(-1);
        let complex = tree.complex_cartesian(half, minus_one);
        assert_eq!(tree.display(complex).to_string(), "complex(0.5, -1)");

        let empty = tree.add(Vec::new());
        assert_eq!(tree.display(empty).to_string(), "0");
    }
}
