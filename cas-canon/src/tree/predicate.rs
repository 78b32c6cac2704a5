//! Per-kind predicates that depend on the variable bindings of a [`Ctxt`].

use crate::{ctxt::{Ctxt, Domain}, nary::real::RealStatus};
use super::{kind::NodeKind, NodeId, Tree};

impl Tree {
    /// Returns true if the node is provably real-valued in the given context.
    pub fn is_real(&self, id: NodeId, ctxt: &Ctxt) -> bool {
        match self.kind(id) {
            NodeKind::Number(_) => true,
            NodeKind::Symbol(name) => ctxt.domain_of(name) == Domain::Real,
            NodeKind::Addition | NodeKind::Multiplication => {
                self.all_children_are_real(self.children(id), ctxt) == RealStatus::DefinitelyReal
            },
            NodeKind::Power => {
                let (base, exp) = (self.child(id, 0), self.child(id, 1));
                if !self.is_real(base, ctxt) || !self.is_real(exp, ctxt) {
                    return false;
                }

                // a real base raised to a real exponent is only guaranteed to stay real if the
                // exponent is an integer, or if the base is a non-negative number
                let integer_exp = self.kind(exp).as_number().is_some_and(|n| n.is_integer());
                let non_negative_base = self.kind(base).as_number().is_some_and(|n| !n.is_negative());
                integer_exp || non_negative_base
            },
            NodeKind::Opposite | NodeKind::Conjugate => self.is_real(self.child(id, 0), ctxt),
            NodeKind::ComplexCartesian => self.kind(self.child(id, 1))
                .as_number()
                .is_some_and(|n| n.is_zero()),
            NodeKind::Matrix { .. } => false,
        }
    }

    /// Returns true if the node is a matrix, or an expression that evaluates to one, in the given
    /// context.
    pub fn deep_is_matrix(&self, id: NodeId, ctxt: &Ctxt) -> bool {
        match self.kind(id) {
            NodeKind::Matrix { .. } => true,
            NodeKind::Symbol(name) => ctxt.domain_of(name) == Domain::Matrix,
            NodeKind::Number(_) | NodeKind::ComplexCartesian => false,
            _ => self.children(id)
                .iter()
                .any(|&child| self.deep_is_matrix(child, ctxt)),
        }
    }
}
