use crate::{ctxt::Ctxt, tree::{kind::NodeKind, NodeId, Tree}};

/// Whether a group of operands is known to be real-valued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RealStatus {
    /// Every operand is provably real.
    DefinitelyReal,

    /// Every operand is real, except for complex numbers whose imaginary part may happen to be
    /// zero. For example, the complex number `1 + 0i` is real, but its representation is not.
    PossiblyNotReal,

    /// At least one operand is not provably real.
    DefinitelyNotReal,
}

impl RealStatus {
    /// Demotes [`RealStatus::DefinitelyReal`] to [`RealStatus::PossiblyNotReal`]. Other statuses
    /// are unchanged.
    pub fn demote(self) -> Self {
        match self {
            Self::DefinitelyReal => Self::PossiblyNotReal,
            status => status,
        }
    }

    /// Returns the status as `1`, `0`, or `-1`.
    pub fn as_i8(self) -> i8 {
        match self {
            Self::DefinitelyReal => 1,
            Self::PossiblyNotReal => 0,
            Self::DefinitelyNotReal => -1,
        }
    }
}

impl Tree {
    /// Classifies whether the given operands are all real-valued.
    ///
    /// The operands are scanned in order. A [`NodeKind::ComplexCartesian`] operand demotes the
    /// result to [`RealStatus::PossiblyNotReal`]. Any other operand that is not real in the given
    /// context makes the result [`RealStatus::DefinitelyNotReal`] immediately, and the remaining
    /// operands are not looked at.
    pub fn all_children_are_real(&self, children: &[NodeId], ctxt: &Ctxt) -> RealStatus {
        let mut status = RealStatus::DefinitelyReal;
        for &child in children {
            if matches!(self.kind(child), NodeKind::ComplexCartesian) {
                status = status.demote();
            } else if !self.is_real(child, ctxt) {
                return RealStatus::DefinitelyNotReal;
            }
        }
        status
    }
}
