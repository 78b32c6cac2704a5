use rug::{Float, Integer};
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A numeric literal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Number {
    /// An integer, such as `2` or `-144`.
    Integer(Integer),

    /// A floating-point number, such as `3.14` or `-0.5`.
    Float(Float),
}

/// [`Eq`] is implemented manually to allow comparing [`Number::Float`]s. This crate **must
/// never** store non-normal [`Float`]s (such as `NaN` or `Infinity`) in a tree.
impl Eq for Number {}

impl Number {
    /// Returns true if the number is strictly less than zero.
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Integer(int) => int.cmp0() == Ordering::Less,
            Self::Float(float) => float.is_sign_negative() && !float.is_zero(),
        }
    }

    /// Returns true if the number is zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(int) => int.cmp0() == Ordering::Equal,
            Self::Float(float) => float.is_zero(),
        }
    }

    /// Returns true if the number has no fractional part.
    pub fn is_integer(&self) -> bool {
        match self {
            Self::Integer(_) => true,
            Self::Float(float) => float.is_integer(),
        }
    }

    /// Compares two numbers by value. Integers and floats compare with each other.
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        let ord = match (self, other) {
            (Self::Integer(lhs), Self::Integer(rhs)) => Some(lhs.cmp(rhs)),
            (Self::Integer(lhs), Self::Float(rhs)) => lhs.partial_cmp(rhs),
            (Self::Float(lhs), Self::Integer(rhs)) => lhs.partial_cmp(rhs),
            (Self::Float(lhs), Self::Float(rhs)) => lhs.partial_cmp(rhs),
        };

        // only reachable with NaN, which a tree never holds
        ord.unwrap_or(Ordering::Equal)
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(int) => write!(f, "{}", int),
            Self::Float(float) => write!(f, "{}", float.to_f64()),
        }
    }
}

/// The type of a node in a [`Tree`](super::Tree).
///
/// The declaration order of the variants is the **type rank** used by
/// [`simplification_order`](crate::order::simplification_order) to order nodes of different types:
/// numbers come first, matrices last.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeKind {
    /// A numeric literal. Has no children.
    Number(Number),

    /// A variable, such as `x`. Has no children.
    Symbol(String),

    /// The product of all children.
    Multiplication,

    /// The first child raised to the power of the second child.
    Power,

    /// The sum of all children.
    Addition,

    /// The negation of the single child, written `-x`.
    Opposite,

    /// The complex conjugate of the single child.
    Conjugate,

    /// A complex number `a + b*i`, where `a` is the first child and `b` the second.
    ComplexCartesian,

    /// A matrix whose entries are the children, in row-major order.
    Matrix {
        rows: usize,
        columns: usize,
    },
}

impl NodeKind {
    /// Returns the type rank of this kind.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Number(_) => 0,
            Self::Symbol(_) => 1,
            Self::Multiplication => 2,
            Self::Power => 3,
            Self::Addition => 4,
            Self::Opposite => 5,
            Self::Conjugate => 6,
            Self::ComplexCartesian => 7,
            Self::Matrix { .. } => 8,
        }
    }

    /// Returns true if this kind is a commutative and associative n-ary operator (a sum or a
    /// product).
    pub fn is_nary(&self) -> bool {
        matches!(self, Self::Addition | Self::Multiplication)
    }

    /// Returns true if both kinds are the same type of node, ignoring their payload.
    pub fn same_type(&self, other: &Self) -> bool {
        self.rank() == other.rank()
    }

    /// If this is a [`NodeKind::Number`], returns a reference to the contained number.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number(num) => Some(num),
            _ => None,
        }
    }

    /// If this is a [`NodeKind::Symbol`], returns the name of the symbol.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol(name) => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::primitive::{float, int};
    use super::*;

    #[test]
    fn number_sign() {
        assert!(Number::Integer(int(-2)).is_negative());
        assert!(!Number::Integer(int(0)).is_negative());
        assert!(!Number::Float(float(-0.0)).is_negative());
        assert!(Number::Float(float(-0.25)).is_negative());
    }

    #[test]
    fn mixed_value_order() {
        let two = Number::Integer(int(2));
        let two_and_a_half = Number::Float(float(2.5));
        assert_eq!(two.cmp_value(&two_and_a_half), Ordering::Less);
        assert_eq!(two_and_a_half.cmp_value(&two), Ordering::Greater);
        assert_eq!(two.cmp_value(&Number::Float(float(2))), Ordering::Equal);
    }

    #[test]
    fn type_rank() {
        assert!(NodeKind::Number(Number::Integer(int(1))).rank() < NodeKind::Symbol("x".into()).rank());
        assert!(NodeKind::Multiplication.rank() < NodeKind::Addition.rank());
        assert!(NodeKind::Matrix { rows: 1, columns: 1 }.same_type(&NodeKind::Matrix { rows: 2, columns: 3 }));
        assert!(NodeKind::Addition.is_nary());
        assert!(!NodeKind::Power.is_nary());
    }
}
