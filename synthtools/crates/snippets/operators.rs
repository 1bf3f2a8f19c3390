use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
};

// ────────────────────────────────────────────────────────────────────────────────
// Operator definition
// ────────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    LessOrEqual,
    GreaterOrEqual,
    Equal,
    NotEqual,
    And,
    Or,
}

// ────────────────────────────────────────────────────────────────────────────────
// Operator implementation
// ────────────────────────────────────────────────────────────────────────────────

impl Operator {
    pub const fn is_comparison(&self) -> bool {
        matches!(self, Self::LessOrEqual | Self::GreaterOrEqual | Self::Equal | Self::NotEqual)
    }

    pub const fn is_logical(&self) -> bool {
        matches!(self, Self::And | Self::Or)
    }

    /// Only equality makes sense between booleans.
    pub const fn is_equality(&self) -> bool {
        matches!(self, Self::Equal | Self::NotEqual)
    }

    /// Whether `lhs <op> rhs` holds given how `lhs` orders against `rhs`.
    /// Logical operators never hold on an ordering.
    pub const fn holds(&self, ordering: Ordering) -> bool {
        match self {
            Self::LessOrEqual => !matches!(ordering, Ordering::Greater),
            Self::GreaterOrEqual => !matches!(ordering, Ordering::Less),
            Self::Equal => matches!(ordering, Ordering::Equal),
            Self::NotEqual => !matches!(ordering, Ordering::Equal),
            Self::And | Self::Or => false,
        }
    }

    /// Applies a logical operator. Comparisons yield `false`.
    pub const fn apply(&self, lhs: bool, rhs: bool) -> bool {
        match self {
            Self::And => lhs && rhs,
            Self::Or => lhs || rhs,
            _ => false,
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let op = match self {
            Self::LessOrEqual => "<=",
            Self::GreaterOrEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::And => "&&",
            Self::Or => "||",
        };
        write!(f, "{}", op)
    }
}
