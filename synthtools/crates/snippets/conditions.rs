//! Conditions whose truth value is fixed when they are built.
//!
//! Every leaf compares one variable against a literal derived from the variable's stored value,
//! so the leaf's truth is known without running anything. Inner nodes only join sub-conditions
//! through templates whose boolean algebra yields the requested value:
//!
//! | Level | Shape                               | Example (`true`)                          |
//! |-------|-------------------------------------|-------------------------------------------|
//! | 0     | `a <op> k`                          | `buffer <= 6`                             |
//! | 1     | `leaf <op> leaf`                    | `y <= 5 \|\| output <= 4.54`              |
//! | 2     | `(level 1) <op> leaf`, either order | `(config == true && x != true) \|\| z >= 3.13` |
//! | 3     | `(level 1) <op> (level 1)`          | `(a >= 2 && b >= 7) \|\| (c <= 2 \|\| d <= 2)` |

use crate::{
    snippets::{
        error::SynthError,
        operators::Operator,
        variables::{Value, Variable},
    },
    utils::{round_cents, RandomChoice},
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use tracing::trace;

// ────────────────────────────────────────────────────────────────────────────────
// Condition definitions
// ────────────────────────────────────────────────────────────────────────────────

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Complexity {
    /// A single comparison
    #[default]
    Leaf,
    /// Two comparisons
    Pair,
    /// A parenthesised pair next to a comparison
    Mixed,
    /// Two parenthesised pairs
    Nested,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Comparison { name: String, op: Operator, value: Value },
    Binary { op: Operator, lhs: Box<Expr>, rhs: Box<Expr> },
    Group(Box<Expr>),
}

/// An expression together with the truth value it was built to have.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub expr: Expr,
    pub expected: bool,
    pub complexity: Complexity,
}

/// `(operator, truth of the first operand, truth of the second operand)`
type Junction = (Operator, bool, bool);

const TAUTOLOGIES: [Junction; 4] = [
    (Operator::And, true, true),
    (Operator::Or, true, true),
    (Operator::Or, true, false),
    (Operator::Or, false, true),
];

const CONTRADICTIONS: [Junction; 4] = [
    (Operator::And, false, false),
    (Operator::And, false, true),
    (Operator::And, true, false),
    (Operator::Or, false, false),
];

// ────────────────────────────────────────────────────────────────────────────────
// Condition implementations
// ────────────────────────────────────────────────────────────────────────────────

impl Complexity {
    pub const ALL: [Self; 4] = [Self::Leaf, Self::Pair, Self::Mixed, Self::Nested];

    pub const fn level(&self) -> u8 {
        match self {
            Self::Leaf => 0,
            Self::Pair => 1,
            Self::Mixed => 2,
            Self::Nested => 3,
        }
    }
}

impl TryFrom<u8> for Complexity {
    type Error = SynthError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(level as usize).copied().ok_or(SynthError::InvalidComplexity(level))
    }
}

impl Expr {
    /// Evaluates the expression against the stored values of `scope`.
    pub fn evaluate(&self, scope: &[Variable]) -> Result<bool, SynthError> {
        match self {
            Expr::Comparison { name, op, value } => {
                let var = scope
                    .iter()
                    .find(|v| &v.name == name)
                    .ok_or_else(|| SynthError::UnboundVariable(name.clone()))?;

                var.value.compare(*op, value).ok_or_else(|| SynthError::TypeMismatch(name.clone()))
            }
            Expr::Binary { op, lhs, rhs } => Ok(op.apply(lhs.evaluate(scope)?, rhs.evaluate(scope)?)),
            Expr::Group(inner) => inner.evaluate(scope),
        }
    }

    /// Number of comparisons in the expression.
    pub fn leaf_count(&self) -> usize {
        match self {
            Expr::Comparison { .. } => 1,
            Expr::Binary { lhs, rhs, .. } => lhs.leaf_count() + rhs.leaf_count(),
            Expr::Group(inner) => inner.leaf_count(),
        }
    }

    fn binary(op: Operator, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary { op, lhs: Box::new(lhs), rhs: Box::new(rhs) }
    }

    fn group(inner: Expr) -> Self {
        Expr::Group(Box::new(inner))
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Comparison { name, op, value } => write!(f, "{} {} {}", name, op, value),
            Expr::Binary { op, lhs, rhs } => write!(f, "{} {} {}", lhs, op, rhs),
            Expr::Group(inner) => write!(f, "({})", inner),
        }
    }
}

impl Condition {
    /// Builds a condition over `variables` that evaluates to `expected`.
    pub fn random(
        random: &mut impl Rng,
        variables: &[Variable],
        complexity: Complexity,
        expected: bool,
    ) -> Result<Self, SynthError> {
        if variables.is_empty() {
            return Err(SynthError::NoVariables);
        }

        let expr = synthesize(random, variables, complexity, expected);
        trace!(level = complexity.level(), expected, %expr, "synthesized condition");

        Ok(Self { expr, expected, complexity })
    }

    pub fn evaluate(&self, scope: &[Variable]) -> Result<bool, SynthError> {
        self.expr.evaluate(scope)
    }

    /// Whether the condition still evaluates to the value it was built for.
    pub fn holds(&self, scope: &[Variable]) -> Result<bool, SynthError> {
        Ok(self.evaluate(scope)? == self.expected)
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expr)
    }
}

/// A condition that always evaluates to `true`. `complexity` must lie in `0..=3`.
pub fn true_condition(
    random: &mut impl Rng,
    variables: &[Variable],
    complexity: u8,
) -> Result<Condition, SynthError> {
    Condition::random(random, variables, Complexity::try_from(complexity)?, true)
}

/// A condition that always evaluates to `false`. `complexity` must lie in `0..=3`.
pub fn false_condition(
    random: &mut impl Rng,
    variables: &[Variable],
    complexity: u8,
) -> Result<Condition, SynthError> {
    Condition::random(random, variables, Complexity::try_from(complexity)?, false)
}

// ────────────────────────────────────────────────────────────────────────────────
// Grammar
// ────────────────────────────────────────────────────────────────────────────────

fn junction(random: &mut impl Rng, expected: bool) -> Junction {
    *random.choice(if expected { &TAUTOLOGIES } else { &CONTRADICTIONS })
}

fn synthesize(
    random: &mut impl Rng,
    variables: &[Variable],
    complexity: Complexity,
    expected: bool,
) -> Expr {
    match complexity {
        Complexity::Leaf => {
            let var = random.choice(variables);
            leaf(random, var, expected)
        }
        Complexity::Pair => {
            let (op, lhs, rhs) = junction(random, expected);
            let lhs = synthesize(random, variables, Complexity::Leaf, lhs);
            let rhs = synthesize(random, variables, Complexity::Leaf, rhs);
            Expr::binary(op, lhs, rhs)
        }
        Complexity::Mixed => {
            let (op, pair, single) = junction(random, expected);
            let pair = Expr::group(synthesize(random, variables, Complexity::Pair, pair));
            let single = synthesize(random, variables, Complexity::Leaf, single);

            // Both operators are commutative, so either order keeps the truth value
            if random.random_bool(0.5) {
                Expr::binary(op, pair, single)
            } else {
                Expr::binary(op, single, pair)
            }
        }
        Complexity::Nested => {
            let (op, lhs, rhs) = junction(random, expected);
            let lhs = Expr::group(synthesize(random, variables, Complexity::Pair, lhs));
            let rhs = Expr::group(synthesize(random, variables, Complexity::Pair, rhs));
            Expr::binary(op, lhs, rhs)
        }
    }
}

/// A single comparison of `var` whose truth is decided by the variable's stored value.
fn leaf(random: &mut impl Rng, var: &Variable, expected: bool) -> Expr {
    let name = var.name.clone();

    let (op, value) = match var.value {
        Value::Int(v) => {
            let (op, bound) = integer_bound(random, v, expected);
            (op, Value::Int(bound))
        }
        Value::Long(v) => {
            let (op, bound) = integer_bound(random, v, expected);
            (op, Value::Long(bound))
        }
        Value::Double(v) => {
            let (op, bound) = double_bound(random, v, expected);
            (op, Value::Double(bound))
        }
        // `flag == flag` or `flag != !flag`, flipped when the leaf must be false
        Value::Boolean(v) => {
            if random.random_bool(0.5) {
                (Operator::Equal, Value::Boolean(v == expected))
            } else {
                (Operator::NotEqual, Value::Boolean(v != expected))
            }
        }
    };

    Expr::Comparison { name, op, value }
}

/// Offsets the bound by at least one, so it never equals the stored value.
fn integer_bound(random: &mut impl Rng, value: i64, expected: bool) -> (Operator, i64) {
    let delta = random.random_range(1..=5);

    if value <= 5 {
        (Operator::LessOrEqual, if expected { value + delta } else { value - delta })
    } else {
        (Operator::GreaterOrEqual, if expected { value - delta } else { value + delta })
    }
}

/// Same as [`integer_bound`]. A delta of at least one survives rounding to two decimals.
fn double_bound(random: &mut impl Rng, value: f64, expected: bool) -> (Operator, f64) {
    let delta = random.random_range(1.0..5.0);

    if value <= 5.0 {
        let bound = if expected { value + delta } else { value - delta };
        (Operator::LessOrEqual, round_cents(bound))
    } else {
        let bound = if expected { value - delta } else { value + delta };
        (Operator::GreaterOrEqual, round_cents(bound))
    }
}
