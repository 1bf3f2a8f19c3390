//! Typed, named and valued slots that declarations and conditions are built from.

use crate::{
    snippets::{error::SynthError, operators::Operator},
    utils::{round_cents, RandomChoice},
};
use rand::{seq::IndexedRandom, Rng};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    fmt::{Display, Formatter},
};
use strum::{Display as StrumDisplay, EnumIter};

/// Identifiers variables are named after.
pub const NAMES: [&str; 49] = [
    "x", "y", "z", "var", "cpt", "flag", "temp", "data", "result", "value", "input", "output",
    "index", "count", "total", "sum", "avg", "num", "max", "min", "length", "size", "height",
    "width", "depth", "name", "id", "key", "item", "node", "list", "array", "map", "dict", "buffer",
    "record", "line", "text", "path", "file", "error", "status", "response", "user", "message",
    "token", "config", "option", "mode",
];

// ────────────────────────────────────────────────────────────────────────────────
// Type definitions
// ────────────────────────────────────────────────────────────────────────────────

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, StrumDisplay, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VarType {
    Int,
    Long,
    Boolean,
    Double,
}

/// A literal tagged with the type it belongs to, so a value can never disagree with its type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i64),
    Long(i64),
    Boolean(bool),
    Double(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub value: Value,
}

// ────────────────────────────────────────────────────────────────────────────────
// Type implementations
// ────────────────────────────────────────────────────────────────────────────────

impl VarType {
    pub const ALL: [Self; 4] = [Self::Int, Self::Long, Self::Boolean, Self::Double];

    pub fn random(random: &mut impl Rng) -> Self {
        *random.choice(&Self::ALL)
    }

    /// Independent random types, e.g. for a parameter list.
    pub fn random_many(random: &mut impl Rng, count: usize) -> Vec<Self> {
        (0..count).map(|_| Self::random(random)).collect()
    }

    /// Integers and longs in `[1, 10]`, doubles in `[1.0, 10.0]` with two decimals.
    pub fn random_value(&self, random: &mut impl Rng) -> Value {
        match self {
            Self::Int => Value::Int(random.random_range(1..=10)),
            Self::Long => Value::Long(random.random_range(1..=10)),
            Self::Boolean => Value::Boolean(random.random_bool(0.5)),
            Self::Double => Value::double(random.random_range(1.0..=10.0)),
        }
    }
}

impl Value {
    /// Builds a double rounded to the rendered precision.
    pub fn double(value: f64) -> Self {
        Self::Double(round_cents(value))
    }

    pub fn ty(&self) -> VarType {
        match self {
            Self::Int(_) => VarType::Int,
            Self::Long(_) => VarType::Long,
            Self::Boolean(_) => VarType::Boolean,
            Self::Double(_) => VarType::Double,
        }
    }

    /// Evaluates `self <op> rhs`. Returns `None` when both sides are not of the same kind or
    /// when booleans are ordered.
    pub fn compare(&self, op: Operator, rhs: &Value) -> Option<bool> {
        if !op.is_comparison() {
            return None;
        }

        let ordering = match (self, rhs) {
            (Self::Int(l) | Self::Long(l), Self::Int(r) | Self::Long(r)) => l.cmp(r),
            (Self::Double(l), Self::Double(r)) => l.partial_cmp(r)?,
            (Self::Boolean(l), Self::Boolean(r)) if op.is_equality() => l.cmp(r),
            _ => return None,
        };

        Some(op.holds(ordering))
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(v) | Self::Long(v) => write!(f, "{}", v),
            Self::Boolean(b) => write!(f, "{}", b),
            // Debug keeps the trailing `.0` on whole doubles
            Self::Double(d) => write!(f, "{:?}", round_cents(*d)),
        }
    }
}

impl Variable {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self { name: name.into(), value }
    }

    pub fn ty(&self) -> VarType {
        self.value.ty()
    }

    /// A variable with a random name, the given type (or a random one) and a random value.
    pub fn random(random: &mut impl Rng, ty: Option<VarType>) -> Self {
        let name = random_name(random);
        let ty = ty.unwrap_or_else(|| VarType::random(random));
        Self { name: name.to_string(), value: ty.random_value(random) }
    }

    /// `<type> <name> = <literal>;`
    pub fn declaration(&self) -> String {
        format!("{} {} = {};", self.ty(), self.name, self.value)
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} = {})", self.name, self.ty(), self.value)
    }
}

// ────────────────────────────────────────────────────────────────────────────────
// Sets of variables
// ────────────────────────────────────────────────────────────────────────────────

#[inline(always)]
pub fn random_name(random: &mut impl Rng) -> &'static str {
    *random.choice(&NAMES)
}

/// `count` random variables with pairwise distinct names.
pub fn distinct_set(random: &mut impl Rng, count: usize) -> Result<Vec<Variable>, SynthError> {
    if count > NAMES.len() {
        return Err(SynthError::NamePoolExhausted { requested: count, available: NAMES.len() });
    }

    let mut variables: Vec<Variable> = Vec::with_capacity(count);
    while variables.len() < count {
        let var = Variable::random(random, None);
        if !variables.iter().any(|v| v.name == var.name) {
            variables.push(var);
        }
    }

    Ok(variables)
}

/// For every requested type, in order, picks one variable of that type whose name was not picked
/// yet. Types without an eligible variable are skipped, so the result may be shorter than `types`.
pub fn select_by_type(
    random: &mut impl Rng,
    types: &[VarType],
    pool: &[Variable],
) -> Vec<Variable> {
    let mut chosen = Vec::with_capacity(types.len());
    let mut used: HashSet<&str> = HashSet::new();

    for ty in types {
        let eligible: Vec<&Variable> = pool
            .iter()
            .filter(|v| v.ty() == *ty && !used.contains(v.name.as_str()))
            .collect();

        if let Some(&var) = eligible.choose(random) {
            used.insert(var.name.as_str());
            chosen.push(var.clone());
        }
    }

    chosen
}

/// Gives every variable a fresh name that none of the set currently uses, nor any other renamed
/// variable.
pub fn rename(random: &mut impl Rng, variables: &mut [Variable]) -> Result<(), SynthError> {
    let mut used: HashSet<String> = variables.iter().map(|v| v.name.clone()).collect();

    let available = NAMES.iter().filter(|n| !used.contains(**n)).count();
    if variables.len() > available {
        return Err(SynthError::NamePoolExhausted { requested: variables.len(), available });
    }

    for var in variables.iter_mut() {
        let mut name = random_name(random);
        while used.contains(name) {
            name = random_name(random);
        }

        used.insert(name.to_string());
        var.name = name.to_string();
    }

    Ok(())
}

/// Samples `count` variables without replacement. The result holds copies, so renaming them
/// leaves the pool untouched.
pub fn select_n(
    random: &mut impl Rng,
    count: usize,
    pool: &[Variable],
) -> Result<Vec<Variable>, SynthError> {
    if count > pool.len() {
        return Err(SynthError::NotEnoughVariables { requested: count, available: pool.len() });
    }

    Ok(pool.choose_multiple(random, count).cloned().collect())
}
