use crate::snippets::{conditions::Complexity, error::SynthError, variables::NAMES};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
/// Context that controls the generation of method chains. It bounds how many variables, blocks
/// and calls each method gets, and how deep its conditions are.
pub struct Context {
    /// Variables in the pool every method draws from
    pub pool_size: usize,

    pub max_params_count: usize,
    pub max_locals_count: usize,

    pub max_if_count: usize,
    pub max_loop_count: usize,

    /// How many of the following methods a method may call
    pub max_fanout: usize,

    pub condition_complexity: u8,

    // ------------------------------------------------------------
    pub return_probability: f64,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            pool_size: 20,
            max_params_count: 3,
            max_locals_count: 4,
            max_if_count: 3,
            max_loop_count: 2,
            max_fanout: 2,
            condition_complexity: 2,
            return_probability: 0.3,
        }
    }
}

impl Context {
    pub fn from_json(json: &str) -> Result<Self, SynthError> {
        let ctx: Self = serde_json::from_str(json)?;
        ctx.validate()?;
        Ok(ctx)
    }

    pub fn complexity(&self) -> Result<Complexity, SynthError> {
        Complexity::try_from(self.condition_complexity)
    }

    pub fn validate(&self) -> Result<(), SynthError> {
        if self.pool_size > NAMES.len() {
            return Err(SynthError::InvalidContext(format!(
                "pool_size {} exceeds the {} available names",
                self.pool_size,
                NAMES.len()
            )));
        }

        // Renaming a method's variables needs as many unused names as it has variables
        let per_method = self.max_params_count + self.max_locals_count;
        if per_method * 2 > NAMES.len() {
            return Err(SynthError::InvalidContext(format!(
                "{per_method} variables per method cannot be renamed within {} names",
                NAMES.len()
            )));
        }

        if self.max_fanout == 0 {
            return Err(SynthError::InvalidContext("max_fanout must be at least 1".to_string()));
        }

        if !(0.0..=1.0).contains(&self.return_probability) {
            return Err(SynthError::InvalidContext(format!(
                "return_probability {} is not a probability",
                self.return_probability
            )));
        }

        self.complexity()?;

        Ok(())
    }
}
