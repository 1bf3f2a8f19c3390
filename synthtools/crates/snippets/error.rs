use thiserror::Error;

#[derive(Error, Debug)]
/// Errors raised while synthesizing snippets. All of them are argument-validation faults.
pub enum SynthError {
    #[error("cannot select {requested} variables from a pool of {available}")]
    /// More variables were requested than the pool holds
    NotEnoughVariables { requested: usize, available: usize },

    #[error("cannot draw {requested} distinct names, only {available} are left in the name pool")]
    /// The fixed name pool cannot supply enough distinct names
    NamePoolExhausted { requested: usize, available: usize },

    #[error("complexity level {0} is out of range, expected 0..=3")]
    InvalidComplexity(u8),

    #[error("cannot synthesize a condition without variables in scope")]
    NoVariables,

    #[error("variable `{0}` is not bound in the evaluation scope")]
    UnboundVariable(String),

    #[error("variable `{0}` is compared against a literal of another type")]
    TypeMismatch(String),

    #[error("invalid context: {0}")]
    InvalidContext(String),

    #[error("malformed context: {0}")]
    /// The context could not be deserialized
    MalformedContext(#[from] serde_json::Error),
}
