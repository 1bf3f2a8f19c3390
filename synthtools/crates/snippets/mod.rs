//! Method-body synthesis.

pub mod blocks;
pub mod body;
pub mod conditions;
pub mod context;
pub mod error;
pub mod method;
pub mod operators;
pub mod variables;


// Re-exports
pub use blocks::{BlockComposer, BlockKind, CallAllocation, ControlBlock, LoopKind};
pub use body::{BodyRequest, MethodBody, END_OF_CHAIN};
pub use conditions::{false_condition, true_condition, Complexity, Condition, Expr};
pub use context::Context;
pub use error::SynthError;
pub use method::{Method, MethodChain};
pub use operators::Operator;
pub use variables::{Value, VarType, Variable};
