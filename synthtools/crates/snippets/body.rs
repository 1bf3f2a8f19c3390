use crate::snippets::{
    blocks::BlockComposer, conditions::Complexity, error::SynthError, variables::Variable,
};
use rand::Rng;
use std::{
    collections::VecDeque,
    fmt::{Display, Formatter},
};

/// Marker appended to bodies that had no pending calls.
pub const END_OF_CHAIN: &str = "// End of chain";

/// What a method body is made of.
#[derive(Debug, Clone, Copy)]
pub struct BodyRequest<'a> {
    /// Variables declared at the top of the body
    pub locals: &'a [Variable],
    /// Every variable the body may reference, i.e. parameters and locals
    pub scope: &'a [Variable],
    pub return_var: Option<&'a Variable>,
    pub if_count: usize,
    pub loop_count: usize,
    /// Complexity of the if-block conditions
    pub complexity: Complexity,
}

/// Rendered statements of a method body, one per line and tab-indented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodBody {
    pub statements: Vec<String>,
}

impl MethodBody {
    /// Renders the declarations, the composed blocks, the end-of-chain marker when `pending` was
    /// empty on entry and the return statement. Calls left in `pending` were not embedded.
    pub fn random(
        random: &mut impl Rng,
        request: &BodyRequest<'_>,
        pending: &mut VecDeque<String>,
    ) -> Result<Self, SynthError> {
        let end_of_chain = pending.is_empty();

        let mut statements: Vec<String> =
            request.locals.iter().map(|var| format!("\t{}", var.declaration())).collect();

        let mut composer = BlockComposer::new(request.scope, request.complexity);
        statements.extend(composer.compose(
            random,
            pending,
            request.if_count,
            request.loop_count,
        )?);

        if end_of_chain {
            statements.push(format!("\t{END_OF_CHAIN}"));
        }

        if let Some(var) = request.return_var {
            statements.push(format!("\treturn {};", var.name));
        }

        Ok(Self { statements })
    }

    pub fn is_end_of_chain(&self) -> bool {
        self.statements.iter().any(|s| s.trim() == END_OF_CHAIN)
    }
}

impl Display for MethodBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.statements.join("\n"))
    }
}
