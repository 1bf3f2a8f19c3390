//! Wraps synthesized bodies into methods and chains methods into call sequences.

use crate::{
    snippets::{
        body::{BodyRequest, MethodBody},
        context::Context,
        error::SynthError,
        variables::{distinct_set, rename, select_by_type, select_n, VarType, Variable},
    },
    utils::RandomChoice,
};
use rand::Rng;
use std::{
    collections::VecDeque,
    fmt::{Display, Formatter},
};
use tracing::debug;

// ────────────────────────────────────────────────────────────────────────────────
// Method
// ────────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    pub name: String,
    pub params: Vec<Variable>,
    /// `None` renders as `void`
    pub return_type: Option<VarType>,
    pub body: MethodBody,
}

impl Method {
    pub fn new(
        name: impl Into<String>,
        params: Vec<Variable>,
        return_var: Option<&Variable>,
        body: MethodBody,
    ) -> Self {
        Self { name: name.into(), params, return_type: return_var.map(Variable::ty), body }
    }

    pub fn signature(&self) -> String {
        let ret = self.return_type.map_or_else(|| "void".to_string(), |ty| ty.to_string());
        let params: Vec<String> =
            self.params.iter().map(|p| format!("{} {}", p.ty(), p.name)).collect();

        format!("public {} {}({})", ret, self.name, params.join(", "))
    }

    /// `name(args);` where each argument is a caller variable of the parameter's type, or a
    /// random literal of that type when the caller has none left.
    pub fn call_site(&self, random: &mut impl Rng, caller_scope: &[Variable]) -> String {
        let types: Vec<VarType> = self.params.iter().map(Variable::ty).collect();
        let mut chosen = select_by_type(random, &types, caller_scope).into_iter().peekable();

        let args: Vec<String> = types
            .iter()
            .map(|ty| match chosen.next_if(|var| var.ty() == *ty) {
                Some(var) => var.name,
                None => ty.random_value(random).to_string(),
            })
            .collect();

        format!("{}({});", self.name, args.join(", "))
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {{\n{}\n}}", self.signature(), self.body)
    }
}

// ────────────────────────────────────────────────────────────────────────────────
// Method chain
// ────────────────────────────────────────────────────────────────────────────────

/// Methods where each one calls some of the methods that follow it. The last one calls nothing
/// and carries the end-of-chain marker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MethodChain {
    pub methods: Vec<Method>,
}

struct Frame {
    locals: Vec<Variable>,
    return_var: Option<Variable>,
}

impl MethodChain {
    /// Builds one method per name, in order. Names come from the caller and are used verbatim.
    pub fn random(
        random: &mut impl Rng,
        ctx: &Context,
        names: &[String],
    ) -> Result<Self, SynthError> {
        ctx.validate()?;
        let complexity = ctx.complexity()?;
        let pool = distinct_set(random, ctx.pool_size)?;

        // Signatures first, so callers know the parameter types of their callees
        let mut methods = Vec::with_capacity(names.len());
        let mut frames = Vec::with_capacity(names.len());
        for name in names {
            let params_count = random.random_range(0..=ctx.max_params_count.min(pool.len()));
            let locals_count =
                random.random_range(0..=ctx.max_locals_count.min(pool.len() - params_count));

            let mut variables = select_n(random, params_count + locals_count, &pool)?;
            rename(random, &mut variables)?;
            let locals = variables.split_off(params_count);

            let scope: Vec<&Variable> = variables.iter().chain(locals.iter()).collect();
            let return_var = if !scope.is_empty() && random.chance(ctx.return_probability) {
                Some((*random.choice(&scope)).clone())
            } else {
                None
            };

            methods.push(Method::new(
                name.clone(),
                variables,
                return_var.as_ref(),
                MethodBody::default(),
            ));
            frames.push(Frame { locals, return_var });
        }

        for idx in 0..methods.len() {
            let scope: Vec<Variable> =
                methods[idx].params.iter().chain(frames[idx].locals.iter()).cloned().collect();

            let remaining = methods.len() - idx - 1;
            let fanout = random.random_range(1..=ctx.max_fanout).min(remaining);
            let mut pending: VecDeque<String> = methods[idx + 1..idx + 1 + fanout]
                .iter()
                .map(|callee| callee.call_site(random, &scope))
                .collect();

            // Conditions need at least one variable to compare
            let if_count =
                if scope.is_empty() { 0 } else { random.random_range(0..=ctx.max_if_count) };
            let loop_count = random.random_range(0..=ctx.max_loop_count);

            let request = BodyRequest {
                locals: &frames[idx].locals,
                scope: &scope,
                return_var: frames[idx].return_var.as_ref(),
                if_count,
                loop_count,
                complexity,
            };
            methods[idx].body = MethodBody::random(random, &request, &mut pending)?;
        }

        debug!(methods = methods.len(), pool = pool.len(), "generated method chain");

        Ok(Self { methods })
    }

    /// Wraps the chain into `public class <name> { ... }`.
    pub fn render_class(&self, name: &str) -> String {
        let mut out = format!("public class {name} {{\n");

        for line in self.to_string().lines() {
            if line.is_empty() {
                out.push('\n');
            } else {
                out.push_str(&format!("\t{line}\n"));
            }
        }

        out.push_str("}\n");
        out
    }
}

impl Display for MethodChain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let methods: Vec<String> = self.methods.iter().map(|m| m.to_string()).collect();
        write!(f, "{}", methods.join("\n\n"))
    }
}
