use anyhow::Result;
use rand::Rng;
use std::io::{self, Write};
use synthtools::snippets::{Context, MethodChain};
use tracing::info;

pub struct App {
    /// Chainsmith prelude to display
    prelude: String,

    /// Generation parameters
    ctx: Context,

    /// Method names, in call order
    names: Vec<String>,

    /// Name of the class wrapping the chain
    class: String,
}

impl App {
    pub fn new(ctx: Context, names: Vec<String>, class: String, prelude: String) -> Self {
        Self { prelude, ctx, names, class }
    }

    pub fn run(&mut self, random: &mut impl Rng) -> Result<()> {
        eprint!("{}", self.prelude);

        let chain = MethodChain::random(random, &self.ctx, &self.names)?;
        let statements: usize = chain.methods.iter().map(|m| m.body.statements.len()).sum();
        info!(methods = chain.methods.len(), statements, class = %self.class, "synthesized class");

        let mut stdout = io::stdout().lock();
        stdout.write_all(chain.render_class(&self.class).as_bytes())?;
        stdout.flush()?;

        Ok(())
    }
}
