mod app;
mod constants;

use crate::app::App;
use anyhow::{Context as _, Result};
use clap::Parser;
use constants::{GREEN, HEADER, RED, RESET};
use rand::{rngs::SmallRng, SeedableRng};
use std::{
    fs,
    path::{Path, PathBuf},
};
use synthtools::snippets::Context;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "chainsmith",
    about = "Synthesizer of chained method bodies",
    author = "nethoxa"
)]
struct Cli {
    #[arg(long, help = "Seed for the random generator")]
    seed: u64,

    #[arg(long, help = "Path to the generation context", default_value = "configs/chainsmith.json")]
    config: PathBuf,

    #[arg(long, help = "Method names in call order, comma separated", value_delimiter = ',', required = true)]
    names: Vec<String>,

    #[arg(long, help = "Name of the generated class", default_value = "Generated")]
    class: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let ctx = match load_context(&cli.config) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("\n\n\x1b[1;31m[!] Error: {e:#}\x1b[0m");
            return Ok(());
        }
    };

    let prelude = format!(
        "{HEADER}\n{GREEN}INFO{RESET}      Config:                 \
         {RED}{}{RESET}\n{GREEN}INFO{RESET}      Seed:                   \
         {RED}{}{RESET}\n{GREEN}INFO{RESET}      Methods:                \
         {RED}{}{RESET}\n{GREEN}INFO{RESET}      Class:                  {RED}{}{RESET}\n\n",
        cli.config.display(),
        cli.seed,
        cli.names.join(", "),
        cli.class,
    );

    // Create the application
    let mut app = App::new(ctx, cli.names, cli.class, prelude);

    // Run the application
    let mut random = SmallRng::seed_from_u64(cli.seed);
    let result = app.run(&mut random);
    if let Err(e) = result {
        eprintln!("\n\n\x1b[1;31m[!] Error: {e}\x1b[0m");
    }

    Ok(())
}

fn load_context(path: &Path) -> Result<Context> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    Context::from_json(&json).with_context(|| format!("invalid config file {}", path.display()))
}
