//! Command-line interface.

pub mod generate;
pub mod output;

use clap::Parser;

/// Genvy - declarative .env file generation with reproducible secrets.
#[derive(Parser)]
#[command(
    name = "genvy",
    about = "Generate .env files from a declarative genvy.json",
    version
)]
pub struct Cli {
    /// Target environment name (selects if_env branches and namespaces
    /// generated secrets)
    pub environment: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Execute a generation run for the chosen target environment.
pub fn execute(environment: Option<String>) -> crate::error::Result<()> {
    generate::execute(&environment.unwrap_or_default())
}
