//! Generate command - produce every declared output file.

use tracing::info;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::processor::Processor;
use crate::error::Result;

/// Run one full generation pass from the current working directory.
pub fn execute(target_env: &str) -> Result<()> {
    info!("starting genvy");

    let start = std::env::current_dir()?;
    let (config, root) = Config::discover(&start)?;

    Processor::new(config, root, target_env.to_string())?.run()?;

    output::success("generated all targets");
    Ok(())
}
