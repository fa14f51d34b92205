//! Run orchestration.

use std::path::PathBuf;

use tracing::info;

use crate::core::config::Config;
use crate::core::expr::ExpressionEvaluator;
use crate::core::registry::SecretRegistry;
use crate::core::resolve::{FlatValueMap, Resolver};
use crate::core::secret::SecretGenerator;
use crate::core::{env, source};
use crate::error::Result;

/// Drives one full generation run: validation, named-value resolution, one
/// pass per declared output file, and a single registry save at the end.
pub struct Processor {
    config: Config,
    root: PathBuf,
    target_env: String,
    secrets: SecretGenerator,
    exprs: ExpressionEvaluator,
}

impl Processor {
    pub fn new(config: Config, root: PathBuf, target_env: String) -> Result<Self> {
        let registry = SecretRegistry::load(&root)?;
        Ok(Self {
            config,
            root,
            target_env,
            secrets: SecretGenerator::new(registry),
            exprs: ExpressionEvaluator::new(),
        })
    }

    /// Process every declared output file.
    ///
    /// Files are handled strictly in declaration order; later files may
    /// observe secrets and cached expressions produced by earlier ones. The
    /// registry is written exactly once, after the last file, so a failed
    /// run never persists partially generated state.
    pub fn run(mut self) -> Result<()> {
        self.config.validate(&self.target_env)?;

        let named = self.resolve_config_values()?;

        for (name, file) in self.config.files()? {
            let block = source::load(&self.root, &file.source)?;
            let mut resolver = Resolver::for_file(
                name,
                &named,
                &self.target_env,
                &mut self.secrets,
                &mut self.exprs,
            );
            let resolved = resolver.resolve_block(&block)?;
            env::write(&self.root, &file.target, &resolved)?;
        }

        self.secrets.registry().save(&self.root)?;
        info!("finished successfully");
        Ok(())
    }

    /// Resolve the configuration's top-level values block. Named references
    /// are not available here; the block being built is their source.
    fn resolve_config_values(&mut self) -> Result<FlatValueMap> {
        let Some(values) = &self.config.values else {
            return Ok(FlatValueMap::new());
        };
        let mut resolver =
            Resolver::for_config(&self.target_env, &mut self.secrets, &mut self.exprs);
        resolver.resolve_block(values)
    }
}
