//! Configuration discovery and validation.
//!
//! The configuration lives in a `genvy.json` found by walking up from the
//! working directory; its directory becomes the root that every relative
//! source and target path is resolved against.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::core::constants::CONFIG_FILE;
use crate::error::{ConfigError, Error, Result};

/// One declared output file.
#[derive(Debug, Deserialize)]
pub struct FileSpec {
    /// Source block path, relative to the configuration root.
    pub source: String,
    /// Output file path, relative to the configuration root.
    pub target: String,
}

/// Parsed genvy.json.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Output files, processed in declaration order.
    files: Option<IndexMap<String, FileSpec>>,
    /// Optional allow-list of environment names.
    pub environments: Option<Vec<String>>,
    /// Named values available to every source block.
    pub values: Option<IndexMap<String, Value>>,
}

impl Config {
    /// Walk up from `start` until a genvy.json is found.
    ///
    /// Returns the parsed configuration together with the directory that
    /// contains it.
    pub fn discover(start: &Path) -> Result<(Self, PathBuf)> {
        let mut dir = start.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.exists() {
                debug!("found configuration {}", candidate.display());
                let contents = std::fs::read_to_string(&candidate)?;
                let config: Self = serde_json::from_str(&contents)?;
                return Ok((config, dir));
            }
            if !dir.pop() {
                return Err(ConfigError::NotFound.into());
            }
        }
    }

    /// Check the shape rules that depend on the run's target environment.
    ///
    /// A `files` block is mandatory. When an environment allow-list is
    /// present, the target environment must be set and listed.
    pub fn validate(&self, target_env: &str) -> Result<()> {
        if self.files.is_none() {
            return Err(ConfigError::MissingFilesBlock.into());
        }

        if let Some(environments) = &self.environments {
            if target_env.is_empty() {
                return Err(ConfigError::MissingTargetEnv.into());
            }
            if !environments.iter().any(|e| e == target_env) {
                return Err(ConfigError::EnvNotListed {
                    env: target_env.to_string(),
                    list: serde_json::to_string(environments)?,
                }
                .into());
            }
        }

        Ok(())
    }

    /// The declared output files.
    pub fn files(&self) -> Result<&IndexMap<String, FileSpec>> {
        self.files
            .as_ref()
            .ok_or_else(|| Error::from(ConfigError::MissingFilesBlock))
    }
}
