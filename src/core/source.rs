//! Source block loading.

use std::path::Path;

use indexmap::IndexMap;
use serde_json::Value;
use tracing::info;

use crate::error::{ConfigError, Result};

/// Load one output file's source block: a map from key to value definition,
/// in declaration order.
pub fn load(root: &Path, relative: &str) -> Result<IndexMap<String, Value>> {
    let path = root.join(relative);
    if !path.exists() {
        return Err(ConfigError::SourceNotFound(path.display().to_string()).into());
    }

    info!("found source {}", path.display());
    let contents = std::fs::read_to_string(&path)?;
    Ok(serde_json::from_str(&contents)?)
}
