//! Persisted registry of generated secrets.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info};

use crate::core::constants::SECRETS_FILE;
use crate::error::Result;

/// Map from secret identity key to the generated value.
///
/// Loaded from `.genvy.secrets` at the configuration root and written back
/// once per run. Entries are only ever added or reused, never removed, so a
/// secret stays stable for as long as its identity exists.
#[derive(Debug, Default)]
pub struct SecretRegistry {
    entries: BTreeMap<String, String>,
}

impl SecretRegistry {
    /// Load the registry from the configuration root.
    ///
    /// A missing file is an empty registry, not an error.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(SECRETS_FILE);
        if !path.exists() {
            debug!("no secrets file at {}", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        let entries = serde_json::from_str(&contents)?;
        Ok(Self { entries })
    }

    /// Write the registry as pretty-printed JSON (2-space indent).
    pub fn save(&self, root: &Path) -> Result<()> {
        let path = root.join(SECRETS_FILE);
        let contents = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&path, contents)?;
        info!("wrote secrets file {}", path.display());
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: String, value: String) {
        self.entries.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
