//! .env output writing.

use std::path::Path;

use tracing::info;

use crate::core::resolve::FlatValueMap;
use crate::error::Result;

/// Write a resolved value map as `KEY=value` lines.
///
/// Keys are upper-cased at write time only; values are written verbatim
/// with no quoting or escaping. Lines are joined with `\n` and the file
/// carries no trailing newline.
pub fn write(root: &Path, relative: &str, values: &FlatValueMap) -> Result<()> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = values
        .iter()
        .map(|(key, value)| format!("{}={}", key.to_uppercase(), value))
        .collect::<Vec<_>>()
        .join("\n");

    std::fs::write(&path, content)?;
    info!("wrote target {}", path.display());
    Ok(())
}
