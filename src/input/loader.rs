use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::error::Result;

/// Load an input document from a JSON file.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)?;
    info!(path = %path.display(), bytes = content.len(), "loaded input document");
    Ok(value)
}
