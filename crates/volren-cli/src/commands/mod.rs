//! CLI command implementations

pub mod tf;
pub mod points;

use anyhow::{Context, Result};
use std::path::Path;

/// Create the parent directory of an output path if it is missing
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display())),
        _ => Ok(()),
    }
}
