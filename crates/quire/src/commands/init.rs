//! Initialize a site in a project directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use quire_static::Scaffold;

/// Run the init command.
///
/// Existing files are left alone unless `yes` is set.
pub fn run(root: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing quire...");

    for dir in Scaffold::directories() {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
    }

    for file in Scaffold::files() {
        let path = root.join(file.path);

        if path.exists() && !yes {
            tracing::warn!("{} already exists. Use --yes to overwrite.", file.path);
            continue;
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        fs::write(&path, file.contents)
            .with_context(|| format!("Failed to write {}", file.path))?;
        tracing::info!("Created {}", file.path);
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'quire build' to publish the site.");

    Ok(())
}
