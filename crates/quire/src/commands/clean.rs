//! Remove the output directory.

use std::path::{Path, PathBuf};

use anyhow::Result;
use quire_static::PublishError;

use crate::config;

/// Run the clean command.
///
/// Refuses to remove an output directory that holds the site's own sources.
pub fn run(root: &Path, config_path: &Path, output: Option<PathBuf>) -> Result<()> {
    let config = config::resolve(&root.join(config_path), output)?.rooted(root);
    config.validate().map_err(|e| match e {
        PublishError::OverlappingOutput { .. } => anyhow::anyhow!("Refusing to clean: {}", e),
        other => other.into(),
    })?;

    quire_static::clean(&config.output_dir)?;
    tracing::info!("Removed {}", config.output_dir.display());

    Ok(())
}
