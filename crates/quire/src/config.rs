//! Site configuration (site.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use quire_static::{Manifest, ManifestEntry, PublishConfig};
use serde::Deserialize;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    site: SiteConfig,

    /// Replaces the default manifest when non-empty
    #[serde(default)]
    manifest: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
struct SiteConfig {
    #[serde(default = "default_output")]
    output: String,
    #[serde(default = "default_assets")]
    assets: String,
    #[serde(default = "default_assets")]
    assets_dest: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            assets: default_assets(),
            assets_dest: default_assets(),
        }
    }
}

fn default_output() -> String {
    "dist".to_string()
}
fn default_assets() -> String {
    "assets".to_string()
}

impl ConfigFile {
    /// Build the publisher configuration, letting `output` override the
    /// configured output directory.
    pub fn into_publish_config(self, output: Option<PathBuf>) -> PublishConfig {
        let manifest = if self.manifest.is_empty() {
            Manifest::default()
        } else {
            Manifest::new(self.manifest)
        };

        PublishConfig {
            output_dir: output.unwrap_or_else(|| PathBuf::from(&self.site.output)),
            manifest,
            assets_dir: PathBuf::from(&self.site.assets),
            assets_dest: PathBuf::from(&self.site.assets_dest),
        }
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        return Ok(config);
    }
    tracing::debug!("No config at {}, using defaults", path.display());
    Ok(ConfigFile::default())
}

/// Load `path` and turn it into a publisher configuration.
pub fn resolve(path: &Path, output: Option<PathBuf>) -> Result<PublishConfig> {
    Ok(load_config(path)?.into_publish_config(output))
}
