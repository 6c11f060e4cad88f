//! Clean-rebuild publisher.

use std::path::{Component, Path, PathBuf};
use std::time::Instant;

use crate::copy::{clean, copy_file, copy_tree, create_dir};
use crate::manifest::{Manifest, ManifestEntry};

/// Configuration for a publish run.
#[derive(Debug, Clone)]
pub struct PublishConfig {
    /// Output directory, destroyed and recreated on every run
    pub output_dir: PathBuf,

    /// Individual files to copy
    pub manifest: Manifest,

    /// Source asset directory
    pub assets_dir: PathBuf,

    /// Where the asset tree lands, relative to the output directory
    pub assets_dest: PathBuf,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
            manifest: Manifest::default(),
            assets_dir: PathBuf::from("assets"),
            assets_dest: PathBuf::from("assets"),
        }
    }
}

impl PublishConfig {
    /// Resolve every relative input and output path against `root`.
    pub fn rooted(self, root: &Path) -> Self {
        Self {
            output_dir: root.join(self.output_dir),
            manifest: self.manifest.rooted(root),
            assets_dir: root.join(self.assets_dir),
            assets_dest: self.assets_dest,
        }
    }

    /// Destination directory of the asset tree.
    pub fn assets_output(&self) -> PathBuf {
        self.output_dir.join(&self.assets_dest)
    }

    /// Check that a run cannot destroy its own inputs or write outside the
    /// output directory.
    pub fn validate(&self) -> Result<(), PublishError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(PublishError::EmptyOutput);
        }

        let output = normalize(&self.output_dir);
        let assets = normalize(&self.assets_dir);

        // Copying a tree into itself never terminates
        if assets.starts_with(&output) || output.starts_with(&assets) {
            return Err(PublishError::OverlappingOutput {
                output: self.output_dir.clone(),
                input: self.assets_dir.clone(),
            });
        }

        for entry in self.manifest.entries() {
            if normalize(&entry.source).starts_with(&output) {
                return Err(PublishError::OverlappingOutput {
                    output: self.output_dir.clone(),
                    input: entry.source.clone(),
                });
            }
            if !names_file(&entry.destination) {
                return Err(PublishError::InvalidDestination(entry.destination.clone()));
            }
        }

        if !is_contained(&self.assets_dest) {
            return Err(PublishError::InvalidDestination(self.assets_dest.clone()));
        }

        Ok(())
    }
}

/// Result of a publish run.
#[derive(Debug)]
pub struct PublishReport {
    /// Number of manifest files copied
    pub files: usize,

    /// Number of asset files copied
    pub assets: usize,

    /// Optional sources that were absent
    pub skipped: Vec<PathBuf>,

    /// Total run time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur while publishing.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("Source file not found: {}", .0.display())]
    MissingSource(PathBuf),

    #[error("Asset directory not found: {}", .0.display())]
    MissingAssets(PathBuf),

    #[error("Failed to remove {}: {source}", path.display())]
    Clean {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("Output directory {} overlaps source {}", output.display(), input.display())]
    OverlappingOutput { output: PathBuf, input: PathBuf },

    #[error("Destination must be a relative path inside the output directory: {}", .0.display())]
    InvalidDestination(PathBuf),

    #[error("Output directory is empty")]
    EmptyOutput,
}

/// Publishes a site by rebuilding the output directory from scratch.
pub struct Publisher {
    config: PublishConfig,
}

impl Publisher {
    /// Create a new publisher.
    pub fn new(config: PublishConfig) -> Self {
        Self { config }
    }

    /// Run the publish pipeline.
    ///
    /// Order is fixed: clean, recreate the output, required files, optional
    /// files, asset tree. The first fatal error aborts the run and leaves the
    /// output directory as it was at that point.
    pub fn publish(&self) -> Result<PublishReport, PublishError> {
        let start = Instant::now();
        let config = &self.config;

        config.validate()?;

        clean(&config.output_dir)?;
        create_dir(&config.output_dir)?;

        let mut files = 0;

        for entry in config.manifest.required() {
            copy_file(&entry.source, &config.output_dir.join(&entry.destination))?;
            files += 1;
        }

        let mut skipped = Vec::new();

        for entry in config.manifest.optional() {
            if entry.source.exists() {
                copy_file(&entry.source, &config.output_dir.join(&entry.destination))?;
                files += 1;
            } else {
                tracing::warn!("{}", not_found_message(entry));
                skipped.push(entry.source.clone());
            }
        }

        let assets = copy_tree(&config.assets_dir, &config.assets_output())?;

        tracing::info!("Build complete!");

        Ok(PublishReport {
            files,
            assets,
            skipped,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: config.output_dir.clone(),
        })
    }
}

/// Publish with the given configuration.
pub fn publish(config: PublishConfig) -> Result<PublishReport, PublishError> {
    Publisher::new(config).publish()
}

/// "netlify.toml not found in src directory."
fn not_found_message(entry: &ManifestEntry) -> String {
    let name = entry
        .source
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| entry.source.display().to_string());

    let dir = entry
        .source
        .parent()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string());

    format!("{} not found in {} directory.", name, dir)
}

/// Absolute, lexically normalized form of `path`.
fn normalize(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Relative, and never climbs out through `..`.
fn is_contained(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Contained and names something below the output directory, not the
/// output directory itself.
fn names_file(path: &Path) -> bool {
    is_contained(path) && path.components().any(|c| matches!(c, Component::Normal(_)))
}
