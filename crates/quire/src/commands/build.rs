//! Site build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use quire_static::Publisher;

use crate::config;

/// Run the build command.
///
/// The publisher's own "Build complete!" line is the only info-level output
/// of a successful build.
pub fn run(root: &Path, config_path: &Path, output: Option<PathBuf>) -> Result<()> {
    tracing::debug!("Building site...");

    let config = config::resolve(&root.join(config_path), output)?.rooted(root);
    let result = Publisher::new(config).publish()?;

    tracing::debug!(
        "Copied {} files and {} assets in {}ms",
        result.files,
        result.assets,
        result.duration_ms
    );

    tracing::debug!("Output: {}", result.output_dir.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init;
    use crate::testing::capture_logs;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn default_build_logs_only_completion() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        init::run(root, false).unwrap();

        let (result, logs) = capture_logs(|| run(root, Path::new("site.toml"), None));
        result.unwrap();

        let lines: Vec<&str> = logs.lines().collect();
        assert_eq!(lines.len(), 1, "{}", logs);
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("Build complete!"));
        assert!(root.join("dist/netlify.toml").exists());
    }

    #[test]
    fn missing_deployment_config_adds_one_warning() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        init::run(root, false).unwrap();
        fs::remove_file(root.join("src/netlify.toml")).unwrap();

        let (result, logs) = capture_logs(|| run(root, Path::new("site.toml"), None));
        result.unwrap();

        let lines: Vec<&str> = logs.lines().collect();
        assert_eq!(lines.len(), 2, "{}", logs);
        assert!(lines[0].contains("WARN"));
        assert!(lines[0].contains("netlify.toml not found in src directory."));
        assert!(lines[1].contains("Build complete!"));
        assert!(!root.join("dist/netlify.toml").exists());
    }

    #[test]
    fn missing_required_file_fails_without_completion() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        init::run(root, false).unwrap();
        fs::remove_file(root.join("src/index.html")).unwrap();

        let (result, logs) = capture_logs(|| run(root, Path::new("site.toml"), None));

        assert!(result.is_err());
        assert!(!logs.contains("Build complete!"), "{}", logs);
    }
}
