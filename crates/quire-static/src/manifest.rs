//! Manifest of individual files copied into the output directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// A single file to publish.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManifestEntry {
    /// Source file path
    pub source: PathBuf,

    /// Destination path, relative to the output directory
    pub destination: PathBuf,

    /// Whether a missing source aborts the publish
    #[serde(default = "default_required")]
    pub required: bool,
}

fn default_required() -> bool {
    true
}

impl ManifestEntry {
    /// An entry whose source must exist.
    pub fn required(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            required: true,
        }
    }

    /// An entry that is skipped with a warning when its source is absent.
    pub fn optional(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            required: false,
        }
    }
}

/// Ordered list of files to publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new(entries: Vec<ManifestEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    /// Entries that must be present, in manifest order.
    pub fn required(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.iter().filter(|e| e.required)
    }

    /// Entries that may be absent, in manifest order.
    pub fn optional(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.iter().filter(|e| !e.required)
    }

    /// Resolve relative source paths against `root`.
    pub fn rooted(self, root: &Path) -> Self {
        let entries = self
            .entries
            .into_iter()
            .map(|entry| ManifestEntry {
                source: root.join(entry.source),
                ..entry
            })
            .collect();
        Self { entries }
    }
}

impl Default for Manifest {
    /// The index page, stylesheet and client script, plus the optional
    /// Netlify deployment config.
    fn default() -> Self {
        Self::new(vec![
            ManifestEntry::required("src/index.html", "index.html"),
            ManifestEntry::required("src/styles.css", "styles.css"),
            ManifestEntry::required("src/script.js", "script.js"),
            ManifestEntry::optional("src/netlify.toml", "netlify.toml"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_manifest_has_one_optional_entry() {
        let manifest = Manifest::default();

        let required: Vec<_> = manifest.required().map(|e| e.destination.clone()).collect();
        assert_eq!(
            required,
            vec![
                PathBuf::from("index.html"),
                PathBuf::from("styles.css"),
                PathBuf::from("script.js"),
            ]
        );

        let optional: Vec<_> = manifest.optional().collect();
        assert_eq!(optional.len(), 1);
        assert_eq!(optional[0].source, PathBuf::from("src/netlify.toml"));
    }

    #[test]
    fn rooted_only_touches_sources() {
        let manifest = Manifest::default().rooted(Path::new("/site"));
        let first = &manifest.entries()[0];

        assert_eq!(first.source, PathBuf::from("/site/src/index.html"));
        assert_eq!(first.destination, PathBuf::from("index.html"));
    }

    #[test]
    fn entries_default_to_required() {
        #[derive(Deserialize)]
        struct Doc {
            manifest: Vec<ManifestEntry>,
        }

        let doc: Doc = toml::from_str(
            r#"
[[manifest]]
source = "src/about.html"
destination = "about/index.html"

[[manifest]]
source = "src/_redirects"
destination = "_redirects"
required = false
"#,
        )
        .unwrap();

        assert!(doc.manifest[0].required);
        assert!(!doc.manifest[1].required);
    }
}
