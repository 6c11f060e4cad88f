//! Fixtures shared by the unit tests.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use walkdir::WalkDir;

/// Write `contents` to `path`, creating parent directories.
pub(crate) fn write(path: &Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// Every entry under `root` keyed by relative path. Directories map to `None`.
pub(crate) fn snapshot(root: &Path) -> BTreeMap<PathBuf, Option<Vec<u8>>> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| {
            let entry = entry.unwrap();
            let relative = entry.path().strip_prefix(root).unwrap().to_path_buf();
            let contents = if entry.file_type().is_dir() {
                None
            } else {
                Some(fs::read(entry.path()).unwrap())
            };
            (relative, contents)
        })
        .collect()
}

/// Lay out a project with the default sources and a small asset tree.
pub(crate) fn site(root: &Path) {
    write(&root.join("src/index.html"), b"<!doctype html><title>Home</title>");
    write(&root.join("src/styles.css"), b".main-nav { position: fixed; }");
    write(&root.join("src/script.js"), b"console.log('nav');");
    write(&root.join("src/netlify.toml"), b"[build]\npublish = \"dist\"\n");
    write(&root.join("assets/img/logo.png"), &[0x89, b'P', b'N', b'G', 0, 1]);
    write(&root.join("assets/a/b/c.txt"), b"nested");
}

/// Run `f` and return what it logged at info level and above, one event per
/// line, without timestamps or colors.
pub(crate) fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let writer = buffer.clone();

    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || LogBuffer(writer.clone()))
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
    (result, logs)
}

struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
