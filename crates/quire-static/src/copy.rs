//! Filesystem primitives: clean, copy a file, mirror a directory tree.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::publisher::PublishError;

/// Delete `path` and everything under it.
///
/// A missing path is not an error. A plain file at `path` is removed as well.
pub fn clean(path: &Path) -> Result<(), PublishError> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            return Err(PublishError::Clean {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    let result = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    result.map_err(|e| PublishError::Clean {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!("Removed {}", path.display());
    Ok(())
}

/// Copy `source` to `destination`, creating parent directories as needed.
///
/// An existing file at `destination` is overwritten.
pub fn copy_file(source: &Path, destination: &Path) -> Result<(), PublishError> {
    if !source.exists() {
        return Err(PublishError::MissingSource(source.to_path_buf()));
    }

    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir(parent)?;
        }
    }

    fs::copy(source, destination).map_err(|e| PublishError::Copy {
        from: source.to_path_buf(),
        to: destination.to_path_buf(),
        source: e,
    })?;

    tracing::debug!("Copied {} -> {}", source.display(), destination.display());
    Ok(())
}

/// Mirror `source_dir` into `destination_dir`.
///
/// Only tree shape and file contents are carried over. Entries are visited in
/// file name order so repeated runs copy in the same sequence. Returns the
/// number of files copied.
pub fn copy_tree(source_dir: &Path, destination_dir: &Path) -> Result<usize, PublishError> {
    if !source_dir.is_dir() {
        return Err(PublishError::MissingAssets(source_dir.to_path_buf()));
    }

    create_dir(destination_dir)?;

    let mut copied = 0;

    for entry in WalkDir::new(source_dir)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| PublishError::Walk {
            path: source_dir.to_path_buf(),
            source: e,
        })?;

        let target = destination_dir.join(relative_path(&entry));

        if entry.file_type().is_dir() {
            create_dir(&target)?;
        } else {
            copy_file(entry.path(), &target)?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Path of `entry` below the walk root.
///
/// WalkDir appends exactly one file name per level of depth, so the last
/// `depth` components are the entry's location inside the root.
fn relative_path(entry: &DirEntry) -> PathBuf {
    let components: Vec<_> = entry.path().components().collect();
    let start = components.len().saturating_sub(entry.depth());
    components[start..].iter().collect()
}

pub(crate) fn create_dir(path: &Path) -> Result<(), PublishError> {
    fs::create_dir_all(path).map_err(|e| PublishError::CreateDir {
        path: path.to_path_buf(),
        source: e,
    })
}
