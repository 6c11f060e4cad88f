//! Static site publisher for quire.
//!
//! Rebuilds an output directory from a manifest of source files and a
//! mirrored asset tree.

pub mod copy;
pub mod manifest;
pub mod publisher;
pub mod scaffold;

#[cfg(test)]
mod testing;

pub use copy::{clean, copy_file, copy_tree};
pub use manifest::{Manifest, ManifestEntry};
pub use publisher::{publish, PublishConfig, PublishError, PublishReport, Publisher};
pub use scaffold::{Scaffold, ScaffoldFile};
