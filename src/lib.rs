//! exercise-pack - project template archiver
//!
//! Materializes a set of text templates (by default the bundled technical
//! interview exercise) into a single zip archive, atomically.

pub mod archive;
pub mod config;
pub mod error;
pub mod hash;
pub mod template;

// Re-exports for convenience
pub use archive::{
    build, list_entries, verify, ArchiveBuilder, ArchiveEntry, BuildOptions, BuildReport,
    Compression, VerifyReport,
};
pub use config::Config;
pub use error::{PackError, PackResult};
pub use hash::ContentHash;
pub use template::{EntryPath, PathError, Template, TemplateSet};
