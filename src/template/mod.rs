//! Template sets
//!
//! A [`TemplateSet`] is the ordered, validated mapping from archive-relative
//! path to text content that the archive builder materializes.

pub mod bundled;
pub mod loader;
mod path;

pub use loader::load_dir;
pub use path::{EntryPath, PathError};

use crate::error::{PackError, PackResult};

/// One template: where it goes in the archive and what it contains
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    path: EntryPath,
    content: String,
}

impl Template {
    pub fn path(&self) -> &EntryPath {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Insertion-ordered set of templates with unique, non-colliding paths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateSet {
    entries: Vec<Template>,
}

impl TemplateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from `(path, content)` pairs, failing on the first invalid one
    pub fn from_pairs<I, P, C>(pairs: I) -> PackResult<Self>
    where
        I: IntoIterator<Item = (P, C)>,
        P: AsRef<str>,
        C: Into<String>,
    {
        let mut set = Self::new();
        for (path, content) in pairs {
            set.insert(path, content)?;
        }
        Ok(set)
    }

    /// Add a template.
    ///
    /// Rejects invalid paths, exact duplicates, and paths that would need an
    /// existing entry to be both a file and a directory.
    pub fn insert(&mut self, path: impl AsRef<str>, content: impl Into<String>) -> PackResult<()> {
        let raw = path.as_ref();
        let path = EntryPath::parse(raw).map_err(|reason| PackError::InvalidEntryPath {
            path: raw.to_string(),
            reason,
        })?;

        for existing in &self.entries {
            if existing.path == path {
                return Err(PackError::DuplicateEntry {
                    path: path.to_string(),
                });
            }
            if path.is_inside(&existing.path) || existing.path.is_inside(&path) {
                return Err(PackError::PathConflict {
                    path: path.to_string(),
                    existing: existing.path.to_string(),
                });
            }
        }

        self.entries.push(Template {
            path,
            content: content.into(),
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Template> {
        self.entries.iter()
    }

    /// Content stored at `path`, if any
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|t| t.path.as_str() == path)
            .map(|t| t.content.as_str())
    }

    /// Entry paths in insertion order
    pub fn paths(&self) -> Vec<&str> {
        self.entries.iter().map(|t| t.path.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a TemplateSet {
    type Item = &'a Template;
    type IntoIter = std::slice::Iter<'a, Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
