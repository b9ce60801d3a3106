//! Load a template set from a directory tree

use std::path::{Component, Path};

use ignore::WalkBuilder;

use crate::error::{PackError, PackResult};

use super::TemplateSet;

/// Walk `root` and collect every regular file as a template.
///
/// Files are ordered by their relative path so the resulting archive does not
/// depend on directory iteration order. Symlinks are followed and stored under
/// the link's own name. `.git` directories are skipped and ignore files are
/// treated as payload.
pub fn load_dir(root: &Path) -> PackResult<TemplateSet> {
    if !root.is_dir() {
        return Err(PackError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(true)
        .filter_entry(|entry| entry.file_name() != ".git")
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| match e.into_io_error() {
            Some(io) => PackError::Io(io),
            None => PackError::Io(std::io::Error::other("directory walk failed")),
        })?;

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|_| PackError::DirectoryNotFound {
                path: root.to_path_buf(),
            })?;
        let name = archive_name(relative).ok_or_else(|| PackError::NonUtf8Path {
            path: entry.path().to_path_buf(),
        })?;
        files.push((name, entry.into_path()));
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));

    let mut set = TemplateSet::new();
    for (name, path) in files {
        let bytes = std::fs::read(&path)?;
        let content =
            String::from_utf8(bytes).map_err(|_| PackError::NonUtf8Template { path: path.clone() })?;
        set.insert(name, content)?;
    }

    Ok(set)
}

/// Join the normal components of `relative` with `/`, or `None` if a
/// component is not valid UTF-8
fn archive_name(relative: &Path) -> Option<String> {
    let parts = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_str()),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join("/"))
}
