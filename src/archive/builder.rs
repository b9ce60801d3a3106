//! Archive builder
//!
//! Writes a [`TemplateSet`] into a zip file using the tempfile + rename
//! pattern: the archive is staged next to its destination and only renamed
//! into place once the central directory is written and synced. A failed
//! build never leaves a partial or truncated archive at the output path.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{DateTime, ZipWriter};

use super::Compression;
use crate::error::{PackError, PackResult};
use crate::hash::ContentHash;
use crate::template::TemplateSet;

/// Options controlling how an archive is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    pub compression: Compression,
    /// Replace an existing archive (otherwise fail with `OutputExists`)
    pub overwrite: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            compression: Compression::Deflate,
            overwrite: true,
        }
    }
}

/// One written entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntrySummary {
    pub path: String,
    pub size: u64,
    pub hash: ContentHash,
}

/// Result of a successful build
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub output: PathBuf,
    pub compression: Compression,
    pub entries: Vec<EntrySummary>,
    pub archive_bytes: u64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ArchiveBuilder {
    options: BuildOptions,
}

impl ArchiveBuilder {
    pub fn new(options: BuildOptions) -> Self {
        Self { options }
    }

    /// Write `templates` to `output`.
    ///
    /// Entries are written in insertion order with a fixed timestamp, so the
    /// same input and options always produce the same bytes.
    pub fn build(&self, templates: &TemplateSet, output: &Path) -> PackResult<BuildReport> {
        if templates.is_empty() {
            return Err(PackError::EmptyTemplateSet);
        }

        if output.is_dir() {
            return Err(PackError::Create {
                path: output.to_path_buf(),
                source: io::Error::other("output path is a directory"),
            });
        }

        if !self.options.overwrite && output.exists() {
            return Err(PackError::OutputExists {
                path: output.to_path_buf(),
            });
        }

        let mut staged = stage(output)?;
        let entries = self.write_entries(templates, staged.as_file_mut(), output)?;

        staged
            .as_file()
            .sync_all()
            .map_err(|source| finish_error(output, source))?;

        self.commit(staged, output)?;

        let archive_bytes = fs::metadata(output)
            .map_err(|source| finish_error(output, source))?
            .len();

        Ok(BuildReport {
            output: output.to_path_buf(),
            compression: self.options.compression,
            entries,
            archive_bytes,
        })
    }

    fn write_entries(
        &self,
        templates: &TemplateSet,
        file: &mut File,
        output: &Path,
    ) -> PackResult<Vec<EntrySummary>> {
        let options = SimpleFileOptions::default()
            .compression_method(self.options.compression.method())
            .last_modified_time(DateTime::default())
            .unix_permissions(0o644);

        let mut zip = ZipWriter::new(file);
        let mut entries = Vec::with_capacity(templates.len());

        for template in templates {
            let name = template.path().as_str();
            let body = template.content().as_bytes();

            zip.start_file(name, options)
                .map_err(|e| write_error(output, name, zip_to_io(e)))?;
            zip.write_all(body)
                .map_err(|e| write_error(output, name, e))?;

            entries.push(EntrySummary {
                path: name.to_string(),
                size: body.len() as u64,
                hash: ContentHash::from_bytes(body),
            });
        }

        zip.finish()
            .map_err(|e| finish_error(output, zip_to_io(e)))?;

        Ok(entries)
    }

    fn commit(&self, staged: NamedTempFile, output: &Path) -> PackResult<()> {
        let persisted = if self.options.overwrite {
            staged.persist(output)
        } else {
            staged.persist_noclobber(output)
        };

        // On error the temp file is dropped (and removed) together with `err.file`.
        persisted.map(|_| ()).map_err(|err| {
            if !self.options.overwrite && err.error.kind() == io::ErrorKind::AlreadyExists {
                PackError::OutputExists {
                    path: output.to_path_buf(),
                }
            } else {
                finish_error(output, err.error)
            }
        })
    }
}

/// Build `templates` into `output` with default options
pub fn build(templates: &TemplateSet, output: &Path) -> PackResult<BuildReport> {
    ArchiveBuilder::default().build(templates, output)
}

/// Create the temporary file the archive is written to, beside `output`
fn stage(output: &Path) -> PackResult<NamedTempFile> {
    let create_error = |source| PackError::Create {
        path: output.to_path_buf(),
        source,
    };

    let file_name = output
        .file_name()
        .ok_or_else(|| create_error(io::Error::other("output path has no file name")))?;
    let parent = output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let prefix = format!(".{}.", file_name.to_string_lossy());
    let mut builder = tempfile::Builder::new();
    builder.prefix(&prefix).suffix(".tmp");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o644));
    }

    builder.tempfile_in(parent).map_err(create_error)
}

fn zip_to_io(err: ZipError) -> io::Error {
    match err {
        ZipError::Io(e) => e,
        other => io::Error::other(other),
    }
}

fn write_error(output: &Path, entry: &str, source: io::Error) -> PackError {
    PackError::WriteEntry {
        path: output.to_path_buf(),
        entry: entry.to_string(),
        source,
    }
}

fn finish_error(output: &Path, source: io::Error) -> PackError {
    PackError::Finish {
        path: output.to_path_buf(),
        source,
    }
}
