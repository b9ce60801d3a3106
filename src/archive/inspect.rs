//! Read back and verify existing archives

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Serialize;
use zip::{CompressionMethod, ZipArchive};

use crate::error::{PackError, PackResult};
use crate::hash::ContentHash;
use crate::template::TemplateSet;

/// Metadata and digest of one archive entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveEntry {
    pub name: String,
    pub size: u64,
    pub compressed_size: u64,
    pub crc32: u32,
    pub compression: &'static str,
    pub hash: ContentHash,
}

/// Differences between an archive and the template set it should contain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    pub archive: PathBuf,
    pub checked: usize,
    pub missing: Vec<String>,
    pub unexpected: Vec<String>,
    pub mismatched: Vec<String>,
    pub duplicated: Vec<String>,
}

impl VerifyReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty()
            && self.unexpected.is_empty()
            && self.mismatched.is_empty()
            && self.duplicated.is_empty()
    }

    pub fn problem_count(&self) -> usize {
        self.missing.len() + self.unexpected.len() + self.mismatched.len() + self.duplicated.len()
    }
}

fn read_error(path: &Path, err: impl std::fmt::Display) -> PackError {
    PackError::ReadArchive {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

fn open(path: &Path) -> PackResult<ZipArchive<File>> {
    let file = File::open(path).map_err(|e| read_error(path, e))?;
    ZipArchive::new(file).map_err(|e| read_error(path, e))
}

fn method_name(method: CompressionMethod) -> &'static str {
    match method {
        CompressionMethod::Stored => "stored",
        CompressionMethod::Deflated => "deflate",
        _ => "other",
    }
}

/// List file entries in archive order.
///
/// Every body is decompressed, so a CRC mismatch surfaces as `ReadArchive`.
pub fn list_entries(path: &Path) -> PackResult<Vec<ArchiveEntry>> {
    let mut archive = open(path)?;
    let mut entries = Vec::with_capacity(archive.len());

    for index in 0..archive.len() {
        let mut file = archive.by_index(index).map_err(|e| read_error(path, e))?;
        if file.is_dir() {
            continue;
        }

        let mut body = Vec::new();
        file.read_to_end(&mut body)
            .map_err(|e| read_error(path, format!("entry '{}': {}", file.name(), e)))?;

        entries.push(ArchiveEntry {
            name: file.name().to_string(),
            size: file.size(),
            compressed_size: file.compressed_size(),
            crc32: file.crc32(),
            compression: method_name(file.compression()),
            hash: ContentHash::from_bytes(&body),
        });
    }

    Ok(entries)
}

/// Decompressed `(name, body)` pairs in archive order
pub fn read_bodies(path: &Path) -> PackResult<Vec<(String, Vec<u8>)>> {
    let mut archive = open(path)?;
    let mut bodies = Vec::with_capacity(archive.len());

    for index in 0..archive.len() {
        let mut file = archive.by_index(index).map_err(|e| read_error(path, e))?;
        if file.is_dir() {
            continue;
        }

        let mut body = Vec::new();
        file.read_to_end(&mut body)
            .map_err(|e| read_error(path, format!("entry '{}': {}", file.name(), e)))?;
        bodies.push((file.name().to_string(), body));
    }

    Ok(bodies)
}

/// Compare the archive at `path` against `templates`
pub fn verify(templates: &TemplateSet, path: &Path) -> PackResult<VerifyReport> {
    let bodies = read_bodies(path)?;

    let mut first_body: BTreeMap<&str, &[u8]> = BTreeMap::new();
    let mut duplicated = BTreeSet::new();
    for (name, body) in &bodies {
        if first_body.contains_key(name.as_str()) {
            duplicated.insert(name.clone());
        } else {
            first_body.insert(name.as_str(), body.as_slice());
        }
    }

    let mut report = VerifyReport {
        archive: path.to_path_buf(),
        checked: bodies.len(),
        duplicated: duplicated.into_iter().collect(),
        ..VerifyReport::default()
    };

    for template in templates {
        let name = template.path().as_str();
        match first_body.get(name) {
            None => report.missing.push(name.to_string()),
            Some(body) if *body != template.content().as_bytes() => {
                report.mismatched.push(name.to_string())
            }
            Some(_) => {}
        }
    }

    report.unexpected = first_body
        .keys()
        .filter(|name| templates.get(name).is_none())
        .map(|name| name.to_string())
        .collect();

    Ok(report)
}
