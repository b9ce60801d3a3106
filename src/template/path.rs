//! Entry Path Value Object
//!
//! A validated archive-relative path:
//! - Forward-slash separated, relative (no leading `/`, no drive prefix)
//! - No traversal (`..`) or current-dir (`.`) segments
//! - No empty segments, backslashes or NUL bytes

use std::fmt;

/// Error when entry path validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Path is empty
    Empty,
    /// Path is absolute or carries a drive prefix
    AbsoluteNotAllowed,
    /// Path contains a `..` segment
    ContainsTraversal,
    /// Path uses `\` as a separator
    Backslash,
    /// Path has an empty or `.` segment, a trailing slash, or a NUL byte
    InvalidSegment(String),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::Empty => write!(f, "path is empty"),
            PathError::AbsoluteNotAllowed => {
                write!(f, "absolute paths are not allowed")
            }
            PathError::ContainsTraversal => {
                write!(f, "path contains traversal segment '..'")
            }
            PathError::Backslash => {
                write!(f, "path must use '/' as separator")
            }
            PathError::InvalidSegment(segment) => {
                write!(f, "invalid path segment '{}'", segment.escape_debug())
            }
        }
    }
}

impl std::error::Error for PathError {}

/// A validated entry path inside an archive
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryPath(String);

impl EntryPath {
    /// Validate `raw` as an archive-relative path
    pub fn parse(raw: &str) -> Result<Self, PathError> {
        if raw.is_empty() {
            return Err(PathError::Empty);
        }

        if raw.starts_with('/') || has_drive_prefix(raw) {
            return Err(PathError::AbsoluteNotAllowed);
        }

        if raw.contains('\\') {
            return Err(PathError::Backslash);
        }

        for segment in raw.split('/') {
            match segment {
                ".." => return Err(PathError::ContainsTraversal),
                "" | "." => return Err(PathError::InvalidSegment(segment.to_string())),
                s if s.contains('\0') => return Err(PathError::InvalidSegment(s.to_string())),
                _ => {}
            }
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `self` lies inside the directory named by `dir`
    pub fn is_inside(&self, dir: &EntryPath) -> bool {
        self.0
            .strip_prefix(dir.as_str())
            .is_some_and(|rest| rest.starts_with('/'))
    }
}

fn has_drive_prefix(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

impl fmt::Display for EntryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
