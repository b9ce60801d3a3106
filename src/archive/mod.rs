//! Zip archive creation and inspection

mod builder;
mod inspect;

pub use builder::{build, ArchiveBuilder, BuildOptions, BuildReport, EntrySummary};
pub use inspect::{list_entries, read_bodies, verify, ArchiveEntry, VerifyReport};

use serde::{Deserialize, Serialize};
use zip::CompressionMethod;

/// How entry bodies are stored in the archive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    #[default]
    Deflate,
    Stored,
}

impl Compression {
    pub fn as_str(self) -> &'static str {
        match self {
            Compression::Deflate => "deflate",
            Compression::Stored => "stored",
        }
    }

    fn method(self) -> CompressionMethod {
        match self {
            Compression::Deflate => CompressionMethod::Deflated,
            Compression::Stored => CompressionMethod::Stored,
        }
    }
}

impl std::str::FromStr for Compression {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "deflate" | "deflated" => Ok(Compression::Deflate),
            "stored" | "store" | "none" => Ok(Compression::Stored),
            other => Err(format!(
                "unknown compression '{}' (expected 'deflate' or 'stored')",
                other
            )),
        }
    }
}

impl std::fmt::Display for Compression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
