//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::archive::{BuildOptions, Compression};
use crate::template::bundled::DEFAULT_ARCHIVE_NAME;

/// Output archive configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    #[serde(default = "default_true")]
    pub overwrite: bool,

    #[serde(default)]
    pub compression: Compression,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            overwrite: true,
            compression: Compression::default(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_ARCHIVE_NAME)
}

fn default_true() -> bool {
    true
}

/// Template source configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplatesConfig {
    /// Directory to archive instead of the bundled templates
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub templates: TemplatesConfig,
}

impl Config {
    /// Build options derived from the `[output]` section
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            compression: self.output.compression,
            overwrite: self.output.overwrite,
        }
    }

    /// Resolve `templates.dir` against the directory holding the config file.
    ///
    /// `output.path` stays relative to the working directory.
    pub(crate) fn resolve_relative_to(&mut self, base: &Path) {
        if let Some(dir) = self.templates.dir.as_mut() {
            if dir.is_relative() {
                *dir = base.join(&*dir);
            }
        }
    }
}
