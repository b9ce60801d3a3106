//! Configuration loading and discovery

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PackError, PackResult};

use super::types::Config;

/// Project-level config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "exercise-pack.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Project(PathBuf),
    User(PathBuf),
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(p) | ConfigSource::Project(p) | ConfigSource::User(p) => {
                Some(p)
            }
            ConfigSource::Defaults => None,
        }
    }
}

/// Effective configuration plus everything worth telling the user about it
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
    pub warnings: Vec<ConfigWarning>,
    /// Discovered files that failed to parse and were ignored
    pub skipped: Vec<PackError>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PackResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| PackError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let mut config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PackError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if let Some(base) = path.parent() {
        config.resolve_relative_to(base);
    }

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load an explicitly requested config file; any failure is fatal
pub fn load_explicit(path: &Path) -> PackResult<LoadedConfig> {
    let (config, warnings) = load_with_warnings(path)?;
    Ok(LoadedConfig {
        config,
        source: ConfigSource::Explicit(path.to_path_buf()),
        warnings,
        skipped: Vec::new(),
    })
}

/// User-level config file (`<config_dir>/exercise-pack/config.toml`)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("exercise-pack").join("config.toml"))
}

/// Load from project config, user config, or defaults
pub fn discover(project_root: &Path) -> LoadedConfig {
    discover_in(project_root, user_config_path().as_deref())
}

/// [`discover`] with an explicit user config location
pub fn discover_in(project_root: &Path, user_config: Option<&Path>) -> LoadedConfig {
    let mut skipped = Vec::new();

    let project_config = project_root.join(PROJECT_CONFIG_FILE);
    let candidates = [
        Some((project_config.as_path(), true)),
        user_config.map(|p| (p, false)),
    ];

    for (path, is_project) in candidates.into_iter().flatten() {
        if !path.is_file() {
            continue;
        }
        match load_with_warnings(path) {
            Ok((config, warnings)) => {
                let source = if is_project {
                    ConfigSource::Project(path.to_path_buf())
                } else {
                    ConfigSource::User(path.to_path_buf())
                };
                return LoadedConfig {
                    config,
                    source,
                    warnings,
                    skipped,
                };
            }
            Err(err) => skipped.push(err),
        }
    }

    LoadedConfig {
        config: Config::default(),
        source: ConfigSource::Defaults,
        warnings: Vec::new(),
        skipped,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "output",
        "path",
        "overwrite",
        "compression",
        "templates",
        "dir",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
