pub mod build;
pub mod list;
pub mod verify;

use std::path::Path;

use exercise_pack::config::{self, LoadedConfig};
use exercise_pack::template::{bundled, load_dir};
use exercise_pack::{PackResult, TemplateSet};

/// Effective configuration: the `--config` file if given, else discovery from `.`
pub fn load_config(explicit: Option<&Path>) -> PackResult<LoadedConfig> {
    match explicit {
        Some(path) => config::load_explicit(path),
        None => Ok(config::discover(Path::new("."))),
    }
}

/// Template directory if one is configured, otherwise the bundled exercise
pub fn load_templates(dir: Option<&Path>) -> PackResult<TemplateSet> {
    match dir {
        Some(dir) => load_dir(dir),
        None => bundled::technical_interview_exercise(),
    }
}

/// Human-readable source name for messages
pub fn templates_label(dir: Option<&Path>) -> String {
    match dir {
        Some(dir) => dir.display().to_string(),
        None => "bundled templates".to_string(),
    }
}
