//! Bundled "technical interview exercise" templates
//!
//! The payload is embedded as opaque resource data. `db.json` deliberately
//! contains inconsistent records; candidates are expected to find them.

use crate::error::PackResult;

use super::TemplateSet;

/// Archive name used when no output path is configured
pub const DEFAULT_ARCHIVE_NAME: &str = "technical-interview-exercise.zip";

macro_rules! bundle {
    ($($path:literal),+ $(,)?) => {
        &[$(
            ($path, include_str!(concat!("../../templates/technical-interview-exercise/", $path))),
        )+]
    };
}

const TECHNICAL_INTERVIEW_EXERCISE: &[(&str, &str)] = bundle![
    "README.md",
    "db.json",
    "package.json",
    "pages/index.js",
    "components/ItemList.js",
    "services/api.js",
    "__tests__/ItemList.test.js",
];

/// The default template set shipped with the binary
pub fn technical_interview_exercise() -> PackResult<TemplateSet> {
    TemplateSet::from_pairs(TECHNICAL_INTERVIEW_EXERCISE.iter().copied())
}
