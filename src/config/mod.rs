//! Configuration module for exercise-pack
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Explicit `--config` file
//! 3. Project config (`./exercise-pack.toml`)
//! 4. User config (`<config_dir>/exercise-pack/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    discover, discover_in, load_explicit, user_config_path, ConfigSource, ConfigWarning,
    LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{Config, OutputConfig, TemplatesConfig};
