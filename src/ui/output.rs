use std::path::Path;

use exercise_pack::config::{ConfigWarning, LoadedConfig};

use super::terminal::{detect_capabilities, TerminalCapabilities};

/// Human-facing output sink.
///
/// Results go to stdout; warnings and `-v` detail go to stderr. In JSON
/// mode nothing human-readable is printed.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    json: bool,
    verbose: u8,
    caps: TerminalCapabilities,
}

impl Printer {
    pub fn new(json: bool, verbose: u8) -> Self {
        Self {
            json,
            verbose,
            caps: detect_capabilities(),
        }
    }

    pub fn json(&self) -> bool {
        self.json
    }

    pub fn verbose(&self) -> u8 {
        self.verbose
    }

    pub fn success_icon(&self) -> &'static str {
        if self.caps.supports_unicode {
            "✓"
        } else {
            "[OK]"
        }
    }

    pub fn failure_icon(&self) -> &'static str {
        if self.caps.supports_unicode {
            "✗"
        } else {
            "[FAIL]"
        }
    }

    pub fn line(&self, message: impl AsRef<str>) {
        if !self.json {
            println!("{}", message.as_ref());
        }
    }

    /// Print to stderr when running with at least `level` `-v` flags
    pub fn detail(&self, level: u8, message: impl AsRef<str>) {
        if !self.json && self.verbose >= level {
            eprintln!("{}", message.as_ref());
        }
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        if !self.json {
            let icon = if self.caps.supports_unicode { "⚠" } else { "[WARN]" };
            eprintln!("{} {}", icon, message.as_ref());
        }
    }
}

pub fn print_config_warnings(printer: &Printer, path: &Path, warnings: &[ConfigWarning]) {
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", path.display(), line),
            None => path.display().to_string(),
        };
        printer.warn(format!("Unknown config key '{}' in {}", w.key, location));

        if let Some(suggestion) = &w.suggestion {
            printer.warn(format!("  Did you mean '{}'?", suggestion));
        }
    }
}

/// Report where configuration came from and anything odd about it
pub fn report_config(printer: &Printer, loaded: &LoadedConfig) {
    for skipped in &loaded.skipped {
        printer.warn(format!("Ignoring config: {}", skipped));
    }

    match loaded.source.path() {
        Some(path) => {
            printer.detail(2, format!("Config: {}", path.display()));
            print_config_warnings(printer, path, &loaded.warnings);
        }
        None => printer.detail(2, "Config: built-in defaults"),
    }
}
