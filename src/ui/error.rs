use exercise_pack::PackError;

use super::json::{emit_event, ErrorEvent};

/// Help text for errors where the fix is not obvious from the message
fn hint(err: &PackError) -> Option<&'static str> {
    match err {
        PackError::OutputExists { .. } => {
            Some("Pass --force to replace it, or choose another path with --output.")
        }
        PackError::Create { .. } => {
            Some("Check that the output directory exists and is writable.")
        }
        PackError::EmptyTemplateSet => Some("The template directory contains no files."),
        PackError::InvalidConfig { .. } => Some("Fix the TOML file or pass --config."),
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error, unicode: bool) -> String {
    let prefix = if unicode { "✗ Error:" } else { "[ERROR]" };
    let mut out = format!("{} {}\n", prefix, err);

    if let Some(pack) = err.downcast_ref::<PackError>() {
        if let Some(hint) = hint(pack) {
            out.push_str(&format!("  {}\n", hint));
        }
    }

    out
}

pub fn error_code(err: &anyhow::Error) -> &'static str {
    err.downcast_ref::<PackError>()
        .map(PackError::code)
        .unwrap_or("error")
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let _ = emit_event(&ErrorEvent::new(error_code(err), err.to_string()));
        return;
    }

    let caps = super::terminal::detect_capabilities();
    eprint!("{}", format_error(err, caps.supports_unicode));
}
