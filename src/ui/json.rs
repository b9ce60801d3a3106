//! NDJSON events for `--json` output.
//!
//! Every line on stdout is one JSON object with an `event` field.

use serde::Serialize;
use std::io::{self, Write};

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event emitted once per archive entry (written, listed or checked).
#[derive(Debug, Clone, Serialize)]
pub struct EntryEvent<'a, T: Serialize> {
    pub event: &'static str,
    pub command: &'a str,
    #[serde(flatten)]
    pub entry: T,
}

impl<'a, T: Serialize> EntryEvent<'a, T> {
    pub fn new(command: &'a str, entry: T) -> Self {
        Self {
            event: "entry",
            command,
            entry,
        }
    }
}

/// Event emitted when a command completes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a, T: Serialize> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<'a, T: Serialize> CompleteEvent<'a, T> {
    pub fn new(command: &'a str, success: bool, data: T) -> Self {
        Self {
            event: "complete",
            command,
            success,
            data,
        }
    }
}

/// Event emitted when an error occurs.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub code: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            code,
            message: message.into(),
        }
    }
}

/// Write a typed event to a custom writer.
pub fn write_event<T: Serialize, W: Write>(out: &mut W, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Emit a typed event as NDJSON to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}
