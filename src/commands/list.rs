use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use exercise_pack::config::LoadedConfig;
use exercise_pack::list_entries;

use crate::ui::json::{emit_event, CompleteEvent, EntryEvent, StartEvent};
use crate::ui::output::Printer;

#[derive(Debug, Serialize)]
struct ListSummary {
    archive: PathBuf,
    entries: usize,
    total_bytes: u64,
}

pub fn cmd_list(archive: Option<&Path>, loaded: &LoadedConfig, printer: &Printer) -> Result<()> {
    let archive = archive.unwrap_or(loaded.config.output.path.as_path());

    if printer.json() {
        emit_event(&StartEvent::new("list"))?;
    }

    let entries = list_entries(archive)?;
    let total_bytes: u64 = entries.iter().map(|e| e.size).sum();

    if printer.json() {
        for entry in &entries {
            emit_event(&EntryEvent::new("list", entry))?;
        }
        emit_event(&CompleteEvent::new(
            "list",
            true,
            ListSummary {
                archive: archive.to_path_buf(),
                entries: entries.len(),
                total_bytes,
            },
        ))?;
        return Ok(());
    }

    printer.line(format!("Archive: {}", archive.display()));
    for entry in &entries {
        if printer.verbose() > 0 {
            printer.line(format!(
                "{:>9}  {:>9}  {:<8} {}  {}",
                entry.size,
                entry.compressed_size,
                entry.compression,
                entry.hash.short(),
                entry.name
            ));
        } else {
            printer.line(format!("{:>9}  {}", entry.size, entry.name));
        }
    }
    printer.line(format!("{} entries, {} bytes", entries.len(), total_bytes));

    Ok(())
}
