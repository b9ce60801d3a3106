use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use exercise_pack::config::LoadedConfig;
use exercise_pack::{ArchiveBuilder, Compression};

use crate::cli::BuildArgs;
use crate::ui::json::{emit_event, CompleteEvent, EntryEvent, StartEvent};
use crate::ui::output::Printer;

#[derive(Debug, Serialize)]
struct BuildSummary {
    output: PathBuf,
    entries: usize,
    archive_bytes: u64,
    compression: Compression,
}

pub fn cmd_build(args: &BuildArgs, loaded: &LoadedConfig, printer: &Printer) -> Result<()> {
    let config = &loaded.config;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config.output.path.clone());

    let mut options = config.build_options();
    if let Some(overwrite) = args.overwrite() {
        options.overwrite = overwrite;
    }
    if let Some(compression) = args.compression {
        options.compression = compression;
    }

    if printer.json() {
        emit_event(&StartEvent::new("build"))?;
    }

    let templates_dir = args.templates.as_deref().or(config.templates.dir.as_deref());
    let templates = super::load_templates(templates_dir)?;

    printer.detail(
        1,
        format!(
            "Packing {} entries from {} ({}, {})",
            templates.len(),
            super::templates_label(templates_dir),
            options.compression,
            if options.overwrite {
                "overwrite"
            } else {
                "no-clobber"
            }
        ),
    );

    let report = ArchiveBuilder::new(options).build(&templates, &output)?;

    for entry in &report.entries {
        if printer.json() {
            emit_event(&EntryEvent::new("build", entry))?;
        } else {
            printer.detail(1, format!("  + {} ({} bytes)", entry.path, entry.size));
            printer.detail(2, format!("    {}", entry.hash));
        }
    }

    if printer.json() {
        emit_event(&CompleteEvent::new(
            "build",
            true,
            BuildSummary {
                output: report.output.clone(),
                entries: report.entries.len(),
                archive_bytes: report.archive_bytes,
                compression: report.compression,
            },
        ))?;
    } else {
        printer.line(format!(
            "{} Created {} successfully ({} entries, {} bytes).",
            printer.success_icon(),
            report.output.display(),
            report.entries.len(),
            report.archive_bytes
        ));
    }

    Ok(())
}
