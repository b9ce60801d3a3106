use std::path::Path;

use anyhow::{bail, Result};

use exercise_pack::config::LoadedConfig;
use exercise_pack::verify;

use crate::ui::json::{emit_event, CompleteEvent, StartEvent};
use crate::ui::output::Printer;

pub fn cmd_verify(
    archive: Option<&Path>,
    templates_dir: Option<&Path>,
    loaded: &LoadedConfig,
    printer: &Printer,
) -> Result<()> {
    let config = &loaded.config;
    let archive = archive.unwrap_or(config.output.path.as_path());
    let templates_dir = templates_dir.or(config.templates.dir.as_deref());

    if printer.json() {
        emit_event(&StartEvent::new("verify"))?;
    }

    let templates = super::load_templates(templates_dir)?;
    let report = verify(&templates, archive)?;

    if printer.json() {
        emit_event(&CompleteEvent::new("verify", report.is_clean(), &report))?;
    } else if report.is_clean() {
        printer.line(format!(
            "{} {} matches {} ({} entries)",
            printer.success_icon(),
            archive.display(),
            super::templates_label(templates_dir),
            report.checked
        ));
    } else {
        let icon = printer.failure_icon();
        for name in &report.missing {
            printer.line(format!("{} missing     {}", icon, name));
        }
        for name in &report.unexpected {
            printer.line(format!("{} unexpected  {}", icon, name));
        }
        for name in &report.mismatched {
            printer.line(format!("{} mismatched  {}", icon, name));
        }
        for name in &report.duplicated {
            printer.line(format!("{} duplicated  {}", icon, name));
        }
    }

    if !report.is_clean() {
        bail!(
            "{} does not match the template set ({} problems)",
            archive.display(),
            report.problem_count()
        );
    }

    Ok(())
}
