//! exercise-pack CLI - package project templates into a zip archive
//!
//! Usage: exercise-pack [COMMAND]
//!
//! Commands:
//!   build   Write the template set to a zip archive (default)
//!   list    List the entries of an archive
//!   verify  Check an archive against the template set

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::{BuildArgs, Cli, Commands};
use ui::output::{report_config, Printer};

fn main() {
    let cli = Cli::parse();
    let printer = Printer::new(cli.json, cli.verbose);

    if let Err(err) = run(cli, &printer) {
        ui::error::print_error(&err, printer.json());
        std::process::exit(1);
    }
}

fn run(cli: Cli, printer: &Printer) -> Result<()> {
    let loaded = commands::load_config(cli.config.as_deref())?;
    report_config(printer, &loaded);

    match cli
        .command
        .unwrap_or_else(|| Commands::Build(BuildArgs::default()))
    {
        Commands::Build(args) => commands::build::cmd_build(&args, &loaded, printer),
        Commands::List { archive } => {
            commands::list::cmd_list(archive.as_deref(), &loaded, printer)
        }
        Commands::Verify { archive, templates } => commands::verify::cmd_verify(
            archive.as_deref(),
            templates.as_deref(),
            &loaded,
            printer,
        ),
    }
}
