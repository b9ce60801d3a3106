use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use exercise_pack::Compression;

/// exercise-pack - package project templates into a zip archive
#[derive(Parser, Debug)]
#[command(name = "exercise-pack")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'exercise-pack' without arguments to build the bundled exercise.")]
pub struct Cli {
    /// Output format for CI (NDJSON events on stdout)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ./exercise-pack.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the template set to a zip archive (default command)
    Build(BuildArgs),

    /// List the entries of an archive
    List {
        /// Archive to read (default: configured output path)
        archive: Option<PathBuf>,
    },

    /// Check that an archive contains exactly the template set
    Verify {
        /// Archive to check (default: configured output path)
        archive: Option<PathBuf>,

        /// Compare against this template directory instead of the bundled set
        #[arg(long, value_name = "DIR")]
        templates: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Output archive path
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Replace an existing archive
    #[arg(short, long, conflicts_with = "no_clobber")]
    pub force: bool,

    /// Fail instead of replacing an existing archive
    #[arg(long)]
    pub no_clobber: bool,

    /// Entry compression: deflate or stored
    #[arg(long, value_name = "METHOD")]
    pub compression: Option<Compression>,

    /// Archive this template directory instead of the bundled set
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,
}

impl BuildArgs {
    /// Overwrite setting requested on the command line, if any
    pub fn overwrite(&self) -> Option<bool> {
        match (self.force, self.no_clobber) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}
