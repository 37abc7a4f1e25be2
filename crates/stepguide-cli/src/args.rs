use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{NotesCommands, ShowArgs, StepsArgs};

/// Terminal viewer for step-by-step assembly instructions
///
/// Stepguide shows an ordered sequence of step images with their optional
/// descriptions from a resources directory, and keeps free-text notes per
/// step next to them.
#[derive(Parser)]
#[command(version, about, name = "stepguide")]
pub struct Args {
    /// Directory holding step images, descriptions and notes. Defaults to
    /// $XDG_DATA_HOME/stepguide/resources
    #[arg(long, global = true)]
    pub resources_dir: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Stepguide CLI
///
/// - `steps`: list the discovered steps
/// - `show`: render a single step
/// - `browse`: step through the instructions interactively
/// - `notes`: manage the notes of a step
#[derive(Subcommand)]
pub enum Commands {
    /// List all discovered steps
    #[command(alias = "ls")]
    Steps(StepsArgs),
    /// Show a single step
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Step through the instructions interactively
    #[command(alias = "b")]
    Browse,
    /// Manage notes attached to a step
    #[command(alias = "n")]
    Notes {
        #[command(subcommand)]
        command: NotesCommands,
    },
}
