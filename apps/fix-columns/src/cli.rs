#[macro_use]
pub(crate) mod display;

pub mod commands;
pub mod logger;
pub mod routines;
pub mod settings;

use std::path::PathBuf;

use clap::Parser;
use commands::Commands;
use routines::check::check_columns;
use routines::fix::fix_columns;
use routines::reserved::list_reserved;
use routines::{RoutineFailure, RoutineSuccess};
use settings::Settings;
use tracing::debug;

#[derive(Parser)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Settings file to use instead of ./fix-columns.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable ANSI colours in messages
    #[arg(long, global = true)]
    pub no_ansi: bool,

    #[command(subcommand)]
    pub command: Commands,
}

pub fn top_command_handler(
    settings: &Settings,
    commands: &Commands,
) -> Result<RoutineSuccess, RoutineFailure> {
    debug!(?commands, "Running command");

    match commands {
        Commands::Fix {
            input,
            output,
            pretty,
        } => fix_columns(input, output.as_ref(), *pretty || settings.output.pretty),
        Commands::Check { input } => check_columns(input),
        Commands::Reserved { json } => list_reserved(*json),
    }
}
