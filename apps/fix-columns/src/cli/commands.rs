//! # CLI Commands
//! A module for all the commands that can be run from the CLI

use std::path::PathBuf;

use clap::{Args, Subcommand};

use super::routines::input::InputFormat;

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// File to read records from (default: stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Shape of the input
    #[arg(short, long, value_enum, default_value_t = InputFormat::Auto)]
    pub format: InputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Renames reserved columns in JSON records so they can be loaded into the store
    Fix {
        #[command(flatten)]
        input: InputArgs,

        /// File to write the records to (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output. Ignored for NDJSON
        #[arg(long)]
        pretty: bool,
    },
    /// Lists the records holding reserved columns and fails if there are any
    Check {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Prints the reserved column names
    Reserved {
        /// Print a JSON array instead of one name per line
        #[arg(long)]
        json: bool,
    },
}
