#[macro_use]
mod cli;

use std::process::ExitCode;
use std::sync::atomic::Ordering;

use clap::Parser;
use cli::display::{Message, MessageType, NO_ANSI};

// Entry point for the CLI application
fn main() -> ExitCode {
    let cli_result = cli::Cli::parse();
    NO_ANSI.store(cli_result.no_ansi, Ordering::Relaxed);

    let settings = match cli::settings::read_settings(cli_result.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            show_message!(
                MessageType::Error,
                Message::new("Settings", format!("Failed to read settings: {e}"))
            );
            return ExitCode::from(1);
        }
    };

    let no_ansi = cli_result.no_ansi || settings.display.no_ansi;
    NO_ANSI.store(no_ansi, Ordering::Relaxed);

    if let Err(e) = cli::logger::setup_logging(&settings.logger, no_ansi) {
        eprintln!("{e}");
    }

    match cli::top_command_handler(&settings, &cli_result.command) {
        Ok(s) => {
            // Commands printing data to stdout return an empty message
            if !s.message.is_empty() {
                show_message!(s.message_type, s.message);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            show_message!(e.message_type, e.message);
            if let Some(err) = e.error {
                eprintln!("{err:?}");
            }
            ExitCode::from(1)
        }
    }
}
