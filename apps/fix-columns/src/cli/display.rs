//! # Display
//! Terminal messages for the outcome of a command. Data goes to stdout, so every
//! message is written to stderr.

pub mod terminal;

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use terminal::{write_styled_line_to, StyledText};

/// Disables colours in every message once set, from `--no-ansi` or `display.no_ansi`.
pub static NO_ANSI: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub action: String,
    pub details: String,
}

impl Message {
    pub fn new(action: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            details: details.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.action.is_empty() && self.details.is_empty()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.action, self.details)
    }
}

fn styled_action(message_type: MessageType, action: &str) -> StyledText {
    let styled = StyledText::new(action.to_string());
    match message_type {
        MessageType::Info => styled.cyan().bold(),
        MessageType::Success => styled.green().bold(),
        MessageType::Error => styled.red().bold(),
    }
}

/// Writes a message line to `writer`.
pub fn write_message_to<W: std::io::Write>(
    writer: &mut W,
    message_type: MessageType,
    message: &Message,
    no_ansi: bool,
) -> std::io::Result<()> {
    write_styled_line_to(
        writer,
        &styled_action(message_type, &message.action),
        &message.details,
        no_ansi,
    )
}

pub fn show_message_wrapper(message_type: MessageType, message: Message) {
    let no_ansi = NO_ANSI.load(Ordering::Relaxed);
    // stdout carries records
    let mut stderr = std::io::stderr();
    if let Err(e) = write_message_to(&mut stderr, message_type, &message, no_ansi) {
        tracing::warn!("Failed to write message to stderr: {e}");
    }
}

macro_rules! show_message {
    ($message_type:expr, $message:expr) => {{
        let message: $crate::cli::display::Message = $message;
        tracing::debug!(action = %message.action, details = %message.details, "show_message");
        $crate::cli::display::show_message_wrapper($message_type, message);
    }};
}
