//! # Routines
//! The work behind each command. A routine returns a `RoutineSuccess` or a
//! `RoutineFailure` carrying the message to show and, for failures, the underlying error.

use super::display::{Message, MessageType};

pub mod check;
pub mod fix;
pub mod input;
pub mod reserved;

#[derive(Debug)]
pub struct RoutineSuccess {
    pub message: Message,
    pub message_type: MessageType,
}

impl RoutineSuccess {
    pub fn success(message: Message) -> Self {
        Self {
            message,
            message_type: MessageType::Success,
        }
    }

    pub fn info(message: Message) -> Self {
        Self {
            message,
            message_type: MessageType::Info,
        }
    }

    /// A success with nothing to show, for commands whose output is the data itself.
    pub fn silent() -> Self {
        Self::info(Message::new("", ""))
    }
}

#[derive(Debug)]
pub struct RoutineFailure {
    pub message: Message,
    pub message_type: MessageType,
    pub error: Option<anyhow::Error>,
}

impl RoutineFailure {
    pub fn new<F: Into<anyhow::Error>>(message: Message, error: F) -> Self {
        Self {
            message,
            message_type: MessageType::Error,
            error: Some(error.into()),
        }
    }

    /// create a RoutineFailure error without an error
    pub fn error(message: Message) -> Self {
        Self {
            message,
            message_type: MessageType::Error,
            error: None,
        }
    }
}
