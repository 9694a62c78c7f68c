//! UI/backend events and error modeling for the desktop GUI controller.

use client_core::InputError;
use shared::protocol::ClassifyResponse;

pub enum UiEvent {
    ClassifyOk(ClassifyResponse),
    Info(String),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Validation,
    Http,
    Transport,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Classify,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_ascii_lowercase();
        let category = if lower.contains("invalid")
            || lower.contains("missing")
            || lower.contains("malformed")
        {
            UiErrorCategory::Validation
        } else if lower.contains("returned status") {
            UiErrorCategory::Http
        } else if lower.contains("timeout")
            || lower.contains("connection")
            || lower.contains("network")
            || lower.contains("transport")
            || lower.contains("dns")
            || lower.contains("request failed")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Maps a local validation failure onto the message shown above the form.
pub fn input_error_message(err: &InputError) -> String {
    match err {
        InputError::MalformedJson(_) => "Invalid JSON format. Please check your input.".to_string(),
        InputError::MissingDataArray => {
            "Invalid JSON format. Input must contain a \"data\" array.".to_string()
        }
    }
}
