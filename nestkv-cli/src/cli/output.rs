// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Result formatting for CLI output

use colored::*;
use nestkv::StepOutcome;
use std::io::{self, IsTerminal};

use super::commands::OutputFormat;

/// A rendered line and the stream it belongs on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Stdout(String),
    Stderr(String),
}

/// Turns step outcomes into printable lines
#[derive(Debug, Clone, Copy)]
pub struct ResultFormatter {
    format: OutputFormat,
    /// Colorize diagnostics; they go to stderr, so follow its TTY state
    color: bool,
}

impl ResultFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: io::stderr().is_terminal(),
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Render one outcome; silent outcomes render nothing
    pub fn render(&self, outcome: &StepOutcome) -> Option<Rendered> {
        match self.format {
            OutputFormat::Text => self.render_text(outcome),
            OutputFormat::Json => Self::render_json(outcome),
        }
    }

    fn render_text(&self, outcome: &StepOutcome) -> Option<Rendered> {
        let message = outcome.message()?;
        if outcome.is_error() {
            let text = if self.color {
                message.red().to_string()
            } else {
                message.to_string()
            };
            Some(Rendered::Stderr(text))
        } else {
            Some(Rendered::Stdout(message.to_string()))
        }
    }

    fn render_json(outcome: &StepOutcome) -> Option<Rendered> {
        // Keep the line count equal to text mode
        let message = outcome.message()?;

        let mut json = serde_json::to_value(outcome).unwrap_or_else(|_| {
            serde_json::json!({"outcome": "error", "value": "Could not serialize outcome"})
        });
        if outcome.is_error() {
            if let serde_json::Value::Object(map) = &mut json {
                map.insert("message".to_string(), serde_json::json!(message));
            }
        }

        Some(Rendered::Stdout(json.to_string()))
    }
}
