// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Token-level command validation

use super::arity::ArityTable;
use super::error::ValidationError;
use super::types::{Command, CommandKind};

/// Split an input line on whitespace runs, dropping empty tokens
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Stateless checker turning a token list into a [`Command`]
#[derive(Debug, Clone, Default)]
pub struct CommandValidator {
    arity: ArityTable,
}

impl CommandValidator {
    pub fn new(arity: ArityTable) -> Self {
        Self { arity }
    }

    /// Validate one line's tokens.
    ///
    /// The command token is matched case-insensitively; argument tokens are
    /// passed through untouched.
    pub fn validate<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Command, ValidationError> {
        let first: &str = tokens
            .first()
            .ok_or_else(|| ValidationError::UnknownCommand(String::new()))?
            .as_ref();

        let kind: CommandKind = first.parse()?;
        let expected = self
            .arity
            .arity(kind)
            .ok_or_else(|| ValidationError::UnknownCommand(first.to_string()))?;

        let mismatch = || ValidationError::ArityMismatch {
            command: kind,
            expected,
            actual: tokens.len(),
        };

        if tokens.len() != expected {
            return Err(mismatch());
        }

        let args: Vec<&str> = tokens[1..].iter().map(|t| t.as_ref()).collect();
        // A custom table may disagree with the shape a command needs
        let command = match (kind, args.as_slice()) {
            (CommandKind::Set, [key, value]) => Command::Set {
                key: key.to_string(),
                value: value.to_string(),
            },
            (CommandKind::Get, [key]) => Command::Get {
                key: key.to_string(),
            },
            (CommandKind::Unset, [key]) => Command::Unset {
                key: key.to_string(),
            },
            (CommandKind::Counts, [value]) => Command::Counts {
                value: value.to_string(),
            },
            (CommandKind::Find, [value]) => Command::Find {
                value: value.to_string(),
            },
            (CommandKind::End, []) => Command::End,
            (CommandKind::Begin, []) => Command::Begin,
            (CommandKind::Rollback, []) => Command::Rollback,
            (CommandKind::Commit, []) => Command::Commit,
            _ => return Err(mismatch()),
        };

        Ok(command)
    }

    /// Tokenize and validate a raw input line
    pub fn validate_line(&self, line: &str) -> Result<Command, ValidationError> {
        self.validate(&tokenize(line))
    }
}
