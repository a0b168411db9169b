// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Command validation errors

use serde::Serialize;
use thiserror::Error;

use super::types::CommandKind;

/// Reasons a token list is rejected before dispatch
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    /// Empty line, or a command token outside the known set
    #[error("Unknown command: '{0}'")]
    UnknownCommand(String),

    /// Token count (command token included) differs from the command's arity
    #[error("Wrong number of arguments for {command}: expected {expected} tokens, got {actual}")]
    ArityMismatch {
        command: CommandKind,
        expected: usize,
        actual: usize,
    },
}
