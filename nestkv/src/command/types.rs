// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Command tags and validated commands

use serde::Serialize;

use super::error::ValidationError;

/// The fixed command set, independent of arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CommandKind {
    Set,
    Get,
    Unset,
    Counts,
    Find,
    End,
    Begin,
    Rollback,
    Commit,
}

impl CommandKind {
    /// All command kinds, in documentation order
    pub const ALL: [CommandKind; 9] = [
        CommandKind::Set,
        CommandKind::Get,
        CommandKind::Unset,
        CommandKind::Counts,
        CommandKind::Find,
        CommandKind::End,
        CommandKind::Begin,
        CommandKind::Rollback,
        CommandKind::Commit,
    ];

    /// Canonical upper-case spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Set => "SET",
            CommandKind::Get => "GET",
            CommandKind::Unset => "UNSET",
            CommandKind::Counts => "COUNTS",
            CommandKind::Find => "FIND",
            CommandKind::End => "END",
            CommandKind::Begin => "BEGIN",
            CommandKind::Rollback => "ROLLBACK",
            CommandKind::Commit => "COMMIT",
        }
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CommandKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SET" => Ok(CommandKind::Set),
            "GET" => Ok(CommandKind::Get),
            "UNSET" => Ok(CommandKind::Unset),
            "COUNTS" => Ok(CommandKind::Counts),
            "FIND" => Ok(CommandKind::Find),
            "END" => Ok(CommandKind::End),
            "BEGIN" => Ok(CommandKind::Begin),
            "ROLLBACK" => Ok(CommandKind::Rollback),
            "COMMIT" => Ok(CommandKind::Commit),
            _ => Err(ValidationError::UnknownCommand(s.to_string())),
        }
    }
}

/// A validated command with its arguments.
///
/// Keys and values keep the exact case they were typed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { key: String, value: String },
    Get { key: String },
    Unset { key: String },
    Counts { value: String },
    Find { value: String },
    End,
    Begin,
    Rollback,
    Commit,
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Set { .. } => CommandKind::Set,
            Command::Get { .. } => CommandKind::Get,
            Command::Unset { .. } => CommandKind::Unset,
            Command::Counts { .. } => CommandKind::Counts,
            Command::Find { .. } => CommandKind::Find,
            Command::End => CommandKind::End,
            Command::Begin => CommandKind::Begin,
            Command::Rollback => CommandKind::Rollback,
            Command::Commit => CommandKind::Commit,
        }
    }
}
