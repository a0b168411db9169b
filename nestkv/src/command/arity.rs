// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Command arity configuration

use std::collections::HashMap;

use super::types::CommandKind;

/// Required token count per command, the command token included.
///
/// The table is built once and handed to a [`super::CommandValidator`];
/// it is never mutated afterwards. A command without an entry is rejected
/// as unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArityTable {
    arities: HashMap<CommandKind, usize>,
}

impl ArityTable {
    /// Table with no commands enabled
    pub fn empty() -> Self {
        Self {
            arities: HashMap::new(),
        }
    }

    /// Return a copy of this table with `kind` requiring `tokens` tokens
    pub fn with_arity(mut self, kind: CommandKind, tokens: usize) -> Self {
        self.arities.insert(kind, tokens);
        self
    }

    /// Return a copy of this table with `kind` removed
    pub fn without(mut self, kind: CommandKind) -> Self {
        self.arities.remove(&kind);
        self
    }

    pub fn arity(&self, kind: CommandKind) -> Option<usize> {
        self.arities.get(&kind).copied()
    }

    pub fn is_enabled(&self, kind: CommandKind) -> bool {
        self.arities.contains_key(&kind)
    }
}

impl Default for ArityTable {
    fn default() -> Self {
        Self::empty()
            .with_arity(CommandKind::Set, 3)
            .with_arity(CommandKind::Get, 2)
            .with_arity(CommandKind::Unset, 2)
            .with_arity(CommandKind::Counts, 2)
            .with_arity(CommandKind::Find, 2)
            .with_arity(CommandKind::End, 1)
            .with_arity(CommandKind::Begin, 1)
            .with_arity(CommandKind::Rollback, 1)
            .with_arity(CommandKind::Commit, 1)
    }
}
