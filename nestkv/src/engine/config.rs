// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Engine configuration

use crate::command::ArityTable;

/// Literal printed by GET for a key that is not set
pub const DEFAULT_NULL_LITERAL: &str = "NULL";

/// Separator between keys printed by FIND
pub const DEFAULT_FIND_SEPARATOR: &str = ", ";

/// Settings fixed for the lifetime of a [`super::TransactionEngine`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Accepted commands and their token counts
    pub arity: ArityTable,
    pub null_literal: String,
    pub find_separator: String,
}

impl EngineConfig {
    pub fn with_arity(mut self, arity: ArityTable) -> Self {
        self.arity = arity;
        self
    }

    pub fn with_null_literal(mut self, literal: impl Into<String>) -> Self {
        self.null_literal = literal.into();
        self
    }

    pub fn with_find_separator(mut self, separator: impl Into<String>) -> Self {
        self.find_separator = separator.into();
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            arity: ArityTable::default(),
            null_literal: DEFAULT_NULL_LITERAL.to_string(),
            find_separator: DEFAULT_FIND_SEPARATOR.to_string(),
        }
    }
}
