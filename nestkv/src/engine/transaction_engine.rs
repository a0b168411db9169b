// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Transaction engine implementation

use crate::command::{tokenize, Command, CommandValidator};
use crate::storage::Store;
use crate::txn::TransactionStack;

use super::config::EngineConfig;
use super::error::EngineError;
use super::outcome::StepOutcome;

/// Interpreter over a stack of transaction scopes.
///
/// Commands always act on the innermost open scope. After END (or
/// [`TransactionEngine::terminate`]) every further line is refused.
#[derive(Debug, Clone)]
pub struct TransactionEngine {
    validator: CommandValidator,
    null_literal: String,
    find_separator: String,
    stack: TransactionStack,
    terminated: bool,
}

impl TransactionEngine {
    /// Create an engine with the default command set and an empty store
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_store(config, Store::new())
    }

    /// Create an engine whose base scope starts out as `base`
    pub fn with_store(config: EngineConfig, base: Store) -> Self {
        let EngineConfig {
            arity,
            null_literal,
            find_separator,
        } = config;
        Self {
            validator: CommandValidator::new(arity),
            null_literal,
            find_separator,
            stack: TransactionStack::with_base(base),
            terminated: false,
        }
    }

    /// Number of open transactions
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// The store commands currently read from and write to
    pub fn current(&self) -> &Store {
        self.stack.current()
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// End the session from outside, e.g. on end-of-input or an interrupt.
    ///
    /// Open transactions are neither committed nor rolled back; the visible
    /// store stays whatever the innermost scope held.
    pub fn terminate(&mut self) {
        if !self.terminated {
            log::info!(
                "Session terminated at transaction depth {}",
                self.stack.depth()
            );
            self.terminated = true;
        }
    }

    /// Process one raw input line
    pub fn step(&mut self, line: &str) -> StepOutcome {
        match self.execute_line(line) {
            Ok(outcome) => outcome,
            Err(EngineError::Validation(e)) => StepOutcome::ValidationFailed(e),
            Err(EngineError::Transaction(e)) => StepOutcome::TransactionError(e),
            Err(EngineError::Terminated) => StepOutcome::Terminate,
        }
    }

    /// Validate and run one raw input line, surfacing failures as errors
    pub fn execute_line(&mut self, line: &str) -> Result<StepOutcome, EngineError> {
        if self.terminated {
            return Err(EngineError::Terminated);
        }

        let command = self
            .validator
            .validate(&tokenize(line))
            .inspect_err(|e| log::warn!("Rejected input {:?}: {}", line.trim(), e))?;

        self.execute(command)
    }

    /// Run an already validated command against the innermost scope
    pub fn execute(&mut self, command: Command) -> Result<StepOutcome, EngineError> {
        if self.terminated {
            return Err(EngineError::Terminated);
        }

        log::trace!("Executing {} at depth {}", command.kind(), self.depth());

        let outcome = match command {
            Command::Set { key, value } => {
                self.stack.current_mut().set(key, value);
                StepOutcome::Silent
            }
            Command::Get { key } => {
                let value = self
                    .current()
                    .get(&key)
                    .unwrap_or(self.null_literal.as_str())
                    .to_string();
                StepOutcome::Printed(value)
            }
            Command::Unset { key } => {
                self.stack.current_mut().unset(&key);
                StepOutcome::Silent
            }
            Command::Counts { value } => {
                StepOutcome::Printed(self.current().count_by_value(&value).to_string())
            }
            Command::Find { value } => {
                let keys = self.current().find_by_value(&value);
                StepOutcome::Printed(keys.join(self.find_separator.as_str()))
            }
            Command::Begin => {
                let depth = self.stack.begin();
                log::debug!("Began transaction, depth now {}", depth);
                StepOutcome::Silent
            }
            Command::Rollback => {
                let depth = self.stack.rollback().inspect_err(|e| {
                    log::warn!("ROLLBACK refused: {}", e);
                })?;
                log::debug!("Rolled back transaction, depth now {}", depth);
                StepOutcome::Silent
            }
            Command::Commit => {
                let depth = self.stack.commit().inspect_err(|e| {
                    log::warn!("COMMIT refused: {}", e);
                })?;
                log::debug!("Committed transaction, depth now {}", depth);
                StepOutcome::Silent
            }
            Command::End => {
                self.terminate();
                StepOutcome::Terminate
            }
        };

        Ok(outcome)
    }

    /// Consume the engine, yielding the final visible store
    pub fn into_store(self) -> Store {
        self.stack.into_current()
    }
}

impl Default for TransactionEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{ArityTable, CommandKind, ValidationError};
    use crate::txn::TransactionError;

    fn printed(text: &str) -> StepOutcome {
        StepOutcome::Printed(text.to_string())
    }

    #[test]
    fn test_set_get_unset() {
        let mut engine = TransactionEngine::new();
        assert_eq!(engine.step("SET a 10"), StepOutcome::Silent);
        assert_eq!(engine.step("GET a"), printed("10"));
        assert_eq!(engine.step("UNSET a"), StepOutcome::Silent);
        assert_eq!(engine.step("GET a"), printed("NULL"));
    }

    #[test]
    fn test_counts_and_find() {
        let mut engine = TransactionEngine::new();
        engine.step("SET a 1");
        engine.step("SET b 2");
        engine.step("SET c 1");
        assert_eq!(engine.step("COUNTS 1"), printed("2"));
        assert_eq!(engine.step("COUNTS 3"), printed("0"));
        assert_eq!(engine.step("FIND 1"), printed("a, c"));
        assert_eq!(engine.step("FIND 3"), printed(""));
    }

    #[test]
    fn test_validation_leaves_state_untouched() {
        let mut engine = TransactionEngine::new();
        engine.step("SET a 1");
        assert_eq!(
            engine.step("SET onlykey"),
            StepOutcome::ValidationFailed(ValidationError::ArityMismatch {
                command: CommandKind::Set,
                expected: 3,
                actual: 2
            })
        );
        assert!(matches!(
            engine.step(""),
            StepOutcome::ValidationFailed(ValidationError::UnknownCommand(_))
        ));
        assert_eq!(engine.current().len(), 1);
        assert!(!engine.is_terminated());
    }

    #[test]
    fn test_commit_without_transaction() {
        let mut engine = TransactionEngine::new();
        assert_eq!(
            engine.step("COMMIT"),
            StepOutcome::TransactionError(TransactionError::NoActiveTransaction)
        );
        assert_eq!(
            engine.execute(Command::Rollback),
            Err(EngineError::Transaction(TransactionError::NoActiveTransaction))
        );
        assert_eq!(engine.depth(), 0);
    }

    #[test]
    fn test_execute_line_reports_errors() {
        let mut engine = TransactionEngine::new();
        assert!(matches!(
            engine.execute_line("FOO"),
            Err(EngineError::Validation(ValidationError::UnknownCommand(_)))
        ));
        assert_eq!(engine.execute_line("SET a b"), Ok(StepOutcome::Silent));
        assert_eq!(engine.execute_line("END"), Ok(StepOutcome::Terminate));
        assert_eq!(engine.execute_line("GET a"), Err(EngineError::Terminated));
    }

    #[test]
    fn test_nested_rollback() {
        let mut engine = TransactionEngine::new();
        engine.step("BEGIN");
        engine.step("SET k v1");
        engine.step("BEGIN");
        engine.step("SET k v2");
        assert_eq!(engine.depth(), 2);
        assert_eq!(engine.step("ROLLBACK"), StepOutcome::Silent);
        assert_eq!(engine.depth(), 1);
        assert_eq!(engine.step("GET k"), printed("v1"));
    }

    #[test]
    fn test_end_stops_processing() {
        let mut engine = TransactionEngine::new();
        engine.step("BEGIN");
        engine.step("SET k v");
        assert_eq!(engine.step("end"), StepOutcome::Terminate);
        assert!(engine.is_terminated());
        assert_eq!(engine.step("SET k other"), StepOutcome::Terminate);
        assert_eq!(engine.execute(Command::Begin), Err(EngineError::Terminated));
        assert_eq!(engine.current().get("k"), Some("v"));
        assert_eq!(engine.depth(), 1);
    }

    #[test]
    fn test_custom_config() {
        let config = EngineConfig::default()
            .with_null_literal("(nil)")
            .with_find_separator(" ")
            .with_arity(ArityTable::default().without(CommandKind::Counts));
        let mut engine = TransactionEngine::with_config(config);

        assert_eq!(engine.step("GET missing"), printed("(nil)"));
        engine.step("SET a x");
        engine.step("SET b x");
        assert_eq!(engine.step("FIND x"), printed("a b"));
        assert!(matches!(
            engine.step("COUNTS x"),
            StepOutcome::ValidationFailed(ValidationError::UnknownCommand(_))
        ));
    }

    #[test]
    fn test_empty_arity_table_rejects_everything() {
        let mut engine =
            TransactionEngine::with_config(EngineConfig::default().with_arity(ArityTable::empty()));

        assert!(engine.step("END").is_error());
        assert!(engine.step("SET a 1").is_error());
        assert!(!engine.is_terminated());
        assert!(engine.current().is_empty());
    }

    #[test]
    fn test_with_store_and_into_store() {
        let base: Store = [("seed", "1")].into_iter().collect();
        let mut engine = TransactionEngine::with_store(EngineConfig::default(), base);
        assert_eq!(engine.step("GET seed"), printed("1"));
        engine.step("SET extra 2");
        let store = engine.into_store();
        assert_eq!(store.len(), 2);
    }
}
