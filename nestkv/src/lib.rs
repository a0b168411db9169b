// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! NestKV - An in-memory key-value interpreter with nested transactions
//!
//! NestKV interprets a small, fixed command language over a transient
//! string-to-string store. Transactions nest without limit: ROLLBACK discards
//! only the innermost transaction, and COMMIT folds the innermost transaction
//! into its (possibly still uncommitted) parent.
//!
//! # Commands
//!
//! | Command            | Effect                                      |
//! |--------------------|---------------------------------------------|
//! | `SET key value`    | store `value` under `key`                   |
//! | `GET key`          | print the value, or `NULL`                  |
//! | `UNSET key`        | remove `key` (no-op if absent)              |
//! | `COUNTS value`     | print how many keys hold `value`            |
//! | `FIND value`       | print keys holding `value`, comma-separated |
//! | `BEGIN`            | open a nested transaction                   |
//! | `ROLLBACK`         | discard the innermost transaction           |
//! | `COMMIT`           | fold the innermost transaction into its parent |
//! | `END`              | end the session                             |
//!
//! # Usage
//!
//! ```ignore
//! use nestkv::{StepOutcome, TransactionEngine};
//!
//! let mut engine = TransactionEngine::new();
//! assert_eq!(engine.step("SET a 10"), StepOutcome::Silent);
//! assert_eq!(engine.step("GET a"), StepOutcome::Printed("10".into()));
//! assert_eq!(engine.step("END"), StepOutcome::Terminate);
//! ```
//!
//! The engine never reads input or prints; see the `nestkv-cli` crate for the
//! interactive console.

pub mod command;
pub mod engine;
pub mod storage;
pub mod txn;

pub use command::{tokenize, ArityTable, Command, CommandKind, CommandValidator, ValidationError};
pub use engine::{
    EngineConfig, EngineError, StepOutcome, TransactionEngine, NO_ACTIVE_TRANSACTION_MESSAGE,
    VALIDATION_FAILED_MESSAGE,
};
pub use storage::Store;
pub use txn::{TransactionError, TransactionStack};

/// NestKV version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
