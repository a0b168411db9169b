// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Engine error types

use thiserror::Error;

use crate::command::ValidationError;
use crate::txn::TransactionError;

/// Errors raised by typed command execution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] TransactionError),

    /// The session already ended; no further commands run
    #[error("Session terminated")]
    Terminated,
}
