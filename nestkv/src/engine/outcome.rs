// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Per-line results

use serde::Serialize;

use crate::command::ValidationError;
use crate::txn::TransactionError;

/// Diagnostic shown for an unknown command or a wrong token count
pub const VALIDATION_FAILED_MESSAGE: &str = "Unknown command or wrong number of arguments";

/// Diagnostic shown for COMMIT or ROLLBACK outside a transaction
pub const NO_ACTIVE_TRANSACTION_MESSAGE: &str = "No active transaction";

/// What happened when one input line was processed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum StepOutcome {
    /// A value to show: GET, COUNTS or FIND. May be empty.
    Printed(String),
    /// Executed with nothing to show
    Silent,
    /// Rejected before dispatch; state unchanged
    ValidationFailed(ValidationError),
    /// COMMIT or ROLLBACK with no open transaction; state unchanged
    TransactionError(TransactionError),
    /// The session is over
    Terminate,
}

impl StepOutcome {
    /// Text a front end should surface for this outcome, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            StepOutcome::Printed(text) => Some(text),
            StepOutcome::ValidationFailed(_) => Some(VALIDATION_FAILED_MESSAGE),
            StepOutcome::TransactionError(TransactionError::NoActiveTransaction) => {
                Some(NO_ACTIVE_TRANSACTION_MESSAGE)
            }
            StepOutcome::Silent | StepOutcome::Terminate => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            StepOutcome::ValidationFailed(_) | StepOutcome::TransactionError(_)
        )
    }

    pub fn is_terminate(&self) -> bool {
        matches!(self, StepOutcome::Terminate)
    }
}
