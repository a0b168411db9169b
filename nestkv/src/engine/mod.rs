// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Command interpreter
//!
//! [`TransactionEngine`] consumes one input line at a time and reports a
//! [`StepOutcome`]. Exiting and rolling back are ordinary return values, so a
//! front end only needs a loop that stops on [`StepOutcome::Terminate`].

pub mod config;
pub mod error;
pub mod outcome;
pub mod transaction_engine;

pub use config::EngineConfig;
pub use error::EngineError;
pub use outcome::{StepOutcome, NO_ACTIVE_TRANSACTION_MESSAGE, VALIDATION_FAILED_MESSAGE};
pub use transaction_engine::TransactionEngine;
