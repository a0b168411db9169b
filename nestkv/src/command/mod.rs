// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Command model and validation
//!
//! Input lines are split into tokens with [`tokenize`] and checked by a
//! [`CommandValidator`] against an [`ArityTable`] before anything touches a
//! store. Validation is pure: a rejected line never changes engine state.

pub mod arity;
pub mod error;
pub mod types;
pub mod validator;

pub use arity::ArityTable;
pub use error::ValidationError;
pub use types::{Command, CommandKind};
pub use validator::{tokenize, CommandValidator};
