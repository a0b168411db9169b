// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Nested transaction scoping
//!
//! Transactions nest without limit. Each BEGIN snapshots the visible store,
//! ROLLBACK restores the snapshot taken by the matching BEGIN, and COMMIT
//! makes the working copy the parent's state (folding it into any enclosing,
//! still uncommitted transaction).

pub mod error;
pub mod stack;

pub use error::TransactionError;
pub use stack::TransactionStack;
