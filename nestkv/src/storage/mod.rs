// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Storage layer
//!
//! A single [`Store`] holds the working state of one transaction scope.
//! It has no notion of transactions; scoping is layered on top by
//! [`crate::txn::TransactionStack`].

pub mod store;

pub use store::Store;
