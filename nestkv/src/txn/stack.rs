// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Stack of store snapshots, one per open transaction

use crate::storage::Store;

use super::error::TransactionError;

/// Ordered stack of stores, base scope first.
///
/// The working (top) store is held apart from the snapshots beneath it so
/// that the stack can never be empty. `snapshots[i]` is the state the scope
/// at depth `i` had when the transaction at depth `i + 1` began.
#[derive(Debug, Clone, Default)]
pub struct TransactionStack {
    current: Store,
    snapshots: Vec<Store>,
}

impl TransactionStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `base` as the non-transactional store
    pub fn with_base(base: Store) -> Self {
        Self {
            current: base,
            snapshots: Vec::new(),
        }
    }

    /// Number of open transactions; 0 means none
    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }

    /// The store visible to reads and writes
    pub fn current(&self) -> &Store {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut Store {
        &mut self.current
    }

    /// Open a nested transaction over a full copy of the current store.
    ///
    /// Returns the new depth.
    pub fn begin(&mut self) -> usize {
        self.snapshots.push(self.current.clone());
        self.depth()
    }

    /// Discard the innermost transaction's changes.
    ///
    /// Returns the new depth.
    pub fn rollback(&mut self) -> Result<usize, TransactionError> {
        let parent = self
            .snapshots
            .pop()
            .ok_or(TransactionError::NoActiveTransaction)?;
        self.current = parent;
        Ok(self.depth())
    }

    /// Fold the innermost transaction into its parent scope.
    ///
    /// The parent's state is replaced wholesale by the working copy, not
    /// merged key by key. Returns the new depth.
    pub fn commit(&mut self) -> Result<usize, TransactionError> {
        self.snapshots
            .pop()
            .ok_or(TransactionError::NoActiveTransaction)?;
        Ok(self.depth())
    }

    /// Consume the stack, yielding the visible store
    pub fn into_current(self) -> Store {
        self.current
    }
}
