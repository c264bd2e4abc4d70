// Copyright 2025 the Broadleaf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Precondition errors reported by tree mutation.

use thiserror::Error;

/// Errors returned by [`Tree::insert`](crate::Tree::insert) and
/// [`Tree::remove`](crate::Tree::remove).
///
/// These report caller precondition violations; the tree is left unchanged
/// when one is returned. Internal consistency violations are bugs in the
/// tree itself and panic instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The key is already present in the tree.
    #[error("the object is already in the tree")]
    AlreadyInTree,
    /// The key is not present in the tree.
    #[error("the object is not in the tree")]
    NotInTree,
}
