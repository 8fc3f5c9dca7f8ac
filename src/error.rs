// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Errors raised while building or maintaining reference data.
//!
//! The date pipeline itself is total and never fails; only edits to the
//! leap-second table and loading of external reference data can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReferenceError {
    /// Leap-second epochs must be strictly increasing.
    #[error("leap-second epoch {epoch} ms is not after the previous entry at {previous} ms")]
    NonIncreasingEpoch { previous: i64, epoch: i64 },

    #[error("leap-second table has no entries")]
    EmptyLeapSecondTable,

    #[cfg(feature = "serde")]
    #[error("invalid reference data JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type MarsClockResult<T> = std::result::Result<T, ReferenceError>;
