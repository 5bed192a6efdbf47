// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine error taxonomy.
//!
//! Every stage returns explicit `Result`s; nothing is swallowed and nothing
//! retries. Two things are deliberately NOT errors:
//!
//! - a query too short to search returns the browse response;
//! - a sector with no distribution rows returns an empty top-occupations
//!   list.
//!
//! Consolidation and ranking never fail either - rows with missing optional
//! fields degrade to absent/empty.

use thiserror::Error;

use crate::source::SourceError;

/// Errors surfaced by the engine's query operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required caller parameter was absent (4xx-equivalent).
    #[error("missing required parameter: {name}")]
    MissingParameter { name: &'static str },

    /// Code lookup for a nonexistent occupation.
    #[error("occupation code not found: {code}")]
    NotFound { code: String },

    /// A code that does not match the `NN-NNNN.NN` format.
    #[error("invalid occupation code: {value:?}")]
    InvalidCode { value: String },

    /// Catalog or distribution source unreachable or unreadable
    /// (5xx-equivalent; no partial results).
    #[error("data source unavailable: {0}")]
    Upstream(#[from] SourceError),

    /// The caller-supplied deadline had already expired before the fuzzy
    /// stage would have run.
    #[error("caller deadline expired before fuzzy matching")]
    DeadlineExceeded,
}

impl EngineError {
    /// True for errors caused by caller input rather than engine state.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            EngineError::MissingParameter { .. }
                | EngineError::NotFound { .. }
                | EngineError::InvalidCode { .. }
        )
    }
}

/// Convenience result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
