// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search pipeline: retrieval → re-scoring → consolidation.
//!
//! Candidate retrieval runs the exact stage first (title substring, whole
//! alternative title, full-text tokens). Only when that stage comes up short
//! does the trigram sweep broaden the pool, and only the broadened pool goes
//! through edit-distance re-scoring. Either way, raw matches flow into
//! consolidation, which owns the one-entry-per-code invariant and the final
//! ordering.

pub mod consolidate;
pub mod rescore;
pub mod retrieval;

use std::time::Instant;

use crate::error::EngineResult;
use crate::scoring::SectorBoost;
use crate::snapshot::Snapshot;
use crate::types::{ConsolidatedResult, Page, SearchQuery};
use crate::utils::normalize;

pub use rescore::ScoredCandidate;
pub use retrieval::CandidatePool;

/// Run the full pipeline for a query that is long enough to search.
///
/// The caller (the engine) has already handled the short-query browse path.
pub fn execute(
    snapshot: &Snapshot,
    boost: &dyn SectorBoost,
    query: &SearchQuery,
    deadline: Option<Instant>,
) -> EngineResult<Page<ConsolidatedResult>> {
    let query_norm = normalize(&query.free_text);

    let pool = retrieval::retrieve(&snapshot.catalog, &query_norm, deadline)?;
    let scored = match pool {
        CandidatePool::Exact(candidates) => candidates
            .into_iter()
            .map(|candidate| ScoredCandidate {
                index: candidate.index,
                site: candidate.site,
                multiplier: 1.0,
            })
            .collect(),
        CandidatePool::Fuzzy(pool) => rescore::rescore(&snapshot.catalog, &query_norm, &pool),
    };

    Ok(consolidate::consolidate(
        snapshot,
        boost,
        query,
        &query_norm,
        scored,
    ))
}
