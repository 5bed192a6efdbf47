// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Candidate retrieval: exact stage with a trigram fallback.
//!
//! The exact stage is cheap and precise, so it always runs first. Its
//! candidate count decides the path:
//!
//! - enough candidates (>= `MIN_EXACT_CANDIDATES`) → return them as-is;
//! - too few → broaden: keep the exact hits as seeds and sweep the catalog
//!   by trigram similarity, keeping everything above the similarity floor,
//!   best first. The broadened pool then goes through re-scoring.
//!
//! Both paths cap at `MAX_CANDIDATES` rows, so per-request compute is
//! bounded regardless of catalog size. The one cancellation point sits
//! between the stages: if the caller's deadline has already expired, the
//! sweep never starts.

use std::collections::HashSet;
use std::time::Instant;

use tracing::debug;

use crate::catalog::{Catalog, Candidate};
use crate::error::{EngineError, EngineResult};
use crate::fuzzy::TrigramSet;
use crate::scoring::{MAX_CANDIDATES, MIN_EXACT_CANDIDATES, TRIGRAM_SIMILARITY_FLOOR};
use crate::types::MatchSite;

/// A member of the broadened fuzzy pool.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyCandidate {
    pub index: usize,
    /// The exact-stage match site, for candidates seeded from that stage.
    pub seed_site: Option<MatchSite>,
    /// Trigram similarity against the query (seeds carry 1.0).
    pub similarity: f64,
}

/// Which stage produced the candidate set.
#[derive(Debug)]
pub enum CandidatePool {
    /// The exact stage found enough; no approximate matching needed.
    Exact(Vec<Candidate>),
    /// The broadened pool for the fuzzy path: exact seeds plus the trigram
    /// sweep, capped, best first.
    Fuzzy(Vec<FuzzyCandidate>),
}

/// Retrieve candidates for a normalized query.
pub fn retrieve(
    catalog: &Catalog,
    query_norm: &str,
    deadline: Option<Instant>,
) -> EngineResult<CandidatePool> {
    let exact = catalog.find_by_free_text(query_norm, MAX_CANDIDATES);
    if exact.len() >= MIN_EXACT_CANDIDATES {
        debug!(candidates = exact.len(), "exact stage sufficient");
        return Ok(CandidatePool::Exact(exact));
    }

    // The sweep is the expensive part; honor an already-expired caller
    // deadline before starting it.
    if let Some(deadline) = deadline {
        if Instant::now() >= deadline {
            return Err(EngineError::DeadlineExceeded);
        }
    }

    debug!(
        candidates = exact.len(),
        "exact stage insufficient, broadening via trigram sweep"
    );

    let seeded: HashSet<usize> = exact.iter().map(|candidate| candidate.index).collect();
    let mut pool: Vec<FuzzyCandidate> = exact
        .iter()
        .map(|candidate| FuzzyCandidate {
            index: candidate.index,
            seed_site: Some(candidate.site),
            similarity: 1.0,
        })
        .collect();

    let query_set = TrigramSet::new(query_norm);
    let mut swept: Vec<FuzzyCandidate> = (0..catalog.len())
        .filter(|index| !seeded.contains(index))
        .filter_map(|index| {
            let similarity = query_set.similarity(catalog.trigram_set(index));
            (similarity > TRIGRAM_SIMILARITY_FLOOR).then_some(FuzzyCandidate {
                index,
                seed_site: None,
                similarity,
            })
        })
        .collect();
    // Similarity descending; index ascending is code ascending, which keeps
    // the cut at the cap deterministic.
    swept.sort_by(|a, b| {
        b.similarity
            .total_cmp(&a.similarity)
            .then_with(|| a.index.cmp(&b.index))
    });

    pool.extend(swept);
    pool.truncate(MAX_CANDIDATES);
    debug!(candidates = pool.len(), "fuzzy pool assembled");
    Ok(CandidatePool::Fuzzy(pool))
}
