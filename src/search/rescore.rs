// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy re-scoring of the broadened candidate pool.
//!
//! Each candidate is scored against three weighted fields - primary title
//! (1.0), alternative titles (0.9), description (0.7) - ignoring token
//! position. A field's raw score is 0 for substring containment, otherwise
//! the mean over query words of the best normalized edit distance to any of
//! the field's tokens. Dividing by the weight makes strong fields forgiving
//! and weak fields strict; the item keeps its best (lowest) weighted field
//! score.
//!
//! Acceptance depends on query length: very short queries get the strict
//! threshold, longer ones the lenient one. Survivors carry `1 - score` as a
//! rank multiplier into consolidation.

use crate::catalog::Catalog;
use crate::fuzzy::levenshtein::normalized_distance;
use crate::scoring::{
    FIELD_WEIGHT_ALTERNATIVES, FIELD_WEIGHT_DESCRIPTION, FIELD_WEIGHT_TITLE,
    LONG_QUERY_THRESHOLD, SHORT_QUERY_MAX_CHARS, SHORT_QUERY_THRESHOLD,
};
use crate::types::MatchSite;

use super::retrieval::FuzzyCandidate;

/// A raw match with its fuzzy rank multiplier, ready for consolidation.
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate {
    pub index: usize,
    pub site: MatchSite,
    /// In (0, 1]; multiplied into the base rank. Exact-stage results carry 1.0.
    pub multiplier: f64,
}

/// The acceptance threshold for a normalized query.
pub fn threshold_for(query_norm: &str) -> f64 {
    if query_norm.chars().count() <= SHORT_QUERY_MAX_CHARS {
        SHORT_QUERY_THRESHOLD
    } else {
        LONG_QUERY_THRESHOLD
    }
}

/// Score one field against the query. 0 = perfect fit, 1 = nothing close.
fn field_score(query_norm: &str, words: &[&str], text: &str) -> f64 {
    if text.is_empty() {
        return 1.0;
    }
    if text.contains(query_norm) {
        return 0.0;
    }
    let tokens: Vec<&str> = text.split(' ').collect();
    let total: f64 = words
        .iter()
        .map(|word| {
            tokens
                .iter()
                .map(|token| normalized_distance(word, token))
                .fold(1.0f64, f64::min)
        })
        .sum();
    total / words.len() as f64
}

/// Apply weighted-field fuzzy scoring to the pool, dropping candidates above
/// the acceptance threshold.
pub fn rescore(catalog: &Catalog, query_norm: &str, pool: &[FuzzyCandidate]) -> Vec<ScoredCandidate> {
    let threshold = threshold_for(query_norm);
    let words: Vec<&str> = query_norm.split(' ').collect();

    let mut scored = Vec::with_capacity(pool.len());
    for candidate in pool {
        let index = candidate.index;

        let title = field_score(query_norm, &words, catalog.title_norm(index));
        let alternatives = catalog
            .alt_norm(index)
            .iter()
            .map(|alt| field_score(query_norm, &words, alt))
            .fold(1.0f64, f64::min);
        let description = field_score(query_norm, &words, catalog.description_norm(index));

        // Best (lowest) weighted field wins; ties keep the stronger field
        let fields = [
            (title / FIELD_WEIGHT_TITLE, MatchSite::PrimaryTitle),
            (
                alternatives / FIELD_WEIGHT_ALTERNATIVES,
                MatchSite::AlternativeTitle,
            ),
            (description / FIELD_WEIGHT_DESCRIPTION, MatchSite::FullText),
        ];
        let (mut score, mut field_site) = fields[0];
        for (candidate_score, site) in fields.into_iter().skip(1) {
            if candidate_score < score {
                score = candidate_score;
                field_site = site;
            }
        }
        let score = score.min(1.0);

        if score > threshold {
            continue;
        }
        scored.push(ScoredCandidate {
            index,
            site: candidate.seed_site.unwrap_or(field_site),
            multiplier: 1.0 - score,
        });
    }
    scored
}
