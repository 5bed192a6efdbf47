// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Consolidation: raw matches → one ranked result per occupation code.
//!
//! An occupation appears at most once in search results. Sounds obvious, but
//! it is easy to lose when a code matches through both its primary title and
//! several alternatives. The merge map here is keyed by record index alone -
//! never a composite key - which enforces the invariant structurally.
//!
//! Merge rules when a code shows up more than once:
//! 1. the best base rank wins (a primary-title path beats alternative-only);
//! 2. matched alternative titles are unioned, input order preserved;
//! 3. the best fuzzy multiplier wins.
//!
//! After merging, sector boost and filter apply, then the final sort and
//! pagination.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::scoring::{
    compare_results, SectorBoost, ALTERNATIVE_TITLE_RANK, PRIMARY_TITLE_RANK,
    SECTOR_FILTER_MIN_PERCENT, TOP_INDUSTRIES_LIMIT,
};
use crate::snapshot::Snapshot;
use crate::types::{ConsolidatedResult, GroupRef, MatchSite, Page, SearchQuery};

use super::rescore::ScoredCandidate;

/// Accumulated state for one occupation code during the merge.
#[derive(Debug)]
struct Merged {
    base: f64,
    is_alternative: bool,
    matched_alternatives: Vec<String>,
    multiplier: f64,
}

/// Merge, boost, filter, sort, and paginate the scored candidates.
pub fn consolidate(
    snapshot: &Snapshot,
    boost: &dyn SectorBoost,
    query: &SearchQuery,
    query_norm: &str,
    candidates: Vec<ScoredCandidate>,
) -> Page<ConsolidatedResult> {
    let catalog = &snapshot.catalog;
    let sectors = &snapshot.sectors;
    let words: Vec<&str> = query_norm.split_whitespace().collect();

    // Keyed by record index only - one entry per code, by construction.
    let mut merged: HashMap<usize, Merged> = HashMap::new();

    for candidate in candidates {
        let index = candidate.index;
        let record = catalog.record(index);
        let title_norm = catalog.title_norm(index);

        let title_is_primary = words.iter().all(|word| title_norm.contains(word))
            || candidate.site == MatchSite::PrimaryTitle;

        let matched_alternatives: Vec<String> = record
            .alternative_titles
            .iter()
            .zip(catalog.alt_norm(index))
            .filter(|(_, alt_norm)| {
                words.iter().all(|word| alt_norm.contains(word))
                    || query_norm.contains(alt_norm.as_str())
                    || alt_norm.contains(query_norm)
            })
            .map(|(alt, _)| alt.clone())
            .collect();

        let is_alternative = !title_is_primary && !matched_alternatives.is_empty();
        let base = if is_alternative {
            ALTERNATIVE_TITLE_RANK
        } else {
            PRIMARY_TITLE_RANK
        };

        match merged.entry(index) {
            Entry::Occupied(mut slot) => {
                let entry = slot.get_mut();
                if base > entry.base {
                    entry.base = base;
                    entry.is_alternative = is_alternative;
                }
                for alt in matched_alternatives {
                    if !entry.matched_alternatives.contains(&alt) {
                        entry.matched_alternatives.push(alt);
                    }
                }
                if candidate.multiplier > entry.multiplier {
                    entry.multiplier = candidate.multiplier;
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(Merged {
                    base,
                    is_alternative,
                    matched_alternatives,
                    multiplier: candidate.multiplier,
                });
            }
        }
    }

    let mut results: Vec<ConsolidatedResult> = Vec::with_capacity(merged.len());
    for (index, entry) in merged {
        let record = catalog.record(index);
        let code = &record.code;

        let mut rank = entry.base * entry.multiplier;
        let mut sector_distribution = None;
        if let Some(sector) = query.sector.as_deref() {
            if let Some(row) = sectors.entry_for(code, sector) {
                sector_distribution = Some(row.percentage);
                rank *= boost.factor(row.percentage);
            }
            // Low-distribution drop; absent rows count as zero
            if !query.show_all
                && sectors.percentage_for(code, sector) < SECTOR_FILTER_MIN_PERCENT
            {
                continue;
            }
        }

        let (minor, major) = catalog.hierarchy_for(code);
        results.push(ConsolidatedResult {
            code: code.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            matched_alternative_titles: entry.matched_alternatives,
            is_alternative_match: entry.is_alternative,
            rank,
            sector_distribution,
            top_industries: sectors.top_industries_for(code, TOP_INDUSTRIES_LIMIT),
            major_group: major.map(|group| GroupRef {
                code: group.code.clone(),
                title: group.title.clone(),
            }),
            minor_group: minor.map(|group| GroupRef {
                code: group.code.clone(),
                title: group.title.clone(),
            }),
        });
    }

    results.sort_by(compare_results);

    let total_count = results.len();
    let total_pages = total_count.div_ceil(query.page_size);
    let offset = (query.page - 1) * query.page_size;
    let items: Vec<ConsolidatedResult> = results
        .into_iter()
        .skip(offset)
        .take(query.page_size)
        .collect();

    Page {
        items,
        total_count,
        current_page: query.page,
        total_pages,
        query: query.free_text.clone(),
    }
}
