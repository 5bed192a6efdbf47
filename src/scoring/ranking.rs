// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering: how consolidated results get sorted.
//!
//! Rank dominates, but ties are common - every primary-title match in a
//! plain search carries the same base rank - so the tie-breaks below do the
//! visible ordering work more often than the rank itself.

use std::cmp::Ordering;

use crate::types::ConsolidatedResult;

/// Compare two consolidated results for ranking.
///
/// Sort order:
/// 1. **Rank** - descending (boosts and fuzzy multipliers already applied)
/// 2. **Match kind** - primary-title matches before alternative-only
/// 3. **Matched alternative count** - descending
/// 4. **Code** - ascending, for absolute determinism
pub fn compare_results(a: &ConsolidatedResult, b: &ConsolidatedResult) -> Ordering {
    b.rank
        .total_cmp(&a.rank)
        .then_with(|| a.is_alternative_match.cmp(&b.is_alternative_match))
        .then_with(|| {
            b.matched_alternative_titles
                .len()
                .cmp(&a.matched_alternative_titles.len())
        })
        .then_with(|| a.code.cmp(&b.code))
}
