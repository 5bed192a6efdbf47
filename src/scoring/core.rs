// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The constants behind search ranking.
//!
//! Base rank is bucketed by match kind, not continuous: a primary-title
//! match is 1.0, an alternative-title-only match is 0.9. Everything else -
//! fuzzy multipliers, sector boosts - scales those two numbers.
//!
//! # Constants
//!
//! | Constant | Value | Why this value |
//! |----------|-------|----------------|
//! | `PRIMARY_TITLE_RANK` | 1.0 | Canonical-title matches anchor the scale |
//! | `ALTERNATIVE_TITLE_RANK` | 0.9 | Close behind - an alternative title is still the right occupation |
//! | `MIN_EXACT_CANDIDATES` | 5 | Below this, the exact stage is considered insufficient and fuzzy retrieval runs |
//! | `MAX_CANDIDATES` | 100 | Bounded per-request compute regardless of catalog size |
//! | `TRIGRAM_SIMILARITY_FLOOR` | 0.1 | Fuzzy retrieval keeps candidates above this similarity |
//! | `SECTOR_FILTER_MIN_PERCENT` | 1.0 | Codes below this distribution are dropped when a sector filter is active |

/// Base rank for a primary-title match.
pub const PRIMARY_TITLE_RANK: f64 = 1.0;

/// Base rank for a match found only via an alternative title.
pub const ALTERNATIVE_TITLE_RANK: f64 = 0.9;

/// Cap on candidate rows retrieved by either stage.
pub const MAX_CANDIDATES: usize = 100;

/// Minimum exact-stage candidate count; below this the fuzzy stage runs
/// instead.
pub const MIN_EXACT_CANDIDATES: usize = 5;

/// Similarity floor for the trigram retrieval sweep.
pub const TRIGRAM_SIMILARITY_FLOOR: f64 = 0.1;

/// Fuzzy re-scoring acceptance threshold for queries of up to
/// [`SHORT_QUERY_MAX_CHARS`] characters (stricter: lower = better fit).
pub const SHORT_QUERY_THRESHOLD: f64 = 0.3;

/// Fuzzy re-scoring acceptance threshold for longer queries.
pub const LONG_QUERY_THRESHOLD: f64 = 0.5;

/// Queries at or below this many characters use the strict threshold.
pub const SHORT_QUERY_MAX_CHARS: usize = 3;

/// Field weights for fuzzy re-scoring. Position within a field is ignored;
/// only which field matched (and how closely) matters.
pub const FIELD_WEIGHT_TITLE: f64 = 1.0;
pub const FIELD_WEIGHT_ALTERNATIVES: f64 = 0.9;
pub const FIELD_WEIGHT_DESCRIPTION: f64 = 0.7;

/// Codes whose filter-sector distribution is below this percentage are
/// dropped unless the caller sets `show_all`.
pub const SECTOR_FILTER_MIN_PERCENT: f32 = 1.0;

/// Fixed result count for the top-occupations-by-sector query.
pub const TOP_OCCUPATIONS_LIMIT: usize = 10;

/// How many of a code's highest-percentage sectors are shown per result.
pub const TOP_INDUSTRIES_LIMIT: usize = 3;
