// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the occupation search engine.
//!
//! Catalog rows (`OccupationRecord`, `MajorGroup`, `MinorGroup`,
//! `SectorDistributionEntry`) are created wholesale during batch import and
//! never mutated at query time. Request/response types (`SearchQuery`,
//! `ConsolidatedResult`, `SearchResponse`) are ephemeral.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **SocCode**: always `NN-NNNN.NN`. String ordering on codes is the final
//!   tie-breaker everywhere, so codes must compare consistently.
//! - **SectorDistributionEntry**: at most one entry per
//!   `(soc_code, sector_label)` pair after a snapshot build.
//! - **ConsolidatedResult**: at most one per occupation code in any response
//!   `items` list. Consolidation enforces this; everything downstream
//!   assumes it.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// NEWTYPES
// =============================================================================

/// Canonical occupation classification code, format `NN-NNNN.NN`.
///
/// Stable and unique across the catalog. Comparison is plain string ordering,
/// which for this fixed-width format is also numeric ordering - every
/// deterministic tie-break in ranking relies on that.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SocCode(String);

impl SocCode {
    /// Parse and validate a code of the form `NN-NNNN.NN`.
    pub fn parse(value: &str) -> Option<Self> {
        let bytes = value.as_bytes();
        if bytes.len() != 10 {
            return None;
        }
        let digit_positions = [0, 1, 3, 4, 5, 6, 8, 9];
        if !digit_positions.iter().all(|&i| bytes[i].is_ascii_digit()) {
            return None;
        }
        if bytes[2] != b'-' || bytes[7] != b'.' {
            return None;
        }
        Some(SocCode(value.to_string()))
    }

    /// The underlying code string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two-digit major group prefix of this code.
    #[inline]
    pub fn major_prefix(&self) -> &str {
        &self.0[..2]
    }
}

impl fmt::Display for SocCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// CATALOG ROWS
// =============================================================================

/// Top-level classification group, e.g. `11` "Management Occupations".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MajorGroup {
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Second-level classification group, e.g. `11-1` "Top Executives".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinorGroup {
    pub code: String,
    pub major_group_code: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One standardized occupation.
///
/// `alternative_titles` preserves input order and is unique case-sensitively;
/// matching against it is always case-insensitive (via [`crate::utils::normalize`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupationRecord {
    pub code: SocCode,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub minor_group_code: String,
    #[serde(default)]
    pub alternative_titles: Vec<String>,
}

/// Percentage of an occupation's workforce sample found within one sector.
///
/// Composite identity `(soc_code, sector_label)`. Sector labels are opaque
/// strings supplied by the caller; the engine never validates or normalizes
/// them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorDistributionEntry {
    pub soc_code: SocCode,
    pub sector_label: String,
    /// 0-100, one decimal of precision.
    pub percentage: f32,
    #[serde(default)]
    pub sample_size: Option<u32>,
    #[serde(default)]
    pub date_updated: Option<NaiveDate>,
}

// =============================================================================
// REQUEST
// =============================================================================

/// Default page size for search responses.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Upper bound on the page size a caller may request.
pub const MAX_PAGE_SIZE: usize = 50;

/// A single search request. Ephemeral; nothing here outlives the request.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Free text, trimmed on construction.
    pub free_text: String,
    /// Optional opaque sector label used for distribution boosts/filtering.
    pub sector: Option<String>,
    /// Disables the low-distribution drop when a sector filter is set.
    pub show_all: bool,
    /// 1-based page number.
    pub page: usize,
    /// Items per page, 1..=50.
    pub page_size: usize,
}

impl SearchQuery {
    /// Build a query with defaults: no sector, `show_all = false`, page 1,
    /// page size 20. Free text is trimmed.
    pub fn new(free_text: &str) -> Self {
        SearchQuery {
            free_text: free_text.trim().to_string(),
            sector: None,
            show_all: false,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Set the sector filter label.
    pub fn sector(mut self, label: impl Into<String>) -> Self {
        self.sector = Some(label.into());
        self
    }

    /// Disable the low-distribution drop.
    pub fn show_all(mut self, show_all: bool) -> Self {
        self.show_all = show_all;
        self
    }

    /// Set the page, clamped to >= 1.
    pub fn page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    /// Set the page size, clamped to 1..=50.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }
}

// =============================================================================
// RESPONSE
// =============================================================================

/// Where a raw candidate match landed during retrieval.
///
/// Ordered best-first: a primary-title hit outranks an alternative-title hit,
/// which outranks a bare full-text hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchSite {
    PrimaryTitle,
    AlternativeTitle,
    FullText,
}

/// Denormalized group reference for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRef {
    pub code: String,
    pub title: String,
}

/// One sector's share of an occupation's workforce, for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryShare {
    pub sector: String,
    pub percentage: f32,
}

/// One occupation in the final ranked list - exactly one per code.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidatedResult {
    pub code: SocCode,
    /// The occupation's canonical (primary) title, regardless of which
    /// title the query actually matched.
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The subset of alternative titles that matched the query.
    pub matched_alternative_titles: Vec<String>,
    /// True only if no primary-title match exists for this code.
    pub is_alternative_match: bool,
    pub rank: f64,
    /// Distribution percentage for the filter sector, when one was set and a
    /// row exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector_distribution: Option<f32>,
    /// Up to 3 highest-percentage sector entries for this code.
    pub top_industries: Vec<IndustryShare>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_group: Option<GroupRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minor_group: Option<GroupRef>,
}

/// Minor group entry nested inside a [`BrowseGroup`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MinorGroupRef {
    pub code: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A major group with its nested minor groups - the browse response returned
/// for queries too short to search.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseGroup {
    pub code: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub minor_groups: Vec<MinorGroupRef>,
}

/// One page of a response list, with pagination metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub query: String,
}

/// Search output: either a ranked occupation page, or - for queries shorter
/// than two characters - the browsable group hierarchy.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Occupations(Page<ConsolidatedResult>),
    Groups(Page<BrowseGroup>),
}

impl SearchResponse {
    /// The occupation page, if this is a search-result response.
    pub fn occupations(&self) -> Option<&Page<ConsolidatedResult>> {
        match self {
            SearchResponse::Occupations(page) => Some(page),
            SearchResponse::Groups(_) => None,
        }
    }

    /// The browse page, if this is a short-query response.
    pub fn groups(&self) -> Option<&Page<BrowseGroup>> {
        match self {
            SearchResponse::Groups(page) => Some(page),
            SearchResponse::Occupations(_) => None,
        }
    }
}

/// One row of the top-occupations-by-sector response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopOccupation {
    pub code: SocCode,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub percentage: f32,
}
