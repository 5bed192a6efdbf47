// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Occupation search and ranking over a standardized classification catalog.
//!
//! Given free text and an optional industry-sector filter, the engine
//! returns a deduplicated, ranked page of occupation records; a companion
//! query surfaces the most sector-representative occupations. The catalog
//! is small (tens of thousands of rows) and effectively static - it changes
//! only via wholesale batch reload, published as an immutable snapshot.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────────┐     ┌────────────────────┐
//! │  source.rs   │────▶│   snapshot.rs     │────▶│     engine.rs      │
//! │ (DataSource, │     │ (Catalog + Sector │     │ (search, top, and  │
//! │  batch rows) │     │  Index, Arc swap) │     │  lookup operations)│
//! └──────────────┘     └───────────────────┘     └────────────────────┘
//!                                                          │
//!                      ┌───────────────────────────────────┘
//!                      ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        search/                              │
//! │  retrieval (exact stage → trigram sweep when too sparse)    │
//! │  rescore   (weighted-field edit distance, fuzzy pool only)  │
//! │  consolidate (one entry per code, boost, sort, paginate)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use metier::{Engine, JsonFileSource, SearchQuery};
//!
//! # fn main() -> Result<(), metier::EngineError> {
//! let source = JsonFileSource::new("catalog.json");
//! let engine = Engine::open(&source)?;
//!
//! let query = SearchQuery::new("forklift operator").sector("21");
//! let response = engine.search(&query)?;
//! if let Some(page) = response.occupations() {
//!     for item in &page.items {
//!         println!("{} {}", item.code, item.title);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

// Module declarations
pub mod catalog;
pub mod engine;
pub mod error;
pub mod fuzzy;
pub mod scoring;
pub mod search;
pub mod sectors;
pub mod snapshot;
pub mod source;
pub mod types;
pub mod utils;

// Re-exports for public API
pub use catalog::{Candidate, Catalog};
pub use engine::{Engine, MIN_QUERY_CHARS};
pub use error::{EngineError, EngineResult};
pub use scoring::{LogBoost, SectorBoost, TieredBoost};
pub use sectors::SectorIndex;
pub use snapshot::{Snapshot, SnapshotHandle};
pub use source::{CatalogData, DataSource, JsonFileSource, SourceError, StaticSource};
pub use types::{
    BrowseGroup, ConsolidatedResult, GroupRef, IndustryShare, MajorGroup, MatchSite, MinorGroup,
    MinorGroupRef, OccupationRecord, Page, SearchQuery, SearchResponse, SectorDistributionEntry,
    SocCode, TopOccupation, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
pub use utils::normalize;
