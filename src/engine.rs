// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The engine: the two public query operations plus code lookup and reload.
//!
//! Everything here is a read against the current snapshot. The engine holds
//! the snapshot handle and the sector boost strategy; per-request state
//! lives entirely on the stack of the call.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::scoring::{SectorBoost, TieredBoost, TOP_OCCUPATIONS_LIMIT};
use crate::search;
use crate::snapshot::{Snapshot, SnapshotHandle};
use crate::source::DataSource;
use crate::types::{
    OccupationRecord, Page, SearchQuery, SearchResponse, SocCode, TopOccupation,
};

/// Queries shorter than this many characters get the browse response.
pub const MIN_QUERY_CHARS: usize = 2;

/// Occupation search engine over one catalog snapshot.
pub struct Engine {
    snapshot: SnapshotHandle,
    boost: Box<dyn SectorBoost>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("snapshot", &self.snapshot)
            .finish_non_exhaustive()
    }
}

impl Engine {
    /// Load the source and build the first snapshot. This is the
    /// process-start lifecycle step; reload later with [`Engine::reload`].
    pub fn open(source: &dyn DataSource) -> EngineResult<Self> {
        let data = source.load()?;
        let snapshot = Snapshot::build(data);
        info!(
            occupations = snapshot.catalog.len(),
            sector_rows = snapshot.sectors.len(),
            "engine opened"
        );
        Ok(Engine {
            snapshot: SnapshotHandle::new(snapshot),
            boost: Box::new(TieredBoost),
        })
    }

    /// Replace the default tiered sector boost with another strategy.
    pub fn with_boost(mut self, boost: Box<dyn SectorBoost>) -> Self {
        self.boost = boost;
        self
    }

    /// Batch re-import: load the source and atomically publish a fresh
    /// snapshot. In-flight queries keep the view they started with.
    pub fn reload(&self, source: &dyn DataSource) -> EngineResult<()> {
        let data = source.load()?;
        self.snapshot.install(Snapshot::build(data));
        Ok(())
    }

    /// The current snapshot, for stats and direct catalog access.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.snapshot.current()
    }

    /// Free-text occupation search.
    ///
    /// Queries shorter than two characters return the browsable group
    /// hierarchy instead of search results.
    pub fn search(&self, query: &SearchQuery) -> EngineResult<SearchResponse> {
        self.search_with_deadline(query, None)
    }

    /// [`Engine::search`] honoring a caller-supplied deadline: if it has
    /// already expired when the fuzzy stage would start, the request aborts
    /// with [`EngineError::DeadlineExceeded`].
    pub fn search_with_deadline(
        &self,
        query: &SearchQuery,
        deadline: Option<Instant>,
    ) -> EngineResult<SearchResponse> {
        let snapshot = self.snapshot.current();
        debug!(
            free_text = %query.free_text,
            sector = query.sector.as_deref().unwrap_or(""),
            page = query.page,
            page_size = query.page_size,
            "search request"
        );

        if query.free_text.chars().count() < MIN_QUERY_CHARS {
            let groups = snapshot.catalog.browse_groups();
            let total_count = groups.len();
            return Ok(SearchResponse::Groups(Page {
                items: groups,
                total_count,
                current_page: 1,
                total_pages: 1,
                query: String::new(),
            }));
        }

        let page = search::execute(&snapshot, self.boost.as_ref(), query, deadline)?;
        debug!(
            total = page.total_count,
            returned = page.items.len(),
            "search response"
        );
        Ok(SearchResponse::Occupations(page))
    }

    /// The most sector-representative occupations for a sector label.
    ///
    /// A missing label is a caller error; a label with no distribution rows
    /// yields an empty list.
    pub fn top_occupations(&self, sector: Option<&str>) -> EngineResult<Vec<TopOccupation>> {
        let sector = match sector {
            Some(label) if !label.trim().is_empty() => label,
            _ => return Err(EngineError::MissingParameter { name: "sector" }),
        };

        let snapshot = self.snapshot.current();
        let top = snapshot
            .sectors
            .top_for_sector(sector, TOP_OCCUPATIONS_LIMIT)
            .into_iter()
            .filter_map(|(code, percentage)| {
                // Rows referencing codes absent from the catalog are skipped
                snapshot.catalog.find_by_code(&code).map(|record| TopOccupation {
                    code: record.code.clone(),
                    title: record.title.clone(),
                    description: record.description.clone(),
                    percentage,
                })
            })
            .collect();
        Ok(top)
    }

    /// Point lookup of one occupation record by code string.
    pub fn lookup(&self, code: &str) -> EngineResult<OccupationRecord> {
        let parsed = SocCode::parse(code).ok_or_else(|| EngineError::InvalidCode {
            value: code.to_string(),
        })?;
        let snapshot = self.snapshot.current();
        snapshot
            .catalog
            .find_by_code(&parsed)
            .cloned()
            .ok_or_else(|| EngineError::NotFound {
                code: code.to_string(),
            })
    }
}
