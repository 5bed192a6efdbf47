// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Immutable snapshots and the swap discipline.
//!
//! The engine is stateless per request: every query runs against one
//! `Arc<Snapshot>` acquired at entry, so a concurrent batch reload can never
//! change the data under a running query. Reload builds a whole new snapshot
//! off to the side and swaps the `Arc` in one short write-lock window;
//! readers holding the old `Arc` finish against the old data.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use crate::catalog::Catalog;
use crate::sectors::SectorIndex;
use crate::source::CatalogData;

/// One consistent, read-only view of the catalog and the sector
/// distribution index.
#[derive(Debug)]
pub struct Snapshot {
    pub catalog: Catalog,
    pub sectors: SectorIndex,
}

impl Snapshot {
    /// Build a snapshot from raw import rows.
    pub fn build(data: CatalogData) -> Self {
        let catalog = Catalog::build(data.major_groups, data.minor_groups, data.occupations);
        let sectors = SectorIndex::build(data.sector_distribution);
        Snapshot { catalog, sectors }
    }
}

/// Shared handle to the current snapshot.
#[derive(Debug)]
pub struct SnapshotHandle {
    inner: RwLock<Arc<Snapshot>>,
}

impl SnapshotHandle {
    pub fn new(snapshot: Snapshot) -> Self {
        SnapshotHandle {
            inner: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// The snapshot to run this request against. Cloning the `Arc` is the
    /// whole read path; the lock is held for nanoseconds.
    pub fn current(&self) -> Arc<Snapshot> {
        self.inner.read().clone()
    }

    /// Atomically publish a freshly built snapshot.
    pub fn install(&self, snapshot: Snapshot) {
        info!(
            occupations = snapshot.catalog.len(),
            major_groups = snapshot.catalog.major_group_count(),
            minor_groups = snapshot.catalog.minor_group_count(),
            sector_rows = snapshot.sectors.len(),
            "installing catalog snapshot"
        );
        *self.inner.write() = Arc::new(snapshot);
    }
}
