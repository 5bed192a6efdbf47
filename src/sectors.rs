// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sector distribution index.
//!
//! Maps `(occupation code, sector label)` to a percentage-of-workforce
//! figure. The data is sparse - an occupation may have zero, one, or many
//! sector rows - and read-only after a snapshot build.
//!
//! Three views are precomputed so query time is pure lookup:
//! point entries, per-sector rankings (for the top-occupations query), and
//! per-code rankings (for the `topIndustries` display field).
//!
//! Sector labels are opaque strings supplied by the caller; any mapping from
//! raw industry codes to the label scheme used here happens outside the
//! engine.

use std::collections::HashMap;

use crate::types::{IndustryShare, SectorDistributionEntry, SocCode};

/// Immutable index over sector distribution rows.
#[derive(Debug, Default)]
pub struct SectorIndex {
    /// code -> sector label -> entry. At most one entry per pair.
    entries: HashMap<SocCode, HashMap<String, SectorDistributionEntry>>,
    /// sector label -> (code, percentage), descending by percentage,
    /// ties by code ascending.
    by_sector: HashMap<String, Vec<(SocCode, f32)>>,
    row_count: usize,
}

impl SectorIndex {
    /// Build the index from raw rows.
    ///
    /// Batch-import semantics: when the input carries duplicate
    /// `(code, sector)` pairs, the last row wins, matching a wholesale
    /// table replace.
    pub fn build(rows: Vec<SectorDistributionEntry>) -> Self {
        let mut entries: HashMap<SocCode, HashMap<String, SectorDistributionEntry>> =
            HashMap::new();
        for row in rows {
            entries
                .entry(row.soc_code.clone())
                .or_default()
                .insert(row.sector_label.clone(), row);
        }

        let mut by_sector: HashMap<String, Vec<(SocCode, f32)>> = HashMap::new();
        let mut row_count = 0;
        for (code, sectors) in &entries {
            for (label, entry) in sectors {
                row_count += 1;
                by_sector
                    .entry(label.clone())
                    .or_default()
                    .push((code.clone(), entry.percentage));
            }
        }
        for ranking in by_sector.values_mut() {
            ranking.sort_by(|a, b| {
                b.1.partial_cmp(&a.1)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.0.cmp(&b.0))
            });
        }

        SectorIndex {
            entries,
            by_sector,
            row_count,
        }
    }

    /// Total number of `(code, sector)` rows.
    pub fn len(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// The full entry for a pair, if present.
    pub fn entry_for(&self, code: &SocCode, sector_label: &str) -> Option<&SectorDistributionEntry> {
        self.entries.get(code)?.get(sector_label)
    }

    /// Distribution percentage for a pair; 0.0 when absent.
    pub fn percentage_for(&self, code: &SocCode, sector_label: &str) -> f32 {
        self.entry_for(code, sector_label)
            .map_or(0.0, |entry| entry.percentage)
    }

    /// The top `n` occupations for a sector, percentage descending, ties by
    /// code ascending. Empty - not an error - when the sector has no rows.
    pub fn top_for_sector(&self, sector_label: &str, n: usize) -> Vec<(SocCode, f32)> {
        self.by_sector
            .get(sector_label)
            .map(|ranking| ranking.iter().take(n).cloned().collect())
            .unwrap_or_default()
    }

    /// The `n` highest-percentage sectors for a code, for display.
    /// Percentage descending, ties by sector label ascending.
    pub fn top_industries_for(&self, code: &SocCode, n: usize) -> Vec<IndustryShare> {
        let Some(sectors) = self.entries.get(code) else {
            return Vec::new();
        };
        let mut shares: Vec<IndustryShare> = sectors
            .values()
            .map(|entry| IndustryShare {
                sector: entry.sector_label.clone(),
                percentage: entry.percentage,
            })
            .collect();
        shares.sort_by(|a, b| {
            b.percentage
                .partial_cmp(&a.percentage)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.sector.cmp(&b.sector))
        });
        shares.truncate(n);
        shares
    }
}
