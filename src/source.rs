// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Batch-import data sources.
//!
//! The catalog changes only via periodic wholesale reload, so a data source
//! is just "give me all the rows": major groups, minor groups, occupations,
//! and sector distribution entries in one [`CatalogData`]. The engine owns
//! an explicitly constructed source handle - opened at process start, passed
//! in rather than imported globally - and builds an immutable snapshot from
//! whatever the source returns.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::types::{MajorGroup, MinorGroup, OccupationRecord, SectorDistributionEntry};

/// Errors produced while loading catalog data.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The data file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file could not be parsed.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything a snapshot build needs, as raw rows.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogData {
    #[serde(default)]
    pub major_groups: Vec<MajorGroup>,
    #[serde(default)]
    pub minor_groups: Vec<MinorGroup>,
    #[serde(default)]
    pub occupations: Vec<OccupationRecord>,
    #[serde(default)]
    pub sector_distribution: Vec<SectorDistributionEntry>,
}

/// A handle to catalog data with a defined lifecycle: constructed once,
/// loaded on demand, wholesale.
pub trait DataSource {
    /// Load a complete set of catalog rows.
    fn load(&self) -> Result<CatalogData, SourceError>;
}

/// Data source backed by a single JSON document on disk.
///
/// The expected shape mirrors [`CatalogData`] with camelCase keys:
///
/// ```json
/// {
///   "majorGroups": [{ "code": "53", "title": "..." }],
///   "minorGroups": [{ "code": "53-7", "majorGroupCode": "53", "title": "..." }],
///   "occupations": [{ "code": "53-7051.00", "title": "...", "minorGroupCode": "53-7" }],
///   "sectorDistribution": [{ "socCode": "53-7051.00", "sectorLabel": "21", "percentage": 28.4 }]
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        JsonFileSource {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The file this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for JsonFileSource {
    fn load(&self) -> Result<CatalogData, SourceError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| SourceError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

/// In-memory data source for tests and embedded catalogs.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    data: CatalogData,
}

impl StaticSource {
    pub fn new(data: CatalogData) -> Self {
        StaticSource { data }
    }
}

impl DataSource for StaticSource {
    fn load(&self) -> Result<CatalogData, SourceError> {
        Ok(self.data.clone())
    }
}
