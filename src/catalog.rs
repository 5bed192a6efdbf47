// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Read-only occupation catalog.
//!
//! Holds the occupation records, their group hierarchy, and everything
//! derived from them at build time: normalized titles, a token inverted
//! index for full-text matching, and per-record trigram sets for the fuzzy
//! retrieval sweep. Records are stored sorted by code, so every scan that
//! caps its candidate count is deterministic.
//!
//! The catalog is built once per snapshot and never mutated afterwards; see
//! `snapshot.rs` for the swap discipline.

use std::collections::{HashMap, HashSet};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::fuzzy::TrigramSet;
use crate::types::{
    BrowseGroup, MajorGroup, MatchSite, MinorGroup, MinorGroupRef, OccupationRecord, SocCode,
};
use crate::utils::{normalize, tokenize};

/// A raw retrieval hit: a record index plus where the match landed.
///
/// The match site is retained per candidate so downstream ranking can tell
/// a primary-title hit from an alternative-title hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub index: usize,
    pub site: MatchSite,
}

/// Search-ready data derived from one record at build time.
#[derive(Debug)]
struct RecordDerived {
    title_norm: String,
    alt_norm: Vec<String>,
    description_norm: String,
    trigrams: TrigramSet,
}

fn derive_record(record: &OccupationRecord) -> RecordDerived {
    let title_norm = normalize(&record.title);
    let alt_norm: Vec<String> = record
        .alternative_titles
        .iter()
        .map(|alt| normalize(alt))
        .collect();
    let description_norm = record
        .description
        .as_deref()
        .map(normalize)
        .unwrap_or_default();

    // Searchable text: title + alternatives + description, normalized.
    let mut searchable = title_norm.clone();
    for alt in &alt_norm {
        searchable.push(' ');
        searchable.push_str(alt);
    }
    if !description_norm.is_empty() {
        searchable.push(' ');
        searchable.push_str(&description_norm);
    }

    RecordDerived {
        title_norm,
        alt_norm,
        description_norm,
        trigrams: TrigramSet::new(&searchable),
    }
}

/// Immutable, queryable view of the occupation records and group hierarchy.
#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<OccupationRecord>,
    derived: Vec<RecordDerived>,
    by_code: HashMap<SocCode, usize>,
    major_groups: Vec<MajorGroup>,
    minor_groups: Vec<MinorGroup>,
    major_by_code: HashMap<String, usize>,
    minor_by_code: HashMap<String, usize>,
    /// token -> record indices containing it, ascending.
    postings: HashMap<String, Vec<u32>>,
}

impl Catalog {
    /// Build the catalog from raw import rows.
    ///
    /// Records are deduplicated by code (last row wins, matching wholesale
    /// batch replace) and sorted by code. The derived pass is parallelized
    /// under the `parallel` feature.
    pub fn build(
        major_groups: Vec<MajorGroup>,
        minor_groups: Vec<MinorGroup>,
        occupations: Vec<OccupationRecord>,
    ) -> Self {
        // Dedup by code, last wins
        let mut by_code_tmp: HashMap<SocCode, OccupationRecord> = HashMap::new();
        for record in occupations {
            by_code_tmp.insert(record.code.clone(), record);
        }
        let mut records: Vec<OccupationRecord> = by_code_tmp.into_values().collect();
        records.sort_by(|a, b| a.code.cmp(&b.code));

        #[cfg(feature = "parallel")]
        let derived: Vec<RecordDerived> = records.par_iter().map(derive_record).collect();
        #[cfg(not(feature = "parallel"))]
        let derived: Vec<RecordDerived> = records.iter().map(derive_record).collect();

        let by_code: HashMap<SocCode, usize> = records
            .iter()
            .enumerate()
            .map(|(index, record)| (record.code.clone(), index))
            .collect();

        // Token inverted index over title + alternatives + description.
        // Indices are pushed in ascending record order, so each posting
        // list is sorted without an extra pass.
        let mut postings: HashMap<String, Vec<u32>> = HashMap::new();
        for (index, record) in records.iter().enumerate() {
            let mut seen: HashSet<String> = HashSet::new();
            let mut push_tokens = |text: &str, seen: &mut HashSet<String>| {
                for token in tokenize(text) {
                    if seen.insert(token.clone()) {
                        postings.entry(token).or_default().push(index as u32);
                    }
                }
            };
            push_tokens(&record.title, &mut seen);
            for alt in &record.alternative_titles {
                push_tokens(alt, &mut seen);
            }
            if let Some(description) = &record.description {
                push_tokens(description, &mut seen);
            }
        }

        let mut major_groups = major_groups;
        major_groups.sort_by(|a, b| a.code.cmp(&b.code));
        let mut minor_groups = minor_groups;
        minor_groups.sort_by(|a, b| a.code.cmp(&b.code));

        let major_by_code = major_groups
            .iter()
            .enumerate()
            .map(|(index, group)| (group.code.clone(), index))
            .collect();
        let minor_by_code = minor_groups
            .iter()
            .enumerate()
            .map(|(index, group)| (group.code.clone(), index))
            .collect();

        Catalog {
            records,
            derived,
            by_code,
            major_groups,
            minor_groups,
            major_by_code,
            minor_by_code,
            postings,
        }
    }

    /// Number of occupation records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn major_group_count(&self) -> usize {
        self.major_groups.len()
    }

    pub fn minor_group_count(&self) -> usize {
        self.minor_groups.len()
    }

    /// The record at a retrieval index (records are sorted by code).
    pub fn record(&self, index: usize) -> &OccupationRecord {
        &self.records[index]
    }

    /// Point lookup by code.
    pub fn find_by_code(&self, code: &SocCode) -> Option<&OccupationRecord> {
        self.by_code.get(code).map(|&index| &self.records[index])
    }

    /// The minor and major group a code belongs to, for display. Either side
    /// degrades to `None` when the hierarchy row is missing.
    pub fn hierarchy_for(&self, code: &SocCode) -> (Option<&MinorGroup>, Option<&MajorGroup>) {
        let Some(record) = self.find_by_code(code) else {
            return (None, None);
        };
        let minor = self
            .minor_by_code
            .get(&record.minor_group_code)
            .map(|&index| &self.minor_groups[index]);
        let major = minor.and_then(|minor| {
            self.major_by_code
                .get(&minor.major_group_code)
                .map(|&index| &self.major_groups[index])
        });
        (minor, major)
    }

    /// The browsable hierarchy: major groups ordered by code, each with its
    /// minor groups ordered by code. Returned for queries too short to
    /// search.
    pub fn browse_groups(&self) -> Vec<BrowseGroup> {
        self.major_groups
            .iter()
            .map(|major| BrowseGroup {
                code: major.code.clone(),
                title: major.title.clone(),
                description: major.description.clone(),
                minor_groups: self
                    .minor_groups
                    .iter()
                    .filter(|minor| minor.major_group_code == major.code)
                    .map(|minor| MinorGroupRef {
                        code: minor.code.clone(),
                        title: minor.title.clone(),
                        description: minor.description.clone(),
                    })
                    .collect(),
            })
            .collect()
    }

    /// The exact stage: records whose primary title contains the query as a
    /// substring, whose alternative-title set contains the query exactly, or
    /// whose full-text tokens cover every query token. All comparisons are
    /// over normalized text. Scans in code order, capped at `cap` hits.
    pub fn find_by_free_text(&self, query_norm: &str, cap: usize) -> Vec<Candidate> {
        let full_text_hits = self.full_text_hits(query_norm);

        let mut candidates = Vec::new();
        for (index, derived) in self.derived.iter().enumerate() {
            let site = if derived.title_norm.contains(query_norm) {
                MatchSite::PrimaryTitle
            } else if derived.alt_norm.iter().any(|alt| alt == query_norm) {
                MatchSite::AlternativeTitle
            } else if full_text_hits.contains(&(index as u32)) {
                MatchSite::FullText
            } else {
                continue;
            };
            candidates.push(Candidate { index, site });
            if candidates.len() >= cap {
                break;
            }
        }
        candidates
    }

    /// Record indices containing every query token (AND semantics), via the
    /// inverted index.
    fn full_text_hits(&self, query_norm: &str) -> HashSet<u32> {
        let mut tokens = query_norm.split_whitespace();
        let Some(first) = tokens.next() else {
            return HashSet::new();
        };
        let Some(list) = self.postings.get(first) else {
            return HashSet::new();
        };
        let mut hits: HashSet<u32> = list.iter().copied().collect();
        for token in tokens {
            let Some(list) = self.postings.get(token) else {
                return HashSet::new();
            };
            let set: HashSet<u32> = list.iter().copied().collect();
            hits.retain(|index| set.contains(index));
            if hits.is_empty() {
                break;
            }
        }
        hits
    }

    /// Normalized primary title at `index`.
    pub(crate) fn title_norm(&self, index: usize) -> &str {
        &self.derived[index].title_norm
    }

    /// Normalized alternative titles at `index`, parallel to the record's
    /// `alternative_titles`.
    pub(crate) fn alt_norm(&self, index: usize) -> &[String] {
        &self.derived[index].alt_norm
    }

    /// Normalized description at `index`; empty when the record has none.
    pub(crate) fn description_norm(&self, index: usize) -> &str {
        &self.derived[index].description_norm
    }

    /// Precomputed trigram set over the record's searchable text.
    pub(crate) fn trigram_set(&self, index: usize) -> &TrigramSet {
        &self.derived[index].trigrams
    }
}
