// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Trigram set similarity, pg_trgm style.
//!
//! Each word is padded with two leading spaces and one trailing space before
//! trigram extraction, so word boundaries produce their own trigrams and
//! short words still contribute ("ceo" yields four trigrams, not one).
//! Similarity is Jaccard over the two trigram sets:
//! `|A ∩ B| / |A ∪ B|`, in [0, 1].
//!
//! Candidate retrieval precomputes a `TrigramSet` per record at snapshot
//! build time; a query builds one set and sweeps the catalog.

use std::collections::HashSet;

/// A precomputed set of character trigrams.
#[derive(Debug, Clone, Default)]
pub struct TrigramSet {
    grams: HashSet<[char; 3]>,
}

impl TrigramSet {
    /// Extract trigrams from already-normalized text.
    ///
    /// Words are split on whitespace and padded individually, matching
    /// word-based trigram extraction: `"  w"`, `" wo"`, ..., `"rd "`.
    pub fn new(text: &str) -> Self {
        let mut grams = HashSet::new();
        for word in text.split_whitespace() {
            let padded: Vec<char> = std::iter::repeat(' ')
                .take(2)
                .chain(word.chars())
                .chain(std::iter::once(' '))
                .collect();
            for window in padded.windows(3) {
                grams.insert([window[0], window[1], window[2]]);
            }
        }
        TrigramSet { grams }
    }

    /// Number of distinct trigrams.
    pub fn len(&self) -> usize {
        self.grams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grams.is_empty()
    }

    /// Jaccard similarity with another set: shared / union, in [0, 1].
    pub fn similarity(&self, other: &TrigramSet) -> f64 {
        if self.grams.is_empty() || other.grams.is_empty() {
            return 0.0;
        }
        // Iterate the smaller set when counting the intersection
        let (small, large) = if self.grams.len() <= other.grams.len() {
            (&self.grams, &other.grams)
        } else {
            (&other.grams, &self.grams)
        };
        let shared = small.iter().filter(|g| large.contains(*g)).count();
        let union = self.grams.len() + other.grams.len() - shared;
        shared as f64 / union as f64
    }
}

/// One-shot similarity between two normalized strings.
pub fn similarity(a: &str, b: &str) -> f64 {
    TrigramSet::new(a).similarity(&TrigramSet::new(b))
}
