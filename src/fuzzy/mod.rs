// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate string matching primitives.
//!
//! Two flavors, used at different points of the pipeline:
//!
//! - [`trigram`] - pg_trgm-style set similarity, cheap enough to sweep the
//!   whole catalog when the exact stage comes up short;
//! - [`levenshtein`] - edit distance, used to re-score the (already capped)
//!   fuzzy candidate pool field by field.

pub mod levenshtein;
pub mod trigram;

pub use levenshtein::{distance, normalized_distance};
pub use trigram::TrigramSet;
