// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sector-distribution boost strategies.
//!
//! When a search carries a sector filter and a code has a distribution row
//! for that sector, the code's rank is multiplied by a boost factor derived
//! from the percentage. The boost function is pluggable; [`TieredBoost`] is
//! the canonical default, [`LogBoost`] is the alternate smooth curve.
//!
//! Both are monotone non-decreasing in the percentage - an occupation with a
//! strictly higher distribution never ranks below one with a lower
//! distribution, all else equal.

/// Maps a distribution percentage (0-100) to a rank multiplier.
pub trait SectorBoost: Send + Sync {
    fn factor(&self, percentage: f32) -> f64;
}

/// Step-function boost over distribution tiers.
///
/// | distribution % | factor |
/// |---|---|
/// | >= 90 | 2.00 |
/// | >= 75 | 1.75 |
/// | >= 50 | 1.50 |
/// | >= 25 | 1.25 |
/// | >= 10 | 1.10 |
/// | < 5   | 0.75 |
/// | otherwise | 1.00 |
#[derive(Debug, Clone, Copy, Default)]
pub struct TieredBoost;

impl SectorBoost for TieredBoost {
    fn factor(&self, percentage: f32) -> f64 {
        if percentage >= 90.0 {
            2.0
        } else if percentage >= 75.0 {
            1.75
        } else if percentage >= 50.0 {
            1.5
        } else if percentage >= 25.0 {
            1.25
        } else if percentage >= 10.0 {
            1.1
        } else if percentage < 5.0 {
            0.75
        } else {
            1.0
        }
    }
}

/// Smooth logarithmic boost: `1 + log10(pct + 1) / log10(101)`, with an
/// extra 1.5x once the distribution reaches 10%.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogBoost;

impl SectorBoost for LogBoost {
    fn factor(&self, percentage: f32) -> f64 {
        let pct = f64::from(percentage.clamp(0.0, 100.0));
        let base = 1.0 + (pct + 1.0).log10() / 101f64.log10();
        if pct >= 10.0 {
            base * 1.5
        } else {
            base
        }
    }
}
