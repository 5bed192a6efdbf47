// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking math: base ranks, sector boosts, and result ordering.

pub mod boost;
pub mod core;
pub mod ranking;

pub use boost::{LogBoost, SectorBoost, TieredBoost};
pub use ranking::compare_results;
pub use self::core::*;
