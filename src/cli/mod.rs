// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the metier command-line interface.
//!
//! Four subcommands: `search` runs the ranked occupation search, `top`
//! lists the most sector-representative occupations, `lookup` fetches one
//! record by code, and `inspect` prints snapshot statistics. All of them
//! read the same JSON catalog data file.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "metier",
    about = "Occupation search and ranking over a classification catalog",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search occupations by free text
    Search {
        /// Free-text query (fewer than 2 characters browses the hierarchy)
        query: String,

        /// Path to the catalog JSON data file
        #[arg(short, long)]
        data: PathBuf,

        /// Sector label for distribution boosts and filtering
        #[arg(long)]
        sector: Option<String>,

        /// Keep low-distribution occupations when a sector is set
        #[arg(long)]
        show_all: bool,

        /// 1-based page number
        #[arg(long, default_value = "1")]
        page: usize,

        /// Items per page (1-50)
        #[arg(long, default_value = "20")]
        page_size: usize,

        /// Emit the raw JSON response instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Top occupations for a sector, by distribution percentage
    Top {
        /// Path to the catalog JSON data file
        #[arg(short, long)]
        data: PathBuf,

        /// Sector label (required; missing label is a caller error)
        #[arg(long)]
        sector: Option<String>,

        /// Emit the raw JSON response instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Look up one occupation record by code
    Lookup {
        /// Occupation code, format NN-NNNN.NN
        code: String,

        /// Path to the catalog JSON data file
        #[arg(short, long)]
        data: PathBuf,
    },

    /// Print snapshot statistics for a data file
    Inspect {
        /// Path to the catalog JSON data file
        #[arg(short, long)]
        data: PathBuf,
    },
}
