// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! metier CLI entry point.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use metier::{Engine, EngineError, EngineResult, JsonFileSource, SearchQuery, SearchResponse};

mod cli;
use cli::{Cli, Commands};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("metier=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            // Caller mistakes (bad code, missing sector) exit 2, like
            // argument errors; everything else is an engine failure.
            if error.is_caller_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

/// Open the engine from a data file, with a spinner on interactive runs.
#[cfg(feature = "parallel")]
fn open_engine(data: &Path) -> EngineResult<Engine> {
    let spinner = if atty::is(atty::Stream::Stderr) {
        let bar = indicatif::ProgressBar::new_spinner();
        bar.set_message(format!("loading {}", data.display()));
        bar.enable_steady_tick(std::time::Duration::from_millis(80));
        Some(bar)
    } else {
        None
    };
    let engine = Engine::open(&JsonFileSource::new(data));
    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }
    engine
}

#[cfg(not(feature = "parallel"))]
fn open_engine(data: &Path) -> EngineResult<Engine> {
    Engine::open(&JsonFileSource::new(data))
}

fn run(cli: Cli) -> Result<(), EngineError> {
    match cli.command {
        Commands::Search {
            query,
            data,
            sector,
            show_all,
            page,
            page_size,
            json,
        } => {
            let engine = open_engine(&data)?;
            let mut search = SearchQuery::new(&query)
                .show_all(show_all)
                .page(page)
                .page_size(page_size);
            if let Some(sector) = sector {
                search = search.sector(sector);
            }
            let response = engine.search(&search)?;
            if json {
                println!("{}", to_json(&response));
            } else {
                match &response {
                    SearchResponse::Occupations(page) => cli::display::print_search_page(page),
                    SearchResponse::Groups(page) => cli::display::print_browse_page(page),
                }
            }
            Ok(())
        }

        Commands::Top { data, sector, json } => {
            let engine = open_engine(&data)?;
            let top = engine.top_occupations(sector.as_deref())?;
            if json {
                println!("{}", to_json(&top));
            } else {
                cli::display::print_top(sector.as_deref().unwrap_or(""), &top);
            }
            Ok(())
        }

        Commands::Lookup { code, data } => {
            let engine = open_engine(&data)?;
            let record = engine.lookup(&code)?;
            cli::display::print_record(&record);
            Ok(())
        }

        Commands::Inspect { data } => {
            let engine = open_engine(&data)?;
            cli::display::print_stats(&engine.snapshot());
            Ok(())
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string())
}
