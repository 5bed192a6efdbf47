// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for metier CLI output.
//!
//! Plain ANSI styling, gated on TTY detection. Respects `NO_COLOR` for the
//! purists and non-TTY detection for pipelines.

use std::sync::OnceLock;

use metier::{BrowseGroup, ConsolidatedResult, OccupationRecord, Page, Snapshot, TopOccupation};

/// Cached color decision.
static COLOR: OnceLock<bool> = OnceLock::new();

fn color_enabled() -> bool {
    *COLOR.get_or_init(|| std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout))
}

fn paint(text: &str, ansi: &str) -> String {
    if color_enabled() {
        format!("\x1b[{ansi}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

fn bold(text: &str) -> String {
    paint(text, "1")
}

fn dim(text: &str) -> String {
    paint(text, "2")
}

fn green(text: &str) -> String {
    paint(text, "32")
}

fn yellow(text: &str) -> String {
    paint(text, "33")
}

/// Print one page of ranked search results.
pub fn print_search_page(page: &Page<ConsolidatedResult>) {
    if page.items.is_empty() {
        println!("no results for {:?}", page.query);
        return;
    }

    println!(
        "{} results for {:?} (page {}/{})",
        page.total_count,
        page.query,
        page.current_page,
        page.total_pages
    );
    println!();

    for item in &page.items {
        let marker = if item.is_alternative_match {
            yellow("alt")
        } else {
            green("pri")
        };
        println!(
            "  {}  {}  {}  {}",
            dim(item.code.as_str()),
            marker,
            bold(&item.title),
            dim(&format!("rank {:.3}", item.rank)),
        );
        if !item.matched_alternative_titles.is_empty() {
            println!(
                "      matched: {}",
                item.matched_alternative_titles.join(", ")
            );
        }
        if let Some(pct) = item.sector_distribution {
            println!("      sector share: {pct:.1}%");
        }
        if !item.top_industries.is_empty() {
            let shares: Vec<String> = item
                .top_industries
                .iter()
                .map(|share| format!("{} {:.1}%", share.sector, share.percentage))
                .collect();
            println!("      top industries: {}", dim(&shares.join(", ")));
        }
    }
}

/// Print the browsable hierarchy returned for short queries.
pub fn print_browse_page(page: &Page<BrowseGroup>) {
    println!("{} major groups", page.total_count);
    for group in &page.items {
        println!("  {}  {}", dim(&group.code), bold(&group.title));
        for minor in &group.minor_groups {
            println!("    {}  {}", dim(&minor.code), minor.title);
        }
    }
}

/// Print the top-occupations-by-sector list.
pub fn print_top(sector: &str, top: &[TopOccupation]) {
    if top.is_empty() {
        println!("no distribution data for sector {sector:?}");
        return;
    }
    println!("top occupations for sector {}", bold(sector));
    for (position, item) in top.iter().enumerate() {
        println!(
            "  {:>2}. {}  {}  {}",
            position + 1,
            dim(item.code.as_str()),
            bold(&item.title),
            green(&format!("{:.1}%", item.percentage)),
        );
    }
}

/// Print one occupation record.
pub fn print_record(record: &OccupationRecord) {
    println!("{}  {}", dim(record.code.as_str()), bold(&record.title));
    println!("  minor group: {}", record.minor_group_code);
    if let Some(description) = &record.description {
        println!("  {description}");
    }
    if !record.alternative_titles.is_empty() {
        println!("  also known as: {}", record.alternative_titles.join(", "));
    }
}

/// Print snapshot statistics.
pub fn print_stats(snapshot: &Snapshot) {
    println!("{}", bold("catalog snapshot"));
    println!("  occupations:   {}", snapshot.catalog.len());
    println!("  major groups:  {}", snapshot.catalog.major_group_count());
    println!("  minor groups:  {}", snapshot.catalog.minor_group_count());
    println!("  sector rows:   {}", snapshot.sectors.len());
}
