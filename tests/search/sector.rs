//! Sector boosts, filtering, and the top-occupations query.

use crate::common::fixture_engine;
use metier::SearchQuery;

#[test]
fn boost_orders_by_distribution_tier() {
    let engine = fixture_engine();
    // All three "operator" titles match as primary; the mining distribution
    // decides the order: 92.5% (x2.0) > 28.4% (x1.25) > 0.6% (x0.75)
    let response = engine
        .search(&SearchQuery::new("operator").sector("21").show_all(true).page_size(50))
        .unwrap();
    let page = response.occupations().unwrap();

    let codes: Vec<&str> = page.items.iter().map(|item| item.code.as_str()).collect();
    assert_eq!(codes, ["47-5041.00", "53-7051.00", "47-2073.00"]);

    assert!((page.items[0].rank - 2.0).abs() < 1e-9);
    assert!((page.items[1].rank - 1.25).abs() < 1e-9);
    assert!((page.items[2].rank - 0.75).abs() < 1e-9);
}

#[test]
fn filter_drops_codes_below_one_percent() {
    let engine = fixture_engine();
    let response = engine
        .search(&SearchQuery::new("operator").sector("21").page_size(50))
        .unwrap();
    let page = response.occupations().unwrap();

    let codes: Vec<&str> = page.items.iter().map(|item| item.code.as_str()).collect();
    // 47-2073.00 sits at 0.6% and is dropped without show_all
    assert_eq!(codes, ["47-5041.00", "53-7051.00"]);
}

#[test]
fn higher_distribution_outranks_lower_with_equal_match_quality() {
    let engine = fixture_engine();
    // Both records match "truck" in their primary titles; 28.4% (x1.25)
    // beats 12.0% (x1.1)
    let response = engine
        .search(&SearchQuery::new("truck").sector("21").show_all(true))
        .unwrap();
    let page = response.occupations().unwrap();

    let position = |code: &str| {
        page.items
            .iter()
            .position(|item| item.code.as_str() == code)
            .unwrap_or(usize::MAX)
    };
    assert!(position("53-7051.00") < position("53-3032.00"));
}

#[test]
fn no_sector_filter_means_no_boost_and_no_drop() {
    let engine = fixture_engine();
    let response = engine
        .search(&SearchQuery::new("operator").page_size(50))
        .unwrap();
    let page = response.occupations().unwrap();

    assert_eq!(page.items.len(), 3);
    for item in &page.items {
        assert!(item.sector_distribution.is_none());
        assert!(item.rank <= 1.0);
    }
}

#[test]
fn top_industries_caps_at_three() {
    let engine = fixture_engine();
    let response = engine.search(&SearchQuery::new("forklift operator")).unwrap();
    let page = response.occupations().unwrap();

    let first = &page.items[0];
    assert_eq!(first.code.as_str(), "53-7051.00");
    // 53-7051.00 has four sector rows; only the top three are shown
    let sectors: Vec<&str> = first
        .top_industries
        .iter()
        .map(|share| share.sector.as_str())
        .collect();
    assert_eq!(sectors, ["31-33", "42", "23"]);
}

#[test]
fn top_occupations_joins_catalog_titles() {
    let engine = fixture_engine();
    let top = engine.top_occupations(Some("21")).unwrap();

    for item in &top {
        assert!(!item.title.is_empty());
        assert!(item.percentage > 0.0);
    }
}

#[test]
fn top_occupations_for_unknown_sector_is_empty() {
    let engine = fixture_engine();
    assert!(engine.top_occupations(Some("99")).unwrap().is_empty());
}
