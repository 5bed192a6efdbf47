//! Consolidation invariants observed through the public search API.

use std::collections::HashSet;

use crate::common::fixture_engine;
use metier::SearchQuery;

#[test]
fn results_never_repeat_an_occupation_code() {
    let engine = fixture_engine();
    for query in ["operator", "truck", "driver", "and", "forklift operator"] {
        let response = engine
            .search(&SearchQuery::new(query).page_size(50))
            .unwrap();
        let page = response.occupations().unwrap();
        let mut seen = HashSet::new();
        for item in &page.items {
            assert!(
                seen.insert(item.code.clone()),
                "duplicate code {} for query {query:?}",
                item.code
            );
        }
    }
}

#[test]
fn primary_and_alternative_match_consolidates_as_primary() {
    let engine = fixture_engine();
    // "truck" matches the primary title of 53-3032.00 and both of its
    // alternative titles
    let response = engine.search(&SearchQuery::new("truck")).unwrap();
    let page = response.occupations().unwrap();

    let drivers = page
        .items
        .iter()
        .find(|item| item.code.as_str() == "53-3032.00")
        .expect("truck drivers in results");
    assert!(!drivers.is_alternative_match);
    assert!(drivers
        .matched_alternative_titles
        .contains(&"Truck Driver".to_string()));
    assert!(drivers
        .matched_alternative_titles
        .contains(&"Semi Truck Driver".to_string()));
}

#[test]
fn alternative_only_match_reports_canonical_title() {
    let engine = fixture_engine();
    let response = engine.search(&SearchQuery::new("warehouse worker")).unwrap();
    let page = response.occupations().unwrap();

    assert!(!page.items.is_empty());
    let first = &page.items[0];
    assert_eq!(first.code.as_str(), "53-7062.00");
    assert_eq!(first.title, "Laborers and Freight, Stock, and Material Movers, Hand");
    assert!(first.is_alternative_match);
    assert_eq!(first.matched_alternative_titles, ["Warehouse Worker"]);
}

#[test]
fn group_labels_are_denormalized_onto_results() {
    let engine = fixture_engine();
    let response = engine.search(&SearchQuery::new("chief executives")).unwrap();
    let page = response.occupations().unwrap();

    let first = &page.items[0];
    let major = first.major_group.as_ref().expect("major group");
    let minor = first.minor_group.as_ref().expect("minor group");
    assert_eq!(major.code, "11");
    assert_eq!(major.title, "Management Occupations");
    assert_eq!(minor.code, "11-1");
    assert_eq!(minor.title, "Top Executives");
}

#[test]
fn missing_optional_fields_degrade_gracefully() {
    use crate::common;
    use metier::{CatalogData, Engine, StaticSource};

    // A record with no description, no alternatives, and an unknown minor
    // group still comes back as a result
    let data = CatalogData {
        major_groups: Vec::new(),
        minor_groups: Vec::new(),
        occupations: vec![common::record("99-9999.00", "Mystery Workers", "99-9", &[], "")],
        sector_distribution: Vec::new(),
    };
    let engine = Engine::open(&StaticSource::new(data)).unwrap();
    let response = engine.search(&SearchQuery::new("mystery")).unwrap();
    let page = response.occupations().unwrap();

    assert_eq!(page.items.len(), 1);
    let item = &page.items[0];
    assert_eq!(item.description, None);
    assert!(item.matched_alternative_titles.is_empty());
    assert!(item.top_industries.is_empty());
    assert!(item.major_group.is_none());
    assert!(item.minor_group.is_none());
}
