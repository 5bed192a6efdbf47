//! Short-query behavior: the browsable hierarchy instead of search results.

use crate::common::fixture_engine;
use metier::SearchQuery;

#[test]
fn empty_query_returns_browse_groups() {
    let engine = fixture_engine();
    let response = engine.search(&SearchQuery::new("")).unwrap();

    let page = response.groups().expect("browse response");
    assert_eq!(page.total_count, 5);
    assert_eq!(page.current_page, 1);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.query, "");
}

#[test]
fn one_character_query_returns_browse_groups() {
    let engine = fixture_engine();
    let response = engine.search(&SearchQuery::new("a")).unwrap();
    assert!(response.groups().is_some());
    assert!(response.occupations().is_none());
}

#[test]
fn whitespace_only_query_counts_as_empty() {
    let engine = fixture_engine();
    let response = engine.search(&SearchQuery::new("   ")).unwrap();
    assert!(response.groups().is_some());
}

#[test]
fn two_character_query_searches() {
    let engine = fixture_engine();
    let response = engine.search(&SearchQuery::new("rn")).unwrap();
    assert!(response.occupations().is_some());
}

#[test]
fn browse_groups_are_ordered_with_nested_minors() {
    let engine = fixture_engine();
    let response = engine.search(&SearchQuery::new("")).unwrap();
    let page = response.groups().unwrap();

    let codes: Vec<&str> = page.items.iter().map(|g| g.code.as_str()).collect();
    assert_eq!(codes, ["11", "29", "41", "47", "53"]);

    let construction = &page.items[3];
    let minors: Vec<&str> = construction
        .minor_groups
        .iter()
        .map(|m| m.code.as_str())
        .collect();
    assert_eq!(minors, ["47-2", "47-5"]);
}
