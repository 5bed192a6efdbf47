//! Pagination metadata and slicing.

use crate::common::fixture_engine;
use metier::SearchQuery;

#[test]
fn pages_slice_the_sorted_result_list() {
    let engine = fixture_engine();
    // "and" matches 7 fixture records
    let query = SearchQuery::new("and").page_size(3);
    let page_one = engine.search(&query).unwrap();
    let one = page_one.occupations().unwrap();

    assert_eq!(one.total_count, 7);
    assert_eq!(one.total_pages, 3);
    assert_eq!(one.current_page, 1);
    assert_eq!(one.items.len(), 3);

    let query = SearchQuery::new("and").page(3).page_size(3);
    let page_three = engine.search(&query).unwrap();
    let three = page_three.occupations().unwrap();
    assert_eq!(three.current_page, 3);
    assert_eq!(three.items.len(), 1);

    // No overlap between pages
    assert_ne!(one.items[0].code, three.items[0].code);
}

#[test]
fn page_beyond_range_is_empty_with_stable_counts() {
    let engine = fixture_engine();
    let query = SearchQuery::new("and").page(9).page_size(3);
    let response = engine.search(&query).unwrap();
    let page = response.occupations().unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.total_count, 7);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.current_page, 9);
}

#[test]
fn page_size_never_exceeded() {
    let engine = fixture_engine();
    for page_size in [1, 2, 5, 50] {
        let query = SearchQuery::new("and").page_size(page_size);
        let response = engine.search(&query).unwrap();
        let page = response.occupations().unwrap();
        assert!(page.items.len() <= page_size);
    }
}

#[test]
fn constructor_clamps_out_of_range_values() {
    let engine = fixture_engine();
    let query = SearchQuery::new("and").page(0).page_size(500);
    let response = engine.search(&query).unwrap();
    let page = response.occupations().unwrap();
    assert_eq!(page.current_page, 1);
    assert_eq!(page.items.len(), 7);
}
