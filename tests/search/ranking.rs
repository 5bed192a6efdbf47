//! Ordering behavior: ranks, tie-breaks, determinism.

use crate::common::fixture_engine;
use metier::SearchQuery;

#[test]
fn primary_title_match_outranks_alternative_only() {
    let engine = fixture_engine();
    let response = engine.search(&SearchQuery::new("driver")).unwrap();
    let page = response.occupations().unwrap();

    assert!(page.items.len() >= 2);
    // 53-3032.00 matches "driver" in its primary title; 53-7051.00 only via
    // the "Forklift Driver" alternative
    assert_eq!(page.items[0].code.as_str(), "53-3032.00");
    assert!(!page.items[0].is_alternative_match);
    assert_eq!(page.items[1].code.as_str(), "53-7051.00");
    assert!(page.items[1].is_alternative_match);
    assert!(page.items[0].rank > page.items[1].rank);
}

#[test]
fn equal_ranks_order_by_code_ascending() {
    let engine = fixture_engine();
    // "and" matches enough records for the exact stage; every hit carries
    // the same base rank, so the code tie-break decides everything
    let response = engine.search(&SearchQuery::new("and").page_size(50)).unwrap();
    let page = response.occupations().unwrap();

    assert!(page.items.len() >= 4);
    let ranks: Vec<f64> = page.items.iter().map(|item| item.rank).collect();
    assert!(ranks.windows(2).all(|pair| pair[0] >= pair[1]));

    let equal_rank_codes: Vec<&str> = page
        .items
        .iter()
        .filter(|item| (item.rank - page.items[0].rank).abs() < f64::EPSILON)
        .map(|item| item.code.as_str())
        .collect();
    let mut sorted = equal_rank_codes.clone();
    sorted.sort_unstable();
    assert_eq!(equal_rank_codes, sorted);
}

#[test]
fn ranks_are_monotonically_non_increasing() {
    let engine = fixture_engine();
    for query in ["operator", "truck", "and"] {
        let response = engine
            .search(&SearchQuery::new(query).sector("21").show_all(true).page_size(50))
            .unwrap();
        let page = response.occupations().unwrap();
        for pair in page.items.windows(2) {
            assert!(
                pair[0].rank >= pair[1].rank,
                "rank order violated for {query:?}: {} < {}",
                pair[0].rank,
                pair[1].rank
            );
        }
    }
}

#[test]
fn identical_queries_return_identical_output() {
    let engine = fixture_engine();
    let query = SearchQuery::new("operator").sector("21").show_all(true);

    let first = serde_json::to_string(&engine.search(&query).unwrap()).unwrap();
    let second = serde_json::to_string(&engine.search(&query).unwrap()).unwrap();
    assert_eq!(first, second);
}
