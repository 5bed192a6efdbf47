//! Batch reload: wholesale snapshot replacement.

use crate::common::{fixture_data, fixture_engine};
use metier::{Engine, EngineError, JsonFileSource, SearchQuery, StaticSource};

#[test]
fn reload_replaces_the_catalog_wholesale() {
    let engine = fixture_engine();

    let mut data = fixture_data();
    for record in &mut data.occupations {
        if record.code.as_str() == "53-7051.00" {
            record.title = "Powered Industrial Truck Operators".to_string();
        }
    }
    engine.reload(&StaticSource::new(data)).unwrap();

    let record = engine.lookup("53-7051.00").unwrap();
    assert_eq!(record.title, "Powered Industrial Truck Operators");
}

#[test]
fn failed_reload_keeps_the_previous_snapshot() {
    let engine = fixture_engine();
    let dir = tempfile::tempdir().unwrap();

    let err = engine
        .reload(&JsonFileSource::new(dir.path().join("missing.json")))
        .unwrap_err();
    assert!(matches!(err, EngineError::Upstream(_)));

    // Queries still run against the old data
    let response = engine.search(&SearchQuery::new("forklift operator")).unwrap();
    let page = response.occupations().unwrap();
    assert_eq!(page.items[0].code.as_str(), "53-7051.00");
}

#[test]
fn reload_affects_distribution_index_too() {
    let engine = fixture_engine();

    let mut data = fixture_data();
    data.sector_distribution.retain(|row| row.sector_label != "21");
    engine.reload(&StaticSource::new(data)).unwrap();

    assert!(engine.top_occupations(Some("21")).unwrap().is_empty());
}

#[test]
fn engine_can_reopen_from_scratch() {
    let engine = Engine::open(&StaticSource::new(fixture_data())).unwrap();
    assert_eq!(engine.snapshot().catalog.len(), 8);
    assert_eq!(engine.snapshot().sectors.len(), 10);
}
