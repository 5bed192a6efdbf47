//! Shared test fixtures: a small but realistic occupation catalog.

#![allow(dead_code)]

use metier::{
    CatalogData, Engine, MajorGroup, MinorGroup, OccupationRecord, SectorDistributionEntry,
    SocCode, StaticSource,
};

pub fn major(code: &str, title: &str) -> MajorGroup {
    MajorGroup {
        code: code.to_string(),
        title: title.to_string(),
        description: None,
    }
}

pub fn minor(code: &str, major_code: &str, title: &str) -> MinorGroup {
    MinorGroup {
        code: code.to_string(),
        major_group_code: major_code.to_string(),
        title: title.to_string(),
        description: None,
    }
}

pub fn record(
    code: &str,
    title: &str,
    minor_code: &str,
    alts: &[&str],
    description: &str,
) -> OccupationRecord {
    OccupationRecord {
        code: SocCode::parse(code).expect("fixture code"),
        title: title.to_string(),
        description: if description.is_empty() {
            None
        } else {
            Some(description.to_string())
        },
        minor_group_code: minor_code.to_string(),
        alternative_titles: alts.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn dist(code: &str, sector: &str, percentage: f32) -> SectorDistributionEntry {
    SectorDistributionEntry {
        soc_code: SocCode::parse(code).expect("fixture code"),
        sector_label: sector.to_string(),
        percentage,
        sample_size: None,
        date_updated: None,
    }
}

/// A catalog small enough to reason about by hand, with the occupations the
/// scenario tests rely on.
pub fn fixture_data() -> CatalogData {
    CatalogData {
        major_groups: vec![
            major("11", "Management Occupations"),
            major("29", "Healthcare Practitioners and Technical Occupations"),
            major("41", "Sales and Related Occupations"),
            major("47", "Construction and Extraction Occupations"),
            major("53", "Transportation and Material Moving Occupations"),
        ],
        minor_groups: vec![
            minor("11-1", "11", "Top Executives"),
            minor("29-1", "29", "Healthcare Diagnosing or Treating Practitioners"),
            minor("41-2", "41", "Retail Sales Workers"),
            minor("47-2", "47", "Construction Trades Workers"),
            minor("47-5", "47", "Extraction Workers"),
            minor("53-3", "53", "Motor Vehicle Operators"),
            minor("53-7", "53", "Material Moving Workers"),
        ],
        occupations: vec![
            record(
                "11-1011.00",
                "Chief Executives",
                "11-1",
                &["CEO", "Chief Executive Officer"],
                "Determine and formulate policies and provide overall direction of companies.",
            ),
            record(
                "29-1141.00",
                "Registered Nurses",
                "29-1",
                &["RN", "Staff Nurse"],
                "Assess patient health problems and needs and maintain medical records.",
            ),
            record(
                "41-2031.00",
                "Retail Salespersons",
                "41-2",
                &["Sales Associate"],
                "Sell merchandise in a retail establishment.",
            ),
            record(
                "47-2073.00",
                "Operating Engineers and Other Construction Equipment Operators",
                "47-2",
                &["Heavy Equipment Operator"],
                "Operate one or several types of power construction equipment.",
            ),
            record(
                "47-5041.00",
                "Continuous Mining Machine Operators",
                "47-5",
                &["Continuous Miner Operator"],
                "Operate self-propelled mining machines that rip coal, metal and \
                 nonmetal ores, rock, stone, or sand from the mine face.",
            ),
            record(
                "53-3032.00",
                "Heavy and Tractor-Trailer Truck Drivers",
                "53-3",
                &["Truck Driver", "Semi Truck Driver"],
                "Drive a tractor-trailer combination or a truck with a capacity of \
                 at least 26,001 pounds.",
            ),
            record(
                "53-7051.00",
                "Industrial Truck and Tractor Operators",
                "53-7",
                &["Forklift Operator", "Forklift Driver", "Tow Motor Operator"],
                "Operate industrial trucks or tractors equipped to move materials \
                 around a warehouse, storage yard, factory, or similar location.",
            ),
            record(
                "53-7062.00",
                "Laborers and Freight, Stock, and Material Movers, Hand",
                "53-7",
                &["Warehouse Worker"],
                "Manually move freight, stock, or other materials.",
            ),
        ],
        sector_distribution: vec![
            // Mining sector
            dist("47-5041.00", "21", 92.5),
            dist("53-7051.00", "21", 28.4),
            dist("53-3032.00", "21", 12.0),
            dist("53-7062.00", "21", 3.2),
            dist("47-2073.00", "21", 0.6),
            // Other sectors, for topIndustries variety
            dist("53-7051.00", "31-33", 55.1),
            dist("53-7051.00", "42", 48.0),
            dist("53-7051.00", "23", 35.2),
            dist("11-1011.00", "42", 5.5),
            dist("41-2031.00", "44-45", 88.0),
        ],
    }
}

/// Engine over the fixture catalog.
pub fn fixture_engine() -> Engine {
    Engine::open(&StaticSource::new(fixture_data())).expect("fixture engine")
}
