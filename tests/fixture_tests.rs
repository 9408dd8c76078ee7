//! Layout rendering cases loaded from `fixtures/layouts.json`.

use std::sync::Arc;

use dtfmt::{CivilFields, FormatOptions, Formatter, LocaleCatalog, ZoneStyle};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Instant {
    year: i32,
    month: u32,
    day: u32,
    year_day: u32,
    weekday: u32,
    hour: u32,
    minute: u32,
    second: u32,
    zone_name: String,
    utc_offset: i32,
    unix_timestamp: i64,
}

impl From<Instant> for CivilFields {
    fn from(i: Instant) -> Self {
        CivilFields {
            year: i.year,
            month: i.month,
            day: i.day,
            year_day: i.year_day,
            weekday: i.weekday,
            hour: i.hour,
            minute: i.minute,
            second: i.second,
            zone_name: i.zone_name,
            utc_offset: i.utc_offset,
            unix_timestamp: i.unix_timestamp,
        }
    }
}

#[derive(Debug, Deserialize)]
struct LayoutCase {
    name: String,
    locale: String,
    #[serde(default)]
    zone_style: Option<String>,
    instant: Instant,
    layout: String,
    expected: String,
}

fn load_test_cases() -> Vec<LayoutCase> {
    let data = include_str!("fixtures/layouts.json");
    serde_json::from_str(data).unwrap()
}

#[test]
fn test_layout_fixtures() {
    let cases = load_test_cases();
    assert!(!cases.is_empty());

    let catalog = Arc::new(LocaleCatalog::with_builtins());
    let mut failures = Vec::new();

    for case in cases {
        let zone_style = match case.zone_style.as_deref() {
            Some("offset") => ZoneStyle::Offset,
            _ => ZoneStyle::Abbreviation,
        };
        let options = FormatOptions {
            zone_style,
            default_locale: case.locale.as_str().into(),
            ..FormatOptions::default()
        };
        let formatter = Formatter::with_catalog(Arc::clone(&catalog), options);
        let fields = CivilFields::from(case.instant);

        match formatter.render(&fields, &case.layout) {
            Ok(result) if result == case.expected => {}
            Ok(result) => failures.push(format!(
                "{}: layout {:?} expected {:?}, got {:?}",
                case.name, case.layout, case.expected, result
            )),
            Err(e) => failures.push(format!("{}: error {}", case.name, e)),
        }
    }

    assert!(failures.is_empty(), "fixture failures:\n{}", failures.join("\n"));
}
