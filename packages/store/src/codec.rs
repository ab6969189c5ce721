//! Line-oriented text codec for the report storage file.
//!
//! The format predates this rewrite and must stay byte-compatible: a
//! decimal record-count line, then eight lines per report in fixed order
//! (name, phone, email, disaster type, description, date, latitude,
//! longitude). Coordinates are written with six decimal places. Field
//! values never contain newlines because registration captures them as
//! single lines.

use std::fmt::Write as _;
use std::str::Lines;

use disaster_map_geo::Coordinate;
use disaster_map_report_models::Report;

use crate::{ReportStore, StorageDiagnostic};

/// Result of decoding a storage blob: whatever was recovered, plus a
/// diagnostic describing anything that was lost.
#[derive(Debug, Clone, PartialEq)]
pub struct DeserializeOutcome {
    /// The recovered collection, possibly empty.
    pub store: ReportStore,
    /// `None` when the blob decoded cleanly.
    pub diagnostic: Option<StorageDiagnostic>,
}

/// Encodes the whole collection into the storage text format.
#[must_use]
pub fn serialize(store: &ReportStore) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", store.len());

    for report in store.reports() {
        out.push_str(&report.reporter_name);
        out.push('\n');
        out.push_str(&report.reporter_phone);
        out.push('\n');
        out.push_str(&report.reporter_email);
        out.push('\n');
        out.push_str(&report.disaster_type);
        out.push('\n');
        out.push_str(&report.description);
        out.push('\n');
        out.push_str(&report.occurred_on);
        out.push('\n');
        let _ = writeln!(out, "{:.6}", report.location.latitude());
        let _ = writeln!(out, "{:.6}", report.location.longitude());
    }

    out
}

/// Decodes a storage blob, recovering as many whole records as possible.
///
/// A bad record-count line yields an empty store with
/// [`StorageDiagnostic::CorruptHeader`]. A blob that ends (or turns
/// unparseable) before the declared count is reached yields every record
/// before the bad spot with [`StorageDiagnostic::Truncated`]. Recovered
/// reports always have the transient query distance unset.
#[must_use]
pub fn deserialize(text: &str) -> DeserializeOutcome {
    let mut lines = text.lines();

    let Some(expected) = lines.next().and_then(|line| line.trim().parse::<usize>().ok()) else {
        return DeserializeOutcome {
            store: ReportStore::new(),
            diagnostic: Some(StorageDiagnostic::CorruptHeader),
        };
    };

    // Not with_capacity: a corrupt header should not drive allocation.
    let mut reports = Vec::new();
    let mut diagnostic = None;

    for _ in 0..expected {
        if let Some(report) = next_record(&mut lines) {
            reports.push(report);
        } else {
            diagnostic = Some(StorageDiagnostic::Truncated {
                expected,
                recovered: reports.len(),
            });
            break;
        }
    }

    DeserializeOutcome {
        store: ReportStore::from_reports(reports),
        diagnostic,
    }
}

/// Reads one eight-line record group, or `None` if the lines run out or
/// the coordinate lines do not parse to a valid coordinate.
fn next_record(lines: &mut Lines<'_>) -> Option<Report> {
    let reporter_name = lines.next()?.to_string();
    let reporter_phone = lines.next()?.to_string();
    let reporter_email = lines.next()?.to_string();
    let disaster_type = lines.next()?.to_string();
    let description = lines.next()?.to_string();
    let occurred_on = lines.next()?.to_string();
    let latitude: f64 = lines.next()?.trim().parse().ok()?;
    let longitude: f64 = lines.next()?.trim().parse().ok()?;
    let location = Coordinate::new(latitude, longitude).ok()?;

    Some(Report::new(
        reporter_name,
        reporter_phone,
        reporter_email,
        disaster_type,
        description,
        occurred_on,
        location,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(name: &str, lat: f64, lon: f64) -> Report {
        Report::new(
            name.to_string(),
            "11987654321".to_string(),
            "reporter@example.com".to_string(),
            "Landslide".to_string(),
            "Hillside gave way after heavy rain".to_string(),
            "2024-01-20".to_string(),
            Coordinate::new(lat, lon).unwrap(),
        )
    }

    fn two_report_store() -> ReportStore {
        let mut store = ReportStore::new();
        store.register(report("Ana", -23.5505, -46.6333));
        store.register(report("Bruno", -22.9068, -43.1729));
        store
    }

    #[test]
    fn serializes_count_then_eight_lines_per_report() {
        let text = serialize(&two_report_store());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 1 + 2 * 8);
        assert_eq!(lines[0], "2");
        assert_eq!(lines[1], "Ana");
        assert_eq!(lines[7], "-23.550500");
        assert_eq!(lines[8], "-46.633300");
        assert_eq!(lines[9], "Bruno");
    }

    #[test]
    fn empty_store_serializes_to_bare_count() {
        assert_eq!(serialize(&ReportStore::new()), "0\n");
    }

    #[test]
    fn round_trip_preserves_the_collection() {
        let store = two_report_store();
        let outcome = deserialize(&serialize(&store));

        assert_eq!(outcome.diagnostic, None);
        assert_eq!(outcome.store, store);
    }

    #[test]
    fn deserialized_reports_have_no_query_distance() {
        let outcome = deserialize(&serialize(&two_report_store()));
        for report in outcome.store.reports() {
            assert_eq!(report.distance_from_reference_km, None);
        }
    }

    #[test]
    fn truncated_blob_keeps_only_whole_records() {
        let text = serialize(&two_report_store());
        // Chop the blob in the middle of the second record.
        let keep: String = text
            .lines()
            .take(1 + 8 + 3)
            .map(|l| format!("{l}\n"))
            .collect();

        let outcome = deserialize(&keep);
        assert_eq!(outcome.store.len(), 1);
        assert_eq!(outcome.store.reports()[0].reporter_name, "Ana");
        assert_eq!(
            outcome.diagnostic,
            Some(StorageDiagnostic::Truncated {
                expected: 2,
                recovered: 1
            })
        );
    }

    #[test]
    fn unparseable_coordinate_truncates_at_that_record() {
        let mut text = serialize(&two_report_store());
        text = text.replace("-22.906800", "not-a-number");

        let outcome = deserialize(&text);
        assert_eq!(outcome.store.len(), 1);
        assert_eq!(
            outcome.diagnostic,
            Some(StorageDiagnostic::Truncated {
                expected: 2,
                recovered: 1
            })
        );
    }

    #[test]
    fn out_of_range_coordinate_counts_as_corrupt_record() {
        let mut text = serialize(&two_report_store());
        text = text.replace("-23.550500", "120.000000");

        let outcome = deserialize(&text);
        assert_eq!(outcome.store.len(), 0);
        assert_eq!(
            outcome.diagnostic,
            Some(StorageDiagnostic::Truncated {
                expected: 2,
                recovered: 0
            })
        );
    }

    #[test]
    fn bad_count_line_recovers_nothing() {
        for text in ["", "garbage\n", "-3\n"] {
            let outcome = deserialize(text);
            assert!(outcome.store.is_empty(), "input {text:?}");
            assert_eq!(outcome.diagnostic, Some(StorageDiagnostic::CorruptHeader));
        }
    }

    #[test]
    fn zero_count_decodes_to_empty_store() {
        let outcome = deserialize("0\n");
        assert!(outcome.store.is_empty());
        assert_eq!(outcome.diagnostic, None);
    }

    #[test]
    fn extra_records_beyond_the_count_are_ignored() {
        let store = two_report_store();
        let mut text = serialize(&store);
        text = text.replacen("2\n", "1\n", 1);

        let outcome = deserialize(&text);
        assert_eq!(outcome.store.len(), 1);
        assert_eq!(outcome.diagnostic, None);
    }
}
