//! Plain-text rendering of reports for the terminal.

use std::fmt::Write as _;

use disaster_map_report_models::Report;

/// Formats one report as the multi-line block the listing screens print.
///
/// The distance line appears only on query results, where the transient
/// query distance is set.
#[must_use]
pub fn format_report(number: usize, report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- Report {number} ---");
    let _ = writeln!(
        out,
        "Reporter: {} (Tel: {}, Email: {})",
        report.reporter_name, report.reporter_phone, report.reporter_email
    );
    let _ = writeln!(
        out,
        "Disaster: {} on {}",
        report.disaster_type, report.occurred_on
    );
    let _ = writeln!(out, "Description: {}", report.description);
    let _ = write!(
        out,
        "Location: Lat {:.4}, Lon {:.4}",
        report.location.latitude(),
        report.location.longitude()
    );
    if let Some(distance) = report.distance_from_reference_km {
        let _ = write!(out, " (Distance: {distance:.2} km)");
    }
    out.push('\n');
    out
}

/// Prints a numbered listing of `reports`, or a notice when there are none.
pub fn print_reports(reports: &[Report]) {
    if reports.is_empty() {
        println!("No reports registered yet.");
        return;
    }
    for (index, report) in reports.iter().enumerate() {
        print!("{}", format_report(index + 1, report));
    }
}
