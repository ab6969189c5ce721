#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! In-memory disaster report collection with radius queries and flat-file
//! persistence.
//!
//! [`ReportStore`] keeps reports in insertion order and answers radius
//! queries via the Haversine distance from `disaster_map_geo`. The
//! line-oriented storage format lives in [`codec`]; load/save against the
//! actual file (with pre-save backup) lives in [`file`].

pub mod codec;
pub mod file;

use std::cmp::Ordering;

use disaster_map_geo::{Coordinate, haversine_distance_km};
use disaster_map_report_models::Report;

/// Radius used by the standard "nearby reports" query, in kilometers.
pub const DEFAULT_RADIUS_KM: f64 = 10.0;

/// Errors from store persistence operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the storage file failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Non-fatal problems found while reading stored data.
///
/// The caller proceeds with whatever was recovered; these only describe
/// what was lost.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageDiagnostic {
    /// The leading record-count line was missing or not a number.
    /// Nothing could be recovered.
    #[error("record count line is missing or not a number")]
    CorruptHeader,

    /// The data ended, or a record became unparseable, before the declared
    /// record count was reached. Everything before that point was kept.
    #[error("storage truncated: expected {expected} reports, recovered {recovered}")]
    Truncated {
        /// Record count the header declared.
        expected: usize,
        /// Whole records recovered before the bad spot.
        recovered: usize,
    },
}

/// Ordered in-memory collection of disaster reports.
///
/// Insertion order is preserved; reports are never edited or removed once
/// registered. Radius queries return copies, leaving the stored records
/// untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportStore {
    reports: Vec<Report>,
}

impl ReportStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reports: Vec::new(),
        }
    }

    /// Builds a store from already-parsed reports, clearing any transient
    /// query distance they may carry.
    #[must_use]
    pub fn from_reports(mut reports: Vec<Report>) -> Self {
        for report in &mut reports {
            report.distance_from_reference_km = None;
        }
        Self { reports }
    }

    /// Appends a report to the end of the collection.
    ///
    /// Fields are trusted to already satisfy the validation contract in
    /// `disaster_map_report_models::validate`. The transient query distance
    /// is cleared on the way in.
    pub fn register(&mut self, mut report: Report) {
        report.distance_from_reference_km = None;
        self.reports.push(report);
    }

    /// All reports in insertion order.
    #[must_use]
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Number of stored reports.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Whether the store holds no reports.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Returns copies of every report within `radius_km` of `reference`,
    /// sorted nearest-first.
    ///
    /// Each returned copy has `distance_from_reference_km` set to its
    /// Haversine distance from the reference point. Equal distances keep
    /// their insertion order. The stored originals are never mutated.
    #[must_use]
    pub fn query_by_radius(&self, reference: Coordinate, radius_km: f64) -> Vec<Report> {
        let mut matches: Vec<Report> = self
            .reports
            .iter()
            .filter_map(|report| {
                let distance = haversine_distance_km(reference, report.location);
                if distance <= radius_km {
                    let mut found = report.clone();
                    found.distance_from_reference_km = Some(distance);
                    Some(found)
                } else {
                    None
                }
            })
            .collect();

        // Vec::sort_by is stable, which gives us the insertion-order
        // tie-break for equal distances.
        matches.sort_by(|a, b| {
            match (a.distance_from_reference_km, b.distance_from_reference_km) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                _ => Ordering::Equal,
            }
        });

        matches
    }
}
