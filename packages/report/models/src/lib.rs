#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Disaster report record types shared across the toolchain.
//!
//! A [`Report`] is one incident submitted by a reporter: contact info,
//! disaster details, an occurrence date, and a location. The field-level
//! validation contract that input capture must enforce before constructing
//! a report lives in [`validate`].

pub mod validate;

use disaster_map_geo::Coordinate;
use serde::{Deserialize, Serialize};

/// A single disaster incident record submitted by a reporter.
///
/// String fields are expected to already satisfy the [`validate`] contract;
/// the record itself does not re-check them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Full name of the person reporting the incident.
    pub reporter_name: String,
    /// Reporter's phone number (digits only, 10 or 11 of them).
    pub reporter_phone: String,
    /// Reporter's email address.
    pub reporter_email: String,
    /// Kind of disaster (e.g. "Flood", "Landslide"). Free text.
    pub disaster_type: String,
    /// Free-text description of what happened.
    pub description: String,
    /// Occurrence date as `YYYY-MM-DD`.
    pub occurred_on: String,
    /// Where the incident happened.
    pub location: Coordinate,
    /// Distance from the reference point of the last radius query, in km.
    ///
    /// Transient: `None` on creation and after any load from storage; set
    /// only on the copies a radius query returns. Never serialized.
    #[serde(skip)]
    pub distance_from_reference_km: Option<f64>,
}

impl Report {
    /// Creates a report with the transient query distance unset.
    #[must_use]
    pub const fn new(
        reporter_name: String,
        reporter_phone: String,
        reporter_email: String,
        disaster_type: String,
        description: String,
        occurred_on: String,
        location: Coordinate,
    ) -> Self {
        Self {
            reporter_name,
            reporter_phone,
            reporter_email,
            disaster_type,
            description,
            occurred_on,
            location,
            distance_from_reference_km: None,
        }
    }
}
