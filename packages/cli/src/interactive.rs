//! Prompt flows for registering reports and running radius queries.
//!
//! This is the input-capture collaborator: every field is validated here,
//! re-prompting until it satisfies the contract in
//! `disaster_map_report_models::validate`, so the store only ever sees
//! clean records.

use dialoguer::Input;
use disaster_map_geo::Coordinate;
use disaster_map_report_models::{Report, validate};
use disaster_map_store::{DEFAULT_RADIUS_KM, ReportStore};

use crate::render;

/// Prompts for every report field and registers the result.
///
/// # Errors
///
/// Returns an error only if the terminal interaction itself fails;
/// invalid input is handled by re-prompting.
pub fn register_report(store: &mut ReportStore) -> Result<(), Box<dyn std::error::Error>> {
    println!("--- Register New Report ---");

    let reporter_name = prompt_text("Reporter name", "name")?;
    let reporter_phone: String = Input::new()
        .with_prompt("Reporter phone (digits only, 10 or 11)")
        .validate_with(|value: &String| validate::phone(value).map_err(|e| e.to_string()))
        .interact_text()?;
    let reporter_email: String = Input::new()
        .with_prompt("Reporter email")
        .validate_with(|value: &String| validate::email(value).map_err(|e| e.to_string()))
        .interact_text()?;
    let disaster_type = prompt_text("Disaster type (e.g. Flood, Landslide)", "disaster type")?;
    let description = prompt_text("Detailed description", "description")?;
    let occurred_on: String = Input::new()
        .with_prompt("Occurrence date (YYYY-MM-DD)")
        .validate_with(|value: &String| validate::date(value).map_err(|e| e.to_string()))
        .interact_text()?;

    println!("Incident location:");
    let location = prompt_coordinate()?;

    store.register(Report::new(
        reporter_name,
        reporter_phone,
        reporter_email,
        disaster_type,
        description,
        occurred_on,
        location,
    ));
    println!("Report registered.");
    Ok(())
}

/// Prompts for a reference point and prints every report within the fixed
/// radius, nearest first.
///
/// # Errors
///
/// Returns an error only if the terminal interaction itself fails.
pub fn query_by_radius(store: &ReportStore) -> Result<(), Box<dyn std::error::Error>> {
    println!("--- Radius Query (up to {DEFAULT_RADIUS_KM:.1} km) ---");
    if store.is_empty() {
        println!("No reports registered to query.");
        return Ok(());
    }

    println!("Reference point:");
    let reference = prompt_coordinate()?;

    let found = store.query_by_radius(reference, DEFAULT_RADIUS_KM);
    if found.is_empty() {
        println!("No reports within {DEFAULT_RADIUS_KM:.1} km of this point.");
    } else {
        println!("--- Reports found (nearest first) ---");
        render::print_reports(&found);
    }
    Ok(())
}

fn prompt_text(
    prompt: &str,
    field: &'static str,
) -> Result<String, Box<dyn std::error::Error>> {
    let value = Input::new()
        .with_prompt(prompt)
        .validate_with(|value: &String| validate::text_field(field, value).map_err(|e| e.to_string()))
        .interact_text()?;
    Ok(value)
}

fn prompt_coordinate() -> Result<Coordinate, Box<dyn std::error::Error>> {
    let latitude: f64 = Input::new()
        .with_prompt("  Latitude (-90 to 90)")
        .validate_with(|value: &f64| {
            if (-90.0..=90.0).contains(value) {
                Ok(())
            } else {
                Err("latitude must be between -90 and 90")
            }
        })
        .interact_text()?;

    let longitude: f64 = Input::new()
        .with_prompt("  Longitude (-180 to 180)")
        .validate_with(|value: &f64| {
            if (-180.0..=180.0).contains(value) {
                Ok(())
            } else {
                Err("longitude must be between -180 and 180")
            }
        })
        .interact_text()?;

    Ok(Coordinate::new(latitude, longitude)?)
}
