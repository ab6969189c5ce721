#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Menu-driven console for the disaster report system.
//!
//! Loads the report collection from the flat storage file at startup,
//! then loops a `dialoguer` menu: register, list, radius query, save,
//! exit (which saves first). All field validation happens in the prompt
//! layer; the store only ever receives clean records.

mod config;
mod interactive;
mod render;

use std::path::PathBuf;

use clap::Parser;
use dialoguer::Select;
use disaster_map_store::{ReportStore, file};

/// Command-line arguments. Both are optional; see [`config`] for the
/// data-file precedence rules.
#[derive(Debug, Parser)]
#[command(
    name = "disaster-map",
    about = "Record and query natural-disaster incident reports"
)]
struct Args {
    /// Storage file for reports (overrides the config file).
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// TOML config file (defaults to ./disaster-map.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Top-level actions in the main menu.
enum MenuAction {
    Register,
    ListAll,
    QueryRadius,
    Save,
    Exit,
}

impl MenuAction {
    const ALL: &[Self] = &[
        Self::Register,
        Self::ListAll,
        Self::QueryRadius,
        Self::Save,
        Self::Exit,
    ];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Register => "Register new report",
            Self::ListAll => "List all reports",
            Self::QueryRadius => "Query reports by radius (10 km)",
            Self::Save => "Save reports now",
            Self::Exit => "Save and exit",
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let args = Args::parse();
    let config = config::CliConfig::load(args.config.as_deref())?;
    let data_file = config::resolve_data_file(args.data_file, &config);

    let mut store = file::load(&data_file);

    println!("Disaster Report System");
    println!();

    let labels: Vec<&str> = MenuAction::ALL.iter().map(MenuAction::label).collect();

    loop {
        let idx = Select::new()
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact()?;

        match MenuAction::ALL[idx] {
            MenuAction::Register => interactive::register_report(&mut store)?,
            MenuAction::ListAll => {
                println!("--- All Reports ---");
                render::print_reports(store.reports());
            }
            MenuAction::QueryRadius => interactive::query_by_radius(&store)?,
            MenuAction::Save => save_reports(&store, &data_file),
            MenuAction::Exit => {
                save_reports(&store, &data_file);
                println!("Goodbye.");
                break;
            }
        }
    }

    Ok(())
}

/// Saves and reports failure without aborting the session; losing one save
/// should not lose the in-memory reports too.
fn save_reports(store: &ReportStore, data_file: &std::path::Path) {
    match file::save(store, data_file) {
        Ok(()) => println!("Reports saved to {}.", data_file.display()),
        Err(err) => {
            log::error!("Failed to save reports to {}: {err}", data_file.display());
            println!("Warning: reports could not be saved ({err}).");
        }
    }
}
