//! Flat-file load/save for the report store.
//!
//! The storage file path is supplied by the surrounding application. Saves
//! first copy the existing file to `<path>.backup`, then rewrite the whole
//! file. Loads never fail: a missing or corrupt file just means fewer (or
//! zero) recovered reports, reported through `log::warn!`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::codec::{self, DeserializeOutcome};
use crate::{ReportStore, StoreError};

/// Where the pre-save copy of `path` goes: `<path>.backup` alongside it.
#[must_use]
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".backup");
    PathBuf::from(name)
}

/// Writes the whole collection to `path`, backing up the previous file
/// contents to [`backup_path`] first.
///
/// The backup is best-effort: a failed copy is logged and does not block
/// the save.
///
/// # Errors
///
/// Returns [`StoreError::Io`] if writing the storage file itself fails.
pub fn save(store: &ReportStore, path: &Path) -> Result<(), StoreError> {
    back_up_existing(path);
    fs::write(path, codec::serialize(store))?;
    log::info!("Saved {} reports to {}", store.len(), path.display());
    Ok(())
}

/// Reads the collection from `path`, recovering what it can.
///
/// A missing or unreadable file yields an empty store; a truncated or
/// corrupt file yields every record before the damage. Both cases warn
/// and let the caller continue.
#[must_use]
pub fn load(path: &Path) -> ReportStore {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            log::warn!(
                "Could not read {}: {err}. Starting with an empty collection.",
                path.display()
            );
            return ReportStore::new();
        }
    };

    let DeserializeOutcome { store, diagnostic } = codec::deserialize(&text);
    if let Some(diagnostic) = diagnostic {
        log::warn!(
            "Storage file {} is damaged ({diagnostic}); continuing with {} recovered reports",
            path.display(),
            store.len()
        );
    } else {
        log::info!("Loaded {} reports from {}", store.len(), path.display());
    }

    store
}

fn back_up_existing(path: &Path) {
    if !path.exists() {
        return;
    }
    let backup = backup_path(path);
    match fs::copy(path, &backup) {
        Ok(_) => log::debug!("Backed up {} to {}", path.display(), backup.display()),
        Err(err) => log::warn!(
            "Could not back up {} to {}: {err}",
            path.display(),
            backup.display()
        ),
    }
}
