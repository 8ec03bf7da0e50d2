//src/tracker.rs
use crate::store::{self, Catalog, Error, TrackerState};
use chrono::{DateTime, Months, Utc};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerOutcome {
    /// First run: snapshot and state written.
    Created,
    /// A month had passed; snapshot overwritten and `last_edited` moved to now.
    Refreshed,
    UpToDate,
}

/// True once `now` is at least one calendar month past `last_edited`.
/// Jan 31 + 1 month clamps to the end of February.
pub fn refresh_due(last_edited: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    match last_edited.checked_add_months(Months::new(1)) {
        Some(due) => now >= due,
        None => false,
    }
}

/// Makes sure the snapshot at `tracker_path` exists and is at most a month old.
///
/// Snapshots are always full copies of `catalog`, never merged.
///
/// # Errors
/// Fails if the state record next to an existing snapshot is missing or
/// malformed, or if a snapshot or state write fails.
pub fn ensure_tracker_fresh(
    catalog: &Catalog,
    tracker_path: &Path,
    state_path: &Path,
    now: DateTime<Utc>,
) -> Result<TrackerOutcome, Error> {
    let fresh_state = TrackerState {
        tracker_file: tracker_path.to_path_buf(),
        last_edited: now,
    };

    if !tracker_path.exists() {
        store::save_catalog(tracker_path, catalog)?;
        store::save_state(state_path, &fresh_state)?;
        tracing::info!("Created tracker snapshot at {}", tracker_path.display());
        return Ok(TrackerOutcome::Created);
    }

    // Once a snapshot exists its state must load; a missing file is an I/O error.
    let state = store::load_state(state_path)?;
    if refresh_due(state.last_edited, now) {
        store::save_catalog(tracker_path, catalog)?;
        store::save_state(state_path, &fresh_state)?;
        tracing::info!(
            "Tracker snapshot refreshed (last edited {})",
            state.last_edited.to_rfc3339()
        );
        return Ok(TrackerOutcome::Refreshed);
    }

    tracing::debug!("Tracker snapshot is up to date");
    Ok(TrackerOutcome::UpToDate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn refresh_uses_calendar_months() {
        let last = at("2024-01-31T12:00:00Z");
        // February 2024 has 29 days, so the due date clamps to Feb 29.
        assert!(!refresh_due(last, at("2024-02-29T11:59:59Z")));
        assert!(refresh_due(last, at("2024-02-29T12:00:00Z")));

        let last = at("2024-03-01T00:00:00Z");
        // 30 days later is not yet a month in March.
        assert!(!refresh_due(last, at("2024-03-31T00:00:00Z")));
        assert!(refresh_due(last, at("2024-04-01T00:00:00Z")));
    }

    #[test]
    fn missing_state_next_to_snapshot_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let tracker_path = dir.path().join("tracker.json");
        let state_path = dir.path().join("tracker_state.json");
        let catalog = Catalog::new();
        store::save_catalog(&tracker_path, &catalog).unwrap();

        let result = ensure_tracker_fresh(&catalog, &tracker_path, &state_path, Utc::now());
        assert!(matches!(result, Err(Error::Io { .. })));
        assert!(!state_path.exists());
    }

    #[test]
    fn refresh_is_not_due_before_last_edit() {
        let last = at("2024-05-10T00:00:00Z");
        assert!(!refresh_due(last, at("2024-04-10T00:00:00Z")));
    }
}
