// src/lib.rs
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rand::Rng;
use std::path::{Path, PathBuf};

// --- Declare modules ---
mod config;
pub mod picker;
pub mod store;
pub mod tracker;

// --- Expose public types ---
pub use config::{
    get_config_dir as get_config_dir_util, load as load_config_util, Config, Error as ConfigError,
    DEFAULT_GALLOP_PICKING_URL, DEFAULT_METRONOME_URL,
};
pub use picker::{pick_daily, pick_notes, Note, DAILY_CATEGORIES};
pub use store::{sorted_keys, Catalog, Error as StoreError, Exercises, TrackerState};
pub use tracker::{ensure_tracker_fresh, refresh_due, TrackerOutcome};

/// Owns the live catalog, the comparison snapshot and the resolved file paths.
pub struct PracticeService {
    pub config: Config,
    pub catalog: Catalog,
    /// Last period's copy of the catalog.
    pub snapshot: Catalog,
    pub catalog_path: PathBuf,
    pub tracker_outcome: TrackerOutcome,
}

impl PracticeService {
    /// Initializes the service from the default config directory.
    /// # Errors
    /// Returns `anyhow::Error` if the config, catalog or tracker files cannot
    /// be read, parsed or written.
    pub fn initialize() -> Result<Self> {
        let config_dir =
            config::get_config_dir().context("Failed to determine configuration directory")?;
        Self::open(&config_dir, Utc::now())
    }

    /// Loads `config.toml` from `config_dir` and starts the service at `now`.
    /// # Errors
    /// See [`PracticeService::with_config`].
    pub fn open(config_dir: &Path, now: DateTime<Utc>) -> Result<Self> {
        let config_path = config::get_config_path(config_dir);
        let config = config::load(&config_path)
            .with_context(|| format!("Failed to load config from {config_path:?}"))?;
        Self::with_config(config, config_dir, now)
    }

    /// Loads the catalog and brings the tracker snapshot up to date.
    /// # Errors
    /// Any failure here is fatal for startup: missing or malformed catalog,
    /// unreadable tracker state, or a failed snapshot write.
    pub fn with_config(config: Config, config_dir: &Path, now: DateTime<Utc>) -> Result<Self> {
        let catalog_path = config_dir.join(&config.catalog_file);
        let tracker_path = config_dir.join(&config.tracker_file);
        let state_path = config_dir.join(&config.state_file);

        let catalog = store::load_catalog(&catalog_path)
            .with_context(|| format!("Failed to load catalog from {catalog_path:?}"))?;

        let tracker_outcome = tracker::ensure_tracker_fresh(&catalog, &tracker_path, &state_path, now)
            .context("Failed to update tracker snapshot")?;

        let snapshot = store::load_catalog(&tracker_path)
            .with_context(|| format!("Failed to load tracker snapshot from {tracker_path:?}"))?;

        tracing::info!(
            "Loaded {} categories from {} (tracker: {:?})",
            catalog.len(),
            catalog_path.display(),
            tracker_outcome
        );

        Ok(Self {
            config,
            catalog,
            snapshot,
            catalog_path,
            tracker_outcome,
        })
    }

    /// Category names in display order.
    pub fn categories(&self) -> Vec<String> {
        store::sorted_keys(&self.catalog)
    }

    /// Exercise names of `category` in display order; empty for an unknown category.
    pub fn exercises(&self, category: &str) -> Vec<String> {
        self.catalog
            .get(category)
            .map(store::sorted_keys)
            .unwrap_or_default()
    }

    pub fn tempo(&self, category: &str, exercise: &str) -> Option<u32> {
        self.catalog.get(category)?.get(exercise).copied()
    }

    /// Tempo recorded in the snapshot, if the exercise existed back then.
    pub fn last_period_tempo(&self, category: &str, exercise: &str) -> Option<u32> {
        self.snapshot.get(category)?.get(exercise).copied()
    }

    /// Sets a tempo and rewrites the catalog file.
    /// # Errors
    /// Returns an error if the write fails. The in-memory catalog keeps the
    /// new tempo either way.
    pub fn set_tempo(&mut self, category: &str, exercise: &str, bpm: u32) -> Result<()> {
        self.catalog
            .entry(category.to_string())
            .or_default()
            .insert(exercise.to_string(), bpm);
        tracing::info!("{category} / {exercise} set to {bpm} BPM");

        store::save_catalog(&self.catalog_path, &self.catalog)
            .with_context(|| format!("Failed to save catalog to {:?}", self.catalog_path))
    }

    /// One random exercise from each configured daily category.
    pub fn pick_daily<R: Rng + ?Sized>(&self, rng: &mut R) -> Catalog {
        picker::pick_daily(&self.catalog, &self.config.daily_categories, rng)
    }

    pub fn hotkey_url(&self, category: &str) -> Option<&str> {
        self.config.hotkey_url(category)
    }

    pub fn is_note_drill(&self, category: &str) -> bool {
        self.config.note_drill_category == category
    }
}
