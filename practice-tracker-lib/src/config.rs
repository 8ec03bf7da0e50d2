//src/config.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_FILE_NAME: &str = "config.toml";
const APP_CONFIG_DIR: &str = "practice-tracker";
const CONFIG_ENV_VAR: &str = "PRACTICE_TRACKER_DIR"; // Environment variable name

pub const DEFAULT_METRONOME_URL: &str = "https://www.google.com/search?q=metronome";
pub const DEFAULT_GALLOP_PICKING_URL: &str = "https://www.youtube.com/watch?v=S-6Iq2wuf0A";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not determine configuration directory.")]
    CannotDetermineConfigDir,
    #[error("I/O error accessing config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file (TOML): {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Failed to serialize config data (TOML): {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("Success banner duration must be at least one second, got {0}.")]
    InvalidBannerDuration(u64),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)] // Ensure defaults are used if fields are missing
pub struct Config {
    /// Relative paths are resolved against the config directory.
    pub catalog_file: PathBuf,
    pub tracker_file: PathBuf,
    pub state_file: PathBuf,

    pub metronome_url: String,
    /// Category that opens the note-location drill.
    pub note_drill_category: String,
    /// Categories the daily set draws from, one exercise each.
    pub daily_categories: Vec<String>,
    pub success_banner_secs: u64,

    // Tables must come after plain values for TOML serialization.
    /// Categories that open a URL instead of a submenu.
    pub hotkeys: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        let mut hotkeys = BTreeMap::new();
        hotkeys.insert(
            "Gallop Picking".to_string(),
            DEFAULT_GALLOP_PICKING_URL.to_string(),
        );
        Self {
            catalog_file: PathBuf::from("techniques.json"),
            tracker_file: PathBuf::from("tracker.json"),
            state_file: PathBuf::from("tracker_state.json"),
            metronome_url: DEFAULT_METRONOME_URL.to_string(),
            note_drill_category: "Note Location".to_string(),
            daily_categories: crate::picker::DAILY_CATEGORIES
                .iter()
                .map(|c| (*c).to_string())
                .collect(),
            success_banner_secs: 3,
            hotkeys,
        }
    }
}

impl Config {
    /// Checks values that serde cannot reject on its own.
    /// # Errors
    /// Returns `Error::InvalidBannerDuration` for a zero banner duration.
    pub fn validate(&self) -> Result<(), Error> {
        if self.success_banner_secs == 0 {
            return Err(Error::InvalidBannerDuration(self.success_banner_secs));
        }
        Ok(())
    }

    /// Returns the URL bound to `category`, if it is a hotkey category.
    pub fn hotkey_url(&self, category: &str) -> Option<&str> {
        self.hotkeys.get(category).map(String::as_str)
    }
}

/// Determines the directory holding the config, catalog and tracker files.
pub fn get_config_dir() -> Result<PathBuf, Error> {
    let config_dir_override = std::env::var(CONFIG_ENV_VAR).ok();

    let config_dir_path = if let Some(path_str) = config_dir_override {
        PathBuf::from(path_str)
    } else {
        let base_config_dir = dirs::config_dir().ok_or(Error::CannotDetermineConfigDir)?;
        base_config_dir.join(APP_CONFIG_DIR)
    };

    if !config_dir_path.exists() {
        tracing::info!("Creating config directory {}", config_dir_path.display());
        fs::create_dir_all(&config_dir_path)?;
    }

    Ok(config_dir_path)
}

/// Path of `config.toml` inside `config_dir`.
pub fn get_config_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE_NAME)
}

/// Loads the configuration from the TOML file at the given path.
/// A missing file is created with default values.
pub fn load(config_path: &Path) -> Result<Config, Error> {
    if config_path.exists() {
        let config_content = fs::read_to_string(config_path)?;
        let config: Config = toml::from_str(&config_content).map_err(Error::TomlParse)?;
        config.validate()?;
        Ok(config)
    } else {
        // Don't print here, let caller decide how to inform user
        let default_config = Config::default();
        save(config_path, &default_config)?;
        Ok(default_config)
    }
}

/// Saves the configuration to the TOML file.
pub fn save(config_path: &Path, config: &Config) -> Result<(), Error> {
    if let Some(parent_dir) = config_path.parent() {
        if !parent_dir.exists() {
            fs::create_dir_all(parent_dir)?;
        }
    }
    let config_content = toml::to_string_pretty(config).map_err(Error::TomlSerialize)?;
    fs::write(config_path, config_content)?;
    Ok(())
}
