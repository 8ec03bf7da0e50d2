//src/store.rs
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Exercise name -> tempo (BPM).
pub type Exercises = BTreeMap<String, u32>;

/// Category name -> exercises. `BTreeMap` keeps both levels sorted, both on
/// screen and in the written JSON.
pub type Catalog = BTreeMap<String, Exercises>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error accessing {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {path:?} (JSON): {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to serialize data for {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Bookkeeping for the monthly snapshot.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TrackerState {
    /// Snapshot path at the time of the last write. Informational only:
    /// the snapshot is always located through `Config::tracker_file`.
    pub tracker_file: PathBuf,
    /// Serialized as RFC3339.
    pub last_edited: DateTime<Utc>,
}

/// Keys of `map` in ascending order.
pub fn sorted_keys<V>(map: &BTreeMap<String, V>) -> Vec<String> {
    map.keys().cloned().collect()
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Error> {
    let data = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), Error> {
    let data = serde_json::to_string_pretty(value).map_err(|source| Error::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, data).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_catalog(path: &Path) -> Result<Catalog, Error> {
    read_json(path)
}

/// Rewrites the whole file.
pub fn save_catalog(path: &Path, catalog: &Catalog) -> Result<(), Error> {
    tracing::debug!("Writing catalog to {}", path.display());
    write_json(path, catalog)
}

pub fn load_state(path: &Path) -> Result<TrackerState, Error> {
    read_json(path)
}

pub fn save_state(path: &Path, state: &TrackerState) -> Result<(), Error> {
    write_json(path, state)
}
