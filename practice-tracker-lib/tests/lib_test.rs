use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use practice_tracker_lib::{
    load_config_util, pick_daily, pick_notes, store, Catalog, Config, Exercises, Note,
    PracticeService, TrackerOutcome,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CATALOG_JSON: &str = r#"{
  "Sweep Picking": { "Three String Arpeggio": 70, "Five String Arpeggio": 60 },
  "Legato": { "Trill Exercise": 80 },
  "Alternate Picking": { "Chromatic Run": 120, "Pedal Tone": 110, "String Skipping": 90 },
  "Economy Picking": {},
  "Note Location": {}
}"#;

fn at(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

// Helper: temp config dir holding a catalog file
fn create_test_dir(catalog_json: &str) -> Result<TempDir> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("techniques.json"), catalog_json)?;
    Ok(dir)
}

fn create_test_service(dir: &Path, now: DateTime<Utc>) -> Result<PracticeService> {
    PracticeService::with_config(Config::default(), dir, now)
}

fn test_catalog() -> Catalog {
    serde_json::from_str(CATALOG_JSON).unwrap()
}

#[test]
fn test_first_launch_creates_snapshot_and_state() -> Result<()> {
    let dir = create_test_dir(CATALOG_JSON)?;
    let launch = Utc::now();
    let service = create_test_service(dir.path(), launch)?;

    assert_eq!(service.tracker_outcome, TrackerOutcome::Created);
    let snapshot = store::load_catalog(&dir.path().join("tracker.json"))?;
    let catalog = store::load_catalog(&dir.path().join("techniques.json"))?;
    assert_eq!(snapshot, catalog);
    assert_eq!(service.snapshot, catalog);

    let state = store::load_state(&dir.path().join("tracker_state.json"))?;
    assert_eq!(state.tracker_file, dir.path().join("tracker.json"));
    assert!((state.last_edited - launch).num_seconds().abs() < 5);
    Ok(())
}

#[test]
fn test_snapshot_kept_within_a_month() -> Result<()> {
    let dir = create_test_dir(CATALOG_JSON)?;
    let mut service = create_test_service(dir.path(), at("2024-01-10T09:00:00Z"))?;
    service.set_tempo("Legato", "Trill Exercise", 95)?;

    let service = create_test_service(dir.path(), at("2024-02-09T09:00:00Z"))?;
    assert_eq!(service.tracker_outcome, TrackerOutcome::UpToDate);
    assert_eq!(service.tempo("Legato", "Trill Exercise"), Some(95));
    assert_eq!(service.last_period_tempo("Legato", "Trill Exercise"), Some(80));
    Ok(())
}

#[test]
fn test_snapshot_refreshed_after_a_month() -> Result<()> {
    let dir = create_test_dir(CATALOG_JSON)?;
    let mut service = create_test_service(dir.path(), at("2024-01-10T09:00:00Z"))?;
    service.set_tempo("Legato", "Trill Exercise", 95)?;

    let refreshed_at = at("2024-02-10T09:00:00Z");
    let service = create_test_service(dir.path(), refreshed_at)?;
    assert_eq!(service.tracker_outcome, TrackerOutcome::Refreshed);
    assert_eq!(service.last_period_tempo("Legato", "Trill Exercise"), Some(95));

    // last_edited moves forward, so the next launch doesn't refresh again.
    let state = store::load_state(&dir.path().join("tracker_state.json"))?;
    assert_eq!(state.last_edited, refreshed_at);
    let service = create_test_service(dir.path(), refreshed_at + Duration::days(1))?;
    assert_eq!(service.tracker_outcome, TrackerOutcome::UpToDate);
    Ok(())
}

#[test]
fn test_missing_state_is_fatal() -> Result<()> {
    let dir = create_test_dir(CATALOG_JSON)?;
    create_test_service(dir.path(), at("2024-01-10T09:00:00Z"))?;
    fs::remove_file(dir.path().join("tracker_state.json"))?;

    let result = create_test_service(dir.path(), at("2024-06-01T00:00:00Z"));
    assert!(result.is_err());
    assert!(format!("{:#}", result.err().unwrap()).contains("Failed to update tracker snapshot"));
    // The old snapshot is left alone and no state is invented
    assert!(dir.path().join("tracker.json").exists());
    assert!(!dir.path().join("tracker_state.json").exists());
    Ok(())
}

#[test]
fn test_missing_catalog_is_fatal() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let result = create_test_service(dir.path(), Utc::now());
    assert!(result.is_err());
    assert!(format!("{:#}", result.err().unwrap()).contains("Failed to load catalog"));
    // Nothing gets snapshotted when the catalog can't be read
    assert!(!dir.path().join("tracker.json").exists());
    Ok(())
}

#[test]
fn test_malformed_catalog_is_fatal() -> Result<()> {
    let dir = create_test_dir("{ not json")?;
    assert!(create_test_service(dir.path(), Utc::now()).is_err());
    Ok(())
}

#[test]
fn test_malformed_state_is_fatal() -> Result<()> {
    let dir = create_test_dir(CATALOG_JSON)?;
    create_test_service(dir.path(), Utc::now())?;
    fs::write(dir.path().join("tracker_state.json"), "[]")?;
    assert!(create_test_service(dir.path(), Utc::now()).is_err());
    Ok(())
}

#[test]
fn test_set_tempo_persists() -> Result<()> {
    let dir = create_test_dir(r#"{"Legato": {"Trill Exercise": 80}}"#)?;
    let mut service = create_test_service(dir.path(), Utc::now())?;

    service.set_tempo("Legato", "Trill Exercise", 95)?;

    let reloaded = store::load_catalog(&dir.path().join("techniques.json"))?;
    let mut expected = Catalog::new();
    expected.insert(
        "Legato".to_string(),
        Exercises::from([("Trill Exercise".to_string(), 95)]),
    );
    assert_eq!(reloaded, expected);
    Ok(())
}

#[test]
fn test_saved_catalog_is_indented_and_sorted() -> Result<()> {
    let dir = create_test_dir(CATALOG_JSON)?;
    let mut service = create_test_service(dir.path(), Utc::now())?;
    service.set_tempo("Sweep Picking", "Three String Arpeggio", 72)?;

    let raw = fs::read_to_string(dir.path().join("techniques.json"))?;
    assert!(raw.contains("\n  \"Alternate Picking\": {"));
    let alternate = raw.find("Alternate Picking").unwrap();
    let sweep = raw.find("Sweep Picking").unwrap();
    assert!(alternate < sweep);
    Ok(())
}

#[test]
fn test_failed_save_keeps_in_memory_tempo() -> Result<()> {
    let dir = create_test_dir(CATALOG_JSON)?;
    let mut service = create_test_service(dir.path(), Utc::now())?;
    // Point the catalog at a directory so the write fails.
    service.catalog_path = dir.path().to_path_buf();

    assert!(service.set_tempo("Legato", "Trill Exercise", 100).is_err());
    assert_eq!(service.tempo("Legato", "Trill Exercise"), Some(100));
    Ok(())
}

#[test]
fn test_categories_and_exercises_sorted() -> Result<()> {
    let dir = create_test_dir(CATALOG_JSON)?;
    let service = create_test_service(dir.path(), Utc::now())?;

    assert_eq!(
        service.categories(),
        vec![
            "Alternate Picking",
            "Economy Picking",
            "Legato",
            "Note Location",
            "Sweep Picking"
        ]
    );
    assert_eq!(
        service.exercises("Alternate Picking"),
        vec!["Chromatic Run", "Pedal Tone", "String Skipping"]
    );
    assert!(service.exercises("Tapping").is_empty());
    Ok(())
}

#[test]
fn test_pick_daily_skips_missing_and_empty() {
    let catalog = test_catalog();
    let categories = [
        "Alternate Picking",
        "Economy Picking",
        "Legato",
        "Sweep Picking",
    ];

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let picks = pick_daily(&catalog, &categories, &mut rng);

        // Economy Picking is empty, so it never shows up
        let keys: Vec<&str> = picks.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Alternate Picking", "Legato", "Sweep Picking"]);

        for (category, exercises) in &picks {
            assert_eq!(exercises.len(), 1);
            let (name, bpm) = exercises.iter().next().unwrap();
            assert_eq!(catalog[category].get(name), Some(bpm));
        }
    }
}

#[test]
fn test_pick_daily_reaches_every_exercise() {
    let catalog = test_catalog();
    let mut seen = HashSet::new();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let picks = pick_daily(&catalog, &["Alternate Picking"], &mut rng);
        seen.extend(picks["Alternate Picking"].keys().cloned());
    }
    assert_eq!(seen.len(), 3);
}

#[test]
fn test_pick_daily_uses_configured_categories() -> Result<()> {
    let dir = create_test_dir(CATALOG_JSON)?;
    let config = Config {
        daily_categories: vec!["Legato".to_string(), "Tapping".to_string()],
        ..Default::default()
    };
    let service = PracticeService::with_config(config, dir.path(), Utc::now())?;

    let picks = service.pick_daily(&mut StdRng::seed_from_u64(3));
    assert_eq!(picks.len(), 1);
    assert_eq!(picks["Legato"]["Trill Exercise"], 80);
    Ok(())
}

#[test]
fn test_pick_notes_distinct() {
    let mut rng = StdRng::seed_from_u64(42);
    for n in 0..=11 {
        let notes = pick_notes(n, &mut rng);
        assert_eq!(notes.len(), n);
        let unique: HashSet<Note> = notes.iter().copied().collect();
        assert_eq!(unique.len(), n);
    }
}

#[test]
fn test_pick_notes_caps_at_alphabet_size() {
    let mut rng = StdRng::seed_from_u64(5);
    let notes = pick_notes(20, &mut rng);
    assert_eq!(notes.len(), 11);
    let unique: HashSet<Note> = notes.into_iter().collect();
    assert_eq!(unique.len(), 11);
}

#[test]
fn test_config_defaults_written_on_first_load() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.toml");

    let config = load_config_util(&path)?;
    assert_eq!(config, Config::default());
    assert!(path.exists());
    assert!(config.hotkey_url("Gallop Picking").is_some());
    assert_eq!(config.success_banner_secs, 3);

    // Reload reads the same values back
    assert_eq!(load_config_util(&path)?, config);
    Ok(())
}

#[test]
fn test_partial_config_uses_defaults() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.toml");
    fs::write(&path, "catalog_file = \"my_techniques.json\"\n")?;

    let config = load_config_util(&path)?;
    assert_eq!(config.catalog_file, Path::new("my_techniques.json"));
    assert_eq!(config.tracker_file, Path::new("tracker.json"));
    Ok(())
}

#[test]
fn test_zero_banner_duration_rejected() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.toml");
    fs::write(&path, "success_banner_secs = 0\n")?;
    assert!(load_config_util(&path).is_err());
    Ok(())
}

#[test]
fn test_open_reads_config_dir() -> Result<()> {
    let dir = create_test_dir(CATALOG_JSON)?;
    let service = PracticeService::open(dir.path(), Utc::now())?;
    assert!(dir.path().join("config.toml").exists());
    assert!(service.is_note_drill("Note Location"));
    assert!(!service.is_note_drill("Legato"));
    Ok(())
}
