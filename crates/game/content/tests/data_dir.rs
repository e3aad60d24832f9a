use std::fs;
use std::path::PathBuf;

use tactics_content::ContentFactory;
use tactics_core::{GameConfig, Scenario};

fn bundled_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data")
}

#[test]
fn bundled_content_matches_built_in_defaults() {
    let content = ContentFactory::new(bundled_data_dir()).load().unwrap();

    assert_eq!(content.config, GameConfig::default());
    assert_eq!(content.scenario, Scenario::default());
}

#[test]
fn loads_custom_content_from_a_temp_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "loop_duration = 120\n").unwrap();
    fs::copy(
        bundled_data_dir().join("scenario.ron"),
        dir.path().join("scenario.ron"),
    )
    .unwrap();

    let content = ContentFactory::new(dir.path()).load().unwrap();

    assert_eq!(content.config.loop_duration, 120);
    assert_eq!(content.scenario.enemies.len(), 2);
}

#[test]
fn missing_files_report_the_path() {
    let dir = tempfile::tempdir().unwrap();

    let err = ContentFactory::new(dir.path()).load_config().unwrap_err();

    assert!(format!("{err:#}").contains("config.toml"));
}
