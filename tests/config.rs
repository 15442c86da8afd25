use staypoint_core::config::{ExtractionConfig, MoveBoundary};
use std::fs;
use tempdir::TempDir;

#[test]
fn defaults() {
    let config = ExtractionConfig::default();
    assert_eq!(config.dist_threshold_m, 200.);
    assert_eq!(config.time_threshold_sec, 30 * 60);
    assert_eq!(config.move_point_threshold, 100);
    assert!(config.legacy_scan_offset);
    assert_eq!(config.move_boundary, MoveBoundary::StayBounded);

    let options = config.scan_options();
    assert_eq!(options.dist_threshold_m, 200.);
    assert_eq!(options.time_threshold_sec, 1800);
    assert!(options.legacy_scan_offset);
}

#[test]
fn load_from_json_file() {
    let temp_dir = TempDir::new("config-load").unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(
        &path,
        r#"{
            "time_threshold_sec": 1200,
            "legacy_scan_offset": false,
            "move_boundary": "legacy"
        }"#,
    )
    .unwrap();
    let config = ExtractionConfig::load(&path).unwrap();
    assert_eq!(
        config,
        ExtractionConfig {
            time_threshold_sec: 1200,
            legacy_scan_offset: false,
            move_boundary: MoveBoundary::Legacy,
            ..ExtractionConfig::default()
        }
    );

    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains(r#""move_boundary":"legacy""#));
}

#[test]
fn bad_config_files() {
    let temp_dir = TempDir::new("config-bad").unwrap();
    assert!(ExtractionConfig::load(temp_dir.path().join("missing.json")).is_err());

    let path = temp_dir.path().join("typo.json");
    fs::write(&path, r#"{"move_boundary": "sideways"}"#).unwrap();
    assert!(ExtractionConfig::load(&path).is_err());

    let path = temp_dir.path().join("negative.json");
    fs::write(&path, r#"{"dist_threshold_m": -5.0}"#).unwrap();
    let error = ExtractionConfig::load(&path).unwrap_err();
    assert!(format!("{error}").contains("dist_threshold_m"));
}
