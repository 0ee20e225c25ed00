//! Engine configuration loading tests.

use std::io::Write;

use laptop_rank::{EngineConfig, EngineError};

#[test]
fn builtin_config_round_trips_through_yaml() {
    let yaml = serde_yaml::to_string(&EngineConfig::builtin()).unwrap();
    let parsed = EngineConfig::from_yaml(&yaml).unwrap();
    assert_eq!(parsed, EngineConfig::builtin());
}

#[test]
fn config_file_loads_with_partial_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "min_viable_results: 4").unwrap();
    writeln!(file, "relaxed_gaming_gpu: 4.5").unwrap();
    file.flush().unwrap();

    let config = EngineConfig::from_file(file.path()).unwrap();
    assert_eq!(config.min_viable_results, 4);
    assert!((config.relaxed_gaming_gpu - 4.5).abs() < 1e-9);
    // Untouched fields keep the builtin values
    assert_eq!(config.relaxed_min_ram, EngineConfig::builtin().relaxed_min_ram);
}

#[test]
fn missing_config_file_is_a_config_error() {
    let err = EngineConfig::from_file(std::path::Path::new("/nonexistent/engine.yaml"))
        .unwrap_err();
    assert!(matches!(err, EngineError::Config(_)));
    assert!(err.to_string().contains("/nonexistent/engine.yaml"));
}

#[test]
fn malformed_yaml_is_a_config_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "min_viable_results: [not a number").unwrap();
    file.flush().unwrap();

    assert!(matches!(
        EngineConfig::from_file(file.path()),
        Err(EngineError::Config(_))
    ));
}

#[test]
fn out_of_range_values_fail_validation_on_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "medium_pool_threshold: 80").unwrap();
    file.flush().unwrap();

    // medium threshold above the large threshold makes the caps unreachable
    assert!(EngineConfig::from_file(file.path()).is_err());
}
