//! Configuration Tests.

use std::fs;

use pipesim_core::common::ConfigError;
use pipesim_core::common::constants::MAIN_MEM_SIZE;
use pipesim_core::config::Config;
use pretty_assertions::assert_eq;

#[test]
fn defaults() {
    let config = Config::default();
    assert_eq!(config.general.num_cores, 4);
    assert_eq!(config.general.max_cycles, 100_000);
    assert!(config.general.trace);
    assert_eq!(config.memory.main_mem_words, 1 << 21);
    assert_eq!(config.memory.memout_min_words, 64);
}

#[test]
fn empty_document_is_default() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_sections_keep_defaults() {
    let config: Config =
        serde_json::from_str(r#"{ "memory": { "memout_min_words": 16 } }"#).unwrap();
    assert_eq!(config.memory.memout_min_words, 16);
    assert_eq!(config.memory.main_mem_words, 1 << 21);
    assert_eq!(config.general, Config::default().general);
}

#[test]
fn loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sim.json");
    fs::write(&path, r#"{ "general": { "num_cores": 2, "max_cycles": 500 } }"#).unwrap();

    let config = Config::from_json_file(&path).unwrap();
    assert_eq!(config.general.num_cores, 2);
    assert_eq!(config.general.max_cycles, 500);
}

#[test]
fn malformed_json_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ general: ").unwrap();

    assert!(matches!(
        Config::from_json_file(&path),
        Err(ConfigError::Json { .. })
    ));
}

#[test]
fn missing_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        Config::from_json_file(dir.path().join("none.json")),
        Err(ConfigError::Io { .. })
    ));
}

#[test]
fn oversized_memory_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.json");
    fs::write(&path, r#"{ "memory": { "main_mem_words": 8589934592 } }"#).unwrap();

    assert!(matches!(
        Config::from_json_file(&path),
        Err(ConfigError::MemorySize {
            words: 8_589_934_592,
            max: MAIN_MEM_SIZE
        })
    ));
}

#[test]
fn validate_bounds_memory_size() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.memory.main_mem_words = 0;
    assert!(matches!(config.validate(), Err(ConfigError::MemorySize { words: 0, .. })));

    config.memory.main_mem_words = MAIN_MEM_SIZE + 1;
    assert!(config.validate().is_err());
}
