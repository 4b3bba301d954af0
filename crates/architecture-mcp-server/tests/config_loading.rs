use architecture_mcp_server::{ArchitectureServerConfig, ContextScope};
use std::collections::HashMap;

#[test]
fn defaults_match_documented_sampling_parameters() {
    let config = ArchitectureServerConfig::default();
    assert_eq!(config.sampling.max_tokens, 4000);
    assert_eq!(config.sampling.temperature, 0.2);
    assert_eq!(config.sampling.include_context, ContextScope::ThisServer);
    assert!(!config.validation.strict_options);
    assert!(config.validate().is_ok());
}

#[test]
fn file_round_trip_and_explicit_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("architecture-config.json");

    let mut config = ArchitectureServerConfig::default();
    config.sampling.max_tokens = 2048;
    config.sampling.include_context = ContextScope::AllServers;
    config.validation.strict_options = true;
    config.to_file(&path).expect("write config");

    let loaded = ArchitectureServerConfig::load(Some(path.as_path())).expect("load config");
    assert_eq!(loaded, config);
}

#[test]
fn partial_files_keep_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("partial.json");
    std::fs::write(&path, r#"{"sampling": {"temperature": 0.5}}"#).expect("write");

    let loaded = ArchitectureServerConfig::from_file(&path).expect("load");
    assert_eq!(loaded.sampling.temperature, 0.5);
    assert_eq!(loaded.sampling.max_tokens, 4000);
    assert_eq!(loaded.sampling.include_context, ContextScope::ThisServer);
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").expect("write");

    assert!(ArchitectureServerConfig::from_file(&path).is_err());
    assert!(ArchitectureServerConfig::from_file(dir.path().join("missing.json")).is_err());
}

#[test]
fn env_overrides_apply_and_ignore_garbage() {
    let vars: HashMap<&str, &str> = [
        ("ARCHITECTURE_MCP_MAX_TOKENS", "800"),
        ("ARCHITECTURE_MCP_TEMPERATURE", "warm"),
        ("ARCHITECTURE_MCP_STRICT", "TRUE"),
    ]
    .into_iter()
    .collect();

    let mut config = ArchitectureServerConfig::default();
    config.apply_env_overrides(|key| vars.get(key).map(|v| v.to_string()));

    assert_eq!(config.sampling.max_tokens, 800);
    assert_eq!(config.sampling.temperature, 0.2);
    assert!(config.validation.strict_options);
}

#[test]
fn validation_rejects_out_of_range_values() {
    let mut config = ArchitectureServerConfig::default();
    config.sampling.max_tokens = 0;
    assert!(config.validate().is_err());

    let mut config = ArchitectureServerConfig::default();
    config.sampling.temperature = 3.5;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("temperature"));
    assert_eq!(err.kind(), "ConfigurationError");
}
