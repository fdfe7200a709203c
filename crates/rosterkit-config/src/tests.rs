//! Tests for engine policy configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        [detection]
        primary_resource = "class"

        [workload]
        max_weekly_minutes = 1800
    "#;

    let config = EngineConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.detection.primary_resource, PrimaryResource::Class);
    assert_eq!(config.workload.max_weekly_minutes, 1800);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        detection:
          primary_resource: room
        workload:
          max_weekly_minutes: 1200
    "#;

    let config = EngineConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.detection.primary_resource, PrimaryResource::Room);
    assert_eq!(config.workload.max_weekly_minutes, 1200);
}

#[test]
fn test_missing_sections_fall_back_to_defaults() {
    let config = EngineConfig::from_toml_str("").unwrap();
    assert_eq!(config, EngineConfig::default());
    assert_eq!(config.detection.primary_resource, PrimaryResource::Teacher);
    assert_eq!(config.workload.max_weekly_minutes, 2400);

    let partial = EngineConfig::from_toml_str(
        r#"
        [detection]
        primary_resource = "class"
    "#,
    )
    .unwrap();
    assert_eq!(partial.workload.max_weekly_minutes, 2400);
}

#[test]
fn test_unknown_primary_resource_is_rejected() {
    let result = EngineConfig::from_toml_str(
        r#"
        [detection]
        primary_resource = "janitor"
    "#,
    );
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_zero_threshold_is_invalid() {
    let result = EngineConfig::from_toml_str(
        r#"
        [workload]
        max_weekly_minutes = 0
    "#,
    );
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn test_builder() {
    let config = EngineConfig::new()
        .with_primary_resource(PrimaryResource::Class)
        .with_max_weekly_minutes(1500);

    assert_eq!(config.detection.primary_resource, PrimaryResource::Class);
    assert_eq!(config.workload.max_weekly_minutes, 1500);
}

#[test]
fn test_primary_resource_maps_to_dimension() {
    assert_eq!(
        ResourceDimension::from(PrimaryResource::Teacher),
        ResourceDimension::Teacher
    );
    assert_eq!(
        ResourceDimension::from(PrimaryResource::Class),
        ResourceDimension::Class
    );
    assert_eq!(
        PrimaryResource::from(ResourceDimension::Room),
        PrimaryResource::Room
    );
}

#[test]
fn test_load_missing_file_is_an_io_error() {
    let result = EngineConfig::load("/nonexistent/rosterkit.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_load_dispatches_on_extension() {
    let dir = std::env::temp_dir().join("rosterkit-config-test");
    std::fs::create_dir_all(&dir).unwrap();

    let toml_path = dir.join("policy.toml");
    std::fs::write(&toml_path, "[workload]\nmax_weekly_minutes = 600\n").unwrap();
    let from_toml = EngineConfig::load(&toml_path).unwrap();
    assert_eq!(from_toml.workload.max_weekly_minutes, 600);

    let yaml_path = dir.join("policy.yaml");
    std::fs::write(&yaml_path, "workload:\n  max_weekly_minutes: 900\n").unwrap();
    let from_yaml = EngineConfig::load(&yaml_path).unwrap();
    assert_eq!(from_yaml.workload.max_weekly_minutes, 900);

    std::fs::remove_dir_all(&dir).ok();
}
