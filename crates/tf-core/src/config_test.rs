use super::*;

const FULL_CONFIG: &str = r#"
name: synapse-to-uc
root_path: mysynapse/sqlpools/pool1
entity_types:
  - azure_synapse_dedicated_sql_table
source:
  endpoint: https://purview.example.net
  token_env: MY_ATLAS_TOKEN
  page_size: 25
target:
  endpoint: https://adb-123.azuredatabricks.net
  warehouse_id: abc123
  token_env: MY_DBX_TOKEN
"#;

const MINIMAL_CONFIG: &str = r#"
name: synapse-to-uc
root_path: mysynapse/sqlpools/pool1
source:
  endpoint: https://purview.example.net
target:
  endpoint: https://adb-123.azuredatabricks.net
  warehouse_id: abc123
"#;

#[test]
fn test_parse_full_config() {
    let config = Config::from_yaml(FULL_CONFIG).unwrap();
    assert_eq!(config.name, "synapse-to-uc");
    assert_eq!(config.root_path, "mysynapse/sqlpools/pool1");
    assert_eq!(config.entity_types, vec!["azure_synapse_dedicated_sql_table"]);
    assert_eq!(config.source.page_size, 25);
    assert_eq!(config.source.token_env, "MY_ATLAS_TOKEN");
    assert_eq!(config.target.warehouse_id, "abc123");
}

#[test]
fn test_minimal_config_uses_defaults() {
    let config = Config::from_yaml(MINIMAL_CONFIG).unwrap();
    assert_eq!(config.entity_types.len(), 3);
    assert_eq!(config.source.page_size, 50);
    assert_eq!(config.source.token_env, "ATLAS_TOKEN");
    assert_eq!(config.target.token_env, "DATABRICKS_TOKEN");
}

#[test]
fn test_unknown_keys_rejected() {
    let yaml = format!("{MINIMAL_CONFIG}\nmystery_field: true\n");
    let err = Config::from_yaml(&yaml).unwrap_err();
    assert!(matches!(err, CoreError::ConfigParseError { .. }));
}

#[test]
fn test_empty_root_path_rejected() {
    let yaml = MINIMAL_CONFIG.replace("root_path: mysynapse/sqlpools/pool1", "root_path: \"\"");
    let err = Config::from_yaml(&yaml).unwrap_err();
    assert!(matches!(err, CoreError::ConfigInvalid { .. }));
}

#[test]
fn test_zero_page_size_rejected() {
    let yaml = FULL_CONFIG.replace("page_size: 25", "page_size: 0");
    let err = Config::from_yaml(&yaml).unwrap_err();
    assert!(matches!(err, CoreError::ConfigInvalid { .. }));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(&dir.path().join("tagferry.yml")).unwrap_err();
    assert!(matches!(err, CoreError::ConfigNotFound { .. }));
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tagferry.yml");
    std::fs::write(&path, FULL_CONFIG).unwrap();
    let config = Config::load(&path).unwrap();
    assert_eq!(config.name, "synapse-to-uc");
}
