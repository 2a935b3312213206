//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

#[test]
fn default_config_path_contains_colbar_config_toml() {
    let path = default_config_path().expect("Should have default path");
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("colbar") && path_str.ends_with("config.toml"),
        "Path should contain 'colbar' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let path = write_temp_config(
        "colbar_test_config_valid.toml",
        r#"
items_count = 30
align = "center"
budget_percent = 60
width_margin = 2
column_width = 30
menu_file = "/tmp/menu.json"
"#,
    );

    let config = load_config_file(&path)
        .expect("Should successfully parse valid TOML")
        .expect("Existing file should yield Some");

    assert_eq!(config.items_count, Some(30));
    assert_eq!(config.align, Some(Align::Center));
    assert_eq!(config.budget_percent, Some(60));
    assert_eq!(config.width_margin, Some(2));
    assert_eq!(config.column_width, Some(30));
    assert_eq!(config.menu_file, Some(PathBuf::from("/tmp/menu.json")));

    let _ = fs::remove_file(&path);
}

#[test]
fn load_config_file_rejects_unknown_keys() {
    let path = write_temp_config("colbar_test_config_unknown.toml", "colour = \"red\"\n");

    let result = load_config_file(&path);
    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Unknown keys should be rejected, got {:?}",
        result
    );

    let _ = fs::remove_file(&path);
}

#[test]
fn load_config_file_rejects_unknown_align() {
    let path = write_temp_config("colbar_test_config_align.toml", "align = \"middle\"\n");

    let result = load_config_file(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));

    let _ = fs::remove_file(&path);
}

#[test]
fn load_config_file_rejects_invalid_toml() {
    let path = write_temp_config("colbar_test_config_invalid.toml", "items_count = [\n");

    let result = load_config_file(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));

    let _ = fs::remove_file(&path);
}

#[test]
#[serial(env)]
fn load_with_precedence_prefers_explicit_path() {
    let explicit = write_temp_config("colbar_test_explicit.toml", "items_count = 3\n");
    let from_env = write_temp_config("colbar_test_env.toml", "items_count = 9\n");
    env::set_var("COLBAR_CONFIG", &from_env);

    let config = load_config_with_precedence(Some(explicit.clone()))
        .expect("valid")
        .expect("present");
    assert_eq!(config.items_count, Some(3));

    env::remove_var("COLBAR_CONFIG");
    let _ = fs::remove_file(&explicit);
    let _ = fs::remove_file(&from_env);
}

#[test]
#[serial(env)]
fn load_with_precedence_falls_back_to_env_var() {
    let from_env = write_temp_config("colbar_test_env_only.toml", "items_count = 9\n");
    env::set_var("COLBAR_CONFIG", &from_env);

    let config = load_config_with_precedence(None)
        .expect("valid")
        .expect("present");
    assert_eq!(config.items_count, Some(9));

    env::remove_var("COLBAR_CONFIG");
    let _ = fs::remove_file(&from_env);
}

#[test]
fn merge_none_yields_defaults() {
    assert_eq!(merge_config(None), Ok(ResolvedConfig::default()));
}

#[test]
fn merge_applies_file_values() {
    let file = ConfigFile {
        items_count: Some(40),
        align: Some(Align::Right),
        budget_percent: Some(50),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(file)).expect("valid");
    assert_eq!(resolved.items_count, 40);
    assert_eq!(resolved.align, Align::Right);
    assert_eq!(resolved.budget_percent, 50);
    assert_eq!(resolved.column_width, ResolvedConfig::default().column_width);
}

#[test]
fn merge_rejects_zero_budget_percent() {
    let file = ConfigFile {
        budget_percent: Some(0),
        ..ConfigFile::default()
    };
    assert!(matches!(
        merge_config(Some(file)),
        Err(ConfigError::InvalidValue {
            key: "budget_percent",
            ..
        })
    ));
}

#[test]
fn merge_rejects_budget_percent_over_100() {
    let file = ConfigFile {
        budget_percent: Some(101),
        ..ConfigFile::default()
    };
    assert!(merge_config(Some(file)).is_err());
}

#[test]
fn merge_rejects_narrow_column() {
    let file = ConfigFile {
        column_width: Some(MIN_COLUMN_WIDTH - 1),
        ..ConfigFile::default()
    };
    assert!(matches!(
        merge_config(Some(file)),
        Err(ConfigError::InvalidValue {
            key: "column_width",
            ..
        })
    ));
}

#[test]
fn merge_rejects_too_many_items() {
    let file = ConfigFile {
        items_count: Some(MAX_ITEMS + 1),
        ..ConfigFile::default()
    };
    assert!(merge_config(Some(file)).is_err());
}

#[test]
#[serial(env)]
fn env_overrides_items_and_align() {
    env::set_var("COLBAR_ITEMS", "17");
    env::set_var("COLBAR_ALIGN", "right");

    let (config, rejected) = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(config.items_count, 17);
    assert_eq!(config.align, Align::Right);
    assert!(rejected.is_empty());

    env::remove_var("COLBAR_ITEMS");
    env::remove_var("COLBAR_ALIGN");
}

#[test]
#[serial(env)]
fn env_ignores_invalid_values() {
    env::set_var("COLBAR_ITEMS", "many");
    env::set_var("COLBAR_ALIGN", "diagonal");

    let (config, rejected) = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(config, ResolvedConfig::default());

    let variables: Vec<&str> = rejected.iter().map(|r| r.variable).collect();
    assert_eq!(variables, vec!["COLBAR_ITEMS", "COLBAR_ALIGN"]);
    assert_eq!(rejected[0].value, "many");
    assert_eq!(rejected[1].value, "diagonal");

    env::remove_var("COLBAR_ITEMS");
    env::remove_var("COLBAR_ALIGN");
}

#[test]
#[serial(env)]
fn env_rejects_item_count_above_maximum() {
    env::set_var("COLBAR_ITEMS", "500");
    env::remove_var("COLBAR_ALIGN");

    let (config, rejected) = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(config.items_count, ResolvedConfig::default().items_count);
    assert_eq!(rejected.len(), 1);
    assert!(rejected[0].reason.contains("maximum"), "{:?}", rejected[0]);

    env::remove_var("COLBAR_ITEMS");
}

#[test]
fn cli_overrides_win() {
    let config = apply_cli_overrides(
        ResolvedConfig::default(),
        Some(5),
        Some(Align::Center),
        Some(PathBuf::from("menu.json")),
        Some(true),
    );

    assert_eq!(config.items_count, 5);
    assert_eq!(config.align, Align::Center);
    assert_eq!(config.menu_file, Some(PathBuf::from("menu.json")));
    assert!(config.open_on_start);
}

#[test]
fn cli_none_leaves_config_untouched() {
    let config = apply_cli_overrides(ResolvedConfig::default(), None, None, None, None);
    assert_eq!(config, ResolvedConfig::default());
}

#[test]
fn budget_policy_reflects_config() {
    let config = ResolvedConfig {
        budget_percent: 70,
        width_margin: 6,
        ..ResolvedConfig::default()
    };
    let policy = config.budget_policy();
    assert_eq!(policy.height_percent, 70);
    assert_eq!(policy.width_margin, 6);
}
