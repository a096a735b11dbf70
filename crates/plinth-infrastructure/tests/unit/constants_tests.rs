//! Constants Tests

use plinth_infrastructure::constants::*;

#[test]
fn test_env_separator_is_double_underscore() {
    assert_eq!(CONFIG_ENV_SEPARATOR, "__");
    assert_eq!(CONFIG_ENV_PREFIX, "PLINTH");
}

#[test]
fn test_log_filter_env_uses_prefix() {
    assert!(LOG_FILTER_ENV.starts_with(CONFIG_ENV_PREFIX));
}

#[test]
fn test_config_filename_is_toml() {
    assert!(DEFAULT_CONFIG_FILENAME.ends_with(".toml"));
}
