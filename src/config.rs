//! Configuration management for the smoke tests.
//!
//! Every setting has a default, so running the binary with an empty environment
//! tests the public characters API with the standard expectations. Environment
//! variables (optionally from a `.env` file) override individual values.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Base URL of the characters endpoint under test.
pub const DEFAULT_API_URL: &str = "https://api.disneyapi.dev/character";

/// Character that must be found by the filtered lookup.
pub const DEFAULT_TARGET_CHARACTER: &str = "Mickey Mouse";

/// Records the endpoint returns on its first page.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Configuration for a smoke-test run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Characters endpoint URL
    pub api_url: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Name looked up by the specific-record check
    pub target_character: String,

    /// Expected number of records on the first page (default: 50)
    pub expected_page_size: usize,

    /// Log level (default: "info")
    pub log_level: String,
}

/// What the content checks expect to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expectations {
    pub target_name: String,
    pub page_size: usize,
}

impl Default for Expectations {
    fn default() -> Self {
        Expectations {
            target_name: DEFAULT_TARGET_CHARACTER.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CHARACTER_API_URL`: Endpoint under test (default: public characters API)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `TARGET_CHARACTER`: Name the lookup check must find (default: "Mickey Mouse")
    /// - `EXPECTED_PAGE_SIZE`: Records expected on page one (default: 50)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; a malformed one is not
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::DotenvError(e.to_string())),
        }

        let defaults = Config::default();

        let api_url = env::var("CHARACTER_API_URL").unwrap_or(defaults.api_url);
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "CHARACTER_API_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let target_character =
            env::var("TARGET_CHARACTER").unwrap_or(defaults.target_character);
        if target_character.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "TARGET_CHARACTER".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", defaults.request_timeout)?;
        let expected_page_size =
            Self::parse_env_usize("EXPECTED_PAGE_SIZE", defaults.expected_page_size)?;
        if expected_page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "EXPECTED_PAGE_SIZE".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            api_url,
            request_timeout,
            target_character,
            expected_page_size,
            log_level,
        })
    }

    /// The expectations the content checks assert against.
    pub fn expectations(&self) -> Expectations {
        Expectations {
            target_name: self.target_character.clone(),
            page_size: self.expected_page_size,
        }
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: 10,
            target_character: DEFAULT_TARGET_CHARACTER.to_string(),
            expected_page_size: DEFAULT_PAGE_SIZE,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 5] = [
        "CHARACTER_API_URL",
        "REQUEST_TIMEOUT",
        "TARGET_CHARACTER",
        "EXPECTED_PAGE_SIZE",
        "LOG_LEVEL",
    ];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.request_timeout, 10);
        assert_eq!(config.target_character, "Mickey Mouse");
        assert_eq!(config.expected_page_size, 50);
    }

    #[test]
    fn test_default_expectations_match_default_config() {
        assert_eq!(Config::default().expectations(), Expectations::default());
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        let _guard = EnvGuard::new();

        let config = Config::from_env().unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.expected_page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    #[serial]
    fn test_config_from_env_overrides() {
        let mut guard = EnvGuard::new();
        guard.set("CHARACTER_API_URL", "http://localhost:8080/character");
        guard.set("REQUEST_TIMEOUT", "3");
        guard.set("TARGET_CHARACTER", "Donald Duck");
        guard.set("EXPECTED_PAGE_SIZE", "20");

        let config = Config::from_env().unwrap();
        assert_eq!(config.api_url, "http://localhost:8080/character");
        assert_eq!(config.request_timeout, 3);

        let expectations = config.expectations();
        assert_eq!(expectations.target_name, "Donald Duck");
        assert_eq!(expectations.page_size, 20);
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_url() {
        let mut guard = EnvGuard::new();
        guard.set("CHARACTER_API_URL", "not-a-url");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "CHARACTER_API_URL"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_blank_target() {
        let mut guard = EnvGuard::new();
        guard.set("TARGET_CHARACTER", "   ");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "TARGET_CHARACTER"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_zero_page_size() {
        let mut guard = EnvGuard::new();
        guard.set("EXPECTED_PAGE_SIZE", "0");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "EXPECTED_PAGE_SIZE"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_u64_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U64_INVALID", "not-a-number");

        assert!(Config::parse_env_u64("TEST_U64_INVALID", 10).is_err());
        assert_eq!(Config::parse_env_u64("NONEXISTENT", 10).unwrap(), 10);
    }
}
