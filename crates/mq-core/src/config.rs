//! Configuration management for the market-quote client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// Main configuration struct for the market-quote client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Token sent with every request
  pub api_key: String,

  /// Base URL of the quote service, e.g. `https://quotes.internal/api`
  pub base_url: String,

  /// Client-side rate limit (requests per minute), 0 disables it
  pub rate_limit: u32,

  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let api_key = env::var("MQ_API_TOKEN")
      .map_err(|_| Error::ApiKey("MQ_API_TOKEN not set".to_string()))?;

    let base_url =
      env::var("MQ_BASE_URL").map_err(|_| Error::Config("MQ_BASE_URL not set".to_string()))?;

    let rate_limit = env::var("MQ_RATE_LIMIT")
      .unwrap_or_else(|_| crate::DEFAULT_RATE_LIMIT.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid MQ_RATE_LIMIT".to_string()))?;

    let timeout_secs = env::var("MQ_TIMEOUT_SECS")
      .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid MQ_TIMEOUT_SECS".to_string()))?;

    let config = Config { api_key, base_url, rate_limit, timeout_secs };
    config.validate()?;
    Ok(config)
  }

  /// Create a config with default limits for the given token and service URL
  pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
    Config {
      api_key: api_key.into(),
      base_url: base_url.into(),
      rate_limit: crate::DEFAULT_RATE_LIMIT,
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
    }
  }

  /// Check that the base URL is absolute http(s), the token is non-empty
  /// and the timeout is positive
  pub fn validate(&self) -> Result<()> {
    if self.api_key.trim().is_empty() {
      return Err(Error::ApiKey("API token is empty".to_string()));
    }

    if self.timeout_secs == 0 {
      return Err(Error::Config("Timeout must be at least one second".to_string()));
    }

    let url = Url::parse(&self.base_url)
      .map_err(|e| Error::Config(format!("Invalid base URL '{}': {}", self.base_url, e)))?;

    match url.scheme() {
      "http" | "https" => Ok(()),
      other => Err(Error::Config(format!("Unsupported URL scheme: {}", other))),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::sync::Mutex;

  // Tests that touch MQ_* variables hold this lock
  static ENV_LOCK: Mutex<()> = Mutex::new(());

  const VARS: [&str; 4] = ["MQ_API_TOKEN", "MQ_BASE_URL", "MQ_RATE_LIMIT", "MQ_TIMEOUT_SECS"];

  fn set_env(pairs: &[(&str, &str)]) {
    for var in VARS {
      env::remove_var(var);
    }
    for (key, value) in pairs {
      env::set_var(key, value);
    }
  }

  #[test]
  fn test_config_from_env() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    set_env(&[("MQ_API_TOKEN", "test_key"), ("MQ_BASE_URL", "https://quotes.test/api")]);
    let config = Config::from_env().unwrap();
    assert_eq!(config.api_key, "test_key");
    assert_eq!(config.base_url, "https://quotes.test/api");
    assert_eq!(config.rate_limit, 60);
    assert_eq!(config.timeout_secs, 30);

    set_env(&[
      ("MQ_API_TOKEN", "test_key"),
      ("MQ_BASE_URL", "https://quotes.test/api"),
      ("MQ_RATE_LIMIT", "0"),
      ("MQ_TIMEOUT_SECS", "5"),
    ]);
    let config = Config::from_env().unwrap();
    assert_eq!(config.rate_limit, 0);
    assert_eq!(config.timeout_secs, 5);

    set_env(&[]);
  }

  #[test]
  fn test_config_from_env_errors() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    set_env(&[("MQ_BASE_URL", "https://quotes.test/api")]);
    assert!(matches!(Config::from_env(), Err(Error::ApiKey(_))));

    set_env(&[("MQ_API_TOKEN", "test_key")]);
    assert!(matches!(Config::from_env(), Err(Error::Config(_))));

    set_env(&[
      ("MQ_API_TOKEN", "test_key"),
      ("MQ_BASE_URL", "https://quotes.test/api"),
      ("MQ_RATE_LIMIT", "fast"),
    ]);
    assert!(matches!(Config::from_env(), Err(Error::Config(_))));

    set_env(&[
      ("MQ_API_TOKEN", "test_key"),
      ("MQ_BASE_URL", "https://quotes.test/api"),
      ("MQ_TIMEOUT_SECS", "-1"),
    ]);
    assert!(matches!(Config::from_env(), Err(Error::Config(_))));

    set_env(&[
      ("MQ_API_TOKEN", "test_key"),
      ("MQ_BASE_URL", "https://quotes.test/api"),
      ("MQ_TIMEOUT_SECS", "0"),
    ]);
    assert!(matches!(Config::from_env(), Err(Error::Config(_))));

    set_env(&[]);
  }

  #[test]
  fn test_validate_rejects_zero_timeout() {
    let mut config = Config::new("abc", "https://quotes.test");
    config.timeout_secs = 0;
    assert!(matches!(config.validate(), Err(Error::Config(_))));
  }

  #[test]
  fn test_new_uses_defaults() {
    let config = Config::new("abc", "https://quotes.test");
    assert_eq!(config.api_key, "abc");
    assert_eq!(config.rate_limit, crate::DEFAULT_RATE_LIMIT);
    assert_eq!(config.timeout_secs, crate::DEFAULT_TIMEOUT_SECS);
    assert!(config.validate().is_ok());
  }

  #[test]
  fn test_validate_rejects_bad_url() {
    let config = Config::new("abc", "not a url");
    assert!(matches!(config.validate(), Err(Error::Config(_))));

    let config = Config::new("abc", "ftp://quotes.test");
    assert!(matches!(config.validate(), Err(Error::Config(_))));
  }

  #[test]
  fn test_validate_rejects_empty_token() {
    let config = Config::new("  ", "https://quotes.test");
    assert!(matches!(config.validate(), Err(Error::ApiKey(_))));
  }
}
