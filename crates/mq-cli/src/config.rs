use anyhow::{Context, Result};
use clap::Args;
use mq_client::MarketClient;
use mq_core::Config as CoreConfig;

/// Connection settings, taken from flags or the environment (`.env` is loaded first)
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
  /// Base URL of the quote service
  #[arg(long, global = true, env = "MQ_BASE_URL")]
  pub base_url: Option<String>,

  /// API token
  #[arg(long, global = true, env = "MQ_API_TOKEN", hide_env_values = true)]
  pub token: Option<String>,

  /// Client-side rate limit in requests per minute, 0 disables it
  #[arg(long, global = true, env = "MQ_RATE_LIMIT", default_value_t = mq_core::DEFAULT_RATE_LIMIT)]
  pub rate_limit: u32,

  /// Request timeout in seconds
  #[arg(long, global = true, env = "MQ_TIMEOUT_SECS", default_value_t = mq_core::DEFAULT_TIMEOUT_SECS)]
  pub timeout_secs: u64,
}

impl ConnectionArgs {
  pub fn to_config(&self) -> Result<CoreConfig> {
    let api_key =
      self.token.clone().context("MQ_API_TOKEN environment variable or --token not set")?;
    let base_url =
      self.base_url.clone().context("MQ_BASE_URL environment variable or --base-url not set")?;

    let config = CoreConfig {
      api_key,
      base_url,
      rate_limit: self.rate_limit,
      timeout_secs: self.timeout_secs,
    };
    config.validate()?;
    Ok(config)
  }

  pub fn client(&self) -> Result<MarketClient> {
    Ok(MarketClient::new(self.to_config()?)?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn args(base_url: Option<&str>, token: Option<&str>) -> ConnectionArgs {
    ConnectionArgs {
      base_url: base_url.map(str::to_string),
      token: token.map(str::to_string),
      rate_limit: 0,
      timeout_secs: 5,
    }
  }

  #[test]
  fn test_to_config() {
    let config = args(Some("https://quotes.test"), Some("abc")).to_config().unwrap();
    assert_eq!(config.api_key, "abc");
    assert_eq!(config.rate_limit, 0);
    assert_eq!(config.timeout_secs, 5);
  }

  #[test]
  fn test_missing_settings() {
    assert!(args(None, Some("abc")).to_config().is_err());
    assert!(args(Some("https://quotes.test"), None).to_config().is_err());
    assert!(args(Some("nope"), Some("abc")).to_config().is_err());
  }
}
