/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! The top-level client and its endpoint group accessors

use crate::endpoints::{
  bond::BondEndpoints, forex::ForexEndpoints, fund::FundEndpoints, futures::FuturesEndpoints,
  gold::GoldEndpoints, index::IndexEndpoints, indicator::IndicatorEndpoints,
  stock::StockEndpoints, DirectRateLimiter,
};

use crate::decode::decode_list;
use crate::transport::Transport;
use governor::{Quota, RateLimiter};
use mq_core::{Config, Endpoint, HttpMethod, Result};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::{info, instrument};

/// Main market-quote API client
///
/// Provides access to every endpoint through per-asset endpoint groups. All
/// groups share one transport (and so one connection pool) and one rate limiter.
///
/// # Examples
///
/// ```ignore
/// use mq_client::MarketClient;
/// use mq_core::{Config, HttpMethod, KlineQuery};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::from_env()?;
///     let client = MarketClient::new(config)?;
///
///     let quotes = client.stock().quote(HttpMethod::Get, "600519").await?;
///     let bars = client.index().kline(HttpMethod::Post, "000300", KlineQuery::daily()).await?;
///     println!("{} quotes, {} bars", quotes.len(), bars.len());
///
///     Ok(())
/// }
/// ```
pub struct MarketClient {
  rate_limiter: Option<Arc<DirectRateLimiter>>,
  transport: Arc<Transport>,
}

impl MarketClient {
  /// Create a new client
  ///
  /// # Arguments
  ///
  /// * `config` - Token, service URL, timeout and rate limit. A `rate_limit`
  ///   of 0 disables client-side throttling.
  ///
  /// # Errors
  ///
  /// Returns an error if the config is invalid or the HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    config.validate()?;

    let rate_limiter = NonZeroU32::new(config.rate_limit)
      .map(|per_minute| Arc::new(RateLimiter::direct(Quota::per_minute(per_minute))));

    let transport = Arc::new(Transport::new(&config)?);
    info!(
      "Market client ready for {} (rate limit: {}/min)",
      transport.base_url(),
      config.rate_limit
    );

    Ok(Self { transport, rate_limiter })
  }

  /// Create a new client with a caller-provided rate limiter
  ///
  /// Useful when several clients must share one quota.
  pub fn with_rate_limiter(config: Config, rate_limiter: Arc<DirectRateLimiter>) -> Result<Self> {
    config.validate()?;
    Ok(Self { transport: Arc::new(Transport::new(&config)?), rate_limiter: Some(rate_limiter) })
  }

  /// Stock listings, quotes, klines, minute charts, profiles and money flow
  pub fn stock(&self) -> StockEndpoints {
    StockEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Fund listings, quotes, NAV history and klines
  pub fn fund(&self) -> FundEndpoints {
    FundEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Bond listings, quotes and klines
  pub fn bond(&self) -> BondEndpoints {
    BondEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Index listings, levels, klines and constituents
  pub fn index(&self) -> IndexEndpoints {
    IndexEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Futures listings, quotes and klines
  pub fn futures(&self) -> FuturesEndpoints {
    FuturesEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Currency pair listings, rates and klines
  pub fn forex(&self) -> ForexEndpoints {
    ForexEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Gold varieties, spot prices and klines
  pub fn gold(&self) -> GoldEndpoints {
    GoldEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Server-computed technical indicators
  pub fn indicators(&self) -> IndicatorEndpoints {
    IndicatorEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Call any endpoint with caller-built parameters and return the raw body
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let mut params = HashMap::new();
  /// params.insert("code".to_string(), "600519".to_string());
  /// let body = client.raw(HttpMethod::Get, Endpoint::StockProfile, params).await?;
  /// # Ok::<(), mq_core::Error>(())
  /// ```
  #[instrument(skip(self, params), fields(method = %method, endpoint = %endpoint))]
  pub async fn raw(
    &self,
    method: HttpMethod,
    endpoint: Endpoint,
    params: HashMap<String, String>,
  ) -> Result<String> {
    self.wait_for_rate_limit().await;
    self.transport.request(method, endpoint, params).await
  }

  /// Call any endpoint and decode the body into records of the caller's choosing
  pub async fn list<T>(
    &self,
    method: HttpMethod,
    endpoint: Endpoint,
    params: HashMap<String, String>,
  ) -> Result<Vec<T>>
  where
    T: DeserializeOwned,
  {
    let text = self.raw(method, endpoint, params).await?;
    decode_list(&text)
  }

  /// Wait until the rate limiter allows the next request
  ///
  /// Endpoint groups do this automatically.
  pub async fn wait_for_rate_limit(&self) {
    if let Some(limiter) = &self.rate_limiter {
      limiter.until_ready().await;
    }
  }

  /// True when client-side throttling is enabled
  pub fn is_rate_limited(&self) -> bool {
    self.rate_limiter.is_some()
  }

  /// The shared transport
  pub fn transport(&self) -> &Arc<Transport> {
    &self.transport
  }
}

impl std::fmt::Debug for MarketClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("MarketClient")
      .field("transport", &self.transport)
      .field("rate_limited", &self.is_rate_limited())
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::endpoints::EndpointBase;

  #[test]
  fn test_client_creation() {
    let config = Config::new("test_key", "https://quotes.test/api");

    let client = MarketClient::new(config).expect("Failed to create client");
    assert!(client.is_rate_limited());
    assert_eq!(client.transport().base_url(), "https://quotes.test/api");
  }

  #[test]
  fn test_zero_rate_limit_disables_throttling() {
    let mut config = Config::new("test_key", "https://quotes.test/api");
    config.rate_limit = 0;

    let client = MarketClient::new(config).expect("Failed to create client");
    assert!(!client.is_rate_limited());
    assert!(client.stock().rate_limiter().is_none());
  }

  #[test]
  fn test_groups_share_transport() {
    let client = MarketClient::new(Config::new("k", "https://quotes.test")).unwrap();

    let stock = client.stock();
    let gold = client.gold();
    assert!(Arc::ptr_eq(stock.transport(), gold.transport()));
    assert!(Arc::ptr_eq(stock.transport(), client.transport()));
  }

  #[test]
  fn test_invalid_config_is_rejected() {
    let result = MarketClient::new(Config::new("", "https://quotes.test"));
    assert!(result.is_err());
  }

  #[test]
  fn test_debug_hides_token() {
    let client = MarketClient::new(Config::new("secret-token", "https://quotes.test")).unwrap();
    let debug = format!("{:?}", client);
    assert!(!debug.contains("secret-token"));
    assert!(debug.contains("rate_limited: true"));
  }
}
