//! Endpoint groups, one per asset class

pub mod bond;
pub mod forex;
pub mod fund;
pub mod futures;
pub mod gold;
pub mod index;
pub mod indicator;
pub mod stock;

use crate::transport::Transport;
use governor::{
  RateLimiter,
  clock::DefaultClock,
  middleware::NoOpMiddleware,
  state::{InMemoryState, NotKeyed},
};
use mq_core::{Endpoint, HttpMethod, KlineQuery, Result};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Arc;

/// Rate limiter shared by every endpoint group of one client
pub type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>;

/// Base trait for endpoint implementations
///
/// Provides common functionality needed by all endpoint modules
pub trait EndpointBase {
  /// Get a reference to the transport layer
  fn transport(&self) -> &Arc<Transport>;

  /// Get the rate limiter, if throttling is enabled
  fn rate_limiter(&self) -> Option<&Arc<DirectRateLimiter>>;

  /// Wait for rate limit before making a request
  async fn wait_for_rate_limit(&self) -> Result<()> {
    if let Some(limiter) = self.rate_limiter() {
      limiter.until_ready().await;
    }
    Ok(())
  }

  /// Throttle, call the endpoint and decode the body into records
  async fn fetch<T>(
    &self,
    method: HttpMethod,
    endpoint: Endpoint,
    params: HashMap<String, String>,
  ) -> Result<Vec<T>>
  where
    T: DeserializeOwned,
  {
    self.wait_for_rate_limit().await?;
    self.transport().request_list(method, endpoint, params).await
  }
}

/// Macro to implement the EndpointBase trait and constructor for endpoint structs
macro_rules! impl_endpoint_base {
  ($struct_name:ident) => {
    impl $struct_name {
      /// Create a new endpoint group over a shared transport
      pub fn new(
        transport: std::sync::Arc<$crate::transport::Transport>,
        rate_limiter: Option<std::sync::Arc<$crate::endpoints::DirectRateLimiter>>,
      ) -> Self {
        Self { transport, rate_limiter }
      }
    }

    impl $crate::endpoints::EndpointBase for $struct_name {
      fn transport(&self) -> &std::sync::Arc<$crate::transport::Transport> {
        &self.transport
      }

      fn rate_limiter(&self) -> Option<&std::sync::Arc<$crate::endpoints::DirectRateLimiter>> {
        self.rate_limiter.as_ref()
      }
    }
  };
}

pub(crate) use impl_endpoint_base;

/// Parameter map holding a single `code`
pub(crate) fn code_params(code: &str) -> HashMap<String, String> {
  let mut params = HashMap::new();
  params.insert("code".to_string(), code.to_string());
  params
}

/// Parameter map for kline and indicator requests
pub(crate) fn kline_params(code: &str, query: KlineQuery) -> HashMap<String, String> {
  let mut params = code_params(code);
  query.into_params(&mut params);
  params
}

/// Insert a date range, skipping unset bounds
pub(crate) fn insert_range(
  params: &mut HashMap<String, String>,
  start_date: Option<&str>,
  end_date: Option<&str>,
) {
  if let Some(start) = start_date {
    params.insert("start_date".to_string(), start.to_string());
  }
  if let Some(end) = end_date {
    params.insert("end_date".to_string(), end.to_string());
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::endpoints::stock::StockEndpoints;
  use governor::Quota;
  use mq_core::KlinePeriod;
  use std::num::NonZeroU32;

  #[test]
  fn test_endpoint_group_creation() {
    let transport = Arc::new(Transport::new_mock());
    let quota = Quota::per_minute(NonZeroU32::new(60).unwrap());
    let rate_limiter = Arc::new(RateLimiter::direct(quota));

    let stock = StockEndpoints::new(transport, Some(rate_limiter));

    assert_eq!(stock.transport().base_url(), "https://mock.quotes.test/api");
    assert!(stock.rate_limiter().is_some());
    assert!(tokio_test::block_on(stock.wait_for_rate_limit()).is_ok());
  }

  #[test]
  fn test_unthrottled_group() {
    let stock = StockEndpoints::new(Arc::new(Transport::new_mock()), None);
    assert!(stock.rate_limiter().is_none());
    assert!(tokio_test::block_on(stock.wait_for_rate_limit()).is_ok());
  }

  #[test]
  fn test_kline_params() {
    let params = kline_params("600519", KlineQuery::with_period(KlinePeriod::Min5).limit(10));

    assert_eq!(params.get("code").map(String::as_str), Some("600519"));
    assert_eq!(params.get("period").map(String::as_str), Some("5m"));
    assert_eq!(params.get("adjust").map(String::as_str), Some("none"));
    assert_eq!(params.get("limit").map(String::as_str), Some("10"));
    assert!(!params.contains_key("start_date"));
  }

  #[test]
  fn test_insert_range() {
    let mut params = HashMap::new();
    insert_range(&mut params, Some("2024-01-01"), None);
    assert_eq!(params.len(), 1);
    assert_eq!(params.get("start_date").map(String::as_str), Some("2024-01-01"));
  }
}
