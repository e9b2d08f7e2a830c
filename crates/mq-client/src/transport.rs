//! HTTP transport layer shared by every endpoint group

use crate::decode::{decode_list, excerpt, is_envelope};
use mq_core::{Config, Endpoint, Error, HttpMethod, Result, TOKEN_PARAM};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};
use url::Url;

/// Service codes that mean success in the `{"code": .., "msg": ..}` envelope
const SUCCESS_CODES: [i64; 2] = [0, 200];

/// HTTP transport layer for making requests to the quote service
pub struct Transport {
  client: Client,
  base_url: String,
  api_key: String,
  timeout: Duration,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    let timeout = Duration::from_secs(config.timeout_secs);
    let client = Client::builder()
      .timeout(timeout)
      .user_agent(concat!("mq-client/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self {
      client,
      base_url: config.base_url.trim_end_matches('/').to_string(),
      api_key: config.api_key.clone(),
      timeout,
    })
  }

  /// Create a mock transport for testing
  #[cfg(test)]
  pub fn new_mock() -> Self {
    Self {
      client: Client::new(),
      base_url: "https://mock.quotes.test/api".to_string(),
      api_key: "test_key".to_string(),
      timeout: Duration::from_secs(30),
    }
  }

  /// Call an endpoint and return the raw response body
  ///
  /// # Arguments
  ///
  /// * `method` - GET sends `params` as the query string, POST as a form body
  /// * `endpoint` - Remote endpoint to call
  /// * `params` - Caller parameters; the API token is added here
  ///
  /// # Errors
  ///
  /// `Error::Http` for transport failures and non-success status codes,
  /// `Error::Api` when the body carries the service's error envelope.
  #[instrument(skip(self, params), fields(method = %method, endpoint = %endpoint))]
  pub async fn request(
    &self,
    method: HttpMethod,
    endpoint: Endpoint,
    mut params: HashMap<String, String>,
  ) -> Result<String> {
    let url = self.build_url(endpoint)?;
    debug!("Requesting {} with {} parameters", url, params.len());

    params.insert(TOKEN_PARAM.to_string(), self.api_key.clone());

    let request = match method {
      HttpMethod::Get => self.client.get(url).query(&params),
      HttpMethod::Post => self.client.post(url).form(&params),
    };

    let response = request.send().await.map_err(|e| {
      if e.is_timeout() {
        Error::Http(format!("Request timed out after {}s", self.timeout().as_secs()))
      } else {
        Error::Http(format!("Request failed: {}", e))
      }
    })?;

    let status = response.status();
    let text = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;

    if !status.is_success() {
      error!("Request failed with status: {}", status);
      return Err(Error::Http(format!("HTTP error: {}. Response: {}", status, excerpt(&text))));
    }

    debug!("Response body length: {} bytes", text.len());
    self.check_api_error(&text)?;

    Ok(text)
  }

  /// Call an endpoint and decode the body into a list of records
  pub async fn request_list<T>(
    &self,
    method: HttpMethod,
    endpoint: Endpoint,
    params: HashMap<String, String>,
  ) -> Result<Vec<T>>
  where
    T: DeserializeOwned,
  {
    let text = self.request(method, endpoint, params).await?;
    decode_list(&text).inspect_err(|e| error!("Failed to decode {} response: {}", endpoint, e))
  }

  /// Build the full URL for an endpoint
  pub fn build_url(&self, endpoint: Endpoint) -> Result<Url> {
    Url::parse(&format!("{}{}", self.base_url, endpoint.path()))
      .map_err(|e| Error::Config(format!("Invalid base URL: {}", e)))
  }

  /// Check for the service's error envelope in a response body
  fn check_api_error(&self, response_text: &str) -> Result<()> {
    if !response_text.trim_start().starts_with('{') {
      return Ok(());
    }

    let Ok(Value::Object(body)) = serde_json::from_str::<Value>(response_text) else {
      return Ok(());
    };

    if let Some(message) = body.get("error").and_then(Value::as_str) {
      if !message.is_empty() {
        warn!("Service returned error: {}", message);
        return Err(Error::Api(message.to_string()));
      }
    }

    if !is_envelope(&body) {
      return Ok(());
    }

    let code = match body.get("code") {
      Some(Value::Number(n)) => n.as_i64(),
      Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
      _ => None,
    };

    if let Some(code) = code {
      if !SUCCESS_CODES.contains(&code) {
        let message = body
          .get("msg")
          .or_else(|| body.get("message"))
          .and_then(Value::as_str)
          .unwrap_or("unknown error");
        warn!("Service returned code {}: {}", code, message);
        return Err(Error::Api(format!("{} (code {})", message, code)));
      }
    }

    Ok(())
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Get request timeout duration
  pub fn timeout(&self) -> Duration {
    self.timeout
  }
}

impl std::fmt::Debug for Transport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Transport")
      .field("base_url", &self.base_url)
      .field("api_key", &"***")
      .field("timeout", &self.timeout)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_build_url() {
    let transport = Transport::new_mock();

    let url = transport.build_url(Endpoint::StockKline).unwrap();
    assert_eq!(url.as_str(), "https://mock.quotes.test/api/stock/kline");

    let url = transport.build_url(Endpoint::IndicatorMacd).unwrap();
    assert_eq!(url.path(), "/api/indicator/macd");
  }

  #[test]
  fn test_new_trims_trailing_slash() {
    let config = Config::new("abc", "https://quotes.test/v1/");
    let transport = Transport::new(&config).unwrap();
    assert_eq!(transport.base_url(), "https://quotes.test/v1");
    assert_eq!(transport.timeout(), Duration::from_secs(mq_core::DEFAULT_TIMEOUT_SECS));
  }

  #[test]
  fn test_check_api_error_field() {
    let transport = Transport::new_mock();
    let result = transport.check_api_error(r#"{"error": "invalid token"}"#);

    match result {
      Err(Error::Api(msg)) => assert_eq!(msg, "invalid token"),
      other => panic!("Expected Api error, got {:?}", other),
    }
  }

  #[test]
  fn test_check_api_error_code() {
    let transport = Transport::new_mock();

    let result = transport.check_api_error(r#"{"code": 401, "msg": "licence expired"}"#);
    match result {
      Err(Error::Api(msg)) => assert_eq!(msg, "licence expired (code 401)"),
      other => panic!("Expected Api error, got {:?}", other),
    }

    let result = transport.check_api_error(r#"{"code": "-1", "message": "bad code"}"#);
    assert!(matches!(result, Err(Error::Api(_))));
  }

  #[test]
  fn test_check_api_error_success() {
    let transport = Transport::new_mock();

    assert!(transport.check_api_error(r#"{"code": 0, "msg": "ok", "data": []}"#).is_ok());
    assert!(transport.check_api_error(r#"{"code": "200", "data": []}"#).is_ok());
    assert!(transport.check_api_error(r#"{"error": "", "data": []}"#).is_ok());
    assert!(transport.check_api_error(r#"[{"code": 600519}]"#).is_ok());
    assert!(transport.check_api_error(r#"{"code": "600519", "price": 1.0}"#).is_ok());
  }
}
