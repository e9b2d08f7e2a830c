//! Generic JSON-to-list decoding

use mq_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Number of characters of a body quoted in error messages
const EXCERPT_CHARS: usize = 200;

/// First few characters of a response body, for error messages
pub(crate) fn excerpt(text: &str) -> String {
  text.chars().take(EXCERPT_CHARS).collect()
}

/// True for the service's `{"code": .., "msg": .., "data": ..}` envelope.
///
/// A bare `code` is a security code; only an envelope also carries msg/message/data.
pub(crate) fn is_envelope(body: &Map<String, Value>) -> bool {
  body.contains_key("code") && ["msg", "message", "data"].iter().any(|k| body.contains_key(*k))
}

/// Decode a response body into a list of records.
///
/// Accepted shapes:
/// - a JSON array of records
/// - a single record object, returned as a one-element list
/// - an envelope object whose `data` field holds either of the above
/// - `null`, or an envelope without a `data` list or object, returned as an empty list
///
/// # Examples
///
/// ```
/// use mq_client::decode_list;
/// use mq_models::Kline;
///
/// let bars: Vec<Kline> = decode_list(r#"{"code": 0, "data": [{"date": "2024-05-10", "close": 10.2}]}"#).unwrap();
/// assert_eq!(bars.len(), 1);
/// assert_eq!(bars[0].close, Some(10.2));
/// ```
pub fn decode_list<T>(text: &str) -> Result<Vec<T>>
where
  T: DeserializeOwned,
{
  let value: Value = serde_json::from_str(text).map_err(|e| {
    Error::Parse(format!("Failed to parse response: {}. Response: {}", e, excerpt(text)))
  })?;

  list_from_value(value)
}

fn list_from_value<T>(value: Value) -> Result<Vec<T>>
where
  T: DeserializeOwned,
{
  match value {
    Value::Null => Ok(Vec::new()),
    Value::Array(items) => items
      .into_iter()
      .enumerate()
      .map(|(i, item)| {
        serde_json::from_value(item)
          .map_err(|e| Error::Parse(format!("Failed to decode record {}: {}", i, e)))
      })
      .collect(),
    Value::Object(mut map) => match map.remove("data") {
      Some(data @ (Value::Array(_) | Value::Object(_) | Value::Null)) => list_from_value(data),
      // Status-only envelope: nothing to decode
      _ if is_envelope(&map) => Ok(Vec::new()),
      Some(other) => {
        map.insert("data".to_string(), other);
        single(Value::Object(map))
      }
      None => single(Value::Object(map)),
    },
    other => Err(Error::Parse(format!("Expected a JSON array or object, found: {}", other))),
  }
}

fn single<T>(value: Value) -> Result<Vec<T>>
where
  T: DeserializeOwned,
{
  serde_json::from_value(value)
    .map(|record| vec![record])
    .map_err(|e| Error::Parse(format!("Failed to decode record: {}", e)))
}

#[cfg(test)]
mod tests {
  use super::*;
  use mq_models::{IndexConstituent, Kline, Quote};

  #[test]
  fn test_decode_array() {
    let bars: Vec<Kline> = decode_list(
      r#"[{"date": "2024-05-09", "close": 10.0}, {"date": "2024-05-10", "close": "10.5"}]"#,
    )
    .unwrap();
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[1].close, Some(10.5));
  }

  #[test]
  fn test_decode_single_object() {
    let quotes: Vec<Quote> = decode_list(r#"{"code": "000300", "price": 3600.5}"#).unwrap();
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].code, "000300");
  }

  #[test]
  fn test_decode_envelope() {
    let quotes: Vec<Quote> =
      decode_list(r#"{"code": 0, "msg": "ok", "data": {"code": "000300", "price": 1}}"#).unwrap();
    assert_eq!(quotes[0].price, Some(1.0));

    let quotes: Vec<Quote> = decode_list(r#"{"code": 0, "data": null}"#).unwrap();
    assert!(quotes.is_empty());
  }

  #[test]
  fn test_decode_status_only_envelope() {
    let quotes: Vec<Quote> = decode_list(r#"{"code": 0, "msg": "success"}"#).unwrap();
    assert!(quotes.is_empty());

    let quotes: Vec<Quote> = decode_list(r#"{"code": 0, "msg": "ok", "data": ""}"#).unwrap();
    assert!(quotes.is_empty());

    let members: Vec<IndexConstituent> =
      decode_list(r#"{"code": 200, "message": "no records"}"#).unwrap();
    assert!(members.is_empty());
  }

  #[test]
  fn test_single_record_with_code_is_not_envelope() {
    let quotes: Vec<Quote> = decode_list(r#"{"code": 600519, "price": 1688}"#).unwrap();
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].code, "600519");
  }

  #[test]
  fn test_decode_null_and_empty() {
    let quotes: Vec<Quote> = decode_list("null").unwrap();
    assert!(quotes.is_empty());

    let quotes: Vec<Quote> = decode_list("[]").unwrap();
    assert!(quotes.is_empty());
  }

  #[test]
  fn test_decode_errors() {
    let result: Result<Vec<Quote>> = decode_list("<html>busy</html>");
    assert!(matches!(result, Err(Error::Parse(_))));

    let result: Result<Vec<Quote>> = decode_list("42");
    assert!(matches!(result, Err(Error::Parse(_))));

    let result: Result<Vec<Kline>> = decode_list(r#"[{"date": "2024-05-10"}, {"close": 1}]"#);
    match result {
      Err(Error::Parse(msg)) => assert!(msg.contains("record 1")),
      other => panic!("Expected Parse error, got {:?}", other),
    }
  }

  #[test]
  fn test_excerpt_respects_char_boundaries() {
    let text = "行情".repeat(300);
    assert_eq!(excerpt(&text).chars().count(), EXCERPT_CHARS);
  }
}
