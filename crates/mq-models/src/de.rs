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

//! Lenient field decoders.
//!
//! The quote service is loose about types: prices arrive as numbers or as
//! strings, missing values as `null`, `""` or `"-"`, and security codes
//! sometimes lose their leading zeros by being sent as integers.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Width security codes are padded to when they arrive as integers
pub const CODE_WIDTH: usize = 6;

fn is_blank(s: &str) -> bool {
  let s = s.trim();
  s.is_empty() || s == "-" || s == "--"
}

/// Decode a number, numeric string or blank into `Option<f64>`
pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
  D: Deserializer<'de>,
{
  let value: Value = Deserialize::deserialize(deserializer)?;
  match value {
    Value::Null => Ok(None),
    Value::Number(num) => Ok(num.as_f64()),
    Value::String(s) if is_blank(&s) => Ok(None),
    Value::String(s) => s
      .trim()
      .trim_end_matches('%')
      .replace(',', "")
      .parse::<f64>()
      .map(Some)
      .map_err(|_| serde::de::Error::custom(format!("invalid number: {}", s))),
    other => Err(serde::de::Error::custom(format!("expected number, found {}", other))),
  }
}

/// Decode an integer, integral float, numeric string or blank into `Option<i64>`
pub fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
  D: Deserializer<'de>,
{
  let value: Value = Deserialize::deserialize(deserializer)?;
  match value {
    Value::Null => Ok(None),
    Value::Number(num) => {
      if let Some(i) = num.as_i64() {
        Ok(Some(i))
      } else {
        match num.as_f64() {
          Some(f) if f.fract() == 0.0 => Ok(Some(f as i64)),
          _ => Err(serde::de::Error::custom(format!("expected integer, found {}", num))),
        }
      }
    }
    Value::String(s) if is_blank(&s) => Ok(None),
    Value::String(s) => s
      .trim()
      .replace(',', "")
      .parse::<i64>()
      .map(Some)
      .map_err(|_| serde::de::Error::custom(format!("invalid integer: {}", s))),
    other => Err(serde::de::Error::custom(format!("expected integer, found {}", other))),
  }
}

/// Decode a security code given as a string or as a bare integer
pub fn code<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  let value: Value = Deserialize::deserialize(deserializer)?;
  match value {
    Value::String(s) => Ok(s.trim().to_string()),
    Value::Number(num) => match num.as_u64() {
      Some(n) => Ok(format!("{:0width$}", n, width = CODE_WIDTH)),
      None => Err(serde::de::Error::custom(format!("invalid security code: {}", num))),
    },
    other => Err(serde::de::Error::custom(format!("expected security code, found {}", other))),
  }
}

/// Decode a date or time given as a string or as a number such as `20240105`
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  let value: Value = Deserialize::deserialize(deserializer)?;
  match value {
    Value::String(s) => Ok(s),
    Value::Number(num) => Ok(num.to_string()),
    other => Err(serde::de::Error::custom(format!("expected text, found {}", other))),
  }
}

/// Like [`text`] but blanks and `null` become `None`
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value: Value = Deserialize::deserialize(deserializer)?;
  match value {
    Value::Null => Ok(None),
    Value::String(s) if is_blank(&s) => Ok(None),
    Value::String(s) => Ok(Some(s)),
    Value::Number(num) => Ok(Some(num.to_string())),
    other => Err(serde::de::Error::custom(format!("expected text, found {}", other))),
  }
}

#[cfg(test)]
mod tests {
  use serde::Deserialize;

  #[derive(Debug, Deserialize)]
  struct Row {
    #[serde(deserialize_with = "super::code")]
    code: String,
    #[serde(default, deserialize_with = "super::opt_f64")]
    price: Option<f64>,
    #[serde(default, deserialize_with = "super::opt_i64")]
    volume: Option<i64>,
    #[serde(default, deserialize_with = "super::opt_text")]
    time: Option<String>,
  }

  fn row(json: &str) -> Row {
    serde_json::from_str(json).unwrap()
  }

  #[test]
  fn test_numbers_and_strings() {
    let r = row(r#"{"code": "600519", "price": "1712.50", "volume": 1200}"#);
    assert_eq!(r.code, "600519");
    assert_eq!(r.price, Some(1712.5));
    assert_eq!(r.volume, Some(1200));

    let r = row(r#"{"code": "600519", "price": 9.5, "volume": "3,400"}"#);
    assert_eq!(r.price, Some(9.5));
    assert_eq!(r.volume, Some(3400));
  }

  #[test]
  fn test_blanks_become_none() {
    let r = row(r#"{"code": "1", "price": "-", "volume": "", "time": null}"#);
    assert_eq!(r.price, None);
    assert_eq!(r.volume, None);
    assert_eq!(r.time, None);

    let r = row(r#"{"code": "1"}"#);
    assert_eq!(r.price, None);
  }

  #[test]
  fn test_integer_code_is_padded() {
    let r = row(r#"{"code": 1}"#);
    assert_eq!(r.code, "000001");

    let r = row(r#"{"code": 300750, "time": 93000}"#);
    assert_eq!(r.code, "300750");
    assert_eq!(r.time.as_deref(), Some("93000"));
  }

  #[test]
  fn test_percent_suffix() {
    let r = row(r#"{"code": "1", "price": "2.35%"}"#);
    assert_eq!(r.price, Some(2.35));
  }

  #[test]
  fn test_garbage_is_rejected() {
    assert!(serde_json::from_str::<Row>(r#"{"code": "1", "price": "abc"}"#).is_err());
    assert!(serde_json::from_str::<Row>(r#"{"code": true}"#).is_err());
    assert!(serde_json::from_str::<Row>(r#"{"code": "1", "volume": 1.5}"#).is_err());
  }
}
