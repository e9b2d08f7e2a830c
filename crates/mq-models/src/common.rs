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

//! Records shared by several asset classes

use crate::de;
use serde::{Deserialize, Serialize};

/// One entry from a `list` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityInfo {
  /// Security code
  #[serde(deserialize_with = "de::code")]
  pub code: String,

  /// Display name
  pub name: String,

  /// Listing market or exchange
  #[serde(default, deserialize_with = "de::opt_text")]
  pub market: Option<String>,

  /// Instrument kind as reported by the service (e.g. "ETF", "convertible")
  #[serde(default, rename = "type", deserialize_with = "de::opt_text")]
  pub kind: Option<String>,

  /// Listing date
  #[serde(default, deserialize_with = "de::opt_text")]
  pub list_date: Option<String>,
}

/// Real-time quote, used directly for bonds, indices and gold
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quote {
  /// Security code
  #[serde(deserialize_with = "de::code")]
  pub code: String,

  /// Display name
  #[serde(default)]
  pub name: String,

  /// Last traded price
  #[serde(default, deserialize_with = "de::opt_f64")]
  pub price: Option<f64>,

  /// Opening price
  #[serde(default, deserialize_with = "de::opt_f64")]
  pub open: Option<f64>,

  /// Session high
  #[serde(default, deserialize_with = "de::opt_f64")]
  pub high: Option<f64>,

  /// Session low
  #[serde(default, deserialize_with = "de::opt_f64")]
  pub low: Option<f64>,

  /// Previous close
  #[serde(default, deserialize_with = "de::opt_f64")]
  pub pre_close: Option<f64>,

  /// Absolute change against previous close
  #[serde(default, deserialize_with = "de::opt_f64")]
  pub change: Option<f64>,

  /// Percentage change against previous close
  #[serde(default, deserialize_with = "de::opt_f64")]
  pub change_pct: Option<f64>,

  /// Traded volume
  #[serde(default, deserialize_with = "de::opt_f64")]
  pub volume: Option<f64>,

  /// Traded amount
  #[serde(default, deserialize_with = "de::opt_f64")]
  pub amount: Option<f64>,

  /// Quote timestamp as sent by the service
  #[serde(default, deserialize_with = "de::opt_text")]
  pub time: Option<String>,
}

/// One OHLCV bar
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Kline {
  /// Bar date, or date-time for minute bars
  #[serde(deserialize_with = "de::text")]
  pub date: String,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub open: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub high: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub low: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub close: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub volume: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub amount: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub change_pct: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub turnover_rate: Option<f64>,
}

impl Kline {
  /// Close minus open
  pub fn change(&self) -> Option<f64> {
    Some(self.close? - self.open?)
  }

  /// High minus low
  pub fn range(&self) -> Option<f64> {
    Some(self.high? - self.low?)
  }

  /// True when the bar closed above its open
  pub fn is_up(&self) -> bool {
    self.change().map(|c| c > 0.0).unwrap_or(false)
  }
}

/// One point of the intraday minute chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MinuteBar {
  #[serde(deserialize_with = "de::text")]
  pub time: String,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub price: Option<f64>,

  /// Volume-weighted average price so far in the session
  #[serde(default, deserialize_with = "de::opt_f64")]
  pub avg_price: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub volume: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub amount: Option<f64>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_kline_helpers() {
    let bar: Kline = serde_json::from_str(
      r#"{"date": "2024-03-01", "open": 10.0, "high": "10.8", "low": 9.5, "close": 10.5, "volume": 1000}"#,
    )
    .unwrap();

    assert_eq!(bar.change(), Some(0.5));
    assert!((bar.range().unwrap() - 1.3).abs() < 1e-9);
    assert!(bar.is_up());
  }

  #[test]
  fn test_kline_missing_prices() {
    let bar: Kline = serde_json::from_str(r#"{"date": 20240301, "close": "-"}"#).unwrap();
    assert_eq!(bar.date, "20240301");
    assert_eq!(bar.change(), None);
    assert!(!bar.is_up());
  }

  #[test]
  fn test_security_info_type_field() {
    let info: SecurityInfo = serde_json::from_str(
      r#"{"code": "510300", "name": "CSI 300 ETF", "market": "sh", "type": "ETF"}"#,
    )
    .unwrap();
    assert_eq!(info.kind.as_deref(), Some("ETF"));
    assert_eq!(info.list_date, None);
  }
}
