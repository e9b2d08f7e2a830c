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

//! Foreign exchange records

use crate::de;
use serde::{Deserialize, Serialize};

/// Real-time currency pair quote
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForexQuote {
  /// Pair code, e.g. "USDCNY"
  #[serde(deserialize_with = "de::code")]
  pub code: String,

  #[serde(default)]
  pub name: String,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub price: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub bid: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub ask: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub open: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub high: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub low: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub pre_close: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub change: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub change_pct: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_text")]
  pub time: Option<String>,
}

impl ForexQuote {
  /// Midpoint of bid and ask, falling back to the last price
  pub fn mid(&self) -> Option<f64> {
    match (self.bid, self.ask) {
      (Some(bid), Some(ask)) => Some((bid + ask) / 2.0),
      _ => self.price,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_forex_mid() {
    let quote: ForexQuote =
      serde_json::from_str(r#"{"code": "USDCNY", "bid": "7.20", "ask": "7.30", "price": 7.21}"#)
        .unwrap();
    assert!((quote.mid().unwrap() - 7.25).abs() < 1e-9);

    let quote: ForexQuote = serde_json::from_str(r#"{"code": "EURUSD", "price": 1.08}"#).unwrap();
    assert_eq!(quote.mid(), Some(1.08));
  }
}
