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

//! Fund records

use crate::common::Quote;
use crate::de;
use serde::{Deserialize, Serialize};

/// Real-time quote for exchange-traded funds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundQuote {
  #[serde(flatten)]
  pub quote: Quote,

  /// Indicative intraday net asset value
  #[serde(default, deserialize_with = "de::opt_f64")]
  pub iopv: Option<f64>,
}

impl FundQuote {
  /// Premium of price over IOPV in percent
  pub fn premium_pct(&self) -> Option<f64> {
    let iopv = self.iopv.filter(|v| *v != 0.0)?;
    Some((self.quote.price? - iopv) / iopv * 100.0)
  }
}

/// Published net asset value for one day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundNav {
  #[serde(deserialize_with = "de::text")]
  pub date: String,

  /// Unit NAV
  #[serde(default, deserialize_with = "de::opt_f64")]
  pub unit_nav: Option<f64>,

  /// Accumulated NAV including distributions
  #[serde(default, deserialize_with = "de::opt_f64")]
  pub accumulated_nav: Option<f64>,

  /// Day-over-day growth in percent
  #[serde(default, deserialize_with = "de::opt_f64")]
  pub daily_growth: Option<f64>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_fund_quote_premium() {
    let quote: FundQuote =
      serde_json::from_str(r#"{"code": "510300", "price": 4.04, "iopv": "4.00"}"#).unwrap();
    let premium = quote.premium_pct().unwrap();
    assert!((premium - 1.0).abs() < 1e-9);

    let quote: FundQuote = serde_json::from_str(r#"{"code": "510300", "price": 4.04}"#).unwrap();
    assert_eq!(quote.premium_pct(), None);
  }

  #[test]
  fn test_fund_nav() {
    let nav: FundNav = serde_json::from_str(
      r#"{"date": "2024-05-10", "unit_nav": "1.2345", "accumulated_nav": 2.5, "daily_growth": "0.12%"}"#,
    )
    .unwrap();
    assert_eq!(nav.unit_nav, Some(1.2345));
    assert_eq!(nav.daily_growth, Some(0.12));
  }
}
