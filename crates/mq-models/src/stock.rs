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

//! Stock-specific records

use crate::common::Quote;
use crate::de;
use serde::{Deserialize, Serialize};

/// Real-time stock quote with valuation and top-of-book fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockQuote {
  /// Fields common to every quote
  #[serde(flatten)]
  pub quote: Quote,

  /// Turnover rate in percent
  #[serde(default, deserialize_with = "de::opt_f64")]
  pub turnover_rate: Option<f64>,

  /// Price/earnings ratio
  #[serde(default, deserialize_with = "de::opt_f64")]
  pub pe: Option<f64>,

  /// Price/book ratio
  #[serde(default, deserialize_with = "de::opt_f64")]
  pub pb: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub total_market_cap: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub float_market_cap: Option<f64>,

  /// Best bid
  #[serde(default, deserialize_with = "de::opt_f64")]
  pub bid1: Option<f64>,

  /// Best ask
  #[serde(default, deserialize_with = "de::opt_f64")]
  pub ask1: Option<f64>,
}

impl StockQuote {
  /// Ask minus bid, when both sides are quoted
  pub fn spread(&self) -> Option<f64> {
    Some(self.ask1? - self.bid1?)
  }
}

/// Company profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
  #[serde(deserialize_with = "de::code")]
  pub code: String,

  #[serde(default)]
  pub name: String,

  #[serde(default, deserialize_with = "de::opt_text")]
  pub full_name: Option<String>,

  #[serde(default, deserialize_with = "de::opt_text")]
  pub industry: Option<String>,

  #[serde(default, deserialize_with = "de::opt_text")]
  pub list_date: Option<String>,

  #[serde(default, deserialize_with = "de::opt_text")]
  pub website: Option<String>,

  #[serde(default, deserialize_with = "de::opt_text")]
  pub main_business: Option<String>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub total_shares: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub float_shares: Option<f64>,
}

/// Daily money flow split by order size
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundFlow {
  #[serde(deserialize_with = "de::text")]
  pub date: String,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub main_net_inflow: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub super_large_net_inflow: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub large_net_inflow: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub medium_net_inflow: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub small_net_inflow: Option<f64>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_stock_quote_flattens_common_fields() {
    let json = r#"{
      "code": "600519", "name": "Kweichow Moutai", "price": "1688.00",
      "pre_close": 1700.0, "change_pct": -0.71, "pe": 24.3,
      "bid1": 1687.5, "ask1": 1688.0, "time": "2024-05-10 14:59:58"
    }"#;
    let quote: StockQuote = serde_json::from_str(json).unwrap();

    assert_eq!(quote.quote.code, "600519");
    assert_eq!(quote.quote.price, Some(1688.0));
    assert_eq!(quote.quote.change_pct, Some(-0.71));
    assert_eq!(quote.pe, Some(24.3));
    assert_eq!(quote.spread(), Some(0.5));
    assert_eq!(quote.pb, None);
  }

  #[test]
  fn test_fund_flow() {
    let flow: FundFlow =
      serde_json::from_str(r#"{"date": "2024-05-10", "main_net_inflow": "-1200000"}"#).unwrap();
    assert_eq!(flow.main_net_inflow, Some(-1_200_000.0));
    assert_eq!(flow.small_net_inflow, None);
  }
}
