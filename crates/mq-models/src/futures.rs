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

//! Futures records

use crate::common::Quote;
use crate::de;
use serde::{Deserialize, Serialize};

/// Real-time futures quote
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FuturesQuote {
  #[serde(flatten)]
  pub quote: Quote,

  /// Open interest in contracts
  #[serde(default, deserialize_with = "de::opt_f64")]
  pub open_interest: Option<f64>,

  /// Current settlement price
  #[serde(default, deserialize_with = "de::opt_f64")]
  pub settlement: Option<f64>,

  /// Previous settlement price
  #[serde(default, deserialize_with = "de::opt_f64")]
  pub pre_settlement: Option<f64>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_futures_quote() {
    let quote: FuturesQuote = serde_json::from_str(
      r#"{"code": "rb2410", "name": "Rebar", "price": 3650, "open_interest": "1523400", "pre_settlement": 3640}"#,
    )
    .unwrap();
    assert_eq!(quote.quote.code, "rb2410");
    assert_eq!(quote.quote.price, Some(3650.0));
    assert_eq!(quote.open_interest, Some(1_523_400.0));
    assert_eq!(quote.settlement, None);
  }
}
