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

//! Technical indicator series.
//!
//! The values are computed by the service; these records only carry them.

use crate::de;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Moving averages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaPoint {
  #[serde(deserialize_with = "de::text")]
  pub date: String,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub ma5: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub ma10: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub ma20: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub ma30: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub ma60: Option<f64>,

  /// Columns for any other window, e.g. `ma14` when a window of 14 is requested
  #[serde(flatten)]
  pub extra: BTreeMap<String, Value>,
}

impl MaPoint {
  /// Moving average for `window` periods, from the fixed columns or `extra`
  pub fn average(&self, window: u32) -> Option<f64> {
    match window {
      5 => self.ma5,
      10 => self.ma10,
      20 => self.ma20,
      30 => self.ma30,
      60 => self.ma60,
      n => self
        .extra
        .get(&format!("ma{}", n))
        .and_then(|value| de::opt_f64(value.clone()).ok().flatten()),
    }
  }
}

/// MACD line, signal line and histogram
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MacdPoint {
  #[serde(deserialize_with = "de::text")]
  pub date: String,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub dif: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub dea: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub macd: Option<f64>,
}

/// Stochastic KDJ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KdjPoint {
  #[serde(deserialize_with = "de::text")]
  pub date: String,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub k: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub d: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub j: Option<f64>,
}

/// Bollinger bands
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BollPoint {
  #[serde(deserialize_with = "de::text")]
  pub date: String,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub upper: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub middle: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub lower: Option<f64>,
}

/// Relative strength index over three windows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RsiPoint {
  #[serde(deserialize_with = "de::text")]
  pub date: String,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub rsi6: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub rsi12: Option<f64>,

  #[serde(default, deserialize_with = "de::opt_f64")]
  pub rsi24: Option<f64>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_macd_series() {
    let points: Vec<MacdPoint> = serde_json::from_str(
      r#"[{"date": "2024-05-09", "dif": 1.2, "dea": "0.9", "macd": 0.6},
          {"date": "2024-05-10", "dif": null, "dea": "-", "macd": ""}]"#,
    )
    .unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].dea, Some(0.9));
    assert_eq!(points[1], MacdPoint { date: "2024-05-10".to_string(), ..Default::default() });
  }

  #[test]
  fn test_ma_custom_window() {
    let point: MaPoint =
      serde_json::from_str(r#"{"date": "2024-05-10", "ma5": 10.1, "ma14": "10.35", "ma60": "-"}"#)
        .unwrap();
    assert_eq!(point.average(5), Some(10.1));
    assert_eq!(point.average(14), Some(10.35));
    assert_eq!(point.average(60), None);
    assert_eq!(point.average(250), None);
    assert_eq!(point.extra.len(), 1);
  }

  #[test]
  fn test_boll_missing_bands() {
    let point: BollPoint = serde_json::from_str(r#"{"date": 20240510, "middle": 10.1}"#).unwrap();
    assert_eq!(point.date, "20240510");
    assert_eq!(point.upper, None);
    assert_eq!(point.middle, Some(10.1));
  }
}
