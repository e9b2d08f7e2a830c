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

//! Index records

use crate::de;
use serde::{Deserialize, Serialize};

/// Member of an index with its weight
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexConstituent {
  #[serde(deserialize_with = "de::code")]
  pub code: String,

  #[serde(default)]
  pub name: String,

  /// Weight in percent
  #[serde(default, deserialize_with = "de::opt_f64")]
  pub weight: Option<f64>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_constituent_integer_code() {
    let member: IndexConstituent =
      serde_json::from_str(r#"{"code": 2594, "name": "BYD", "weight": "1.85"}"#).unwrap();
    assert_eq!(member.code, "002594");
    assert_eq!(member.weight, Some(1.85));
  }
}
