//! Request parameter types shared by the endpoint groups

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Bar period for kline and indicator requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum KlinePeriod {
  Min1,
  Min5,
  Min15,
  Min30,
  Min60,
  #[default]
  Day,
  Week,
  Month,
}

impl std::fmt::Display for KlinePeriod {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      KlinePeriod::Min1 => write!(f, "1m"),
      KlinePeriod::Min5 => write!(f, "5m"),
      KlinePeriod::Min15 => write!(f, "15m"),
      KlinePeriod::Min30 => write!(f, "30m"),
      KlinePeriod::Min60 => write!(f, "60m"),
      KlinePeriod::Day => write!(f, "d"),
      KlinePeriod::Week => write!(f, "w"),
      KlinePeriod::Month => write!(f, "m"),
    }
  }
}

impl FromStr for KlinePeriod {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "1m" => Ok(KlinePeriod::Min1),
      "5m" => Ok(KlinePeriod::Min5),
      "15m" => Ok(KlinePeriod::Min15),
      "30m" => Ok(KlinePeriod::Min30),
      "60m" => Ok(KlinePeriod::Min60),
      "d" => Ok(KlinePeriod::Day),
      "w" => Ok(KlinePeriod::Week),
      "m" => Ok(KlinePeriod::Month),
      _ => Err(Error::InvalidInput(format!("Unknown kline period: {}", s))),
    }
  }
}

/// Price adjustment for dividends and splits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AdjustType {
  /// Raw prices
  #[default]
  None,
  /// Forward adjusted
  Forward,
  /// Backward adjusted
  Backward,
}

impl std::fmt::Display for AdjustType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      AdjustType::None => write!(f, "none"),
      AdjustType::Forward => write!(f, "qfq"),
      AdjustType::Backward => write!(f, "hfq"),
    }
  }
}

impl FromStr for AdjustType {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "none" => Ok(AdjustType::None),
      "qfq" => Ok(AdjustType::Forward),
      "hfq" => Ok(AdjustType::Backward),
      _ => Err(Error::InvalidInput(format!("Unknown adjust type: {}", s))),
    }
  }
}

/// Listing market used to filter list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Market {
  /// Shanghai
  Sh,
  /// Shenzhen
  Sz,
  /// Beijing
  Bj,
  /// Hong Kong
  Hk,
  /// United States
  Us,
}

impl std::fmt::Display for Market {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Market::Sh => write!(f, "sh"),
      Market::Sz => write!(f, "sz"),
      Market::Bj => write!(f, "bj"),
      Market::Hk => write!(f, "hk"),
      Market::Us => write!(f, "us"),
    }
  }
}

impl FromStr for Market {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.to_ascii_lowercase().as_str() {
      "sh" => Ok(Market::Sh),
      "sz" => Ok(Market::Sz),
      "bj" => Ok(Market::Bj),
      "hk" => Ok(Market::Hk),
      "us" => Ok(Market::Us),
      _ => Err(Error::InvalidInput(format!("Unknown market: {}", s))),
    }
  }
}

/// Arguments shared by every kline and indicator request.
///
/// Dates are passed through as given (`YYYY-MM-DD` is what the service expects).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KlineQuery {
  pub period: KlinePeriod,
  pub adjust: AdjustType,
  pub start_date: Option<String>,
  pub end_date: Option<String>,
  pub limit: Option<u32>,
}

impl KlineQuery {
  /// Daily bars with no adjustment and no bounds
  pub fn daily() -> Self {
    Self::default()
  }

  /// Bars of the given period
  pub fn with_period(period: KlinePeriod) -> Self {
    Self { period, ..Self::default() }
  }

  pub fn adjust(mut self, adjust: AdjustType) -> Self {
    self.adjust = adjust;
    self
  }

  pub fn range(mut self, start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
    self.start_date = Some(start_date.into());
    self.end_date = Some(end_date.into());
    self
  }

  pub fn limit(mut self, limit: u32) -> Self {
    self.limit = Some(limit);
    self
  }

  /// Insert `period`, `adjust` and whichever optional bounds are set
  pub fn into_params(self, params: &mut HashMap<String, String>) {
    params.insert("period".to_string(), self.period.to_string());
    params.insert("adjust".to_string(), self.adjust.to_string());
    if let Some(start) = self.start_date {
      params.insert("start_date".to_string(), start);
    }
    if let Some(end) = self.end_date {
      params.insert("end_date".to_string(), end);
    }
    if let Some(limit) = self.limit {
      params.insert("limit".to_string(), limit.to_string());
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_period_wire_values() {
    for period in [
      KlinePeriod::Min1,
      KlinePeriod::Min5,
      KlinePeriod::Min15,
      KlinePeriod::Min30,
      KlinePeriod::Min60,
      KlinePeriod::Day,
      KlinePeriod::Week,
      KlinePeriod::Month,
    ] {
      assert_eq!(period.to_string().parse::<KlinePeriod>().unwrap(), period);
    }
    assert_eq!(KlinePeriod::Min15.to_string(), "15m");
    assert!("2d".parse::<KlinePeriod>().is_err());
  }

  #[test]
  fn test_adjust_and_market() {
    assert_eq!(AdjustType::Forward.to_string(), "qfq");
    assert_eq!("hfq".parse::<AdjustType>().unwrap(), AdjustType::Backward);
    assert_eq!("SZ".parse::<Market>().unwrap(), Market::Sz);
    assert_eq!(Market::Bj.to_string(), "bj");
    assert!("xx".parse::<Market>().is_err());
  }

  #[test]
  fn test_kline_query_default_params() {
    let mut params = HashMap::new();
    KlineQuery::daily().into_params(&mut params);

    assert_eq!(params.len(), 2);
    assert_eq!(params.get("period").map(String::as_str), Some("d"));
    assert_eq!(params.get("adjust").map(String::as_str), Some("none"));
  }

  #[test]
  fn test_kline_query_full_params() {
    let mut params = HashMap::new();
    KlineQuery::with_period(KlinePeriod::Week)
      .adjust(AdjustType::Forward)
      .range("2024-01-01", "2024-06-30")
      .limit(50)
      .into_params(&mut params);

    assert_eq!(params.get("period").map(String::as_str), Some("w"));
    assert_eq!(params.get("adjust").map(String::as_str), Some("qfq"));
    assert_eq!(params.get("start_date").map(String::as_str), Some("2024-01-01"));
    assert_eq!(params.get("end_date").map(String::as_str), Some("2024-06-30"));
    assert_eq!(params.get("limit").map(String::as_str), Some("50"));
  }
}
