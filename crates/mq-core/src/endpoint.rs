//! Remote endpoint catalogue and HTTP verb selection

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// HTTP verb used for a call. Always chosen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HttpMethod {
  /// Parameters go in the query string
  #[default]
  Get,
  /// Parameters go in a form-encoded body
  Post,
}

impl std::fmt::Display for HttpMethod {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      HttpMethod::Get => write!(f, "GET"),
      HttpMethod::Post => write!(f, "POST"),
    }
  }
}

impl FromStr for HttpMethod {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.to_ascii_uppercase().as_str() {
      "GET" => Ok(HttpMethod::Get),
      "POST" => Ok(HttpMethod::Post),
      _ => Err(Error::InvalidInput(format!("Unknown HTTP method: {}", s))),
    }
  }
}

/// Every remote endpoint the client knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endpoint {
  // Stock
  StockList,
  StockQuote,
  StockQuotes,
  StockKline,
  StockMinute,
  StockProfile,
  StockFundFlow,

  // Fund
  FundList,
  FundQuote,
  FundNav,
  FundKline,

  // Bond
  BondList,
  BondQuote,
  BondKline,

  // Index
  IndexList,
  IndexQuote,
  IndexKline,
  IndexConstituents,

  // Futures
  FuturesList,
  FuturesQuote,
  FuturesKline,

  // Forex
  ForexList,
  ForexQuote,
  ForexKline,

  // Gold
  GoldList,
  GoldQuote,
  GoldKline,

  // Technical indicators (computed server-side)
  IndicatorMa,
  IndicatorMacd,
  IndicatorKdj,
  IndicatorBoll,
  IndicatorRsi,
}

impl Endpoint {
  /// All endpoints, in catalogue order
  pub const ALL: [Endpoint; 32] = [
    Endpoint::StockList,
    Endpoint::StockQuote,
    Endpoint::StockQuotes,
    Endpoint::StockKline,
    Endpoint::StockMinute,
    Endpoint::StockProfile,
    Endpoint::StockFundFlow,
    Endpoint::FundList,
    Endpoint::FundQuote,
    Endpoint::FundNav,
    Endpoint::FundKline,
    Endpoint::BondList,
    Endpoint::BondQuote,
    Endpoint::BondKline,
    Endpoint::IndexList,
    Endpoint::IndexQuote,
    Endpoint::IndexKline,
    Endpoint::IndexConstituents,
    Endpoint::FuturesList,
    Endpoint::FuturesQuote,
    Endpoint::FuturesKline,
    Endpoint::ForexList,
    Endpoint::ForexQuote,
    Endpoint::ForexKline,
    Endpoint::GoldList,
    Endpoint::GoldQuote,
    Endpoint::GoldKline,
    Endpoint::IndicatorMa,
    Endpoint::IndicatorMacd,
    Endpoint::IndicatorKdj,
    Endpoint::IndicatorBoll,
    Endpoint::IndicatorRsi,
  ];

  /// Path relative to the configured base URL
  pub fn path(&self) -> &'static str {
    match self {
      Endpoint::StockList => "/stock/list",
      Endpoint::StockQuote => "/stock/quote",
      Endpoint::StockQuotes => "/stock/quotes",
      Endpoint::StockKline => "/stock/kline",
      Endpoint::StockMinute => "/stock/minute",
      Endpoint::StockProfile => "/stock/profile",
      Endpoint::StockFundFlow => "/stock/fund_flow",

      Endpoint::FundList => "/fund/list",
      Endpoint::FundQuote => "/fund/quote",
      Endpoint::FundNav => "/fund/nav",
      Endpoint::FundKline => "/fund/kline",

      Endpoint::BondList => "/bond/list",
      Endpoint::BondQuote => "/bond/quote",
      Endpoint::BondKline => "/bond/kline",

      Endpoint::IndexList => "/index/list",
      Endpoint::IndexQuote => "/index/quote",
      Endpoint::IndexKline => "/index/kline",
      Endpoint::IndexConstituents => "/index/constituents",

      Endpoint::FuturesList => "/futures/list",
      Endpoint::FuturesQuote => "/futures/quote",
      Endpoint::FuturesKline => "/futures/kline",

      Endpoint::ForexList => "/forex/list",
      Endpoint::ForexQuote => "/forex/quote",
      Endpoint::ForexKline => "/forex/kline",

      Endpoint::GoldList => "/gold/list",
      Endpoint::GoldQuote => "/gold/quote",
      Endpoint::GoldKline => "/gold/kline",

      Endpoint::IndicatorMa => "/indicator/ma",
      Endpoint::IndicatorMacd => "/indicator/macd",
      Endpoint::IndicatorKdj => "/indicator/kdj",
      Endpoint::IndicatorBoll => "/indicator/boll",
      Endpoint::IndicatorRsi => "/indicator/rsi",
    }
  }
}

impl std::fmt::Display for Endpoint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.path())
  }
}

impl FromStr for Endpoint {
  type Err = Error;

  /// Accepts the path with or without the leading slash, e.g. `stock/quote`
  fn from_str(s: &str) -> Result<Self> {
    let wanted = s.trim().trim_start_matches('/');
    Endpoint::ALL
      .iter()
      .copied()
      .find(|e| e.path().trim_start_matches('/') == wanted)
      .ok_or_else(|| Error::InvalidInput(format!("Unknown endpoint: {}", s)))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn test_http_method_display_and_parse() {
    assert_eq!(HttpMethod::Get.to_string(), "GET");
    assert_eq!(HttpMethod::Post.to_string(), "POST");
    assert_eq!("post".parse::<HttpMethod>().unwrap(), HttpMethod::Post);
    assert!("PATCH".parse::<HttpMethod>().is_err());
    assert_eq!(HttpMethod::default(), HttpMethod::Get);
  }

  #[test]
  fn test_endpoint_paths_are_unique() {
    let paths: HashSet<_> = Endpoint::ALL.iter().map(|e| e.path()).collect();
    assert_eq!(paths.len(), Endpoint::ALL.len());
    assert!(Endpoint::ALL.iter().all(|e| e.path().starts_with('/')));
  }

  #[test]
  fn test_endpoint_from_str() {
    assert_eq!("stock/quote".parse::<Endpoint>().unwrap(), Endpoint::StockQuote);
    assert_eq!("/indicator/macd".parse::<Endpoint>().unwrap(), Endpoint::IndicatorMacd);
    assert!("stock/unknown".parse::<Endpoint>().is_err());
  }

  #[test]
  fn test_endpoint_display() {
    assert_eq!(Endpoint::FundNav.to_string(), "/fund/nav");
    assert_eq!(Endpoint::IndexConstituents.to_string(), "/index/constituents");
  }
}
