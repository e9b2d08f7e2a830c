//! # mq-client
//!
//! A client for a market-quote HTTP API covering stocks, funds, bonds,
//! indices, futures, forex and gold, plus server-computed technical indicators.
//!
//! Every operation has the same shape: build a parameter map from the caller's
//! arguments, send it with the caller's choice of GET or POST through the
//! shared [`Transport`], and decode the JSON body into a `Vec` of records.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mq_client::{HttpMethod, KlineQuery, MarketClient};
//! use mq_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = MarketClient::new(config)?;
//!
//!     let quotes = client.stock().quote(HttpMethod::Get, "600519").await?;
//!     println!("Latest: {:?}", quotes.first().and_then(|q| q.quote.price));
//!
//!     let macd = client.indicators().macd(HttpMethod::Get, "600519", KlineQuery::daily()).await?;
//!     println!("{} MACD points", macd.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, mq_core::Error>`. There are no retries; a
//! failed call is reported once to the caller.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod decode;
pub mod endpoints;
pub mod transport;

// Re-export the main client and common types
pub use client::MarketClient;
pub use decode::decode_list;
pub use mq_core::{AdjustType, Config, Endpoint, Error, HttpMethod, KlinePeriod, KlineQuery, Market, Result};
pub use mq_models::*;
pub use transport::Transport;

// Re-export endpoint groups for direct access if needed
pub use endpoints::{
  bond::BondEndpoints, forex::ForexEndpoints, fund::FundEndpoints, futures::FuturesEndpoints,
  gold::GoldEndpoints, index::IndexEndpoints, indicator::IndicatorEndpoints,
  stock::StockEndpoints, EndpointBase,
};
