//! # mq-models
//!
//! Data models for market-quote API responses.
//!
//! Every endpoint returns a list of plain records. The records carry no
//! behavior beyond a few convenience helpers and decode leniently: numbers may
//! be sent as strings, missing values as `null`, `""` or `"-"`.
//!
//! ## Usage
//!
//! ```ignore
//! use mq_models::{Kline, StockQuote};
//!
//! let bars: Vec<Kline> = serde_json::from_str(&response_json)?;
//! let quotes: Vec<StockQuote> = serde_json::from_str(&quote_json)?;
//! ```

#![warn(clippy::all)]

pub mod common;
pub mod de;
pub mod forex;
pub mod fund;
pub mod futures;
pub mod index;
pub mod indicator;
pub mod stock;

// Re-export common types for convenience
pub use common::*;

// Re-export all model types
pub use forex::*;
pub use fund::*;
pub use futures::*;
pub use index::*;
pub use indicator::*;
pub use stock::*;
