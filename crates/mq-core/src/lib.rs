//! Core types, configuration and errors shared by the mq-* crates

pub mod config;
pub mod endpoint;
pub mod error;
pub mod types;

pub use config::Config;
pub use endpoint::{Endpoint, HttpMethod};
pub use error::{Error, Result};
pub use types::{AdjustType, KlinePeriod, KlineQuery, Market};

/// Default client-side rate limit (requests per minute)
pub const DEFAULT_RATE_LIMIT: u32 = 60;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Name of the parameter carrying the API token
pub const TOKEN_PARAM: &str = "token";
