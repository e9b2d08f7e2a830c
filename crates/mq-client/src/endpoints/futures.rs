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

//! Futures endpoints

use super::{code_params, impl_endpoint_base, kline_params, EndpointBase};
use crate::transport::Transport;
use mq_core::{Endpoint, HttpMethod, KlineQuery, Result};
use mq_models::{FuturesQuote, Kline, SecurityInfo};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;

/// Futures endpoints
pub struct FuturesEndpoints {
  transport: Arc<Transport>,
  rate_limiter: Option<Arc<super::DirectRateLimiter>>,
}

impl FuturesEndpoints {
  /// List futures contracts
  ///
  /// # Arguments
  ///
  /// * `method` - HTTP verb to use
  /// * `exchange` - Optional exchange filter (e.g., "SHFE", "DCE", "CFFEX")
  #[instrument(skip(self))]
  pub async fn list(&self, method: HttpMethod, exchange: Option<&str>) -> Result<Vec<SecurityInfo>> {
    let mut params = HashMap::new();
    if let Some(exchange) = exchange {
      params.insert("exchange".to_string(), exchange.to_string());
    }

    self.fetch(method, Endpoint::FuturesList, params).await
  }

  /// Get the real-time quote for a contract
  ///
  /// # Arguments
  ///
  /// * `method` - HTTP verb to use
  /// * `code` - Contract code (e.g., "rb2410")
  #[instrument(skip(self))]
  pub async fn quote(&self, method: HttpMethod, code: &str) -> Result<Vec<FuturesQuote>> {
    self.fetch(method, Endpoint::FuturesQuote, code_params(code)).await
  }

  /// Get kline bars for a contract
  #[instrument(skip(self, query), fields(period = %query.period))]
  pub async fn kline(&self, method: HttpMethod, code: &str, query: KlineQuery) -> Result<Vec<Kline>> {
    self.fetch(method, Endpoint::FuturesKline, kline_params(code, query)).await
  }
}

impl_endpoint_base!(FuturesEndpoints);
