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

//! Foreign exchange endpoints

use super::{code_params, impl_endpoint_base, kline_params, EndpointBase};
use crate::transport::Transport;
use mq_core::{Endpoint, HttpMethod, KlineQuery, Result};
use mq_models::{ForexQuote, Kline, SecurityInfo};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;

/// Foreign exchange (forex) endpoints
pub struct ForexEndpoints {
  transport: Arc<Transport>,
  rate_limiter: Option<Arc<super::DirectRateLimiter>>,
}

impl ForexEndpoints {
  /// List the currency pairs the service quotes
  #[instrument(skip(self))]
  pub async fn list(&self, method: HttpMethod) -> Result<Vec<SecurityInfo>> {
    self.fetch(method, Endpoint::ForexList, HashMap::new()).await
  }

  /// Get the real-time rate for a currency pair
  ///
  /// # Arguments
  ///
  /// * `method` - HTTP verb to use
  /// * `code` - Pair code (e.g., "USDCNY", "EURUSD")
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let rates = client.forex().quote(HttpMethod::Get, "USDCNY").await?;
  /// if let Some(rate) = rates.first() {
  ///     println!("{} mid {:?}", rate.code, rate.mid());
  /// }
  /// # Ok::<(), mq_core::Error>(())
  /// ```
  #[instrument(skip(self))]
  pub async fn quote(&self, method: HttpMethod, code: &str) -> Result<Vec<ForexQuote>> {
    self.fetch(method, Endpoint::ForexQuote, code_params(code)).await
  }

  /// Get kline bars for a currency pair
  #[instrument(skip(self, query), fields(period = %query.period))]
  pub async fn kline(&self, method: HttpMethod, code: &str, query: KlineQuery) -> Result<Vec<Kline>> {
    self.fetch(method, Endpoint::ForexKline, kline_params(code, query)).await
  }
}

impl_endpoint_base!(ForexEndpoints);
