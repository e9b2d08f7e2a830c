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

//! Index endpoints

use super::{code_params, impl_endpoint_base, kline_params, EndpointBase};
use crate::transport::Transport;
use mq_core::{Endpoint, HttpMethod, KlineQuery, Market, Result};
use mq_models::{IndexConstituent, Kline, Quote, SecurityInfo};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;

/// Market index endpoints
pub struct IndexEndpoints {
  transport: Arc<Transport>,
  rate_limiter: Option<Arc<super::DirectRateLimiter>>,
}

impl IndexEndpoints {
  /// List indices, optionally for one market
  #[instrument(skip(self))]
  pub async fn list(&self, method: HttpMethod, market: Option<Market>) -> Result<Vec<SecurityInfo>> {
    let mut params = HashMap::new();
    if let Some(market) = market {
      params.insert("market".to_string(), market.to_string());
    }

    self.fetch(method, Endpoint::IndexList, params).await
  }

  /// Get the real-time level of an index
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let csi300 = client.index().quote(HttpMethod::Get, "000300").await?;
  /// # Ok::<(), mq_core::Error>(())
  /// ```
  #[instrument(skip(self))]
  pub async fn quote(&self, method: HttpMethod, code: &str) -> Result<Vec<Quote>> {
    self.fetch(method, Endpoint::IndexQuote, code_params(code)).await
  }

  /// Get kline bars for an index
  #[instrument(skip(self, query), fields(period = %query.period))]
  pub async fn kline(&self, method: HttpMethod, code: &str, query: KlineQuery) -> Result<Vec<Kline>> {
    self.fetch(method, Endpoint::IndexKline, kline_params(code, query)).await
  }

  /// Get index members and their weights
  #[instrument(skip(self))]
  pub async fn constituents(
    &self,
    method: HttpMethod,
    code: &str,
  ) -> Result<Vec<IndexConstituent>> {
    self.fetch(method, Endpoint::IndexConstituents, code_params(code)).await
  }
}

impl_endpoint_base!(IndexEndpoints);
