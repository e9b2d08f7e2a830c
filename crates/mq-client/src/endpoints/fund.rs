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

//! Fund endpoints: listings, exchange-traded quotes, NAV history and klines

use super::{code_params, impl_endpoint_base, insert_range, kline_params, EndpointBase};
use crate::transport::Transport;
use mq_core::{Endpoint, HttpMethod, KlineQuery, Result};
use mq_models::{FundNav, FundQuote, Kline, SecurityInfo};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;

/// Fund endpoints
pub struct FundEndpoints {
  transport: Arc<Transport>,
  rate_limiter: Option<Arc<super::DirectRateLimiter>>,
}

impl FundEndpoints {
  /// List funds
  ///
  /// # Arguments
  ///
  /// * `method` - HTTP verb to use
  /// * `fund_type` - Optional type filter passed through as `type` (e.g., "etf", "lof")
  #[instrument(skip(self))]
  pub async fn list(
    &self,
    method: HttpMethod,
    fund_type: Option<&str>,
  ) -> Result<Vec<SecurityInfo>> {
    let mut params = HashMap::new();
    if let Some(fund_type) = fund_type {
      params.insert("type".to_string(), fund_type.to_string());
    }

    self.fetch(method, Endpoint::FundList, params).await
  }

  /// Get the real-time quote of an exchange-traded fund
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let quotes = client.fund().quote(HttpMethod::Get, "510300").await?;
  /// if let Some(premium) = quotes.first().and_then(|q| q.premium_pct()) {
  ///     println!("Premium over IOPV: {:.2}%", premium);
  /// }
  /// # Ok::<(), mq_core::Error>(())
  /// ```
  #[instrument(skip(self))]
  pub async fn quote(&self, method: HttpMethod, code: &str) -> Result<Vec<FundQuote>> {
    self.fetch(method, Endpoint::FundQuote, code_params(code)).await
  }

  /// Get net asset value history
  ///
  /// # Arguments
  ///
  /// * `method` - HTTP verb to use
  /// * `code` - Fund code
  /// * `start_date` / `end_date` - Optional bounds in YYYY-MM-DD format
  #[instrument(skip(self))]
  pub async fn nav(
    &self,
    method: HttpMethod,
    code: &str,
    start_date: Option<&str>,
    end_date: Option<&str>,
  ) -> Result<Vec<FundNav>> {
    let mut params = code_params(code);
    insert_range(&mut params, start_date, end_date);

    self.fetch(method, Endpoint::FundNav, params).await
  }

  /// Get kline bars for an exchange-traded fund
  #[instrument(skip(self, query), fields(period = %query.period))]
  pub async fn kline(&self, method: HttpMethod, code: &str, query: KlineQuery) -> Result<Vec<Kline>> {
    self.fetch(method, Endpoint::FundKline, kline_params(code, query)).await
  }
}

impl_endpoint_base!(FundEndpoints);
