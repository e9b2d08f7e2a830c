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

//! Stock endpoints
//!
//! This module provides access to:
//! - Stock listings per market
//! - Real-time quotes, single and batched
//! - Kline bars and the intraday minute chart
//! - Company profiles and daily money flow

use super::{code_params, impl_endpoint_base, insert_range, kline_params, EndpointBase};
use crate::transport::Transport;
use mq_core::{Endpoint, HttpMethod, KlineQuery, Market, Result};
use mq_models::{CompanyProfile, FundFlow, Kline, MinuteBar, SecurityInfo, StockQuote};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;

/// Stock endpoints
pub struct StockEndpoints {
  transport: Arc<Transport>,
  rate_limiter: Option<Arc<super::DirectRateLimiter>>,
}

impl StockEndpoints {
  /// List listed stocks, optionally for one market
  ///
  /// # Arguments
  ///
  /// * `method` - HTTP verb to use
  /// * `market` - Optional market filter (sh, sz, bj, hk, us)
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let stocks = client.stock().list(HttpMethod::Get, Some(Market::Sh)).await?;
  /// println!("{} stocks listed in Shanghai", stocks.len());
  /// # Ok::<(), mq_core::Error>(())
  /// ```
  #[instrument(skip(self))]
  pub async fn list(&self, method: HttpMethod, market: Option<Market>) -> Result<Vec<SecurityInfo>> {
    let mut params = HashMap::new();
    if let Some(market) = market {
      params.insert("market".to_string(), market.to_string());
    }

    self.fetch(method, Endpoint::StockList, params).await
  }

  /// Get the real-time quote for one stock
  ///
  /// # Arguments
  ///
  /// * `method` - HTTP verb to use
  /// * `code` - Stock code (e.g., "600519", "000001")
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let quotes = client.stock().quote(HttpMethod::Get, "600519").await?;
  /// for q in &quotes {
  ///     println!("{} {:?} ({:?}%)", q.quote.name, q.quote.price, q.quote.change_pct);
  /// }
  /// # Ok::<(), mq_core::Error>(())
  /// ```
  #[instrument(skip(self))]
  pub async fn quote(&self, method: HttpMethod, code: &str) -> Result<Vec<StockQuote>> {
    self.fetch(method, Endpoint::StockQuote, code_params(code)).await
  }

  /// Get real-time quotes for several stocks in one call
  ///
  /// # Arguments
  ///
  /// * `method` - HTTP verb to use
  /// * `codes` - Stock codes, sent comma-joined as `codes`
  #[instrument(skip(self, codes), fields(count = codes.len()))]
  pub async fn quotes(&self, method: HttpMethod, codes: &[&str]) -> Result<Vec<StockQuote>> {
    let mut params = HashMap::new();
    params.insert("codes".to_string(), codes.join(","));

    self.fetch(method, Endpoint::StockQuotes, params).await
  }

  /// Get kline bars for a stock
  ///
  /// # Arguments
  ///
  /// * `method` - HTTP verb to use
  /// * `code` - Stock code
  /// * `query` - Period, adjustment, optional date range and limit
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let query = KlineQuery::daily().adjust(AdjustType::Forward).range("2024-01-01", "2024-06-30");
  /// let bars = client.stock().kline(HttpMethod::Get, "600519", query).await?;
  /// # Ok::<(), mq_core::Error>(())
  /// ```
  #[instrument(skip(self, query), fields(period = %query.period))]
  pub async fn kline(&self, method: HttpMethod, code: &str, query: KlineQuery) -> Result<Vec<Kline>> {
    self.fetch(method, Endpoint::StockKline, kline_params(code, query)).await
  }

  /// Get the intraday minute chart
  ///
  /// # Arguments
  ///
  /// * `method` - HTTP verb to use
  /// * `code` - Stock code
  /// * `date` - Optional trading day; the service defaults to the latest session
  #[instrument(skip(self))]
  pub async fn minute(
    &self,
    method: HttpMethod,
    code: &str,
    date: Option<&str>,
  ) -> Result<Vec<MinuteBar>> {
    let mut params = code_params(code);
    if let Some(date) = date {
      params.insert("date".to_string(), date.to_string());
    }

    self.fetch(method, Endpoint::StockMinute, params).await
  }

  /// Get the company profile
  #[instrument(skip(self))]
  pub async fn profile(&self, method: HttpMethod, code: &str) -> Result<Vec<CompanyProfile>> {
    self.fetch(method, Endpoint::StockProfile, code_params(code)).await
  }

  /// Get daily money flow split by order size
  ///
  /// # Arguments
  ///
  /// * `method` - HTTP verb to use
  /// * `code` - Stock code
  /// * `start_date` / `end_date` - Optional bounds in YYYY-MM-DD format
  #[instrument(skip(self))]
  pub async fn fund_flow(
    &self,
    method: HttpMethod,
    code: &str,
    start_date: Option<&str>,
    end_date: Option<&str>,
  ) -> Result<Vec<FundFlow>> {
    let mut params = code_params(code);
    insert_range(&mut params, start_date, end_date);

    self.fetch(method, Endpoint::StockFundFlow, params).await
  }
}

impl_endpoint_base!(StockEndpoints);
