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

//! Technical indicator endpoints
//!
//! The indicator values are computed by the service from its own bar data.
//! These calls are passthroughs with the same arguments as a kline request,
//! plus an optional window for the single-window indicators.

use super::{impl_endpoint_base, kline_params, EndpointBase};
use crate::transport::Transport;
use mq_core::{Endpoint, HttpMethod, KlineQuery, Result};
use mq_models::{BollPoint, KdjPoint, MaPoint, MacdPoint, RsiPoint};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;

/// Technical indicator endpoints
pub struct IndicatorEndpoints {
  transport: Arc<Transport>,
  rate_limiter: Option<Arc<super::DirectRateLimiter>>,
}

fn with_window(mut params: HashMap<String, String>, window: Option<u32>) -> HashMap<String, String> {
  if let Some(window) = window {
    params.insert("window".to_string(), window.to_string());
  }
  params
}

impl IndicatorEndpoints {
  /// Get moving averages
  ///
  /// # Arguments
  ///
  /// * `method` - HTTP verb to use
  /// * `code` - Security code
  /// * `query` - Period, adjustment, optional date range and limit
  /// * `window` - Optional extra window; its column lands in `MaPoint::extra`,
  ///   read it with `MaPoint::average`
  #[instrument(skip(self, query), fields(period = %query.period))]
  pub async fn ma(
    &self,
    method: HttpMethod,
    code: &str,
    query: KlineQuery,
    window: Option<u32>,
  ) -> Result<Vec<MaPoint>> {
    let params = with_window(kline_params(code, query), window);
    self.fetch(method, Endpoint::IndicatorMa, params).await
  }

  /// Get MACD (DIF, DEA and histogram)
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let macd = client.indicators().macd(HttpMethod::Get, "600519", KlineQuery::daily().limit(30)).await?;
  /// let crossed = macd.windows(2).any(|w| w[0].macd < Some(0.0) && w[1].macd > Some(0.0));
  /// # Ok::<(), mq_core::Error>(())
  /// ```
  #[instrument(skip(self, query), fields(period = %query.period))]
  pub async fn macd(
    &self,
    method: HttpMethod,
    code: &str,
    query: KlineQuery,
  ) -> Result<Vec<MacdPoint>> {
    self.fetch(method, Endpoint::IndicatorMacd, kline_params(code, query)).await
  }

  /// Get KDJ stochastic values
  #[instrument(skip(self, query), fields(period = %query.period))]
  pub async fn kdj(&self, method: HttpMethod, code: &str, query: KlineQuery) -> Result<Vec<KdjPoint>> {
    self.fetch(method, Endpoint::IndicatorKdj, kline_params(code, query)).await
  }

  /// Get Bollinger bands
  #[instrument(skip(self, query), fields(period = %query.period))]
  pub async fn boll(
    &self,
    method: HttpMethod,
    code: &str,
    query: KlineQuery,
  ) -> Result<Vec<BollPoint>> {
    self.fetch(method, Endpoint::IndicatorBoll, kline_params(code, query)).await
  }

  /// Get RSI over the 6, 12 and 24 bar windows
  ///
  /// # Arguments
  ///
  /// * `window` - Optional extra window passed through as `window`
  #[instrument(skip(self, query), fields(period = %query.period))]
  pub async fn rsi(
    &self,
    method: HttpMethod,
    code: &str,
    query: KlineQuery,
    window: Option<u32>,
  ) -> Result<Vec<RsiPoint>> {
    let params = with_window(kline_params(code, query), window);
    self.fetch(method, Endpoint::IndicatorRsi, params).await
  }
}

impl_endpoint_base!(IndicatorEndpoints);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_with_window() {
    let params = with_window(HashMap::new(), Some(14));
    assert_eq!(params.get("window").map(String::as_str), Some("14"));

    let params = with_window(HashMap::new(), None);
    assert!(params.is_empty());
  }
}
