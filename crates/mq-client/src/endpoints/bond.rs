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

//! Bond endpoints

use super::{code_params, impl_endpoint_base, kline_params, EndpointBase};
use crate::transport::Transport;
use mq_core::{Endpoint, HttpMethod, KlineQuery, Result};
use mq_models::{Kline, Quote, SecurityInfo};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;

/// Bond endpoints, including convertibles
pub struct BondEndpoints {
  transport: Arc<Transport>,
  rate_limiter: Option<Arc<super::DirectRateLimiter>>,
}

impl BondEndpoints {
  /// List bonds
  ///
  /// # Arguments
  ///
  /// * `method` - HTTP verb to use
  /// * `bond_type` - Optional type filter passed through as `type` (e.g., "convertible")
  #[instrument(skip(self))]
  pub async fn list(
    &self,
    method: HttpMethod,
    bond_type: Option<&str>,
  ) -> Result<Vec<SecurityInfo>> {
    let mut params = HashMap::new();
    if let Some(bond_type) = bond_type {
      params.insert("type".to_string(), bond_type.to_string());
    }

    self.fetch(method, Endpoint::BondList, params).await
  }

  /// Get the real-time quote for a bond
  #[instrument(skip(self))]
  pub async fn quote(&self, method: HttpMethod, code: &str) -> Result<Vec<Quote>> {
    self.fetch(method, Endpoint::BondQuote, code_params(code)).await
  }

  /// Get kline bars for a bond
  #[instrument(skip(self, query), fields(period = %query.period))]
  pub async fn kline(&self, method: HttpMethod, code: &str, query: KlineQuery) -> Result<Vec<Kline>> {
    self.fetch(method, Endpoint::BondKline, kline_params(code, query)).await
  }
}

impl_endpoint_base!(BondEndpoints);
