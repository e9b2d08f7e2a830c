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

use anyhow::{anyhow, Result};
use clap::Args;
use mq_client::MarketClient;
use mq_core::{Endpoint, HttpMethod};
use std::collections::HashMap;

#[derive(Args, Debug)]
pub struct RawCommand {
  /// Endpoint path, e.g. stock/quote or indicator/macd
  endpoint: Endpoint,

  /// Request parameter as key=value, may be repeated
  #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
  params: Vec<(String, String)>,
}

fn parse_key_val(s: &str) -> Result<(String, String)> {
  let (key, value) =
    s.split_once('=').ok_or_else(|| anyhow!("invalid key=value parameter: {}", s))?;
  if key.is_empty() {
    return Err(anyhow!("empty parameter name in: {}", s));
  }
  Ok((key.to_string(), value.to_string()))
}

pub async fn execute(cmd: RawCommand, client: &MarketClient, method: HttpMethod) -> Result<()> {
  let params: HashMap<String, String> = cmd.params.into_iter().collect();
  let body = client.raw(method, cmd.endpoint, params).await?;
  println!("{}", body);
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use clap::Parser;

  #[derive(Parser, Debug)]
  struct TestCli {
    #[command(flatten)]
    raw: RawCommand,
  }

  #[test]
  fn test_parse_key_val() {
    assert_eq!(parse_key_val("code=600519").unwrap(), ("code".to_string(), "600519".to_string()));
    assert_eq!(parse_key_val("date=").unwrap(), ("date".to_string(), String::new()));
    assert!(parse_key_val("code").is_err());
    assert!(parse_key_val("=x").is_err());
  }

  #[test]
  fn test_raw_args() {
    let cli =
      TestCli::parse_from(["mq", "stock/kline", "-p", "code=600519", "--param", "period=w"]);
    assert_eq!(cli.raw.endpoint, Endpoint::StockKline);
    assert_eq!(cli.raw.params.len(), 2);

    assert!(TestCli::try_parse_from(["mq", "stock/nothing"]).is_err());
  }
}
