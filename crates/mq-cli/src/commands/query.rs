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

use super::print_json;
use anyhow::Result;
use clap::{Args, Subcommand};
use mq_client::MarketClient;
use mq_core::{AdjustType, HttpMethod, KlinePeriod, KlineQuery, Market};
use tracing::info;

/// Arguments shared by every kline and indicator subcommand
#[derive(Args, Debug, Clone)]
pub struct KlineArgs {
  /// Security code
  code: String,

  /// Bar period: 1m, 5m, 15m, 30m, 60m, d, w, m
  #[arg(long, default_value = "d")]
  period: KlinePeriod,

  /// Price adjustment: none, qfq, hfq
  #[arg(long, default_value = "none")]
  adjust: AdjustType,

  /// First date (YYYY-MM-DD)
  #[arg(long)]
  start: Option<String>,

  /// Last date (YYYY-MM-DD)
  #[arg(long)]
  end: Option<String>,

  /// Maximum number of bars
  #[arg(short, long)]
  limit: Option<u32>,
}

impl KlineArgs {
  fn split(self) -> (String, KlineQuery) {
    let query = KlineQuery {
      period: self.period,
      adjust: self.adjust,
      start_date: self.start,
      end_date: self.end,
      limit: self.limit,
    };
    (self.code, query)
  }
}

/// Date range shared by NAV and money flow subcommands
#[derive(Args, Debug, Clone)]
pub struct RangeArgs {
  /// Security code
  code: String,

  /// First date (YYYY-MM-DD)
  #[arg(long)]
  start: Option<String>,

  /// Last date (YYYY-MM-DD)
  #[arg(long)]
  end: Option<String>,
}

#[derive(Args, Debug)]
pub struct StockCommand {
  #[command(subcommand)]
  command: StockSubcommands,
}

#[derive(Subcommand, Debug)]
enum StockSubcommands {
  /// List stocks
  List {
    /// Market filter: sh, sz, bj, hk, us
    #[arg(short, long)]
    market: Option<Market>,
  },
  /// Real-time quote for one or more codes
  Quote {
    #[arg(required = true)]
    codes: Vec<String>,
  },
  /// Kline bars
  Kline(KlineArgs),
  /// Intraday minute chart
  Minute {
    code: String,
    /// Trading day (YYYY-MM-DD), latest session when omitted
    #[arg(long)]
    date: Option<String>,
  },
  /// Company profile
  Profile { code: String },
  /// Daily money flow
  FundFlow(RangeArgs),
}

pub async fn stock(cmd: StockCommand, client: &MarketClient, method: HttpMethod) -> Result<()> {
  let stock = client.stock();
  match cmd.command {
    StockSubcommands::List { market } => {
      let stocks = stock.list(method, market).await?;
      info!("{} stocks", stocks.len());
      print_json(&stocks)
    }
    StockSubcommands::Quote { codes } => {
      let quotes = if let [code] = codes.as_slice() {
        stock.quote(method, code).await?
      } else {
        let codes: Vec<&str> = codes.iter().map(String::as_str).collect();
        stock.quotes(method, &codes).await?
      };
      print_json(&quotes)
    }
    StockSubcommands::Kline(args) => {
      let (code, query) = args.split();
      print_json(&stock.kline(method, &code, query).await?)
    }
    StockSubcommands::Minute { code, date } => {
      print_json(&stock.minute(method, &code, date.as_deref()).await?)
    }
    StockSubcommands::Profile { code } => print_json(&stock.profile(method, &code).await?),
    StockSubcommands::FundFlow(range) => print_json(
      &stock
        .fund_flow(method, &range.code, range.start.as_deref(), range.end.as_deref())
        .await?,
    ),
  }
}

#[derive(Args, Debug)]
pub struct FundCommand {
  #[command(subcommand)]
  command: FundSubcommands,
}

#[derive(Subcommand, Debug)]
enum FundSubcommands {
  /// List funds
  List {
    /// Fund type filter, e.g. etf, lof
    #[arg(short = 't', long = "type")]
    fund_type: Option<String>,
  },
  /// Real-time quote of an exchange-traded fund
  Quote { code: String },
  /// Net asset value history
  Nav(RangeArgs),
  /// Kline bars
  Kline(KlineArgs),
}

pub async fn fund(cmd: FundCommand, client: &MarketClient, method: HttpMethod) -> Result<()> {
  let fund = client.fund();
  match cmd.command {
    FundSubcommands::List { fund_type } => {
      print_json(&fund.list(method, fund_type.as_deref()).await?)
    }
    FundSubcommands::Quote { code } => print_json(&fund.quote(method, &code).await?),
    FundSubcommands::Nav(range) => print_json(
      &fund.nav(method, &range.code, range.start.as_deref(), range.end.as_deref()).await?,
    ),
    FundSubcommands::Kline(args) => {
      let (code, query) = args.split();
      print_json(&fund.kline(method, &code, query).await?)
    }
  }
}

#[derive(Args, Debug)]
pub struct BondCommand {
  #[command(subcommand)]
  command: BondSubcommands,
}

#[derive(Subcommand, Debug)]
enum BondSubcommands {
  /// List bonds
  List {
    /// Bond type filter, e.g. convertible
    #[arg(short = 't', long = "type")]
    bond_type: Option<String>,
  },
  /// Real-time quote
  Quote { code: String },
  /// Kline bars
  Kline(KlineArgs),
}

pub async fn bond(cmd: BondCommand, client: &MarketClient, method: HttpMethod) -> Result<()> {
  let bond = client.bond();
  match cmd.command {
    BondSubcommands::List { bond_type } => {
      print_json(&bond.list(method, bond_type.as_deref()).await?)
    }
    BondSubcommands::Quote { code } => print_json(&bond.quote(method, &code).await?),
    BondSubcommands::Kline(args) => {
      let (code, query) = args.split();
      print_json(&bond.kline(method, &code, query).await?)
    }
  }
}

#[derive(Args, Debug)]
pub struct IndexCommand {
  #[command(subcommand)]
  command: IndexSubcommands,
}

#[derive(Subcommand, Debug)]
enum IndexSubcommands {
  /// List indices
  List {
    /// Market filter: sh, sz, bj, hk, us
    #[arg(short, long)]
    market: Option<Market>,
  },
  /// Real-time level
  Quote { code: String },
  /// Kline bars
  Kline(KlineArgs),
  /// Members and weights
  Constituents { code: String },
}

pub async fn index(cmd: IndexCommand, client: &MarketClient, method: HttpMethod) -> Result<()> {
  let index = client.index();
  match cmd.command {
    IndexSubcommands::List { market } => print_json(&index.list(method, market).await?),
    IndexSubcommands::Quote { code } => print_json(&index.quote(method, &code).await?),
    IndexSubcommands::Kline(args) => {
      let (code, query) = args.split();
      print_json(&index.kline(method, &code, query).await?)
    }
    IndexSubcommands::Constituents { code } => {
      let members = index.constituents(method, &code).await?;
      info!("{} constituents", members.len());
      print_json(&members)
    }
  }
}

#[derive(Args, Debug)]
pub struct FuturesCommand {
  #[command(subcommand)]
  command: FuturesSubcommands,
}

#[derive(Subcommand, Debug)]
enum FuturesSubcommands {
  /// List contracts
  List {
    /// Exchange filter, e.g. SHFE
    #[arg(short, long)]
    exchange: Option<String>,
  },
  /// Real-time quote
  Quote { code: String },
  /// Kline bars
  Kline(KlineArgs),
}

pub async fn futures(cmd: FuturesCommand, client: &MarketClient, method: HttpMethod) -> Result<()> {
  let futures = client.futures();
  match cmd.command {
    FuturesSubcommands::List { exchange } => {
      print_json(&futures.list(method, exchange.as_deref()).await?)
    }
    FuturesSubcommands::Quote { code } => print_json(&futures.quote(method, &code).await?),
    FuturesSubcommands::Kline(args) => {
      let (code, query) = args.split();
      print_json(&futures.kline(method, &code, query).await?)
    }
  }
}

#[derive(Args, Debug)]
pub struct ForexCommand {
  #[command(subcommand)]
  command: SpotSubcommands,
}

#[derive(Args, Debug)]
pub struct GoldCommand {
  #[command(subcommand)]
  command: SpotSubcommands,
}

/// Forex and gold take the same subcommands
#[derive(Subcommand, Debug)]
enum SpotSubcommands {
  /// List quoted instruments
  List,
  /// Real-time quote
  Quote { code: String },
  /// Kline bars
  Kline(KlineArgs),
}

pub async fn forex(cmd: ForexCommand, client: &MarketClient, method: HttpMethod) -> Result<()> {
  let forex = client.forex();
  match cmd.command {
    SpotSubcommands::List => print_json(&forex.list(method).await?),
    SpotSubcommands::Quote { code } => print_json(&forex.quote(method, &code).await?),
    SpotSubcommands::Kline(args) => {
      let (code, query) = args.split();
      print_json(&forex.kline(method, &code, query).await?)
    }
  }
}

pub async fn gold(cmd: GoldCommand, client: &MarketClient, method: HttpMethod) -> Result<()> {
  let gold = client.gold();
  match cmd.command {
    SpotSubcommands::List => print_json(&gold.list(method).await?),
    SpotSubcommands::Quote { code } => print_json(&gold.quote(method, &code).await?),
    SpotSubcommands::Kline(args) => {
      let (code, query) = args.split();
      print_json(&gold.kline(method, &code, query).await?)
    }
  }
}

#[derive(Args, Debug)]
pub struct IndicatorCommand {
  #[command(subcommand)]
  command: IndicatorSubcommands,
}

#[derive(Subcommand, Debug)]
enum IndicatorSubcommands {
  /// Moving averages
  Ma {
    #[command(flatten)]
    kline: KlineArgs,
    /// Extra averaging window
    #[arg(short, long)]
    window: Option<u32>,
  },
  /// MACD
  Macd(KlineArgs),
  /// KDJ
  Kdj(KlineArgs),
  /// Bollinger bands
  Boll(KlineArgs),
  /// RSI
  Rsi {
    #[command(flatten)]
    kline: KlineArgs,
    /// Extra RSI window
    #[arg(short, long)]
    window: Option<u32>,
  },
}

pub async fn indicator(cmd: IndicatorCommand, client: &MarketClient, method: HttpMethod) -> Result<()> {
  let indicators = client.indicators();
  match cmd.command {
    IndicatorSubcommands::Ma { kline, window } => {
      let (code, query) = kline.split();
      print_json(&indicators.ma(method, &code, query, window).await?)
    }
    IndicatorSubcommands::Macd(args) => {
      let (code, query) = args.split();
      print_json(&indicators.macd(method, &code, query).await?)
    }
    IndicatorSubcommands::Kdj(args) => {
      let (code, query) = args.split();
      print_json(&indicators.kdj(method, &code, query).await?)
    }
    IndicatorSubcommands::Boll(args) => {
      let (code, query) = args.split();
      print_json(&indicators.boll(method, &code, query).await?)
    }
    IndicatorSubcommands::Rsi { kline, window } => {
      let (code, query) = kline.split();
      print_json(&indicators.rsi(method, &code, query, window).await?)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use clap::Parser;

  #[derive(Parser, Debug)]
  struct TestCli {
    #[command(subcommand)]
    command: IndicatorSubcommands,
  }

  #[test]
  fn test_kline_args_split() {
    let cli = TestCli::parse_from([
      "mq", "macd", "600519", "--period", "w", "--adjust", "qfq", "--start", "2024-01-01", "-l", "20",
    ]);

    let IndicatorSubcommands::Macd(args) = cli.command else {
      panic!("expected macd");
    };
    let (code, query) = args.split();

    assert_eq!(code, "600519");
    assert_eq!(query.period, KlinePeriod::Week);
    assert_eq!(query.adjust, AdjustType::Forward);
    assert_eq!(query.start_date.as_deref(), Some("2024-01-01"));
    assert_eq!(query.end_date, None);
    assert_eq!(query.limit, Some(20));
  }

  #[test]
  fn test_invalid_period_rejected() {
    let result = TestCli::try_parse_from(["mq", "kdj", "600519", "--period", "2d"]);
    assert!(result.is_err());
  }

  #[test]
  fn test_rsi_window() {
    let cli = TestCli::parse_from(["mq", "rsi", "600519", "--window", "14"]);
    let IndicatorSubcommands::Rsi { kline, window } = cli.command else {
      panic!("expected rsi");
    };
    assert_eq!(window, Some(14));
    assert_eq!(kline.split().1, KlineQuery::daily());
  }
}
