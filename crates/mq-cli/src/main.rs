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

use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;

mod commands;
mod config;

use commands::{
  query::{BondCommand, ForexCommand, FundCommand, FuturesCommand, GoldCommand, IndexCommand, IndicatorCommand, StockCommand},
  raw::RawCommand,
};
use config::ConnectionArgs;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "mq")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  #[command(flatten)]
  connection: ConnectionArgs,

  /// Send parameters as a POST form body instead of a GET query
  #[arg(long, global = true)]
  post: bool,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
  /// Stock listings, quotes, klines and company data
  Stock(StockCommand),
  /// Fund listings, quotes, NAV history and klines
  Fund(FundCommand),
  /// Bond listings, quotes and klines
  Bond(BondCommand),
  /// Index listings, levels, klines and constituents
  Index(IndexCommand),
  /// Futures listings, quotes and klines
  Futures(FuturesCommand),
  /// Currency pairs, rates and klines
  Forex(ForexCommand),
  /// Gold varieties, prices and klines
  Gold(GoldCommand),
  /// Server-computed technical indicators
  Indicator(IndicatorCommand),
  /// Call any endpoint with key=value parameters and print the raw body
  Raw(RawCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  // Parse CLI arguments
  let cli = Cli::parse();

  // Initialize logging
  let log_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt().with_env_filter(log_level).with_writer(std::io::stderr).init();

  let client = cli.connection.client()?;
  let method = commands::http_method(cli.post);

  match cli.command {
    Commands::Stock(cmd) => commands::query::stock(cmd, &client, method).await?,
    Commands::Fund(cmd) => commands::query::fund(cmd, &client, method).await?,
    Commands::Bond(cmd) => commands::query::bond(cmd, &client, method).await?,
    Commands::Index(cmd) => commands::query::index(cmd, &client, method).await?,
    Commands::Futures(cmd) => commands::query::futures(cmd, &client, method).await?,
    Commands::Forex(cmd) => commands::query::forex(cmd, &client, method).await?,
    Commands::Gold(cmd) => commands::query::gold(cmd, &client, method).await?,
    Commands::Indicator(cmd) => commands::query::indicator(cmd, &client, method).await?,
    Commands::Raw(cmd) => commands::raw::execute(cmd, &client, method).await?,
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use clap::CommandFactory;

  #[test]
  fn test_cli_definition() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
      "mq",
      "stock",
      "quote",
      "600519",
      "--post",
      "-v",
      "--base-url",
      "https://quotes.test",
      "--token",
      "abc",
    ])
    .unwrap();

    assert!(cli.post);
    assert!(cli.verbose);
    assert_eq!(cli.connection.base_url.as_deref(), Some("https://quotes.test"));
    assert!(matches!(cli.command, Commands::Stock(_)));
  }
}
