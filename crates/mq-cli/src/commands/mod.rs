pub mod query;
pub mod raw;

use anyhow::Result;
use mq_core::HttpMethod;
use serde::Serialize;

/// `--post` switches every call to POST
pub fn http_method(post: bool) -> HttpMethod {
  if post { HttpMethod::Post } else { HttpMethod::Get }
}

/// Print records as pretty JSON on stdout
pub fn print_json<T: Serialize>(records: &T) -> Result<()> {
  println!("{}", serde_json::to_string_pretty(records)?);
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_http_method() {
    assert_eq!(http_method(false), HttpMethod::Get);
    assert_eq!(http_method(true), HttpMethod::Post);
  }
}
