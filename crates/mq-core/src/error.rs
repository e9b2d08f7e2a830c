use thiserror::Error;

/// The main error type for mq-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// API token error
  #[error("Failed to retrieve API token: {0}")]
  ApiKey(String),

  /// Serialization/Deserialization error
  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),

  /// HTTP transport error, including non-success status codes
  #[error("HTTP error: {0}")]
  Http(String),

  /// Error reported by the quote service in its response body
  #[error("API error: {0}")]
  Api(String),

  /// Response body could not be decoded into the requested records
  #[error("Parse error: {0}")]
  Parse(String),

  /// Caller supplied a value outside the accepted set
  #[error("Invalid input: {0}")]
  InvalidInput(String),
}

/// Result type alias for mq-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_error_display() {
    let err = Error::Api("licence expired".to_string());
    assert_eq!(err.to_string(), "API error: licence expired");

    let err = Error::InvalidInput("period 2d".to_string());
    assert_eq!(err.to_string(), "Invalid input: period 2d");
  }

  #[test]
  fn test_serde_error_converts() {
    let parse: std::result::Result<u32, _> = serde_json::from_str::<u32>("not json");
    let err: Error = parse.unwrap_err().into();
    assert!(matches!(err, Error::Serde(_)));
  }
}
