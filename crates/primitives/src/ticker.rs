//! Ticker symbol definitions.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Ticker symbol of a tradable asset.
///
/// Tickers are opaque identifiers. Nothing in the workspace requires them to
/// be unique: a portfolio listing the same ticker twice holds two independent
/// positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
pub struct Ticker(pub String);

impl Ticker {
    /// Create a new ticker.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the ticker as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Ticker {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Ticker {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_display() {
        let ticker = Ticker::new("AAPL");
        assert_eq!(ticker.to_string(), "AAPL");
        assert_eq!(ticker.as_str(), "AAPL");
    }

    #[test]
    fn ticker_from_conversions() {
        let a: Ticker = "MSFT".into();
        let b: Ticker = String::from("MSFT").into();
        assert_eq!(a, b);
    }
}
