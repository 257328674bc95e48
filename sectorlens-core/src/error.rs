//! Error types for building the company universe and parsing identifiers.

use thiserror::Error;

/// Configuration errors detected while building a [`Universe`](crate::company::Universe).
///
/// All of these are startup failures: a universe that builds successfully can
/// be projected and rendered without any further fallible step.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("ticker {ticker} has no sector mapping")]
    UnmappedTicker { ticker: String },

    #[error("ticker {ticker} appears more than once")]
    DuplicateTicker { ticker: String },

    #[error("ticker {ticker}: {field} is not a finite number")]
    NonFinite { ticker: String, field: &'static str },

    #[error("ticker {ticker}: dividend yield {value} is negative")]
    NegativeDividendYield { ticker: String, value: f64 },
}

/// Unknown tab identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tab '{0}' (expected one of: overview, profitability, growth, dividends, insights)")]
pub struct ParseTabError(pub String);

/// Unknown sector name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sector '{0}'")]
pub struct ParseSectorError(pub String);
