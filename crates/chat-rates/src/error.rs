//! Error types for the rate lookup boundary.

use thiserror::Error;

/// Failures while querying the exchange-rate archive.
#[derive(Error, Debug)]
pub enum RatesError {
    /// Transport-level HTTP failure (connect, timeout, body read, JSON decode).
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The archive answered with a non-success status.
    #[error("unexpected response status: {0}")]
    BadStatus(reqwest::StatusCode),

    /// The archive has no record for the requested currency code.
    #[error("no rate for currency {0}")]
    UnknownCurrency(String),
}
