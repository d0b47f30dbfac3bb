//! HTTP client for the exchange-rate archive and the lookup capability.

use std::future::Future;

use chat_core::Quote;
use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::api::DayRates;
use crate::error::RatesError;

/// Archive endpoint; the request date (`DD.MM.YYYY`) is appended.
pub const ARCHIVE_URL: &str = "https://api.privatbank.ua/p24api/exchange_rates?json&date=";

/// Date format used by the archive.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Reply text sent to a requester when a lookup fails for any reason.
pub const LOOKUP_FAILED: &str = "Failed to retrieve data";

/// Lookup capability the chat server depends on.
///
/// Idempotent and side-effect free. Implementations must be cheap to clone
/// so callers can spawn lookups onto the runtime.
pub trait RateLookup: Send + Sync + 'static {
    /// Resolve an upper-case currency code into today's quote.
    fn lookup(&self, code: &str) -> impl Future<Output = Result<Quote, RatesError>> + Send;
}

/// Client for the PrivatBank public exchange-rates archive.
#[derive(Debug, Clone)]
pub struct PrivatBankClient {
    http: reqwest::Client,
    base_url: String,
}

impl PrivatBankClient {
    pub fn new() -> Self {
        Self::with_base_url(ARCHIVE_URL)
    }

    /// Point the client at a different endpoint (tests, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        PrivatBankClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the archive document for one date.
    pub async fn fetch_day(&self, date: NaiveDate) -> Result<DayRates, RatesError> {
        let url = format!("{}{}", self.base_url, date.format(DATE_FORMAT));
        debug!(%url, "fetching archive day");

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(RatesError::BadStatus(response.status()));
        }

        Ok(response.json().await?)
    }
}

impl Default for PrivatBankClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RateLookup for PrivatBankClient {
    fn lookup(&self, code: &str) -> impl Future<Output = Result<Quote, RatesError>> + Send {
        async move {
            let today = Local::now().date_naive();
            let day = self.fetch_day(today).await?;

            let date = today.format(DATE_FORMAT).to_string();
            day.find(code)
                .map(|record| record.national_quote(&date))
                .ok_or_else(|| RatesError::UnknownCurrency(code.to_string()))
        }
    }
}
