//! chat-rates
//!
//! The rate lookup boundary:
//! - wire types for the PrivatBank archive JSON
//! - `PrivatBankClient` and the `RateLookup` capability trait
//! - error types
//!
//! The `rates-fetch` binary (`src/main.rs`) is the batch fetcher CLI.

pub mod api;
pub mod client;
pub mod error;

pub use api::{DayRates, RateRecord};
pub use client::{PrivatBankClient, RateLookup, ARCHIVE_URL, DATE_FORMAT, LOOKUP_FAILED};
pub use error::RatesError;
