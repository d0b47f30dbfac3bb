//! Batch exchange-rate fetcher.
//!
//! Prints USD and EUR quotes (plus one extra currency, when given) for each
//! of the last N days. All days are fetched concurrently.

use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use clap::Parser;
use futures::future::join_all;
use tracing::error;

use chat_rates::{DayRates, PrivatBankClient, DATE_FORMAT};

#[derive(Parser)]
#[clap(name = "rates-fetch")]
#[clap(about = "Fetch PrivatBank exchange rates for the last N days")]
struct Cli {
    /// How many days back to fetch, starting from today
    days: u32,

    /// Extra currency code to print alongside USD and EUR
    currency: Option<String>,

    /// Enable debug logging
    #[clap(short, long)]
    debug: bool,
}

/// Currencies printed for every day.
const DEFAULT_CURRENCIES: [&str; 2] = ["USD", "EUR"];

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let extra = cli.currency.map(|code| code.trim().to_uppercase());

    let today = Local::now().date_naive();
    let dates: Vec<NaiveDate> = (0..cli.days)
        .map(|back| today - Duration::days(i64::from(back)))
        .collect();

    let client = PrivatBankClient::new();
    let fetched = join_all(dates.iter().map(|date| client.fetch_day(*date))).await;

    for (date, result) in dates.iter().zip(fetched) {
        let date = date.format(DATE_FORMAT).to_string();
        match result {
            Ok(day) => {
                for line in day_summary(&day, &date, extra.as_deref()) {
                    println!("{line}");
                }
            }
            Err(err) => error!(%date, error = %err, "failed to fetch rates"),
        }
    }

    Ok(())
}

/// Render the per-day lines: USD, EUR, then the extra currency if listed.
fn day_summary(day: &DayRates, date: &str, extra: Option<&str>) -> Vec<String> {
    DEFAULT_CURRENCIES
        .iter()
        .copied()
        .chain(extra.filter(|code| !DEFAULT_CURRENCIES.contains(code)))
        .filter_map(|code| day.find(code))
        .map(|record| record.preferred_quote(date).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_rates::RateRecord;

    fn record(currency: &str, nb: f64, commercial: Option<f64>) -> RateRecord {
        RateRecord {
            currency: currency.to_string(),
            sale_rate_nb: nb,
            purchase_rate_nb: nb,
            sale_rate: commercial,
            purchase_rate: commercial,
        }
    }

    fn sample_day() -> DayRates {
        DayRates {
            date: "06.08.2026".to_string(),
            exchange_rate: vec![
                record("USD", 36.5686, Some(37.1)),
                record("EUR", 40.4262, Some(41.0)),
                record("CHF", 41.2551, None),
            ],
        }
    }

    #[test]
    fn summarizes_usd_and_eur_by_default() {
        let lines = day_summary(&sample_day(), "06.08.2026", None);
        assert_eq!(
            lines,
            vec![
                "USD - buy: 37.1, sale: 37.1. Date: 06.08.2026",
                "EUR - buy: 41, sale: 41. Date: 06.08.2026",
            ]
        );
    }

    #[test]
    fn extra_currency_is_appended() {
        let lines = day_summary(&sample_day(), "06.08.2026", Some("CHF"));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "CHF - buy: 41.2551, sale: 41.2551. Date: 06.08.2026");
    }

    #[test]
    fn extra_currency_already_in_defaults_is_not_duplicated() {
        let lines = day_summary(&sample_day(), "06.08.2026", Some("USD"));
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn unlisted_extra_currency_is_skipped() {
        let lines = day_summary(&sample_day(), "06.08.2026", Some("XAU"));
        assert_eq!(lines.len(), 2);
    }
}
