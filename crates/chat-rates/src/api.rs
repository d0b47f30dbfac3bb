//! Wire types for the PrivatBank exchange-rates archive.
//!
//! The archive serves one JSON document per date:
//! `https://api.privatbank.ua/p24api/exchange_rates?json&date=DD.MM.YYYY`
//!
//! These structs mirror the JSON field names; the logical [`Quote`] lives in
//! `chat-core` and is built from a record via [`RateRecord::national_quote`]
//! or [`RateRecord::preferred_quote`].

use chat_core::Quote;
use serde::Deserialize;

/// Top-level archive document for one date.
#[derive(Debug, Clone, Deserialize)]
pub struct DayRates {
    /// Archive date, `DD.MM.YYYY`.
    pub date: String,

    /// One record per quoted currency.
    #[serde(rename = "exchangeRate", default)]
    pub exchange_rate: Vec<RateRecord>,
}

/// One currency's rates within a day document.
///
/// The national-bank fields are always present; the commercial (cash desk)
/// fields are omitted for currencies the bank did not trade that day.
#[derive(Debug, Clone, Deserialize)]
pub struct RateRecord {
    /// Upper-case currency code, e.g. `"USD"`.
    #[serde(default)]
    pub currency: String,

    #[serde(rename = "saleRateNB")]
    pub sale_rate_nb: f64,

    #[serde(rename = "purchaseRateNB")]
    pub purchase_rate_nb: f64,

    #[serde(rename = "saleRate")]
    pub sale_rate: Option<f64>,

    #[serde(rename = "purchaseRate")]
    pub purchase_rate: Option<f64>,
}

impl DayRates {
    /// Find the record for an upper-case currency code.
    pub fn find(&self, code: &str) -> Option<&RateRecord> {
        self.exchange_rate.iter().find(|record| record.currency == code)
    }
}

impl RateRecord {
    /// Quote built from the national-bank rates.
    pub fn national_quote(&self, date: &str) -> Quote {
        Quote {
            currency: self.currency.clone(),
            buy: self.purchase_rate_nb,
            sale: self.sale_rate_nb,
            date: date.to_string(),
        }
    }

    /// Quote built from the commercial rates, falling back to the
    /// national-bank rates when the commercial fields are absent.
    pub fn preferred_quote(&self, date: &str) -> Quote {
        match (self.purchase_rate, self.sale_rate) {
            (Some(buy), Some(sale)) => Quote {
                currency: self.currency.clone(),
                buy,
                sale,
                date: date.to_string(),
            },
            _ => self.national_quote(date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trimmed-down capture of a real archive document.
    const SAMPLE: &str = r#"{
        "date": "06.08.2026",
        "bank": "PB",
        "baseCurrency": 980,
        "baseCurrencyLit": "UAH",
        "exchangeRate": [
            {
                "baseCurrency": "UAH",
                "currency": "USD",
                "saleRateNB": 36.5686,
                "purchaseRateNB": 36.5686,
                "saleRate": 37.45,
                "purchaseRate": 36.95
            },
            {
                "baseCurrency": "UAH",
                "currency": "AZN",
                "saleRateNB": 21.5135,
                "purchaseRateNB": 21.5135
            }
        ]
    }"#;

    #[test]
    fn parses_an_archive_document() {
        let day: DayRates = serde_json::from_str(SAMPLE).expect("sample parses");
        assert_eq!(day.date, "06.08.2026");
        assert_eq!(day.exchange_rate.len(), 2);

        let usd = day.find("USD").expect("USD present");
        assert_eq!(usd.purchase_rate_nb, 36.5686);
        assert_eq!(usd.purchase_rate, Some(36.95));
    }

    #[test]
    fn find_misses_unlisted_currencies() {
        let day: DayRates = serde_json::from_str(SAMPLE).expect("sample parses");
        assert!(day.find("XAU").is_none());
    }

    #[test]
    fn preferred_quote_uses_commercial_rates_when_present() {
        let day: DayRates = serde_json::from_str(SAMPLE).expect("sample parses");
        let usd = day.find("USD").expect("USD present");
        let quote = usd.preferred_quote(&day.date);
        assert_eq!(quote.buy, 36.95);
        assert_eq!(quote.sale, 37.45);
    }

    #[test]
    fn preferred_quote_falls_back_to_national_rates() {
        let day: DayRates = serde_json::from_str(SAMPLE).expect("sample parses");
        let azn = day.find("AZN").expect("AZN present");
        let quote = azn.preferred_quote(&day.date);
        assert_eq!(quote.buy, 21.5135);
        assert_eq!(quote.sale, 21.5135);
        assert_eq!(quote.to_string(), "AZN - buy: 21.5135, sale: 21.5135. Date: 06.08.2026");
    }
}
