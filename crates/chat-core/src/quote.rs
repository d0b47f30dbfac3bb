//! The currency quote value and its user-visible rendering.

use std::fmt;

/// One currency quote: buy and sale rates for a given date.
///
/// Produced by the rate lookup boundary and rendered straight into a reply
/// line; never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Upper-case currency code, e.g. `"USD"`.
    pub currency: String,

    /// Rate at which the bank buys the currency.
    pub buy: f64,

    /// Rate at which the bank sells the currency.
    pub sale: f64,

    /// Archive date the rates apply to, `DD.MM.YYYY`.
    pub date: String,
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - buy: {}, sale: {}. Date: {}",
            self.currency, self.buy, self.sale, self.date
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_the_reply_line() {
        let quote = Quote {
            currency: "USD".to_string(),
            buy: 36.5686,
            sale: 37.0,
            date: "06.08.2026".to_string(),
        };
        assert_eq!(
            quote.to_string(),
            "USD - buy: 36.5686, sale: 37. Date: 06.08.2026"
        );
    }
}
