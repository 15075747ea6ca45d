use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::Currency;

/// A single fiat price for one unit of an asset.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Quote {
    /// When the quote was taken
    pub timestamp: DateTime<Utc>,

    /// Asset being priced (e.g. "BTC")
    pub base: Currency,

    /// Currency the price is expressed in (e.g. "USD")
    pub quote: Currency,

    /// Price of one unit of `base` in `quote`
    pub price: Decimal,

    /// Source of the quote (EXCHANGE_RATES, ...)
    pub source: String,
}

impl Quote {
    pub fn new(
        timestamp: DateTime<Utc>,
        base: impl Into<Currency>,
        quote: impl Into<Currency>,
        price: Decimal,
        source: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            base: base.into(),
            quote: quote.into(),
            price,
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_new() {
        let quote = Quote::new(
            Utc::now(),
            "BTC",
            "USD",
            dec!(64123.45),
            "EXCHANGE_RATES",
        );
        assert_eq!(quote.price, dec!(64123.45));
        assert_eq!(quote.base, "BTC");
        assert_eq!(quote.quote, "USD");
        assert_eq!(quote.source, "EXCHANGE_RATES");
    }
}
