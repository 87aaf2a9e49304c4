use crate::utils::format::format_grams;
use chrono::{DateTime, Local};

/// Troy ounces are what the feed quotes; buyers think in grams.
pub const GRAMS_PER_TROY_OUNCE: f64 = 31.1035;

/// Fixed conversion rate applied to the USD feed price.
pub const INR_PER_USD: f64 = 83.96;

/// 100 minutes between refreshes; the feed moves slowly and is rate
/// limited upstream.
pub const PRICE_REFRESH_INTERVAL_MS: u32 = 6_000_000;

pub const CURRENCY: &str = "INR";

pub const AMOUNT_PROMPT: &str = "Please enter a valid amount and wait for price update.";

/// The per-gram price derived from one feed reading, stamped with when it
/// was fetched. Held in memory only; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub price_per_gram: f64,
    pub fetched_at: DateTime<Local>,
}

impl PriceQuote {
    pub fn from_usd_per_ounce(usd_per_ounce: f64) -> Self {
        Self {
            price_per_gram: price_per_gram(usd_per_ounce),
            fetched_at: Local::now(),
        }
    }

    pub fn fetched_at_label(&self) -> String {
        self.fetched_at.format("%H:%M:%S").to_string()
    }
}

pub fn price_per_gram(usd_per_ounce: f64) -> f64 {
    (usd_per_ounce / GRAMS_PER_TROY_OUNCE) * INR_PER_USD
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConversionOutcome {
    /// Bad amount or no usable quote yet; show the prompt, persist nothing.
    Invalid,
    Converted {
        amount: f64,
        grams: f64,
        message: String,
    },
}

/// Decides what a convert click does. Only a finite positive amount
/// against a finite positive per-gram price converts; everything else is
/// the prompt.
pub fn evaluate_conversion(amount_text: &str, price_per_gram: Option<f64>) -> ConversionOutcome {
    let Some(price) = price_per_gram.filter(|p| p.is_finite() && *p > 0.0) else {
        return ConversionOutcome::Invalid;
    };
    let trimmed = amount_text.trim();
    let Some(amount) = trimmed
        .parse::<f64>()
        .ok()
        .filter(|a| a.is_finite() && *a > 0.0)
    else {
        return ConversionOutcome::Invalid;
    };
    let grams = amount / price;
    ConversionOutcome::Converted {
        amount,
        grams,
        message: format!(
            "You can buy {} grams of gold with ₹{}",
            format_grams(grams),
            trimmed
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_gram_price_divides_then_converts() {
        let per_gram = price_per_gram(31.1035);
        assert!((per_gram - 83.96).abs() < 1e-9);
    }

    #[test]
    fn thousand_rupees_at_five_thousand_buys_a_fifth_of_a_gram() {
        match evaluate_conversion("1000", Some(5000.0)) {
            ConversionOutcome::Converted {
                amount,
                grams,
                message,
            } => {
                assert_eq!(amount, 1000.0);
                assert!((grams - 0.2).abs() < 1e-12);
                assert_eq!(message, "You can buy 0.2000 grams of gold with ₹1000");
            }
            ConversionOutcome::Invalid => panic!("expected a conversion"),
        }
    }

    #[test]
    fn conversion_round_trips_within_display_tolerance() {
        let price = price_per_gram(2327.48);
        match evaluate_conversion("12345.67", Some(price)) {
            ConversionOutcome::Converted { amount, grams, .. } => {
                assert!((grams * price - amount).abs() < 1e-6);
            }
            ConversionOutcome::Invalid => panic!("expected a conversion"),
        }
    }

    #[test]
    fn blank_zero_and_negative_amounts_are_invalid() {
        assert_eq!(evaluate_conversion("", Some(5000.0)), ConversionOutcome::Invalid);
        assert_eq!(evaluate_conversion("   ", Some(5000.0)), ConversionOutcome::Invalid);
        assert_eq!(evaluate_conversion("0", Some(5000.0)), ConversionOutcome::Invalid);
        assert_eq!(evaluate_conversion("-5", Some(5000.0)), ConversionOutcome::Invalid);
        assert_eq!(evaluate_conversion("abc", Some(5000.0)), ConversionOutcome::Invalid);
    }

    #[test]
    fn missing_or_zero_quote_is_invalid() {
        assert_eq!(evaluate_conversion("1000", None), ConversionOutcome::Invalid);
        assert_eq!(evaluate_conversion("1000", Some(0.0)), ConversionOutcome::Invalid);
        assert_eq!(
            evaluate_conversion("1000", Some(f64::NAN)),
            ConversionOutcome::Invalid
        );
    }

    #[test]
    fn quote_stamps_fetch_time() {
        let quote = PriceQuote::from_usd_per_ounce(2000.0);
        assert!(quote.price_per_gram > 0.0);
        assert_eq!(quote.fetched_at_label().len(), 8);
    }
}
