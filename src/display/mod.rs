//! Amount formatting for the checker page.
//!
//! Currency and locale are injected from [`DisplayConfig`] so a single page
//! serves both the rupee and the dollar site.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::{Currency, DisplayConfig};

/// Digit grouping convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// 1,234,567
    Thousands,
    /// 12,34,567
    Indian,
}

impl Grouping {
    pub fn for_locale(locale: &str) -> Self {
        if locale.eq_ignore_ascii_case("en-IN") || locale.eq_ignore_ascii_case("hi-IN") {
            Grouping::Indian
        } else {
            Grouping::Thousands
        }
    }
}

#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    currency: Currency,
    grouping: Grouping,
}

impl CurrencyFormatter {
    pub fn new(currency: Currency, locale: &str) -> Self {
        Self {
            currency,
            grouping: Grouping::for_locale(locale),
        }
    }

    pub fn from_config(config: &DisplayConfig) -> Self {
        Self::new(config.currency, &config.locale)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Whole units only, rounded half away from zero
    pub fn format(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let digits = rounded.abs().trunc().to_string();

        let grouped = match self.grouping {
            Grouping::Thousands => group_thousands(&digits),
            Grouping::Indian => group_indian(&digits),
        };

        if negative {
            format!("-{}{}", self.currency.symbol(), grouped)
        } else {
            format!("{}{}", self.currency.symbol(), grouped)
        }
    }
}

fn group_thousands(digits: &str) -> String {
    insert_separators(digits, 3, 3)
}

// Last three digits, then pairs.
fn group_indian(digits: &str) -> String {
    insert_separators(digits, 3, 2)
}

fn insert_separators(digits: &str, first: usize, rest: usize) -> String {
    if digits.len() <= first {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - first);
    let mut groups = vec![tail];
    let mut remaining = head;
    while remaining.len() > rest {
        let (h, t) = remaining.split_at(remaining.len() - rest);
        groups.push(t);
        remaining = h;
    }
    groups.push(remaining);
    groups.reverse();
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn inr() -> CurrencyFormatter {
        CurrencyFormatter::new(Currency::Inr, "en-IN")
    }

    fn usd() -> CurrencyFormatter {
        CurrencyFormatter::new(Currency::Usd, "en-US")
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(inr().format(dec!(0)), "₹0");
        assert_eq!(inr().format(dec!(999)), "₹999");
        assert_eq!(inr().format(dec!(7000)), "₹7,000");
        assert_eq!(inr().format(dec!(100000)), "₹1,00,000");
        assert_eq!(inr().format(dec!(1234567)), "₹12,34,567");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(usd().format(dec!(1500)), "$1,500");
        assert_eq!(usd().format(dec!(1234567)), "$1,234,567");
        assert_eq!(usd().format(dec!(100)), "$100");
    }

    #[test]
    fn test_rounds_to_whole_units() {
        assert_eq!(usd().format(dec!(1999.5)), "$2,000");
        assert_eq!(usd().format(dec!(1999.49)), "$1,999");
        assert_eq!(inr().format(dec!(0.4)), "₹0");
    }

    #[test]
    fn test_locale_drives_grouping() {
        let formatter = CurrencyFormatter::new(Currency::Inr, "en-US");
        assert_eq!(formatter.format(dec!(1234567)), "₹1,234,567");
    }
}
