use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{MuleShieldError, Result};

/// Coarse risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }

    /// Badge caption, e.g. "HIGH RISK"
    pub fn label(&self) -> String {
        format!("{} RISK", self.as_str())
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = MuleShieldError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "LOW" => Ok(RiskLevel::Low),
            "MEDIUM" => Ok(RiskLevel::Medium),
            "HIGH" => Ok(RiskLevel::High),
            other => Err(MuleShieldError::validation(
                "riskLevel",
                format!("unknown risk level '{}'", other),
            )),
        }
    }
}

/// Raw checker form as entered by the user
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionForm {
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub recipient: String,
}

impl TransactionForm {
    pub fn new(
        amount: impl Into<String>,
        sender: impl Into<String>,
        recipient: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            sender: sender.into(),
            recipient: recipient.into(),
        }
    }

    /// Presence checks plus amount parsing. Runs before the evaluator ever
    /// sees the amount.
    pub fn validate(&self) -> Result<TransactionInput> {
        let amount = parse_amount(&self.amount)?;
        let sender = required("sender", &self.sender)?;
        let recipient = required("recipient", &self.recipient)?;

        Ok(TransactionInput {
            amount,
            sender,
            recipient,
        })
    }
}

/// A validated transaction, held only for the lifetime of one check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionInput {
    pub amount: Decimal,
    pub sender: String,
    pub recipient: String,
}

impl TransactionInput {
    pub fn new(amount: Decimal, sender: impl Into<String>, recipient: impl Into<String>) -> Self {
        Self {
            amount,
            sender: sender.into(),
            recipient: recipient.into(),
        }
    }
}

/// Verdict produced for one transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudCheckResult {
    pub risk_level: RiskLevel,
    pub risk_score: f64,
    pub signals: Vec<String>,
    pub message: String,
}

impl FraudCheckResult {
    /// Score as a whole percentage, e.g. "85"
    pub fn score_display(&self) -> String {
        score_display(self.risk_score)
    }
}

/// A validated transaction together with its verdict
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionCheck {
    pub input: TransactionInput,
    pub result: FraudCheckResult,
}

pub fn score_display(score: f64) -> String {
    format!("{}", (score * 100.0).round() as i64)
}

pub(crate) fn required(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MuleShieldError::missing(field));
    }
    Ok(trimmed.to_string())
}

fn parse_amount(raw: &str) -> Result<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(MuleShieldError::missing("amount"));
    }

    let numeral = Numeral::parse(raw)
        .ok_or_else(|| MuleShieldError::validation("amount", format!("'{}' is not a number", raw)))?;

    if numeral.digits.is_empty() {
        return Ok(Decimal::ZERO);
    }
    if numeral.negative {
        return Err(MuleShieldError::validation("amount", "must not be negative"));
    }

    numeral
        .to_decimal()
        .map_err(|reason| MuleShieldError::validation("amount", format!("'{}' {}", raw, reason)))
}

/// A plain or scientific numeral reduced to `0.<digits> x 10^point`, with
/// leading and trailing zeros stripped from `digits`
#[derive(Debug, PartialEq, Eq)]
struct Numeral {
    negative: bool,
    digits: String,
    point: i64,
}

impl Numeral {
    fn parse(raw: &str) -> Option<Self> {
        let (negative, unsigned) = split_sign(raw);
        let (mantissa, exponent) = match unsigned.find(|c: char| c == 'e' || c == 'E') {
            Some(at) => (&unsigned[..at], parse_exponent(&unsigned[at + 1..])?),
            None => (unsigned, 0),
        };

        let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }
        if !int_part
            .bytes()
            .chain(frac_part.bytes())
            .all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let all = format!("{}{}", int_part, frac_part);
        let leading = all.len() - all.trim_start_matches('0').len();
        let point = (int_part.len() as i64 - leading as i64).saturating_add(exponent);

        Some(Self {
            negative,
            digits: all.trim_matches('0').to_string(),
            point,
        })
    }

    /// Exact conversion; never rounds
    fn to_decimal(&self) -> std::result::Result<Decimal, &'static str> {
        const TOO_LARGE: &str = "is too large";
        const TOO_PRECISE: &str = "has more digits than can be checked exactly";

        // Decimal holds at most 29 integer digits and 28 decimal places
        if self.point > 29 {
            return Err(TOO_LARGE);
        }
        let len = self.digits.len() as i64;
        if len - self.point > 28 {
            return Err(TOO_PRECISE);
        }

        let (integer, fraction) = if self.point <= 0 {
            let zeros = "0".repeat((-self.point) as usize);
            ("0".to_string(), format!("{}{}", zeros, self.digits))
        } else if len <= self.point {
            let zeros = "0".repeat((self.point - len) as usize);
            (format!("{}{}", self.digits, zeros), String::new())
        } else {
            let (integer, fraction) = self.digits.split_at(self.point as usize);
            (integer.to_string(), fraction.to_string())
        };

        let plain = if fraction.is_empty() {
            integer.clone()
        } else {
            format!("{}.{}", integer, fraction)
        };

        Decimal::from_str_exact(&plain).map_err(|_| {
            if Decimal::from_str_exact(&integer).is_err() {
                TOO_LARGE
            } else {
                TOO_PRECISE
            }
        })
    }
}

fn split_sign(raw: &str) -> (bool, &str) {
    match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    }
}

fn parse_exponent(raw: &str) -> Option<i64> {
    let (negative, digits) = split_sign(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    // Only overflow can fail here; anything that large is out of range anyway
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX / 2);
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valid_form() {
        let input = TransactionForm::new("7000", " A ", "B").validate().unwrap();
        assert_eq!(input.amount, dec!(7000));
        assert_eq!(input.sender, "A");
        assert_eq!(input.recipient, "B");
    }

    #[test]
    fn test_decimal_and_scientific_amounts() {
        let input = TransactionForm::new("2000.50", "A", "B").validate().unwrap();
        assert_eq!(input.amount, dec!(2000.50));

        let input = TransactionForm::new("1e3", "A", "B").validate().unwrap();
        assert_eq!(input.amount, dec!(1000));
    }

    #[test]
    fn test_non_numeric_amount_rejected() {
        for raw in ["abc", "NaN", "inf", "12abc"] {
            let err = TransactionForm::new(raw, "A", "B").validate().unwrap_err();
            assert!(err.is_validation(), "{} should be rejected", raw);
        }
    }

    #[test]
    fn test_negative_amount_rejected() {
        for raw in ["-1", "-0.5", "-1e40"] {
            let err = TransactionForm::new(raw, "A", "B").validate().unwrap_err();
            assert!(err.to_string().contains("negative"), "{}", raw);
        }
    }

    #[test]
    fn test_amount_past_threshold_is_not_rounded_down() {
        for raw in ["5000.00000000000000000000000001", "2000.000000000000000000000000001"] {
            let err = TransactionForm::new(raw, "A", "B").validate().unwrap_err();
            assert!(err.is_validation());
            assert!(err.to_string().contains("more digits than can be checked exactly"));
        }

        let input = TransactionForm::new("5000.0000000000000000000001", "A", "B")
            .validate()
            .unwrap();
        assert!(input.amount > dec!(5000));
    }

    #[test]
    fn test_amount_beyond_decimal_range_is_too_large() {
        for raw in ["100000000000000000000000000000", "1e30", "79228162514264337593543950336", "1e99999999999999999999"] {
            let err = TransactionForm::new(raw, "A", "B").validate().unwrap_err();
            assert!(err.to_string().contains("is too large"), "{}: {}", raw, err);
            assert!(!err.to_string().contains("not a number"));
        }

        let input = TransactionForm::new("79228162514264337593543950335", "A", "B")
            .validate()
            .unwrap();
        assert_eq!(input.amount, Decimal::MAX);
    }

    #[test]
    fn test_numeral_shapes() {
        for (raw, expected) in [
            ("0.05", dec!(0.05)),
            (".5", dec!(0.5)),
            ("5.", dec!(5)),
            ("+12", dec!(12)),
            ("1.5E3", dec!(1500)),
            ("25e-1", dec!(2.5)),
            ("007000", dec!(7000)),
        ] {
            let input = TransactionForm::new(raw, "A", "B").validate().unwrap();
            assert_eq!(input.amount, expected, "{}", raw);
        }

        for raw in [".", "-", "1e", "e5", "1.2.3", "1e2.5", "--1"] {
            let err = TransactionForm::new(raw, "A", "B").validate().unwrap_err();
            assert!(err.to_string().contains("not a number"), "{}", raw);
        }
    }

    #[test]
    fn test_negative_zero_allowed() {
        let input = TransactionForm::new("-0", "A", "B").validate().unwrap();
        assert!(input.amount.is_zero());
    }

    #[test]
    fn test_missing_fields() {
        let err = TransactionForm::new("", "A", "B").validate().unwrap_err();
        assert!(err.to_string().contains("amount"));

        let err = TransactionForm::new("10", "   ", "B").validate().unwrap_err();
        assert!(err.to_string().contains("sender"));

        let err = TransactionForm::new("10", "A", "").validate().unwrap_err();
        assert!(err.to_string().contains("recipient"));
    }

    #[test]
    fn test_risk_level_parsing() {
        assert_eq!("HIGH".parse::<RiskLevel>().unwrap(), RiskLevel::High);
        assert!("CRITICAL".parse::<RiskLevel>().is_err());
        assert!("low".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn test_risk_level_serde() {
        let json = serde_json::to_string(&RiskLevel::Medium).unwrap();
        assert_eq!(json, "\"MEDIUM\"");
        assert!(serde_json::from_str::<RiskLevel>("\"EXTREME\"").is_err());
    }

    #[test]
    fn test_score_display() {
        assert_eq!(score_display(0.85), "85");
        assert_eq!(score_display(0.45), "45");
        assert_eq!(score_display(0.15), "15");
    }
}
