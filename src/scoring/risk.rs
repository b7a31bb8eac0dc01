use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{FraudCheckResult, RiskLevel};

const HIGH_THRESHOLD: Decimal = dec!(5000);
const MEDIUM_THRESHOLD: Decimal = dec!(2000);

/// One branch of the rule; all four fields travel together
struct Verdict {
    level: RiskLevel,
    score: f64,
    signals: &'static [&'static str],
    message: &'static str,
}

impl Verdict {
    fn to_result(&self) -> FraudCheckResult {
        FraudCheckResult {
            risk_level: self.level,
            risk_score: self.score,
            signals: self.signals.iter().map(|s| s.to_string()).collect(),
            message: self.message.to_string(),
        }
    }
}

const HIGH: Verdict = Verdict {
    level: RiskLevel::High,
    score: 0.85,
    signals: &[
        "High-value transaction detected",
        "New recipient pattern",
        "Rapid fund movement suspected",
        "Geographic anomaly detected",
    ],
    message: "This transaction shows multiple red flags. Review carefully before proceeding.",
};

const MEDIUM: Verdict = Verdict {
    level: RiskLevel::Medium,
    score: 0.45,
    signals: &[
        "Moderate transaction amount",
        "Limited transaction history with recipient",
    ],
    message: "This transaction requires additional verification.",
};

const LOW: Verdict = Verdict {
    level: RiskLevel::Low,
    score: 0.15,
    signals: &[
        "Normal transaction pattern",
        "Known recipient",
        "Transaction amount within limits",
    ],
    message: "This transaction appears safe to proceed.",
};

/// Risk evaluator - maps a transaction amount to a fixed verdict
pub struct RiskEvaluator;

impl RiskEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Threshold rule, first match wins. Both thresholds are strict.
    pub fn evaluate(&self, amount: Decimal) -> FraudCheckResult {
        self.verdict_for(amount).to_result()
    }

    pub fn level_for(&self, amount: Decimal) -> RiskLevel {
        self.verdict_for(amount).level
    }

    fn verdict_for(&self, amount: Decimal) -> &'static Verdict {
        if amount > HIGH_THRESHOLD {
            &HIGH
        } else if amount > MEDIUM_THRESHOLD {
            &MEDIUM
        } else {
            &LOW
        }
    }
}

impl Default for RiskEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Free-function form of [`RiskEvaluator::evaluate`]
pub fn evaluate(amount: Decimal) -> FraudCheckResult {
    RiskEvaluator::new().evaluate(amount)
}
