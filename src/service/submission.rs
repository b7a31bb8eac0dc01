use async_trait::async_trait;
use std::time::Duration;
use tokio::time;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::scoring::RiskEvaluator;
use crate::types::{
    BankRegistration, ContactMessage, FraudCheckResult, RegistrationReceipt, TransactionInput,
};

/// Anything a visitor can send from the site
#[derive(Debug, Clone)]
pub enum Submission {
    CheckTransaction(TransactionInput),
    Contact(ContactMessage),
    RegisterBank(BankRegistration),
}

impl Submission {
    pub fn name(&self) -> &'static str {
        match self {
            Submission::CheckTransaction(_) => "transaction check",
            Submission::Contact(_) => "contact message",
            Submission::RegisterBank(_) => "bank registration",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Checked(FraudCheckResult),
    MessageSent,
    BankRegistered(RegistrationReceipt),
}

/// Backend seam for form submissions. Pages only see this trait, so the mock
/// can be swapped for a real transport.
#[async_trait]
pub trait SubmissionService: Send + Sync {
    async fn submit(&self, submission: Submission) -> Result<SubmissionOutcome>;
}

/// Answers locally after a fixed pause
pub struct MockSubmissionService {
    evaluator: RiskEvaluator,
    check_delay: Duration,
    contact_delay: Duration,
    registration_delay: Duration,
}

impl MockSubmissionService {
    pub fn new(check_delay: Duration, contact_delay: Duration, registration_delay: Duration) -> Self {
        Self {
            evaluator: RiskEvaluator::new(),
            check_delay,
            contact_delay,
            registration_delay,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.check_delay(),
            config.contact_delay(),
            config.registration_delay(),
        )
    }

    /// No artificial latency
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO, Duration::ZERO)
    }

    fn delay_for(&self, submission: &Submission) -> Duration {
        match submission {
            Submission::CheckTransaction(_) => self.check_delay,
            Submission::Contact(_) => self.contact_delay,
            Submission::RegisterBank(_) => self.registration_delay,
        }
    }
}

#[async_trait]
impl SubmissionService for MockSubmissionService {
    async fn submit(&self, submission: Submission) -> Result<SubmissionOutcome> {
        let delay = self.delay_for(&submission);
        debug!("Handling {} after {:?}", submission.name(), delay);
        if !delay.is_zero() {
            time::sleep(delay).await;
        }

        let outcome = match submission {
            Submission::CheckTransaction(input) => {
                let result = self.evaluator.evaluate(input.amount);
                info!(
                    "Checked transaction: amount={} level={} score={:.2}",
                    input.amount, result.risk_level, result.risk_score
                );
                SubmissionOutcome::Checked(result)
            }
            Submission::Contact(message) => {
                info!("Contact message received from {}", message.company);
                SubmissionOutcome::MessageSent
            }
            Submission::RegisterBank(registration) => {
                info!("Bank registered: {}", registration.bank_name);
                SubmissionOutcome::BankRegistered(RegistrationReceipt::for_bank(
                    registration.bank_name,
                ))
            }
        };

        Ok(outcome)
    }
}
