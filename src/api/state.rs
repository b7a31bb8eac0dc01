use std::sync::Arc;
use tracing::warn;

use crate::config::Config;
use crate::display::CurrencyFormatter;
use crate::error::{MuleShieldError, Result};
use crate::notify::NotificationCenter;
use crate::service::{MockSubmissionService, Submission, SubmissionOutcome, SubmissionService};
use crate::types::{
    BankRegistration, ContactMessage, NotificationKind, RegistrationReceipt, TransactionCheck,
    TransactionForm,
};

/// Shared by every handler
#[derive(Clone)]
pub struct ApiState {
    pub service: Arc<dyn SubmissionService>,
    pub notifications: Arc<NotificationCenter>,
    pub formatter: Arc<CurrencyFormatter>,
}

impl ApiState {
    pub fn new(
        service: Arc<dyn SubmissionService>,
        notifications: Arc<NotificationCenter>,
        formatter: CurrencyFormatter,
    ) -> Self {
        Self {
            service,
            notifications,
            formatter: Arc::new(formatter),
        }
    }

    /// Mock backend wired from configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(MockSubmissionService::from_config(config)),
            Arc::new(NotificationCenter::from_config(&config.notifications)),
            CurrencyFormatter::from_config(&config.display),
        )
    }

    /// Validate, then run the check; the validated input comes back with the verdict
    pub async fn check_transaction(&self, form: &TransactionForm) -> Result<TransactionCheck> {
        let input = form.validate().map_err(|e| {
            warn!("Rejected transaction check: {}", e);
            e
        })?;

        match self
            .service
            .submit(Submission::CheckTransaction(input.clone()))
            .await?
        {
            SubmissionOutcome::Checked(result) => Ok(TransactionCheck { input, result }),
            other => Err(unexpected(other)),
        }
    }

    pub async fn send_contact(&self, message: ContactMessage) -> Result<()> {
        message.validate().map_err(|e| {
            warn!("Rejected contact message: {}", e);
            e
        })?;

        match self.service.submit(Submission::Contact(message)).await? {
            SubmissionOutcome::MessageSent => {
                self.notifications.notify(NotificationKind::MessageSent).await;
                Ok(())
            }
            other => Err(unexpected(other)),
        }
    }

    pub async fn register_bank(&self, registration: BankRegistration) -> Result<RegistrationReceipt> {
        registration.validate().map_err(|e| {
            warn!("Rejected bank registration: {}", e);
            e
        })?;

        match self.service.submit(Submission::RegisterBank(registration)).await? {
            SubmissionOutcome::BankRegistered(receipt) => {
                self.notifications
                    .notify(NotificationKind::BankRegistered)
                    .await;
                Ok(receipt)
            }
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(outcome: SubmissionOutcome) -> MuleShieldError {
    MuleShieldError::submission(format!("unexpected outcome: {:?}", outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::forms::sample_registration;
    use crate::types::RiskLevel;
    use rust_decimal_macros::dec;

    fn state() -> ApiState {
        ApiState::from_config(&Config::default().without_delays())
    }

    fn contact_message() -> ContactMessage {
        ContactMessage {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john@company.com".into(),
            company: "Your Bank".into(),
            message: "Tell me more".into(),
        }
    }

    #[tokio::test]
    async fn test_check_returns_validated_input() {
        let check = state()
            .check_transaction(&TransactionForm::new(" 7000 ", " A ", "B"))
            .await
            .unwrap();

        assert_eq!(check.input.amount, dec!(7000));
        assert_eq!(check.input.sender, "A");
        assert_eq!(check.result.risk_level, RiskLevel::High);
    }

    #[tokio::test]
    async fn test_subscriber_sees_contact_notification() {
        let state = state();
        let mut rx = state.notifications.subscribe();

        state.send_contact(contact_message()).await.unwrap();

        let event = rx.recv().await.unwrap();
        assert_eq!(event.kind, NotificationKind::MessageSent);
        assert_eq!(event.title, "Message sent!");
    }

    #[tokio::test]
    async fn test_subscriber_sees_registration_notification() {
        let state = state();
        let mut rx = state.notifications.subscribe();

        let receipt = state
            .register_bank(sample_registration("First National Bank"))
            .await
            .unwrap();

        assert_eq!(receipt.bank_name, "First National Bank");
        assert_eq!(rx.recv().await.unwrap().kind, NotificationKind::BankRegistered);
    }

    #[tokio::test]
    async fn test_rejected_submission_raises_no_notification() {
        let state = state();
        let mut message = contact_message();
        message.company = "  ".into();

        let err = state.send_contact(message).await.unwrap_err();
        assert!(err.is_validation());
        assert!(state.notifications.active().await.is_empty());
    }
}
