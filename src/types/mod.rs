pub mod forms;
pub mod notification;
pub mod transaction;

// Re-export commonly used types
pub use forms::{BankRegistration, ContactMessage, RegistrationReceipt};
pub use notification::{Notification, NotificationKind};
pub use transaction::{
    score_display, FraudCheckResult, RiskLevel, TransactionCheck, TransactionForm,
    TransactionInput,
};
