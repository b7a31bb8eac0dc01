pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod notify;
pub mod scoring;
pub mod service;
pub mod site;
pub mod types;

// Re-exports
pub use api::{create_router, ApiState};
pub use config::{Config, Currency, Profile};
pub use display::CurrencyFormatter;
pub use error::{MuleShieldError, Result};
pub use notify::NotificationCenter;
pub use scoring::{evaluate, presentation_for, Presentation, RiskEvaluator};
pub use service::{MockSubmissionService, SiteService, Submission, SubmissionOutcome, SubmissionService};
pub use types::{FraudCheckResult, RiskLevel, TransactionCheck, TransactionForm, TransactionInput};
