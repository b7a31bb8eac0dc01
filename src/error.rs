use thiserror::Error;

/// All possible errors in the MuleShield service
#[derive(Debug, Error)]
pub enum MuleShieldError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Submission failed: {0}")]
    Submission(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MuleShieldError>;

impl MuleShieldError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for a blank required field
    pub fn missing(field: impl Into<String>) -> Self {
        Self::validation(field, "is required")
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn submission(msg: impl Into<String>) -> Self {
        Self::Submission(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_field() {
        let err = MuleShieldError::validation("amount", "must not be negative");
        assert_eq!(err.to_string(), "Invalid amount: must not be negative");
        assert!(err.is_validation());
    }

    #[test]
    fn test_missing_field() {
        let err = MuleShieldError::missing("sender");
        assert_eq!(err.to_string(), "Invalid sender: is required");
    }

    #[test]
    fn test_config_is_not_validation() {
        assert!(!MuleShieldError::config("bad port").is_validation());
    }
}
