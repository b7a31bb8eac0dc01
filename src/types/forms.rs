use serde::{Deserialize, Serialize};

use super::transaction::required;
use crate::error::Result;

/// "Send us a message" form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub message: String,
}

impl ContactMessage {
    /// Every field is required; only presence is checked
    pub fn validate(&self) -> Result<()> {
        required("first_name", &self.first_name)?;
        required("last_name", &self.last_name)?;
        required("email", &self.email)?;
        required("company", &self.company)?;
        required("message", &self.message)?;
        Ok(())
    }

    /// Submitted value of a form field, by its `name` attribute
    pub fn value_of(&self, field: &str) -> Option<&str> {
        let value = match field {
            "first_name" => &self.first_name,
            "last_name" => &self.last_name,
            "email" => &self.email,
            "company" => &self.company,
            "message" => &self.message,
            _ => return None,
        };
        Some(value)
    }
}

/// Bank onboarding form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankRegistration {
    // Bank information
    #[serde(default)]
    pub bank_name: String,
    #[serde(default)]
    pub bank_code: String,
    #[serde(default)]
    pub routing_number: String,
    #[serde(default)]
    pub bank_address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub country: String,

    // Contact person
    #[serde(default)]
    pub contact_first_name: String,
    #[serde(default)]
    pub contact_last_name: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    pub position: String,

    // Bank details
    #[serde(default)]
    pub transaction_volume: String,
    #[serde(default)]
    pub primary_currency: String,
    #[serde(default)]
    pub registry_number: String,
    #[serde(default)]
    pub additional_info: Option<String>,
}

impl BankRegistration {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("bank_name", &self.bank_name),
            ("bank_code", &self.bank_code),
            ("routing_number", &self.routing_number),
            ("bank_address", &self.bank_address),
            ("city", &self.city),
            ("state", &self.state),
            ("zip_code", &self.zip_code),
            ("country", &self.country),
            ("contact_first_name", &self.contact_first_name),
            ("contact_last_name", &self.contact_last_name),
            ("contact_email", &self.contact_email),
            ("contact_phone", &self.contact_phone),
            ("position", &self.position),
            ("transaction_volume", &self.transaction_volume),
            ("primary_currency", &self.primary_currency),
            ("registry_number", &self.registry_number),
        ];

        for (name, value) in fields {
            required(name, value)?;
        }

        Ok(())
    }

    pub fn value_of(&self, field: &str) -> Option<&str> {
        let value = match field {
            "bank_name" => &self.bank_name,
            "bank_code" => &self.bank_code,
            "routing_number" => &self.routing_number,
            "bank_address" => &self.bank_address,
            "city" => &self.city,
            "state" => &self.state,
            "zip_code" => &self.zip_code,
            "country" => &self.country,
            "contact_first_name" => &self.contact_first_name,
            "contact_last_name" => &self.contact_last_name,
            "contact_email" => &self.contact_email,
            "contact_phone" => &self.contact_phone,
            "position" => &self.position,
            "transaction_volume" => &self.transaction_volume,
            "primary_currency" => &self.primary_currency,
            "registry_number" => &self.registry_number,
            "additional_info" => return self.additional_info.as_deref(),
            _ => return None,
        };
        Some(value)
    }
}

/// Confirmation shown once a bank is registered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationReceipt {
    pub bank_name: String,
    pub message: String,
}

impl RegistrationReceipt {
    /// The bank name is echoed verbatim, untrimmed
    pub fn for_bank(bank_name: impl Into<String>) -> Self {
        let bank_name = bank_name.into();
        let message = format!(
            "{} has been successfully registered. Your API credentials are ready for use.",
            bank_name
        );
        Self { bank_name, message }
    }
}

#[cfg(test)]
pub(crate) fn sample_registration(bank_name: &str) -> BankRegistration {
    BankRegistration {
        bank_name: bank_name.to_string(),
        bank_code: "FNBAUS33".to_string(),
        routing_number: "021000021".to_string(),
        bank_address: "1 Main Street".to_string(),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        zip_code: "62701".to_string(),
        country: "USA".to_string(),
        contact_first_name: "Jane".to_string(),
        contact_last_name: "Smith".to_string(),
        contact_email: "jane@fnb.example".to_string(),
        contact_phone: "+1 555 0100".to_string(),
        position: "Head of Fraud".to_string(),
        transaction_volume: "1000000".to_string(),
        primary_currency: "USD".to_string(),
        registry_number: "REG-42".to_string(),
        additional_info: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_registration_is_valid() {
        assert!(sample_registration("First National Bank").validate().is_ok());
    }

    #[test]
    fn test_registration_missing_field() {
        let mut registration = sample_registration("First National Bank");
        registration.routing_number = " ".to_string();
        let err = registration.validate().unwrap_err();
        assert!(err.to_string().contains("routing_number"));
    }

    #[test]
    fn test_additional_info_is_optional() {
        let mut registration = sample_registration("First National Bank");
        registration.additional_info = Some(String::new());
        assert!(registration.validate().is_ok());
    }

    #[test]
    fn test_value_of_covers_every_registration_field() {
        let registration = sample_registration("First National Bank");
        for group in &crate::site::content::REGISTRATION_GROUPS {
            for field in group.fields {
                if field.name == "additional_info" {
                    assert_eq!(registration.value_of(field.name), None);
                } else {
                    assert!(registration.value_of(field.name).is_some(), "{}", field.name);
                }
            }
        }
        assert_eq!(registration.value_of("bank_name"), Some("First National Bank"));
        assert_eq!(registration.value_of("swift"), None);
    }

    #[test]
    fn test_receipt_echoes_bank_name() {
        let receipt = RegistrationReceipt::for_bank("Bank of <Tests> & Co");
        assert_eq!(receipt.bank_name, "Bank of <Tests> & Co");
        assert_eq!(
            receipt.message,
            "Bank of <Tests> & Co has been successfully registered. Your API credentials are ready for use."
        );
    }

    #[test]
    fn test_contact_message_validation() {
        let mut msg = ContactMessage {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john@company.com".into(),
            company: "Your Bank".into(),
            message: "Tell me more".into(),
        };
        assert!(msg.validate().is_ok());

        msg.email.clear();
        assert!(msg.validate().is_err());
    }
}
