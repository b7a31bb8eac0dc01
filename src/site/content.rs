//! Copy shown on the marketing pages.

use serde::Serialize;

pub const PRODUCT_NAME: &str = "MuleShield";

pub const HERO_BADGE: &str = "Real-time behavioral fraud detection";
pub const HERO_HEADLINE: &str = "Real-Time Money Mule";
pub const HERO_HEADLINE_ACCENT: &str = "Detection for Banks";
pub const HERO_TAGLINE: &str = "Detect and prevent money mule fraud in real-time using advanced behavioral analysis and network pattern recognition.";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: [Stat; 3] = [
    Stat { value: "<50ms", label: "Response Time" },
    Stat { value: "99.2%", label: "Detection Rate" },
    Stat { value: "0.1%", label: "False Positives" },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const HOW_IT_WORKS_SUBTITLE: &str = "End-to-end protection in three seamless steps";

pub const HOW_IT_WORKS: [Step; 3] = [
    Step {
        number: "01",
        title: "Ingest Data",
        description: "We ingest transaction logs, device fingerprints, and behavioral biometrics in real-time.",
    },
    Step {
        number: "02",
        title: "AI Analysis",
        description: "Our neural network maps relationships to identify mule accounts and anomalies instantly.",
    },
    Step {
        number: "03",
        title: "Block Fraud",
        description: "Automated signals trigger blocks or 2FA challenges before funds leave the bank.",
    },
];

pub const SALES_EMAIL: &str = "sales@muleshield.ai";
pub const PARTNERSHIPS_EMAIL: &str = "partnerships@muleshield.ai";
pub const SALES_PHONE: &str = "+1 (888) 555-0123";
pub const OFFICE_LINES: [&str; 2] = ["NOIDA, SECTOR 128", "INDIA"];
pub const ENTERPRISE_SUPPORT: &str = "For existing enterprise customers, please contact your dedicated account manager or reach out to our 24/7 support line.";

/// One input on a server-rendered form
#[derive(Debug, Clone, Copy)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input_type: &'static str,
    pub required: bool,
    pub multiline: bool,
}

const fn field(name: &'static str, label: &'static str, placeholder: &'static str) -> FormField {
    FormField {
        name,
        label,
        placeholder,
        input_type: "text",
        required: true,
        multiline: false,
    }
}

const fn email(name: &'static str, label: &'static str, placeholder: &'static str) -> FormField {
    FormField {
        input_type: "email",
        ..field(name, label, placeholder)
    }
}

pub const CONTACT_FIELDS: [FormField; 5] = [
    field("first_name", "First Name", "John"),
    field("last_name", "Last Name", "Doe"),
    email("email", "Work Email", "john@company.com"),
    field("company", "Company", "Your Bank Name"),
    FormField {
        multiline: true,
        ..field("message", "Message", "Tell us about your fraud detection needs...")
    },
];

pub struct FieldGroup {
    pub title: &'static str,
    pub fields: &'static [FormField],
}

pub const REGISTRATION_GROUPS: [FieldGroup; 3] = [
    FieldGroup {
        title: "Bank Information",
        fields: &[
            field("bank_name", "Bank Name *", "e.g., First National Bank"),
            field("bank_code", "Bank Code / SWIFT Code *", "e.g., FNBAUS33"),
            field("routing_number", "Routing Number *", "e.g., 021000021"),
            field("bank_address", "Bank Address *", "Street address"),
            field("city", "City *", "City"),
            field("state", "State/Province *", "State"),
            field("zip_code", "ZIP / Postal Code *", "ZIP code"),
            field("country", "Country *", "Country"),
        ],
    },
    FieldGroup {
        title: "Contact Person",
        fields: &[
            field("contact_first_name", "First Name *", "John"),
            field("contact_last_name", "Last Name *", "Doe"),
            email("contact_email", "Work Email *", "john.doe@bank.com"),
            FormField {
                input_type: "tel",
                ..field("contact_phone", "Phone Number *", "+1 (555) 123-4567")
            },
            field("position", "Job Title *", "e.g., Compliance Officer"),
        ],
    },
    FieldGroup {
        title: "Bank Details",
        fields: &[
            field(
                "transaction_volume",
                "Average Monthly Transaction Volume *",
                "e.g., 50000",
            ),
            field("primary_currency", "Primary Currency *", "e.g., INR"),
            field(
                "registry_number",
                "Business Registration Number *",
                "e.g., Tax ID / Registration Number",
            ),
            FormField {
                required: false,
                multiline: true,
                ..field(
                    "additional_info",
                    "Additional Information",
                    "Any additional details about your institution...",
                )
            },
        ],
    },
];

// Integration docs. Display only; nothing here is ever called.

pub const API_ENDPOINT: &str = "https://api.muleshield.ai/v1/transactions/validate";
pub const API_METHOD: &str = "POST";
pub const API_HEADERS: [(&str, &str); 2] = [
    ("Authorization", "Bearer YOUR_API_KEY"),
    ("Content-Type", "application/json"),
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SchemaField {
    pub name: &'static str,
    pub required: bool,
    pub description: &'static str,
}

pub const REQUEST_SCHEMA: [SchemaField; 5] = [
    SchemaField {
        name: "transaction_id",
        required: true,
        description: "Unique transaction identifier",
    },
    SchemaField {
        name: "amount",
        required: true,
        description: "Transaction amount in decimal format",
    },
    SchemaField {
        name: "sender",
        required: true,
        description: "Sender name or identifier",
    },
    SchemaField {
        name: "recipient",
        required: true,
        description: "Recipient name or identifier",
    },
    SchemaField {
        name: "timestamp",
        required: true,
        description: "ISO 8601 formatted timestamp",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snippet {
    pub language: &'static str,
    pub title: &'static str,
    pub code: &'static str,
}

const CURL_SNIPPET: &str = r#"curl -X POST https://api.muleshield.ai/v1/transactions/validate \
  -H "Authorization: Bearer YOUR_API_KEY" \
  -H "Content-Type: application/json" \
  -d '{
    "transaction_id": "txn_123456",
    "amount": 5000,
    "sender": "John Doe",
    "recipient": "Jane Smith",
    "timestamp": "2024-01-16T10:30:00Z"
  }'"#;

const JAVASCRIPT_SNIPPET: &str = r#"const validateTransaction = async (transaction) => {
  const response = await fetch('https://api.muleshield.ai/v1/transactions/validate', {
    method: 'POST',
    headers: {
      'Authorization': 'Bearer YOUR_API_KEY',
      'Content-Type': 'application/json'
    },
    body: JSON.stringify(transaction)
  });

  return await response.json();
};

// Usage
const result = await validateTransaction({
  transaction_id: 'txn_123456',
  amount: 5000,
  sender: 'John Doe',
  recipient: 'Jane Smith',
  timestamp: new Date().toISOString()
});"#;

const PYTHON_SNIPPET: &str = r#"import requests

api_key = "YOUR_API_KEY"
endpoint = "https://api.muleshield.ai/v1/transactions/validate"

transaction = {
    "transaction_id": "txn_123456",
    "amount": 5000,
    "sender": "John Doe",
    "recipient": "Jane Smith",
    "timestamp": "2024-01-16T10:30:00Z"
}

headers = {
    "Authorization": f"Bearer {api_key}",
    "Content-Type": "application/json"
}

response = requests.post(endpoint, json=transaction, headers=headers)
result = response.json()
print(result)"#;

pub const SNIPPETS: [Snippet; 3] = [
    Snippet {
        language: "curl",
        title: "cURL",
        code: CURL_SNIPPET,
    },
    Snippet {
        language: "javascript",
        title: "JavaScript",
        code: JAVASCRIPT_SNIPPET,
    },
    Snippet {
        language: "python",
        title: "Python",
        code: PYTHON_SNIPPET,
    },
];

/// Copy targets: the three snippets plus the bare endpoint
pub fn copyable(language: &str) -> Option<&'static str> {
    if language.eq_ignore_ascii_case("endpoint") {
        return Some(API_ENDPOINT);
    }
    SNIPPETS
        .iter()
        .find(|s| s.language.eq_ignore_ascii_case(language))
        .map(|s| s.code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippets_target_endpoint() {
        for snippet in SNIPPETS {
            assert!(snippet.code.contains(API_ENDPOINT), "{}", snippet.title);
        }
    }

    #[test]
    fn test_snippets_carry_every_schema_field() {
        for snippet in SNIPPETS {
            for field in REQUEST_SCHEMA {
                assert!(
                    snippet.code.contains(field.name),
                    "{} missing {}",
                    snippet.title,
                    field.name
                );
            }
        }
    }

    #[test]
    fn test_copyable_lookup() {
        assert_eq!(copyable("endpoint"), Some(API_ENDPOINT));
        assert!(copyable("Python").unwrap().starts_with("import requests"));
        assert!(copyable("cobol").is_none());
    }

    #[test]
    fn test_only_additional_info_is_optional() {
        let optional: Vec<_> = REGISTRATION_GROUPS
            .iter()
            .flat_map(|g| g.fields.iter())
            .filter(|f| !f.required)
            .map(|f| f.name)
            .collect();
        assert_eq!(optional, vec!["additional_info"]);
    }
}
