use std::fmt::Write;

use super::content::{
    self, FormField, API_ENDPOINT, API_HEADERS, API_METHOD, ENTERPRISE_SUPPORT, HERO_BADGE,
    HERO_HEADLINE, HERO_HEADLINE_ACCENT, HERO_STATS, HERO_TAGLINE, HOW_IT_WORKS,
    HOW_IT_WORKS_SUBTITLE, OFFICE_LINES,
    PARTNERSHIPS_EMAIL, REGISTRATION_GROUPS, REQUEST_SCHEMA, SALES_EMAIL, SALES_PHONE, SNIPPETS,
};
use super::html::{error_banner, escape, form_field, layout};
use crate::display::CurrencyFormatter;
use crate::scoring::presentation_for;
use crate::types::{
    BankRegistration, ContactMessage, RegistrationReceipt, TransactionCheck, TransactionForm,
};

const CHECKER_FIELDS: [FormField; 3] = [
    FormField {
        name: "amount",
        label: "Transaction Amount",
        placeholder: "Enter amount (e.g., 1000)",
        input_type: "number",
        required: true,
        multiline: false,
    },
    FormField {
        name: "sender",
        label: "Sender Address",
        placeholder: "",
        input_type: "text",
        required: true,
        multiline: false,
    },
    FormField {
        name: "recipient",
        label: "Recipient Address",
        placeholder: "",
        input_type: "text",
        required: true,
        multiline: false,
    },
];

pub fn landing_page() -> String {
    let mut stats = String::new();
    for stat in HERO_STATS {
        let _ = write!(
            stats,
            r#"<div class="stat"><span class="stat-value">{}</span><span class="stat-label">{}</span></div>"#,
            escape(stat.value),
            stat.label
        );
    }

    let mut steps = String::new();
    for step in HOW_IT_WORKS {
        let _ = write!(
            steps,
            r#"<article class="step"><span class="step-number">{}</span><h3>{}</h3><p>{}</p></article>"#,
            step.number, step.title, step.description
        );
    }

    let body = format!(
        r##"<section class="hero">
<div class="badge">{badge}</div>
<h1>{headline} <span class="accent">{accent}</span></h1>
<p class="tagline">{tagline}</p>
<div class="actions"><a class="button" href="/checker">View Live Demo</a><a class="button outline" href="#how-it-works">How It Works</a></div>
<div class="stats">{stats}</div>
</section>
<section id="how-it-works" class="how-it-works">
<h2>How It Works</h2>
<p class="subtitle">{subtitle}</p>
<div class="steps">{steps}</div>
</section>"##,
        badge = HERO_BADGE,
        headline = HERO_HEADLINE,
        accent = HERO_HEADLINE_ACCENT,
        tagline = HERO_TAGLINE,
        subtitle = HOW_IT_WORKS_SUBTITLE,
        stats = stats,
        steps = steps,
    );

    layout("Real-Time Money Mule Detection", &body)
}

/// State of the checker page for one render
pub struct CheckerView<'a> {
    pub form: &'a TransactionForm,
    pub result: Option<&'a TransactionCheck>,
    pub error: Option<&'a str>,
    pub formatter: &'a CurrencyFormatter,
}

pub fn checker_page(view: &CheckerView<'_>) -> String {
    let mut fields = String::new();
    for field in &CHECKER_FIELDS {
        let value = match field.name {
            "amount" => &view.form.amount,
            "sender" => &view.form.sender,
            _ => &view.form.recipient,
        };
        fields.push_str(&form_field(field, value));
    }

    let error = view.error.map(error_banner).unwrap_or_default();

    let results = match view.result {
        Some(check) => result_panel(check, view.formatter),
        None => r#"<p class="placeholder">Enter details to analyze transaction</p>"#.to_string(),
    };
    let description = if view.result.is_some() {
        "Fraud detection results"
    } else {
        "Submit to see results"
    };

    let body = format!(
        r#"<header class="page-header">
<h1>Transaction Fraud Checker</h1>
<p>Analyze transactions in real-time for potential fraud indicators</p>
</header>
<div class="grid">
<section class="card">
<h2>Transaction Details</h2>
<p class="card-description">Enter the transaction information to check for fraud ({currency})</p>
{error}
<form method="post" action="/checker">
{fields}
<button type="submit">Check for Fraud</button>
</form>
</section>
<section class="card">
<h2>Risk Analysis</h2>
<p class="card-description">{description}</p>
{results}
</section>
</div>"#,
        currency = view.formatter.currency().code(),
        error = error,
        fields = fields,
        description = description,
        results = results,
    );

    layout("Transaction Checker", &body)
}

fn result_panel(check: &TransactionCheck, formatter: &CurrencyFormatter) -> String {
    let TransactionCheck { input, result } = check;
    let presentation = presentation_for(result.risk_level);

    let mut signals = String::new();
    for signal in &result.signals {
        let _ = write!(signals, r#"<li class="signal">{}</li>"#, escape(signal));
    }

    format!(
        r#"<div class="result">
<span class="risk-badge {badge} {color}" data-icon="{icon}">{glyph} {label}</span>
<div class="risk-score {color}"><span class="score">{score}</span><span class="score-suffix">/100</span></div>
<p class="risk-message">{message}</p>
<ul class="signals">{signals}</ul>
<dl class="summary">
<dt>Amount:</dt><dd class="amount">{amount}</dd>
<dt>Sender:</dt><dd>{sender}</dd>
<dt>Recipient:</dt><dd>{recipient}</dd>
</dl>
</div>"#,
        badge = presentation.badge_token,
        color = presentation.color_token,
        icon = presentation.icon.as_str(),
        glyph = presentation.icon.glyph(),
        label = result.risk_level.label(),
        score = result.score_display(),
        message = escape(&result.message),
        signals = signals,
        amount = formatter.format(input.amount),
        sender = escape(&input.sender),
        recipient = escape(&input.recipient),
    )
}

/// Which tab of the contact page is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactTab {
    Contact,
    Register,
}

/// State of the contact page for one render. `contact` and `registration`
/// carry a rejected submission back into its form.
pub struct ContactView<'a> {
    pub tab: ContactTab,
    pub notice: Option<&'a str>,
    pub error: Option<&'a str>,
    pub receipt: Option<&'a RegistrationReceipt>,
    pub contact: Option<&'a ContactMessage>,
    pub registration: Option<&'a BankRegistration>,
}

impl Default for ContactView<'_> {
    fn default() -> Self {
        Self {
            tab: ContactTab::Contact,
            notice: None,
            error: None,
            receipt: None,
            contact: None,
            registration: None,
        }
    }
}

pub fn contact_page(view: &ContactView<'_>) -> String {
    let (contact_class, register_class) = match view.tab {
        ContactTab::Contact => ("tab active", "tab"),
        ContactTab::Register => ("tab", "tab active"),
    };

    let notice = view
        .notice
        .map(|n| format!(r#"<p class="toast" role="status">{}</p>"#, escape(n)))
        .unwrap_or_default();
    let error = view.error.map(error_banner).unwrap_or_default();

    let (contact_error, register_error) = match view.tab {
        ContactTab::Contact => (error, String::new()),
        ContactTab::Register => (String::new(), error),
    };

    let registration = match view.receipt {
        Some(receipt) => registered_panel(receipt),
        None => registration_form(view.registration, &register_error),
    };

    let body = format!(
        r##"<header class="page-header">
<h1>Get in Touch</h1>
<p>Ready to protect your institution from mule fraud? Let's talk.</p>
</header>
{notice}
<nav class="tabs"><a class="{contact_class}" href="/contact#contact">Contact Us</a><a class="{register_class}" href="/contact#register">Bank Registration</a></nav>
<section id="contact" class="tab-panel">
{contact}
</section>
<section id="register" class="tab-panel">
{registration}
</section>"##,
        notice = notice,
        contact_class = contact_class,
        register_class = register_class,
        contact = contact_panel(view.contact, &contact_error),
        registration = registration,
    );

    layout("Contact", &body)
}

fn contact_panel(submitted: Option<&ContactMessage>, error: &str) -> String {
    let mut fields = String::new();
    for field in &content::CONTACT_FIELDS {
        let value = submitted.and_then(|m| m.value_of(field.name)).unwrap_or("");
        fields.push_str(&form_field(field, value));
    }

    format!(
        r#"<div class="card">
<h2>Send us a message</h2>
{error}
<form method="post" action="/contact">
{fields}
<button type="submit">Send Message</button>
</form>
</div>
<div class="card contact-info">
<h2>Contact Information</h2>
<p><strong>Email</strong> <a href="mailto:{email}">{email}</a></p>
<p><strong>Phone</strong> {phone}</p>
<p><strong>Office</strong> {office}</p>
<h3>Enterprise Support</h3>
<p>{support}</p>
</div>"#,
        error = error,
        fields = fields,
        email = SALES_EMAIL,
        phone = escape(SALES_PHONE),
        office = OFFICE_LINES.join("<br>"),
        support = ENTERPRISE_SUPPORT,
    )
}

fn registration_form(submitted: Option<&BankRegistration>, error: &str) -> String {
    let mut groups = String::new();
    for group in &REGISTRATION_GROUPS {
        let _ = write!(groups, r#"<fieldset><legend>{}</legend>"#, group.title);
        for field in group.fields {
            let value = submitted.and_then(|r| r.value_of(field.name)).unwrap_or("");
            groups.push_str(&form_field(field, value));
        }
        groups.push_str("</fieldset>");
    }

    format!(
        r#"<div class="card">
<h2>Bank Registration</h2>
<p>Register your bank to get started with MuleShield's fraud detection platform</p>
{error}
<form method="post" action="/contact/register">
{groups}
<button type="submit">Register Bank</button>
</form>
</div>
<div class="card">
<h3>Documentation</h3>
<p>Ensure you have your bank's registration documents and business details ready before submitting.</p>
<h3>Questions?</h3>
<p>Contact our partnership team at <a href="mailto:{partners}">{partners}</a></p>
</div>"#,
        error = error,
        groups = groups,
        partners = PARTNERSHIPS_EMAIL,
    )
}

fn registered_panel(receipt: &RegistrationReceipt) -> String {
    let mut headers = String::new();
    for (name, value) in API_HEADERS {
        let _ = write!(headers, r#"<div><span class="header-name">{}</span>: {}</div>"#, name, value);
    }

    let mut schema = String::new();
    for field in REQUEST_SCHEMA {
        let _ = write!(
            schema,
            r#"<div class="schema-field"><code>{}</code>{}<p>{}</p></div>"#,
            field.name,
            if field.required { " <span>(required)</span>" } else { "" },
            field.description
        );
    }

    let mut snippets = String::new();
    for snippet in SNIPPETS {
        let _ = write!(
            snippets,
            r#"<div class="snippet"><h4>{title}</h4>{copy}<pre><code>{code}</code></pre></div>"#,
            title = snippet.title,
            copy = copy_button(snippet.language, &receipt.bank_name),
            code = escape(snippet.code),
        );
    }

    format!(
        r#"<div class="card success registered">
<h2>Bank Registration Successful!</h2>
<p class="receipt">{message}</p>
</div>
<div class="card">
<h3>API Integration</h3>
<h4>API Endpoint</h4><code class="endpoint">{endpoint}</code>{copy_endpoint}
<h4>API Key</h4>
<p>Your unique API key has been sent to your registered email address.</p>
<p>Keep your API key secure and never share it publicly.</p>
<h4>Request Method</h4><span class="method">{method}</span>
<h4>Required Headers</h4>{headers}
</div>
<div class="card">
<h3>Request Body Schema</h3>
{schema}
</div>
<div class="examples">
<h3>Implementation Examples</h3>
{snippets}
</div>
<a class="button outline" href="/contact#register">Register Another Bank</a>"#,
        message = escape(&receipt.message),
        endpoint = API_ENDPOINT,
        copy_endpoint = copy_button("endpoint", &receipt.bank_name),
        method = API_METHOD,
        headers = headers,
        schema = schema,
        snippets = snippets,
    )
}

/// Posts back to the contact page; the bank name keeps the registered view
/// on screen after the copy.
fn copy_button(target: &str, bank_name: &str) -> String {
    format!(
        r#"<form class="copy" method="post" action="/contact/snippets/{target}/copy"><input type="hidden" name="bank_name" value="{bank}"><button type="submit">Copy</button></form>"#,
        target = target,
        bank = escape(bank_name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Currency;
    use crate::scoring::evaluate;
    use crate::types::forms::sample_registration;
    use crate::types::TransactionInput;
    use rust_decimal_macros::dec;

    fn inr() -> CurrencyFormatter {
        CurrencyFormatter::new(Currency::Inr, "en-IN")
    }

    #[test]
    fn test_landing_page_content() {
        let page = landing_page();
        assert!(page.contains("Real-Time Money Mule"));
        assert!(page.contains("99.2%"));
        assert!(page.contains("&lt;50ms"));
        assert!(page.contains("Block Fraud"));
        assert!(page.contains("End-to-end protection in three seamless steps"));
    }

    #[test]
    fn test_checker_high_risk_result() {
        let form = TransactionForm::new("7000", "A", "B");
        let check = TransactionCheck {
            input: TransactionInput::new(dec!(7000), "A", "B"),
            result: evaluate(dec!(7000)),
        };
        let formatter = inr();
        let page = checker_page(&CheckerView {
            form: &form,
            result: Some(&check),
            error: None,
            formatter: &formatter,
        });

        assert!(page.contains("HIGH RISK"));
        assert!(page.contains(r#"<span class="score">85</span>"#));
        assert_eq!(page.matches(r#"class="signal""#).count(), 4);
        assert!(page.contains("₹7,000"));
        assert!(page.contains("text-risk-high"));
    }

    #[test]
    fn test_checker_empty_state() {
        let form = TransactionForm::default();
        let formatter = inr();
        let page = checker_page(&CheckerView {
            form: &form,
            result: None,
            error: Some("Invalid amount: 'abc' is not a number"),
            formatter: &formatter,
        });

        assert!(page.contains("Submit to see results"));
        assert!(page.contains("&#39;abc&#39; is not a number"));
        assert_eq!(page.matches(r#"class="signal""#).count(), 0);
    }

    #[test]
    fn test_contact_page_shows_registration_form() {
        let page = contact_page(&ContactView::default());
        assert!(page.contains("Send us a message"));
        assert!(page.contains(r#"name="routing_number""#));
        assert!(!page.contains("Bank Registration Successful!"));
    }

    #[test]
    fn test_contact_page_registered_state() {
        let receipt = RegistrationReceipt::for_bank("First National Bank");
        let page = contact_page(&ContactView {
            tab: ContactTab::Register,
            receipt: Some(&receipt),
            ..ContactView::default()
        });

        assert!(page.contains("Bank Registration Successful!"));
        assert!(page.contains("First National Bank has been successfully registered."));
        assert!(page.contains(API_ENDPOINT));
        assert!(!page.contains(r#"action="/contact/register""#));
        assert!(page.contains(r#"action="/contact/snippets/curl/copy""#));
        assert!(page.contains(r#"action="/contact/snippets/endpoint/copy""#));
        assert!(!page.contains("/api/v1/snippets"));
    }

    #[test]
    fn test_rejected_registration_keeps_input() {
        let mut registration = sample_registration("First National Bank");
        registration.city.clear();
        let page = contact_page(&ContactView {
            tab: ContactTab::Register,
            error: Some("Invalid city: is required"),
            registration: Some(&registration),
            ..ContactView::default()
        });

        assert!(page.contains(r#"value="First National Bank""#));
        assert!(page.contains(r#"value="021000021""#));
        assert!(page.contains(r#"name="city" type="text" placeholder="#));
        assert!(page.contains("Invalid city"));
    }

    #[test]
    fn test_rejected_contact_keeps_input() {
        let message = ContactMessage {
            first_name: "John".into(),
            message: "Tell <me> more".into(),
            ..ContactMessage::default()
        };
        let page = contact_page(&ContactView {
            error: Some("Invalid last_name: is required"),
            contact: Some(&message),
            ..ContactView::default()
        });

        assert!(page.contains(r#"value="John""#));
        assert!(page.contains("Tell &lt;me&gt; more</textarea>"));
    }
}
