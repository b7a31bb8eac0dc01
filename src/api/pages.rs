use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use tracing::info;

use super::rest::AppError;
use super::state::ApiState;
use crate::error::MuleShieldError;
use crate::site::content;
use crate::site::{checker_page, contact_page, landing_page, CheckerView, ContactTab, ContactView};
use crate::types::{
    BankRegistration, ContactMessage, NotificationKind, RegistrationReceipt, TransactionForm,
};

pub async fn landing() -> Html<String> {
    Html(landing_page())
}

pub async fn checker(State(state): State<ApiState>) -> Html<String> {
    let form = TransactionForm::default();
    Html(checker_page(&CheckerView {
        form: &form,
        result: None,
        error: None,
        formatter: &state.formatter,
    }))
}

/// Form post from the checker page; re-renders with the verdict
pub async fn submit_check(
    State(state): State<ApiState>,
    Form(form): Form<TransactionForm>,
) -> Result<Response, AppError> {
    info!("Checker page submission");

    match state.check_transaction(&form).await {
        Ok(check) => Ok(Html(checker_page(&CheckerView {
            form: &form,
            result: Some(&check),
            error: None,
            formatter: &state.formatter,
        }))
        .into_response()),
        Err(e) if e.is_validation() => {
            let message = e.to_string();
            let page = checker_page(&CheckerView {
                form: &form,
                result: None,
                error: Some(&message),
                formatter: &state.formatter,
            });
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn contact() -> Html<String> {
    Html(contact_page(&ContactView::default()))
}

pub async fn submit_contact(
    State(state): State<ApiState>,
    Form(message): Form<ContactMessage>,
) -> Result<Response, AppError> {
    match state.send_contact(message.clone()).await {
        Ok(()) => Ok(Html(contact_page(&ContactView {
            notice: Some(&notice_for(NotificationKind::MessageSent)),
            ..ContactView::default()
        }))
        .into_response()),
        Err(e) => form_error(
            e,
            ContactView {
                tab: ContactTab::Contact,
                contact: Some(&message),
                ..ContactView::default()
            },
        ),
    }
}

pub async fn submit_registration(
    State(state): State<ApiState>,
    Form(registration): Form<BankRegistration>,
) -> Result<Response, AppError> {
    match state.register_bank(registration.clone()).await {
        Ok(receipt) => Ok(Html(contact_page(&ContactView {
            tab: ContactTab::Register,
            notice: Some(&notice_for(NotificationKind::BankRegistered)),
            receipt: Some(&receipt),
            ..ContactView::default()
        }))
        .into_response()),
        Err(e) => form_error(
            e,
            ContactView {
                tab: ContactTab::Register,
                registration: Some(&registration),
                ..ContactView::default()
            },
        ),
    }
}

/// Hidden field carried by the copy buttons on the registered view
#[derive(Debug, Deserialize)]
pub struct CopyForm {
    #[serde(default)]
    pub bank_name: String,
}

/// Copy button on the registered view: raise "Copied!" and stay on the
/// integration guide
pub async fn copy_snippet(
    State(state): State<ApiState>,
    Path(target): Path<String>,
    Form(form): Form<CopyForm>,
) -> Result<Html<String>, AppError> {
    if content::copyable(&target).is_none() {
        return Err(AppError::NotFound(format!("No snippet for '{}'", target)));
    }

    state.notifications.notify(NotificationKind::Copied).await;

    let receipt = RegistrationReceipt::for_bank(form.bank_name);
    let notice = notice_for(NotificationKind::Copied);
    let page = contact_page(&ContactView {
        tab: ContactTab::Register,
        notice: Some(&notice),
        receipt: Some(&receipt),
        ..ContactView::default()
    });
    Ok(Html(page))
}

fn notice_for(kind: NotificationKind) -> String {
    let (title, description) = kind.canned_text();
    format!("{} {}", title, description)
}

/// Re-render the contact page with the submitted values and the error
fn form_error(err: MuleShieldError, view: ContactView<'_>) -> Result<Response, AppError> {
    if !err.is_validation() {
        return Err(err.into());
    }

    let message = err.to_string();
    let page = contact_page(&ContactView {
        error: Some(&message),
        ..view
    });
    Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response())
}
