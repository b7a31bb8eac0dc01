use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use super::state::ApiState;
use crate::error::MuleShieldError;
use crate::scoring::{presentation_for, Presentation};
use crate::site::content::{
    self, Snippet, SchemaField, API_ENDPOINT, API_HEADERS, API_METHOD, REQUEST_SCHEMA, SNIPPETS,
};
use crate::types::{
    BankRegistration, ContactMessage, FraudCheckResult, Notification, NotificationKind,
    RegistrationReceipt, TransactionForm,
};

/// Request body for a transaction check. `amount` may be a JSON string or number.
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub amount: Value,
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub recipient: String,
}

impl CheckRequest {
    fn into_form(self) -> Result<TransactionForm, AppError> {
        let amount = match self.amount {
            Value::Null => String::new(),
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            other => {
                return Err(AppError::Validation(format!(
                    "Invalid amount: expected a number, got {}",
                    other
                )))
            }
        };
        Ok(TransactionForm::new(amount, self.sender, self.recipient))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    #[serde(flatten)]
    pub result: FraudCheckResult,
    pub score_display: String,
    pub presentation: Presentation,
    pub formatted_amount: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct HeaderDoc {
    pub name: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DocsResponse {
    pub endpoint: &'static str,
    pub method: &'static str,
    pub headers: Vec<HeaderDoc>,
    pub body_schema: Vec<SchemaField>,
    pub snippets: Vec<Snippet>,
}

#[derive(Debug, Serialize)]
pub struct CopyResponse {
    pub language: String,
    pub code: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: content::PRODUCT_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Run the mock risk rule on one transaction
pub async fn check_transaction(
    State(state): State<ApiState>,
    Json(payload): Json<CheckRequest>,
) -> Result<Json<CheckResponse>, AppError> {
    let form = payload.into_form()?;
    info!("API: Checking transaction of {}", form.amount.trim());

    let check = state.check_transaction(&form).await?;

    Ok(Json(CheckResponse {
        score_display: check.result.score_display(),
        presentation: presentation_for(check.result.risk_level),
        formatted_amount: state.formatter.format(check.input.amount),
        result: check.result,
    }))
}

pub async fn send_contact(
    State(state): State<ApiState>,
    Json(message): Json<ContactMessage>,
) -> Result<Json<StatusResponse>, AppError> {
    state.send_contact(message).await?;
    Ok(Json(StatusResponse {
        status: "sent".to_string(),
    }))
}

pub async fn register_bank(
    State(state): State<ApiState>,
    Json(registration): Json<BankRegistration>,
) -> Result<Json<RegistrationReceipt>, AppError> {
    let receipt = state.register_bank(registration).await?;
    Ok(Json(receipt))
}

pub async fn api_docs() -> Json<DocsResponse> {
    Json(DocsResponse {
        endpoint: API_ENDPOINT,
        method: API_METHOD,
        headers: API_HEADERS
            .iter()
            .map(|&(name, value)| HeaderDoc { name, value })
            .collect(),
        body_schema: REQUEST_SCHEMA.to_vec(),
        snippets: SNIPPETS.to_vec(),
    })
}

/// Hand back the snippet text and raise a "Copied!" toast
pub async fn copy_snippet(
    State(state): State<ApiState>,
    Path(language): Path<String>,
) -> Result<Json<CopyResponse>, AppError> {
    let code = content::copyable(&language)
        .ok_or_else(|| AppError::NotFound(format!("No snippet for '{}'", language)))?;

    state.notifications.notify(NotificationKind::Copied).await;

    Ok(Json(CopyResponse { language, code }))
}

pub async fn list_notifications(State(state): State<ApiState>) -> Json<Vec<Notification>> {
    Json(state.notifications.active().await)
}

pub async fn dismiss_notification(
    State(state): State<ApiState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    if state.notifications.dismiss(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("No notification with id {}", id)))
    }
}

/// API error wrapper
#[derive(Debug)]
pub enum AppError {
    Validation(String),
    NotFound(String),
    Internal(MuleShieldError),
}

impl From<MuleShieldError> for AppError {
    fn from(err: MuleShieldError) -> Self {
        match err {
            MuleShieldError::Validation { .. } => AppError::Validation(err.to_string()),
            MuleShieldError::NotFound(msg) => AppError::NotFound(msg),
            other => AppError::Internal(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(e) => {
                tracing::error!("Request failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Internal error: {}", e),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
