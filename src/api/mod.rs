mod pages;
mod rest;
mod state;
mod websocket;

pub use rest::{AppError, CheckRequest, CheckResponse};
pub use state::ApiState;
pub use websocket::ws_handler;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the site router: HTML pages, JSON API and the notification socket
pub fn create_router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/check", post(rest::check_transaction))
        .route("/contact", post(rest::send_contact))
        .route("/register", post(rest::register_bank))
        .route("/docs", get(rest::api_docs))
        .route("/snippets/:language/copy", post(rest::copy_snippet))
        .route("/notifications", get(rest::list_notifications))
        .route("/notifications/:id", delete(rest::dismiss_notification));

    Router::new()
        .route("/", get(pages::landing))
        .route("/checker", get(pages::checker).post(pages::submit_check))
        .route("/contact", get(pages::contact).post(pages::submit_contact))
        .route("/contact/register", post(pages::submit_registration))
        .route("/contact/snippets/:target/copy", post(pages::copy_snippet))
        .route("/health", get(rest::health_check))
        .route("/ws/notifications", get(ws_handler))
        .nest("/api/v1", api_v1)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
