mod submission;

pub use submission::{MockSubmissionService, Submission, SubmissionOutcome, SubmissionService};

use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::api::{create_router, ApiState};
use crate::config::Config;
use crate::error::Result;
use crate::notify;

/// Main site service
pub struct SiteService {
    config: Arc<Config>,
    state: ApiState,
}

impl SiteService {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let state = ApiState::from_config(&config);

        Ok(Self {
            config: Arc::new(config),
            state,
        })
    }

    /// Use a different submission backend
    pub fn with_submission_service(mut self, service: Arc<dyn SubmissionService>) -> Self {
        self.state.service = service;
        self
    }

    /// Serve until `shutdown` resolves
    pub async fn run(self, shutdown: impl Future<Output = ()> + Send + 'static) -> Result<()> {
        let addr = self.config.socket_addr()?;

        info!("🚀 Starting MuleShield site service");
        info!(
            "💱 Currency: {} ({})",
            self.config.display.currency.code(),
            self.config.display.locale
        );
        info!(
            "⏱  Simulated latency: check {}ms, contact {}ms, registration {}ms",
            self.config.submission.check_delay_ms,
            self.config.submission.contact_delay_ms,
            self.config.submission.registration_delay_ms
        );

        let sweeper = notify::spawn_sweeper(
            Arc::clone(&self.state.notifications),
            self.config.sweep_interval(),
        );

        let app = create_router(self.state.clone());
        let listener = TcpListener::bind(addr).await?;
        info!("🌐 Listening on http://{}", addr);

        let served = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await;

        sweeper.abort();
        info!("👋 MuleShield site service stopped");

        served.map_err(Into::into)
    }

    pub fn config(&self) -> Arc<Config> {
        Arc::clone(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_creation() {
        let service = SiteService::new(Config::default());
        assert!(service.is_ok());
    }

    #[test]
    fn test_service_rejects_invalid_config() {
        let mut config = Config::default();
        config.notifications.capacity = 0;

        let service = SiteService::new(config);
        assert!(service.is_err());
    }

    #[test]
    fn test_custom_submission_service() {
        let service = SiteService::new(Config::default())
            .unwrap()
            .with_submission_service(Arc::new(MockSubmissionService::instant()));
        assert_eq!(service.config().server.port, 8080);
    }
}
