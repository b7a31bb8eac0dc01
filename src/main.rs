use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use muleshield::{Config, SiteService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "muleshield=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // .env, profile preset, muleshield.toml, MULESHIELD__* overrides
    let config = Config::load()?;

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Shutdown signal received");
    };

    let service = SiteService::new(config)?;
    service.run(shutdown).await?;

    Ok(())
}
