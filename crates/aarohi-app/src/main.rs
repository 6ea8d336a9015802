//! Main entry point for the Aarohi portal.

use aarohi_app::{AppConfig, AppResult, Portal};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aarohi=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Aarohi portal");

    let config = AppConfig::from_env()?;
    info!(
        api_base = %config.api_base,
        language = %config.default_language,
        "configuration loaded"
    );

    let mut portal = Portal::mount(&config)?;
    portal.load_all().await;

    report(&portal);

    info!("session pass complete");
    Ok(())
}

/// Logs each page's render state after the initial load.
fn report(portal: &Portal) {
    info!(page = %portal.home.hero_title(), "home mounted");
    for (title, status) in [
        (portal.education.title(), portal.education.status_line()),
        (portal.health.title(), portal.health.status_line()),
        (portal.help.title(), portal.help.status_line()),
        (portal.stories.title(), portal.stories.status_line()),
    ] {
        match status {
            Some(notice) => info!(page = %title, %notice, "remote panel not ready"),
            None => info!(page = %title, "remote panel ready"),
        }
    }
    info!(page = %portal.legal.title(), "legal page mounted");
}
