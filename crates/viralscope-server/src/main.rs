mod api;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use viralscope_youtube::YoutubeClient;

use crate::api::{build_app, rate_limit_state, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Arc::new(viralscope_core::load_app_config()?);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let youtube = YoutubeClient::with_base_url(
        config.request_timeout_secs,
        &config.user_agent,
        &config.youtube_base_url,
    )?;

    if config.youtube_api_key.is_none() {
        tracing::warn!("YOUTUBE_API_KEY not set; callers must supply apiKey per request");
    }

    let rate_limit = rate_limit_state(&config);
    let app = build_app(
        AppState {
            youtube,
            config: Arc::clone(&config),
        },
        rate_limit,
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, env = %config.env, "viralscope server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
