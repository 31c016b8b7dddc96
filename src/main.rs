use activity_dashboard::{
    load_activities, loader::ShowsClient, router, shows::ShowSource, AppState, Config,
};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env()?;

    let activities = load_activities(&config.activity_path).await;
    info!(
        "loaded {} activities from {}",
        activities.len(),
        config.activity_path.display()
    );

    let shows = match &config.shows_upstream {
        Some(url) => {
            info!("fetching shows from {url}");
            ShowSource::Remote(ShowsClient::new(url.as_str())?)
        }
        None => ShowSource::File(config.shows_path.clone()),
    };

    let app = router(AppState::new(activities, shows, config.display));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
