use bandtrack_server::{app, AppState, Config};
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();
    if !config.seed_demo {
        tracing::info!("demo seeding disabled, starting with an empty store");
    }

    let state = Arc::new(AppState::from_config(&config));
    let app = app::router(state).layer(app::cors_layer(&config));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "BandTrack backend listening");

    axum::serve(listener, app).await
}
