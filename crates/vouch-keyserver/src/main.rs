mod config;
mod error;
mod handlers;
mod routes;
mod state;
mod store;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cfg = config::load_config()?;
    let state = AppState::init(&cfg).await?;
    let app = routes::create_router(state);

    tracing::info!("vouch-keyserver listening on {}", cfg.bind);

    let listener = tokio::net::TcpListener::bind(&cfg.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
