mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid host configuration");
    let state = state::AppState::from_config(&config).expect("failed to build HTTP client");

    let app = routes::app(state).expect("failed to build router");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, upstream = %config.analytics_api_url, "brics listening");
    axum::serve(listener, app).await.expect("server failed");
}
