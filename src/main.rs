mod config;
mod routes;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid host configuration");
    tracing::info!(project = %config.backend.project_id, auth_domain = %config.backend.auth_domain, "backend configured");

    let app = routes::app(config.backend.clone()).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "menosense listening");
    axum::serve(listener, app).await.expect("server failed");
}
