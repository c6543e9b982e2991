use mock_server::{AppState, Catalog, ServerOptions};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,mock_server=debug")),
        )
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let options = ServerOptions {
        contact_limit: std::env::var("CONTACT_LIMIT").ok().and_then(|v| v.parse().ok()),
        outage: std::env::var("OUTAGE").is_ok_and(|v| v == "1" || v == "true"),
    };
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, ?options, "listening on http://{addr}/api");
    mock_server::run_with(listener, AppState::new(Catalog::seeded(), options)).await
}
