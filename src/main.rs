use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use search_gateway::config::GatewayConfig;
use search_gateway::gateway::handlers::{
    handle_execute_command, handle_health, handle_search,
};
use search_gateway::worker::invoker::ProcessInvoker;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match GatewayConfig::from_args(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            eprintln!(
                "Usage: search-gateway --worker <path> [--worker-arg <arg>]... \
                 [--bind <addr:port>] [--deadline-secs <n>] \
                 [--max-output-bytes <n>] [--max-concurrency <n>]"
            );
            eprintln!("Example: search-gateway --worker python3 --worker-arg scrape.py");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Worker executable: {} (prefix args: {:?})",
        config.worker_executable.display(),
        config.worker_args_prefix
    );
    tracing::info!(
        "Limits: {} bytes/stream, {:?} deadline, {} concurrent worker(s)",
        config.max_output_bytes,
        config.deadline,
        config.max_concurrency
    );

    let invoker = ProcessInvoker::new(config.max_concurrency);
    let config = Arc::new(config);

    let app = Router::new()
        .route("/search", get(handle_search))
        .route("/execute_command", post(handle_execute_command))
        .route("/health", get(handle_health))
        .layer(Extension(config.clone()))
        .layer(Extension(invoker));

    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
