use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use compound_catalog::{
    AppState, CatalogStore, JsonFileSource, RecordSource, ServerConfig, load_or_empty, router,
    with_middleware,
};

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("compound_catalog={level},catalog_server={level},tower_http={level}")));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    let source: Arc<dyn RecordSource> = Arc::new(JsonFileSource::new(&config.data_path));
    let catalog = load_or_empty(source.as_ref()).await;
    let store = Arc::new(CatalogStore::new(catalog));

    let state = AppState::new(store, source, &config);
    let app = with_middleware(router(state), &config);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        %addr,
        data_path = %config.data_path.display(),
        reload = config.enable_reload,
        "Compound catalog listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
