use dotenvy::dotenv;
use tienda_api::{
    config::{database, server::ServerConfig},
    routes,
    state::AppState,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> tienda_api::errors::Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok();

    // 3. Load the server configuration
    let config = ServerConfig::load();

    // 4. Initialize database
    let db = database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to the database: {e}"))?;
    database::create_tables(&db)
        .await
        .inspect_err(|e| error!("Failed to create tables: {e}"))?;

    // 5. The upload directory must exist before ServeDir mounts it
    tokio::fs::create_dir_all(&config.upload_dir).await?;

    // 6. Serve
    let addr = format!("0.0.0.0:{}", config.port);
    let app = routes::router(AppState::new(db, config));
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
