//! Server binary: env config, pool setup, schema bootstrap, route assembly.
//!
//! Token issuance (`/token/`) and the admin console (`/admin/`) are served by
//! external collaborators in front of this process; nothing here authenticates.

use axum::Router;
use configuracion_api::{
    api_routes, common_routes_with_ready, ensure_database_exists, ensure_schema, AppState,
};
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("configuracion_api=info".parse()?),
        )
        .init();

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "postgres://localhost/configuracion".into());
    ensure_database_exists(&database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;
    ensure_schema(&pool).await?;

    let state = AppState { pool: pool.clone() };
    let app = Router::new()
        .merge(common_routes_with_ready(state))
        .nest("/api", api_routes(&pool))
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(1024 * 1024));

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into());
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
