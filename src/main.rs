//! Server binary: env config, tracing init, pool, migrations, routes.

use axum::Router;
use manufactory::{
    apply_migrations, common_routes, connect_pool, entity_routes, fixtures, AppState,
};
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("manufactory=info".parse()?),
        )
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://manufactory.db".into());
    let pool = connect_pool(&database_url, 5).await?;
    apply_migrations(&pool).await?;

    if std::env::var("SEED_FIXTURES").map(|v| v == "1").unwrap_or(false) {
        fixtures::seed(&pool).await?;
    }

    let state = AppState { pool: pool.clone() };
    let app = Router::new()
        .merge(common_routes(state.clone()))
        .merge(entity_routes(state))
        .layer(RequestBodyLimitLayer::new(1024 * 1024));

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    pool.close().await;
    Ok(())
}
