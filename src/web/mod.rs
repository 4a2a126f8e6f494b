mod error;
mod handlers;
mod routes;
mod state;

pub use error::{AppError, AppResult};
pub use state::AppState;

use crate::Database;
use anyhow::Result;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Builds the full application router over `db`.
pub fn app(db: Database) -> Router {
    let state = Arc::new(AppState::new(db));

    Router::new()
        .route("/", get(handlers::index))
        .merge(routes::product_routes())
        .merge(routes::hashtag_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(db: Database, addr: &str) -> Result<()> {
    let app = app(db);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server running on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
