use super::handlers;
use super::state::AppState;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

pub fn product_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/products",
            get(handlers::products::list).post(handlers::products::create),
        )
        .route(
            "/products/:id",
            get(handlers::products::show)
                .put(handlers::products::update)
                .delete(handlers::products::delete),
        )
}

pub fn hashtag_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/hashtags",
            get(handlers::hashtags::list).post(handlers::hashtags::create),
        )
        .route(
            "/hashtags/:id",
            get(handlers::hashtags::show)
                .put(handlers::hashtags::update)
                .delete(handlers::hashtags::delete),
        )
}
