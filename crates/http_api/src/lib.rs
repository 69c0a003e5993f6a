mod errors;
mod handlers;
mod middleware;
mod state;

use axum::{
    Router, middleware as axum_middleware,
    routing::get,
};

pub use state::HttpState;

pub fn router(state: HttpState) -> Router<()> {
    let api = Router::new()
        .route(
            "/waste",
            get(handlers::list_waste)
                .post(handlers::create_waste)
                .delete(handlers::delete_waste),
        )
        .route("/waste/daily", get(handlers::daily_waste))
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api", api)
        .fallback(handlers::not_found)
        .layer(axum_middleware::from_fn(middleware::trace_requests))
        .with_state(state)
}
