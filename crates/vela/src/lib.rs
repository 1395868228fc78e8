use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub mod conf;
pub mod controllers;
pub mod errors;
pub mod logging_tracing;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod utils;

/// Full route table wrapped in the request trace and CORS layers.
pub fn app(state: AppState) -> Router {
    let intro_routes = routes::intro_routes::create_intro_routes();
    let user_routes = routes::user_routes::create_user_routes();

    Router::new()
        .merge(intro_routes)
        .nest("/api/user", user_routes)
        .layer(ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()))
        .with_state(state)
}
