use axum::{routing::get, Router};

use crate::{controllers, state::AppState};


pub fn create_intro_routes() -> Router<AppState> {
    Router::new()
    .route("/", get(controllers::intro_controller::api_intro))
    .route("/api/v1/health", get(controllers::intro_controller::health))
}
