use axum::{routing::{get, post, put}, Router};

use crate::{controllers, state::AppState};


pub fn create_user_routes() -> Router<AppState> {
    Router::new()
    .route("/", post(controllers::user_controller::create_user).get(controllers::user_controller::get_all_users))
    .route("/:id", get(controllers::user_controller::get_user_by_id))
    .route("/score/:id", put(controllers::user_controller::update_best_score))
    .route("/besttime/:id", put(controllers::user_controller::update_best_time))
}
