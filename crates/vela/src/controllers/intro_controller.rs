use axum::response::{Html, IntoResponse};
use axum::Json;
use serde_json::json;

const API_INTRO: &str = r#"
        <p>Welcome to the Vela user API</p>
        <p>Current Endpoints:</p>
        <ul>
            <li>/api/user</li>
        </ul>
    "#;

pub async fn api_intro() -> Html<&'static str> {
    Html(API_INTRO)
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status" : "UP" }))
}
