use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::HeaderMap;

use crate::errors::Result;
use crate::services::user_service;
use crate::state::AppState;
use crate::utils::api_response::ApiResponse;

use super::payloads::UserRequest;


pub async fn create_user(
    state: State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<ApiResponse> {
    user_service::create(state.store.as_ref(), UserRequest::new(None, &headers, body)).await
}

pub async fn get_all_users(state: State<AppState>) -> Result<ApiResponse> {
    user_service::list(state.store.as_ref()).await
}

pub async fn get_user_by_id(
    state: State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<ApiResponse> {
    user_service::find_one(state.store.as_ref(), UserRequest::new(Some(id), &headers, Bytes::new())).await
}

pub async fn update_best_score(
    state: State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<ApiResponse> {
    user_service::update_score(state.store.as_ref(), UserRequest::new(Some(id), &headers, body)).await
}

pub async fn update_best_time(
    state: State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<ApiResponse> {
    user_service::update_best_time(state.store.as_ref(), UserRequest::new(Some(id), &headers, body)).await
}
