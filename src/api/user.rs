use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use super::error_response;
use crate::infrastructure::AppState;
use crate::models::common::PageParams;
use crate::models::user::UserRequest;

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "One page of users"),
        (status = 404, description = "No records found")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> impl IntoResponse {
    match state.users.find_all(params).await {
        Ok(page) => Json(page).into_response(),
        Err(err) => error_response(err),
    }
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    responses(
        (status = 200, description = "The user", body = crate::models::user::UserDto),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.users.find_by_id(id).await {
        Ok(user) => Json(user).into_response(),
        Err(err) => error_response(err),
    }
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = crate::models::common::CommandResponse),
        (status = 404, description = "Requested role not found"),
        (status = 422, description = "Invalid role type")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<UserRequest>,
) -> impl IntoResponse {
    match state.users.create(request).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(err) => error_response(err),
    }
}
