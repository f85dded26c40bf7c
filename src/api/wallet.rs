use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use super::error_response;
use crate::infrastructure::AppState;
use crate::models::common::PageParams;
use crate::models::wallet::WalletRequest;

#[utoipa::path(
    get,
    path = "/api/wallets",
    responses(
        (status = 200, description = "One page of wallets"),
        (status = 404, description = "No records found")
    )
)]
pub async fn list_wallets(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> impl IntoResponse {
    match state.wallets.find_all(params).await {
        Ok(page) => Json(page).into_response(),
        Err(err) => error_response(err),
    }
}

#[utoipa::path(
    get,
    path = "/api/wallets/{id}",
    responses(
        (status = 200, description = "The wallet", body = crate::models::wallet::WalletDto),
        (status = 404, description = "Wallet not found")
    )
)]
pub async fn get_wallet(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.wallets.find_by_id(id).await {
        Ok(wallet) => Json(wallet).into_response(),
        Err(err) => error_response(err),
    }
}

#[utoipa::path(
    get,
    path = "/api/wallets/iban/{iban}",
    responses(
        (status = 200, description = "The wallet", body = crate::models::wallet::WalletDto),
        (status = 404, description = "Wallet not found")
    )
)]
pub async fn get_wallet_by_iban(
    State(state): State<AppState>,
    Path(iban): Path<String>,
) -> impl IntoResponse {
    match state.wallets.find_by_iban(&iban).await {
        Ok(wallet) => Json(wallet).into_response(),
        Err(err) => error_response(err),
    }
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/wallets",
    responses(
        (status = 200, description = "Wallets owned by the user"),
        (status = 404, description = "No records found")
    )
)]
pub async fn list_user_wallets(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> impl IntoResponse {
    match state.wallets.find_all_by_user_id(user_id).await {
        Ok(wallets) => Json(wallets).into_response(),
        Err(err) => error_response(err),
    }
}

#[utoipa::path(
    post,
    path = "/api/wallets",
    request_body = WalletRequest,
    responses(
        (status = 201, description = "Wallet created", body = crate::models::common::CommandResponse),
        (status = 404, description = "Owning user not found")
    )
)]
pub async fn create_wallet(
    State(state): State<AppState>,
    Json(request): Json<WalletRequest>,
) -> impl IntoResponse {
    match state.wallets.create(request).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(err) => error_response(err),
    }
}
