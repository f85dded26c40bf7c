use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use super::error_response;
use crate::infrastructure::AppState;
use crate::models::common::PageParams;
use crate::models::transaction::TransactionRequest;

#[utoipa::path(
    get,
    path = "/api/transactions",
    responses(
        (status = 200, description = "One page of transactions"),
        (status = 404, description = "No records found")
    )
)]
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> impl IntoResponse {
    match state.transactions.find_all(params).await {
        Ok(page) => Json(page).into_response(),
        Err(err) => error_response(err),
    }
}

#[utoipa::path(
    get,
    path = "/api/transactions/{id}",
    responses(
        (status = 200, description = "The transaction", body = crate::models::transaction::TransactionDto),
        (status = 404, description = "Transaction not found")
    )
)]
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match state.transactions.find_by_id(id).await {
        Ok(transaction) => Json(transaction).into_response(),
        Err(err) => error_response(err),
    }
}

#[utoipa::path(
    get,
    path = "/api/transactions/reference/{reference}",
    responses(
        (status = 200, description = "The transaction", body = crate::models::transaction::TransactionDto),
        (status = 404, description = "Transaction not found"),
        (status = 422, description = "Malformed reference number")
    )
)]
pub async fn get_transaction_by_reference(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> impl IntoResponse {
    match state.transactions.find_by_reference_number(&reference).await {
        Ok(transaction) => Json(transaction).into_response(),
        Err(err) => error_response(err),
    }
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/transactions",
    responses(
        (status = 200, description = "Transactions touching the user's wallets"),
        (status = 404, description = "No records found")
    )
)]
pub async fn list_user_transactions(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> impl IntoResponse {
    match state.transactions.find_all_by_user_id(user_id).await {
        Ok(transactions) => Json(transactions).into_response(),
        Err(err) => error_response(err),
    }
}

#[utoipa::path(
    post,
    path = "/api/transactions",
    request_body = TransactionRequest,
    responses(
        (status = 201, description = "Transaction created", body = crate::models::common::CommandResponse),
        (status = 404, description = "Source or destination wallet not found"),
        (status = 422, description = "Non-positive amount")
    )
)]
pub async fn create_transaction(
    State(state): State<AppState>,
    Json(request): Json<TransactionRequest>,
) -> impl IntoResponse {
    match state.transactions.create(request).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(err) => error_response(err),
    }
}
