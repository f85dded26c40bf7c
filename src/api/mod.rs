pub mod health;
pub mod transaction;
pub mod user;
pub mod wallet;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::domain::DomainError;
use crate::infrastructure::AppState;

pub fn api_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Users
        .route("/users", get(user::list_users).post(user::create_user))
        .route("/users/:id", get(user::get_user))
        .route("/users/:id/wallets", get(wallet::list_user_wallets))
        .route(
            "/users/:id/transactions",
            get(transaction::list_user_transactions),
        )
        // Wallets
        .route(
            "/wallets",
            get(wallet::list_wallets).post(wallet::create_wallet),
        )
        .route("/wallets/:id", get(wallet::get_wallet))
        .route("/wallets/iban/:iban", get(wallet::get_wallet_by_iban))
        // Transactions
        .route(
            "/transactions",
            get(transaction::list_transactions).post(transaction::create_transaction),
        )
        .route("/transactions/:id", get(transaction::get_transaction))
        .route(
            "/transactions/reference/:reference",
            get(transaction::get_transaction_by_reference),
        )
        .with_state(state)
}

/// Map a domain error onto an HTTP response with a JSON error body
pub(crate) fn error_response(err: DomainError) -> Response {
    let status = match &err {
        DomainError::NotFound(_) | DomainError::EmptyResult(_) => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(serde_json::json!({ "error": err.to_string() }))).into_response()
}
