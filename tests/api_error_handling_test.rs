use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use ewallet::config::Config;
use ewallet::db;
use ewallet::infrastructure::AppState;
use ewallet::server;
use tower::util::ServiceExt; // for `oneshot`

// Helper to create a test router over an in-memory database
async fn setup_test_app() -> Router {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    let state = AppState::new(db, &Config::default());
    server::build_router(state, &[])
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, payload: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).unwrap()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_test_app().await;

    let response = app.oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_get_transaction_not_found() {
    let app = setup_test_app().await;

    let response = app.oneshot(get("/api/transactions/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response).await;
    assert_eq!(body["error"], "Transaction with id 999 not found");
}

#[tokio::test]
async fn test_get_transaction_malformed_reference() {
    let app = setup_test_app().await;

    let response = app
        .oneshot(get("/api/transactions/reference/not-a-uuid"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_wallet_for_missing_user() {
    let app = setup_test_app().await;

    let payload = serde_json::json!({
        "iban": "TR01",
        "name": "Main",
        "balance": 0,
        "currency": "TRY",
        "user_id": 42
    });
    let response = app.oneshot(post_json("/api/wallets", &payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_user_with_invalid_role() {
    let app = setup_test_app().await;

    let payload = serde_json::json!({
        "first_name": "Jane",
        "last_name": "Doe",
        "roles": ["ROLE_SUPERUSER"]
    });
    let response = app.oneshot(post_json("/api/users", &payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_list_transactions_empty_table_is_not_found() {
    let app = setup_test_app().await;

    let response = app.oneshot(get("/api/transactions")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response).await;
    assert_eq!(body["error"], "No records found");
}

#[tokio::test]
async fn test_wallet_and_transaction_flow() {
    let app = setup_test_app().await;

    // Create a user
    let payload = serde_json::json!({
        "first_name": "Jane",
        "last_name": "Doe",
        "roles": ["ROLE_USER"]
    });
    let response = app
        .clone()
        .oneshot(post_json("/api/users", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let user_id = json_body(response).await["id"].as_i64().unwrap();

    // Create two wallets for the user
    for iban in ["TR01", "TR02"] {
        let payload = serde_json::json!({
            "iban": iban,
            "name": "Main",
            "balance": 50_000,
            "currency": "TRY",
            "user_id": user_id
        });
        let response = app
            .clone()
            .oneshot(post_json("/api/wallets", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // Move money between them
    let payload = serde_json::json!({
        "from_wallet_iban": "TR01",
        "to_wallet_iban": "TR02",
        "amount": 12_345,
        "description": "first transfer"
    });
    let response = app
        .clone()
        .oneshot(post_json("/api/transactions", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let transaction_id = json_body(response).await["id"].as_i64().unwrap();

    // The transaction is visible by id, by reference, and through the user
    let response = app
        .clone()
        .oneshot(get(&format!("/api/transactions/{}", transaction_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let transaction = json_body(response).await;
    assert_eq!(transaction["amount"], 12_345);

    let reference = transaction["reference_number"].as_str().unwrap();
    let response = app
        .clone()
        .oneshot(get(&format!("/api/transactions/reference/{}", reference)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(get(&format!("/api/users/{}/transactions", user_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let transactions = json_body(response).await;
    assert_eq!(transactions.as_array().unwrap().len(), 1);

    // And the user's full name is derived in the response
    let response = app
        .clone()
        .oneshot(get(&format!("/api/users/{}", user_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let user = json_body(response).await;
    assert_eq!(user["full_name"], "Jane Doe");

    // Lookup by IBAN
    let response = app
        .oneshot(get("/api/wallets/iban/TR01"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let wallet = json_body(response).await;
    assert_eq!(wallet["user_id"], user_id);
}
