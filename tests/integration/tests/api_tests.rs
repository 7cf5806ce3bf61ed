//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL (tests self-skip when unset)
//!
//! The pagination window assertions compare absolute offsets and assume no
//! unrelated writer is mutating the users table mid-test.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Metadata & Health Tests
// ============================================================================

#[tokio::test]
async fn test_root_metadata() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/").await.expect("Request failed");

    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body["message"].as_str().unwrap().starts_with("Welcome"));
    assert!(body["endpoints"]["create_user"].is_string());
}

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Create Tests
// ============================================================================

#[tokio::test]
async fn test_create_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let payload = CreateUserPayload::unique();

    let response = server.post("/users/", &payload).await.unwrap();
    let user: UserRecord = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(user.email, payload.email);
    assert_eq!(user.username, payload.username);
    assert!(user.id > 0);
    assert_eq!(user.created_at, user.updated_at);
}

#[tokio::test]
async fn test_create_lowercases_username() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut payload = CreateUserPayload::unique();
    payload.username = format!("MixedCase{}", unique_suffix());

    let response = server.post("/users/", &payload).await.unwrap();
    let user: UserRecord = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(user.username, payload.username.to_lowercase());
}

#[tokio::test]
async fn test_sequential_creates_get_increasing_ids() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let mut last_id = 0;
    for _ in 0..3 {
        let payload = CreateUserPayload::unique();
        let response = server.post("/users/", &payload).await.unwrap();
        let user: UserRecord = assert_json(response, StatusCode::CREATED).await.unwrap();
        assert!(user.id > last_id, "ids must be strictly increasing");
        last_id = user.id;
    }
}

#[tokio::test]
async fn test_create_duplicate_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let payload = CreateUserPayload::unique();

    // First creation succeeds
    let response = server.post("/users/", &payload).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Second creation with the same email fails, whatever the username
    let mut second = CreateUserPayload::unique();
    second.email = payload.email.clone();
    let response = server.post("/users/", &second).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.message, "Email already registered");
}

#[tokio::test]
async fn test_create_duplicate_username_differing_case() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let payload = CreateUserPayload::unique();

    let response = server.post("/users/", &payload).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Same username with different casing collapses to the same canonical
    // form and must conflict
    let mut second = CreateUserPayload::unique();
    second.username = payload.username.to_uppercase();
    let response = server.post("/users/", &second).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.message, "Username already taken");
}

#[tokio::test]
async fn test_create_rejects_bad_username_before_persisting() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let email = format!("charset{}@example.com", unique_suffix());

    let response = server
        .post(
            "/users/",
            &json!({ "email": email, "username": "has space!" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();

    // Nothing was persisted for that email
    let response = server.get(&format!("/users/email/{email}")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_create_rejects_malformed_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            "/users/",
            &json!({ "email": "not-an-email", "username": "validname" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}

// ============================================================================
// Fetch Tests
// ============================================================================

#[tokio::test]
async fn test_get_user_round_trip() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let payload = CreateUserPayload::unique();

    let response = server.post("/users/", &payload).await.unwrap();
    let created: UserRecord = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Fetching right after creation returns the identical view
    let response = server.get(&format!("/users/{}", created.id)).await.unwrap();
    let fetched: UserRecord = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_missing_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/users/999999999").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_get_user_by_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let payload = CreateUserPayload::unique();

    let response = server.post("/users/", &payload).await.unwrap();
    let created: UserRecord = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get(&format!("/users/email/{}", payload.email))
        .await
        .unwrap();
    let fetched: UserRecord = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched, created);

    let response = server
        .get(&format!("/users/email/missing{}@example.com", unique_suffix()))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Delete Tests
// ============================================================================

#[tokio::test]
async fn test_delete_then_fetch() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let payload = CreateUserPayload::unique();

    let response = server.post("/users/", &payload).await.unwrap();
    let created: UserRecord = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Delete succeeds with a confirmation message
    let response = server.delete(&format!("/users/{}", created.id)).await.unwrap();
    let body: MessageBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "User deleted successfully");

    // Fetching the deleted id is a 404
    let response = server.get(&format!("/users/{}", created.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // Deleting twice is a 404 on the second attempt
    let response = server.delete(&format!("/users/{}", created.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Pagination Tests
// ============================================================================

#[tokio::test]
async fn test_pagination_window() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Ensure at least five records exist
    let mut created = Vec::new();
    for _ in 0..5 {
        let payload = CreateUserPayload::unique();
        let response = server.post("/users/", &payload).await.unwrap();
        let user: UserRecord = assert_json(response, StatusCode::CREATED).await.unwrap();
        created.push(user);
    }

    // Full listing is in insertion order and contains our records in order
    let response = server.get("/users/?skip=0&limit=1000000").await.unwrap();
    let full: Vec<UserRecord> = assert_json(response, StatusCode::OK).await.unwrap();
    let ids: Vec<i64> = full.iter().map(|u| u.id).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "listing must be ordered");
    let ours: Vec<i64> = full
        .iter()
        .filter(|u| created.iter().any(|c| c.id == u.id))
        .map(|u| u.id)
        .collect();
    assert_eq!(
        ours,
        created.iter().map(|c| c.id).collect::<Vec<_>>(),
        "created records must list in creation order"
    );

    // A window [k, k+m) matches the same slice of the full listing
    let response = server.get("/users/?skip=2&limit=2").await.unwrap();
    let window: Vec<UserRecord> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(window, full[2..4].to_vec());

    // Skipping past the end yields an empty list, not an error
    let response = server.get("/users/?skip=1000000000").await.unwrap();
    let empty: Vec<UserRecord> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(empty.is_empty());
}

#[tokio::test]
async fn test_pagination_rejects_negative_params() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/users/?skip=-1").await.unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();

    let response = server.get("/users/?limit=-5").await.unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}
