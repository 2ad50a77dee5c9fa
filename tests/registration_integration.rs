//! Integration tests for the registration endpoint
//! These tests exercise the handler, service, and user repository together
//! and pin down the response contract for each outcome.

use axum::Json;
use axum::body::to_bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use pragatix::application::auth::RegistrationRequest;
use pragatix::http::auth::register;
use pragatix::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;

async fn call_register(
    state: Arc<AppState>,
    payload: Value,
) -> anyhow::Result<(StatusCode, Value)> {
    let request: RegistrationRequest = serde_json::from_value(payload)?;
    let response = match register(State(state), Json(request)).await {
        Ok(created) => created.into_response(),
        Err(err) => err.into_response(),
    };
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, serde_json::from_slice(&bytes)?))
}

#[tokio::test]
async fn test_register_creates_user_and_returns_created() -> anyhow::Result<()> {
    let state = AppState::in_memory()?;

    let (status, body) = call_register(
        state.clone(),
        json!({
            "name": "Dana Petrov",
            "email": "dana@example.com",
            "password": "s3cret!"
        }),
    )
    .await?;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User registered successfully");
    assert_eq!(body["user"]["name"], "Dana Petrov");
    assert_eq!(body["user"]["email"], "dana@example.com");
    assert_eq!(body["user"]["password"], "s3cret!");
    assert!(body["user"]["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(
        body["user"]["created_at"]
            .as_str()
            .is_some_and(|ts| !ts.is_empty())
    );

    let stored = state.db.user_repo().find_by_email("dana@example.com")?.unwrap();
    assert_eq!(stored.name, "Dana Petrov");
    assert_eq!(stored.password, "s3cret!");
    assert_eq!(state.db.user_repo().count()?, 1);

    Ok(())
}

#[tokio::test]
async fn test_register_rejects_missing_or_empty_fields() -> anyhow::Result<()> {
    let state = AppState::in_memory()?;

    let (status, body) = call_register(
        state.clone(),
        json!({
            "name": "Eve Malory",
            "email": "eve@example.com",
            "password": ""
        }),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "All fields are required" }));

    // Absent keys behave the same as empty ones
    let (status, body) = call_register(state.clone(), json!({ "name": "Eve Malory" })).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "All fields are required" }));

    assert_eq!(state.db.user_repo().count()?, 0);

    Ok(())
}

#[tokio::test]
async fn test_register_rejects_duplicate_email() -> anyhow::Result<()> {
    let state = AppState::in_memory()?;

    let (first, _) = call_register(
        state.clone(),
        json!({
            "name": "Dana Petrov",
            "email": "dana@example.com",
            "password": "one"
        }),
    )
    .await?;
    assert_eq!(first, StatusCode::CREATED);

    let (status, body) = call_register(
        state.clone(),
        json!({
            "name": "Impostor",
            "email": "dana@example.com",
            "password": "two"
        }),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "User already exists" }));

    // The original registration is untouched
    let stored = state.db.user_repo().find_by_email("dana@example.com")?.unwrap();
    assert_eq!(stored.name, "Dana Petrov");
    assert_eq!(state.db.user_repo().count()?, 1);

    Ok(())
}

#[tokio::test]
async fn test_register_reports_storage_failures() -> anyhow::Result<()> {
    let state = AppState::in_memory()?;

    // Sabotage the schema so the lookup fails
    {
        let conn = state.db.connection();
        let conn = conn.lock().unwrap();
        conn.execute("DROP TABLE users", [])?;
    }

    let (status, body) = call_register(
        state.clone(),
        json!({
            "name": "Dana Petrov",
            "email": "dana@example.com",
            "password": "pw"
        }),
    )
    .await?;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Server Error");
    assert!(body["error"].as_str().is_some_and(|err| !err.is_empty()));

    Ok(())
}
