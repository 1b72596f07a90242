use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginResponse, UserPublic},
        jwt::{JwtKeys, TokenUser},
        password::{hash_password, verify_password},
        repo::User,
    },
    error::ApiError,
    response::ApiResponse,
    state::AppState,
    validation::validate_user_input,
};

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<ApiResponse>), ApiError> {
    let report = validate_user_input(&payload);
    if !report.is_valid {
        warn!(errors = ?report.errors, "register payload rejected");
        return Err(ApiError::bad_request(report.errors.join(", ")));
    }

    // Both fields are known to be non-empty strings after validation.
    let username = payload["username"].as_str().unwrap_or_default();
    let password = payload["password"].as_str().unwrap_or_default();

    if User::find_by_username(&state.db, username).await?.is_some() {
        warn!(username, "username already registered");
        return Err(ApiError::bad_request("User already exists"));
    }

    let hash = hash_password(password).map_err(|e| {
        error!(error = %e, "hash_password failed");
        ApiError::internal(e)
    })?;

    let user = User::create(&state.db, username, &hash).await.map_err(|e| {
        error!(error = %e, "create user failed");
        ApiError::internal(e)
    })?;

    info!(user_id = user.id, username = %user.username, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::format(
            true,
            Some(json!({ "id": user.id, "username": user.username })),
            "User registered successfully",
            None,
        )),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<LoginResponse>, ApiError> {
    let username = payload
        .get("username")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let password = payload
        .get("password")
        .and_then(Value::as_str)
        .unwrap_or_default();
    if username.is_empty() || password.is_empty() {
        return Err(ApiError::bad_request("Username and password are required"));
    }

    let user = User::find_by_username(&state.db, username)
        .await?
        .ok_or_else(|| {
            warn!(username, "login unknown username");
            ApiError::unauthorized("Invalid credentials")
        })?;

    if !verify_password(password, &user.password_hash) {
        warn!(user_id = user.id, "login invalid password");
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys
        .sign(TokenUser {
            id: user.id,
            username: user.username.clone(),
        })
        .map_err(|e| {
            error!(error = %e, "jwt sign failed");
            ApiError::internal(e)
        })?;

    info!(user_id = user.id, username = %user.username, "user logged in");
    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".into(),
        token,
        user: UserPublic {
            id: user.id,
            username: user.username,
        },
    }))
}
