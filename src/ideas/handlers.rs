use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::{
    auth::jwt::AuthUser,
    error::ApiError,
    ideas::repo::{Idea, IdeaStatus},
    response::ApiResponse,
    state::AppState,
    validation::validate_idea_input,
};

#[instrument(skip(state))]
pub async fn list_ideas(State(state): State<AppState>) -> Result<Json<ApiResponse>, ApiError> {
    let ideas = Idea::find_all(&state.db).await?;
    let count = ideas.len();
    Ok(Json(ApiResponse::format(
        true,
        Some(to_payload(ideas)?),
        "",
        Some(count),
    )))
}

#[instrument(skip(state))]
pub async fn get_idea(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse>, ApiError> {
    let idea = match id.parse::<i64>() {
        Ok(id) => Idea::find_by_id(&state.db, id).await?,
        Err(_) => None,
    };
    let Some(idea) = idea else {
        return Err(ApiError::not_found("Idea not found"));
    };
    Ok(Json(ApiResponse::format(true, Some(to_payload(idea)?), "", None)))
}

#[instrument(skip(state, payload))]
pub async fn create_idea(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<ApiResponse>), ApiError> {
    let (title, description, status) = idea_fields(&payload)?;
    let idea = Idea::create(&state.db, title, description, status, Some(user.id)).await?;

    info!(idea_id = idea.id, user_id = user.id, "idea created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::format(
            true,
            Some(to_payload(idea)?),
            "Idea created successfully",
            None,
        )),
    ))
}

#[instrument(skip(state, payload))]
pub async fn update_idea(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<ApiResponse>, ApiError> {
    let (title, description, status) = idea_fields(&payload)?;
    let updated = match id.parse::<i64>() {
        Ok(id) => Idea::update(&state.db, id, title, description, status).await?,
        Err(_) => None,
    };
    let Some(idea) = updated else {
        return Err(ApiError::not_found("Idea not found"));
    };

    info!(idea_id = idea.id, "idea updated");
    Ok(Json(ApiResponse::format(
        true,
        Some(to_payload(idea)?),
        "Idea updated successfully",
        None,
    )))
}

#[instrument(skip(state))]
pub async fn delete_idea(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse>, ApiError> {
    let deleted = match id.parse::<i64>() {
        Ok(id) => Idea::delete(&state.db, id).await?,
        Err(_) => false,
    };
    if !deleted {
        return Err(ApiError::not_found("Idea not found"));
    }

    info!(idea_id = %id, "idea deleted");
    Ok(Json(ApiResponse::format(
        true,
        None,
        "Idea deleted successfully",
        None,
    )))
}

/// Shared create/update payload handling: the title presence pre-check comes
/// first, then the accumulated field validation.
fn idea_fields(payload: &Value) -> Result<(&str, Option<&str>, Option<IdeaStatus>), ApiError> {
    let title = payload
        .get("title")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty());
    let Some(title) = title else {
        warn!("idea payload missing title");
        return Err(ApiError::bad_request("Title is required"));
    };

    let report = validate_idea_input(payload);
    if !report.is_valid {
        warn!(errors = ?report.errors, "idea payload rejected");
        return Err(ApiError::bad_request(report.errors.join(", ")));
    }

    let description = payload.get("description").and_then(Value::as_str);
    let status = payload
        .get("status")
        .and_then(Value::as_str)
        .and_then(IdeaStatus::parse);
    Ok((title, description, status))
}

fn to_payload<T: serde::Serialize>(value: T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(ApiError::internal)
}
