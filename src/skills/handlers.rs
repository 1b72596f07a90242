use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::{error, instrument};

use crate::{
    error::ApiError,
    response::ApiResponse,
    skills::catalog::{self, SkillFilters},
    state::AppState,
};

#[instrument(skip(state))]
pub async fn list_skills(
    State(state): State<AppState>,
    Query(filters): Query<SkillFilters>,
) -> Result<Json<ApiResponse>, ApiError> {
    let skills = catalog::load(&state.config.skills_path)
        .await
        .map_err(read_failed)?;
    let skills = catalog::apply(skills, &filters);
    let count = skills.len();
    Ok(Json(ApiResponse::format(
        true,
        Some(serde_json::to_value(skills).map_err(ApiError::internal)?),
        "",
        Some(count),
    )))
}

#[instrument(skip(state))]
pub async fn get_skill(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse>, ApiError> {
    let skills = catalog::load(&state.config.skills_path)
        .await
        .map_err(read_failed)?;
    let skill = id
        .parse::<i64>()
        .ok()
        .and_then(|id| skills.into_iter().find(|s| s.id == id));
    let Some(skill) = skill else {
        return Err(ApiError::not_found("Skill not found"));
    };
    Ok(Json(ApiResponse::format(
        true,
        Some(serde_json::to_value(skill).map_err(ApiError::internal)?),
        "",
        None,
    )))
}

#[instrument(skip(state))]
pub async fn skills_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<ApiResponse>, ApiError> {
    let skills = catalog::load(&state.config.skills_path)
        .await
        .map_err(read_failed)?;
    let wanted = category.to_lowercase();
    let matched: Vec<_> = skills
        .into_iter()
        .filter(|s| s.category.to_lowercase() == wanted)
        .collect();
    let count = matched.len();
    Ok(Json(ApiResponse::format(
        true,
        Some(serde_json::to_value(matched).map_err(ApiError::internal)?),
        "",
        Some(count),
    )))
}

fn read_failed(e: anyhow::Error) -> ApiError {
    error!(error = %e, "skills file read failed");
    ApiError::internal("Error reading skills data")
}
