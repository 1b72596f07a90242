use axum::{routing::get, Router};

use crate::state::AppState;

pub mod catalog;
pub mod handlers;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/skills", get(handlers::list_skills))
        .route("/skills/:id", get(handlers::get_skill))
        .route(
            "/skills/category/:category",
            get(handlers::skills_by_category),
        )
}
