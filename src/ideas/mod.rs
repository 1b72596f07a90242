use axum::{routing::get, Router};

use crate::state::AppState;

pub mod handlers;
pub mod repo;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/ideas",
            get(handlers::list_ideas).post(handlers::create_idea),
        )
        .route(
            "/ideas/:id",
            get(handlers::get_idea)
                .put(handlers::update_idea)
                .delete(handlers::delete_idea),
        )
}
