use crate::state::AppState;
use axum::Router;

pub mod extractors;
pub mod handlers;
pub mod repo;
pub mod repo_types;
pub mod secret;
pub mod services;

pub fn router() -> Router<AppState> {
    handlers::page_routes()
}
