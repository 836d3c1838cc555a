//! Competitor handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Competitor routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/{competitor_id}/personal-bests", get(handler::personal_bests))
}
