//! Competition results handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Competition routes
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/{competition_id}/events/{event_id}/results",
        get(handler::competition_results).post(handler::save_solves),
    )
}
