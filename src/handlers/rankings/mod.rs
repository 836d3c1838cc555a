//! Event and rankings handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Rankings routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_events))
        .route("/{event_id}/rankings", get(handler::event_rankings))
}
