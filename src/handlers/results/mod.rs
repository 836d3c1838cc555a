//! Stateless result computation handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::post, Router};

use crate::state::AppState;

/// Result computation routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/results/compute", post(handler::compute_result))
        .route("/fmc/validate", post(handler::validate_fmc))
}
