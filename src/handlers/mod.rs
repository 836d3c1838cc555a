//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod competitions;
pub mod competitors;
pub mod health;
pub mod rankings;
pub mod results;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(results::routes())
        .nest("/events", rankings::routes())
        .nest("/competitions", competitions::routes())
        .nest("/competitors", competitors::routes())
}
