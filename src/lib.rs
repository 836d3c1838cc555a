//! CubeRank - Speedcubing Results and Rankings
//!
//! This library turns raw solve records into singles, averages,
//! leaderboards and record tags, and serves them over HTTP.
//!
//! # Features
//!
//! - Solve time codec with DNF/DNS sentinels
//! - Virtual 3x3x3 cube for checking Fewest Moves solutions
//! - Best-of, mean-of and trimmed-mean formats
//! - World, continental, national and personal record tags
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Engine**: Pure results computation, no I/O
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models

pub mod app;
pub mod config;
pub mod constants;
pub mod db;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;

// Re-export commonly used types
pub use app::build_router;
pub use config::Config;
pub use engine::{EngineError, SolveTime};
pub use error::{AppError, AppResult};
pub use state::AppState;
