//! Database repositories
//!
//! Repositories handle direct database operations for each entity.

pub mod competition_repo;
pub mod event_repo;
pub mod result_repo;
pub mod scramble_repo;

pub use competition_repo::CompetitionRepository;
pub use event_repo::EventRepository;
pub use result_repo::{ResultFilter, ResultRepository};
pub use scramble_repo::ScrambleRepository;
