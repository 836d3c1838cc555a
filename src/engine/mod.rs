//! Results and rankings computation
//!
//! Everything under this module is synchronous and free of I/O: callers
//! fetch rows and reference data, the engine turns them into values.
//!
//! - [`duration`]: solve time text codec and the DNF/DNS sentinels
//! - [`cube`]: facelet cube used to check FMC solutions
//! - [`format`] and [`aggregate`]: singles and averages per competition format
//! - [`rankings`] and [`records`]: leaderboards and WR/CR/NR/PB tags

pub mod aggregate;
pub mod cube;
pub mod duration;
pub mod format;
pub mod rankings;
pub mod records;

use uuid::Uuid;

pub use aggregate::{EventKind, EventScoring};
pub use cube::{validate_fmc, Cube};
pub use duration::SolveTime;
pub use format::{Aggregation, Format};
pub use rankings::{annotate_times, build_rankings, merge_non_unique, RankingKind, RankingsEntry};
pub use records::{RecordTag, ReferenceBests};

/// Errors that abort a computation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Format code does not end in an attempt count
    #[error("Format code has no attempt count: {0:?}")]
    MissingAttemptCount(String),

    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    #[error("Unknown event: {0}")]
    UnknownEvent(String),

    /// An FMC solution was submitted for a competition with no scrambles on file
    #[error("No scrambles for competition {0}")]
    MissingScrambles(Uuid),

    #[error("Unknown ranking type: {0}")]
    UnknownRankingKind(String),
}
