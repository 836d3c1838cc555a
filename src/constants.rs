//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Requests taking longer than this are aborted
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Largest accepted request body in bytes
pub const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;

/// Default log output format ("pretty" or "json")
pub const DEFAULT_LOG_FORMAT: &str = "pretty";

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// SOLVE TIMES
// =============================================================================

/// Literal text of a "did not finish" attempt
pub const DNF_TEXT: &str = "DNF";

/// Literal text of a "did not start" attempt
pub const DNS_TEXT: &str = "DNS";

/// Milliseconds per clock group, seconds first
pub const CLOCK_UNIT_MS: [u64; 4] = [1_000, 60_000, 3_600_000, 86_400_000];

/// Finite times at or above this many milliseconds are never ranked (one year)
pub const VERY_SLOW_MS: u64 = 365 * 86_400_000;

/// Maximum number of attempts a result row can hold
pub const MAX_ATTEMPTS: usize = 5;

// =============================================================================
// EVENTS
// =============================================================================

/// Icon code identifying the Fewest Moves Challenge event
pub const FMC_ICON_CODE: &str = "333fm";

/// Face-turn tokens accepted in a submitted FMC solution
pub const FMC_SOLUTION_MOVES: [&str; 18] = [
    "U", "U'", "U2", "D", "D'", "D2", "R", "R'", "R2", "L", "L'", "L2", "F", "F'", "F2", "B",
    "B'", "B2",
];

/// Result row statuses as stored in the database
pub mod result_statuses {
    pub const VISIBLE: &str = "visible";
    pub const PENDING: &str = "pending";
    pub const APPROVED: &str = "approved";
    pub const DENIED: &str = "denied";
}

/// Rankings types accepted by the rankings endpoint
pub mod ranking_types {
    pub const SINGLE: &str = "single";
    pub const AVERAGE: &str = "average";
}

// =============================================================================
// API VERSIONING
// =============================================================================

/// Current API version
pub const API_VERSION: &str = "v1";

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: u32 = 500;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum number of solves accepted in one request
pub const MAX_SUBMITTED_SOLVES: u64 = MAX_ATTEMPTS as u64;

/// Maximum length of a single solve string
pub const MAX_SOLVE_TEXT_LENGTH: u64 = 1024;

/// Maximum length of a scramble or solution algorithm
pub const MAX_ALGORITHM_LENGTH: u64 = 2048;

/// Maximum length of a format code
pub const MAX_FORMAT_CODE_LENGTH: u64 = 16;
