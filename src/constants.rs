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

// =============================================================================
// CODEFORCES API
// =============================================================================

/// Default base URL for the Codeforces REST API
pub const DEFAULT_CF_API_BASE_URL: &str = "https://codeforces.com/api";

/// Default timeout for upstream requests in seconds
pub const DEFAULT_CF_REQUEST_TIMEOUT_SECONDS: u64 = 15;

/// Canonical verdict the Codeforces API uses for an accepted submission
pub const ACCEPTED_VERDICT: &str = "OK";

// =============================================================================
// HANDLE VALIDATION
// =============================================================================

/// Handle minimum length
pub const MIN_HANDLE_LENGTH: usize = 3;

/// Handle maximum length
pub const MAX_HANDLE_LENGTH: usize = 24;

// =============================================================================
// RANK PERCENTILE TABLE
// =============================================================================

/// Codeforces rating thresholds mapped to "top X%" tier labels.
///
/// Evaluated top-down, first match wins, so the table must stay in strictly
/// descending rating order. A rating of exactly zero means "unrated" and is
/// handled before this table is consulted.
pub const RANK_PERCENTILES: &[(i64, &str)] = &[
    (3000, "0.1"), // Legendary Grandmaster
    (2600, "0.3"), // International Grandmaster
    (2400, "1"),   // Grandmaster
    (2300, "2"),   // International Master
    (2100, "5"),   // Master
    (1900, "10"),  // Candidate Master
    (1600, "20"),  // Expert
    (1400, "50"),  // Specialist
    (1200, "70"),  // Pupil
];

/// Tier label for ratings below every table threshold (Newbie)
pub const RANK_PERCENTILE_FLOOR: &str = "100";

/// Label for users without a rating
pub const UNRATED_LABEL: &str = "Unrated";

// =============================================================================
// RATE LIMITING
// =============================================================================

/// Rate limiting configuration
pub mod rate_limits {
    /// Stats endpoint - max requests per window
    pub const STATS_MAX_REQUESTS: u32 = 10;
    /// Stats endpoint - window in seconds
    pub const STATS_WINDOW_SECS: u64 = 60;
}

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// DATE HANDLING
// =============================================================================

/// ISO-8601 calendar date format used for all date keys
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Year-month prefix length of an ISO date string ("YYYY-MM")
pub const MONTH_PREFIX_LEN: usize = 7;
