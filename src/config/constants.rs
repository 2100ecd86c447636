//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Pagination
// =============================================================================

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Maximum allowed items per page to prevent excessive scans
pub const MAX_PAGE_SIZE: u64 = 100;

/// Default starting page number (1-indexed)
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

/// Hard cap on transaction rows returned by list views
pub const MAX_TRANSACTION_ROWS: usize = 200;

/// Number of entries in "recent" dashboard lists
pub const RECENT_LIST_LIMIT: usize = 5;

// =============================================================================
// User Roles
// =============================================================================

/// Platform operator with access to every client
pub const ROLE_SUPER_ADMIN: &str = "super_admin";

/// Administrator of a single client organization
pub const ROLE_CLIENT_ADMIN: &str = "client_admin";

/// Client-scoped user with limited permissions
pub const ROLE_STAFF: &str = "staff";

/// All valid role values
pub const VALID_ROLES: &[&str] = &[ROLE_SUPER_ADMIN, ROLE_CLIENT_ADMIN, ROLE_STAFF];

/// Check if a role value is valid
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Session
// =============================================================================

/// Default path of the persisted current-user snapshot
pub const DEFAULT_SESSION_FILE: &str = "session.json";

// =============================================================================
// Simulated work
// =============================================================================

/// Delay before a simulated action (upload, report, chat reply) completes.
/// There is no real I/O behind these actions; the timer stands in for it.
pub const DEFAULT_SIMULATED_DELAY_MS: u64 = 1500;

// =============================================================================
// Notifications
// =============================================================================

/// Flash messages expire this many seconds after creation
pub const FLASH_TTL_SECONDS: u64 = 5;

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Minimum name length requirement
pub const MIN_NAME_LENGTH: u64 = 1;
