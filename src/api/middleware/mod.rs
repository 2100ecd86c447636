//! API middleware.

mod auth;

pub use auth::{require_super_admin, require_team_manager, session_middleware, CurrentUser};
