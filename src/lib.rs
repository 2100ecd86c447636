//! Fraudboard - demo console backend for a fictitious fraud detection
//! platform.
//!
//! Serves role-based views over mock in-memory sample data. There is no
//! real authentication, no real fraud detection and no real file handling;
//! uploads, reports and chat replies are simulated with fixed timers.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities (users, clients, transactions, reports, chat)
//! - **services**: Action handlers (auth, approvals, simulated work)
//! - **infra**: Dataset, session slot, flash store, repositories
//! - **views**: Role/section-keyed view rendering
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared types (pagination, responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server over the seeded sample dataset
//! cargo run -- serve
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;
pub mod views;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Role, User};
pub use errors::{AppError, AppResult};
pub use infra::{Dataset, FlashStore, SessionStore};
