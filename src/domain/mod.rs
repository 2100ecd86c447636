//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod chat;
pub mod client;
pub mod report;
pub mod transaction;
pub mod user;

pub use chat::{ChatMessage, Sender};
pub use client::{Client, ClientResponse};
pub use report::{Report, ReportKind};
pub use transaction::Transaction;
pub use user::{Permissions, Role, User, UserResponse};
