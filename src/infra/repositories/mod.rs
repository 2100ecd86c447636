//! Repository traits and their in-memory implementations.
//!
//! Each trait fronts one dataset collection the way a database repository
//! would, so services depend on abstractions and tests can mock them.

mod chat_repository;
mod client_repository;
mod report_repository;
mod transaction_repository;
mod user_repository;

pub use chat_repository::{ChatRepository, ChatStore};
pub use client_repository::{ClientRepository, ClientStore, NewClient};
pub use report_repository::{NewReport, ReportRepository, ReportStore};
pub use transaction_repository::{NewTransaction, TransactionRepository, TransactionStore};
pub use user_repository::{NewUser, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use chat_repository::MockChatRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use client_repository::MockClientRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use report_repository::MockReportRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use transaction_repository::MockTransactionRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
