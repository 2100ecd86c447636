//! Application services layer - the console's action handlers.
//!
//! Services validate trivial constraints, mutate the in-memory collections
//! through repository traits, and push flash feedback. Simulated work
//! (uploads, reports, chat replies) is a spawned timer that mutates the
//! dataset when it fires.

mod auth_service;
mod chat_service;
mod client_service;
pub mod container;
mod report_service;
mod staff_service;
mod upload_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator, Registration};
pub use chat_service::{ChatBoard, ChatService};
pub use client_service::{ClientManager, ClientService};
pub use report_service::{ReportDesk, ReportDownload, ReportService};
pub use staff_service::{AddStaff, StaffManager, StaffService};
pub use upload_service::{UploadService, UploadSimulator};

#[cfg(any(test, feature = "test-utils"))]
pub use auth_service::MockAuthService;
#[cfg(any(test, feature = "test-utils"))]
pub use chat_service::MockChatService;
#[cfg(any(test, feature = "test-utils"))]
pub use client_service::MockClientService;
#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
#[cfg(any(test, feature = "test-utils"))]
pub use report_service::MockReportService;
#[cfg(any(test, feature = "test-utils"))]
pub use staff_service::MockStaffService;
#[cfg(any(test, feature = "test-utils"))]
pub use upload_service::MockUploadService;
