//! HTTP request handlers.

pub mod auth_handler;
pub mod chat_handler;
pub mod client_handler;
pub mod report_handler;
pub mod staff_handler;
pub mod transaction_handler;
pub mod upload_handler;
pub mod view_handler;

pub use auth_handler::auth_routes;
pub use chat_handler::chat_routes;
pub use client_handler::client_routes;
pub use report_handler::report_routes;
pub use staff_handler::staff_routes;
pub use transaction_handler::transaction_routes;
pub use upload_handler::upload_routes;
pub use view_handler::view_routes;
