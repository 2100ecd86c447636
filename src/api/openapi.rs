//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{
    auth_handler, chat_handler, client_handler, report_handler, staff_handler,
    transaction_handler, upload_handler, view_handler,
};
use crate::domain::{
    ChatMessage, ClientResponse, Permissions, Report, ReportKind, Role, Sender, Transaction,
    UserResponse,
};
use crate::infra::{FlashLevel, FlashView};

/// OpenAPI documentation for the fraud platform demo console
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fraudboard",
        version = "0.1.0",
        description = "Demo console backend for a fictitious fraud detection platform. \
                       All data is in-memory sample data; uploads, reports and chat are simulated.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        auth_handler::logout,
        auth_handler::me,
        // View endpoints
        view_handler::render_section,
        view_handler::dashboard,
        view_handler::notifications,
        // Client management
        client_handler::list_clients,
        client_handler::add_client,
        client_handler::approve_client,
        client_handler::disapprove_client,
        client_handler::delete_client,
        // Staff management
        staff_handler::list_staff,
        staff_handler::add_staff,
        staff_handler::delete_staff,
        // Data and simulated actions
        transaction_handler::list_transactions,
        upload_handler::upload,
        report_handler::list_reports,
        report_handler::generate_report,
        report_handler::download_report,
        chat_handler::history,
        chat_handler::send_message,
    ),
    components(
        schemas(
            // Domain types
            Role,
            Permissions,
            UserResponse,
            ClientResponse,
            Transaction,
            Report,
            ReportKind,
            ChatMessage,
            Sender,
            FlashLevel,
            FlashView,
            // Request types
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            client_handler::AddClientRequest,
            staff_handler::AddStaffRequest,
            upload_handler::UploadRequest,
            chat_handler::SendMessageRequest,
        )
    ),
    tags(
        (name = "Authentication", description = "Mock login, registration and the session slot"),
        (name = "Views", description = "Role-keyed section rendering"),
        (name = "Clients", description = "Client approval and lifecycle"),
        (name = "Staff", description = "Client team management"),
        (name = "Transactions", description = "Sample transaction data"),
        (name = "Uploads", description = "Simulated file ingestion"),
        (name = "Reports", description = "Simulated generation and canned downloads"),
        (name = "Chat", description = "Scripted assistant")
    )
)]
pub struct ApiDoc;
