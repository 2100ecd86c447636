//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and the two
//! stateful widgets (session slot, flash store).

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Dataset, FlashStore, SessionStore, TransactionRepository};
use crate::services::{
    AuthService, ChatService, ClientService, ReportService, ServiceContainer, Services,
    StaffService, UploadService,
};
use crate::views::Renderer;

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub client_service: Arc<dyn ClientService>,
    pub staff_service: Arc<dyn StaffService>,
    pub upload_service: Arc<dyn UploadService>,
    pub report_service: Arc<dyn ReportService>,
    pub chat_service: Arc<dyn ChatService>,
    /// Role/section view renderer
    pub views: Arc<Renderer>,
    /// Direct transaction reads for the list endpoint
    pub transactions: Arc<dyn TransactionRepository>,
    /// The single durable session slot
    pub session: Arc<SessionStore>,
    /// Transient notifications
    pub flash: Arc<FlashStore>,
}

impl AppState {
    /// Wire the full state over one dataset. This is the recommended way
    /// to create AppState; tests inject mocks through the field struct
    /// literal instead.
    pub fn from_config(
        dataset: Arc<Dataset>,
        session: Arc<SessionStore>,
        flash: Arc<FlashStore>,
        config: &Config,
    ) -> Self {
        let services = Services::from_dataset(dataset, session.clone(), flash.clone(), config);

        Self {
            auth_service: services.auth(),
            client_service: services.clients(),
            staff_service: services.staff(),
            upload_service: services.uploads(),
            report_service: services.reports(),
            chat_service: services.chat(),
            views: services.views(),
            transactions: services.transactions(),
            session,
            flash,
        }
    }
}
