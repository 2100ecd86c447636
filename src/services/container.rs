//! Service container - centralized service wiring.
//!
//! Builds the repository stores over the shared dataset once and hands out
//! `Arc`s to the services that orchestrate them.

use std::sync::Arc;
use std::time::Duration;

use super::{
    AuthService, Authenticator, ChatBoard, ChatService, ClientManager, ClientService, ReportDesk,
    ReportService, StaffManager, StaffService, UploadService, UploadSimulator,
};
use crate::config::Config;
use crate::infra::{
    ChatStore, ClientStore, Dataset, FlashStore, ReportStore, SessionStore,
    TransactionRepository, TransactionStore, UserStore,
};
use crate::views::Renderer;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;
    fn clients(&self) -> Arc<dyn ClientService>;
    fn staff(&self) -> Arc<dyn StaffService>;
    fn uploads(&self) -> Arc<dyn UploadService>;
    fn reports(&self) -> Arc<dyn ReportService>;
    fn chat(&self) -> Arc<dyn ChatService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    client_service: Arc<dyn ClientService>,
    staff_service: Arc<dyn StaffService>,
    upload_service: Arc<dyn UploadService>,
    report_service: Arc<dyn ReportService>,
    chat_service: Arc<dyn ChatService>,
    renderer: Arc<Renderer>,
    transactions: Arc<dyn TransactionRepository>,
}

impl Services {
    /// Wire every service over one shared dataset, session slot and
    /// flash store
    pub fn from_dataset(
        dataset: Arc<Dataset>,
        session: Arc<SessionStore>,
        flash: Arc<FlashStore>,
        config: &Config,
    ) -> Self {
        let users = Arc::new(UserStore::new(dataset.clone()));
        let clients = Arc::new(ClientStore::new(dataset.clone()));
        let transactions = Arc::new(TransactionStore::new(dataset.clone()));
        let reports = Arc::new(ReportStore::new(dataset.clone()));
        let chat = Arc::new(ChatStore::new(dataset));
        let delay = Duration::from_millis(config.simulated_delay_ms);

        let auth_service = Arc::new(Authenticator::new(
            users.clone(),
            clients.clone(),
            session,
            flash.clone(),
        ));
        let client_service = Arc::new(ClientManager::new(
            clients.clone(),
            users.clone(),
            transactions.clone(),
            reports.clone(),
            chat.clone(),
            flash.clone(),
        ));
        let staff_service = Arc::new(StaffManager::new(users.clone(), flash.clone()));
        let upload_service = Arc::new(UploadSimulator::new(
            transactions.clone(),
            clients.clone(),
            flash.clone(),
            delay,
        ));
        let report_service = Arc::new(ReportDesk::new(reports.clone(), flash, delay));
        let chat_service = Arc::new(ChatBoard::new(chat.clone(), delay));
        let renderer = Arc::new(Renderer::new(
            clients,
            users,
            transactions.clone(),
            reports,
            chat,
        ));

        Self {
            auth_service,
            client_service,
            staff_service,
            upload_service,
            report_service,
            chat_service,
            renderer,
            transactions,
        }
    }

    /// The view renderer wired over the same repositories
    pub fn views(&self) -> Arc<Renderer> {
        self.renderer.clone()
    }

    /// Direct transaction reads for the paginated list endpoint
    pub fn transactions(&self) -> Arc<dyn TransactionRepository> {
        self.transactions.clone()
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn clients(&self) -> Arc<dyn ClientService> {
        self.client_service.clone()
    }

    fn staff(&self) -> Arc<dyn StaffService> {
        self.staff_service.clone()
    }

    fn uploads(&self) -> Arc<dyn UploadService> {
        self.upload_service.clone()
    }

    fn reports(&self) -> Arc<dyn ReportService> {
        self.report_service.clone()
    }

    fn chat(&self) -> Arc<dyn ChatService> {
        self.chat_service.clone()
    }
}
