//! Infrastructure layer
//!
//! Everything that outlives a single request:
//! - The in-memory sample dataset and its repositories
//! - The durable session slot (the only thing persisted)
//! - The transient flash store

pub mod dataset;
pub mod flash;
pub mod repositories;
pub mod session;

pub use dataset::Dataset;
pub use flash::{FlashLevel, FlashStore, FlashView};
pub use repositories::{
    ChatRepository, ChatStore, ClientRepository, ClientStore, NewClient, NewReport,
    NewTransaction, NewUser, ReportRepository, ReportStore, TransactionRepository,
    TransactionStore, UserRepository, UserStore,
};
pub use session::SessionStore;
