//! Authentication service (mock).
//!
//! Login looks the user up by email only; the submitted password is
//! accepted without comparison — there is no credential storage anywhere
//! in the platform. "Session" means the single durable snapshot slot.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{Permissions, Role, User};
use crate::errors::{AppError, AppResult};
use crate::infra::{
    ClientRepository, FlashLevel, FlashStore, NewClient, NewUser, SessionStore, UserRepository,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Registration form content, already shape-validated by the handler
#[derive(Debug, Clone)]
pub struct Registration {
    pub company_name: String,
    pub industry: String,
    pub name: String,
    pub email: String,
}

/// Authentication service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Log in by email; the password argument is deliberately ignored
    async fn login(&self, email: &str, password: &str) -> AppResult<User>;

    /// Create an unapproved client plus its client_admin; never logs in
    async fn register(&self, registration: Registration) -> AppResult<User>;

    /// Clear the durable session slot
    fn logout(&self) -> AppResult<()>;

    /// The persisted current-user snapshot, if any
    fn current_user(&self) -> Option<User>;
}

/// Concrete implementation over the in-memory dataset and session slot
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    clients: Arc<dyn ClientRepository>,
    session: Arc<SessionStore>,
    flash: Arc<FlashStore>,
}

impl Authenticator {
    pub fn new(
        users: Arc<dyn UserRepository>,
        clients: Arc<dyn ClientRepository>,
        session: Arc<SessionStore>,
        flash: Arc<FlashStore>,
    ) -> Self {
        Self {
            users,
            clients,
            session,
            flash,
        }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, email: &str, _password: &str) -> AppResult<User> {
        let user = match self.users.find_by_email(email).await? {
            Some(user) => user,
            None => {
                self.flash.push(FlashLevel::Danger, "Invalid credentials");
                return Err(AppError::InvalidCredentials);
            }
        };

        if !user.is_approved {
            self.flash
                .push(FlashLevel::Warning, "Account is awaiting approval");
            return Err(AppError::PendingApproval);
        }

        let user = self
            .users
            .record_login(user.id, Utc::now().date_naive())
            .await?;

        // The snapshot is written once here; later dataset mutations do not
        // refresh it (see infra::session).
        self.session.set(&user)?;
        tracing::info!(email = %user.email, role = %user.role, "User logged in");
        self.flash
            .push(FlashLevel::Success, format!("Welcome back, {}", user.name));
        Ok(user)
    }

    async fn register(&self, registration: Registration) -> AppResult<User> {
        if self
            .users
            .find_by_email(&registration.email)
            .await?
            .is_some()
        {
            self.flash
                .push(FlashLevel::Danger, "Email is already registered");
            return Err(AppError::conflict("User"));
        }

        let client = self
            .clients
            .create(NewClient {
                name: registration.company_name,
                industry: registration.industry,
                is_approved: false,
                registration_date: Utc::now().date_naive(),
            })
            .await?;

        // The very first account on an empty platform becomes the operator
        let bootstrap = self.users.count().await? == 0;
        let (role, is_approved) = if bootstrap {
            (Role::SuperAdmin, true)
        } else {
            (Role::ClientAdmin, false)
        };

        let user = self
            .users
            .create(NewUser {
                email: registration.email,
                name: registration.name,
                role,
                client_id: Some(client.id),
                is_approved,
                department: None,
                position: None,
                permissions: Permissions::all(),
            })
            .await?;

        tracing::info!(email = %user.email, client = client.id, "Registration received");
        self.flash.push(
            FlashLevel::Info,
            if bootstrap {
                "Platform operator account created; you can log in now"
            } else {
                "Registration received; your account is pending approval"
            },
        );
        Ok(user)
    }

    fn logout(&self) -> AppResult<()> {
        self.session.clear()?;
        self.flash.push(FlashLevel::Info, "Logged out");
        Ok(())
    }

    fn current_user(&self) -> Option<User> {
        self.session.current()
    }
}
