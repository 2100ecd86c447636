//! Staff management service.
//!
//! Staff accounts are client-scoped. Validation stops at field presence,
//! matching passwords and email uniqueness; the password itself is
//! discarded once validated, since nothing ever checks credentials.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Permissions, Role, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{FlashLevel, FlashStore, NewUser, UserRepository};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Staff-add form content, already shape-validated by the handler
#[derive(Debug, Clone)]
pub struct AddStaff {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub department: Option<String>,
    pub position: Option<String>,
    pub permissions: Option<Permissions>,
}

/// Staff management trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StaffService: Send + Sync {
    /// Users belonging to one client (admins and staff alike)
    async fn list(&self, client_id: i64) -> AppResult<Vec<User>>;

    /// Append an approved staff user bound to the given client
    async fn add(&self, client_id: i64, staff: AddStaff) -> AppResult<User>;

    /// Remove exactly one staff account, scope-checked against the actor
    async fn delete(&self, actor: &User, id: i64) -> AppResult<()>;
}

/// Concrete implementation over the in-memory repositories
pub struct StaffManager {
    users: Arc<dyn UserRepository>,
    flash: Arc<FlashStore>,
}

impl StaffManager {
    pub fn new(users: Arc<dyn UserRepository>, flash: Arc<FlashStore>) -> Self {
        Self { users, flash }
    }
}

#[async_trait]
impl StaffService for StaffManager {
    async fn list(&self, client_id: i64) -> AppResult<Vec<User>> {
        self.users.list_by_client(client_id).await
    }

    async fn add(&self, client_id: i64, staff: AddStaff) -> AppResult<User> {
        if staff.password != staff.confirm_password {
            self.flash.push(FlashLevel::Danger, "Passwords do not match");
            return Err(AppError::validation("Passwords do not match"));
        }

        if self.users.find_by_email(&staff.email).await?.is_some() {
            self.flash
                .push(FlashLevel::Danger, "Email is already registered");
            return Err(AppError::conflict("User"));
        }

        let user = self
            .users
            .create(NewUser {
                email: staff.email,
                name: staff.name,
                role: Role::Staff,
                client_id: Some(client_id),
                is_approved: true,
                department: staff.department,
                position: staff.position,
                permissions: staff.permissions.unwrap_or_default(),
            })
            .await?;

        tracing::info!(user = user.id, client = client_id, "Staff member added");
        self.flash
            .push(FlashLevel::Success, format!("{} added to the team", user.name));
        Ok(user)
    }

    async fn delete(&self, actor: &User, id: i64) -> AppResult<()> {
        let target = self.users.find_by_id(id).await?.ok_or_not_found()?;

        if target.role != Role::Staff {
            return Err(AppError::BadRequest(
                "Only staff accounts can be removed here".to_string(),
            ));
        }

        let same_client = target
            .client_id
            .map_or(false, |client_id| actor.can_access_client(client_id));
        if !same_client {
            return Err(AppError::Forbidden);
        }

        self.users.delete(id).await?;
        tracing::info!(user = id, "Staff member removed");
        self.flash
            .push(FlashLevel::Success, format!("{} removed", target.name));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::MockUserRepository;

    fn service(repo: MockUserRepository) -> StaffManager {
        StaffManager::new(Arc::new(repo), Arc::new(FlashStore::new()))
    }

    fn request() -> AddStaff {
        AddStaff {
            name: "New Analyst".to_string(),
            email: "new@acmeretail.com".to_string(),
            password: "SecurePass123!".to_string(),
            confirm_password: "SecurePass123!".to_string(),
            department: None,
            position: None,
            permissions: None,
        }
    }

    fn staff_user(id: i64, client_id: i64) -> User {
        User {
            id,
            email: "new@acmeretail.com".to_string(),
            name: "New Analyst".to_string(),
            role: Role::Staff,
            client_id: Some(client_id),
            is_approved: true,
            last_login: None,
            department: None,
            position: None,
            permissions: Permissions::default(),
        }
    }

    #[tokio::test]
    async fn add_rejects_mismatched_passwords_before_touching_the_repo() {
        // No expectations: any repository call would panic the mock
        let repo = MockUserRepository::new();
        let mut bad = request();
        bad.confirm_password = "Different123!".to_string();

        let result = service(repo).add(1, bad).await;
        assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
    }

    #[tokio::test]
    async fn add_checks_uniqueness_then_creates() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "new@acmeretail.com")
            .returning(|_| Ok(None));
        repo.expect_create()
            .withf(|user| user.role == Role::Staff && user.client_id == Some(1))
            .returning(|_| Ok(staff_user(6, 1)));

        let user = service(repo).add(1, request()).await.unwrap();
        assert_eq!(user.id, 6);
    }

    #[tokio::test]
    async fn add_conflicts_on_an_existing_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Ok(Some(staff_user(3, 1))));

        let result = service(repo).add(1, request()).await;
        assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn delete_refuses_other_clients_staff() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(staff_user(id, 2))));

        let actor = User {
            role: Role::ClientAdmin,
            client_id: Some(1),
            ..staff_user(2, 1)
        };
        let result = service(repo).delete(&actor, 3).await;
        assert!(matches!(result.unwrap_err(), AppError::Forbidden));
    }
}
