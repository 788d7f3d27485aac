use std::sync::Arc;

use crate::error::UserResult;
use crate::models::{CreateUser, ListParams, Pagination, UpdateUser, User, UserPage};
use crate::repository::UserRepository;

/// Service layer for User business logic
///
/// Uniqueness and id assignment live in the repository; the service only
/// shapes requests and responses around it.
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List one page of users together with the live total
    pub async fn list_users(&self, params: ListParams) -> UserResult<UserPage> {
        let window = Pagination::from(params);
        let data = self.repository.list(params.page, params.size).await?;
        let total = self.repository.count().await?;

        Ok(UserPage {
            data,
            page: window.page,
            size: window.size,
            total,
        })
    }

    /// Create a new user
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        self.repository.create(input.username, input.age).await
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: u64) -> UserResult<User> {
        self.repository.get(id).await
    }

    /// Get a user by username
    pub async fn get_user_by_username(&self, username: &str) -> UserResult<User> {
        self.repository.get_by_username(username).await
    }

    /// Update a user
    pub async fn update_user(&self, id: u64, input: UpdateUser) -> UserResult<User> {
        self.repository.update(id, input).await
    }

    /// Delete a user, returning what was removed
    pub async fn delete_user(&self, id: u64) -> UserResult<User> {
        self.repository.delete(id).await
    }
}
