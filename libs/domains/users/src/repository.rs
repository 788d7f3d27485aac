use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{Pagination, UpdateUser, User};

/// Repository trait for User storage
///
/// The repository is the sole authority for user identity and username
/// uniqueness: it assigns ids and rejects duplicate usernames itself, so
/// callers never need a separate check-then-write.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List one page of users in store order. Missing or non-positive
    /// `page`/`size` fall back to 1 and 10.
    async fn list(&self, page: Option<i64>, size: Option<i64>) -> UserResult<Vec<User>>;

    /// Get a user by ID
    async fn get(&self, id: u64) -> UserResult<User>;

    /// Get a user through the username index
    async fn get_by_username(&self, username: &str) -> UserResult<User>;

    /// Create a user, assigning the next id. Rejects a blank username or a
    /// negative age; username length is not limited here.
    async fn create(&self, username: String, age: i64) -> UserResult<User>;

    /// Apply a partial update
    async fn update(&self, id: u64, changes: UpdateUser) -> UserResult<User>;

    /// Delete a user, returning the removed record
    async fn delete(&self, id: u64) -> UserResult<User>;

    /// Count live users
    async fn count(&self) -> UserResult<usize>;
}

/// Primary map, username index and id counter, always locked together.
#[derive(Debug, Default)]
struct UserIndex {
    by_id: HashMap<u64, User>,
    by_username: HashMap<String, u64>,
    /// Last id handed out; 0 means none yet.
    last_id: u64,
}

impl UserIndex {
    fn allocate_id(last_id: &mut u64) -> u64 {
        *last_id += 1;
        *last_id
    }

    /// Both maps describe exactly the same set of users.
    fn is_consistent(&self) -> bool {
        self.by_id.len() == self.by_username.len()
            && self.by_username.iter().all(|(username, id)| {
                self.by_id
                    .get(id)
                    .is_some_and(|user| user.id == *id && &user.username == username)
            })
    }
}

/// In-memory implementation of UserRepository
///
/// One `RwLock` guards both maps: reads share the lock and always see a
/// consistent pair of maps, every mutation checks and commits under the write
/// lock, so two writers racing for the same username cannot both win.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    index: Arc<RwLock<UserIndex>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn is_blank(username: &str) -> bool {
    username.trim().is_empty()
}

fn validate_age(age: i64) -> UserResult<()> {
    if age < 0 {
        return Err(UserError::Validation(format!(
            "age must be non-negative, got {}",
            age
        )));
    }
    Ok(())
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self, page: Option<i64>, size: Option<i64>) -> UserResult<Vec<User>> {
        let window = Pagination::resolve(page, size);
        let index = self.index.read().await;

        Ok(index
            .by_id
            .values()
            .skip(window.offset())
            .take(window.size)
            .cloned()
            .collect())
    }

    async fn get(&self, id: u64) -> UserResult<User> {
        let index = self.index.read().await;
        index.by_id.get(&id).cloned().ok_or(UserError::NotFound(id))
    }

    async fn get_by_username(&self, username: &str) -> UserResult<User> {
        let index = self.index.read().await;
        index
            .by_username
            .get(username)
            .and_then(|id| index.by_id.get(id))
            .cloned()
            .ok_or_else(|| UserError::UsernameNotFound(username.to_string()))
    }

    async fn create(&self, username: String, age: i64) -> UserResult<User> {
        if is_blank(&username) {
            return Err(UserError::Validation(
                "username must not be empty".to_string(),
            ));
        }
        validate_age(age)?;

        let mut guard = self.index.write().await;
        let UserIndex {
            by_id,
            by_username,
            last_id,
        } = &mut *guard;

        let slot = match by_username.entry(username) {
            Entry::Occupied(taken) => {
                tracing::debug!(username = %taken.key(), "Rejected create: username taken");
                return Err(UserError::Conflict(taken.key().clone()));
            }
            Entry::Vacant(slot) => slot,
        };

        let id = UserIndex::allocate_id(last_id);
        let user = User {
            id,
            username: slot.key().clone(),
            age,
        };
        slot.insert(id);
        by_id.insert(id, user.clone());
        debug_assert!(guard.is_consistent());

        tracing::info!(user_id = user.id, username = %user.username, "Created user");
        Ok(user)
    }

    async fn update(&self, id: u64, changes: UpdateUser) -> UserResult<User> {
        let mut guard = self.index.write().await;
        let UserIndex {
            by_id, by_username, ..
        } = &mut *guard;

        let user = by_id.get_mut(&id).ok_or(UserError::NotFound(id))?;

        if let Some(age) = changes.age {
            validate_age(age)?;
        }

        let rename = changes
            .username
            .filter(|username| !is_blank(username) && *username != user.username);

        if let Some(ref new_username) = rename {
            if let Some(&owner) = by_username.get(new_username) {
                if owner != id {
                    tracing::debug!(user_id = id, username = %new_username, "Rejected rename: username taken");
                    return Err(UserError::Conflict(new_username.clone()));
                }
            }
        }

        // All checks passed; nothing below can fail.
        if let Some(new_username) = rename {
            by_username.remove(&user.username);
            by_username.insert(new_username.clone(), id);
            user.username = new_username;
        }
        if let Some(age) = changes.age {
            user.age = age;
        }

        let updated = user.clone();
        debug_assert!(guard.is_consistent());

        tracing::info!(user_id = id, username = %updated.username, "Updated user");
        Ok(updated)
    }

    async fn delete(&self, id: u64) -> UserResult<User> {
        let mut guard = self.index.write().await;

        let removed = guard.by_id.remove(&id).ok_or(UserError::NotFound(id))?;
        let indexed = guard.by_username.remove(&removed.username);
        debug_assert_eq!(indexed, Some(id));
        debug_assert!(guard.is_consistent());

        tracing::info!(user_id = id, username = %removed.username, "Deleted user");
        Ok(removed)
    }

    async fn count(&self) -> UserResult<usize> {
        Ok(self.index.read().await.by_id.len())
    }
}
