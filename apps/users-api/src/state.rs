//! Application state management

use domain_users::InMemoryUserRepository;

/// Shared application state
///
/// The repository is the only copy of user data; every clone shares it.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub repository: InMemoryUserRepository,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        Self {
            config,
            repository: InMemoryUserRepository::new(),
        }
    }
}
