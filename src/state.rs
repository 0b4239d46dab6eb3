//! Shared application state for all routes.

use crate::repository::UserRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Chosen once at startup; handlers only see the trait.
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn new<R: UserRepository + 'static>(users: R) -> Self {
        AppState {
            users: Arc::new(users),
        }
    }
}
