//! Storage abstraction over user records, with a PostgreSQL and an in-memory implementation.

mod memory;
mod postgres;

pub use memory::InMemoryUserRepository;
pub use postgres::PgUserRepository;

use crate::error::RepositoryError;
use crate::model::User;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<User>, RepositoryError>;

    /// `RepositoryError::NotFound` when no record carries `id`.
    async fn get_by_id(&self, id: &str) -> Result<User, RepositoryError>;

    /// Stores `user` under a store-assigned id, ignoring `user.id`. Returns the new id.
    async fn create(&self, user: User) -> Result<String, RepositoryError>;

    async fn delete(&self, user: &User) -> Result<(), RepositoryError>;

    /// Readiness probe for the backing store.
    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}
