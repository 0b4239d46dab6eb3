//! Users API: create/read/delete HTTP service over a single `users` table.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod routes;
pub mod state;
pub mod store;

pub use config::{Config, StoreKind};
pub use error::{AppError, ConfigError, RepositoryError};
pub use model::User;
pub use repository::{InMemoryUserRepository, PgUserRepository, UserRepository};
pub use routes::{app, common_routes, user_routes};
pub use state::AppState;
pub use store::{connect, ensure_database_exists, ensure_users_table};
