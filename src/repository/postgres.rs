//! PostgreSQL-backed repository. One parameterized statement per call against `users`.

use super::UserRepository;
use crate::error::RepositoryError;
use crate::model::User;
use async_trait::async_trait;
use sqlx::PgPool;

const SELECT_ALL: &str = "SELECT id, name, age, gender FROM users ORDER BY id";
const SELECT_BY_ID: &str = "SELECT id, name, age, gender FROM users WHERE id = $1";
const INSERT: &str = "INSERT INTO users (name, age, gender) VALUES ($1, $2, $3) RETURNING id";
const DELETE: &str = "DELETE FROM users WHERE id = $1";

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    age: i32,
    gender: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            name: row.name,
            gender: row.gender,
            age: row.age,
            id: row.id.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        PgUserRepository { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Ids are BIGSERIAL rendered in canonical decimal; any other spelling names no row.
fn parse_id(id: &str) -> Option<i64> {
    let key: i64 = id.parse().ok()?;
    (key.to_string() == id).then_some(key)
}

fn unavailable(action: &str, e: sqlx::Error) -> RepositoryError {
    RepositoryError::Unavailable(format!("unable to {} due to: {}", action, e))
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn get_all(&self) -> Result<Vec<User>, RepositoryError> {
        tracing::debug!(sql = %SELECT_ALL, "query");
        let rows: Vec<UserRow> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| unavailable("locate users", e))?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<User, RepositoryError> {
        let key = parse_id(id).ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        tracing::debug!(sql = %SELECT_BY_ID, id = key, "query");
        let row: Option<UserRow> = sqlx::query_as(SELECT_BY_ID)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => RepositoryError::NotFound(id.to_string()),
                e => unavailable("locate user", e),
            })?;
        row.map(User::from)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    async fn create(&self, user: User) -> Result<String, RepositoryError> {
        tracing::debug!(sql = %INSERT, "query");
        let id: i64 = sqlx::query_scalar(INSERT)
            .bind(&user.name)
            .bind(user.age)
            .bind(&user.gender)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| unavailable("create user", e))?;
        Ok(id.to_string())
    }

    async fn delete(&self, user: &User) -> Result<(), RepositoryError> {
        let key = parse_id(&user.id).ok_or_else(|| {
            RepositoryError::Unavailable(format!("unable to delete user due to: invalid id '{}'", user.id))
        })?;
        tracing::debug!(sql = %DELETE, id = key, "query");
        let result = sqlx::query(DELETE)
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| unavailable("delete user", e))?;
        // Not idempotent: a row that is already gone is a failure.
        match result.rows_affected() {
            1 => Ok(()),
            n => Err(RepositoryError::Unavailable(format!(
                "unable to delete user due to: {} rows affected",
                n
            ))),
        }
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| unavailable("reach database", e))?;
        Ok(())
    }
}
