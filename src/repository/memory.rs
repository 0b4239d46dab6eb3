//! Map-backed repository for tests and local runs.

use super::UserRepository;
use crate::error::RepositoryError;
use crate::model::User;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Users keyed by id. New ids start at `len + 1` and skip any id still held,
/// so an earlier delete never lets a create replace another record. Single-writer use.
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    /// Takes ownership of the initial contents. Each record's `id` should match its key.
    pub fn new(users: HashMap<String, User>) -> Self {
        InMemoryUserRepository {
            users: Mutex::new(users),
        }
    }

    pub fn empty() -> Self {
        Self::new(HashMap::new())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, User>>, RepositoryError> {
        self.users
            .lock()
            .map_err(|_| RepositoryError::Unavailable("in-memory store poisoned".into()))
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_all(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.lock()?.values().cloned().collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<User, RepositoryError> {
        self.lock()?
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    async fn create(&self, mut user: User) -> Result<String, RepositoryError> {
        let mut users = self.lock()?;
        let mut next = users.len() + 1;
        while users.contains_key(&next.to_string()) {
            next += 1;
        }
        user.id = next.to_string();
        let id = user.id.clone();
        users.insert(id.clone(), user);
        Ok(id)
    }

    async fn delete(&self, user: &User) -> Result<(), RepositoryError> {
        match self.lock()?.remove(&user.id) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::Unavailable(
                "unable to delete user due to: 0 rows affected".into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> InMemoryUserRepository {
        let mut users = HashMap::new();
        users.insert(
            "1".to_string(),
            User {
                name: "James Bond".into(),
                gender: "male".into(),
                age: 44,
                id: "1".into(),
            },
        );
        InMemoryUserRepository::new(users)
    }

    #[tokio::test]
    async fn get_by_id_returns_matching_user() {
        let repo = seeded();
        let user = repo.get_by_id("1").await.unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.name, "James Bond");
    }

    #[tokio::test]
    async fn get_by_id_missing_is_not_found() {
        let repo = seeded();
        assert_eq!(
            repo.get_by_id("99").await,
            Err(RepositoryError::NotFound("99".into()))
        );
    }

    #[tokio::test]
    async fn create_assigns_id_and_ignores_callers() {
        let repo = seeded();
        let mut user = User::new("James Bond", "male", 44);
        user.id = "abc".into();
        let id = repo.create(user).await.unwrap();
        assert_eq!(id, "2");

        let stored = repo.get_by_id(&id).await.unwrap();
        assert_eq!(stored.name, "James Bond");
        assert_eq!(stored.gender, "male");
        assert_eq!(stored.age, 44);
        assert_eq!(stored.id, "2");
        assert!(repo.get_by_id("abc").await.is_err());
    }

    #[tokio::test]
    async fn delete_removes_user() {
        let repo = seeded();
        let user = repo.get_by_id("1").await.unwrap();
        repo.delete(&user).await.unwrap();
        assert!(matches!(repo.get_by_id("1").await, Err(RepositoryError::NotFound(_))));
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_absent_user_fails() {
        let repo = InMemoryUserRepository::empty();
        let user = User {
            id: "99".into(),
            ..User::new("Nobody", "male", 1)
        };
        assert!(matches!(repo.delete(&user).await, Err(RepositoryError::Unavailable(_))));

        let repo = seeded();
        let user = repo.get_by_id("1").await.unwrap();
        repo.delete(&user).await.unwrap();
        assert!(matches!(repo.delete(&user).await, Err(RepositoryError::Unavailable(_))));
    }

    #[tokio::test]
    async fn create_after_delete_keeps_other_users() {
        let repo = InMemoryUserRepository::empty();
        let a = repo.create(User::new("A", "female", 30)).await.unwrap();
        let b = repo.create(User::new("B", "male", 31)).await.unwrap();
        assert_eq!((a.as_str(), b.as_str()), ("1", "2"));

        let user_a = repo.get_by_id(&a).await.unwrap();
        repo.delete(&user_a).await.unwrap();
        let c = repo.create(User::new("C", "female", 32)).await.unwrap();

        assert_ne!(c, b);
        assert_eq!(repo.get_by_id(&b).await.unwrap().name, "B");
        assert_eq!(repo.get_by_id(&c).await.unwrap().name, "C");
        assert_eq!(repo.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn separate_instances_do_not_share_state() {
        let a = InMemoryUserRepository::empty();
        let b = InMemoryUserRepository::empty();
        a.create(User::new("A", "female", 30)).await.unwrap();
        assert_eq!(a.get_all().await.unwrap().len(), 1);
        assert!(b.get_all().await.unwrap().is_empty());
    }
}
