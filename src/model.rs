//! User record as stored and as exchanged over HTTP.

use serde::{Deserialize, Serialize};

/// A person using the system. `id` is assigned by the store on create.
///
/// Every field defaults to its zero value when absent from a request body, so
/// a body that carries none of the known keys decodes to an empty user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub name: String,
    pub gender: String,
    pub age: i32,
    pub id: String,
}

impl User {
    pub fn new(name: impl Into<String>, gender: impl Into<String>, age: i32) -> Self {
        User {
            name: name.into(),
            gender: gender.into(),
            age,
            id: String::new(),
        }
    }

    /// True when all four fields hold their zero value.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.gender.is_empty() && self.age == 0 && self.id.is_empty()
    }
}
