//! HTTP handlers translating requests into repository calls.

pub mod user;
pub use user::*;
