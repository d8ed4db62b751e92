//! User — an author account that posts are attributed to.

use serde::{Deserialize, Serialize};

use crate::id::UserId;

/// A registered user.
///
/// Email is unique across all users and name/email lengths are bounded;
/// both rules are enforced by the store, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub age: i64,
    pub email: String,
}

impl User {
    /// Create a builder for constructing a [`User`].
    #[must_use]
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }
}

/// Step-by-step builder for [`User`].
#[derive(Debug, Default)]
pub struct UserBuilder {
    id: Option<UserId>,
    name: Option<String>,
    age: Option<i64>,
    email: Option<String>,
}

impl UserBuilder {
    #[must_use]
    pub fn id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn age(mut self, age: i64) -> Self {
        self.age = Some(age);
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Consume the builder and return a [`User`].
    ///
    /// A fresh random id is generated unless one was supplied.
    #[must_use]
    pub fn build(self) -> User {
        User {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            age: self.age.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_user_with_all_fields() {
        let user = User::builder()
            .name("Ada")
            .age(36)
            .email("ada@example.com")
            .build();

        assert_eq!(user.name, "Ada");
        assert_eq!(user.age, 36);
        assert_eq!(user.email, "ada@example.com");
    }

    #[test]
    fn should_generate_fresh_id_when_not_supplied() {
        let a = User::builder().name("Ada").build();
        let b = User::builder().name("Ada").build();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn should_keep_supplied_id() {
        let id = UserId::new();
        let user = User::builder().id(id).name("Ada").build();
        assert_eq!(user.id, id);
    }

    #[test]
    fn should_serialize_with_flat_field_names() {
        let user = User::builder()
            .name("Ada")
            .age(36)
            .email("ada@example.com")
            .build();

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], user.id.to_string());
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["age"], 36);
        assert_eq!(json["email"], "ada@example.com");
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let user = User::builder()
            .name("Grace")
            .age(45)
            .email("grace@example.com")
            .build();

        let json = serde_json::to_string(&user).unwrap();
        let parsed: User = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, user);
    }
}
