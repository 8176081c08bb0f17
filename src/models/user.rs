//! User model
//!
//! A person record in the directory. Dates of birth are kept as the string the
//! caller supplied; formatting belongs to whoever renders them.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;

/// A person in the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned once by the store
    #[serde(default)]
    pub id: UserId,

    pub forename: String,

    pub surname: String,

    /// Pre-normalized date string, stored verbatim
    #[serde(default)]
    pub date_of_birth: String,

    pub email: String,

    #[serde(default)]
    pub is_active: bool,
}

impl User {
    /// Create a new user whose id will be assigned on insert
    pub fn new(
        forename: impl Into<String>,
        surname: impl Into<String>,
        date_of_birth: impl Into<String>,
        email: impl Into<String>,
        is_active: bool,
    ) -> Self {
        Self {
            id: UserId::UNASSIGNED,
            forename: forename.into(),
            surname: surname.into(),
            date_of_birth: date_of_birth.into(),
            email: email.into(),
            is_active,
        }
    }

    /// Same user with an explicit id
    pub fn with_id(mut self, id: impl Into<UserId>) -> Self {
        self.id = id.into();
        self
    }

    /// "Forename Surname", the snapshot written into audit entries
    pub fn full_name(&self) -> String {
        format!("{} {}", self.forename, self.surname)
    }

    /// Overwrite every mutable field from `other`, keeping this user's id
    pub fn apply(&mut self, other: &User) {
        self.forename = other.forename.clone();
        self.surname = other.surname.clone();
        self.date_of_birth = other.date_of_birth.clone();
        self.email = other.email.clone();
        self.is_active = other.is_active;
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.forename, self.surname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_unassigned() {
        let user = User::new("Peter", "Parker", "01/01/2000", "spidey@example.com", true);
        assert!(!user.id.is_assigned());
        assert_eq!(user.full_name(), "Peter Parker");
        assert_eq!(user.to_string(), "Peter Parker");
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut user = User::new("Old", "Name", "01/01/1990", "old@example.com", true).with_id(3);
        let incoming = User::new("New", "Name", "", "new@example.com", false).with_id(99);

        user.apply(&incoming);

        assert_eq!(user.id, UserId::new(3));
        assert_eq!(user.forename, "New");
        assert_eq!(user.date_of_birth, "");
        assert_eq!(user.email, "new@example.com");
        assert!(!user.is_active);
    }

    #[test]
    fn test_deserialize_without_id() {
        let json = r#"{"forename":"A","surname":"B","email":"a@b.c"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, UserId::UNASSIGNED);
        assert!(!user.is_active);
        assert_eq!(user.date_of_birth, "");
    }
}
