//! User domain entity

/// Store-assigned identifier for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

/// A registered (or about to be registered) user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// `None` until the store assigns one on save
    pub id: Option<UserId>,
    pub name: String,
}

impl User {
    /// A user that has not been persisted yet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_has_no_id() {
        let user = User::new("Laura");
        assert_eq!(user.id, None);
        assert_eq!(user.name, "Laura");
    }

    #[test]
    fn new_user_keeps_empty_name() {
        let user = User::new("");
        assert!(user.name.is_empty());
    }
}
