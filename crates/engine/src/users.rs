//! The module contains the `User` record and its collection.

use uuid::Uuid;

use crate::{LedgerError, ResultLedger};

/// A registered user.
///
/// Users only carry a display name. Expenses reference them by id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    /// Stable identifier, generated once at creation.
    pub id: Uuid,
    pub name: String,
}

impl User {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
        }
    }
}

/// The users collection.
///
/// Backed by a `Vec` so list responses preserve insertion order.
#[derive(Debug, Default)]
pub struct Users {
    records: Vec<User>,
}

impl Users {
    pub fn all(&self) -> &[User] {
        &self.records
    }

    pub fn find(&self, id: Uuid) -> ResultLedger<&User> {
        self.records
            .iter()
            .find(|user| user.id == id)
            .ok_or(LedgerError::UserNotFound)
    }

    pub fn find_mut(&mut self, id: Uuid) -> ResultLedger<&mut User> {
        self.records
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or(LedgerError::UserNotFound)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.records.iter().any(|user| user.id == id)
    }

    pub fn insert(&mut self, user: User) -> &User {
        self.records.push(user);
        &self.records[self.records.len() - 1]
    }

    pub fn remove(&mut self, id: Uuid) -> ResultLedger<User> {
        match self.records.iter().position(|user| user.id == id) {
            Some(index) => Ok(self.records.remove(index)),
            None => Err(LedgerError::UserNotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_find() {
        let mut users = Users::default();
        let id = users.insert(User::new(String::from("Ann"))).id;

        let user = users.find(id).unwrap();
        assert_eq!(user.name, "Ann");
        assert!(users.contains(id));
    }

    #[test]
    fn remove_unknown_id() {
        let mut users = Users::default();
        assert_eq!(users.remove(Uuid::new_v4()), Err(LedgerError::UserNotFound));
    }

    #[test]
    fn all_preserves_insertion_order() {
        let mut users = Users::default();
        users.insert(User::new(String::from("Ann")));
        users.insert(User::new(String::from("Bob")));

        let names: Vec<&str> = users.all().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Bob"]);
    }
}
