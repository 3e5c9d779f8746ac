//! Session address book
//!
//! Maps contact names to phone numbers for the lifetime of one session.

use serde::{Deserialize, Serialize};

/// A single address book entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Contact name, case-sensitive
    pub name: String,
    /// Phone number, stored as given
    pub phone: String,
}

/// Outcome of inserting a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    Added,
    AlreadyExists,
}

/// In-memory mapping from name to phone that keeps insertion order
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    entries: Vec<Contact>,
}

impl ContactStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new contact; an existing name is left untouched
    pub fn insert(&mut self, name: &str, phone: &str) -> Insertion {
        if self.contains(name) {
            return Insertion::AlreadyExists;
        }

        self.entries.push(Contact {
            name: name.to_string(),
            phone: phone.to_string(),
        });
        Insertion::Added
    }

    /// Overwrite the phone of an existing contact.
    /// Returns `false` when the name is absent.
    pub fn update(&mut self, name: &str, phone: &str) -> bool {
        match self.entries.iter_mut().find(|c| c.name == name) {
            Some(contact) => {
                contact.phone = phone.to_string();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.phone.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate contacts in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
