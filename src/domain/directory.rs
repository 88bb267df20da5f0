//! User directory.
//!
//! The set of other known users available to start a conversation with.
//! Refreshed wholesale on each fetch; never diffed or cached across
//! fetches.

use serde::{Deserialize, Serialize};

/// One selectable directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub id: i64,
    pub username: String,
}

/// Rendered set of directory entries, excluding the caller.
#[derive(Debug, Default)]
pub struct Directory {
    entries: Vec<DirectoryEntry>,
}

impl Directory {
    /// Replace the entire set with a fresh fetch, filtering out the
    /// caller's own identity.
    pub fn replace(&mut self, users: Vec<DirectoryEntry>, self_id: i64) {
        self.entries = users.into_iter().filter(|u| u.id != self_id).collect();
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    pub fn contains(&self, user_id: i64) -> bool {
        self.entries.iter().any(|u| u.id == user_id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn user(id: i64, name: &str) -> DirectoryEntry {
        DirectoryEntry {
            id,
            username: name.into(),
        }
    }

    #[test]
    fn test_replace_excludes_self() {
        let mut directory = Directory::default();
        directory.replace(vec![user(7, "alice"), user(9, "bob")], 7);

        assert_eq!(directory.entries(), &[user(9, "bob")]);
        assert!(!directory.contains(7));
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut directory = Directory::default();
        directory.replace(vec![user(9, "bob")], 7);
        directory.replace(vec![user(11, "carol")], 7);

        assert_eq!(directory.entries(), &[user(11, "carol")]);
    }

    #[test]
    fn test_replace_with_only_self_yields_empty_set() {
        let mut directory = Directory::default();
        directory.replace(vec![user(7, "alice")], 7);

        assert!(directory.is_empty());
    }
}
