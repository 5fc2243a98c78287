use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use log::{debug, warn};

use crate::data_cleaning::FriendshipRecord;
use crate::error::{NetworkError, Result};

/// Undirected friendship graph keyed by user label.
///
/// Neighbor sets are ordered, so every traversal visits friends in lexicographic order.
/// Friendships are always stored on both sides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialNetwork {
    adjacency: BTreeMap<String, BTreeSet<String>>,
}

impl SocialNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a network from loaded rows. Unlike [SocialNetwork::add_friendship], a row
    /// introduces both of its users; self-friendship rows are skipped.
    pub fn from_records(records: &[FriendshipRecord]) -> Self {
        let mut network = Self::new();
        for record in records {
            network.add_user(&record.user);
            if let Some(friend) = record.friend.as_deref() {
                network.add_user(friend);
                if let Err(err) = network.add_friendship(&record.user, friend) {
                    warn!("skipping row: {}", err);
                }
            }
        }
        network
    }

    /// Adds `label` with no friends. Re-adding an existing user changes nothing.
    pub fn add_user(&mut self, label: &str) {
        if !self.adjacency.contains_key(label) {
            self.adjacency.insert(label.to_string(), BTreeSet::new());
            debug!("user '{}' added", label);
        }
    }

    /// Links two existing users. Nothing is mutated unless both exist and differ.
    pub fn add_friendship(&mut self, a: &str, b: &str) -> Result<()> {
        self.require_users(&[a, b])?; // checked before touching either side
        if a == b {
            return Err(NetworkError::SelfFriendship(a.to_string()));
        }
        for (user, friend) in [(a, b), (b, a)] {
            if let Some(friends) = self.adjacency.get_mut(user) {
                friends.insert(friend.to_string());
            }
        } // stored on both sides
        debug!("friendship added between '{}' and '{}'", a, b);
        Ok(())
    }

    /// Direct friends of `label`. An isolated user yields an empty set; an unknown one is an error.
    pub fn friends(&self, label: &str) -> Result<&BTreeSet<String>> {
        self.adjacency
            .get(label)
            .ok_or_else(|| NetworkError::UnknownUser(vec![label.to_string()]))
    }

    pub fn contains_user(&self, label: &str) -> bool {
        self.adjacency.contains_key(label)
    }

    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn user_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn friendship_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2 // each friendship counted twice
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Cost of travelling the friendship `u`-`v`. Every friendship costs the same.
    pub fn edge_weight(&self, _u: &str, _v: &str) -> usize {
        1
    }

    pub(crate) fn neighbors(&self, label: &str) -> impl Iterator<Item = &String> {
        self.adjacency.get(label).into_iter().flatten()
    }

    pub(crate) fn require_users(&self, labels: &[&str]) -> Result<()> {
        let mut missing: Vec<String> = Vec::new();
        for label in labels {
            if !self.contains_user(label) && !missing.iter().any(|m| m == label) {
                missing.push(label.to_string());
            }
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(NetworkError::UnknownUser(missing))
        }
    }
}

impl fmt::Display for SocialNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.adjacency.is_empty() {
            return writeln!(f, "The network is empty.");
        }
        for (user, friends) in &self.adjacency {
            let friends = friends
                .iter()
                .map(|friend| format!("'{}'", friend))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "'{}' is friends with: {{{}}}", user, friends)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(user: &str, friend: Option<&str>) -> FriendshipRecord {
        FriendshipRecord {
            user: user.to_string(),
            friend: friend.map(str::to_string),
        }
    }

    #[test]
    fn test_add_user_is_idempotent() {
        let mut network = SocialNetwork::new();
        network.add_user("Alice");
        network.add_user("Bob");
        network.add_friendship("Alice", "Bob").unwrap();
        network.add_user("Alice");

        assert_eq!(network.user_count(), 2);
        assert!(network.friends("Alice").unwrap().contains("Bob"));
    }

    #[test]
    fn test_friendship_is_symmetric() {
        let mut network = SocialNetwork::new();
        network.add_user("Alice");
        network.add_user("Bob");
        network.add_friendship("Alice", "Bob").unwrap();
        network.add_friendship("Bob", "Alice").unwrap(); // already friends, no change

        assert!(network.friends("Alice").unwrap().contains("Bob"));
        assert!(network.friends("Bob").unwrap().contains("Alice"));
        assert_eq!(network.friendship_count(), 1);
    }

    #[test]
    fn test_friendship_with_unknown_user_leaves_network_untouched() {
        let mut network = SocialNetwork::new();
        network.add_user("Alice");
        let before = network.clone();

        let err = network.add_friendship("Alice", "Nobody").unwrap_err();
        assert_eq!(err, NetworkError::UnknownUser(vec!["Nobody".into()]));
        assert_eq!(network, before);

        let err = network.add_friendship("Ghost", "Nobody").unwrap_err();
        assert_eq!(
            err,
            NetworkError::UnknownUser(vec!["Ghost".into(), "Nobody".into()])
        );
        assert_eq!(network, before); // both missing, still no partial insert
    }

    #[test]
    fn test_self_friendship_rejected() {
        let mut network = SocialNetwork::new();
        network.add_user("Alice");

        let err = network.add_friendship("Alice", "Alice").unwrap_err();
        assert_eq!(err, NetworkError::SelfFriendship("Alice".into()));
        assert!(network.friends("Alice").unwrap().is_empty());
    }

    #[test]
    fn test_friends_distinguishes_unknown_from_isolated() {
        let mut network = SocialNetwork::new();
        network.add_user("Grace");

        assert!(network.friends("Grace").unwrap().is_empty());
        assert_eq!(
            network.friends("grace").unwrap_err(),
            NetworkError::UnknownUser(vec!["grace".into()])
        ); // labels are case-sensitive
    }

    #[test]
    fn test_from_records() {
        let records = vec![
            record("Alice", Some("Bob")),
            record("Bob", Some("Charlie")),
            record("Grace", None),
            record("Eve", Some("Eve")),
        ];
        let network = SocialNetwork::from_records(&records);

        assert_eq!(network.user_count(), 5);
        assert_eq!(network.friendship_count(), 2);
        assert_eq!(network.friends("Bob").unwrap().len(), 2);
        assert!(network.friends("Eve").unwrap().is_empty());
    }

    #[test]
    fn test_display() {
        let mut network = SocialNetwork::new();
        assert_eq!(network.to_string(), "The network is empty.\n");

        network.add_user("Bob");
        network.add_user("Alice");
        network.add_user("Grace");
        network.add_friendship("Alice", "Bob").unwrap();
        assert_eq!(
            network.to_string(),
            "'Alice' is friends with: {'Bob'}\n\
             'Bob' is friends with: {'Alice'}\n\
             'Grace' is friends with: {}\n"
        );
    }
}
