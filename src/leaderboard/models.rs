//! Leaderboard mapping and its JSON shape.

use derive_getters::Getters;
use derive_new::new;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::instrument;

/// One name and the score last saved under it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct LeaderboardEntry {
    /// Player name, unique within a leaderboard.
    name: String,
    /// Score from the most recent save.
    score: i64,
}

/// Name to score mapping, kept in insertion order.
///
/// Serialized as a flat JSON object such as `{"Alice":1,"Bob":-1}`.
/// Names are unique: inserting an existing name overwrites its score in
/// place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Creates an empty leaderboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name`'s score, replacing any earlier one.
    #[instrument(skip(self, name))]
    pub fn insert(&mut self, name: impl Into<String>, score: i64) {
        let name = name.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.score = score,
            None => self.entries.push(LeaderboardEntry::new(name, score)),
        }
    }

    /// Returns the score saved for `name`.
    pub fn get(&self, name: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.score)
    }

    /// Entries in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &LeaderboardEntry> {
        self.entries.iter()
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Formats the leaderboard for display, one `name: score` line per entry.
    pub fn display(&self) -> String {
        let mut out = String::from("Leaderboard:\n");
        for entry in &self.entries {
            out.push_str(&format!("{}: {}\n", entry.name, entry.score));
        }
        out
    }
}

impl Serialize for Leaderboard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|e| (&e.name, e.score)))
    }
}

struct LeaderboardVisitor;

impl<'de> Visitor<'de> for LeaderboardVisitor {
    type Value = Leaderboard;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("an object mapping names to integer scores")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Leaderboard, A::Error> {
        let mut leaderboard = Leaderboard::new();
        while let Some((name, score)) = map.next_entry::<String, i64>()? {
            leaderboard.insert(name, score);
        }
        Ok(leaderboard)
    }
}

impl<'de> Deserialize<'de> for Leaderboard {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LeaderboardVisitor)
    }
}
