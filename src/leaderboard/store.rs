//! File-backed leaderboard store.

use derive_getters::Getters;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::Console;
use crate::leaderboard::{Leaderboard, LeaderboardError, LeaderboardErrorKind};

/// Reads and rewrites the leaderboard JSON file.
///
/// Every save reloads the file, changes one entry and rewrites the whole
/// mapping. There is no locking.
#[derive(Debug, Clone, Getters)]
pub struct LeaderboardStore {
    path: PathBuf,
}

impl LeaderboardStore {
    /// Creates a store for the file at `path`. Nothing is read until a load.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        debug!("Creating LeaderboardStore");
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Reads the file, failing on anything other than a valid mapping.
    ///
    /// # Errors
    ///
    /// Returns [`LeaderboardErrorKind::Missing`] if the file is absent,
    /// [`LeaderboardErrorKind::Decode`] if its contents are not a JSON object
    /// of integers, and [`LeaderboardErrorKind::Io`] for other read failures.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn try_load(&self) -> Result<Leaderboard, LeaderboardError> {
        let bytes = std::fs::read(&self.path)?;
        let leaderboard: Leaderboard = serde_json::from_slice(&bytes)
            .map_err(|e| LeaderboardError::new(LeaderboardErrorKind::Decode(e.to_string())))?;
        debug!(entries = leaderboard.len(), "Leaderboard loaded");
        Ok(leaderboard)
    }

    /// Reads the file, falling back to an empty leaderboard.
    ///
    /// A missing or unreadable file is reported on the console and never
    /// returned as an error. Only console write failures are.
    #[instrument(skip(self, console), fields(path = %self.path.display()))]
    pub fn load(&self, console: &mut Console) -> io::Result<Leaderboard> {
        match self.try_load() {
            Ok(leaderboard) => Ok(leaderboard),
            Err(err) => {
                match &err.kind {
                    LeaderboardErrorKind::Missing => {
                        info!("Leaderboard file not found");
                        console.say("Leaderboard file not found. Creating a new one.")?;
                    }
                    LeaderboardErrorKind::Decode(reason) => {
                        warn!(%reason, "Leaderboard file is corrupt");
                        console.say("Error decoding leaderboard file. Creating a new one.")?;
                    }
                    LeaderboardErrorKind::Io(reason) | LeaderboardErrorKind::Encode(reason) => {
                        warn!(%reason, "Leaderboard file unreadable");
                        console.say(format!(
                            "Error reading leaderboard file ({}). Creating a new one.",
                            reason
                        ))?;
                    }
                }
                Ok(Leaderboard::new())
            }
        }
    }

    /// Rewrites the whole file with `leaderboard`.
    ///
    /// # Errors
    ///
    /// Returns [`LeaderboardError`] if serialization or the write fails.
    #[instrument(skip(self, leaderboard), fields(path = %self.path.display(), entries = leaderboard.len()))]
    pub fn write(&self, leaderboard: &Leaderboard) -> Result<(), LeaderboardError> {
        let json = serde_json::to_string(leaderboard)
            .map_err(|e| LeaderboardError::new(LeaderboardErrorKind::Encode(e.to_string())))?;
        std::fs::write(&self.path, json)
            .map_err(|e| LeaderboardError::new(LeaderboardErrorKind::Io(e.to_string())))?;
        debug!("Leaderboard written");
        Ok(())
    }

    /// Records `score` under `name`, merging with whatever is on disk now.
    ///
    /// # Errors
    ///
    /// Returns [`LeaderboardError`] if the file cannot be written or the
    /// console cannot be written to.
    #[instrument(skip(self, console), fields(path = %self.path.display()))]
    pub fn save(
        &self,
        name: &str,
        score: i64,
        console: &mut Console,
    ) -> Result<Leaderboard, LeaderboardError> {
        let mut leaderboard = self.load(console)?;
        leaderboard.insert(name, score);
        self.write(&leaderboard)?;

        info!(%name, score, "Score saved");
        console.say(format!("Score {} saved for {}.", score, name))?;
        Ok(leaderboard)
    }

    /// Prints every entry in storage order.
    #[instrument(skip(leaderboard, console), fields(entries = leaderboard.len()))]
    pub fn display(leaderboard: &Leaderboard, console: &mut Console) -> io::Result<()> {
        console.write(leaderboard.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Transcript;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn console() -> (Console, Transcript) {
        let transcript = Transcript::new();
        (Console::new(Cursor::new(""), transcript.clone()), transcript)
    }

    #[test]
    fn test_try_load_distinguishes_missing_and_corrupt() {
        let dir = TempDir::new().unwrap();
        let store = LeaderboardStore::new(dir.path().join("leaderboard.txt"));
        assert!(store.try_load().unwrap_err().is_missing());

        std::fs::write(store.path(), "{not json").unwrap();
        let err = store.try_load().unwrap_err();
        assert!(matches!(err.kind, LeaderboardErrorKind::Decode(_)));
    }

    #[test]
    fn test_load_missing_reports_and_returns_empty() {
        let dir = TempDir::new().unwrap();
        let store = LeaderboardStore::new(dir.path().join("leaderboard.txt"));
        let (mut console, transcript) = console();

        let leaderboard = store.load(&mut console).unwrap();
        assert!(leaderboard.is_empty());
        assert_eq!(
            transcript.contents(),
            "Leaderboard file not found. Creating a new one.\n"
        );
    }

    #[test]
    fn test_load_invalid_utf8_is_a_decode_error() {
        let dir = TempDir::new().unwrap();
        let store = LeaderboardStore::new(dir.path().join("leaderboard.txt"));
        std::fs::write(store.path(), [0xff, 0xfe, 0x00]).unwrap();
        let (mut console, transcript) = console();

        assert!(store.load(&mut console).unwrap().is_empty());
        assert!(transcript.contents().starts_with("Error decoding leaderboard file."));
    }

    #[test]
    fn test_save_prints_confirmation() {
        let dir = TempDir::new().unwrap();
        let store = LeaderboardStore::new(dir.path().join("leaderboard.txt"));
        let (mut console, transcript) = console();

        store.save("Alice", 1, &mut console).unwrap();
        assert!(transcript.contents().ends_with("Score 1 saved for Alice.\n"));
        assert_eq!(
            std::fs::read_to_string(store.path()).unwrap(),
            r#"{"Alice":1}"#
        );
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let store = LeaderboardStore::new(dir.path().join("nope").join("leaderboard.txt"));
        let (mut console, _) = console();

        let err = store.save("Alice", 1, &mut console).unwrap_err();
        assert!(matches!(err.kind, LeaderboardErrorKind::Io(_)));
    }
}
