//! Leaderboard error types.

use derive_more::{Display, Error};

/// What went wrong reading or writing the leaderboard file.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum LeaderboardErrorKind {
    /// No file at the configured path.
    #[display("file not found")]
    Missing,
    /// File exists but is not a JSON object of integers.
    #[display("decode failed: {}", _0)]
    Decode(String),
    /// Mapping could not be serialized.
    #[display("encode failed: {}", _0)]
    Encode(String),
    /// Reading or writing the file failed.
    #[display("I/O failed: {}", _0)]
    Io(String),
}

/// Leaderboard error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Leaderboard error: {} at {}:{}", kind, file, line)]
pub struct LeaderboardError {
    /// What went wrong.
    pub kind: LeaderboardErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl LeaderboardError {
    /// Creates a new leaderboard error with caller location tracking.
    #[track_caller]
    pub fn new(kind: LeaderboardErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns true if the file was simply absent.
    pub fn is_missing(&self) -> bool {
        self.kind == LeaderboardErrorKind::Missing
    }
}

impl From<std::io::Error> for LeaderboardError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::new(LeaderboardErrorKind::Missing)
        } else {
            Self::new(LeaderboardErrorKind::Io(err.to_string()))
        }
    }
}
