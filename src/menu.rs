//! Main menu options.

use strum::{EnumIter, EnumString, IntoEnumIterator};

/// One entry of the main menu, selected by typing its key exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString)]
pub enum MenuChoice {
    /// Play one match.
    #[strum(serialize = "1")]
    Play,
    /// Save the most recent match score.
    #[strum(serialize = "2")]
    SaveScore,
    /// Show the saved scores.
    #[strum(serialize = "3")]
    ShowLeaderboard,
    /// Leave the program.
    #[strum(serialize = "q")]
    Quit,
}

impl MenuChoice {
    /// Key the player types to pick this option.
    pub fn key(self) -> &'static str {
        match self {
            Self::Play => "1",
            Self::SaveScore => "2",
            Self::ShowLeaderboard => "3",
            Self::Quit => "q",
        }
    }

    /// Menu line text, naming the leaderboard file where relevant.
    pub fn description(self, file_name: &str) -> String {
        match self {
            Self::Play => "Play the game".to_string(),
            Self::SaveScore => format!("Save score in file '{}'", file_name),
            Self::ShowLeaderboard => {
                format!("Load and display the scores from the '{}'", file_name)
            }
            Self::Quit => "End the program".to_string(),
        }
    }

    /// Parses a reply, or `None` if it is not exactly one of the keys.
    pub fn parse(reply: &str) -> Option<Self> {
        reply.parse().ok()
    }

    /// Full menu text.
    pub fn render(file_name: &str) -> String {
        let mut out = String::from("Enter one of the following options:\n");
        for choice in Self::iter() {
            out.push_str(&format!("{} - {}\n", choice.key(), choice.description(file_name)));
        }
        out
    }
}
