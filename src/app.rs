//! Menu-driven session: play, save, show scores, quit.

use anyhow::Result;
use rand::Rng;
use tracing::{debug, info, instrument, warn};

use crate::games::noughts::{Board, Match, MatchOutcome};
use crate::leaderboard::LeaderboardStore;
use crate::menu::MenuChoice;
use crate::players::{HumanPlayer, RandomPlayer};
use crate::Console;

/// One interactive session at the console.
///
/// Remembers only the outcome of the most recent match; scores are never
/// added up across matches.
#[derive(Debug)]
pub struct App<R> {
    console: Console,
    store: LeaderboardStore,
    human: HumanPlayer,
    computer: RandomPlayer<R>,
    last_outcome: Option<MatchOutcome>,
}

impl<R: Rng> App<R> {
    /// Creates a session whose computer player draws moves from `rng`.
    pub fn new(console: Console, store: LeaderboardStore, rng: R) -> Self {
        Self {
            console,
            store,
            human: HumanPlayer::new("Player"),
            computer: RandomPlayer::new("Computer", rng),
            last_outcome: None,
        }
    }

    /// Outcome of the most recent match, if one has been played.
    pub fn last_outcome(&self) -> Option<MatchOutcome> {
        self.last_outcome
    }

    /// Runs the menu loop until the player quits or input ends.
    #[instrument(skip(self), fields(leaderboard = %self.store.path().display()))]
    pub fn run(&mut self) -> Result<()> {
        info!("Session started");
        self.welcome()?;

        let file_name = self
            .store
            .path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.store.path().display().to_string());

        loop {
            self.console.write(MenuChoice::render(&file_name))?;
            let Some(reply) = self.console.prompt("1, 2, 3 or q?  ")? else {
                debug!("Input closed at menu");
                break;
            };

            let Some(choice) = MenuChoice::parse(&reply) else {
                debug!(%reply, "Ignoring unknown menu choice");
                continue;
            };

            debug!(?choice, "Menu choice");
            let keep_going = match choice {
                MenuChoice::Play => self.play()?,
                MenuChoice::SaveScore => self.save_score()?,
                MenuChoice::ShowLeaderboard => self.show_leaderboard()?,
                MenuChoice::Quit => false,
            };
            if !keep_going {
                break;
            }
        }

        self.console.flush()?;
        info!("Session ended");
        Ok(())
    }

    fn welcome(&mut self) -> Result<()> {
        self.console
            .say("Welcome to the \"Unbeatable Noughts and Crosses\" game.")?;
        self.console.say("The board Layout is shown below:")?;
        self.console.write(Board::new().render())?;
        Ok(())
    }

    /// Plays one match. Returns false if input ended mid-match.
    fn play(&mut self) -> Result<bool> {
        match Match::new().play(&mut self.human, &mut self.computer, &mut self.console) {
            Ok(outcome) => {
                self.last_outcome = Some(outcome);
                Ok(true)
            }
            Err(_) if self.console.is_closed() => {
                debug!("Input closed mid-match");
                Ok(false)
            }
            Err(e) => {
                warn!(error = %e, "Match abandoned");
                self.console.say(format!("Match abandoned: {}", e))?;
                Ok(true)
            }
        }
    }

    /// Saves the last match score under a name read from the console.
    fn save_score(&mut self) -> Result<bool> {
        let Some(outcome) = self.last_outcome else {
            self.console
                .say("No score to save yet. Play a game first.")?;
            return Ok(true);
        };

        let Some(name) = self.console.prompt("Enter your name: ")? else {
            return Ok(false);
        };

        if let Err(e) = self.store.save(&name, outcome.score(), &mut self.console) {
            warn!(error = %e, "Failed to save score");
            self.console.say(format!("Could not save score: {}", e.kind))?;
        }
        Ok(true)
    }

    fn show_leaderboard(&mut self) -> Result<bool> {
        let leaderboard = self.store.load(&mut self.console)?;
        LeaderboardStore::display(&leaderboard, &mut self.console)?;
        Ok(true)
    }
}
