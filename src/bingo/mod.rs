pub mod card;
pub mod error;
pub mod game;
pub mod registry;

use std::fmt;
use std::sync::Arc;

use tokio::sync::RwLock;

pub use card::PlayerCard;
pub use error::GameError;
pub use game::{GameSession, GameStatus};
pub use registry::GameRegistry;

/// Discord user id as seen by the bingo core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u64);

impl From<serenity::model::id::UserId> for PlayerId {
    fn from(id: serenity::model::id::UserId) -> Self {
        Self(id.get())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PlayerId {
    /// `<@id>` mention used in embeds.
    pub fn mention(&self) -> String {
        format!("<@{}>", self.0)
    }
}

/// Name a game is registered under.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameName(String);

impl GameName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GameName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

pub type Games = Arc<RwLock<GameRegistry>>;

pub fn new_games() -> Games {
    Arc::new(RwLock::new(GameRegistry::default()))
}

/// Splits the comma separated word list accepted by `/bingo_addwords`.
pub fn parse_words(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_words_drops_blanks() {
        assert_eq!(parse_words(" a, b ,,c , "), vec!["a", "b", "c"]);
        assert!(parse_words(" , ,").is_empty());
    }

    #[test]
    fn test_game_name_trims() {
        assert_eq!(GameName::new("  G1 ").as_str(), "G1");
        assert_eq!(GameName::from("G1"), GameName::new("G1"));
    }

    #[test]
    fn test_player_mention() {
        assert_eq!(PlayerId(42).mention(), "<@42>");
    }
}
