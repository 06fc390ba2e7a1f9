use std::collections::BTreeMap;

use super::{GameError, GameName, GameSession, GameStatus, PlayerId};

/// All live games, keyed by name. Games are not persisted.
#[derive(Debug, Default)]
pub struct GameRegistry {
    games: BTreeMap<GameName, GameSession>,
}

impl GameRegistry {
    /// Registers a new game. A finished game only holds its name until
    /// someone creates a new game under it.
    pub fn create(&mut self, name: GameName, creator: PlayerId) -> Result<&mut GameSession, GameError> {
        if let Some(existing) = self.games.get(&name) {
            if existing.status() != GameStatus::Finished {
                return Err(GameError::DuplicateName(name));
            }
            tracing::info!("종료된 빙고 게임 정리: {name}");
        }
        let game = GameSession::new(name.clone(), creator);
        self.games.insert(name.clone(), game);
        self.get_mut(&name)
    }

    pub fn get(&self, name: &GameName) -> Result<&GameSession, GameError> {
        self.games
            .get(name)
            .ok_or_else(|| GameError::NotFound(name.clone()))
    }

    pub fn get_mut(&mut self, name: &GameName) -> Result<&mut GameSession, GameError> {
        self.games
            .get_mut(name)
            .ok_or_else(|| GameError::NotFound(name.clone()))
    }

    /// Removes a game in any status. Creator only.
    pub fn cancel(&mut self, name: &GameName, caller: PlayerId) -> Result<GameSession, GameError> {
        let game = self.get(name)?;
        if game.creator() != caller {
            return Err(GameError::NotCreator);
        }
        self.games
            .remove(name)
            .ok_or_else(|| GameError::NotFound(name.clone()))
    }

    /// Games sorted by name.
    pub fn list(&self) -> impl Iterator<Item = &GameSession> {
        self.games.values()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
