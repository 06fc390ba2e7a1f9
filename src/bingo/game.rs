use std::fmt;

use rand::Rng;

use super::{GameError, GameName, PlayerCard, PlayerId};

/// Largest card side. A 10x10 card of the longest words still fits in one
/// embed description once rendered.
pub const MAX_DIMENSION: usize = 10;
pub const MAX_WORD_CHARS: usize = 15;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameStatus {
    #[default]
    Preparing,
    Started,
    Finished,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preparing => write!(f, "준비 중"),
            Self::Started => write!(f, "진행 중"),
            Self::Finished => write!(f, "종료됨"),
        }
    }
}

/// A single bingo game: its word pool, the joined players and their cards.
///
/// Every mutating method either fully applies or returns an error without
/// touching any state.
#[derive(Clone, Debug)]
pub struct GameSession {
    name: GameName,
    creator: PlayerId,
    status: GameStatus,
    words: Vec<String>,
    dimension: usize,
    players: Vec<(PlayerId, PlayerCard)>,
}

impl GameSession {
    pub fn new(name: GameName, creator: PlayerId) -> Self {
        Self {
            name,
            creator,
            status: GameStatus::Preparing,
            words: Vec::new(),
            dimension: 0,
            players: Vec::new(),
        }
    }

    pub fn name(&self) -> &GameName {
        &self.name
    }

    pub fn creator(&self) -> PlayerId {
        self.creator
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Players in join order.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.iter().map(|(id, _)| *id)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn has_player(&self, user: PlayerId) -> bool {
        self.players.iter().any(|(id, _)| *id == user)
    }

    pub fn card(&self, user: PlayerId) -> Option<&PlayerCard> {
        self.players
            .iter()
            .find(|(id, _)| *id == user)
            .map(|(_, card)| card)
    }

    fn card_mut(&mut self, user: PlayerId) -> Option<&mut PlayerCard> {
        self.players
            .iter_mut()
            .find(|(id, _)| *id == user)
            .map(|(_, card)| card)
    }

    fn has_words(&self) -> bool {
        self.dimension > 0 && self.words.len() >= self.dimension * self.dimension
    }

    fn ensure_creator(&self, caller: PlayerId) -> Result<(), GameError> {
        if caller != self.creator {
            return Err(GameError::NotCreator);
        }
        Ok(())
    }

    fn ensure_status(&self, expected: GameStatus) -> Result<(), GameError> {
        if self.status != expected {
            return Err(GameError::InvalidStatus(self.status));
        }
        Ok(())
    }

    pub fn set_words(&mut self, caller: PlayerId, words: Vec<String>) -> Result<usize, GameError> {
        self.set_words_with(caller, words, &mut rand::thread_rng())
    }

    /// Replaces the word pool. Cards that already exist are redrawn from the
    /// new pool so every grid stays a permutation of `words`.
    pub fn set_words_with<R: Rng + ?Sized>(
        &mut self,
        caller: PlayerId,
        words: Vec<String>,
        rng: &mut R,
    ) -> Result<usize, GameError> {
        self.ensure_creator(caller)?;
        self.ensure_status(GameStatus::Preparing)?;

        let count = words.len();
        let dimension = (count as f64).sqrt().floor() as usize;
        if count == 0 || dimension * dimension != count {
            return Err(GameError::InvalidWordCount(count));
        }
        if dimension > MAX_DIMENSION {
            return Err(GameError::TooManyWords(count));
        }
        if let Some(word) = words.iter().find(|w| w.chars().count() > MAX_WORD_CHARS) {
            return Err(GameError::WordTooLong(word.clone()));
        }

        self.words = words;
        self.dimension = dimension;
        for (_, card) in &mut self.players {
            *card = PlayerCard::generate(&self.words, dimension, rng);
        }
        Ok(dimension)
    }

    pub fn join(&mut self, user: PlayerId) -> Result<&PlayerCard, GameError> {
        self.join_with(user, &mut rand::thread_rng())
    }

    pub fn join_with<R: Rng + ?Sized>(
        &mut self,
        user: PlayerId,
        rng: &mut R,
    ) -> Result<&PlayerCard, GameError> {
        self.ensure_status(GameStatus::Preparing)?;
        if self.has_player(user) {
            return Err(GameError::AlreadyJoined);
        }
        if !self.has_words() {
            return Err(GameError::InsufficientWords);
        }

        let card = PlayerCard::generate(&self.words, self.dimension, rng);
        self.players.push((user, card));
        Ok(&self.players[self.players.len() - 1].1)
    }

    pub fn regenerate_card(&mut self, user: PlayerId) -> Result<&PlayerCard, GameError> {
        self.regenerate_card_with(user, &mut rand::thread_rng())
    }

    pub fn regenerate_card_with<R: Rng + ?Sized>(
        &mut self,
        user: PlayerId,
        rng: &mut R,
    ) -> Result<&PlayerCard, GameError> {
        self.ensure_status(GameStatus::Preparing)?;
        let card = PlayerCard::generate(&self.words, self.dimension, rng);
        let slot = self.card_mut(user).ok_or(GameError::NotJoined)?;
        *slot = card;
        Ok(slot)
    }

    /// Marks `word` on the player's card. Returns `true` when the mark completes
    /// a line. A win does not end the game.
    pub fn mark_word(&mut self, user: PlayerId, word: &str) -> Result<bool, GameError> {
        self.ensure_status(GameStatus::Started)?;
        let card = self.card_mut(user).ok_or(GameError::NotJoined)?;
        card.mark(word)
    }

    pub fn start(&mut self, caller: PlayerId) -> Result<(), GameError> {
        self.ensure_creator(caller)?;
        self.ensure_status(GameStatus::Preparing)?;
        if self.players.is_empty() {
            return Err(GameError::InsufficientPlayers);
        }
        if !self.has_words() {
            return Err(GameError::InsufficientWords);
        }
        self.status = GameStatus::Started;
        Ok(())
    }

    pub fn finish(&mut self, caller: PlayerId) -> Result<(), GameError> {
        self.ensure_creator(caller)?;
        if self.status == GameStatus::Finished {
            return Err(GameError::InvalidStatus(self.status));
        }
        self.status = GameStatus::Finished;
        Ok(())
    }

    pub fn leave(&mut self, user: PlayerId) -> Result<(), GameError> {
        self.ensure_status(GameStatus::Preparing)?;
        if user == self.creator {
            return Err(GameError::CreatorCannotLeave);
        }
        let idx = self
            .players
            .iter()
            .position(|(id, _)| *id == user)
            .ok_or(GameError::NotJoined)?;
        self.players.remove(idx);
        Ok(())
    }

    /// Players whose card currently shows a completed line.
    pub fn winners(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|(_, card)| card.has_bingo())
            .map(|(id, _)| *id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const A: PlayerId = PlayerId(1);
    const B: PlayerId = PlayerId(2);
    const C: PlayerId = PlayerId(3);

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn game() -> GameSession {
        GameSession::new(GameName::new("G1"), A)
    }

    fn ready_game() -> GameSession {
        let mut g = game();
        g.set_words(A, words(&["a", "b", "c", "d"])).unwrap();
        g
    }

    #[test]
    fn test_new_game_defaults() {
        let g = game();
        assert_eq!(g.status(), GameStatus::Preparing);
        assert!(g.words().is_empty());
        assert_eq!(g.dimension(), 0);
        assert_eq!(g.player_count(), 0);
    }

    #[test]
    fn test_set_words_perfect_squares() {
        for k in 0..=30usize {
            let mut g = game();
            let list: Vec<String> = (0..k).map(|i| i.to_string()).collect();
            let result = g.set_words(A, list);
            let root = (k as f64).sqrt() as usize;
            if k > 0 && root * root == k {
                assert_eq!(result, Ok(root), "k = {k}");
                assert_eq!(g.dimension(), root);
            } else {
                assert_eq!(result, Err(GameError::InvalidWordCount(k)), "k = {k}");
                assert_eq!(g.dimension(), 0);
                assert!(g.words().is_empty());
            }
        }
    }

    #[test]
    fn test_set_words_failure_keeps_previous_pool() {
        let mut g = ready_game();
        assert!(g.set_words(A, words(&["x", "y", "z"])).is_err());
        assert_eq!(g.words(), &words(&["a", "b", "c", "d"])[..]);
        assert_eq!(g.dimension(), 2);
    }

    #[test]
    fn test_set_words_bounds_card_size() {
        let mut g = ready_game();
        let full: Vec<String> = (0..100).map(|i| format!("{i:0>15}")).collect();
        assert_eq!(g.set_words(A, full), Ok(10));

        let too_many: Vec<String> = (0..121).map(|i| i.to_string()).collect();
        assert_eq!(g.set_words(A, too_many), Err(GameError::TooManyWords(121)));

        let long = "가".repeat(MAX_WORD_CHARS + 1);
        assert_eq!(
            g.set_words(A, vec![long.clone()]),
            Err(GameError::WordTooLong(long))
        );
        assert_eq!(g.dimension(), 10);
    }

    #[test]
    fn test_set_words_requires_creator_and_preparing() {
        let mut g = game();
        assert_eq!(g.set_words(B, words(&["a"])), Err(GameError::NotCreator));

        let mut g = ready_game();
        g.join(B).unwrap();
        g.start(A).unwrap();
        assert_eq!(
            g.set_words(A, words(&["a"])),
            Err(GameError::InvalidStatus(GameStatus::Started))
        );
    }

    #[test]
    fn test_set_words_redraws_existing_cards() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut g = ready_game();
        g.join_with(B, &mut rng).unwrap();

        let new_pool = words(&["1", "2", "3", "4", "5", "6", "7", "8", "9"]);
        g.set_words_with(A, new_pool.clone(), &mut rng).unwrap();

        let card = g.card(B).unwrap();
        assert_eq!(card.dimension(), 3);
        let mut got: Vec<String> = card.words().map(str::to_string).collect();
        got.sort();
        assert_eq!(got, new_pool);
    }

    #[test]
    fn test_join_rules() {
        let mut g = game();
        assert_eq!(g.join(B).err(), Some(GameError::InsufficientWords));

        let mut g = ready_game();
        assert!(g.join(B).is_ok());
        assert_eq!(g.join(B).err(), Some(GameError::AlreadyJoined));

        g.start(A).unwrap();
        assert_eq!(
            g.join(C).err(),
            Some(GameError::InvalidStatus(GameStatus::Started))
        );
    }

    #[test]
    fn test_players_in_join_order() {
        let mut g = ready_game();
        g.join(C).unwrap();
        g.join(A).unwrap();
        g.join(B).unwrap();
        assert_eq!(g.players().collect::<Vec<_>>(), vec![C, A, B]);
    }

    #[test]
    fn test_regenerate_resets_marks_and_keeps_words() {
        let mut rng = StdRng::seed_from_u64(5);
        let pool: Vec<String> = (0..25).map(|i| format!("w{i}")).collect();
        let mut g = game();
        g.set_words(A, pool.clone()).unwrap();
        let before = g.join_with(B, &mut rng).unwrap().clone();

        let after = g.regenerate_card_with(B, &mut rng).unwrap().clone();
        assert_ne!(before.grid(), after.grid());
        assert_eq!(after.marked_count(), 0);

        let mut got: Vec<String> = after.words().map(str::to_string).collect();
        got.sort();
        let mut expected = pool;
        expected.sort();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_regenerate_rules() {
        let mut g = ready_game();
        assert_eq!(g.regenerate_card(B).err(), Some(GameError::NotJoined));
        g.join(B).unwrap();
        g.start(A).unwrap();
        assert_eq!(
            g.regenerate_card(B).err(),
            Some(GameError::InvalidStatus(GameStatus::Started))
        );
    }

    #[test]
    fn test_mark_word_requires_started_and_membership() {
        let mut g = ready_game();
        g.join(B).unwrap();
        assert_eq!(
            g.mark_word(B, "a"),
            Err(GameError::InvalidStatus(GameStatus::Preparing))
        );
        g.start(A).unwrap();
        assert_eq!(g.mark_word(C, "a"), Err(GameError::NotJoined));
        assert_eq!(g.mark_word(B, "a"), Ok(false));
    }

    #[test]
    fn test_win_does_not_finish_game() {
        let mut g = ready_game();
        g.join(B).unwrap();
        g.start(A).unwrap();
        let row = g.card(B).unwrap().grid()[0].clone();
        assert_eq!(g.mark_word(B, &row[0]), Ok(false));
        assert_eq!(g.mark_word(B, &row[1]), Ok(true));
        assert_eq!(g.status(), GameStatus::Started);
        assert_eq!(g.winners(), vec![B]);
    }

    #[test]
    fn test_start_needs_players_before_words() {
        let mut g = game();
        assert_eq!(g.start(A), Err(GameError::InsufficientPlayers));
        let mut g = ready_game();
        assert_eq!(g.start(A), Err(GameError::InsufficientPlayers));
        assert_eq!(g.status(), GameStatus::Preparing);
    }

    #[test]
    fn test_start_only_by_creator_once() {
        let mut g = ready_game();
        g.join(B).unwrap();
        assert_eq!(g.start(B), Err(GameError::NotCreator));
        assert_eq!(g.start(A), Ok(()));
        assert_eq!(
            g.start(A),
            Err(GameError::InvalidStatus(GameStatus::Started))
        );
    }

    #[test]
    fn test_finish_from_preparing_and_started() {
        let mut g = game();
        assert_eq!(g.finish(B), Err(GameError::NotCreator));
        assert_eq!(g.finish(A), Ok(()));
        assert_eq!(g.status(), GameStatus::Finished);
        assert_eq!(
            g.finish(A),
            Err(GameError::InvalidStatus(GameStatus::Finished))
        );

        let mut g = ready_game();
        g.join(B).unwrap();
        g.start(A).unwrap();
        assert_eq!(g.finish(A), Ok(()));
        assert_eq!(
            g.mark_word(B, "a"),
            Err(GameError::InvalidStatus(GameStatus::Finished))
        );
    }

    #[test]
    fn test_leave_rules() {
        let mut g = ready_game();
        g.join(A).unwrap();
        g.join(B).unwrap();

        assert_eq!(g.leave(A), Err(GameError::CreatorCannotLeave));
        assert_eq!(g.leave(C), Err(GameError::NotJoined));
        assert_eq!(g.leave(B), Ok(()));
        assert!(!g.has_player(B));
        assert!(g.card(B).is_none());

        g.join(B).unwrap();
        g.start(A).unwrap();
        assert_eq!(
            g.leave(B),
            Err(GameError::InvalidStatus(GameStatus::Started))
        );
    }

    #[test]
    fn test_cards_do_not_share_storage() {
        let mut g = ready_game();
        g.join(B).unwrap();
        g.join(C).unwrap();
        g.start(A).unwrap();
        let w = g.card(B).unwrap().grid()[0][0].clone();
        g.mark_word(B, &w).unwrap();
        assert_eq!(g.card(C).unwrap().marked_count(), 0);
        assert_eq!(g.words().len(), 4);
    }
}
