use thiserror::Error;

use super::game::{MAX_DIMENSION, MAX_WORD_CHARS};
use super::{GameName, GameStatus};

/// Every way a bingo operation can be refused. Shown to users through `Display`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("이미 `{0}` 이름의 게임이 있습니다.")]
    DuplicateName(GameName),
    #[error("`{0}` 게임을 찾을 수 없습니다.")]
    NotFound(GameName),
    #[error("게임 생성자만 할 수 있는 작업입니다.")]
    NotCreator,
    #[error("현재 게임 상태({0})에서는 할 수 없는 작업입니다.")]
    InvalidStatus(GameStatus),
    #[error("단어 수는 N*N 형태여야 합니다 (예: 9, 16, 25). 입력한 단어: {0}개")]
    InvalidWordCount(usize),
    #[error("단어는 최대 {max}개(10x10)까지 등록할 수 있습니다. 입력한 단어: {0}개", max = MAX_DIMENSION * MAX_DIMENSION)]
    TooManyWords(usize),
    #[error("`{0}` 단어가 너무 깁니다. 단어는 최대 {max}자까지 가능합니다.", max = MAX_WORD_CHARS)]
    WordTooLong(String),
    #[error("이미 게임에 참가했습니다.")]
    AlreadyJoined,
    #[error("아직 게임에 참가하지 않았습니다.")]
    NotJoined,
    #[error("생성자는 게임에서 나갈 수 없습니다. 게임 취소를 사용해주세요.")]
    CreatorCannotLeave,
    #[error("카드에서 `{0}` 단어를 찾을 수 없습니다.")]
    WordNotFound(String),
    #[error("`{0}` 단어는 이미 표시했습니다.")]
    AlreadyMarked(String),
    #[error("단어가 아직 등록되지 않았습니다.")]
    InsufficientWords,
    #[error("게임을 시작하려면 최소 1명의 참가자가 필요합니다.")]
    InsufficientPlayers,
}
