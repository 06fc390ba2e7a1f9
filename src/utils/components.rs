use serenity::builder::{CreateActionRow, CreateButton, CreateInputText, CreateModal};
use serenity::model::application::{ButtonStyle, InputTextStyle};

use crate::bingo::GameName;

pub const JOIN: &str = "bingo_join";
pub const LEAVE: &str = "bingo_leave";
pub const START: &str = "bingo_start";
pub const CANCEL: &str = "bingo_cancel";
pub const CARD: &str = "bingo_card";
pub const MARK: &str = "bingo_mark";
pub const STATUS: &str = "bingo_status";
pub const FINISH: &str = "bingo_finish";
pub const MARK_MODAL: &str = "bingo_mark_modal";
pub const MARK_INPUT: &str = "bingo_mark_word";

/// `<action>:<game name>`. Game names may contain `:` so only the first one splits.
pub fn custom_id(action: &str, name: &GameName) -> String {
    format!("{action}:{name}")
}

pub fn split_custom_id(id: &str) -> Option<(&str, GameName)> {
    let (action, name) = id.split_once(':')?;
    if name.is_empty() {
        return None;
    }
    Some((action, GameName::new(name)))
}

fn button(action: &str, name: &GameName, label: &str, emoji: char, style: ButtonStyle) -> CreateButton {
    CreateButton::new(custom_id(action, name))
        .label(label)
        .emoji(emoji)
        .style(style)
}

fn lobby_row(name: &GameName, disabled: bool) -> CreateActionRow {
    CreateActionRow::Buttons(
        [
            button(JOIN, name, "참가", '🎯', ButtonStyle::Success),
            button(LEAVE, name, "나가기", '🚪', ButtonStyle::Danger),
            button(START, name, "시작", '🚀', ButtonStyle::Primary),
            button(CANCEL, name, "취소", '❌', ButtonStyle::Secondary),
        ]
        .into_iter()
        .map(|b| b.disabled(disabled))
        .collect(),
    )
}

fn game_row(name: &GameName, disabled: bool) -> CreateActionRow {
    CreateActionRow::Buttons(
        [
            button(CARD, name, "내 카드", '🎯', ButtonStyle::Primary),
            button(MARK, name, "단어 표시", '✏', ButtonStyle::Success),
            button(STATUS, name, "게임 상태", '📊', ButtonStyle::Secondary),
            button(FINISH, name, "게임 종료", '🛑', ButtonStyle::Danger),
        ]
        .into_iter()
        .map(|b| b.disabled(disabled))
        .collect(),
    )
}

pub fn lobby_components(name: &GameName) -> Vec<CreateActionRow> {
    vec![lobby_row(name, false)]
}

pub fn lobby_components_disabled(name: &GameName) -> Vec<CreateActionRow> {
    vec![lobby_row(name, true)]
}

pub fn game_components(name: &GameName) -> Vec<CreateActionRow> {
    vec![game_row(name, false)]
}

pub fn game_components_disabled(name: &GameName) -> Vec<CreateActionRow> {
    vec![game_row(name, true)]
}

pub fn mark_modal(name: &GameName) -> CreateModal {
    let input = CreateInputText::new(InputTextStyle::Short, "표시할 단어", MARK_INPUT)
        .placeholder("카드에 있는 단어를 입력하세요")
        .max_length(50)
        .required(true);

    CreateModal::new(custom_id(MARK_MODAL, name), "단어 표시")
        .components(vec![CreateActionRow::InputText(input)])
}
