pub mod bingo;
pub mod commands;
pub mod config;
pub mod events;
pub mod utils;
pub mod vote;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

pub struct Data {
    pub games: bingo::Games,
    pub vote_db: Option<vote::VoteDb>,
}
