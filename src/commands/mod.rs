pub mod bingo;
mod help;
pub mod vote;

use crate::{Data, Error};

pub fn all() -> Vec<poise::Command<Data, Error>> {
    let mut cmds = vec![help::help()];
    cmds.extend(bingo::all());
    cmds.extend(vote::all());
    cmds
}
