mod cancel;
mod create;
mod finish;
mod join;
mod leave;
mod list;
mod lobby;
mod mark;
mod reroll;
mod show;
mod start;
mod words;

use poise::CreateReply;

use crate::bingo::PlayerId;
use crate::utils::embed;
use crate::{Context, Data, Error};

pub fn all() -> Vec<poise::Command<Data, Error>> {
    vec![
        create::bingo_create(),
        words::bingo_addwords(),
        join::bingo_join(),
        leave::bingo_leave(),
        reroll::bingo_reroll(),
        mark::bingo_mark(),
        show::bingo_show(),
        show::bingo_card(),
        start::bingo_start(),
        finish::bingo_finish(),
        cancel::bingo_cancel(),
        list::bingo_list(),
        list::bingo_participants(),
        lobby::bingo_lobby(),
    ]
}

fn author(ctx: Context<'_>) -> PlayerId {
    ctx.author().id.into()
}

/// Ephemeral error reply used for every refused bingo operation.
async fn reply_error(ctx: Context<'_>, message: impl std::fmt::Display) -> Result<(), Error> {
    ctx.send(
        CreateReply::default()
            .embed(embed::error(&message.to_string()))
            .ephemeral(true),
    )
    .await?;
    Ok(())
}

async fn reply_ephemeral(ctx: Context<'_>, message: &str) -> Result<(), Error> {
    ctx.send(
        CreateReply::default()
            .embed(embed::success(message))
            .ephemeral(true),
    )
    .await?;
    Ok(())
}
