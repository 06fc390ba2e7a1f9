use poise::CreateReply;

use crate::bingo::GameName;
use crate::utils::embed;
use crate::{Context, Error};

use super::reply_error;

async fn list_impl(ctx: Context<'_>) -> Result<(), Error> {
    let e = {
        let games = ctx.data().games.read().await;
        embed::game_list(games.list())
    };
    ctx.send(CreateReply::default().embed(e).ephemeral(true))
        .await?;
    Ok(())
}

async fn participants_impl(ctx: Context<'_>, name: String) -> Result<(), Error> {
    let name = GameName::new(name);

    let result = {
        let games = ctx.data().games.read().await;
        games.get(&name).map(embed::participants)
    };

    match result {
        Ok(e) => {
            ctx.send(CreateReply::default().embed(e).ephemeral(true))
                .await?;
            Ok(())
        }
        Err(e) => reply_error(ctx, e).await,
    }
}

/// 빙고 게임 목록을 표시합니다
#[poise::command(slash_command, guild_only)]
pub async fn bingo_list(ctx: Context<'_>) -> Result<(), Error> {
    list_impl(ctx).await
}

/// 빙고 게임 참가자를 표시합니다
#[poise::command(slash_command, guild_only)]
pub async fn bingo_participants(
    ctx: Context<'_>,
    #[description = "게임 이름"] name: String,
) -> Result<(), Error> {
    participants_impl(ctx, name).await
}
