use crate::bingo::GameName;
use crate::{Context, Error};

use super::{author, reply_ephemeral, reply_error};

async fn leave_impl(ctx: Context<'_>, name: String) -> Result<(), Error> {
    let name = GameName::new(name);

    let result = {
        let mut games = ctx.data().games.write().await;
        games
            .get_mut(&name)
            .and_then(|game| game.leave(author(ctx)))
    };

    match result {
        Ok(()) => reply_ephemeral(ctx, &format!("`{name}` 게임에서 나갔습니다.")).await,
        Err(e) => reply_error(ctx, e).await,
    }
}

/// 빙고 게임에서 나갑니다
#[poise::command(slash_command, guild_only)]
pub async fn bingo_leave(
    ctx: Context<'_>,
    #[description = "게임 이름"] name: String,
) -> Result<(), Error> {
    leave_impl(ctx, name).await
}
