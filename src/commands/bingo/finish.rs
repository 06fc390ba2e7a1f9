use poise::CreateReply;

use crate::bingo::GameName;
use crate::utils::embed;
use crate::{Context, Error};

use super::{author, reply_error};

async fn finish_impl(ctx: Context<'_>, name: String) -> Result<(), Error> {
    let name = GameName::new(name);

    let result = {
        let mut games = ctx.data().games.write().await;
        games.get_mut(&name).and_then(|game| {
            game.finish(author(ctx))?;
            Ok(embed::finished(game))
        })
    };

    match result {
        Ok(summary) => {
            tracing::info!("빙고 게임 종료: {name}");
            ctx.send(CreateReply::default().embed(summary)).await?;
            Ok(())
        }
        Err(e) => reply_error(ctx, e).await,
    }
}

/// 빙고 게임을 종료합니다 (생성자 전용)
#[poise::command(slash_command, guild_only)]
pub async fn bingo_finish(
    ctx: Context<'_>,
    #[description = "게임 이름"] name: String,
) -> Result<(), Error> {
    finish_impl(ctx, name).await
}
