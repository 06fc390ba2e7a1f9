use poise::CreateReply;

use crate::bingo::GameName;
use crate::utils::embed;
use crate::{Context, Error};

use super::{author, reply_error};

async fn cancel_impl(ctx: Context<'_>, name: String) -> Result<(), Error> {
    let name = GameName::new(name);

    let result = {
        let mut games = ctx.data().games.write().await;
        games.cancel(&name, author(ctx))
    };

    match result {
        Ok(game) => {
            tracing::info!("빙고 게임 취소: {name}");
            ctx.send(CreateReply::default().embed(embed::cancelled(&game)))
                .await?;
            Ok(())
        }
        Err(e) => reply_error(ctx, e).await,
    }
}

/// 빙고 게임을 취소하고 삭제합니다 (생성자 전용)
#[poise::command(slash_command, guild_only)]
pub async fn bingo_cancel(
    ctx: Context<'_>,
    #[description = "게임 이름"] name: String,
) -> Result<(), Error> {
    cancel_impl(ctx, name).await
}
