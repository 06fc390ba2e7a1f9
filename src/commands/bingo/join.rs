use poise::CreateReply;

use crate::bingo::GameName;
use crate::utils::embed;
use crate::{Context, Error};

use super::{author, reply_error};

async fn join_impl(ctx: Context<'_>, name: String) -> Result<(), Error> {
    let name = GameName::new(name);

    let result = {
        let mut games = ctx.data().games.write().await;
        games
            .get_mut(&name)
            .and_then(|game| game.join(author(ctx)).cloned())
    };

    match result {
        Ok(card) => {
            ctx.send(
                CreateReply::default()
                    .embed(embed::card(&format!("🎯 `{name}` 게임에 참가했습니다! 내 카드:"), &card))
                    .ephemeral(true),
            )
            .await?;
            Ok(())
        }
        Err(e) => reply_error(ctx, e).await,
    }
}

/// 빙고 게임에 참가합니다
#[poise::command(slash_command, guild_only)]
pub async fn bingo_join(
    ctx: Context<'_>,
    #[description = "게임 이름"] name: String,
) -> Result<(), Error> {
    join_impl(ctx, name).await
}
