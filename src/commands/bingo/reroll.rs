use poise::CreateReply;

use crate::bingo::GameName;
use crate::utils::embed;
use crate::{Context, Error};

use super::{author, reply_error};

async fn reroll_impl(ctx: Context<'_>, name: String) -> Result<(), Error> {
    let name = GameName::new(name);

    let result = {
        let mut games = ctx.data().games.write().await;
        games
            .get_mut(&name)
            .and_then(|game| game.regenerate_card(author(ctx)).cloned())
    };

    match result {
        Ok(card) => {
            ctx.send(
                CreateReply::default()
                    .embed(embed::card("🔄 카드를 다시 만들었습니다", &card))
                    .ephemeral(true),
            )
            .await?;
            Ok(())
        }
        Err(e) => reply_error(ctx, e).await,
    }
}

/// 내 빙고 카드를 다시 만듭니다
#[poise::command(slash_command, guild_only)]
pub async fn bingo_reroll(
    ctx: Context<'_>,
    #[description = "게임 이름"] name: String,
) -> Result<(), Error> {
    reroll_impl(ctx, name).await
}
